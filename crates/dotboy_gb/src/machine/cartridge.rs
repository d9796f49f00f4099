mod header;
mod mbc1;
mod mbc2;
mod mbc3;
mod rom_only;
mod rtc;

pub use header::{logo_matches, CartridgeHeader, MapperKind, NINTENDO_LOGO};

use header::{RAM_BANK_SIZE, ROM_BANK_SIZE};
use mbc1::Mbc1;
use mbc2::Mbc2;
use mbc3::Mbc3;
use rom_only::RomOnly;

use crate::GbError;

/// Cartridge mappers. Each variant owns its ROM image, external RAM and
/// bank selection state.
pub(crate) enum Cartridge {
    RomOnly(RomOnly),
    Mbc1(Mbc1),
    Mbc2(Mbc2),
    Mbc3(Mbc3),
}

impl Cartridge {
    /// Placeholder used before a ROM is loaded: every read returns 0xFF.
    pub(super) fn empty() -> Self {
        Cartridge::RomOnly(RomOnly::new(vec![0xFF; 2 * ROM_BANK_SIZE], 0))
    }

    pub(super) fn from_rom(rom: &[u8]) -> Result<(Self, CartridgeHeader), GbError> {
        let header = CartridgeHeader::parse(rom)?;
        if !header.header_checksum_ok {
            log::warn!("GB cartridge: header checksum mismatch for '{}'", header.title);
        }

        let rom_banks = header.rom_banks.max(rom.len().div_ceil(ROM_BANK_SIZE));
        if rom.len() < header.rom_banks * ROM_BANK_SIZE {
            log::warn!(
                "GB cartridge: image is {} bytes but header declares {} banks; padding with 0xFF",
                rom.len(),
                header.rom_banks
            );
        }
        let mut image = rom.to_vec();
        image.resize(rom_banks * ROM_BANK_SIZE, 0xFF);

        let cart = match header.mapper {
            MapperKind::RomOnly => Cartridge::RomOnly(RomOnly::new(image, header.ram_size)),
            MapperKind::Mbc1 => Cartridge::Mbc1(Mbc1::new(image, rom_banks, header.ram_size)),
            MapperKind::Mbc2 => Cartridge::Mbc2(Mbc2::new(image, rom_banks)),
            MapperKind::Mbc3 => Cartridge::Mbc3(Mbc3::new(
                image,
                rom_banks,
                header.ram_size,
                header.has_rtc,
            )),
        };

        log::info!(
            "GB cartridge: '{}' type=0x{:02X} ({:?}) rom_banks={} ram={} battery={} rtc={}",
            header.title,
            header.cartridge_type,
            header.mapper,
            rom_banks,
            header.ram_size,
            header.has_battery,
            header.has_rtc,
        );

        Ok((cart, header))
    }

    /// Read from the ROM window (0x0000-0x7FFF) or the RAM window
    /// (0xA000-0xBFFF).
    pub(super) fn read(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x7FFF => match self {
                Cartridge::RomOnly(m) => m.read_rom(addr),
                Cartridge::Mbc1(m) => m.read_rom(addr),
                Cartridge::Mbc2(m) => m.read_rom(addr),
                Cartridge::Mbc3(m) => m.read_rom(addr),
            },
            0xA000..=0xBFFF => match self {
                Cartridge::RomOnly(m) => m.read_ram(addr),
                Cartridge::Mbc1(m) => m.read_ram(addr),
                Cartridge::Mbc2(m) => m.read_ram(addr),
                Cartridge::Mbc3(m) => m.read_ram(addr),
            },
            _ => 0xFF,
        }
    }

    /// Writes to the ROM window only reach the mapper's control registers.
    pub(super) fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x7FFF => match self {
                Cartridge::RomOnly(_) => {
                    log::trace!("GB cartridge: ROM-only write 0x{value:02X} to 0x{addr:04X}")
                }
                Cartridge::Mbc1(m) => m.write_control(addr, value),
                Cartridge::Mbc2(m) => m.write_control(addr, value),
                Cartridge::Mbc3(m) => m.write_control(addr, value),
            },
            0xA000..=0xBFFF => match self {
                Cartridge::RomOnly(m) => m.write_ram(addr, value),
                Cartridge::Mbc1(m) => m.write_ram(addr, value),
                Cartridge::Mbc2(m) => m.write_ram(addr, value),
                Cartridge::Mbc3(m) => m.write_ram(addr, value),
            },
            _ => {}
        }
    }

    /// Return the mapper registers to their power-on values, keeping
    /// external RAM and the RTC.
    pub(super) fn reset_control(&mut self) {
        match self {
            Cartridge::RomOnly(_) => {}
            Cartridge::Mbc1(m) => m.reset_control(),
            Cartridge::Mbc2(m) => m.reset_control(),
            Cartridge::Mbc3(m) => m.reset_control(),
        }
    }

    /// Advance cartridge-side clocks (the MBC3 RTC).
    pub(super) fn tick(&mut self, cycles: u32) {
        if let Cartridge::Mbc3(m) = self {
            m.tick(cycles);
        }
    }

    pub(super) fn ram(&self) -> &[u8] {
        match self {
            Cartridge::RomOnly(m) => &m.ram,
            Cartridge::Mbc1(m) => &m.ram,
            Cartridge::Mbc2(m) => &m.ram,
            Cartridge::Mbc3(m) => &m.ram,
        }
    }

    pub(super) fn ram_mut(&mut self) -> &mut [u8] {
        match self {
            Cartridge::RomOnly(m) => &mut m.ram,
            Cartridge::Mbc1(m) => &mut m.ram,
            Cartridge::Mbc2(m) => &mut m.ram,
            Cartridge::Mbc3(m) => &mut m.ram,
        }
    }
}

/// Byte at `offset` inside ROM bank `bank`, wrapping the bank index to
/// the number of banks present.
#[inline]
fn rom_byte(rom: &[u8], rom_banks: usize, bank: usize, offset: u16) -> u8 {
    let bank = bank % rom_banks.max(1);
    let index = bank * ROM_BANK_SIZE + (offset as usize & (ROM_BANK_SIZE - 1));
    rom.get(index).copied().unwrap_or(0xFF)
}

/// Index into external RAM for `addr` in RAM bank `bank`, wrapping to the
/// RAM actually present. `None` when the cartridge has no RAM.
#[inline]
fn ram_index(ram: &[u8], bank: usize, addr: u16) -> Option<usize> {
    if ram.is_empty() {
        return None;
    }
    let offset = bank * RAM_BANK_SIZE + (addr as usize - 0xA000);
    Some(offset % ram.len())
}
