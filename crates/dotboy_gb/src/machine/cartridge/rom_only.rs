use super::ram_index;

/// 32 KiB cartridge with no bank controller, optionally carrying up to
/// 8 KiB of always-enabled RAM.
pub(crate) struct RomOnly {
    rom: Vec<u8>,
    pub(super) ram: Vec<u8>,
}

impl RomOnly {
    pub(super) fn new(rom: Vec<u8>, ram_size: usize) -> Self {
        Self {
            rom,
            ram: vec![0x00; ram_size],
        }
    }

    #[inline]
    pub(super) fn read_rom(&self, addr: u16) -> u8 {
        self.rom.get(addr as usize).copied().unwrap_or(0xFF)
    }

    pub(super) fn read_ram(&self, addr: u16) -> u8 {
        match ram_index(&self.ram, 0, addr) {
            Some(i) => self.ram[i],
            None => 0xFF,
        }
    }

    pub(super) fn write_ram(&mut self, addr: u16, value: u8) {
        if let Some(i) = ram_index(&self.ram, 0, addr) {
            self.ram[i] = value;
        }
    }
}
