use super::rom_byte;

const RAM_NIBBLES: usize = 512;

/// MBC2: 4-bit ROM bank register and 512 half-bytes of built-in RAM.
///
/// Control writes anywhere in 0x0000-0x3FFF are routed by address bit 8:
/// clear selects RAM enable, set selects the ROM bank.
pub(crate) struct Mbc2 {
    rom: Vec<u8>,
    /// One nibble per byte, stored in the low half.
    pub(super) ram: Vec<u8>,
    rom_banks: usize,
    ram_enable: bool,
    rom_bank: u8,
}

impl Mbc2 {
    pub(super) fn new(rom: Vec<u8>, rom_banks: usize) -> Self {
        Self {
            rom,
            ram: vec![0x00; RAM_NIBBLES],
            rom_banks,
            ram_enable: false,
            rom_bank: 1,
        }
    }

    pub(super) fn reset_control(&mut self) {
        self.ram_enable = false;
        self.rom_bank = 1;
    }

    pub(super) fn read_rom(&self, addr: u16) -> u8 {
        let bank = if addr < 0x4000 {
            0
        } else {
            self.rom_bank as usize
        };
        rom_byte(&self.rom, self.rom_banks, bank, addr)
    }

    pub(super) fn write_control(&mut self, addr: u16, value: u8) {
        if addr >= 0x4000 {
            return;
        }
        if (addr & 0x0100) == 0 {
            self.ram_enable = (value & 0x0F) == 0x0A;
            log::trace!("GB MBC2: RAM enable={}", self.ram_enable);
        } else {
            self.rom_bank = value & 0x0F;
            if self.rom_bank == 0 {
                self.rom_bank = 1;
            }
            log::trace!("GB MBC2: ROM bank -> {}", self.rom_bank);
        }
    }

    /// The 512 nibbles repeat across the whole 0xA000-0xBFFF window; the
    /// upper half of each byte reads as 1s.
    pub(super) fn read_ram(&self, addr: u16) -> u8 {
        if !self.ram_enable {
            return 0xFF;
        }
        self.ram[(addr as usize) & (RAM_NIBBLES - 1)] | 0xF0
    }

    pub(super) fn write_ram(&mut self, addr: u16, value: u8) {
        if !self.ram_enable {
            return;
        }
        self.ram[(addr as usize) & (RAM_NIBBLES - 1)] = value & 0x0F;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banked_rom(banks: usize) -> Vec<u8> {
        (0..banks).flat_map(|b| vec![b as u8; 0x4000]).collect()
    }

    #[test]
    fn address_bit_eight_routes_control_writes() {
        let mut mbc = Mbc2::new(banked_rom(16), 16);
        // Bit 8 clear: RAM enable, the ROM bank is untouched.
        mbc.write_control(0x0000, 0x0A);
        assert_eq!(mbc.read_rom(0x4000), 1);
        assert_eq!(mbc.read_ram(0xA000), 0xF0);

        // Bit 8 set: ROM bank select.
        mbc.write_control(0x2100, 0x07);
        assert_eq!(mbc.read_rom(0x4000), 7);
        mbc.write_control(0x0100, 0x00);
        assert_eq!(mbc.read_rom(0x4000), 1);
    }

    #[test]
    fn ram_stores_nibbles_and_repeats() {
        let mut mbc = Mbc2::new(banked_rom(2), 2);
        mbc.write_control(0x0000, 0x0A);
        mbc.write_ram(0xA010, 0xAB);
        assert_eq!(mbc.read_ram(0xA010), 0xFB);
        assert_eq!(mbc.read_ram(0xA210), 0xFB);
        assert_eq!(mbc.read_ram(0xBE10), 0xFB);
    }
}
