use super::{ram_index, rom_byte};

/// MBC1: 5-bit ROM bank register, a 2-bit secondary register that feeds
/// either the upper ROM bank bits or the RAM bank, and a banking mode.
pub(crate) struct Mbc1 {
    rom: Vec<u8>,
    pub(super) ram: Vec<u8>,
    rom_banks: usize,
    ram_enable: bool,
    /// Never 0: writing 0 selects bank 1.
    rom_bank_low5: u8,
    bank_high2: u8,
    /// Mode 1 applies `bank_high2` to the 0x0000 window and to RAM.
    banking_mode: u8,
}

impl Mbc1 {
    pub(super) fn new(rom: Vec<u8>, rom_banks: usize, ram_size: usize) -> Self {
        Self {
            rom,
            ram: vec![0x00; ram_size],
            rom_banks,
            ram_enable: false,
            rom_bank_low5: 1,
            bank_high2: 0,
            banking_mode: 0,
        }
    }

    /// Power-on register state; RAM contents are kept.
    pub(super) fn reset_control(&mut self) {
        self.ram_enable = false;
        self.rom_bank_low5 = 1;
        self.bank_high2 = 0;
        self.banking_mode = 0;
    }

    fn lower_window_bank(&self) -> usize {
        if self.banking_mode == 1 {
            (self.bank_high2 as usize) << 5
        } else {
            0
        }
    }

    fn upper_window_bank(&self) -> usize {
        ((self.bank_high2 as usize) << 5) | self.rom_bank_low5 as usize
    }

    fn ram_bank(&self) -> usize {
        if self.banking_mode == 1 {
            self.bank_high2 as usize
        } else {
            0
        }
    }

    pub(super) fn read_rom(&self, addr: u16) -> u8 {
        let bank = if addr < 0x4000 {
            self.lower_window_bank()
        } else {
            self.upper_window_bank()
        };
        rom_byte(&self.rom, self.rom_banks, bank, addr)
    }

    pub(super) fn write_control(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => {
                self.ram_enable = (value & 0x0F) == 0x0A;
                log::trace!("GB MBC1: RAM enable={}", self.ram_enable);
            }
            0x2000..=0x3FFF => {
                self.rom_bank_low5 = value & 0x1F;
                if self.rom_bank_low5 == 0 {
                    self.rom_bank_low5 = 1;
                }
                log::trace!("GB MBC1: ROM bank -> {}", self.upper_window_bank());
            }
            0x4000..=0x5FFF => {
                self.bank_high2 = value & 0x03;
            }
            0x6000..=0x7FFF => {
                self.banking_mode = value & 0x01;
            }
            _ => {}
        }
    }

    pub(super) fn read_ram(&self, addr: u16) -> u8 {
        if !self.ram_enable {
            return 0xFF;
        }
        match ram_index(&self.ram, self.ram_bank(), addr) {
            Some(i) => self.ram[i],
            None => 0xFF,
        }
    }

    pub(super) fn write_ram(&mut self, addr: u16, value: u8) {
        if !self.ram_enable {
            return;
        }
        if let Some(i) = ram_index(&self.ram, self.ram_bank(), addr) {
            self.ram[i] = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every byte of bank N holds N.
    fn banked_rom(banks: usize) -> Vec<u8> {
        (0..banks).flat_map(|b| vec![b as u8; 0x4000]).collect()
    }

    #[test]
    fn bank_zero_selects_bank_one() {
        let mut mbc = Mbc1::new(banked_rom(8), 8, 0);
        mbc.write_control(0x2000, 0x00);
        assert_eq!(mbc.read_rom(0x4000), 1);
        mbc.write_control(0x2000, 0x05);
        assert_eq!(mbc.read_rom(0x4000), 5);
        assert_eq!(mbc.read_rom(0x0000), 0);
    }

    #[test]
    fn out_of_range_banks_wrap() {
        let mut mbc = Mbc1::new(banked_rom(4), 4, 0);
        mbc.write_control(0x2000, 0x06);
        assert_eq!(mbc.read_rom(0x4000), 2);
    }

    #[test]
    fn high_bits_and_mode_one() {
        let mut mbc = Mbc1::new(banked_rom(128), 128, 4 * 0x2000);
        mbc.write_control(0x2000, 0x02);
        mbc.write_control(0x4000, 0x01);
        assert_eq!(mbc.read_rom(0x4000), 0x22);
        assert_eq!(mbc.read_rom(0x0000), 0);

        mbc.write_control(0x6000, 0x01);
        assert_eq!(mbc.read_rom(0x0000), 0x20);

        // RAM banking follows the secondary register in mode 1 only.
        mbc.write_control(0x0000, 0x0A);
        mbc.write_ram(0xA000, 0x11);
        mbc.write_control(0x6000, 0x00);
        assert_eq!(mbc.read_ram(0xA000), 0x00);
        mbc.write_ram(0xA000, 0x22);
        mbc.write_control(0x6000, 0x01);
        assert_eq!(mbc.read_ram(0xA000), 0x11);
    }

    #[test]
    fn reset_control_restores_power_on_banks() {
        let mut mbc = Mbc1::new(banked_rom(128), 128, 4 * 0x2000);
        mbc.write_control(0x0000, 0x0A);
        mbc.write_ram(0xA000, 0x5A);
        mbc.write_control(0x2000, 0x03);
        mbc.write_control(0x4000, 0x02);
        mbc.write_control(0x6000, 0x01);
        assert_eq!(mbc.read_rom(0x0000), 0x40);

        mbc.reset_control();
        assert_eq!(mbc.read_rom(0x0000), 0);
        assert_eq!(mbc.read_rom(0x4000), 1);
        assert_eq!(mbc.read_ram(0xA000), 0xFF);
        // Mode 0 again, so RAM bank 0 with the data written earlier.
        mbc.write_control(0x0000, 0x0A);
        assert_eq!(mbc.read_ram(0xA000), 0x5A);
    }

    #[test]
    fn ram_is_gated_by_enable() {
        let mut mbc = Mbc1::new(banked_rom(2), 2, 0x2000);
        mbc.write_ram(0xA123, 0x42);
        assert_eq!(mbc.read_ram(0xA123), 0xFF);
        mbc.write_control(0x0000, 0x0A);
        assert_eq!(mbc.read_ram(0xA123), 0x00);
        mbc.write_ram(0xA123, 0x42);
        assert_eq!(mbc.read_ram(0xA123), 0x42);
        mbc.write_control(0x0000, 0x00);
        assert_eq!(mbc.read_ram(0xA123), 0xFF);
    }
}
