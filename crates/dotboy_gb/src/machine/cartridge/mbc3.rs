use super::rtc::Rtc;
use super::{ram_index, rom_byte};

/// MBC3: 7-bit ROM bank, up to four RAM banks, and an optional real-time
/// clock whose registers replace RAM when selected with 0x08-0x0C.
pub(crate) struct Mbc3 {
    rom: Vec<u8>,
    pub(super) ram: Vec<u8>,
    rom_banks: usize,
    /// Never 0: writing 0 selects bank 1.
    rom_bank: u8,
    /// RAM bank number (0-3) or RTC register select (0x08-0x0C).
    ram_rtc_select: u8,
    ram_enable: bool,
    rtc: Option<Rtc>,
}

impl Mbc3 {
    pub(super) fn new(rom: Vec<u8>, rom_banks: usize, ram_size: usize, has_rtc: bool) -> Self {
        Self {
            rom,
            ram: vec![0x00; ram_size],
            rom_banks,
            rom_bank: 1,
            ram_rtc_select: 0,
            ram_enable: false,
            rtc: has_rtc.then(Rtc::default),
        }
    }

    /// Power-on register state. RAM and the clock keep running.
    pub(super) fn reset_control(&mut self) {
        self.rom_bank = 1;
        self.ram_rtc_select = 0;
        self.ram_enable = false;
    }

    pub(super) fn tick(&mut self, cycles: u32) {
        if let Some(rtc) = self.rtc.as_mut() {
            rtc.tick(cycles);
        }
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
        match addr {
            0x0000..=0x1FFF => {
                self.ram_enable = (value & 0x0F) == 0x0A;
                log::trace!("GB MBC3: RAM/RTC enable={}", self.ram_enable);
            }
            0x2000..=0x3FFF => {
                self.rom_bank = value & 0x7F;
                if self.rom_bank == 0 {
                    self.rom_bank = 1;
                }
                log::trace!("GB MBC3: ROM bank -> {}", self.rom_bank);
            }
            0x4000..=0x5FFF => {
                self.ram_rtc_select = value;
            }
            0x6000..=0x7FFF => {
                if let Some(rtc) = self.rtc.as_mut() {
                    rtc.write_latch(value);
                }
            }
            _ => {}
        }
    }

    pub(super) fn read_ram(&self, addr: u16) -> u8 {
        if !self.ram_enable {
            return 0xFF;
        }
        match self.ram_rtc_select {
            bank @ 0x00..=0x03 => match ram_index(&self.ram, bank as usize, addr) {
                Some(i) => self.ram[i],
                None => 0xFF,
            },
            reg @ 0x08..=0x0C => self.rtc.as_ref().map_or(0xFF, |rtc| rtc.read(reg)),
            _ => 0xFF,
        }
    }

    pub(super) fn write_ram(&mut self, addr: u16, value: u8) {
        if !self.ram_enable {
            return;
        }
        match self.ram_rtc_select {
            bank @ 0x00..=0x03 => {
                if let Some(i) = ram_index(&self.ram, bank as usize, addr) {
                    self.ram[i] = value;
                }
            }
            reg @ 0x08..=0x0C => {
                if let Some(rtc) = self.rtc.as_mut() {
                    rtc.write(reg, value);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CLOCK_HZ;

    fn banked_rom(banks: usize) -> Vec<u8> {
        (0..banks).flat_map(|b| vec![b as u8; 0x4000]).collect()
    }

    #[test]
    fn seven_bit_rom_bank() {
        let mut mbc = Mbc3::new(banked_rom(128), 128, 0, false);
        mbc.write_control(0x2000, 0x7F);
        assert_eq!(mbc.read_rom(0x7FFF), 0x7F);
        mbc.write_control(0x2000, 0x00);
        assert_eq!(mbc.read_rom(0x4000), 1);
    }

    #[test]
    fn ram_banks_are_independent() {
        let mut mbc = Mbc3::new(banked_rom(4), 4, 4 * 0x2000, false);
        mbc.write_control(0x0000, 0x0A);
        for bank in 0..4u8 {
            mbc.write_control(0x4000, bank);
            mbc.write_ram(0xA000, 0x10 + bank);
        }
        for bank in 0..4u8 {
            mbc.write_control(0x4000, bank);
            assert_eq!(mbc.read_ram(0xA000), 0x10 + bank);
        }
    }

    #[test]
    fn rtc_registers_replace_ram() {
        let mut mbc = Mbc3::new(banked_rom(4), 4, 0x2000, true);
        mbc.write_control(0x0000, 0x0A);
        mbc.tick(CLOCK_HZ * 2);
        mbc.write_control(0x6000, 0x00);
        mbc.write_control(0x6000, 0x01);
        mbc.write_control(0x4000, 0x08);
        assert_eq!(mbc.read_ram(0xA000), 2);

        // Without a clock the RTC selects read open bus.
        let mut plain = Mbc3::new(banked_rom(4), 4, 0x2000, false);
        plain.write_control(0x0000, 0x0A);
        plain.write_control(0x4000, 0x08);
        assert_eq!(plain.read_ram(0xA000), 0xFF);
    }
}
