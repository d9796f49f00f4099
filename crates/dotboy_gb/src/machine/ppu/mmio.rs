use super::super::interrupts::Interrupts;
use super::Ppu;

impl Ppu {
    pub(in super::super) fn read_register(&self, addr: u16) -> u8 {
        match addr {
            0xFF40 => self.lcdc,
            0xFF41 => self.read_stat(),
            0xFF42 => self.scy,
            0xFF43 => self.scx,
            0xFF44 => self.ly,
            0xFF45 => self.lyc,
            0xFF47 => self.bgp,
            0xFF48 => self.obp0,
            0xFF49 => self.obp1,
            0xFF4A => self.wy,
            0xFF4B => self.wx,
            _ => 0xFF,
        }
    }

    pub(in super::super) fn write_register(
        &mut self,
        addr: u16,
        value: u8,
        interrupts: &mut Interrupts,
    ) {
        match addr {
            0xFF40 => self.write_lcdc(value, interrupts),
            0xFF41 => {
                // Bits 0-2 are read-only.
                self.stat_select = value & 0x78;
                self.update_stat_line(interrupts);
            }
            0xFF42 => self.scy = value,
            0xFF43 => self.scx = value,
            // LY is read-only.
            0xFF44 => {}
            0xFF45 => {
                self.lyc = value;
                self.update_stat_line(interrupts);
            }
            0xFF47 => self.bgp = value,
            0xFF48 => self.obp0 = value,
            0xFF49 => self.obp1 = value,
            0xFF4A => self.wy = value,
            0xFF4B => self.wx = value,
            _ => {}
        }
    }

    fn read_stat(&self) -> u8 {
        let coincidence = if self.ly == self.lyc { 0x04 } else { 0x00 };
        let mode = if self.lcd_enabled() {
            self.mode as u8
        } else {
            0
        };
        0x80 | self.stat_select | coincidence | mode
    }

    fn write_lcdc(&mut self, value: u8, interrupts: &mut Interrupts) {
        let was_enabled = self.lcd_enabled();
        self.lcdc = value;
        match (was_enabled, self.lcd_enabled()) {
            (true, false) => self.switch_off(),
            (false, true) => self.switch_on(interrupts),
            _ => {}
        }
    }
}
