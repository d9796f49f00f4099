use super::super::GameBoyBus;

impl GameBoyBus {
    pub(super) fn write8_mmio_impl(&mut self, addr: u16, value: u8) {
        match addr {
            // ROM area writes only reach the mapper's control registers.
            0x0000..=0x7FFF => self.cartridge.write(addr, value),

            // VRAM: writes are dropped while the PPU owns the bus (mode 3).
            0x8000..=0x9FFF => self.ppu.write_vram(addr, value),

            0xA000..=0xBFFF => self.cartridge.write(addr, value),

            0xC000..=0xFDFF => self.wram[(addr & 0x1FFF) as usize] = value,

            // OAM: writes are dropped in modes 2 and 3.
            0xFE00..=0xFE9F => self.ppu.write_oam(addr, value),

            0xFF00 => self.joypad.write(value),
            0xFF01 => self.serial.sb = value,
            0xFF02 => self.serial.write_sc(value),

            0xFF04 => self.timer.write_div(&mut self.interrupts),
            0xFF05 => self.timer.write_tima(value),
            0xFF06 => self.timer.write_tma(value),
            0xFF07 => self.timer.write_tac(value, &mut self.interrupts),

            0xFF0F => self.interrupts.write_pending(value),

            0xFF10..=0xFF3F => self.sound.write(addr, value),

            0xFF46 => self.start_oam_dma(value),
            0xFF40..=0xFF4B => self.ppu.write_register(addr, value, &mut self.interrupts),

            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize] = value,
            0xFFFF => self.interrupts.write_enabled(value),

            _ => {
                log::trace!("GB bus: write 0x{value:02X} to unmapped 0x{addr:04X} dropped");
            }
        }
    }
}
