use super::super::GameBoyBus;

impl GameBoyBus {
    pub(super) fn read8_mmio_impl(&self, addr: u16) -> u8 {
        match addr {
            // Cartridge ROM, routed through the active mapper.
            0x0000..=0x7FFF => self.cartridge.read(addr),

            // VRAM; reads 0xFF while the PPU is in pixel transfer.
            0x8000..=0x9FFF => self.ppu.read_vram(addr),

            // Cartridge RAM.
            0xA000..=0xBFFF => self.cartridge.read(addr),

            // Work RAM and its echo at 0xE000..0xFDFF.
            0xC000..=0xFDFF => self.wram[(addr & 0x1FFF) as usize],

            // OAM; reads 0xFF during OAM search and pixel transfer.
            0xFE00..=0xFE9F => self.ppu.read_oam(addr),

            // Unusable area.
            0xFEA0..=0xFEFF => 0xFF,

            0xFF00 => self.joypad.read(),
            0xFF01 => self.serial.sb,
            0xFF02 => self.serial.read_sc(),

            0xFF04 => self.timer.read_div(),
            0xFF05 => self.timer.read_tima(),
            0xFF06 => self.timer.read_tma(),
            0xFF07 => self.timer.read_tac(),

            0xFF0F => self.interrupts.read_pending(),

            0xFF10..=0xFF3F => self.sound.read(addr),

            0xFF46 => self.read_dma_register(),
            0xFF40..=0xFF4B => self.ppu.read_register(addr),

            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize],
            0xFFFF => self.interrupts.read_enabled(),

            // Unmapped I/O (including the CGB-only registers).
            _ => 0xFF,
        }
    }
}
