use super::{Ppu, PpuMode};

impl Ppu {
    /// VRAM is locked while the PPU is fetching pixels (mode 3).
    pub(in super::super) fn vram_accessible(&self) -> bool {
        !self.lcd_enabled() || self.mode != PpuMode::PixelTransfer
    }

    /// OAM is locked during OAM search and pixel transfer (modes 2 and 3).
    pub(in super::super) fn oam_accessible(&self) -> bool {
        !self.lcd_enabled() || matches!(self.mode, PpuMode::HBlank | PpuMode::VBlank)
    }

    pub(in super::super) fn read_vram(&self, addr: u16) -> u8 {
        if self.vram_accessible() {
            self.vram[(addr & 0x1FFF) as usize]
        } else {
            0xFF
        }
    }

    pub(in super::super) fn write_vram(&mut self, addr: u16, value: u8) {
        if self.vram_accessible() {
            self.vram[(addr & 0x1FFF) as usize] = value;
        }
    }

    pub(in super::super) fn read_oam(&self, addr: u16) -> u8 {
        if self.oam_accessible() {
            self.oam[(addr - 0xFE00) as usize]
        } else {
            0xFF
        }
    }

    pub(in super::super) fn write_oam(&mut self, addr: u16, value: u8) {
        if self.oam_accessible() {
            self.oam[(addr - 0xFE00) as usize] = value;
        }
    }

    /// OAM DMA writes bypass the mode lock.
    #[inline]
    pub(in super::super) fn dma_write(&mut self, index: usize, value: u8) {
        self.oam[index] = value;
    }
}
