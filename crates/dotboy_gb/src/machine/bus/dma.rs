use super::GameBoyBus;

const OAM_SIZE: usize = 0xA0;

impl GameBoyBus {
    /// OAM DMA: copy 0xXX00..=0xXX9F into OAM.
    ///
    /// The transfer happens at once; the 160 M-cycles during which the CPU
    /// could only reach HRAM are not modelled.
    pub(super) fn start_oam_dma(&mut self, value: u8) {
        self.dma_source = value;
        let base = (value as u16) << 8;
        for i in 0..OAM_SIZE {
            let byte = self.dma_read(base.wrapping_add(i as u16));
            self.ppu.dma_write(i, byte);
        }
        log::trace!("GB DMA: OAM <- 0x{base:04X}");
    }

    pub(super) fn read_dma_register(&self) -> u8 {
        self.dma_source
    }

    /// DMA source reads see VRAM and OAM regardless of the PPU mode.
    fn dma_read(&self, addr: u16) -> u8 {
        match addr {
            0x8000..=0x9FFF => self.ppu.vram[(addr & 0x1FFF) as usize],
            // Sources above 0xDFFF read the echoed WRAM.
            0xE000..=0xFFFF => self.wram[(addr & 0x1FFF) as usize],
            _ => self.read8_mmio(addr),
        }
    }
}
