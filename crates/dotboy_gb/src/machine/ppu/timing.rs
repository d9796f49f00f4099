use super::super::interrupts::{Interrupt, Interrupts};
use super::{
    Ppu, PpuMode, DOTS_PER_LINE, OAM_SEARCH_DOTS, PIXEL_TRANSFER_DOTS, TOTAL_LINES,
    VISIBLE_LINES,
};
use crate::CYCLES_PER_FRAME;

impl Ppu {
    /// Advance the PPU by `cycles` T-cycles.
    pub(in super::super) fn tick(&mut self, cycles: u32, interrupts: &mut Interrupts) {
        if !self.lcd_enabled() {
            return;
        }
        for _ in 0..cycles {
            self.tick_dot(interrupts);
        }
    }

    fn tick_dot(&mut self, interrupts: &mut Interrupts) {
        self.frame_dot += 1;
        if self.frame_dot == CYCLES_PER_FRAME {
            self.frame_dot = 0;
        }

        let ly = (self.frame_dot / DOTS_PER_LINE) as u8;
        debug_assert!(ly < TOTAL_LINES);
        if ly != self.ly {
            self.ly = ly;
            if ly == 0 {
                self.window_line = 0;
            }
        }

        let mode = mode_at(self.frame_dot);
        if mode != self.mode {
            self.mode = mode;
            match mode {
                PpuMode::HBlank => self.render_scanline(),
                PpuMode::VBlank => {
                    interrupts.request(Interrupt::VBlank);
                    self.frame_ready = true;
                    self.frames += 1;
                    log::trace!("GB PPU: VBlank edge, frame {}", self.frames);
                }
                PpuMode::OamSearch | PpuMode::PixelTransfer => {}
            }
        }

        self.update_stat_line(interrupts);
    }

    /// Recompute the OR'd STAT interrupt line and request INT $48 on its
    /// rising edge.
    pub(super) fn update_stat_line(&mut self, interrupts: &mut Interrupts) {
        if !self.lcd_enabled() {
            self.stat_line = false;
            return;
        }

        let select = self.stat_select;
        let line = ((select & 0x40) != 0 && self.ly == self.lyc)
            || ((select & 0x20) != 0 && self.mode == PpuMode::OamSearch)
            || ((select & 0x10) != 0 && self.mode == PpuMode::VBlank)
            || ((select & 0x08) != 0 && self.mode == PpuMode::HBlank);

        if line && !self.stat_line {
            interrupts.request(Interrupt::LcdStat);
            log::trace!(
                "GB PPU: STAT rising edge (select=0x{:02X} LY={} mode={:?})",
                select,
                self.ly,
                self.mode
            );
        }
        self.stat_line = line;
    }

    /// LCDC bit 7 cleared: LY and the frame counter reset and STAT reports
    /// mode 0 until the display is switched back on.
    pub(super) fn switch_off(&mut self) {
        self.frame_dot = 0;
        self.ly = 0;
        self.mode = PpuMode::HBlank;
        self.stat_line = false;
        self.window_line = 0;
        log::debug!("GB PPU: LCD off");
    }

    pub(super) fn switch_on(&mut self, interrupts: &mut Interrupts) {
        self.frame_dot = 0;
        self.ly = 0;
        self.mode = PpuMode::OamSearch;
        self.window_line = 0;
        self.update_stat_line(interrupts);
        log::debug!("GB PPU: LCD on");
    }
}

fn mode_at(frame_dot: u32) -> PpuMode {
    let line = frame_dot / DOTS_PER_LINE;
    let dot = frame_dot % DOTS_PER_LINE;
    if line >= VISIBLE_LINES as u32 {
        PpuMode::VBlank
    } else if dot < OAM_SEARCH_DOTS {
        PpuMode::OamSearch
    } else if dot < OAM_SEARCH_DOTS + PIXEL_TRANSFER_DOTS {
        PpuMode::PixelTransfer
    } else {
        PpuMode::HBlank
    }
}
