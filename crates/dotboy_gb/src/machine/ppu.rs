//! Pixel processing unit.
//!
//! The PPU owns VRAM, OAM, the LCD registers and the frame buffer. Its
//! timing is a single counter over the 70224-cycle frame; LY and the mode
//! are derived from it.
mod access;
mod mmio;
mod render;
mod timing;

use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

pub(crate) const DOTS_PER_LINE: u32 = 456;
pub(crate) const OAM_SEARCH_DOTS: u32 = 80;
/// Pixel transfer is modelled with its nominal (minimum) length.
pub(crate) const PIXEL_TRANSFER_DOTS: u32 = 172;
pub(crate) const VISIBLE_LINES: u8 = 144;
pub(crate) const TOTAL_LINES: u8 = 154;

/// STAT mode, as reported in STAT bits 0-1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PpuMode {
    HBlank = 0,
    VBlank = 1,
    OamSearch = 2,
    PixelTransfer = 3,
}

pub(crate) struct Ppu {
    pub(super) vram: [u8; 0x2000],
    pub(super) oam: [u8; 0xA0],

    pub(super) lcdc: u8,
    /// Only the interrupt select bits (3-6) are stored; mode and the
    /// coincidence flag are computed on read.
    pub(super) stat_select: u8,
    pub(super) scy: u8,
    pub(super) scx: u8,
    pub(super) ly: u8,
    pub(super) lyc: u8,
    pub(super) bgp: u8,
    pub(super) obp0: u8,
    pub(super) obp1: u8,
    pub(super) wy: u8,
    pub(super) wx: u8,

    /// Position inside the frame, 0..70224.
    pub(super) frame_dot: u32,
    pub(super) mode: PpuMode,
    /// Level of the OR'd STAT interrupt line after the last update.
    pub(super) stat_line: bool,
    /// Internal window line counter; only advances on lines where the
    /// window was drawn.
    pub(super) window_line: u8,

    /// 2-bit shades, row-major.
    pub(super) framebuffer: Vec<u8>,
    pub(super) frame_ready: bool,
    pub(super) frames: u64,
}

impl Default for Ppu {
    fn default() -> Self {
        Self {
            vram: [0; 0x2000],
            oam: [0; 0xA0],
            lcdc: 0,
            stat_select: 0,
            scy: 0,
            scx: 0,
            ly: 0,
            lyc: 0,
            bgp: 0,
            obp0: 0,
            obp1: 0,
            wy: 0,
            wx: 0,
            frame_dot: 0,
            mode: PpuMode::HBlank,
            stat_line: false,
            window_line: 0,
            framebuffer: vec![0; SCREEN_WIDTH * SCREEN_HEIGHT],
            frame_ready: false,
            frames: 0,
        }
    }
}

impl Ppu {
    /// Register state at PC=0x0100: LCD on, top of the frame.
    pub(super) fn init_dmg(&mut self) {
        self.lcdc = 0x91;
        self.stat_select = 0x00;
        self.scy = 0;
        self.scx = 0;
        self.ly = 0;
        self.lyc = 0;
        self.bgp = 0xFC;
        self.obp0 = 0xFF;
        self.obp1 = 0xFF;
        self.wy = 0;
        self.wx = 0;
        self.frame_dot = 0;
        self.mode = PpuMode::OamSearch;
        self.stat_line = false;
        self.window_line = 0;
    }

    #[inline]
    pub(super) fn lcd_enabled(&self) -> bool {
        (self.lcdc & 0x80) != 0
    }

    #[inline]
    pub(crate) fn mode(&self) -> PpuMode {
        self.mode
    }

    #[inline]
    pub(crate) fn ly(&self) -> u8 {
        self.ly
    }

    #[inline]
    pub(crate) fn framebuffer(&self) -> &[u8] {
        &self.framebuffer
    }

    #[inline]
    pub(crate) fn frames(&self) -> u64 {
        self.frames
    }

    /// Returns and clears the "frame completed" marker set on V-Blank entry.
    #[inline]
    pub(crate) fn take_frame_ready(&mut self) -> bool {
        std::mem::take(&mut self.frame_ready)
    }
}

#[cfg(test)]
mod tests;
