use super::super::interrupts::{InterruptFlags, Interrupts};
use super::*;
use crate::CYCLES_PER_FRAME;

fn powered_ppu() -> (Ppu, Interrupts) {
    let mut ppu = Ppu::default();
    ppu.init_dmg();
    (ppu, Interrupts::default())
}

fn requested(irq: &Interrupts) -> InterruptFlags {
    InterruptFlags::from_bits_truncate(irq.read_pending())
}

/// Tile `index` (0x8000 addressing) filled with color `color` everywhere.
fn solid_tile(ppu: &mut Ppu, index: usize, color: u8) {
    let lo = if color & 1 != 0 { 0xFF } else { 0x00 };
    let hi = if color & 2 != 0 { 0xFF } else { 0x00 };
    for row in 0..8 {
        ppu.vram[index * 16 + row * 2] = lo;
        ppu.vram[index * 16 + row * 2 + 1] = hi;
    }
}

fn set_sprite(ppu: &mut Ppu, slot: usize, y: u8, x: u8, tile: u8, attrs: u8) {
    ppu.oam[slot * 4..slot * 4 + 4].copy_from_slice(&[y, x, tile, attrs]);
}

fn pixel(ppu: &Ppu, x: usize, y: usize) -> u8 {
    ppu.framebuffer()[y * crate::SCREEN_WIDTH + x]
}

#[test]
fn line_modes_follow_fixed_durations() {
    let (mut ppu, mut irq) = powered_ppu();
    assert_eq!(ppu.mode(), PpuMode::OamSearch);
    ppu.tick(79, &mut irq);
    assert_eq!(ppu.mode(), PpuMode::OamSearch);
    ppu.tick(1, &mut irq);
    assert_eq!(ppu.mode(), PpuMode::PixelTransfer);
    ppu.tick(171, &mut irq);
    assert_eq!(ppu.mode(), PpuMode::PixelTransfer);
    ppu.tick(1, &mut irq);
    assert_eq!(ppu.mode(), PpuMode::HBlank);
    ppu.tick(203, &mut irq);
    assert_eq!(ppu.ly(), 0);
    ppu.tick(1, &mut irq);
    assert_eq!(ppu.ly(), 1);
    assert_eq!(ppu.mode(), PpuMode::OamSearch);
}

#[test]
fn one_frame_fires_one_vblank() {
    let (mut ppu, mut irq) = powered_ppu();
    ppu.tick(144 * 456 - 1, &mut irq);
    assert!(!requested(&irq).contains(InterruptFlags::VBLANK));
    ppu.tick(1, &mut irq);
    assert_eq!(ppu.ly(), 144);
    assert_eq!(ppu.mode(), PpuMode::VBlank);
    assert!(requested(&irq).contains(InterruptFlags::VBLANK));
    assert!(ppu.take_frame_ready());
    assert!(!ppu.take_frame_ready());

    irq.write_pending(0);
    ppu.tick(CYCLES_PER_FRAME - 144 * 456, &mut irq);
    assert_eq!(ppu.ly(), 0);
    assert_eq!(ppu.frames(), 1);
    assert!(!requested(&irq).contains(InterruptFlags::VBLANK));
}

#[test]
fn ly_lyc_interrupt_fires_on_rising_edge_only() {
    let (mut ppu, mut irq) = powered_ppu();
    ppu.write_register(0xFF45, 2, &mut irq);
    ppu.write_register(0xFF41, 0x40, &mut irq);
    assert!(!requested(&irq).contains(InterruptFlags::LCD_STAT));

    ppu.tick(2 * 456, &mut irq);
    assert!(requested(&irq).contains(InterruptFlags::LCD_STAT));
    assert_eq!(ppu.read_register(0xFF41) & 0x04, 0x04);

    // The line stays high for the rest of LY=2.
    irq.write_pending(0);
    ppu.tick(100, &mut irq);
    assert!(!requested(&irq).contains(InterruptFlags::LCD_STAT));
}

/// Tick one dot at a time and count LCD STAT requests, clearing IF after
/// each one.
fn count_stat_requests(ppu: &mut Ppu, irq: &mut Interrupts, dots: u32) -> u32 {
    let mut count = 0;
    for _ in 0..dots {
        ppu.tick(1, irq);
        if requested(irq).contains(InterruptFlags::LCD_STAT) {
            count += 1;
            irq.write_pending(0);
        }
    }
    count
}

#[test]
fn hblank_select_raises_stat_once_per_line() {
    let (mut ppu, mut irq) = powered_ppu();
    ppu.write_register(0xFF41, 0x08, &mut irq);
    assert_eq!(count_stat_requests(&mut ppu, &mut irq, 456 * 3), 3);
}

#[test]
fn oam_select_raises_stat_once_per_visible_line() {
    let (mut ppu, mut irq) = powered_ppu();
    // Selecting during mode 2 of line 0 is itself a rising edge.
    ppu.write_register(0xFF41, 0x20, &mut irq);
    assert!(requested(&irq).contains(InterruptFlags::LCD_STAT));
    irq.write_pending(0);
    let rest = count_stat_requests(&mut ppu, &mut irq, CYCLES_PER_FRAME - 1);
    assert_eq!(1 + rest, 144);
}

#[test]
fn vblank_select_raises_stat_once_per_frame() {
    let (mut ppu, mut irq) = powered_ppu();
    ppu.write_register(0xFF41, 0x10, &mut irq);
    assert!(!requested(&irq).contains(InterruptFlags::LCD_STAT));
    assert_eq!(count_stat_requests(&mut ppu, &mut irq, CYCLES_PER_FRAME), 1);
    assert_eq!(count_stat_requests(&mut ppu, &mut irq, CYCLES_PER_FRAME), 1);
}

#[test]
fn combined_sources_only_fire_on_rising_edge() {
    // H-Blank of line 143 runs straight into V-Blank, so the shared line
    // never drops and V-Blank adds no request of its own.
    let (mut ppu, mut irq) = powered_ppu();
    ppu.write_register(0xFF41, 0x18, &mut irq);
    assert_eq!(count_stat_requests(&mut ppu, &mut irq, CYCLES_PER_FRAME - 1), 144);

    // Mode 0 and mode 2 together: the line only drops during mode 3, so
    // each visible line contributes one request instead of two.
    let (mut ppu, mut irq) = powered_ppu();
    ppu.write_register(0xFF41, 0x28, &mut irq);
    irq.write_pending(0);
    assert_eq!(count_stat_requests(&mut ppu, &mut irq, CYCLES_PER_FRAME - 1), 144);
}

#[test]
fn stat_reports_mode_and_ignores_read_only_bits() {
    let (mut ppu, mut irq) = powered_ppu();
    ppu.write_register(0xFF45, 0x99, &mut irq);
    ppu.write_register(0xFF41, 0xFF, &mut irq);
    assert_eq!(ppu.read_register(0xFF41), 0x80 | 0x78 | PpuMode::OamSearch as u8);
}

#[test]
fn ly_writes_are_ignored() {
    let (mut ppu, mut irq) = powered_ppu();
    ppu.tick(3 * 456, &mut irq);
    ppu.write_register(0xFF44, 0x00, &mut irq);
    assert_eq!(ppu.read_register(0xFF44), 3);
}

#[test]
fn lcd_off_resets_timing() {
    let (mut ppu, mut irq) = powered_ppu();
    ppu.tick(10 * 456 + 100, &mut irq);
    ppu.write_register(0xFF40, 0x11, &mut irq);
    assert_eq!(ppu.ly(), 0);
    assert_eq!(ppu.read_register(0xFF41) & 0x03, 0);

    ppu.tick(5000, &mut irq);
    assert_eq!(ppu.ly(), 0);

    ppu.write_register(0xFF40, 0x91, &mut irq);
    assert_eq!(ppu.mode(), PpuMode::OamSearch);
    ppu.tick(456, &mut irq);
    assert_eq!(ppu.ly(), 1);
}

#[test]
fn vram_and_oam_lock_by_mode() {
    let (mut ppu, mut irq) = powered_ppu();
    ppu.vram[0] = 0x12;
    ppu.oam[0] = 0x34;

    // Mode 2: OAM locked, VRAM open.
    assert_eq!(ppu.read_vram(0x8000), 0x12);
    assert_eq!(ppu.read_oam(0xFE00), 0xFF);
    ppu.write_oam(0xFE00, 0x99);
    assert_eq!(ppu.oam[0], 0x34);

    // Mode 3: both locked.
    ppu.tick(80, &mut irq);
    assert_eq!(ppu.read_vram(0x8000), 0xFF);
    ppu.write_vram(0x8000, 0x77);
    assert_eq!(ppu.vram[0], 0x12);

    // Mode 0: both open.
    ppu.tick(172, &mut irq);
    assert_eq!(ppu.read_vram(0x8000), 0x12);
    assert_eq!(ppu.read_oam(0xFE00), 0x34);
}

#[test]
fn background_uses_map_scroll_and_palette() {
    let (mut ppu, _) = powered_ppu();
    solid_tile(&mut ppu, 1, 3);
    // Tile 1 in the second map column.
    ppu.vram[0x1800 + 1] = 1;
    ppu.bgp = 0xE4;

    ppu.ly = 0;
    ppu.render_scanline();
    assert_eq!(pixel(&ppu, 7, 0), 0);
    assert_eq!(pixel(&ppu, 8, 0), 3);
    assert_eq!(pixel(&ppu, 15, 0), 3);
    assert_eq!(pixel(&ppu, 16, 0), 0);

    ppu.scx = 4;
    ppu.render_scanline();
    assert_eq!(pixel(&ppu, 4, 0), 3);
    assert_eq!(pixel(&ppu, 3, 0), 0);
}

#[test]
fn signed_tile_addressing() {
    let (mut ppu, _) = powered_ppu();
    ppu.lcdc = 0x81;
    // Tile 0xFF under 0x9000 addressing lives at 0x8FF0.
    for row in 0..8 {
        ppu.vram[0x0FF0 + row * 2] = 0xFF;
    }
    ppu.vram[0x1800] = 0xFF;
    ppu.bgp = 0xE4;
    ppu.ly = 0;
    ppu.render_scanline();
    assert_eq!(pixel(&ppu, 0, 0), 1);
}

#[test]
fn window_covers_background() {
    let (mut ppu, _) = powered_ppu();
    solid_tile(&mut ppu, 2, 2);
    ppu.lcdc = 0x91 | 0x20 | 0x40;
    for i in 0..32 {
        ppu.vram[0x1C00 + i] = 2;
    }
    ppu.bgp = 0xE4;
    ppu.wy = 5;
    ppu.wx = 7 + 80;

    ppu.ly = 4;
    ppu.render_scanline();
    assert_eq!(pixel(&ppu, 100, 4), 0);

    ppu.ly = 5;
    ppu.render_scanline();
    assert_eq!(pixel(&ppu, 79, 5), 0);
    assert_eq!(pixel(&ppu, 80, 5), 2);
    assert_eq!(ppu.window_line, 1);
}

#[test]
fn disabled_background_is_blank() {
    let (mut ppu, _) = powered_ppu();
    solid_tile(&mut ppu, 0, 3);
    ppu.lcdc = 0x90;
    ppu.bgp = 0xFF;
    ppu.ly = 0;
    ppu.render_scanline();
    assert_eq!(pixel(&ppu, 0, 0), 0);
}

#[test]
fn sprite_priority_prefers_lower_x_then_oam_order() {
    let (mut ppu, _) = powered_ppu();
    ppu.lcdc = 0x93;
    solid_tile(&mut ppu, 1, 1);
    solid_tile(&mut ppu, 2, 2);
    solid_tile(&mut ppu, 3, 3);
    ppu.obp0 = 0xE4;

    // Slot 0 at x=12 (screen 4), slot 1 at x=10 (screen 2): slot 1 wins
    // where they overlap because of its lower X.
    set_sprite(&mut ppu, 0, 16, 12, 1, 0);
    set_sprite(&mut ppu, 1, 16, 10, 2, 0);
    // Slots 2 and 3 share X; the lower OAM index wins.
    set_sprite(&mut ppu, 2, 16, 60, 3, 0);
    set_sprite(&mut ppu, 3, 16, 60, 1, 0);

    ppu.ly = 0;
    ppu.render_scanline();
    assert_eq!(pixel(&ppu, 2, 0), 2);
    assert_eq!(pixel(&ppu, 9, 0), 2);
    assert_eq!(pixel(&ppu, 10, 0), 1);
    assert_eq!(pixel(&ppu, 52, 0), 3);
}

#[test]
fn only_ten_sprites_per_line() {
    let (mut ppu, _) = powered_ppu();
    ppu.lcdc = 0x93;
    solid_tile(&mut ppu, 1, 3);
    ppu.obp0 = 0xE4;
    for slot in 0..12 {
        set_sprite(&mut ppu, slot, 16, 8 + (slot as u8) * 10, 1, 0);
    }
    ppu.ly = 0;
    ppu.render_scanline();
    assert_eq!(pixel(&ppu, 90, 0), 3);
    assert_eq!(pixel(&ppu, 100, 0), 0);
    assert_eq!(pixel(&ppu, 110, 0), 0);
}

#[test]
fn behind_background_sprites_only_show_over_color_zero() {
    let (mut ppu, _) = powered_ppu();
    ppu.lcdc = 0x93;
    solid_tile(&mut ppu, 1, 1);
    solid_tile(&mut ppu, 2, 3);
    ppu.vram[0x1800] = 1;
    ppu.bgp = 0xE4;
    ppu.obp1 = 0xE4;
    set_sprite(&mut ppu, 0, 16, 8, 2, 0x80 | 0x10);
    set_sprite(&mut ppu, 1, 16, 16, 2, 0x80 | 0x10);

    ppu.ly = 0;
    ppu.render_scanline();
    assert_eq!(pixel(&ppu, 0, 0), 1);
    assert_eq!(pixel(&ppu, 8, 0), 3);
}

#[test]
fn tall_sprites_flip_across_both_tiles() {
    let (mut ppu, _) = powered_ppu();
    ppu.lcdc = 0x97;
    solid_tile(&mut ppu, 4, 1);
    solid_tile(&mut ppu, 5, 2);
    ppu.obp0 = 0xE4;
    // Odd tile index is masked to the even one.
    set_sprite(&mut ppu, 0, 16, 8, 5, 0);

    ppu.ly = 0;
    ppu.render_scanline();
    assert_eq!(pixel(&ppu, 0, 0), 1);
    ppu.ly = 8;
    ppu.render_scanline();
    assert_eq!(pixel(&ppu, 0, 8), 2);

    set_sprite(&mut ppu, 0, 16, 8, 4, 0x40);
    ppu.ly = 0;
    ppu.render_scanline();
    assert_eq!(pixel(&ppu, 0, 0), 2);
}
