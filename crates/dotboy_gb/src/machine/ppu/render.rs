use super::{Ppu, VISIBLE_LINES};
use crate::SCREEN_WIDTH;

const MAX_SPRITES_PER_LINE: usize = 10;

#[derive(Clone, Copy, Debug)]
struct Sprite {
    /// Screen-space top edge.
    y: i16,
    /// Screen-space left edge.
    x: i16,
    tile: u8,
    attrs: u8,
}

#[inline]
fn apply_palette(palette: u8, color: u8) -> u8 {
    (palette >> (color * 2)) & 0x03
}

impl Ppu {
    /// Draw line LY into the frame buffer. Called on H-Blank entry.
    pub(super) fn render_scanline(&mut self) {
        let ly = self.ly;
        if ly >= VISIBLE_LINES {
            return;
        }

        // Raw color indices (before BGP), needed for sprite priority.
        let mut bg_colors = [0u8; SCREEN_WIDTH];
        let bg_enabled = (self.lcdc & 0x01) != 0;
        if bg_enabled {
            self.render_background(ly, &mut bg_colors);
            self.render_window(ly, &mut bg_colors);
        }

        let row = ly as usize * SCREEN_WIDTH;
        for (x, &color) in bg_colors.iter().enumerate() {
            self.framebuffer[row + x] = if bg_enabled {
                apply_palette(self.bgp, color)
            } else {
                0
            };
        }

        if (self.lcdc & 0x02) != 0 {
            self.render_sprites(ly, &bg_colors);
        }
    }

    /// VRAM offset of row `row` of background/window tile `tile`, honoring
    /// the LCDC.4 addressing mode.
    fn bg_tile_row(&self, tile: u8, row: u8) -> usize {
        let base = if (self.lcdc & 0x10) != 0 {
            tile as usize * 16
        } else {
            (0x1000 + (tile as i8 as isize) * 16) as usize
        };
        base + (row as usize) * 2
    }

    #[inline]
    fn tile_pixel(&self, row_addr: usize, col: u8) -> u8 {
        let lo = self.vram[row_addr];
        let hi = self.vram[row_addr + 1];
        let bit = 7 - col;
        (((hi >> bit) & 1) << 1) | ((lo >> bit) & 1)
    }

    fn render_background(&self, ly: u8, out: &mut [u8; SCREEN_WIDTH]) {
        let map = if (self.lcdc & 0x08) != 0 { 0x1C00 } else { 0x1800 };
        let y = ly.wrapping_add(self.scy);
        for (x, pixel) in out.iter_mut().enumerate() {
            let bx = (x as u8).wrapping_add(self.scx);
            let tile = self.vram[map + (y as usize / 8) * 32 + bx as usize / 8];
            *pixel = self.tile_pixel(self.bg_tile_row(tile, y % 8), bx % 8);
        }
    }

    fn render_window(&mut self, ly: u8, out: &mut [u8; SCREEN_WIDTH]) {
        if (self.lcdc & 0x20) == 0 || ly < self.wy || self.wx > 166 {
            return;
        }
        let map = if (self.lcdc & 0x40) != 0 { 0x1C00 } else { 0x1800 };
        let wy = self.window_line;
        let start = self.wx.saturating_sub(7) as usize;
        for (x, pixel) in out.iter_mut().enumerate().skip(start) {
            let wx = (x + 7 - self.wx as usize) as u8;
            let tile = self.vram[map + (wy as usize / 8) * 32 + wx as usize / 8];
            *pixel = self.tile_pixel(self.bg_tile_row(tile, wy % 8), wx % 8);
        }
        self.window_line = self.window_line.wrapping_add(1);
    }

    /// First ten OAM entries overlapping `ly`, ordered by drawing priority:
    /// lower X first, then lower OAM index.
    fn sprites_on_line(&self, ly: u8, height: i16) -> Vec<Sprite> {
        let line = ly as i16;
        let mut sprites: Vec<Sprite> = self
            .oam
            .chunks_exact(4)
            .map(|e| Sprite {
                y: e[0] as i16 - 16,
                x: e[1] as i16 - 8,
                tile: e[2],
                attrs: e[3],
            })
            .filter(|s| line >= s.y && line < s.y + height)
            .take(MAX_SPRITES_PER_LINE)
            .collect();
        // Stable sort keeps OAM order among equal X.
        sprites.sort_by_key(|s| s.x);
        sprites
    }

    fn render_sprites(&mut self, ly: u8, bg_colors: &[u8; SCREEN_WIDTH]) {
        let height: i16 = if (self.lcdc & 0x04) != 0 { 16 } else { 8 };
        let sprites = self.sprites_on_line(ly, height);
        if sprites.is_empty() {
            return;
        }

        let row = ly as usize * SCREEN_WIDTH;
        for x in 0..SCREEN_WIDTH as i16 {
            let Some((sprite, color)) = sprites.iter().find_map(|s| {
                if x < s.x || x >= s.x + 8 {
                    return None;
                }
                let color = self.sprite_pixel(s, ly, height, x);
                (color != 0).then_some((s, color))
            }) else {
                continue;
            };

            let behind_bg = (sprite.attrs & 0x80) != 0;
            if behind_bg && bg_colors[x as usize] != 0 {
                continue;
            }
            let palette = if (sprite.attrs & 0x10) != 0 {
                self.obp1
            } else {
                self.obp0
            };
            self.framebuffer[row + x as usize] = apply_palette(palette, color);
        }
    }

    fn sprite_pixel(&self, sprite: &Sprite, ly: u8, height: i16, x: i16) -> u8 {
        let mut row = ly as i16 - sprite.y;
        if (sprite.attrs & 0x40) != 0 {
            row = height - 1 - row;
        }
        let mut col = x - sprite.x;
        if (sprite.attrs & 0x20) != 0 {
            col = 7 - col;
        }
        let tile = if height == 16 {
            sprite.tile & 0xFE
        } else {
            sprite.tile
        };
        // Sprites always use 0x8000 addressing; 8x16 rows run into the
        // next tile.
        let row_addr = tile as usize * 16 + row as usize * 2;
        self.tile_pixel(row_addr, col as u8)
    }
}
