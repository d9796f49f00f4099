use super::cartridge::{Cartridge, CartridgeHeader};
use super::interrupts::{Interrupt, Interrupts};
use super::joypad::Joypad;
use super::ppu::Ppu;
use super::serial::Serial;
use super::sound::Sound;
use super::timer::Timer;
use crate::GbError;

mod dma;
mod init;
mod joypad;
mod mmio;
mod traits;

pub(crate) const WRAM_SIZE: usize = 0x2000;
pub(crate) const HRAM_SIZE: usize = 0x7F;

/// Memory bus: routes the 16-bit address space to the cartridge, internal
/// RAM and the memory-mapped peripherals it owns.
pub(crate) struct GameBoyBus {
    pub(crate) cartridge: Cartridge,
    pub(crate) wram: [u8; WRAM_SIZE],
    pub(crate) hram: [u8; HRAM_SIZE],
    pub(crate) interrupts: Interrupts,
    pub(crate) timer: Timer,
    pub(crate) ppu: Ppu,
    pub(crate) serial: Serial,
    pub(crate) sound: Sound,
    pub(crate) joypad: Joypad,
    /// Last value written to 0xFF46.
    dma_source: u8,
}

impl Default for GameBoyBus {
    fn default() -> Self {
        let mut bus = Self {
            cartridge: Cartridge::empty(),
            wram: [0; WRAM_SIZE],
            hram: [0; HRAM_SIZE],
            interrupts: Interrupts::default(),
            timer: Timer::new(),
            ppu: Ppu::default(),
            serial: Serial::default(),
            sound: Sound::default(),
            joypad: Joypad::default(),
            dma_source: 0xFF,
        };
        bus.apply_dmg_initial_io_state();
        bus
    }
}

impl GameBoyBus {
    pub(super) fn load_rom(&mut self, rom: &[u8]) -> Result<CartridgeHeader, GbError> {
        let (cartridge, header) = Cartridge::from_rom(rom)?;
        self.cartridge = cartridge;
        Ok(header)
    }

    /// Advance every clocked peripheral by `cycles` T-cycles.
    pub(super) fn tick_peripherals(&mut self, cycles: u32) {
        self.timer.tick(cycles, &mut self.interrupts);
        self.ppu.tick(cycles, &mut self.interrupts);
        self.serial.tick(cycles, &mut self.interrupts);
        self.cartridge.tick(cycles);
    }

    #[inline]
    pub(super) fn request_interrupt(&mut self, source: Interrupt) {
        self.interrupts.request(source);
    }
}
