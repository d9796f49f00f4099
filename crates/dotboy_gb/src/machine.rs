mod bus;
mod cartridge;
mod gameboy;
mod interrupts;
mod joypad;
mod ppu;
mod serial;
mod sound;
mod timer;

pub(crate) use bus::GameBoyBus;
pub use cartridge::{logo_matches, CartridgeHeader, MapperKind, NINTENDO_LOGO};
pub use gameboy::{BootOptions, GameBoy, RunOutcome};
pub use interrupts::{Interrupt, InterruptFlags};
pub use joypad::Button;
pub use ppu::PpuMode;
