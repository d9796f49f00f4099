pub mod cpu;
pub mod error;
pub mod machine;

pub use error::GbError;
pub use machine::{BootOptions, Button, CartridgeHeader, GameBoy, Interrupt, RunOutcome};

/// Logical screen width in pixels for the Game Boy DMG.
pub const SCREEN_WIDTH: usize = 160;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 144;
/// Master clock frequency in T-cycles per second.
pub const CLOCK_HZ: u32 = 4_194_304;
/// T-cycles in one full frame (154 lines of 456 cycles).
pub const CYCLES_PER_FRAME: u32 = 70_224;
