use super::{Cpu, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Registers {
    /// Register values the DMG boot ROM leaves behind when it jumps to
    /// the cartridge entry point.
    pub const fn post_boot() -> Self {
        Self {
            a: 0x01,
            f: 0xB0,
            b: 0x00,
            c: 0x13,
            d: 0x00,
            e: 0xD8,
            h: 0x01,
            l: 0x4D,
            sp: 0xFFFE,
            pc: 0x0100,
        }
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self {
            regs: Registers::post_boot(),
            ime: false,
            halted: false,
            stopped: false,
            ime_enable_pending: false,
            ime_enable_delay: false,
            locked: None,
        }
    }

    /// Return to the post-boot state. Clears HALT, STOP and a lock caused
    /// by an undefined opcode.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
