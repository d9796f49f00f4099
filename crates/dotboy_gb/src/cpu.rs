//! Sharp LR35902 instruction engine.
//!
//! The CPU executes one instruction per `step` and reports the T-cycles it
//! took. It never advances the rest of the machine itself; the scheduler in
//! `GameBoy` ticks the bus by the returned amount and then asks the CPU to
//! service interrupts.
mod alu;
mod bus;
mod cb;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod operand;
mod regs;
mod step;

pub use bus::Bus;
pub use operand::{R16, R8};
pub use regs::{Flag, Registers};

use crate::GbError;

/// Cycles charged for dispatching an interrupt.
pub const INTERRUPT_DISPATCH_CYCLES: u32 = 20;

#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Interrupt master enable.
    pub ime: bool,
    pub halted: bool,
    stopped: bool,
    /// EI was just executed; IME turns on after the next instruction.
    ime_enable_pending: bool,
    ime_enable_delay: bool,
    /// Set once an undefined opcode has been executed. The CPU stays dead
    /// and reports the same error on every later step.
    locked: Option<GbError>,
}

impl Cpu {
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked.is_some()
    }
}
