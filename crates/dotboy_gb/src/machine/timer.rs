/// Timer / divider unit.
///
/// A free-running 16-bit system counter advances once per T-cycle and DIV
/// exposes its upper byte. TIMA increments on the falling edge of the
/// counter bit selected by TAC, which is what makes writes to DIV and TAC
/// able to produce a spurious increment.
mod io;

use super::interrupts::{Interrupt, Interrupts};

/// TIMA input divisors selected by TAC[1:0], in T-cycles.
pub(super) const TIMA_DIVISORS: [u32; 4] = [1024, 16, 64, 256];

pub(crate) struct Timer {
    /// Hidden system counter; DIV is bits 15:8.
    pub(super) counter: u16,
    pub(super) tima: u8,
    pub(super) tma: u8,
    /// TAC, lower 3 bits.
    pub(super) tac: u8,
}

impl Timer {
    pub(super) fn new() -> Self {
        Self {
            counter: 0,
            tima: 0,
            tma: 0,
            tac: 0,
        }
    }

    /// DMG state at PC=0x0100: DIV reads 0xAB.
    pub(super) fn init_dmg(&mut self) {
        self.counter = 0xABCC;
        self.tima = 0x00;
        self.tma = 0x00;
        self.tac = 0x00;
    }

    #[inline]
    pub(super) fn enabled(&self) -> bool {
        (self.tac & 0x04) != 0
    }

    /// Current TIMA input: the counter bit half way through the selected
    /// divisor, gated by the TAC enable bit.
    #[inline]
    pub(super) fn input(&self) -> bool {
        let divisor = TIMA_DIVISORS[(self.tac & 0x03) as usize];
        let mask = (divisor / 2) as u16;
        self.enabled() && (self.counter & mask) != 0
    }

    /// TIMA overflow reloads from TMA in the same cycle and requests INT $50.
    pub(super) fn increment_tima(&mut self, interrupts: &mut Interrupts) {
        let (next, overflow) = self.tima.overflowing_add(1);
        if overflow {
            self.tima = self.tma;
            interrupts.request(Interrupt::Timer);
            log::trace!("GB timer: TIMA overflow, reloaded 0x{:02X}", self.tma);
        } else {
            self.tima = next;
        }
    }

    /// Advance by `cycles` T-cycles.
    pub(super) fn tick(&mut self, cycles: u32, interrupts: &mut Interrupts) {
        for _ in 0..cycles {
            let before = self.input();
            self.counter = self.counter.wrapping_add(1);
            if before && !self.input() {
                self.increment_tima(interrupts);
            }
        }
    }
}
