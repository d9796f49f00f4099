use super::super::interrupts::Interrupts;
use super::Timer;

impl Timer {
    #[inline]
    pub(in super::super) fn read_div(&self) -> u8 {
        (self.counter >> 8) as u8
    }

    /// Writing any value to DIV clears the whole system counter. If the
    /// selected TIMA input bit was high, the reset is a falling edge.
    pub(in super::super) fn write_div(&mut self, interrupts: &mut Interrupts) {
        let before = self.input();
        self.counter = 0;
        if before {
            self.increment_tima(interrupts);
        }
    }

    #[inline]
    pub(in super::super) fn read_tima(&self) -> u8 {
        self.tima
    }

    #[inline]
    pub(in super::super) fn write_tima(&mut self, value: u8) {
        self.tima = value;
    }

    #[inline]
    pub(in super::super) fn read_tma(&self) -> u8 {
        self.tma
    }

    #[inline]
    pub(in super::super) fn write_tma(&mut self, value: u8) {
        self.tma = value;
    }

    #[inline]
    pub(in super::super) fn read_tac(&self) -> u8 {
        self.tac | 0xF8
    }

    /// Disabling the timer or switching to a divisor whose input bit is low
    /// while the old input was high counts as a falling edge.
    pub(in super::super) fn write_tac(&mut self, value: u8, interrupts: &mut Interrupts) {
        let before = self.input();
        self.tac = value & 0x07;
        if before && !self.input() {
            self.increment_tima(interrupts);
        }
    }
}
