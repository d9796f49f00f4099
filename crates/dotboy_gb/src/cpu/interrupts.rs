use super::{Bus, Cpu, INTERRUPT_DISPATCH_CYCLES};

impl Cpu {
    /// Dispatch the highest-priority pending interrupt if IME allows it.
    ///
    /// Clears IME and HALT, pushes PC, acknowledges the source in IF and
    /// jumps to its vector. Returns the cycles spent, or `None` when nothing
    /// was dispatched.
    pub fn service_interrupt<B: Bus>(&mut self, bus: &mut B) -> Option<u32> {
        if !self.ime || self.locked.is_some() {
            return None;
        }
        let pending = bus.pending_interrupts() & 0x1F;
        if pending == 0 {
            return None;
        }

        let index = pending.trailing_zeros() as u8;
        let vector = 0x0040 + index as u16 * 8;
        let pc = self.regs.pc;

        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        self.halted = false;

        self.push_u16(bus, pc);
        bus.acknowledge_interrupt(index);
        self.regs.pc = vector;

        log::debug!(
            "interrupt: idx={index} vector=0x{vector:04X} pc=0x{pc:04X} sp=0x{sp:04X}",
            sp = self.regs.sp,
        );
        Some(INTERRUPT_DISPATCH_CYCLES)
    }

    /// Advance the EI delay by one instruction. IME turns on after the
    /// instruction that follows EI has completed.
    #[inline]
    pub(super) fn apply_ime_delay(&mut self) {
        if self.ime_enable_delay {
            self.ime = true;
            self.ime_enable_delay = false;
        } else if self.ime_enable_pending {
            self.ime_enable_pending = false;
            self.ime_enable_delay = true;
        }
    }
}
