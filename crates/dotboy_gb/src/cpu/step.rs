use super::{Bus, Cpu};
use crate::GbError;

/// Cost reported for each idle step spent in HALT or STOP.
const IDLE_CYCLES: u32 = 4;

impl Cpu {
    /// Execute one instruction and return the T-cycles it took.
    ///
    /// While halted or stopped no instruction is fetched and a fixed idle
    /// cost is returned. HALT ends as soon as any enabled interrupt is
    /// requested, whether or not IME is set. STOP ends on a joypad press.
    /// Interrupt dispatch is separate; see [`Cpu::service_interrupt`].
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32, GbError> {
        if let Some(err) = &self.locked {
            return Err(err.clone());
        }

        if self.stopped {
            if !bus.joypad_pressed() {
                return Ok(IDLE_CYCLES);
            }
            self.stopped = false;
            log::debug!("leaving STOP at PC=0x{:04X}", self.regs.pc);
        }

        if self.halted {
            if bus.pending_interrupts() & 0x1F == 0 {
                return Ok(IDLE_CYCLES);
            }
            self.halted = false;
        }

        let opcode = self.fetch8(bus);
        let cycles = self.exec_opcode(bus, opcode)?;
        self.apply_ime_delay();
        Ok(cycles)
    }
}
