use super::super::{Bus, Cpu};
use crate::GbError;

impl Cpu {
    pub(in super::super) fn exec_halt(&mut self) -> u32 {
        self.halted = true;
        4
    }

    /// STOP is encoded as 0x10 0x00; the second byte is skipped.
    pub(in super::super) fn exec_stop<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let _ = self.fetch8(bus);
        self.stopped = true;
        log::debug!("STOP at PC=0x{:04X}", self.regs.pc.wrapping_sub(2));
        4
    }

    pub(in super::super) fn exec_di(&mut self) -> u32 {
        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        4
    }

    pub(in super::super) fn exec_ei(&mut self) -> u32 {
        if !self.ime {
            self.ime_enable_pending = true;
        }
        4
    }

    /// Hard-lock on one of the opcode holes. The returned error is also
    /// kept so every later `step` reports it again.
    pub(in super::super) fn lock_illegal(&mut self, opcode: u8) -> GbError {
        let address = self.regs.pc.wrapping_sub(1);
        log::error!(
            "CPU locked: illegal opcode 0x{opcode:02X} at PC=0x{address:04X} \
             (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
            sp = self.regs.sp,
            af = self.regs.af(),
            bc = self.regs.bc(),
            de = self.regs.de(),
            hl = self.regs.hl(),
        );
        let err = GbError::IllegalOpcode { opcode, address };
        self.locked = Some(err.clone());
        err
    }
}
