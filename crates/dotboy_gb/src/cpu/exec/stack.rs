use super::super::{Bus, Cpu, R16};

impl Cpu {
    pub(in super::super) fn exec_push<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let value = self.read_r16(R16::stack_from_bits(opcode));
        self.push_u16(bus, value);
        16
    }

    /// POP rr. POP AF drops the low nibble of F.
    pub(in super::super) fn exec_pop<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let value = self.pop_u16(bus);
        self.write_r16(R16::stack_from_bits(opcode), value);
        12
    }

    pub(in super::super) fn exec_ret<B: Bus>(&mut self, bus: &mut B) -> u32 {
        self.regs.pc = self.pop_u16(bus);
        16
    }

    /// RETI enables IME immediately, without the EI delay.
    pub(in super::super) fn exec_reti<B: Bus>(&mut self, bus: &mut B) -> u32 {
        self.regs.pc = self.pop_u16(bus);
        self.ime = true;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        16
    }

    /// RST n: call to opcode & 0x38.
    pub(in super::super) fn exec_rst<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = (opcode & 0x38) as u16;
        16
    }
}
