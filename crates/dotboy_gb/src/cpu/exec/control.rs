use super::super::{Bus, Cpu};

impl Cpu {
    pub(in super::super) fn exec_jr_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let cond = self.condition(opcode);
        self.jr(bus, cond)
    }

    pub(in super::super) fn exec_jp_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let cond = self.condition(opcode);
        self.jp(bus, cond)
    }

    pub(in super::super) fn exec_jp_hl(&mut self) -> u32 {
        self.regs.pc = self.regs.hl();
        4
    }

    pub(in super::super) fn exec_call_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let cond = self.condition(opcode);
        self.call(bus, cond)
    }

    pub(in super::super) fn exec_ret_cc<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let cond = self.condition(opcode);
        self.ret_cond(bus, cond)
    }
}
