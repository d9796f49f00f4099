use super::super::alu::AluOp;
use super::super::{Bus, Cpu, Flag, R16, R8};

impl Cpu {
    pub(in super::super) fn exec_alu_r<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let src = R8::low(opcode);
        let value = self.read_r8(bus, src);
        self.alu(AluOp::from_opcode(opcode), value);
        if src.is_memory() {
            8
        } else {
            4
        }
    }

    pub(in super::super) fn exec_alu_d8<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let value = self.fetch8(bus);
        self.alu(AluOp::from_opcode(opcode), value);
        8
    }

    pub(in super::super) fn exec_add_hl_rr(&mut self, opcode: u8) -> u32 {
        let value = self.read_r16(R16::from_bits(opcode));
        self.alu_add16_hl(value);
        8
    }

    pub(in super::super) fn exec_add_sp_r8<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let offset = self.fetch8(bus);
        self.regs.sp = self.alu_add_sp_signed(offset);
        16
    }

    pub(in super::super) fn exec_rotate_a(&mut self, opcode: u8) -> u32 {
        self.rotate_a(opcode);
        4
    }

    pub(in super::super) fn exec_daa(&mut self) -> u32 {
        self.alu_daa();
        4
    }

    pub(in super::super) fn exec_cpl(&mut self) -> u32 {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
        4
    }

    pub(in super::super) fn exec_scf(&mut self) -> u32 {
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, true);
        4
    }

    pub(in super::super) fn exec_ccf(&mut self) -> u32 {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, !carry);
        4
    }
}
