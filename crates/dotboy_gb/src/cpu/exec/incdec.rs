use super::super::{Bus, Cpu, R16, R8};

impl Cpu {
    pub(in super::super) fn exec_inc8<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let target = R8::high(opcode);
        let value = self.read_r8(bus, target);
        let result = self.alu_inc8(value);
        self.write_r8(bus, target, result);
        if target.is_memory() {
            12
        } else {
            4
        }
    }

    pub(in super::super) fn exec_dec8<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let target = R8::high(opcode);
        let value = self.read_r8(bus, target);
        let result = self.alu_dec8(value);
        self.write_r8(bus, target, result);
        if target.is_memory() {
            12
        } else {
            4
        }
    }

    /// INC rr. No flags.
    pub(in super::super) fn exec_inc16(&mut self, opcode: u8) -> u32 {
        let reg = R16::from_bits(opcode);
        self.write_r16(reg, self.read_r16(reg).wrapping_add(1));
        8
    }

    /// DEC rr. No flags.
    pub(in super::super) fn exec_dec16(&mut self, opcode: u8) -> u32 {
        let reg = R16::from_bits(opcode);
        self.write_r16(reg, self.read_r16(reg).wrapping_sub(1));
        8
    }
}
