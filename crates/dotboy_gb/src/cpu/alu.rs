use super::{Cpu, Flag};

/// The eight accumulator operations selected by bits 3-5 of the
/// 0x80-0xBF block and the `op A,d8` immediates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    #[inline]
    pub(super) fn from_opcode(opcode: u8) -> AluOp {
        match (opcode >> 3) & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbc,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Cp,
        }
    }
}

impl Cpu {
    pub(super) fn alu(&mut self, op: AluOp, value: u8) {
        match op {
            AluOp::Add => self.regs.a = self.alu_add(value, false),
            AluOp::Adc => self.regs.a = self.alu_add(value, true),
            AluOp::Sub => self.regs.a = self.alu_sub(value, false),
            AluOp::Sbc => self.regs.a = self.alu_sub(value, true),
            AluOp::And => {
                self.regs.a &= value;
                self.set_flags(self.regs.a == 0, false, true, false);
            }
            AluOp::Xor => {
                self.regs.a ^= value;
                self.set_flags(self.regs.a == 0, false, false, false);
            }
            AluOp::Or => {
                self.regs.a |= value;
                self.set_flags(self.regs.a == 0, false, false, false);
            }
            // Flags of a subtraction, result discarded.
            AluOp::Cp => {
                self.alu_sub(value, false);
            }
        }
    }

    fn alu_add(&mut self, value: u8, use_carry: bool) -> u8 {
        let a = self.regs.a;
        let carry = (use_carry && self.get_flag(Flag::C)) as u8;
        let full = a as u16 + value as u16 + carry as u16;
        let half = (a & 0x0F) + (value & 0x0F) + carry > 0x0F;
        let result = full as u8;
        self.set_flags(result == 0, false, half, full > 0xFF);
        result
    }

    fn alu_sub(&mut self, value: u8, use_carry: bool) -> u8 {
        let a = self.regs.a;
        let carry = (use_carry && self.get_flag(Flag::C)) as u8;
        let full = a as i16 - value as i16 - carry as i16;
        let half = ((a & 0x0F) as i16 - (value & 0x0F) as i16 - carry as i16) < 0;
        let result = full as u8;
        self.set_flags(result == 0, true, half, full < 0);
        result
    }

    /// DAA. Uses N, H and C from the previous arithmetic op; N is kept.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a;
        let mut adjust = 0u8;
        let mut carry = self.get_flag(Flag::C);

        if self.get_flag(Flag::N) {
            if self.get_flag(Flag::H) {
                adjust |= 0x06;
            }
            if carry {
                adjust |= 0x60;
            }
            a = a.wrapping_sub(adjust);
        } else {
            if self.get_flag(Flag::H) || (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if carry || a > 0x99 {
                adjust |= 0x60;
                carry = true;
            }
            a = a.wrapping_add(adjust);
        }

        self.regs.a = a;
        self.set_flag(Flag::Z, a == 0);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, carry);
    }

    /// INC r / INC (HL). C is untouched.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, value & 0x0F == 0x0F);
        result
    }

    /// DEC r / DEC (HL). C is untouched.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, value & 0x0F == 0);
        result
    }

    /// ADD HL,rr. Z is untouched; H is the carry out of bit 11.
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flag::C, hl as u32 + value as u32 > 0xFFFF);
        self.regs.set_hl(hl.wrapping_add(value));
    }

    /// SP plus a signed byte, shared by ADD SP,r8 and LD HL,SP+r8.
    /// H and C come from the unsigned add of the low byte.
    pub(super) fn alu_add_sp_signed(&mut self, offset: u8) -> u16 {
        let sp = self.regs.sp;
        let half = (sp & 0x000F) + (offset as u16 & 0x000F) > 0x000F;
        let carry = (sp & 0x00FF) + offset as u16 > 0x00FF;
        self.set_flags(false, false, half, carry);
        sp.wrapping_add_signed(offset as i8 as i16)
    }

    /// The four unprefixed accumulator rotates (RLCA, RRCA, RLA, RRA).
    /// Unlike their CB forms they always clear Z.
    pub(super) fn rotate_a(&mut self, opcode: u8) {
        let op = (opcode >> 3) & 0x03;
        let value = self.rotate(op, self.regs.a);
        self.regs.a = value;
        self.set_flag(Flag::Z, false);
    }

    /// Rotate/shift group shared with the CB table: RLC, RRC, RL, RR, SLA,
    /// SRA, SWAP, SRL. Sets all four flags.
    pub(super) fn rotate(&mut self, op: u8, value: u8) -> u8 {
        let carry_in = self.get_flag(Flag::C);
        let (result, carry) = match op & 0x07 {
            0 => (value.rotate_left(1), value & 0x80 != 0),
            1 => (value.rotate_right(1), value & 0x01 != 0),
            2 => ((value << 1) | carry_in as u8, value & 0x80 != 0),
            3 => ((value >> 1) | ((carry_in as u8) << 7), value & 0x01 != 0),
            4 => (value << 1, value & 0x80 != 0),
            5 => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            6 => (value.rotate_left(4), false),
            _ => (value >> 1, value & 0x01 != 0),
        };
        self.set_flags(result == 0, false, false, carry);
        result
    }
}
