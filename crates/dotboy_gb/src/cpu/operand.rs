use super::{Bus, Cpu};

/// 8-bit operand as encoded in the low three bits (or bits 3-5) of an
/// opcode: B, C, D, E, H, L, (HL), A.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum R8 {
    B,
    C,
    D,
    E,
    H,
    L,
    HlIndirect,
    A,
}

impl R8 {
    const TABLE: [R8; 8] = [
        R8::B,
        R8::C,
        R8::D,
        R8::E,
        R8::H,
        R8::L,
        R8::HlIndirect,
        R8::A,
    ];

    /// Decode a 3-bit register field.
    #[inline]
    pub fn from_bits(bits: u8) -> R8 {
        Self::TABLE[(bits & 0x07) as usize]
    }

    /// Operand in bits 0-2.
    #[inline]
    pub fn low(opcode: u8) -> R8 {
        Self::from_bits(opcode)
    }

    /// Operand in bits 3-5.
    #[inline]
    pub fn high(opcode: u8) -> R8 {
        Self::from_bits(opcode >> 3)
    }

    #[inline]
    pub fn is_memory(self) -> bool {
        self == R8::HlIndirect
    }
}

/// 16-bit register pair selected by bits 4-5 of an opcode. The stack
/// instructions use `AF` where the others use `SP`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum R16 {
    BC,
    DE,
    HL,
    SP,
    AF,
}

impl R16 {
    /// Pair table used by loads, INC/DEC and ADD HL.
    #[inline]
    pub fn from_bits(opcode: u8) -> R16 {
        match (opcode >> 4) & 0x03 {
            0 => R16::BC,
            1 => R16::DE,
            2 => R16::HL,
            _ => R16::SP,
        }
    }

    /// Pair table used by PUSH and POP.
    #[inline]
    pub fn stack_from_bits(opcode: u8) -> R16 {
        match (opcode >> 4) & 0x03 {
            0 => R16::BC,
            1 => R16::DE,
            2 => R16::HL,
            _ => R16::AF,
        }
    }
}

impl Cpu {
    /// Read an 8-bit operand; (HL) goes through the bus.
    #[inline]
    pub fn read_r8<B: Bus>(&mut self, bus: &mut B, reg: R8) -> u8 {
        match reg {
            R8::B => self.regs.b,
            R8::C => self.regs.c,
            R8::D => self.regs.d,
            R8::E => self.regs.e,
            R8::H => self.regs.h,
            R8::L => self.regs.l,
            R8::HlIndirect => bus.read8(self.regs.hl()),
            R8::A => self.regs.a,
        }
    }

    #[inline]
    pub fn write_r8<B: Bus>(&mut self, bus: &mut B, reg: R8, value: u8) {
        match reg {
            R8::B => self.regs.b = value,
            R8::C => self.regs.c = value,
            R8::D => self.regs.d = value,
            R8::E => self.regs.e = value,
            R8::H => self.regs.h = value,
            R8::L => self.regs.l = value,
            R8::HlIndirect => bus.write8(self.regs.hl(), value),
            R8::A => self.regs.a = value,
        }
    }

    #[inline]
    pub fn read_r16(&self, reg: R16) -> u16 {
        match reg {
            R16::BC => self.regs.bc(),
            R16::DE => self.regs.de(),
            R16::HL => self.regs.hl(),
            R16::SP => self.regs.sp,
            R16::AF => self.regs.af(),
        }
    }

    #[inline]
    pub fn write_r16(&mut self, reg: R16, value: u16) {
        match reg {
            R16::BC => self.regs.set_bc(value),
            R16::DE => self.regs.set_de(value),
            R16::HL => self.regs.set_hl(value),
            R16::SP => self.regs.sp = value,
            R16::AF => self.regs.set_af(value),
        }
    }
}
