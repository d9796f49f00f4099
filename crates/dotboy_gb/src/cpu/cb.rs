use super::{Bus, Cpu, Flag, R8};

impl Cpu {
    /// Execute the byte after a 0xCB prefix.
    ///
    /// Bits 6-7 select the group (rotate/shift, BIT, RES, SET), bits 3-5 the
    /// operation or bit number and bits 0-2 the operand.
    pub(super) fn exec_cb<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let cb = self.fetch8(bus);
        let target = R8::low(cb);
        let bit = (cb >> 3) & 0x07;
        let value = self.read_r8(bus, target);

        match cb >> 6 {
            0 => {
                let result = self.rotate(bit, value);
                self.write_r8(bus, target, result);
            }
            1 => {
                self.set_flag(Flag::Z, value & (1 << bit) == 0);
                self.set_flag(Flag::N, false);
                self.set_flag(Flag::H, true);
                // BIT never writes back.
                return if target.is_memory() { 12 } else { 8 };
            }
            2 => self.write_r8(bus, target, value & !(1 << bit)),
            _ => self.write_r8(bus, target, value | (1 << bit)),
        }

        if target.is_memory() {
            16
        } else {
            8
        }
    }
}
