/// Abstraction over the Game Boy bus (memory and IO) as seen by the CPU.
///
/// Only `read8`/`write8` are required. The interrupt hooks default to going
/// through IE (0xFFFF) and IF (0xFF0F) so a flat test memory behaves like
/// the real register file.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Advance bus-side peripherals by a given number of CPU cycles.
    ///
    /// Default implementation does nothing; system buses override this to
    /// drive the timer, PPU and serial port.
    fn tick(&mut self, _cycles: u32) {}

    /// Interrupt sources that are both enabled and requested (IE & IF),
    /// restricted to the five defined bits.
    fn pending_interrupts(&mut self) -> u8 {
        self.read8(0xFFFF) & self.read8(0xFF0F) & 0x1F
    }

    /// Clear the IF bit for interrupt `index` during dispatch.
    fn acknowledge_interrupt(&mut self, index: u8) {
        let iflags = self.read8(0xFF0F);
        self.write8(0xFF0F, iflags & !(1 << index));
    }

    /// Whether any joypad line is held, used to leave STOP.
    fn joypad_pressed(&mut self) -> bool {
        (self.read8(0xFF00) & 0x0F) != 0x0F
    }
}
