use bitflags::bitflags;

bitflags! {
    /// Bit layout shared by IE (0xFFFF) and IF (0xFF0F).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct InterruptFlags: u8 {
        const VBLANK = 1 << 0;
        const LCD_STAT = 1 << 1;
        const TIMER = 1 << 2;
        const SERIAL = 1 << 3;
        const JOYPAD = 1 << 4;
    }
}

/// Interrupt sources in priority order (V-Blank is serviced first).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interrupt {
    VBlank,
    LcdStat,
    Timer,
    Serial,
    Joypad,
}

impl Interrupt {
    pub const ALL: [Interrupt; 5] = [
        Interrupt::VBlank,
        Interrupt::LcdStat,
        Interrupt::Timer,
        Interrupt::Serial,
        Interrupt::Joypad,
    ];

    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Interrupt> {
        Interrupt::ALL.get(index as usize).copied()
    }

    #[inline]
    pub fn flag(self) -> InterruptFlags {
        InterruptFlags::from_bits_truncate(1 << self.index())
    }
}

/// Interrupt controller: the IE and IF registers.
///
/// This only tracks which sources are enabled and requested. The master
/// enable (IME) belongs to the CPU and is never consulted here.
#[derive(Clone, Debug, Default)]
pub struct Interrupts {
    /// IE keeps all eight bits as written; only the low five take part in
    /// dispatch.
    enabled: u8,
    requested: InterruptFlags,
}

impl Interrupts {
    #[inline]
    pub fn request(&mut self, source: Interrupt) {
        self.requested |= source.flag();
    }

    #[inline]
    pub fn acknowledge(&mut self, source: Interrupt) {
        self.requested.remove(source.flag());
    }

    #[inline]
    pub fn read_enabled(&self) -> u8 {
        self.enabled
    }

    #[inline]
    pub fn write_enabled(&mut self, value: u8) {
        self.enabled = value;
    }

    /// IF read: the three unused upper bits always read back as 1.
    #[inline]
    pub fn read_pending(&self) -> u8 {
        self.requested.bits() | 0xE0
    }

    #[inline]
    pub fn write_pending(&mut self, value: u8) {
        self.requested = InterruptFlags::from_bits_truncate(value);
    }

    /// Bits that are both requested and enabled.
    #[inline]
    pub fn active(&self) -> InterruptFlags {
        self.requested & InterruptFlags::from_bits_truncate(self.enabled)
    }

    /// Highest-priority source that is both enabled and requested.
    pub fn pending_and_enabled(&self) -> Option<Interrupt> {
        let active = self.active().bits();
        if active == 0 {
            return None;
        }
        Interrupt::from_index(active.trailing_zeros() as u8)
    }
}
