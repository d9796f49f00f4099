use crate::CLOCK_HZ;

/// The five MBC3 clock registers as seen through 0x08-0x0C.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(super) struct RtcRegisters {
    pub(super) seconds: u8,
    pub(super) minutes: u8,
    pub(super) hours: u8,
    /// 9-bit day counter.
    pub(super) days: u16,
    pub(super) halted: bool,
    pub(super) day_carry: bool,
}

/// MBC3 real-time clock driven by emulated cycles, so it advances in
/// lock-step with the rest of the machine instead of the host clock.
#[derive(Default)]
pub(super) struct Rtc {
    live: RtcRegisters,
    latched: RtcRegisters,
    subsecond: u32,
    latch_armed: bool,
}

impl Rtc {
    pub(super) fn tick(&mut self, cycles: u32) {
        if self.live.halted {
            return;
        }
        self.subsecond += cycles;
        while self.subsecond >= CLOCK_HZ {
            self.subsecond -= CLOCK_HZ;
            self.advance_second();
        }
    }

    fn advance_second(&mut self) {
        let r = &mut self.live;
        r.seconds = (r.seconds + 1) & 0x3F;
        if r.seconds != 60 {
            return;
        }
        r.seconds = 0;
        r.minutes = (r.minutes + 1) & 0x3F;
        if r.minutes != 60 {
            return;
        }
        r.minutes = 0;
        r.hours = (r.hours + 1) & 0x1F;
        if r.hours != 24 {
            return;
        }
        r.hours = 0;
        r.days += 1;
        if r.days > 0x1FF {
            r.days = 0;
            r.day_carry = true;
        }
    }

    /// Writing 0x00 then 0x01 copies the live registers into the latch.
    pub(super) fn write_latch(&mut self, value: u8) {
        if self.latch_armed && value == 0x01 {
            self.latched = self.live;
            log::trace!("GB RTC: latched {:?}", self.latched);
        }
        self.latch_armed = value == 0x00;
    }

    pub(super) fn read(&self, register: u8) -> u8 {
        let r = &self.latched;
        match register {
            0x08 => r.seconds,
            0x09 => r.minutes,
            0x0A => r.hours,
            0x0B => r.days as u8,
            0x0C => {
                ((r.days >> 8) as u8 & 0x01)
                    | if r.halted { 0x40 } else { 0 }
                    | if r.day_carry { 0x80 } else { 0 }
            }
            _ => 0xFF,
        }
    }

    pub(super) fn write(&mut self, register: u8, value: u8) {
        let r = &mut self.live;
        match register {
            0x08 => {
                r.seconds = value & 0x3F;
                self.subsecond = 0;
            }
            0x09 => r.minutes = value & 0x3F,
            0x0A => r.hours = value & 0x1F,
            0x0B => r.days = (r.days & 0x100) | value as u16,
            0x0C => {
                r.days = (r.days & 0xFF) | (((value & 0x01) as u16) << 8);
                r.halted = (value & 0x40) != 0;
                r.day_carry = (value & 0x80) != 0;
            }
            _ => {}
        }
    }
}
