use super::interrupts::{Interrupt, Interrupts};

/// T-cycles for one 8-bit transfer on the internal 8192 Hz clock.
const TRANSFER_CYCLES: u32 = 4096;

/// Serial port modelled via SB/SC with no link partner attached.
///
/// A transfer started with the internal clock records the outgoing SB
/// byte in `output` (test ROMs print through it), then completes after
/// 4096 cycles with 0xFF shifted in and the Serial interrupt requested.
/// Transfers on the external clock never complete.
#[derive(Default)]
pub(crate) struct Serial {
    pub(super) sb: u8,
    pub(super) sc: u8,
    remaining: u32,
    pub(super) output: Vec<u8>,
}

impl Serial {
    pub(super) fn init_dmg(&mut self) {
        self.sb = 0x00;
        self.sc = 0x7E;
        self.remaining = 0;
    }

    #[inline]
    pub(super) fn read_sc(&self) -> u8 {
        self.sc | 0x7E
    }

    pub(super) fn write_sc(&mut self, value: u8) {
        self.sc = value | 0x7E;
        if (value & 0x81) == 0x81 {
            self.output.push(self.sb);
            self.remaining = TRANSFER_CYCLES;
        }
    }

    pub(super) fn tick(&mut self, cycles: u32, interrupts: &mut Interrupts) {
        if self.remaining == 0 {
            return;
        }
        self.remaining = self.remaining.saturating_sub(cycles);
        if self.remaining == 0 {
            self.sb = 0xFF;
            self.sc &= !0x80;
            interrupts.request(Interrupt::Serial);
        }
    }
}
