/// Sound register file (NR10-NR52 and wave RAM).
///
/// No audio is synthesized. Registers keep the values software writes and
/// read back through the hardware's OR masks, and NR52 gates power.
pub(crate) struct Sound {
    /// 0xFF10..=0xFF3F.
    regs: [u8; 0x30],
}

const BASE: u16 = 0xFF10;
const NR52: u16 = 0xFF26;

/// Bits that always read as 1 for 0xFF10..=0xFF2F.
const READ_MASKS: [u8; 0x20] = [
    0x80, 0x3F, 0x00, 0xFF, 0xBF, // NR10-NR14
    0xFF, 0x3F, 0x00, 0xFF, 0xBF, // unused, NR21-NR24
    0x7F, 0xFF, 0x9F, 0xFF, 0xBF, // NR30-NR34
    0xFF, 0xFF, 0x00, 0x00, 0xBF, // unused, NR41-NR44
    0x00, 0x00, 0x70, // NR50-NR52
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];

impl Default for Sound {
    fn default() -> Self {
        Self { regs: [0; 0x30] }
    }
}

impl Sound {
    /// Register values left behind by the DMG boot ROM.
    pub(super) fn init_dmg(&mut self) {
        const POST_BOOT: [(u16, u8); 21] = [
            (0xFF10, 0x80),
            (0xFF11, 0xBF),
            (0xFF12, 0xF3),
            (0xFF13, 0xFF),
            (0xFF14, 0xBF),
            (0xFF16, 0x3F),
            (0xFF17, 0x00),
            (0xFF18, 0xFF),
            (0xFF19, 0xBF),
            (0xFF1A, 0x7F),
            (0xFF1B, 0xFF),
            (0xFF1C, 0x9F),
            (0xFF1D, 0xFF),
            (0xFF1E, 0xBF),
            (0xFF20, 0xFF),
            (0xFF21, 0x00),
            (0xFF22, 0x00),
            (0xFF23, 0xBF),
            (0xFF24, 0x77),
            (0xFF25, 0xF3),
            (0xFF26, 0xF1),
        ];
        for (addr, value) in POST_BOOT {
            self.regs[(addr - BASE) as usize] = value;
        }
    }

    #[inline]
    fn powered(&self) -> bool {
        (self.regs[(NR52 - BASE) as usize] & 0x80) != 0
    }

    pub(super) fn read(&self, addr: u16) -> u8 {
        let index = (addr - BASE) as usize;
        match addr {
            0xFF10..=0xFF2F => self.regs[index] | READ_MASKS[index],
            // Wave RAM.
            _ => self.regs[index],
        }
    }

    pub(super) fn write(&mut self, addr: u16, value: u8) {
        let index = (addr - BASE) as usize;
        match addr {
            NR52 => self.write_nr52(value),
            0xFF10..=0xFF25 => {
                if self.powered() {
                    self.regs[index] = value;
                } else {
                    log::trace!("GB sound: write to 0x{addr:04X} ignored while powered off");
                }
            }
            0xFF30..=0xFF3F => self.regs[index] = value,
            _ => {}
        }
    }

    fn write_nr52(&mut self, value: u8) {
        let was_on = self.powered();
        let now_on = (value & 0x80) != 0;
        let nr52 = (NR52 - BASE) as usize;

        if was_on && !now_on {
            self.regs[..nr52].fill(0);
            self.regs[nr52] = 0;
            log::debug!("GB sound: powered off");
        } else if !was_on && now_on {
            self.regs[nr52] = 0x80;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_apply_or_masks() {
        let mut sound = Sound::default();
        sound.write(NR52, 0x80);
        sound.write(0xFF11, 0x00);
        assert_eq!(sound.read(0xFF11), 0x3F);
        sound.write(0xFF12, 0x5A);
        assert_eq!(sound.read(0xFF12), 0x5A);
        assert_eq!(sound.read(0xFF15), 0xFF);
        assert_eq!(sound.read(0xFF27), 0xFF);
    }

    #[test]
    fn power_off_clears_and_locks_registers() {
        let mut sound = Sound::default();
        sound.init_dmg();
        assert_eq!(sound.read(NR52), 0xF1);

        sound.write(NR52, 0x00);
        assert_eq!(sound.read(NR52), 0x70);
        assert_eq!(sound.read(0xFF24), 0x00);

        sound.write(0xFF24, 0x77);
        assert_eq!(sound.read(0xFF24), 0x00);

        sound.write(NR52, 0x80);
        sound.write(0xFF24, 0x77);
        assert_eq!(sound.read(0xFF24), 0x77);
    }

    #[test]
    fn wave_ram_is_plain_storage() {
        let mut sound = Sound::default();
        sound.write(0xFF30, 0x12);
        sound.write(0xFF3F, 0xEF);
        assert_eq!(sound.read(0xFF30), 0x12);
        assert_eq!(sound.read(0xFF3F), 0xEF);
    }
}
