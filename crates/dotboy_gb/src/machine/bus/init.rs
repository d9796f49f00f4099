use super::GameBoyBus;

impl GameBoyBus {
    /// Initialize I/O registers to the DMG state the boot ROM leaves behind
    /// when it jumps to 0x0100.
    pub(super) fn apply_dmg_initial_io_state(&mut self) {
        self.randomize_internal_ram();

        self.joypad.write(0x30);
        self.serial.init_dmg();
        self.timer.init_dmg();
        self.sound.init_dmg();
        self.ppu.init_dmg();

        // IF has the V-Blank request from the boot ROM's last frame still
        // set; the upper three bits read as 1 regardless.
        self.interrupts.write_pending(0x01);
        self.interrupts.write_enabled(0x00);
        self.dma_source = 0xFF;
    }

    /// Fill WRAM and HRAM with a fixed xorshift pattern.
    ///
    /// Both are undefined at power-on. A deterministic non-zero pattern
    /// keeps runs reproducible without letting software rely on zeroes.
    fn randomize_internal_ram(&mut self) {
        let mut x: u32 = 0xC0DE_1234;
        let mut next_byte = || {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            x as u8
        };

        for byte in self.wram.iter_mut() {
            *byte = next_byte();
        }
        for byte in self.hram.iter_mut() {
            *byte = next_byte();
        }
    }
}
