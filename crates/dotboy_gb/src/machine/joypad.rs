/// The eight DMG buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    Right,
    Left,
    Up,
    Down,
    A,
    B,
    Select,
    Start,
}

impl Button {
    /// Returns (is action group, bit index in the P1 low nibble).
    fn line(self) -> (bool, u8) {
        match self {
            Button::Right => (false, 0),
            Button::Left => (false, 1),
            Button::Up => (false, 2),
            Button::Down => (false, 3),
            Button::A => (true, 0),
            Button::B => (true, 1),
            Button::Select => (true, 2),
            Button::Start => (true, 3),
        }
    }
}

/// P1 (0xFF00) button matrix.
///
/// `buttons` and `dpad` use 1 for "pressed"; the register itself reports
/// pressed lines as 0.
pub(crate) struct Joypad {
    select: u8,
    buttons: u8,
    dpad: u8,
}

impl Default for Joypad {
    fn default() -> Self {
        Self {
            select: 0x30,
            buttons: 0,
            dpad: 0,
        }
    }
}

impl Joypad {
    pub(super) fn read(&self) -> u8 {
        let mut low = 0x0F;
        if (self.select & 0x10) == 0 {
            low &= !self.dpad;
        }
        if (self.select & 0x20) == 0 {
            low &= !self.buttons;
        }
        0xC0 | self.select | (low & 0x0F)
    }

    pub(super) fn write(&mut self, value: u8) {
        self.select = value & 0x30;
    }

    /// Update one button. Returns true on a new press.
    pub(super) fn set(&mut self, button: Button, pressed: bool) -> bool {
        let (action, bit) = button.line();
        let group = if action {
            &mut self.buttons
        } else {
            &mut self.dpad
        };
        let mask = 1u8 << bit;
        let was_pressed = (*group & mask) != 0;
        if pressed {
            *group |= mask;
        } else {
            *group &= !mask;
        }
        pressed && !was_pressed
    }

    #[inline]
    pub(super) fn any_pressed(&self) -> bool {
        (self.buttons | self.dpad) != 0
    }
}
