use super::super::interrupts::Interrupt;
use super::super::joypad::Button;
use super::GameBoyBus;

impl GameBoyBus {
    /// Press or release a button. A new press requests the Joypad interrupt.
    pub(in super::super) fn set_button(&mut self, button: Button, pressed: bool) {
        if self.joypad.set(button, pressed) {
            self.request_interrupt(Interrupt::Joypad);
            log::trace!("GB joypad: {button:?} pressed");
        }
    }
}
