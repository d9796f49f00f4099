use crate::cpu::Bus;

use super::super::interrupts::Interrupt;
use super::GameBoyBus;

impl Bus for GameBoyBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.read8_mmio(addr)
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.write8_mmio(addr, value)
    }

    fn tick(&mut self, cycles: u32) {
        self.tick_peripherals(cycles);
    }

    fn pending_interrupts(&mut self) -> u8 {
        self.interrupts.active().bits()
    }

    fn acknowledge_interrupt(&mut self, index: u8) {
        if let Some(source) = Interrupt::from_index(index) {
            self.interrupts.acknowledge(source);
        }
    }

    fn joypad_pressed(&mut self) -> bool {
        self.joypad.any_pressed()
    }
}
