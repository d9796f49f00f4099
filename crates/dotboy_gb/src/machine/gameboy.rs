use dotboy_common::Key;

use super::cartridge::{logo_matches, Cartridge};
use super::ppu::PpuMode;
use super::{Button, CartridgeHeader, GameBoyBus, Interrupt};
use crate::cpu::{Bus, Cpu};
use crate::{GbError, CYCLES_PER_FRAME};

/// `LD B,B`, used by test ROMs as a software breakpoint.
const SOFTWARE_BREAKPOINT: u8 = 0x40;

/// Options applied when a ROM is loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BootOptions {
    /// Reject ROMs whose header logo differs from the reference logo, the
    /// way the boot ROM would lock up on them.
    pub verify_logo: bool,
}

/// Why a `run_until_*` call returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The PPU entered V-Blank.
    FrameComplete,
    /// Execution reached the given address.
    Breakpoint(u16),
    /// The cycle budget ran out first.
    CycleBudgetExhausted,
}

/// High-level Game Boy machine.
///
/// Owns the CPU and the bus, and is the only place where time advances: each
/// `step` runs one instruction, ticks the peripherals by the cycles it took
/// and then gives the CPU a chance to dispatch an interrupt.
pub struct GameBoy {
    pub cpu: Cpu,
    pub(crate) bus: GameBoyBus,
    options: BootOptions,
    header: Option<CartridgeHeader>,
    cycles: u64,
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBoy {
    pub fn new() -> Self {
        Self::with_options(BootOptions::default())
    }

    pub fn with_options(options: BootOptions) -> Self {
        Self {
            cpu: Cpu::new(),
            bus: GameBoyBus::default(),
            options,
            header: None,
            cycles: 0,
        }
    }

    /// Build a machine and load `rom` into it.
    pub fn from_rom(rom: &[u8], options: BootOptions) -> Result<Self, GbError> {
        let mut gb = Self::with_options(options);
        gb.load_rom(rom)?;
        Ok(gb)
    }

    /// Insert a cartridge and return the machine to its post-boot state.
    ///
    /// On error the previously loaded cartridge stays in place.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<&CartridgeHeader, GbError> {
        if self.options.verify_logo && !logo_matches(rom) {
            log::warn!("boot logo mismatch; refusing to start");
            return Err(GbError::BootLogoMismatch);
        }

        let mut bus = GameBoyBus::default();
        let header = bus.load_rom(rom)?;
        self.bus = bus;
        self.cpu.reset();
        self.cycles = 0;
        Ok(self.header.insert(header))
    }

    /// Power-cycle the machine. The inserted cartridge stays, along with its
    /// RAM and clock, but its bank registers return to power-on values.
    pub fn reset(&mut self) {
        let mut cartridge = std::mem::replace(&mut self.bus.cartridge, Cartridge::empty());
        cartridge.reset_control();
        self.bus = GameBoyBus::default();
        self.bus.cartridge = cartridge;
        self.cpu.reset();
        self.cycles = 0;
    }

    pub fn header(&self) -> Option<&CartridgeHeader> {
        self.header.as_ref()
    }

    /// Run one CPU step, advance the peripherals by its cost and service a
    /// pending interrupt. Returns the total T-cycles that elapsed.
    ///
    /// While the CPU is in STOP the peripherals are frozen.
    pub fn step(&mut self) -> Result<u32, GbError> {
        let mut cycles = self.cpu.step(&mut self.bus)?;
        if !self.cpu.is_stopped() {
            self.bus.tick(cycles);
        }

        if let Some(dispatch) = self.cpu.service_interrupt(&mut self.bus) {
            self.bus.tick(dispatch);
            cycles += dispatch;
        }

        self.cycles += cycles as u64;
        Ok(cycles)
    }

    /// Run for one frame's worth of cycles (70224). Returns the cycles
    /// actually run, which may overshoot by part of an instruction.
    pub fn step_frame(&mut self) -> Result<u32, GbError> {
        let mut elapsed = 0;
        while elapsed < CYCLES_PER_FRAME {
            elapsed += self.step()?;
        }
        Ok(elapsed)
    }

    /// Run until the PPU enters V-Blank. With the LCD off no frame ever
    /// completes, so the run gives up after two frames' worth of cycles.
    pub fn run_until_frame(&mut self) -> Result<RunOutcome, GbError> {
        self.bus.ppu.take_frame_ready();
        let budget = 2 * CYCLES_PER_FRAME as u64;
        let mut elapsed = 0u64;
        while elapsed < budget {
            elapsed += self.step()? as u64;
            if self.bus.ppu.take_frame_ready() {
                return Ok(RunOutcome::FrameComplete);
            }
        }
        Ok(RunOutcome::CycleBudgetExhausted)
    }

    /// Run until PC reaches one of `breakpoints`, stopping before the
    /// instruction there executes. At least one step is always taken, so
    /// calling again from a breakpoint moves past it.
    pub fn run_until_breakpoint(
        &mut self,
        breakpoints: &[u16],
        max_cycles: u64,
    ) -> Result<RunOutcome, GbError> {
        let mut elapsed = 0u64;
        while elapsed < max_cycles {
            elapsed += self.step()? as u64;
            let pc = self.cpu.regs.pc;
            if !self.cpu.halted && breakpoints.contains(&pc) {
                log::debug!("breakpoint at 0x{pc:04X} after {elapsed} cycles");
                return Ok(RunOutcome::Breakpoint(pc));
            }
        }
        Ok(RunOutcome::CycleBudgetExhausted)
    }

    /// Run until an `LD B,B` instruction has executed. The outcome carries
    /// the address of that instruction.
    pub fn run_until_software_breakpoint(
        &mut self,
        max_cycles: u64,
    ) -> Result<RunOutcome, GbError> {
        let mut elapsed = 0u64;
        while elapsed < max_cycles {
            let pc = self.cpu.regs.pc;
            let fetching = !self.cpu.halted && !self.cpu.is_stopped();
            let opcode = self.bus.read8_mmio(pc);
            elapsed += self.step()? as u64;
            if fetching && opcode == SOFTWARE_BREAKPOINT {
                log::debug!("software breakpoint at 0x{pc:04X}");
                return Ok(RunOutcome::Breakpoint(pc));
            }
        }
        Ok(RunOutcome::CycleBudgetExhausted)
    }

    /// Shade indices (0-3) for the last rendered frame, row-major,
    /// `SCREEN_WIDTH * SCREEN_HEIGHT` entries.
    pub fn framebuffer(&self) -> &[u8] {
        self.bus.ppu.framebuffer()
    }

    /// Number of V-Blank entries since power-on.
    pub fn frame_count(&self) -> u64 {
        self.bus.ppu.frames()
    }

    pub fn ppu_mode(&self) -> PpuMode {
        self.bus.ppu.mode()
    }

    pub fn ly(&self) -> u8 {
        self.bus.ppu.ly()
    }

    /// Highest-priority interrupt that is both enabled and requested.
    pub fn pending_interrupt(&self) -> Option<Interrupt> {
        self.bus.interrupts.pending_and_enabled()
    }

    /// Total T-cycles run since the last load or reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Read a byte the way the CPU would see it, without side effects.
    pub fn peek(&self, addr: u16) -> u8 {
        self.bus.read8_mmio(addr)
    }

    /// Bytes sent over the serial port so far.
    pub fn serial_output(&self) -> &[u8] {
        &self.bus.serial.output
    }

    pub fn take_serial_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.bus.serial.output)
    }

    /// External RAM image of a battery-backed cartridge.
    pub fn save_data(&self) -> Option<&[u8]> {
        match &self.header {
            Some(header) if header.has_battery && !self.bus.cartridge.ram().is_empty() => {
                Some(self.bus.cartridge.ram())
            }
            _ => None,
        }
    }

    /// Restore external RAM from a save. A shorter image fills the start of
    /// RAM and leaves the rest alone.
    pub fn load_save(&mut self, data: &[u8]) -> Result<(), GbError> {
        let battery = self.header.as_ref().is_some_and(|h| h.has_battery);
        let ram = self.bus.cartridge.ram_mut();
        if !battery || ram.is_empty() {
            return Err(GbError::SaveNotSupported);
        }
        if data.len() > ram.len() {
            return Err(GbError::SaveTooLarge {
                len: data.len(),
                max: ram.len(),
            });
        }
        ram[..data.len()].copy_from_slice(data);
        log::info!("restored {} bytes of cartridge RAM", data.len());
        Ok(())
    }

    pub fn set_button(&mut self, button: Button, pressed: bool) {
        self.bus.set_button(button, pressed);
    }

    /// Update joypad state from a frontend key event.
    ///
    /// - Z => A, X => B
    /// - A => Select, S => Start
    /// - Arrow keys => D-pad
    pub fn handle_key(&mut self, key: Key, pressed: bool) {
        let button = match key {
            Key::Right => Button::Right,
            Key::Left => Button::Left,
            Key::Up => Button::Up,
            Key::Down => Button::Down,
            Key::Z => Button::A,
            Key::X => Button::B,
            Key::A => Button::Select,
            Key::S => Button::Start,
            _ => return,
        };
        self.set_button(button, pressed);
    }
}
