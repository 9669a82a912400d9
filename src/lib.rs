//! Core of a Game Boy (DMG) emulator: a cycle-counted LR35902 interpreter,
//! the 64 KiB address space it executes against, and a minimal PPU that
//! turns VRAM into a frame of shades. Hosts own the window, the renderer
//! and the input mapping; this crate owns everything behind them.
//!
//! ```no_run
//! use dmg_core::Emulator;
//!
//! let mut emu = Emulator::new();
//! emu.load_rom("tetris.gb").unwrap();
//!
//! loop {
//!     emu.run(); // once per rendered frame
//!     let _frame = emu.ppu().video_ram();
//! }
//! ```

mod cartridge;
mod cpu;
pub mod disasm;
mod error;
mod joypad;
mod memory;
mod ppu;
mod util;

use std::path::Path;
use std::time::Instant;

pub use cartridge::Cartridge;
pub use cpu::{Cpu, Fault, Flags, State, NOMINAL_CLOCK_HZ, R16, R8};
pub use error::Error;
pub use joypad::JoypadInput;
pub use memory::{AccessMode, Handle, Mmu, BOOTSTRAP_LEN};
pub use ppu::{Ppu, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Upper bound on how far a single `run()` call may advance the machine.
/// If the host stalls for longer than a frame, the surplus wall-clock time
/// is forfeited instead of triggering a catch-up death spiral.
const MAX_CYCLES_PER_RUN: u64 = 70_224;

/// Owns and wires the MMU, CPU and PPU. One host thread drives it: `run()`
/// once per displayed frame, input notifications in between.
pub struct Emulator {
    mmu: Mmu,
    cpu: Cpu,
    ppu: Ppu,
    last_run: Option<Instant>,
}

impl Emulator {
    pub fn new() -> Emulator {
        let mut mmu = Mmu::new();
        let ppu = Ppu::new();
        ppu.register_hooks(&mut mmu);

        Emulator {
            mmu,
            cpu: Cpu::new(),
            ppu,
            last_run: None,
        }
    }

    /// Loads a ROM file, installs it and resets the CPU. On error the
    /// emulator state is untouched.
    pub fn load_rom<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        let cartridge = Cartridge::from_file(path)?;
        self.set_cartridge(cartridge);
        Ok(())
    }

    /// Installs an already-loaded cartridge and resets the CPU.
    pub fn set_cartridge(&mut self, cartridge: Cartridge) {
        self.mmu.install_cartridge(cartridge);
        self.cpu.reset();
    }

    /// Replaces the built-in 256-byte bootstrap ROM and resets the CPU.
    pub fn set_bootstrap(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.mmu.install_bootstrap(bytes)?;
        self.cpu.reset();
        Ok(())
    }

    /// Zeroes the CPU and reinitialises MMU memory; the installed
    /// cartridge and bootstrap survive.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.mmu.reset();
        self.last_run = None;
    }

    /// Advances the machine by exactly one instruction. Debugger hosts
    /// single-step with this; frame-paced hosts use [`Emulator::run`].
    pub fn step(&mut self) {
        self.cpu.step(&mut self.mmu);
    }

    /// Advances emulation by the wall-clock time elapsed since the last
    /// call, at the nominal 4.194304 MHz clock rate, then produces a frame.
    /// The very first call performs exactly one step. Returns the number
    /// of instructions executed.
    pub fn run(&mut self) -> usize {
        let target = match self.last_run {
            None => self.cpu.cycle() + 1,
            Some(baseline) => {
                let elapsed_us = baseline.elapsed().as_micros() as u64;
                let budget = (elapsed_us * NOMINAL_CLOCK_HZ / 1_000_000).min(MAX_CYCLES_PER_RUN);
                self.cpu.cycle() + budget
            }
        };

        // A suspended CPU accrues 4 idle cycles per step toward the
        // target; a stopped one never advances the counter and must break
        // the loop.
        let mut steps = 0;
        while self.cpu.cycle() < target && self.cpu.state() != State::Stopped {
            self.cpu.step(&mut self.mmu);
            steps += 1;
        }

        self.ppu.write_video_ram(&self.mmu);
        self.last_run = Some(Instant::now());

        steps
    }

    /// Decodes the instruction at the current PC into a trace line.
    pub fn disassembly(&self) -> String {
        disasm::decode(&self.mmu, self.cpu.register16(R16::PC))
    }

    pub fn set_joypad(&mut self, input: JoypadInput, pressed: bool) {
        self.mmu.joypad_mut().set_input(input, pressed);
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn ppu(&self) -> &Ppu {
        &self.ppu
    }

    /// Debugger-level access to the address space.
    pub fn mmu(&self) -> &Mmu {
        &self.mmu
    }

    pub fn mmu_mut(&mut self) -> &mut Mmu {
        &mut self.mmu
    }

    /// The fault that terminated execution, if the CPU hit one of the
    /// unused opcodes since the last reset.
    pub fn fault(&self) -> Option<Error> {
        self.cpu.fault().map(|fault| Error::UndefinedOpcode {
            pc: fault.pc,
            opcode: fault.opcode,
        })
    }
}

impl Default for Emulator {
    fn default() -> Emulator {
        Emulator::new()
    }
}
