//! The Sharp LR35902 interpreter core: register file, interrupt master
//! enable latch, the halt/stop state machine and the fetch-decode-execute
//! loop. Instruction semantics live in [`execute`], operand plumbing in
//! [`operands`], and the per-opcode metadata shared with the disassembler
//! in [`ops`].

mod daa;
mod execute;
mod operands;
pub(crate) mod ops;
mod registers;

use crate::memory::{AccessMode, Mmu};
use daa::DaaEntry;
use execute::*;
use operands::{Dst8, HighPage, HlStep, Imm8, ImmAddr, Src8};

pub use registers::{Flags, Registers, R16, R8};

/// The DMG master clock in Hz. Four of these T-cycles make one m-cycle.
pub const NOMINAL_CLOCK_HZ: u64 = 4_194_304;

/// T-cycles burned per `step()` while the CPU sits in HALT.
const SUSPENDED_STEP_CYCLES: u64 = 4;

/// Execution states of the CPU.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum State {
    /// Initial state, and entered again by STOP or a fatal fault. `step()`
    /// is a no-op here; only `reset()` leaves this state.
    Stopped,

    /// Normal fetch-decode-execute operation.
    Ready,

    /// Entered by HALT. Interrupt-driven wakeup is not modelled, so the
    /// CPU idles here (4 cycles per step) until the next reset.
    Suspended,
}

/// Record of a fatal execution fault (one of the eleven unused opcodes).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Fault {
    pub pc: u16,
    pub opcode: u8,
}

pub struct Cpu {
    pub(crate) reg: Registers,
    ime: bool,
    state: State,
    cycle: u64,
    fault: Option<Fault>,
    daa_table: Vec<DaaEntry>,
}

impl Cpu {
    pub fn new() -> Cpu {
        Cpu {
            reg: Registers::new(),
            ime: false,
            state: State::Stopped,
            cycle: 0,
            fault: None,
            daa_table: daa::build_table(),
        }
    }

    /// Zeroes the register file and the cycle counter and makes the CPU
    /// ready to fetch from 0x0000.
    pub fn reset(&mut self) {
        self.reg.reset();
        self.ime = false;
        self.state = State::Ready;
        self.cycle = 0;
        self.fault = None;
    }

    /// Fetches, decodes and executes a single instruction, accumulating
    /// its T-cycle cost. No-op while stopped; pure idle while suspended.
    pub fn step(&mut self, mmu: &mut Mmu) {
        match self.state {
            State::Stopped => return,
            State::Suspended => {
                self.cycle += SUSPENDED_STEP_CYCLES;
                return;
            }
            State::Ready => (),
        }

        let instr_pc = self.reg.pc();
        let opcode = self.fetch_u8(mmu);

        if opcode == 0xCB {
            let cb_opcode = self.fetch_u8(mmu);
            self.cycle += ops::OPS_CB[cb_opcode as usize].cycles as u64;
            self.execute_cb(mmu, cb_opcode);
        } else {
            // Cycles are credited before the handler runs so that the
            // conditional branches can refund their fall-through delta.
            self.cycle += ops::OPS[opcode as usize].cycles as u64;
            self.execute(mmu, instr_pc, opcode);
        }
    }

    // Observation surface

    pub fn register8(&self, r: R8) -> u8 {
        self.reg.r8(r)
    }

    pub fn register16(&self, rr: R16) -> u16 {
        self.reg.r16(rr)
    }

    pub fn flag(&self, flag: Flags) -> bool {
        self.reg.flags().contains(flag)
    }

    pub fn flags(&self) -> u8 {
        self.reg.r8(R8::F)
    }

    pub fn ime(&self) -> bool {
        self.ime
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// The fault that stopped the CPU, if any.
    pub fn fault(&self) -> Option<Fault> {
        self.fault
    }

    // Fetch helpers. Each reads at PC and advances it.

    pub(crate) fn fetch_u8(&mut self, mmu: &mut Mmu) -> u8 {
        let pc = self.reg.pc();
        self.reg.set_pc(pc.wrapping_add(1));
        mmu.read(pc)
    }

    pub(crate) fn fetch_i8(&mut self, mmu: &mut Mmu) -> i8 {
        self.fetch_u8(mmu) as i8
    }

    /// 16-bit immediates are stored little-endian.
    pub(crate) fn fetch_u16(&mut self, mmu: &mut Mmu) -> u16 {
        let low = self.fetch_u8(mmu);
        let high = self.fetch_u8(mmu);
        low as u16 | (high as u16) << 8
    }

    pub(crate) fn refund_cycles(&mut self, t: u8) {
        self.cycle -= t as u64;
    }

    pub(crate) fn set_ime(&mut self, ime: bool) {
        self.ime = ime;
    }

    pub(crate) fn daa_lookup(&self, a: u8) -> DaaEntry {
        self.daa_table[daa::index(a, self.reg.flags())]
    }

    fn enter_state(&mut self, state: State) {
        log::debug!("cpu state {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    fn raise_fault(&mut self, pc: u16, opcode: u8) {
        log::error!("undefined opcode {:#04x} at {:#06x}", opcode, pc);
        self.fault = Some(Fault { pc, opcode });
        self.enter_state(State::Stopped);
    }

    fn execute(&mut self, mmu: &mut Mmu, instr_pc: u16, opcode: u8) {
        use HlStep::{Dec, Inc};
        use R16::*;
        use R8::*;

        match opcode {
            0x00 => (),
            0x01 => ld_rr_d16(self, mmu, BC),
            0x02 => ld8(self, mmu, BC, A),
            0x03 => inc_rr(self, BC),
            0x04 => inc8(self, mmu, B),
            0x05 => dec8(self, mmu, B),
            0x06 => ld8(self, mmu, B, Imm8),
            0x07 => rlca(self),
            0x08 => ld_a16_sp(self, mmu),
            0x09 => add_hl_rr(self, BC),
            0x0A => ld8(self, mmu, A, BC),
            0x0B => dec_rr(self, BC),
            0x0C => inc8(self, mmu, C),
            0x0D => dec8(self, mmu, C),
            0x0E => ld8(self, mmu, C, Imm8),
            0x0F => rrca(self),
            0x10 => {
                // STOP is encoded as 0x10 0x00; swallow the pad byte
                self.fetch_u8(mmu);
                self.enter_state(State::Stopped);
            }
            0x11 => ld_rr_d16(self, mmu, DE),
            0x12 => ld8(self, mmu, DE, A),
            0x13 => inc_rr(self, DE),
            0x14 => inc8(self, mmu, D),
            0x15 => dec8(self, mmu, D),
            0x16 => ld8(self, mmu, D, Imm8),
            0x17 => rla(self),
            0x18 => jr(self, mmu),
            0x19 => add_hl_rr(self, DE),
            0x1A => ld8(self, mmu, A, DE),
            0x1B => dec_rr(self, DE),
            0x1C => inc8(self, mmu, E),
            0x1D => dec8(self, mmu, E),
            0x1E => ld8(self, mmu, E, Imm8),
            0x1F => rra(self),
            0x20 => {
                let cond = !self.reg.flags().contains(Flags::Z);
                jr_cond(self, mmu, cond);
            }
            0x21 => ld_rr_d16(self, mmu, HL),
            0x22 => ld8(self, mmu, Inc, A),
            0x23 => inc_rr(self, HL),
            0x24 => inc8(self, mmu, H),
            0x25 => dec8(self, mmu, H),
            0x26 => ld8(self, mmu, H, Imm8),
            0x27 => daa(self),
            0x28 => {
                let cond = self.reg.flags().contains(Flags::Z);
                jr_cond(self, mmu, cond);
            }
            0x29 => add_hl_rr(self, HL),
            0x2A => ld8(self, mmu, A, Inc),
            0x2B => dec_rr(self, HL),
            0x2C => inc8(self, mmu, L),
            0x2D => dec8(self, mmu, L),
            0x2E => ld8(self, mmu, L, Imm8),
            0x2F => cpl(self),
            0x30 => {
                let cond = !self.reg.flags().contains(Flags::C);
                jr_cond(self, mmu, cond);
            }
            0x31 => ld_rr_d16(self, mmu, SP),
            0x32 => ld8(self, mmu, Dec, A),
            0x33 => inc_rr(self, SP),
            0x34 => {
                let hl = mmu.handle(self.reg.hl(), AccessMode::ReadWrite);
                inc8(self, mmu, hl);
            }
            0x35 => {
                let hl = mmu.handle(self.reg.hl(), AccessMode::ReadWrite);
                dec8(self, mmu, hl);
            }
            0x36 => ld8(self, mmu, HL, Imm8),
            0x37 => scf(self),
            0x38 => {
                let cond = self.reg.flags().contains(Flags::C);
                jr_cond(self, mmu, cond);
            }
            0x39 => add_hl_rr(self, SP),
            0x3A => ld8(self, mmu, A, Dec),
            0x3B => dec_rr(self, SP),
            0x3C => inc8(self, mmu, A),
            0x3D => dec8(self, mmu, A),
            0x3E => ld8(self, mmu, A, Imm8),
            0x3F => ccf(self),
            0x40 => ld8(self, mmu, B, B),
            0x41 => ld8(self, mmu, B, C),
            0x42 => ld8(self, mmu, B, D),
            0x43 => ld8(self, mmu, B, E),
            0x44 => ld8(self, mmu, B, H),
            0x45 => ld8(self, mmu, B, L),
            0x46 => ld8(self, mmu, B, HL),
            0x47 => ld8(self, mmu, B, A),
            0x48 => ld8(self, mmu, C, B),
            0x49 => ld8(self, mmu, C, C),
            0x4A => ld8(self, mmu, C, D),
            0x4B => ld8(self, mmu, C, E),
            0x4C => ld8(self, mmu, C, H),
            0x4D => ld8(self, mmu, C, L),
            0x4E => ld8(self, mmu, C, HL),
            0x4F => ld8(self, mmu, C, A),
            0x50 => ld8(self, mmu, D, B),
            0x51 => ld8(self, mmu, D, C),
            0x52 => ld8(self, mmu, D, D),
            0x53 => ld8(self, mmu, D, E),
            0x54 => ld8(self, mmu, D, H),
            0x55 => ld8(self, mmu, D, L),
            0x56 => ld8(self, mmu, D, HL),
            0x57 => ld8(self, mmu, D, A),
            0x58 => ld8(self, mmu, E, B),
            0x59 => ld8(self, mmu, E, C),
            0x5A => ld8(self, mmu, E, D),
            0x5B => ld8(self, mmu, E, E),
            0x5C => ld8(self, mmu, E, H),
            0x5D => ld8(self, mmu, E, L),
            0x5E => ld8(self, mmu, E, HL),
            0x5F => ld8(self, mmu, E, A),
            0x60 => ld8(self, mmu, H, B),
            0x61 => ld8(self, mmu, H, C),
            0x62 => ld8(self, mmu, H, D),
            0x63 => ld8(self, mmu, H, E),
            0x64 => ld8(self, mmu, H, H),
            0x65 => ld8(self, mmu, H, L),
            0x66 => ld8(self, mmu, H, HL),
            0x67 => ld8(self, mmu, H, A),
            0x68 => ld8(self, mmu, L, B),
            0x69 => ld8(self, mmu, L, C),
            0x6A => ld8(self, mmu, L, D),
            0x6B => ld8(self, mmu, L, E),
            0x6C => ld8(self, mmu, L, H),
            0x6D => ld8(self, mmu, L, L),
            0x6E => ld8(self, mmu, L, HL),
            0x6F => ld8(self, mmu, L, A),
            0x70 => ld8(self, mmu, HL, B),
            0x71 => ld8(self, mmu, HL, C),
            0x72 => ld8(self, mmu, HL, D),
            0x73 => ld8(self, mmu, HL, E),
            0x74 => ld8(self, mmu, HL, H),
            0x75 => ld8(self, mmu, HL, L),
            0x76 => self.enter_state(State::Suspended),
            0x77 => ld8(self, mmu, HL, A),
            0x78 => ld8(self, mmu, A, B),
            0x79 => ld8(self, mmu, A, C),
            0x7A => ld8(self, mmu, A, D),
            0x7B => ld8(self, mmu, A, E),
            0x7C => ld8(self, mmu, A, H),
            0x7D => ld8(self, mmu, A, L),
            0x7E => ld8(self, mmu, A, HL),
            0x7F => ld8(self, mmu, A, A),
            0x80 => add8(self, mmu, B),
            0x81 => add8(self, mmu, C),
            0x82 => add8(self, mmu, D),
            0x83 => add8(self, mmu, E),
            0x84 => add8(self, mmu, H),
            0x85 => add8(self, mmu, L),
            0x86 => add8(self, mmu, HL),
            0x87 => add8(self, mmu, A),
            0x88 => adc8(self, mmu, B),
            0x89 => adc8(self, mmu, C),
            0x8A => adc8(self, mmu, D),
            0x8B => adc8(self, mmu, E),
            0x8C => adc8(self, mmu, H),
            0x8D => adc8(self, mmu, L),
            0x8E => adc8(self, mmu, HL),
            0x8F => adc8(self, mmu, A),
            0x90 => sub8(self, mmu, B),
            0x91 => sub8(self, mmu, C),
            0x92 => sub8(self, mmu, D),
            0x93 => sub8(self, mmu, E),
            0x94 => sub8(self, mmu, H),
            0x95 => sub8(self, mmu, L),
            0x96 => sub8(self, mmu, HL),
            0x97 => sub8(self, mmu, A),
            0x98 => sbc8(self, mmu, B),
            0x99 => sbc8(self, mmu, C),
            0x9A => sbc8(self, mmu, D),
            0x9B => sbc8(self, mmu, E),
            0x9C => sbc8(self, mmu, H),
            0x9D => sbc8(self, mmu, L),
            0x9E => sbc8(self, mmu, HL),
            0x9F => sbc8(self, mmu, A),
            0xA0 => and8(self, mmu, B),
            0xA1 => and8(self, mmu, C),
            0xA2 => and8(self, mmu, D),
            0xA3 => and8(self, mmu, E),
            0xA4 => and8(self, mmu, H),
            0xA5 => and8(self, mmu, L),
            0xA6 => and8(self, mmu, HL),
            0xA7 => and8(self, mmu, A),
            0xA8 => xor8(self, mmu, B),
            0xA9 => xor8(self, mmu, C),
            0xAA => xor8(self, mmu, D),
            0xAB => xor8(self, mmu, E),
            0xAC => xor8(self, mmu, H),
            0xAD => xor8(self, mmu, L),
            0xAE => xor8(self, mmu, HL),
            0xAF => xor8(self, mmu, A),
            0xB0 => or8(self, mmu, B),
            0xB1 => or8(self, mmu, C),
            0xB2 => or8(self, mmu, D),
            0xB3 => or8(self, mmu, E),
            0xB4 => or8(self, mmu, H),
            0xB5 => or8(self, mmu, L),
            0xB6 => or8(self, mmu, HL),
            0xB7 => or8(self, mmu, A),
            0xB8 => {
                cp8(self, mmu, B);
            }
            0xB9 => {
                cp8(self, mmu, C);
            }
            0xBA => {
                cp8(self, mmu, D);
            }
            0xBB => {
                cp8(self, mmu, E);
            }
            0xBC => {
                cp8(self, mmu, H);
            }
            0xBD => {
                cp8(self, mmu, L);
            }
            0xBE => {
                cp8(self, mmu, HL);
            }
            0xBF => {
                cp8(self, mmu, A);
            }
            0xC0 => {
                let cond = !self.reg.flags().contains(Flags::Z);
                ret_cond(self, mmu, cond);
            }
            0xC1 => pop(self, mmu, BC),
            0xC2 => {
                let cond = !self.reg.flags().contains(Flags::Z);
                jp_cond(self, mmu, cond);
            }
            0xC3 => jp(self, mmu),
            0xC4 => {
                let cond = !self.reg.flags().contains(Flags::Z);
                call_cond(self, mmu, cond);
            }
            0xC5 => push(self, mmu, BC),
            0xC6 => add8(self, mmu, Imm8),
            0xC7 => rst(self, mmu, 0x00),
            0xC8 => {
                let cond = self.reg.flags().contains(Flags::Z);
                ret_cond(self, mmu, cond);
            }
            0xC9 => ret(self, mmu, false),
            0xCA => {
                let cond = self.reg.flags().contains(Flags::Z);
                jp_cond(self, mmu, cond);
            }
            0xCB => unreachable!("the CB plane is dispatched in step()"),
            0xCC => {
                let cond = self.reg.flags().contains(Flags::Z);
                call_cond(self, mmu, cond);
            }
            0xCD => call(self, mmu),
            0xCE => adc8(self, mmu, Imm8),
            0xCF => rst(self, mmu, 0x08),
            0xD0 => {
                let cond = !self.reg.flags().contains(Flags::C);
                ret_cond(self, mmu, cond);
            }
            0xD1 => pop(self, mmu, DE),
            0xD2 => {
                let cond = !self.reg.flags().contains(Flags::C);
                jp_cond(self, mmu, cond);
            }
            0xD4 => {
                let cond = !self.reg.flags().contains(Flags::C);
                call_cond(self, mmu, cond);
            }
            0xD5 => push(self, mmu, DE),
            0xD6 => sub8(self, mmu, Imm8),
            0xD7 => rst(self, mmu, 0x10),
            0xD8 => {
                let cond = self.reg.flags().contains(Flags::C);
                ret_cond(self, mmu, cond);
            }
            0xD9 => ret(self, mmu, true),
            0xDA => {
                let cond = self.reg.flags().contains(Flags::C);
                jp_cond(self, mmu, cond);
            }
            0xDC => {
                let cond = self.reg.flags().contains(Flags::C);
                call_cond(self, mmu, cond);
            }
            0xDE => sbc8(self, mmu, Imm8),
            0xDF => rst(self, mmu, 0x18),
            0xE0 => ld8(self, mmu, HighPage::Imm8, A),
            0xE1 => pop(self, mmu, HL),
            0xE2 => ld8(self, mmu, HighPage::C, A),
            0xE5 => push(self, mmu, HL),
            0xE6 => and8(self, mmu, Imm8),
            0xE7 => rst(self, mmu, 0x20),
            0xE8 => add_sp_r8(self, mmu),
            0xE9 => jp_hl(self),
            0xEA => ld8(self, mmu, ImmAddr, A),
            0xEE => xor8(self, mmu, Imm8),
            0xEF => rst(self, mmu, 0x28),
            0xF0 => ld8(self, mmu, A, HighPage::Imm8),
            0xF1 => pop(self, mmu, AF),
            0xF2 => ld8(self, mmu, A, HighPage::C),
            0xF3 => self.set_ime(false),
            0xF5 => push(self, mmu, AF),
            0xF6 => or8(self, mmu, Imm8),
            0xF7 => rst(self, mmu, 0x30),
            0xF8 => ld_hl_sp_r8(self, mmu),
            0xF9 => ld_sp_hl(self),
            0xFA => ld8(self, mmu, A, ImmAddr),
            0xFB => self.set_ime(true),
            0xFE => {
                cp8(self, mmu, Imm8);
            }
            0xFF => rst(self, mmu, 0x38),
            // 0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD
            _ => self.raise_fault(instr_pc, opcode),
        }
    }

    /// The CB plane is laid out on a strict grid: bits 7-6 select the
    /// group, bits 5-3 the rotate kind or bit number, bits 2-0 the target.
    fn execute_cb(&mut self, mmu: &mut Mmu, opcode: u8) {
        let n = opcode >> 3 & 0x07;

        match opcode & 0x07 {
            6 => {
                // bit n,(hl) only reads the cell, everything else stores
                let mode = if opcode >> 6 == 1 {
                    AccessMode::ReadOnly
                } else {
                    AccessMode::ReadWrite
                };
                let hl = mmu.handle(self.reg.hl(), mode);
                self.execute_cb_on(mmu, opcode, n, hl);
            }
            index => self.execute_cb_on(mmu, opcode, n, Self::cb_register(index)),
        }
    }

    fn execute_cb_on<T: Src8 + Dst8 + Copy>(&mut self, mmu: &mut Mmu, opcode: u8, n: u8, target: T) {
        match opcode >> 6 {
            0 => match n {
                0 => rlc(self, mmu, target),
                1 => rrc(self, mmu, target),
                2 => rl(self, mmu, target),
                3 => rr(self, mmu, target),
                4 => sla(self, mmu, target),
                5 => sra(self, mmu, target),
                6 => swap(self, mmu, target),
                _ => srl(self, mmu, target),
            },
            1 => bit(self, mmu, n, target),
            2 => res(self, mmu, n, target),
            _ => set(self, mmu, n, target),
        }
    }

    fn cb_register(index: u8) -> R8 {
        match index {
            0 => R8::B,
            1 => R8::C,
            2 => R8::D,
            3 => R8::E,
            4 => R8::H,
            5 => R8::L,
            7 => R8::A,
            _ => unreachable!(),
        }
    }
}

impl Default for Cpu {
    fn default() -> Cpu {
        Cpu::new()
    }
}
