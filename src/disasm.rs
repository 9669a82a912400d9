//! Trace-line disassembler. `decode` is a pure function of MMU contents at
//! an address; it never advances PC and never executes anything. The line
//! layout is fixed-width so a debugger can stack lines into a listing:
//!
//! ```text
//! 0000  31 fe ff     ld    sp, d16
//! 0095  4f           ld    c, a
//! 0048  cb 7c        bit   7, h
//! ```

use crate::cpu::ops::{OpInfo, OPS, OPS_CB};
use crate::memory::Mmu;
use std::fmt::Write;

/// Column the mnemonic is padded to.
const MNEMONIC_WIDTH: usize = 6;

/// Decodes the instruction at `addr` into one trace line: the address, a
/// byte dump padded to three slots, the mnemonic and its comma-separated
/// operand tokens.
pub fn decode(mmu: &Mmu, addr: u16) -> String {
    let mut out = String::new();

    let mut opcode = mmu.read(addr);
    let mut op: &OpInfo = &OPS[opcode as usize];

    write!(out, "{:04x}  ", addr).unwrap();

    if opcode == 0xCB {
        opcode = mmu.read(addr.wrapping_add(1));
        op = &OPS_CB[opcode as usize];
    }

    for i in 0..op.size {
        write!(out, "{:02x} ", mmu.read(addr.wrapping_add(i as u16))).unwrap();
    }

    let padding = 4 + (3 - op.size as usize) * 3;
    out.push_str(&" ".repeat(padding));

    let mnemonic = op.tokens[0];
    out.push_str(mnemonic);
    out.push_str(&" ".repeat(MNEMONIC_WIDTH.saturating_sub(mnemonic.len()).max(1)));

    let operands = &op.tokens[1..];
    for (i, token) in operands.iter().enumerate() {
        out.push_str(token);
        out.push_str(if i + 1 < operands.len() { ", " } else { " " });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::Cartridge;

    fn mmu_with_rom(rom: &[u8]) -> Mmu {
        let mut mmu = Mmu::new();
        mmu.install_cartridge(Cartridge::new(rom.to_vec()));
        mmu.write(0xFF50, 1);
        mmu
    }

    #[test]
    fn one_byte_instruction() {
        let mmu = mmu_with_rom(&[0x00]);
        assert_eq!(decode(&mmu, 0), "0000  00           nop   ");
    }

    #[test]
    fn operands_are_comma_separated() {
        let mmu = mmu_with_rom(&[0x01, 0x34, 0x12]);
        assert_eq!(decode(&mmu, 0), "0000  01 34 12     ld    bc, d16 ");
    }

    #[test]
    fn cb_instructions_decode_through_the_second_table() {
        let mmu = mmu_with_rom(&[0xCB, 0x7C]);
        assert_eq!(decode(&mmu, 0), "0000  cb 7c        bit   7, h ");
    }

    #[test]
    fn undefined_opcodes_decode_as_inv() {
        let mmu = mmu_with_rom(&[0xD3]);
        assert_eq!(decode(&mmu, 0), "0000  d3           inv   ");
    }

    #[test]
    fn decode_does_not_execute() {
        let mmu = mmu_with_rom(&[0x3E, 0x11]);
        decode(&mmu, 0);
        decode(&mmu, 0);
        assert_eq!(mmu.read(0x0000), 0x3E);
    }
}
