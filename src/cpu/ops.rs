//! Per-opcode metadata for both instruction planes: instruction size in
//! bytes, T-cycle cost, and the mnemonic/operand tokens used by the trace
//! disassembler. Cycle entries carry the taken-branch cost; the conditional
//! control-flow handlers refund the fall-through delta when a branch is not
//! taken.

pub(crate) struct OpInfo {
    pub size: u8,
    pub cycles: u8,
    pub tokens: &'static [&'static str],
}

const fn op(size: u8, cycles: u8, tokens: &'static [&'static str]) -> OpInfo {
    OpInfo {
        size,
        cycles,
        tokens,
    }
}

pub(crate) static OPS: [OpInfo; 256] = [
    // 0x00
    op(1, 4, &["nop"]),
    op(3, 12, &["ld", "bc", "d16"]),
    op(1, 8, &["ld", "(bc)", "a"]),
    op(1, 8, &["inc", "bc"]),
    op(1, 4, &["inc", "b"]),
    op(1, 4, &["dec", "b"]),
    op(2, 8, &["ld", "b", "d8"]),
    op(1, 4, &["rlca"]),
    op(3, 20, &["ld", "(a16)", "sp"]),
    op(1, 8, &["add", "hl", "bc"]),
    op(1, 8, &["ld", "a", "(bc)"]),
    op(1, 8, &["dec", "bc"]),
    op(1, 4, &["inc", "c"]),
    op(1, 4, &["dec", "c"]),
    op(2, 8, &["ld", "c", "d8"]),
    op(1, 4, &["rrca"]),
    // 0x10
    op(2, 4, &["stop"]),
    op(3, 12, &["ld", "de", "d16"]),
    op(1, 8, &["ld", "(de)", "a"]),
    op(1, 8, &["inc", "de"]),
    op(1, 4, &["inc", "d"]),
    op(1, 4, &["dec", "d"]),
    op(2, 8, &["ld", "d", "d8"]),
    op(1, 4, &["rla"]),
    op(2, 12, &["jr", "r8"]),
    op(1, 8, &["add", "hl", "de"]),
    op(1, 8, &["ld", "a", "(de)"]),
    op(1, 8, &["dec", "de"]),
    op(1, 4, &["inc", "e"]),
    op(1, 4, &["dec", "e"]),
    op(2, 8, &["ld", "e", "d8"]),
    op(1, 4, &["rra"]),
    // 0x20
    op(2, 12, &["jr", "nz", "r8"]),
    op(3, 12, &["ld", "hl", "d16"]),
    op(1, 8, &["ld", "(hl+)", "a"]),
    op(1, 8, &["inc", "hl"]),
    op(1, 4, &["inc", "h"]),
    op(1, 4, &["dec", "h"]),
    op(2, 8, &["ld", "h", "d8"]),
    op(1, 4, &["daa"]),
    op(2, 12, &["jr", "z", "r8"]),
    op(1, 8, &["add", "hl", "hl"]),
    op(1, 8, &["ld", "a", "(hl+)"]),
    op(1, 8, &["dec", "hl"]),
    op(1, 4, &["inc", "l"]),
    op(1, 4, &["dec", "l"]),
    op(2, 8, &["ld", "l", "d8"]),
    op(1, 4, &["cpl"]),
    // 0x30
    op(2, 12, &["jr", "nc", "r8"]),
    op(3, 12, &["ld", "sp", "d16"]),
    op(1, 8, &["ld", "(hl-)", "a"]),
    op(1, 8, &["inc", "sp"]),
    op(1, 12, &["inc", "(hl)"]),
    op(1, 12, &["dec", "(hl)"]),
    op(2, 12, &["ld", "(hl)", "d8"]),
    op(1, 4, &["scf"]),
    op(2, 12, &["jr", "c", "r8"]),
    op(1, 8, &["add", "hl", "sp"]),
    op(1, 8, &["ld", "a", "(hl-)"]),
    op(1, 8, &["dec", "sp"]),
    op(1, 4, &["inc", "a"]),
    op(1, 4, &["dec", "a"]),
    op(2, 8, &["ld", "a", "d8"]),
    op(1, 4, &["ccf"]),
    // 0x40
    op(1, 4, &["ld", "b", "b"]),
    op(1, 4, &["ld", "b", "c"]),
    op(1, 4, &["ld", "b", "d"]),
    op(1, 4, &["ld", "b", "e"]),
    op(1, 4, &["ld", "b", "h"]),
    op(1, 4, &["ld", "b", "l"]),
    op(1, 8, &["ld", "b", "(hl)"]),
    op(1, 4, &["ld", "b", "a"]),
    op(1, 4, &["ld", "c", "b"]),
    op(1, 4, &["ld", "c", "c"]),
    op(1, 4, &["ld", "c", "d"]),
    op(1, 4, &["ld", "c", "e"]),
    op(1, 4, &["ld", "c", "h"]),
    op(1, 4, &["ld", "c", "l"]),
    op(1, 8, &["ld", "c", "(hl)"]),
    op(1, 4, &["ld", "c", "a"]),
    // 0x50
    op(1, 4, &["ld", "d", "b"]),
    op(1, 4, &["ld", "d", "c"]),
    op(1, 4, &["ld", "d", "d"]),
    op(1, 4, &["ld", "d", "e"]),
    op(1, 4, &["ld", "d", "h"]),
    op(1, 4, &["ld", "d", "l"]),
    op(1, 8, &["ld", "d", "(hl)"]),
    op(1, 4, &["ld", "d", "a"]),
    op(1, 4, &["ld", "e", "b"]),
    op(1, 4, &["ld", "e", "c"]),
    op(1, 4, &["ld", "e", "d"]),
    op(1, 4, &["ld", "e", "e"]),
    op(1, 4, &["ld", "e", "h"]),
    op(1, 4, &["ld", "e", "l"]),
    op(1, 8, &["ld", "e", "(hl)"]),
    op(1, 4, &["ld", "e", "a"]),
    // 0x60
    op(1, 4, &["ld", "h", "b"]),
    op(1, 4, &["ld", "h", "c"]),
    op(1, 4, &["ld", "h", "d"]),
    op(1, 4, &["ld", "h", "e"]),
    op(1, 4, &["ld", "h", "h"]),
    op(1, 4, &["ld", "h", "l"]),
    op(1, 8, &["ld", "h", "(hl)"]),
    op(1, 4, &["ld", "h", "a"]),
    op(1, 4, &["ld", "l", "b"]),
    op(1, 4, &["ld", "l", "c"]),
    op(1, 4, &["ld", "l", "d"]),
    op(1, 4, &["ld", "l", "e"]),
    op(1, 4, &["ld", "l", "h"]),
    op(1, 4, &["ld", "l", "l"]),
    op(1, 8, &["ld", "l", "(hl)"]),
    op(1, 4, &["ld", "l", "a"]),
    // 0x70
    op(1, 8, &["ld", "(hl)", "b"]),
    op(1, 8, &["ld", "(hl)", "c"]),
    op(1, 8, &["ld", "(hl)", "d"]),
    op(1, 8, &["ld", "(hl)", "e"]),
    op(1, 8, &["ld", "(hl)", "h"]),
    op(1, 8, &["ld", "(hl)", "l"]),
    op(1, 4, &["halt"]),
    op(1, 8, &["ld", "(hl)", "a"]),
    op(1, 4, &["ld", "a", "b"]),
    op(1, 4, &["ld", "a", "c"]),
    op(1, 4, &["ld", "a", "d"]),
    op(1, 4, &["ld", "a", "e"]),
    op(1, 4, &["ld", "a", "h"]),
    op(1, 4, &["ld", "a", "l"]),
    op(1, 8, &["ld", "a", "(hl)"]),
    op(1, 4, &["ld", "a", "a"]),
    // 0x80
    op(1, 4, &["add", "a", "b"]),
    op(1, 4, &["add", "a", "c"]),
    op(1, 4, &["add", "a", "d"]),
    op(1, 4, &["add", "a", "e"]),
    op(1, 4, &["add", "a", "h"]),
    op(1, 4, &["add", "a", "l"]),
    op(1, 8, &["add", "a", "(hl)"]),
    op(1, 4, &["add", "a", "a"]),
    op(1, 4, &["adc", "a", "b"]),
    op(1, 4, &["adc", "a", "c"]),
    op(1, 4, &["adc", "a", "d"]),
    op(1, 4, &["adc", "a", "e"]),
    op(1, 4, &["adc", "a", "h"]),
    op(1, 4, &["adc", "a", "l"]),
    op(1, 8, &["adc", "a", "(hl)"]),
    op(1, 4, &["adc", "a", "a"]),
    // 0x90
    op(1, 4, &["sub", "b"]),
    op(1, 4, &["sub", "c"]),
    op(1, 4, &["sub", "d"]),
    op(1, 4, &["sub", "e"]),
    op(1, 4, &["sub", "h"]),
    op(1, 4, &["sub", "l"]),
    op(1, 8, &["sub", "(hl)"]),
    op(1, 4, &["sub", "a"]),
    op(1, 4, &["sbc", "a", "b"]),
    op(1, 4, &["sbc", "a", "c"]),
    op(1, 4, &["sbc", "a", "d"]),
    op(1, 4, &["sbc", "a", "e"]),
    op(1, 4, &["sbc", "a", "h"]),
    op(1, 4, &["sbc", "a", "l"]),
    op(1, 8, &["sbc", "a", "(hl)"]),
    op(1, 4, &["sbc", "a", "a"]),
    // 0xa0
    op(1, 4, &["and", "b"]),
    op(1, 4, &["and", "c"]),
    op(1, 4, &["and", "d"]),
    op(1, 4, &["and", "e"]),
    op(1, 4, &["and", "h"]),
    op(1, 4, &["and", "l"]),
    op(1, 8, &["and", "(hl)"]),
    op(1, 4, &["and", "a"]),
    op(1, 4, &["xor", "b"]),
    op(1, 4, &["xor", "c"]),
    op(1, 4, &["xor", "d"]),
    op(1, 4, &["xor", "e"]),
    op(1, 4, &["xor", "h"]),
    op(1, 4, &["xor", "l"]),
    op(1, 8, &["xor", "(hl)"]),
    op(1, 4, &["xor", "a"]),
    // 0xb0
    op(1, 4, &["or", "b"]),
    op(1, 4, &["or", "c"]),
    op(1, 4, &["or", "d"]),
    op(1, 4, &["or", "e"]),
    op(1, 4, &["or", "h"]),
    op(1, 4, &["or", "l"]),
    op(1, 8, &["or", "(hl)"]),
    op(1, 4, &["or", "a"]),
    op(1, 4, &["cp", "b"]),
    op(1, 4, &["cp", "c"]),
    op(1, 4, &["cp", "d"]),
    op(1, 4, &["cp", "e"]),
    op(1, 4, &["cp", "h"]),
    op(1, 4, &["cp", "l"]),
    op(1, 8, &["cp", "(hl)"]),
    op(1, 4, &["cp", "a"]),
    // 0xc0
    op(1, 20, &["ret", "nz"]),
    op(1, 12, &["pop", "bc"]),
    op(3, 16, &["jp", "nz", "a16"]),
    op(3, 16, &["jp", "a16"]),
    op(3, 24, &["call", "nz", "a16"]),
    op(1, 16, &["push", "bc"]),
    op(2, 8, &["add", "a", "d8"]),
    op(1, 16, &["rst", "00h"]),
    op(1, 20, &["ret", "z"]),
    op(1, 16, &["ret"]),
    op(3, 16, &["jp", "z", "a16"]),
    op(0, 0, &["prefix", "cb"]),
    op(3, 24, &["call", "z", "a16"]),
    op(3, 24, &["call", "a16"]),
    op(2, 8, &["adc", "a", "d8"]),
    op(1, 16, &["rst", "08h"]),
    // 0xd0
    op(1, 20, &["ret", "nc"]),
    op(1, 12, &["pop", "de"]),
    op(3, 16, &["jp", "nc", "a16"]),
    op(1, 4, &["inv"]),
    op(3, 24, &["call", "nc", "a16"]),
    op(1, 16, &["push", "de"]),
    op(2, 8, &["sub", "d8"]),
    op(1, 16, &["rst", "10h"]),
    op(1, 20, &["ret", "c"]),
    op(1, 16, &["reti"]),
    op(3, 16, &["jp", "c", "a16"]),
    op(1, 4, &["inv"]),
    op(3, 24, &["call", "c", "a16"]),
    op(1, 4, &["inv"]),
    op(2, 8, &["sbc", "a", "d8"]),
    op(1, 16, &["rst", "18h"]),
    // 0xe0
    op(2, 12, &["ldh", "(a8)", "a"]),
    op(1, 12, &["pop", "hl"]),
    op(1, 8, &["ld", "(c)", "a"]),
    op(1, 4, &["inv"]),
    op(1, 4, &["inv"]),
    op(1, 16, &["push", "hl"]),
    op(2, 8, &["and", "d8"]),
    op(1, 16, &["rst", "20h"]),
    op(2, 16, &["add", "sp", "r8"]),
    op(1, 4, &["jp", "(hl)"]),
    op(3, 16, &["ld", "(a16)", "a"]),
    op(1, 4, &["inv"]),
    op(1, 4, &["inv"]),
    op(1, 4, &["inv"]),
    op(2, 8, &["xor", "d8"]),
    op(1, 16, &["rst", "28h"]),
    // 0xf0
    op(2, 12, &["ldh", "a", "(a8)"]),
    op(1, 12, &["pop", "af"]),
    op(1, 8, &["ld", "a", "(c)"]),
    op(1, 4, &["di"]),
    op(1, 4, &["inv"]),
    op(1, 16, &["push", "af"]),
    op(2, 8, &["or", "d8"]),
    op(1, 16, &["rst", "30h"]),
    op(2, 12, &["ld", "hl", "sp+r8"]),
    op(1, 8, &["ld", "sp", "hl"]),
    op(3, 16, &["ld", "a", "(a16)"]),
    op(1, 4, &["ei"]),
    op(1, 4, &["inv"]),
    op(1, 4, &["inv"]),
    op(2, 8, &["cp", "d8"]),
    op(1, 16, &["rst", "38h"]),
];

pub(crate) static OPS_CB: [OpInfo; 256] = [
    // 0x00
    op(2, 8, &["rlc", "b"]),
    op(2, 8, &["rlc", "c"]),
    op(2, 8, &["rlc", "d"]),
    op(2, 8, &["rlc", "e"]),
    op(2, 8, &["rlc", "h"]),
    op(2, 8, &["rlc", "l"]),
    op(2, 16, &["rlc", "(hl)"]),
    op(2, 8, &["rlc", "a"]),
    op(2, 8, &["rrc", "b"]),
    op(2, 8, &["rrc", "c"]),
    op(2, 8, &["rrc", "d"]),
    op(2, 8, &["rrc", "e"]),
    op(2, 8, &["rrc", "h"]),
    op(2, 8, &["rrc", "l"]),
    op(2, 16, &["rrc", "(hl)"]),
    op(2, 8, &["rrc", "a"]),
    // 0x10
    op(2, 8, &["rl", "b"]),
    op(2, 8, &["rl", "c"]),
    op(2, 8, &["rl", "d"]),
    op(2, 8, &["rl", "e"]),
    op(2, 8, &["rl", "h"]),
    op(2, 8, &["rl", "l"]),
    op(2, 16, &["rl", "(hl)"]),
    op(2, 8, &["rl", "a"]),
    op(2, 8, &["rr", "b"]),
    op(2, 8, &["rr", "c"]),
    op(2, 8, &["rr", "d"]),
    op(2, 8, &["rr", "e"]),
    op(2, 8, &["rr", "h"]),
    op(2, 8, &["rr", "l"]),
    op(2, 16, &["rr", "(hl)"]),
    op(2, 8, &["rr", "a"]),
    // 0x20
    op(2, 8, &["sla", "b"]),
    op(2, 8, &["sla", "c"]),
    op(2, 8, &["sla", "d"]),
    op(2, 8, &["sla", "e"]),
    op(2, 8, &["sla", "h"]),
    op(2, 8, &["sla", "l"]),
    op(2, 16, &["sla", "(hl)"]),
    op(2, 8, &["sla", "a"]),
    op(2, 8, &["sra", "b"]),
    op(2, 8, &["sra", "c"]),
    op(2, 8, &["sra", "d"]),
    op(2, 8, &["sra", "e"]),
    op(2, 8, &["sra", "h"]),
    op(2, 8, &["sra", "l"]),
    op(2, 16, &["sra", "(hl)"]),
    op(2, 8, &["sra", "a"]),
    // 0x30
    op(2, 8, &["swap", "b"]),
    op(2, 8, &["swap", "c"]),
    op(2, 8, &["swap", "d"]),
    op(2, 8, &["swap", "e"]),
    op(2, 8, &["swap", "h"]),
    op(2, 8, &["swap", "l"]),
    op(2, 16, &["swap", "(hl)"]),
    op(2, 8, &["swap", "a"]),
    op(2, 8, &["srl", "b"]),
    op(2, 8, &["srl", "c"]),
    op(2, 8, &["srl", "d"]),
    op(2, 8, &["srl", "e"]),
    op(2, 8, &["srl", "h"]),
    op(2, 8, &["srl", "l"]),
    op(2, 16, &["srl", "(hl)"]),
    op(2, 8, &["srl", "a"]),
    // 0x40
    op(2, 8, &["bit", "0", "b"]),
    op(2, 8, &["bit", "0", "c"]),
    op(2, 8, &["bit", "0", "d"]),
    op(2, 8, &["bit", "0", "e"]),
    op(2, 8, &["bit", "0", "h"]),
    op(2, 8, &["bit", "0", "l"]),
    op(2, 16, &["bit", "0", "(hl)"]),
    op(2, 8, &["bit", "0", "a"]),
    op(2, 8, &["bit", "1", "b"]),
    op(2, 8, &["bit", "1", "c"]),
    op(2, 8, &["bit", "1", "d"]),
    op(2, 8, &["bit", "1", "e"]),
    op(2, 8, &["bit", "1", "h"]),
    op(2, 8, &["bit", "1", "l"]),
    op(2, 16, &["bit", "1", "(hl)"]),
    op(2, 8, &["bit", "1", "a"]),
    // 0x50
    op(2, 8, &["bit", "2", "b"]),
    op(2, 8, &["bit", "2", "c"]),
    op(2, 8, &["bit", "2", "d"]),
    op(2, 8, &["bit", "2", "e"]),
    op(2, 8, &["bit", "2", "h"]),
    op(2, 8, &["bit", "2", "l"]),
    op(2, 16, &["bit", "2", "(hl)"]),
    op(2, 8, &["bit", "2", "a"]),
    op(2, 8, &["bit", "3", "b"]),
    op(2, 8, &["bit", "3", "c"]),
    op(2, 8, &["bit", "3", "d"]),
    op(2, 8, &["bit", "3", "e"]),
    op(2, 8, &["bit", "3", "h"]),
    op(2, 8, &["bit", "3", "l"]),
    op(2, 16, &["bit", "3", "(hl)"]),
    op(2, 8, &["bit", "3", "a"]),
    // 0x60
    op(2, 8, &["bit", "4", "b"]),
    op(2, 8, &["bit", "4", "c"]),
    op(2, 8, &["bit", "4", "d"]),
    op(2, 8, &["bit", "4", "e"]),
    op(2, 8, &["bit", "4", "h"]),
    op(2, 8, &["bit", "4", "l"]),
    op(2, 16, &["bit", "4", "(hl)"]),
    op(2, 8, &["bit", "4", "a"]),
    op(2, 8, &["bit", "5", "b"]),
    op(2, 8, &["bit", "5", "c"]),
    op(2, 8, &["bit", "5", "d"]),
    op(2, 8, &["bit", "5", "e"]),
    op(2, 8, &["bit", "5", "h"]),
    op(2, 8, &["bit", "5", "l"]),
    op(2, 16, &["bit", "5", "(hl)"]),
    op(2, 8, &["bit", "5", "a"]),
    // 0x70
    op(2, 8, &["bit", "6", "b"]),
    op(2, 8, &["bit", "6", "c"]),
    op(2, 8, &["bit", "6", "d"]),
    op(2, 8, &["bit", "6", "e"]),
    op(2, 8, &["bit", "6", "h"]),
    op(2, 8, &["bit", "6", "l"]),
    op(2, 16, &["bit", "6", "(hl)"]),
    op(2, 8, &["bit", "6", "a"]),
    op(2, 8, &["bit", "7", "b"]),
    op(2, 8, &["bit", "7", "c"]),
    op(2, 8, &["bit", "7", "d"]),
    op(2, 8, &["bit", "7", "e"]),
    op(2, 8, &["bit", "7", "h"]),
    op(2, 8, &["bit", "7", "l"]),
    op(2, 16, &["bit", "7", "(hl)"]),
    op(2, 8, &["bit", "7", "a"]),
    // 0x80
    op(2, 8, &["res", "0", "b"]),
    op(2, 8, &["res", "0", "c"]),
    op(2, 8, &["res", "0", "d"]),
    op(2, 8, &["res", "0", "e"]),
    op(2, 8, &["res", "0", "h"]),
    op(2, 8, &["res", "0", "l"]),
    op(2, 16, &["res", "0", "(hl)"]),
    op(2, 8, &["res", "0", "a"]),
    op(2, 8, &["res", "1", "b"]),
    op(2, 8, &["res", "1", "c"]),
    op(2, 8, &["res", "1", "d"]),
    op(2, 8, &["res", "1", "e"]),
    op(2, 8, &["res", "1", "h"]),
    op(2, 8, &["res", "1", "l"]),
    op(2, 16, &["res", "1", "(hl)"]),
    op(2, 8, &["res", "1", "a"]),
    // 0x90
    op(2, 8, &["res", "2", "b"]),
    op(2, 8, &["res", "2", "c"]),
    op(2, 8, &["res", "2", "d"]),
    op(2, 8, &["res", "2", "e"]),
    op(2, 8, &["res", "2", "h"]),
    op(2, 8, &["res", "2", "l"]),
    op(2, 16, &["res", "2", "(hl)"]),
    op(2, 8, &["res", "2", "a"]),
    op(2, 8, &["res", "3", "b"]),
    op(2, 8, &["res", "3", "c"]),
    op(2, 8, &["res", "3", "d"]),
    op(2, 8, &["res", "3", "e"]),
    op(2, 8, &["res", "3", "h"]),
    op(2, 8, &["res", "3", "l"]),
    op(2, 16, &["res", "3", "(hl)"]),
    op(2, 8, &["res", "3", "a"]),
    // 0xa0
    op(2, 8, &["res", "4", "b"]),
    op(2, 8, &["res", "4", "c"]),
    op(2, 8, &["res", "4", "d"]),
    op(2, 8, &["res", "4", "e"]),
    op(2, 8, &["res", "4", "h"]),
    op(2, 8, &["res", "4", "l"]),
    op(2, 16, &["res", "4", "(hl)"]),
    op(2, 8, &["res", "4", "a"]),
    op(2, 8, &["res", "5", "b"]),
    op(2, 8, &["res", "5", "c"]),
    op(2, 8, &["res", "5", "d"]),
    op(2, 8, &["res", "5", "e"]),
    op(2, 8, &["res", "5", "h"]),
    op(2, 8, &["res", "5", "l"]),
    op(2, 16, &["res", "5", "(hl)"]),
    op(2, 8, &["res", "5", "a"]),
    // 0xb0
    op(2, 8, &["res", "6", "b"]),
    op(2, 8, &["res", "6", "c"]),
    op(2, 8, &["res", "6", "d"]),
    op(2, 8, &["res", "6", "e"]),
    op(2, 8, &["res", "6", "h"]),
    op(2, 8, &["res", "6", "l"]),
    op(2, 16, &["res", "6", "(hl)"]),
    op(2, 8, &["res", "6", "a"]),
    op(2, 8, &["res", "7", "b"]),
    op(2, 8, &["res", "7", "c"]),
    op(2, 8, &["res", "7", "d"]),
    op(2, 8, &["res", "7", "e"]),
    op(2, 8, &["res", "7", "h"]),
    op(2, 8, &["res", "7", "l"]),
    op(2, 16, &["res", "7", "(hl)"]),
    op(2, 8, &["res", "7", "a"]),
    // 0xc0
    op(2, 8, &["set", "0", "b"]),
    op(2, 8, &["set", "0", "c"]),
    op(2, 8, &["set", "0", "d"]),
    op(2, 8, &["set", "0", "e"]),
    op(2, 8, &["set", "0", "h"]),
    op(2, 8, &["set", "0", "l"]),
    op(2, 16, &["set", "0", "(hl)"]),
    op(2, 8, &["set", "0", "a"]),
    op(2, 8, &["set", "1", "b"]),
    op(2, 8, &["set", "1", "c"]),
    op(2, 8, &["set", "1", "d"]),
    op(2, 8, &["set", "1", "e"]),
    op(2, 8, &["set", "1", "h"]),
    op(2, 8, &["set", "1", "l"]),
    op(2, 16, &["set", "1", "(hl)"]),
    op(2, 8, &["set", "1", "a"]),
    // 0xd0
    op(2, 8, &["set", "2", "b"]),
    op(2, 8, &["set", "2", "c"]),
    op(2, 8, &["set", "2", "d"]),
    op(2, 8, &["set", "2", "e"]),
    op(2, 8, &["set", "2", "h"]),
    op(2, 8, &["set", "2", "l"]),
    op(2, 16, &["set", "2", "(hl)"]),
    op(2, 8, &["set", "2", "a"]),
    op(2, 8, &["set", "3", "b"]),
    op(2, 8, &["set", "3", "c"]),
    op(2, 8, &["set", "3", "d"]),
    op(2, 8, &["set", "3", "e"]),
    op(2, 8, &["set", "3", "h"]),
    op(2, 8, &["set", "3", "l"]),
    op(2, 16, &["set", "3", "(hl)"]),
    op(2, 8, &["set", "3", "a"]),
    // 0xe0
    op(2, 8, &["set", "4", "b"]),
    op(2, 8, &["set", "4", "c"]),
    op(2, 8, &["set", "4", "d"]),
    op(2, 8, &["set", "4", "e"]),
    op(2, 8, &["set", "4", "h"]),
    op(2, 8, &["set", "4", "l"]),
    op(2, 16, &["set", "4", "(hl)"]),
    op(2, 8, &["set", "4", "a"]),
    op(2, 8, &["set", "5", "b"]),
    op(2, 8, &["set", "5", "c"]),
    op(2, 8, &["set", "5", "d"]),
    op(2, 8, &["set", "5", "e"]),
    op(2, 8, &["set", "5", "h"]),
    op(2, 8, &["set", "5", "l"]),
    op(2, 16, &["set", "5", "(hl)"]),
    op(2, 8, &["set", "5", "a"]),
    // 0xf0
    op(2, 8, &["set", "6", "b"]),
    op(2, 8, &["set", "6", "c"]),
    op(2, 8, &["set", "6", "d"]),
    op(2, 8, &["set", "6", "e"]),
    op(2, 8, &["set", "6", "h"]),
    op(2, 8, &["set", "6", "l"]),
    op(2, 16, &["set", "6", "(hl)"]),
    op(2, 8, &["set", "6", "a"]),
    op(2, 8, &["set", "7", "b"]),
    op(2, 8, &["set", "7", "c"]),
    op(2, 8, &["set", "7", "d"]),
    op(2, 8, &["set", "7", "e"]),
    op(2, 8, &["set", "7", "h"]),
    op(2, 8, &["set", "7", "l"]),
    op(2, 16, &["set", "7", "(hl)"]),
    op(2, 8, &["set", "7", "a"]),
];
