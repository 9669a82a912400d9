//! Button input state and the P1/JOYP register. The host feeds pressed /
//! released edges through [`crate::Emulator::set_joypad`]; games read the
//! result back through the MMU's 0xFF00 hook, active-low as on hardware.

use fixedbitset::FixedBitSet;
use num_enum::IntoPrimitive;

/// The eight buttons. The discriminant is the button's position in the
/// pressed-state bitset: bits 0-3 form the direction group, bits 4-7 the
/// button group, in the order the P1 register exposes them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, IntoPrimitive)]
#[repr(u8)]
pub enum JoypadInput {
    Right = 0,
    Left = 1,
    Up = 2,
    Down = 3,
    A = 4,
    B = 5,
    Select = 6,
    Start = 7,
}

/// The write-mask of the P1 register: only the two group-select bits stick.
const P1_MASK: u8 = 0b_0011_0000;

/// Group-select bits, active-low: P14 routes the direction keys onto the
/// low nibble, P15 the buttons.
const P1_SELECT_DIRECTIONS: u8 = 0b_0001_0000;
const P1_SELECT_BUTTONS: u8 = 0b_0010_0000;

pub struct JoyPad {
    /// aka JOYP; only the select bits are backed by storage
    p1: u8,
    /// One bit per button, true while the host reports it held down
    pressed: FixedBitSet,
}

impl JoyPad {
    pub fn new() -> JoyPad {
        JoyPad {
            p1: 0xFF,
            pressed: FixedBitSet::with_capacity(8),
        }
    }

    pub fn set_input(&mut self, input: JoypadInput, pressed: bool) {
        let bit: u8 = input.into();
        self.pressed.set(bit as usize, pressed);
    }

    pub fn write_p1(&mut self, val: u8) {
        self.p1 = (self.p1 & !P1_MASK) | (val & P1_MASK);
    }

    /// Composes the value games see at 0xFF00: select bits as written, low
    /// nibble active-low from whichever group(s) are selected.
    pub fn read_p1(&self) -> u8 {
        let mut held = 0;

        if self.p1 & P1_SELECT_DIRECTIONS == 0 {
            held |= self.group(0);
        }
        if self.p1 & P1_SELECT_BUTTONS == 0 {
            held |= self.group(4);
        }

        0b_1100_0000 | (self.p1 & P1_MASK) | (!held & 0x0F)
    }

    fn group(&self, base: usize) -> u8 {
        let mut bits = 0;

        for i in 0..4 {
            if self.pressed[base + i] {
                bits |= 1 << i;
            }
        }

        bits
    }
}
