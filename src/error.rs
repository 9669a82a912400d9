//! Error kinds surfaced by the core. ROM and bootstrap errors are returned
//! to the caller without touching emulator state; execution faults are
//! latched on the CPU and reported through [`Error::UndefinedOpcode`].

use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// The ROM path does not point to an existing file
    RomNotFound(PathBuf),

    /// The ROM file exists but could not be opened
    RomUnreadable(io::Error),

    /// Reading the ROM file failed partway through
    RomIo(io::Error),

    /// A host-supplied bootstrap image was not exactly 256 bytes long
    BootstrapSize(usize),

    /// The CPU fetched one of the eleven unused opcodes. There is no way
    /// to recover from this; the CPU stays stopped until the next reset.
    UndefinedOpcode { pc: u16, opcode: u8 },
}
