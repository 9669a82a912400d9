//! The memory management unit: a flat 64 KiB address space holding every
//! RAM region, the bootstrap ROM overlay, the installed cartridge image and
//! the per-address I/O hook tables. The CPU reaches memory exclusively
//! through [`Mmu::read`], [`Mmu::write`] and [`Mmu::handle`].

use crate::cartridge::Cartridge;
use crate::error::Error;
use crate::joypad::JoyPad;
use crate::ppu;
use crate::util::BitOps;

const MEM_SIZE: usize = 0x1_0000;

/// Cartridge bytes map 1:1 below this address; stores into the window are
/// dropped (no MBC in the supported cartridge set).
const ROM_WINDOW_END: u16 = 0x8000;

/// The I/O register page, which is the only region that takes hooks.
const IO_START: u16 = 0xFF00;
const IO_LEN: usize = 0x80;

/// Writing a nonzero value here unmaps the bootstrap ROM for good.
pub const BOOTSTRAP_DISABLE_ADDR: u16 = 0xFF50;

pub const BOOTSTRAP_LEN: usize = 256;

/// Access mode of an [`Handle`]. Stores through a read-only handle are
/// silently dropped.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AccessMode {
    ReadOnly,
    ReadWrite,
}

/// Hook kinds invoked after a store to their address. Kept as plain tokens
/// (rather than callbacks) so the table cannot form reference cycles with
/// the components it serves.
#[derive(Debug, Copy, Clone)]
pub(crate) enum WriteHook {
    BootstrapDisable,
    JoypadSelect,
    LcdControl,
}

/// Hook kinds consulted instead of the backing byte on a read.
#[derive(Debug, Copy, Clone)]
pub(crate) enum ReadHook {
    Joypad,
    Scanline,
}

/// A scoped reference to a single MMU cell for read-modify-write
/// instructions: the byte is sampled once when the handle is created, and
/// written back (firing the cell's write hook exactly once) at the end.
#[derive(Copy, Clone)]
pub struct Handle {
    addr: u16,
    value: u8,
    mode: AccessMode,
}

impl Handle {
    /// The value the cell had when the handle was created.
    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn store(self, mmu: &mut Mmu, val: u8) {
        match self.mode {
            AccessMode::ReadWrite => mmu.write(self.addr, val),
            AccessMode::ReadOnly => debug_assert!(false, "store through read-only handle"),
        }
    }
}

pub struct Mmu {
    mem: Box<[u8]>,
    bootstrap: [u8; BOOTSTRAP_LEN],
    bootstrap_mapped: bool,
    cartridge: Cartridge,
    joypad: JoyPad,
    write_hooks: [Option<WriteHook>; IO_LEN],
    read_hooks: [Option<ReadHook>; IO_LEN],
}

impl Mmu {
    pub fn new() -> Mmu {
        let mut mmu = Mmu {
            mem: vec![0; MEM_SIZE].into_boxed_slice(),
            bootstrap: BOOTSTRAP,
            bootstrap_mapped: true,
            cartridge: Cartridge::default(),
            joypad: JoyPad::new(),
            write_hooks: [None; IO_LEN],
            read_hooks: [None; IO_LEN],
        };

        mmu.register_write_hook(BOOTSTRAP_DISABLE_ADDR, WriteHook::BootstrapDisable);
        mmu.register_write_hook(0xFF00, WriteHook::JoypadSelect);
        mmu.register_read_hook(0xFF00, ReadHook::Joypad);

        mmu
    }

    /// Pure read of one byte; never fails, never has side effects.
    pub fn read(&self, addr: u16) -> u8 {
        if self.bootstrap_mapped && addr < BOOTSTRAP_LEN as u16 {
            return self.bootstrap[addr as usize];
        }

        if let Some(hook) = self.read_hook(addr) {
            return match hook {
                ReadHook::Joypad => self.joypad.read_p1(),
                ReadHook::Scanline => ppu::VBLANK_LINE,
            };
        }

        self.mem[addr as usize]
    }

    /// Stores one byte, then fires the write hook registered for the
    /// address, if any. Stores into the cartridge window are dropped.
    pub fn write(&mut self, addr: u16, val: u8) {
        if addr < ROM_WINDOW_END {
            log::trace!("dropped store {:#04x} into ROM at {:#06x}", val, addr);
            return;
        }

        self.mem[addr as usize] = val;

        if let Some(hook) = self.write_hook(addr) {
            match hook {
                WriteHook::BootstrapDisable => {
                    if val != 0 && self.bootstrap_mapped {
                        self.bootstrap_mapped = false;
                        log::debug!("bootstrap overlay disabled");
                    }
                }
                WriteHook::JoypadSelect => self.joypad.write_p1(val),
                WriteHook::LcdControl => {
                    log::debug!(
                        "lcd {}",
                        if val.bit(7) { "enabled" } else { "disabled" }
                    );
                }
            }
        }
    }

    /// Creates a read-modify-write handle for one cell. Used by the CPU
    /// for instructions that operate on (HL) in place.
    pub fn handle(&self, addr: u16, mode: AccessMode) -> Handle {
        Handle {
            addr,
            value: self.read(addr),
            mode,
        }
    }

    /// Takes ownership of the cartridge and maps its first 32 KiB into the
    /// bottom of the address space. The bootstrap overlay still shadows
    /// 0x0000-0x00FF until it disables itself.
    pub fn install_cartridge(&mut self, cartridge: Cartridge) {
        self.cartridge = cartridge;
        self.copy_cartridge_window();
    }

    /// Replaces the built-in 256-byte bootstrap ROM.
    pub fn install_bootstrap(&mut self, bytes: &[u8]) -> Result<(), Error> {
        if bytes.len() != BOOTSTRAP_LEN {
            return Err(Error::BootstrapSize(bytes.len()));
        }

        self.bootstrap.copy_from_slice(bytes);
        Ok(())
    }

    /// Zeroes all RAM, re-copies the cartridge window and re-arms the
    /// bootstrap overlay.
    pub fn reset(&mut self) {
        for byte in self.mem.iter_mut() {
            *byte = 0;
        }

        self.bootstrap_mapped = true;
        self.copy_cartridge_window();
    }

    fn copy_cartridge_window(&mut self) {
        let len = self.cartridge.bytes().len().min(ROM_WINDOW_END as usize);
        self.mem[..len].copy_from_slice(&self.cartridge.bytes()[..len]);
    }

    pub(crate) fn register_write_hook(&mut self, addr: u16, hook: WriteHook) {
        self.write_hooks[Self::io_index(addr)] = Some(hook);
    }

    pub(crate) fn register_read_hook(&mut self, addr: u16, hook: ReadHook) {
        self.read_hooks[Self::io_index(addr)] = Some(hook);
    }

    fn io_index(addr: u16) -> usize {
        debug_assert!(
            (IO_START..IO_START + IO_LEN as u16).contains(&addr),
            "hooks only cover the I/O page"
        );
        (addr - IO_START) as usize
    }

    fn write_hook(&self, addr: u16) -> Option<WriteHook> {
        if addr >= IO_START && addr < IO_START + IO_LEN as u16 {
            self.write_hooks[(addr - IO_START) as usize]
        } else {
            None
        }
    }

    fn read_hook(&self, addr: u16) -> Option<ReadHook> {
        if addr >= IO_START && addr < IO_START + IO_LEN as u16 {
            self.read_hooks[(addr - IO_START) as usize]
        } else {
            None
        }
    }

    pub(crate) fn joypad_mut(&mut self) -> &mut JoyPad {
        &mut self.joypad
    }
}

impl Default for Mmu {
    fn default() -> Mmu {
        Mmu::new()
    }
}

/// When the Game Boy boots, these 256 bytes shadow the lowest addresses
/// instead of the corresponding cartridge bytes. The program scrolls in the
/// logo, verifies the cartridge header and finally writes 1 to 0xFF50,
/// which unmaps it (see [`WriteHook::BootstrapDisable`]).
const BOOTSTRAP: [u8; BOOTSTRAP_LEN] = [
    0x31, 0xFE, 0xFF, 0xAF, 0x21, 0xFF, 0x9F, 0x32, 0xCB, 0x7C, 0x20, 0xFB, 0x21, 0x26, 0xFF, 0x0E,
    0x11, 0x3E, 0x80, 0x32, 0xE2, 0x0C, 0x3E, 0xF3, 0xE2, 0x32, 0x3E, 0x77, 0x77, 0x3E, 0xFC, 0xE0,
    0x47, 0x11, 0x04, 0x01, 0x21, 0x10, 0x80, 0x1A, 0xCD, 0x95, 0x00, 0xCD, 0x96, 0x00, 0x13, 0x7B,
    0xFE, 0x34, 0x20, 0xF3, 0x11, 0xD8, 0x00, 0x06, 0x08, 0x1A, 0x13, 0x22, 0x23, 0x05, 0x20, 0xF9,
    0x3E, 0x19, 0xEA, 0x10, 0x99, 0x21, 0x2F, 0x99, 0x0E, 0x0C, 0x3D, 0x28, 0x08, 0x32, 0x0D, 0x20,
    0xF9, 0x2E, 0x0F, 0x18, 0xF3, 0x67, 0x3E, 0x64, 0x57, 0xE0, 0x42, 0x3E, 0x91, 0xE0, 0x40, 0x04,
    0x1E, 0x02, 0x0E, 0x0C, 0xF0, 0x44, 0xFE, 0x90, 0x20, 0xFA, 0x0D, 0x20, 0xF7, 0x1D, 0x20, 0xF2,
    0x0E, 0x13, 0x24, 0x7C, 0x1E, 0x83, 0xFE, 0x62, 0x28, 0x06, 0x1E, 0xC1, 0xFE, 0x64, 0x20, 0x06,
    0x7B, 0xE2, 0x0C, 0x3E, 0x87, 0xE2, 0xF0, 0x42, 0x90, 0xE0, 0x42, 0x15, 0x20, 0xD2, 0x05, 0x20,
    0x4F, 0x16, 0x20, 0x18, 0xCB, 0x4F, 0x06, 0x04, 0xC5, 0xCB, 0x11, 0x17, 0xC1, 0xCB, 0x11, 0x17,
    0x05, 0x20, 0xF5, 0x22, 0x23, 0x22, 0x23, 0xC9, 0xCE, 0xED, 0x66, 0x66, 0xCC, 0x0D, 0x00, 0x0B,
    0x03, 0x73, 0x00, 0x83, 0x00, 0x0C, 0x00, 0x0D, 0x00, 0x08, 0x11, 0x1F, 0x88, 0x89, 0x00, 0x0E,
    0xDC, 0xCC, 0x6E, 0xE6, 0xDD, 0xDD, 0xD9, 0x99, 0xBB, 0xBB, 0x67, 0x63, 0x6E, 0x0E, 0xEC, 0xCC,
    0xDD, 0xDC, 0x99, 0x9F, 0xBB, 0xB9, 0x33, 0x3E, 0x3C, 0x42, 0xB9, 0xA5, 0xB9, 0xA5, 0x42, 0x3C,
    0x21, 0x04, 0x01, 0x11, 0xA8, 0x00, 0x1A, 0x13, 0xBE, 0x20, 0xFE, 0x23, 0x7D, 0xFE, 0x34, 0x20,
    0xF5, 0x06, 0x19, 0x78, 0x86, 0x23, 0x05, 0x20, 0xFB, 0x86, 0x20, 0xFE, 0x3E, 0x01, 0xE0, 0x50,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ram_stores_read_back() {
        let mut mmu = Mmu::new();

        mmu.write(0xC000, 0xAB);
        mmu.write(0xDFFF, 0x12);
        mmu.write(0xFFFF, 0x1F);

        assert_eq!(mmu.read(0xC000), 0xAB);
        assert_eq!(mmu.read(0xC000), 0xAB);
        assert_eq!(mmu.read(0xDFFF), 0x12);
        assert_eq!(mmu.read(0xFFFF), 0x1F);
    }

    #[test]
    fn cartridge_window_is_read_only() {
        let mut mmu = Mmu::new();
        mmu.install_cartridge(Cartridge::new(vec![0x11, 0x22, 0x33]));
        mmu.write(BOOTSTRAP_DISABLE_ADDR, 1);

        mmu.write(0x0001, 0xFF);
        assert_eq!(mmu.read(0x0001), 0x22);
    }

    #[test]
    fn bootstrap_overlay_lifts_on_ff50() {
        let mut mmu = Mmu::new();
        mmu.install_cartridge(Cartridge::new(vec![0xAA; 0x200]));

        assert_eq!(mmu.read(0x0000), BOOTSTRAP[0]);
        assert_eq!(mmu.read(0x00FF), BOOTSTRAP[0xFF]);
        // 0x0100 onwards always reads the cartridge
        assert_eq!(mmu.read(0x0100), 0xAA);

        mmu.write(BOOTSTRAP_DISABLE_ADDR, 0);
        assert_eq!(mmu.read(0x0000), BOOTSTRAP[0]);

        mmu.write(BOOTSTRAP_DISABLE_ADDR, 1);
        assert_eq!(mmu.read(0x0000), 0xAA);
        assert_eq!(mmu.read(0x00FF), 0xAA);
    }

    #[test]
    fn bootstrap_replacement_must_be_256_bytes() {
        let mut mmu = Mmu::new();

        match mmu.install_bootstrap(&[0; 100]) {
            Err(Error::BootstrapSize(100)) => (),
            other => panic!("unexpected result: {:?}", other),
        }

        let image = [0x42; BOOTSTRAP_LEN];
        mmu.install_bootstrap(&image).unwrap();
        assert_eq!(mmu.read(0x0080), 0x42);
    }

    #[test]
    fn handle_respects_access_mode() {
        let mut mmu = Mmu::new();
        mmu.write(0xC123, 7);

        let rw = mmu.handle(0xC123, AccessMode::ReadWrite);
        assert_eq!(rw.value(), 7);
        rw.store(&mut mmu, 8);
        assert_eq!(mmu.read(0xC123), 8);
    }

    #[test]
    fn reset_rearms_the_overlay() {
        let mut mmu = Mmu::new();
        mmu.install_cartridge(Cartridge::new(vec![0x55; 0x150]));

        mmu.write(BOOTSTRAP_DISABLE_ADDR, 1);
        mmu.write(0xC000, 0x99);
        mmu.reset();

        assert_eq!(mmu.read(0x0000), BOOTSTRAP[0]);
        assert_eq!(mmu.read(0xC000), 0);
        // cartridge bytes survive the reset
        mmu.write(BOOTSTRAP_DISABLE_ADDR, 1);
        assert_eq!(mmu.read(0x0000), 0x55);
    }
}
