//! Cartridge ROM container. The core maps cartridge bytes 1:1 into the
//! address space, so this type is little more than an owned buffer; header
//! parsing and MBC banking live outside the supported cartridge set.

use crate::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Default)]
pub struct Cartridge {
    data: Vec<u8>,
}

impl Cartridge {
    /// Wraps an in-memory ROM image. Useful for tests and generated programs.
    pub fn new(data: Vec<u8>) -> Cartridge {
        Cartridge { data }
    }

    /// Reads a ROM file fully into memory. The file is taken as-is; a real
    /// cartridge image is at least 0x150 bytes, but nothing here depends on
    /// that.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Cartridge, Error> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(Error::RomNotFound(path.to_path_buf()));
        }

        let mut file = File::open(path).map_err(Error::RomUnreadable)?;

        let mut data = Vec::new();
        file.read_to_end(&mut data).map_err(Error::RomIo)?;

        log::debug!("loaded {} byte ROM from {}", data.len(), path.display());

        Ok(Cartridge { data })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }
}
