//! Workload binary inspection.
//!
//! This module reads workload binaries without loading them. It provides:
//! 1. **Reading:** `load_binary` returns the raw bytes of a file.
//! 2. **ISA detection:** `detect_isa` maps an ELF's machine type onto an [`Isa`].

use std::fs;
use std::path::Path;

use object::{Architecture, Object};

use crate::common::Isa;
use crate::common::error::LoadError;

/// Reads a binary file from disk.
///
/// # Errors
///
/// [`LoadError::Io`] if the file cannot be read.
pub fn load_binary(path: &Path) -> Result<Vec<u8>, LoadError> {
    fs::read(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Maps an object-file architecture onto an ISA.
pub const fn isa_for(arch: Architecture) -> Option<Isa> {
    match arch {
        Architecture::X86_64 | Architecture::I386 => Some(Isa::X86),
        Architecture::Aarch64 | Architecture::Arm => Some(Isa::Arm),
        Architecture::Riscv32 | Architecture::Riscv64 => Some(Isa::Riscv),
        Architecture::Mips | Architecture::Mips64 => Some(Isa::Mips),
        Architecture::PowerPc | Architecture::PowerPc64 => Some(Isa::Power),
        Architecture::Sparc64 => Some(Isa::Sparc),
        _ => None,
    }
}

/// Determines which ISA the binary at `path` was built for.
///
/// # Errors
///
/// * [`LoadError::Io`] if the file cannot be read.
/// * [`LoadError::Format`] if it is not a parsable ELF file.
/// * [`LoadError::Architecture`] if its machine type has no matching ISA.
pub fn detect_isa(path: &Path) -> Result<Isa, LoadError> {
    let data = load_binary(path)?;
    let file = object::File::parse(&*data).map_err(|e| LoadError::Format {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let arch = file.architecture();
    isa_for(arch).ok_or_else(|| LoadError::Architecture {
        path: path.display().to_string(),
        arch: format!("{arch:?}"),
    })
}
