//! # Binary Inspection Tests

use object::Architecture;
use rasim_core::common::{Isa, LoadError};
use rasim_core::sim::loader::{detect_isa, isa_for, load_binary};
use tempfile::tempdir;

use crate::common::harness::{EM_AARCH64, EM_RISCV, EM_X86_64, elf_header, write_elf};

#[test]
fn test_detect_x86() {
    let dir = tempdir().unwrap();
    let path = write_elf(dir.path(), "hello", EM_X86_64);
    assert_eq!(detect_isa(&path).unwrap(), Isa::X86);
}

#[test]
fn test_detect_riscv_and_arm() {
    let dir = tempdir().unwrap();
    assert_eq!(detect_isa(&write_elf(dir.path(), "rv", EM_RISCV)).unwrap(), Isa::Riscv);
    assert_eq!(detect_isa(&write_elf(dir.path(), "a64", EM_AARCH64)).unwrap(), Isa::Arm);
}

#[test]
fn test_unknown_machine() {
    let dir = tempdir().unwrap();
    let path = write_elf(dir.path(), "none", 0);
    assert!(matches!(detect_isa(&path), Err(LoadError::Architecture { .. })));
}

#[test]
fn test_not_an_elf() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("script.sh");
    std::fs::write(&path, "#!/bin/sh\necho hi\n").unwrap();
    assert!(matches!(detect_isa(&path), Err(LoadError::Format { .. })));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let err = detect_isa(&dir.path().join("absent")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("absent"));
}

#[test]
fn test_load_binary_returns_bytes() {
    let dir = tempdir().unwrap();
    let path = write_elf(dir.path(), "hello", EM_X86_64);
    assert_eq!(load_binary(&path).unwrap(), elf_header(EM_X86_64));
}

#[test]
fn test_isa_for_architectures() {
    assert_eq!(isa_for(Architecture::X86_64), Some(Isa::X86));
    assert_eq!(isa_for(Architecture::I386), Some(Isa::X86));
    assert_eq!(isa_for(Architecture::Aarch64), Some(Isa::Arm));
    assert_eq!(isa_for(Architecture::Riscv64), Some(Isa::Riscv));
    assert_eq!(isa_for(Architecture::Mips64), Some(Isa::Mips));
    assert_eq!(isa_for(Architecture::PowerPc64), Some(Isa::Power));
    assert_eq!(isa_for(Architecture::Sparc64), Some(Isa::Sparc));
    assert_eq!(isa_for(Architecture::Wasm32), None);
}
