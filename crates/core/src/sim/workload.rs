//! Workload binder.
//!
//! This module turns the binary path and argument string into the process image
//! bound to the core. It provides:
//! 1. **Command splitting:** `split_command` builds `[binary, args...]` from a comma-delimited string.
//! 2. **SE workload:** `Workload::init_compatible` picks the syscall-emulation workload for the ISA.
//! 3. **Process:** `process_for` validates the binary and wraps the command vector.

use serde::Serialize;

use crate::common::Isa;
use crate::common::error::ConfigError;
use crate::core::cpu::Process;

/// Separator between workload arguments.
pub const ARG_DELIMITER: char = ',';

/// Builds the command vector for `binary`.
///
/// An empty `args` yields `[binary]` with no trailing empty argument.
///
/// # Examples
///
/// ```
/// use rasim_core::sim::workload::split_command;
///
/// assert_eq!(split_command("randacc", "600000"), vec!["randacc", "600000"]);
/// assert_eq!(split_command("randacc", "a,b"), vec!["randacc", "a", "b"]);
/// assert_eq!(split_command("randacc", ""), vec!["randacc"]);
/// ```
pub fn split_command(binary: &str, args: &str) -> Vec<String> {
    let mut cmd = vec![binary.to_string()];
    if !args.is_empty() {
        cmd.extend(args.split(ARG_DELIMITER).map(str::to_string));
    }
    cmd
}

/// Builds the process image for `binary` and `args`.
///
/// # Errors
///
/// Returns [`ConfigError::MissingBinary`] if `binary` is empty.
pub fn process_for(binary: &str, args: &str) -> Result<Process, ConfigError> {
    if binary.trim().is_empty() {
        return Err(ConfigError::MissingBinary);
    }
    Ok(Process::new(split_command(binary, args)))
}

/// Syscall-emulation workload attached to the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workload {
    /// Engine-side class name.
    pub type_name: String,
    /// Binary the workload was selected for.
    pub binary: String,
}

impl Workload {
    /// Selects the SE workload matching `isa` for `binary`.
    pub fn init_compatible(binary: &str, isa: Isa) -> Self {
        let type_name = match isa {
            Isa::X86 => "X86EmuLinux",
            Isa::Arm => "ArmEmuLinux",
            Isa::Riscv => "RiscvEmuLinux",
            Isa::Mips => "MipsEmuLinux",
            Isa::Power => "PowerEmuLinux",
            Isa::Sparc => "SparcEmuLinux",
        };
        Self {
            type_name: type_name.to_string(),
            binary: binary.to_string(),
        }
    }
}
