//! Target instruction-set architecture.
//!
//! The ISA is an explicit input to the assembler rather than a property of the
//! build environment. The only topology decision it drives is whether the
//! interrupt controller is wired onto the system crossbar.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::error::ConfigError;

/// Instruction-set architectures the simulator can be configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Isa {
    /// x86-64. Interrupts are delivered through an external APIC port.
    #[default]
    X86,
    /// ARM (AArch32/AArch64).
    Arm,
    /// RISC-V.
    Riscv,
    /// MIPS.
    Mips,
    /// POWER.
    Power,
    /// SPARC.
    Sparc,
}

impl Isa {
    /// Every supported ISA, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::X86,
        Self::Arm,
        Self::Riscv,
        Self::Mips,
        Self::Power,
        Self::Sparc,
    ];

    /// Returns `true` if the interrupt controller must be connected to the
    /// memory-side crossbar instead of being routed inside the core.
    pub const fn routes_interrupts_externally(self) -> bool {
        matches!(self, Self::X86)
    }

    /// Lowercase tag used on the command line and in binary paths.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X86 => "x86",
            Self::Arm => "arm",
            Self::Riscv => "riscv",
            Self::Mips => "mips",
            Self::Power => "power",
            Self::Sparc => "sparc",
        }
    }
}

impl fmt::Display for Isa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Isa {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "x86" | "x86_64" | "x86-64" => Ok(Self::X86),
            "arm" | "aarch64" => Ok(Self::Arm),
            "riscv" | "riscv64" => Ok(Self::Riscv),
            "mips" => Ok(Self::Mips),
            "power" | "ppc" => Ok(Self::Power),
            "sparc" => Ok(Self::Sparc),
            _ => Err(ConfigError::UnknownIsa(s.to_string())),
        }
    }
}
