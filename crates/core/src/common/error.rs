//! Error taxonomy for topology assembly and run hand-off.
//!
//! This module defines the failures the assembly layer can report. It provides:
//! 1. **Configuration errors:** Illegal option values and structural mistakes while building the graph.
//! 2. **Resolution errors:** Architecture-conditional wiring the chosen run driver cannot honor.
//! 3. **Driver errors:** Failures raised by the simulation engine, propagated without reinterpretation.
//!
//! None of these are transient; callers abort on the first error.

use thiserror::Error;

use crate::common::isa::Isa;
use crate::soc::assembler::AssemblyState;

/// Fatal configuration mistakes detected before the graph is handed to a driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The mode tag is not one of `baseline`, `runahead` or `pre`.
    #[error("unknown CPU mode '{0}' (expected baseline, runahead or pre)")]
    UnknownMode(String),

    /// The ISA tag is not recognized.
    #[error("unknown ISA '{0}'")]
    UnknownIsa(String),

    /// No workload binary path was supplied.
    #[error("no workload binary specified")]
    MissingBinary,

    /// A structural size option is zero or could not be parsed.
    #[error("invalid value '{value}' for {option}")]
    InvalidSize {
        /// Option name as it appears on the command line.
        option: &'static str,
        /// Offending value.
        value: String,
    },

    /// An assembly step was attempted from the wrong state.
    #[error("cannot {step}: assembler is in state {found:?}, expected {expected:?}")]
    OutOfOrder {
        /// Name of the attempted step.
        step: &'static str,
        /// State the step requires.
        expected: AssemblyState,
        /// State the assembler was actually in.
        found: AssemblyState,
    },

    /// A scalar port already carries a connection.
    #[error("port {component}.{port} is already connected")]
    PortInUse {
        /// Name of the component owning the port.
        component: String,
        /// Port name.
        port: String,
    },

    /// The referenced component or port does not exist (yet).
    #[error("no port named '{port}' on component #{component}")]
    UnknownPort {
        /// Arena index of the component.
        component: usize,
        /// Port name.
        port: String,
    },

    /// A connection operation was applied to the wrong kind of component.
    #[error("{component} is not {expected}")]
    WrongComponent {
        /// Name of the component, or its arena index if it does not exist.
        component: String,
        /// What the operation needed.
        expected: &'static str,
    },

    /// Both ends of a connection are requestors, or both are responders.
    #[error("cannot connect {left} to {right}: both ports are {role}")]
    RoleMismatch {
        /// First endpoint, `component.port`.
        left: String,
        /// Second endpoint, `component.port`.
        right: String,
        /// Shared role of both endpoints.
        role: &'static str,
    },

    /// The graph has no memory range to bind the memory controller to.
    #[error("system has no memory ranges")]
    NoMemoryRange,

    /// The graph was handed to a driver before assembly finished.
    #[error("system graph is not ready; finish assembly before running it")]
    GraphNotReady,

    /// A port was still unconnected when the graph was finalized.
    #[error("port {component}.{port} was left unconnected")]
    UnconnectedPort {
        /// Name of the component owning the port.
        component: String,
        /// Port name.
        port: String,
    },
}

/// Failures reading a workload binary.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("cannot read '{path}': {source}")]
    Io {
        /// Path as given.
        path: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The file is not a parsable object file.
    #[error("'{path}' is not a valid ELF binary: {reason}")]
    Format {
        /// Path as given.
        path: String,
        /// Parser message.
        reason: String,
    },

    /// The binary targets an architecture with no matching ISA.
    #[error("'{path}' targets unsupported architecture {arch}")]
    Architecture {
        /// Path as given.
        path: String,
        /// Architecture reported by the object file.
        arch: String,
    },
}

/// Failures resolving architecture-dependent parts of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// The run driver cannot simulate the target ISA.
    #[error("run driver does not support ISA {0}")]
    UnsupportedIsa(Isa),
}

/// Failure reported by a run driver; passed through unchanged.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The workload binary is missing or malformed.
    #[error("workload '{path}': {reason}")]
    Workload {
        /// Binary path as given in the process command.
        path: String,
        /// Engine-supplied description.
        reason: String,
    },

    /// `simulate` was called before `instantiate`.
    #[error("simulate called before instantiate")]
    NotInstantiated,

    /// `instantiate` was called on a driver that already holds a graph.
    #[error("driver already instantiated a graph")]
    AlreadyInstantiated,

    /// I/O failure inside the driver.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization failure inside the driver.
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

/// Umbrella error for a complete configure-and-run invocation.
#[derive(Debug, Error)]
pub enum Error {
    /// See [`ConfigError`].
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// See [`ResolutionError`].
    #[error("resolution error: {0}")]
    Resolution(#[from] ResolutionError),

    /// See [`DriverError`].
    #[error(transparent)]
    Driver(#[from] DriverError),
}
