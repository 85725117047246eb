//! Out-of-order core descriptor and its interrupt controller.
//!
//! The core is described, not simulated: this module records which O3
//! implementation the engine should build and with which structure sizes.
//! Mode-specific parameters live inside the variant that uses them, so a
//! baseline or runahead core cannot carry precise-runahead state.

use serde::Serialize;

use crate::common::{AddrRange, Isa};
use crate::config::ModeTag;
use crate::soc::graph::{PortRole, PortSpec};

/// Load queue entries (O3 default).
pub const LQ_ENTRIES: usize = 32;

/// Store queue entries (O3 default).
pub const SQ_ENTRIES: usize = 32;

/// Issue queue entries (O3 default).
pub const IQ_ENTRIES: usize = 64;

/// Ports exposed by every core.
pub const CORE_PORTS: &[PortSpec] = &[
    PortSpec::scalar("icache_port", PortRole::Requestor),
    PortSpec::scalar("dcache_port", PortRole::Requestor),
];

/// Ports of an interrupt controller that is wired onto the memory bus.
const EXTERNAL_INTERRUPT_PORTS: &[PortSpec] = &[
    PortSpec::scalar("pio", PortRole::Responder),
    PortSpec::scalar("int_requestor", PortRole::Requestor),
    PortSpec::scalar("int_responder", PortRole::Responder),
];

/// Precise-runahead structure parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PreParams {
    /// Use the Stalling Slice Table to filter runahead instructions.
    pub sst_enabled: bool,
    /// Reuse registers through precise register deallocation.
    pub rrr_enabled: bool,
    /// Leave runahead mode when the ROB squashes.
    pub exit_on_squash: bool,
    /// Precise Register Deallocation Queue entries.
    pub prdq_entries: usize,
    /// Stalling Slice Table entries.
    pub sst_entries: usize,
}

/// The O3 implementation to build, with the parameters valid for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CoreVariant {
    /// Stock out-of-order core.
    #[serde(rename = "O3CPU")]
    Baseline,
    /// Runahead core.
    #[serde(rename = "RunaheadO3CPU")]
    Runahead,
    /// Precise runahead execution core.
    #[serde(rename = "PreO3CPU")]
    PreciseRunahead(PreParams),
}

impl CoreVariant {
    /// The option tag this variant was selected by.
    pub const fn mode(&self) -> ModeTag {
        match self {
            Self::Baseline => ModeTag::Baseline,
            Self::Runahead => ModeTag::Runahead,
            Self::PreciseRunahead(_) => ModeTag::PreciseRunahead,
        }
    }

    /// Engine-side class name of the core.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Baseline => "O3CPU",
            Self::Runahead => "RunaheadO3CPU",
            Self::PreciseRunahead(_) => "PreO3CPU",
        }
    }

    /// Human-readable banner naming the mode.
    pub fn banner(&self) -> String {
        let label = match self {
            Self::Baseline => "baseline",
            Self::Runahead => "runahead",
            Self::PreciseRunahead(_) => "PRE",
        };
        format!("----------------{label}----------------")
    }
}

/// A process image bound to the core: `argv[0]` is the binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Process {
    cmd: Vec<String>,
}

impl Process {
    /// Wraps a command vector. The vector is never empty; see
    /// [`split_command`](crate::sim::workload::split_command).
    pub(crate) const fn new(cmd: Vec<String>) -> Self {
        Self { cmd }
    }

    /// The full command vector.
    pub fn cmd(&self) -> &[String] {
        &self.cmd
    }

    /// The executable, i.e. `cmd[0]`.
    pub fn executable(&self) -> &str {
        self.cmd.first().map_or("", String::as_str)
    }
}

/// Per-hardware-thread context derived after the process is bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThreadContext {
    /// Hardware thread index within the core.
    pub thread_id: usize,
    /// Address space the thread executes in.
    pub addr_range: AddrRange,
}

/// Out-of-order core descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct O3Core {
    /// Implementation and mode-specific parameters.
    pub variant: CoreVariant,
    /// Reorder buffer entries.
    pub rob_entries: usize,
    /// Load queue entries.
    pub lq_entries: usize,
    /// Store queue entries.
    pub sq_entries: usize,
    /// Issue queue entries.
    pub iq_entries: usize,
    /// Hardware threads.
    pub num_threads: usize,
    process: Option<Process>,
    threads: Vec<ThreadContext>,
}

impl O3Core {
    /// Creates a core of the given variant with default queue sizes.
    pub const fn new(variant: CoreVariant, rob_entries: usize) -> Self {
        Self {
            variant,
            rob_entries,
            lq_entries: LQ_ENTRIES,
            sq_entries: SQ_ENTRIES,
            iq_entries: IQ_ENTRIES,
            num_threads: 1,
            process: None,
            threads: Vec::new(),
        }
    }

    /// Precise-runahead parameters, present only for that variant.
    pub const fn pre_params(&self) -> Option<&PreParams> {
        match &self.variant {
            CoreVariant::PreciseRunahead(params) => Some(params),
            CoreVariant::Baseline | CoreVariant::Runahead => None,
        }
    }

    /// The bound process, if any.
    pub const fn process(&self) -> Option<&Process> {
        self.process.as_ref()
    }

    /// Thread contexts; empty until a process is bound.
    pub fn threads(&self) -> &[ThreadContext] {
        &self.threads
    }

    /// Returns `true` once a process has been bound.
    pub const fn has_workload(&self) -> bool {
        self.process.is_some()
    }

    pub(crate) fn bind_process(&mut self, process: Process, addr_range: AddrRange) {
        self.threads = (0..self.num_threads)
            .map(|thread_id| ThreadContext {
                thread_id,
                addr_range,
            })
            .collect();
        self.process = Some(process);
    }
}

/// Interrupt controller owned by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InterruptController {
    /// Architecture the controller models.
    pub isa: Isa,
}

impl InterruptController {
    /// Creates the controller for `isa`.
    pub const fn new(isa: Isa) -> Self {
        Self { isa }
    }

    /// Ports the controller exposes; empty when interrupts stay inside the core.
    pub const fn ports(&self) -> &'static [PortSpec] {
        if self.isa.routes_interrupts_externally() {
            EXTERNAL_INTERRUPT_PORTS
        } else {
            &[]
        }
    }
}
