//! Topology assembler.
//!
//! Builds the system graph one stage at a time. Each stage checks that the
//! previous one completed, so the graph is either complete and internally
//! consistent or construction stops with a [`ConfigError`]:
//!
//! ```text
//! Empty -> CoreCreated -> L1Attached -> L2BusWired -> L2Attached
//!       -> SystemBusWired -> [InterruptsWired] -> MemoryAttached
//!       -> WorkloadBound -> Ready
//! ```
//!
//! `InterruptsWired` is only entered for ISAs whose interrupt controller sits
//! on the memory bus; for every other ISA `wire_interrupts` is a no-op.

use serde::Serialize;
use tracing::{debug, info};

use crate::common::error::ConfigError;
use crate::common::{AddrRange, Isa};
use crate::core::cpu::{InterruptController, O3Core, Process};
use crate::sim::workload::Workload;
use crate::soc::cache::{CacheComponent, CacheKind};
use crate::soc::graph::{ClockDomain, ComponentId, ComponentKind, SystemGraph};
use crate::soc::interconnect::Bus;
use crate::soc::memory::{DramModel, MemoryController};

/// Stages of topology assembly, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AssemblyState {
    /// Only the root system object exists.
    Empty,
    /// Core and its interrupt controller exist.
    CoreCreated,
    /// Both L1 caches are bound to the core.
    L1Attached,
    /// The L2 crossbar exists and both L1s feed it.
    L2BusWired,
    /// The L2 sits behind the L2 crossbar; its memory side is still open.
    L2Attached,
    /// The system crossbar joins the L2 and the system port.
    SystemBusWired,
    /// The interrupt controller is on the system crossbar.
    InterruptsWired,
    /// Memory controller and DRAM model are behind the system crossbar.
    MemoryAttached,
    /// The process is bound and thread contexts exist.
    WorkloadBound,
    /// Terminal; the graph may be handed to a run driver.
    Ready,
}

/// Ids of the components created so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Handles {
    /// `system.cpu`
    pub core: Option<ComponentId>,
    /// `system.cpu.interrupts`
    pub interrupts: Option<ComponentId>,
    /// `system.cpu.icache`
    pub icache: Option<ComponentId>,
    /// `system.cpu.dcache`
    pub dcache: Option<ComponentId>,
    /// `system.l2bus`
    pub l2bus: Option<ComponentId>,
    /// `system.l2cache`
    pub l2cache: Option<ComponentId>,
    /// `system.membus`
    pub membus: Option<ComponentId>,
    /// `system.mem_ctrl`
    pub mem_ctrl: Option<ComponentId>,
    /// `system.mem_ctrl.dram`
    pub dram: Option<ComponentId>,
}

/// Sequential builder for a [`SystemGraph`].
#[derive(Debug)]
pub struct TopologyAssembler {
    graph: SystemGraph,
    state: AssemblyState,
    handles: Handles,
}

impl TopologyAssembler {
    /// Starts a new graph for `isa`.
    pub fn new(isa: Isa, clk_domain: ClockDomain, mem_ranges: Vec<AddrRange>) -> Self {
        Self {
            graph: SystemGraph::new(isa, clk_domain, mem_ranges),
            state: AssemblyState::Empty,
            handles: Handles::default(),
        }
    }

    /// Current stage.
    pub const fn state(&self) -> AssemblyState {
        self.state
    }

    /// Components created so far.
    pub const fn handles(&self) -> &Handles {
        &self.handles
    }

    /// The graph under construction.
    pub const fn graph(&self) -> &SystemGraph {
        &self.graph
    }

    /// Adds the core and creates its interrupt controller.
    ///
    /// # Errors
    ///
    /// [`ConfigError::OutOfOrder`] unless the assembler is `Empty`.
    pub fn create_core(&mut self, core: O3Core) -> Result<(), ConfigError> {
        self.require("create core", AssemblyState::Empty)?;

        let isa = self.graph.isa();
        self.handles.core = Some(self.graph.add("system.cpu", ComponentKind::Core(core)));
        self.handles.interrupts = Some(self.graph.add(
            "system.cpu.interrupts",
            ComponentKind::InterruptController(InterruptController::new(isa)),
        ));
        self.advance(AssemblyState::CoreCreated);
        Ok(())
    }

    /// Adds both L1 caches and binds them to the core's fetch and data ports.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::OutOfOrder`] unless the core exists.
    /// * [`ConfigError::WrongComponent`] if either cache is not the matching L1;
    ///   the graph is left untouched.
    pub fn attach_l1(&mut self, icache: CacheComponent, dcache: CacheComponent) -> Result<(), ConfigError> {
        let step = "attach L1 caches";
        self.require(step, AssemblyState::CoreCreated)?;
        let core = self.need(step, self.handles.core)?;
        check_kind(&icache, CacheKind::L1Instruction, "system.cpu.icache", "an L1 instruction cache")?;
        check_kind(&dcache, CacheKind::L1Data, "system.cpu.dcache", "an L1 data cache")?;

        let icache = self.graph.add("system.cpu.icache", ComponentKind::Cache(icache));
        let dcache = self.graph.add("system.cpu.dcache", ComponentKind::Cache(dcache));
        self.graph.connect_cpu(icache, core)?;
        self.graph.connect_cpu(dcache, core)?;

        self.handles.icache = Some(icache);
        self.handles.dcache = Some(dcache);
        self.advance(AssemblyState::L1Attached);
        Ok(())
    }

    /// Adds the L2 crossbar and connects both L1s to it.
    ///
    /// # Errors
    ///
    /// [`ConfigError::OutOfOrder`] unless the L1s are attached; connection errors otherwise.
    pub fn wire_l2_bus(&mut self, bus: Bus) -> Result<(), ConfigError> {
        let step = "wire L2 bus";
        self.require(step, AssemblyState::L1Attached)?;
        let icache = self.need(step, self.handles.icache)?;
        let dcache = self.need(step, self.handles.dcache)?;

        let l2bus = self.graph.add("system.l2bus", ComponentKind::Bus(bus));
        self.graph.connect_bus(icache, l2bus)?;
        self.graph.connect_bus(dcache, l2bus)?;

        self.handles.l2bus = Some(l2bus);
        self.advance(AssemblyState::L2BusWired);
        Ok(())
    }

    /// Adds the L2 behind the L2 crossbar. Its memory side stays open until
    /// the system bus exists.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::OutOfOrder`] unless the L2 crossbar is wired.
    /// * [`ConfigError::WrongComponent`] if `l2` is an L1; the graph is left untouched.
    pub fn attach_l2(&mut self, l2: CacheComponent) -> Result<(), ConfigError> {
        let step = "attach L2 cache";
        self.require(step, AssemblyState::L2BusWired)?;
        let l2bus = self.need(step, self.handles.l2bus)?;
        check_kind(&l2, CacheKind::L2, "system.l2cache", "an L2 cache")?;

        let l2cache = self.graph.add("system.l2cache", ComponentKind::Cache(l2));
        self.graph.connect_cpu_side_bus(l2cache, l2bus)?;

        self.handles.l2cache = Some(l2cache);
        self.advance(AssemblyState::L2Attached);
        Ok(())
    }

    /// Adds the system crossbar and connects the L2 memory side and the
    /// system port to it.
    ///
    /// # Errors
    ///
    /// [`ConfigError::OutOfOrder`] unless the L2 is attached; connection errors otherwise.
    pub fn wire_system_bus(&mut self, bus: Bus) -> Result<(), ConfigError> {
        let step = "wire system bus";
        self.require(step, AssemblyState::L2Attached)?;
        let l2cache = self.need(step, self.handles.l2cache)?;

        let membus = self.graph.add("system.membus", ComponentKind::Bus(bus));
        self.graph.connect_mem_side_bus(l2cache, membus)?;
        self.graph
            .connect(SystemGraph::ROOT, "system_port", membus, "cpu_side_ports")?;

        self.handles.membus = Some(membus);
        self.advance(AssemblyState::SystemBusWired);
        Ok(())
    }

    /// Puts the interrupt controller directly on the system crossbar,
    /// bypassing the caches, if the ISA requires it. Otherwise does nothing.
    ///
    /// # Errors
    ///
    /// [`ConfigError::OutOfOrder`] unless the system bus is wired; connection errors otherwise.
    pub fn wire_interrupts(&mut self) -> Result<(), ConfigError> {
        let step = "wire interrupts";
        self.require(step, AssemblyState::SystemBusWired)?;

        let isa = self.graph.isa();
        if !isa.routes_interrupts_externally() {
            debug!("{isa} routes interrupts inside the core; nothing to wire");
            return Ok(());
        }

        let interrupts = self.need(step, self.handles.interrupts)?;
        let membus = self.need(step, self.handles.membus)?;
        self.graph.connect(membus, "mem_side_ports", interrupts, "pio")?;
        self.graph
            .connect(interrupts, "int_requestor", membus, "cpu_side_ports")?;
        self.graph
            .connect(membus, "mem_side_ports", interrupts, "int_responder")?;

        self.advance(AssemblyState::InterruptsWired);
        Ok(())
    }

    /// Adds the memory controller and its DRAM model, bound to the first
    /// memory range, behind the system crossbar.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::OutOfOrder`] if the previous stage is incomplete.
    /// * [`ConfigError::NoMemoryRange`] if the graph has no memory range.
    /// * [`ConfigError::InvalidSize`] if the range exceeds the DRAM capacity.
    pub fn attach_memory(&mut self, dram: DramModel) -> Result<(), ConfigError> {
        let step = "attach memory";
        let isa = self.graph.isa();
        let expected = if isa.routes_interrupts_externally() {
            AssemblyState::InterruptsWired
        } else {
            AssemblyState::SystemBusWired
        };
        self.require(step, expected)?;
        let membus = self.need(step, self.handles.membus)?;

        let range = *self
            .graph
            .mem_ranges()
            .first()
            .ok_or(ConfigError::NoMemoryRange)?;
        if range.size > dram.capacity() {
            return Err(ConfigError::InvalidSize {
                option: "mem_size",
                value: range.size.to_string(),
            });
        }

        let dram = self.graph.add("system.mem_ctrl.dram", ComponentKind::Dram(dram));
        let mem_ctrl = self.graph.add(
            "system.mem_ctrl",
            ComponentKind::MemoryController(MemoryController::new(range, dram)),
        );
        self.graph.connect(membus, "mem_side_ports", mem_ctrl, "port")?;

        self.handles.dram = Some(dram);
        self.handles.mem_ctrl = Some(mem_ctrl);
        self.advance(AssemblyState::MemoryAttached);
        Ok(())
    }

    /// Binds the process to the core, attaches the matching SE workload and
    /// derives thread contexts from the memory configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::OutOfOrder`] unless memory is attached.
    pub fn bind_workload(&mut self, process: Process) -> Result<(), ConfigError> {
        let step = "bind workload";
        self.require(step, AssemblyState::MemoryAttached)?;
        let core = self.need(step, self.handles.core)?;
        let range = *self
            .graph
            .mem_ranges()
            .first()
            .ok_or(ConfigError::NoMemoryRange)?;

        let workload = Workload::init_compatible(process.executable(), self.graph.isa());
        info!("cmd: {:?}", process.cmd());
        let missing_core = self.out_of_order(step, AssemblyState::CoreCreated);
        match self.graph.component_mut(core).map(|c| &mut c.kind) {
            Some(ComponentKind::Core(cpu)) => cpu.bind_process(process, range),
            _ => return Err(missing_core),
        }
        self.graph.set_workload(workload);

        self.advance(AssemblyState::WorkloadBound);
        Ok(())
    }

    /// Checks that every port is connected and releases the finished graph.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::OutOfOrder`] unless the workload is bound.
    /// * [`ConfigError::UnconnectedPort`] naming the first open port.
    pub fn finish(mut self) -> Result<SystemGraph, ConfigError> {
        self.require("finish", AssemblyState::WorkloadBound)?;

        if let Some((component, port)) = self.graph.unconnected_ports().into_iter().next() {
            return Err(ConfigError::UnconnectedPort {
                component,
                port: port.to_string(),
            });
        }

        self.graph.mark_ready();
        self.advance(AssemblyState::Ready);
        info!(
            "system ready: {} components, {} connections",
            self.graph.components().len(),
            self.graph.connections().len()
        );
        Ok(self.graph)
    }

    fn require(&self, step: &'static str, expected: AssemblyState) -> Result<(), ConfigError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(self.out_of_order(step, expected))
        }
    }

    fn need(&self, step: &'static str, id: Option<ComponentId>) -> Result<ComponentId, ConfigError> {
        id.ok_or_else(|| self.out_of_order(step, self.state))
    }

    const fn out_of_order(&self, step: &'static str, expected: AssemblyState) -> ConfigError {
        ConfigError::OutOfOrder {
            step,
            expected,
            found: self.state,
        }
    }

    fn advance(&mut self, next: AssemblyState) {
        debug!("assembly {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

/// Rejects a cache descriptor destined for a slot of a different level.
fn check_kind(
    cache: &CacheComponent,
    kind: CacheKind,
    slot: &str,
    expected: &'static str,
) -> Result<(), ConfigError> {
    if cache.kind == kind {
        Ok(())
    } else {
        Err(ConfigError::WrongComponent {
            component: format!("{slot} ({:?})", cache.kind),
            expected,
        })
    }
}
