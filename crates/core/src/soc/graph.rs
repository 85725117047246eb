//! System graph: an arena of components and the connections between their ports.
//!
//! This module implements the static configuration graph handed to the engine. It provides:
//! 1. **Arena:** Components addressed by stable `ComponentId`s; the root `system` is always id 0.
//! 2. **Ports:** Named requestor/responder ports, scalar or vector, declared per component kind.
//! 3. **Connections:** Validated requestor→responder bindings recorded in issue order.
//! 4. **Inspection:** Unconnected-port detection and port-pairing sets for structural checks.
//!
//! A scalar port accepts one connection. A vector port accepts any number, each
//! on a fresh slot, so no slot is ever bound twice.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::common::error::ConfigError;
use crate::common::{AddrRange, Frequency, Isa};
use crate::core::cpu::{CORE_PORTS, InterruptController, O3Core};
use crate::sim::workload::Workload;
use crate::soc::cache::{CACHE_PORTS, CacheComponent};
use crate::soc::interconnect::{BUS_PORTS, Bus};
use crate::soc::memory::{DramModel, MEM_CTRL_PORTS, MemoryController};

/// Ports of the root system object.
const SYSTEM_PORTS: &[PortSpec] = &[PortSpec::scalar("system_port", PortRole::Requestor)];

/// Stable index of a component in the graph's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ComponentId(pub usize);

/// Direction of a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PortRole {
    /// Issues requests.
    Requestor,
    /// Serves requests.
    Responder,
}

impl PortRole {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Requestor => "requestors",
            Self::Responder => "responders",
        }
    }
}

/// Static declaration of a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortSpec {
    /// Port name, unique within the component.
    pub name: &'static str,
    /// Direction.
    pub role: PortRole,
    /// Whether the port accepts multiple connections.
    pub vector: bool,
}

impl PortSpec {
    /// A port accepting exactly one connection.
    pub const fn scalar(name: &'static str, role: PortRole) -> Self {
        Self {
            name,
            role,
            vector: false,
        }
    }

    /// A port accepting one connection per slot, with slots allocated on demand.
    pub const fn vector(name: &'static str, role: PortRole) -> Self {
        Self {
            name,
            role,
            vector: true,
        }
    }
}

/// One end of a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PortRef {
    /// Owning component.
    pub component: ComponentId,
    /// Port name.
    pub port: &'static str,
    /// Slot for vector ports; `None` for scalar ports.
    pub index: Option<usize>,
}

/// A requestor→responder binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Connection {
    /// Requesting side.
    pub requestor: PortRef,
    /// Responding side.
    pub responder: PortRef,
}

/// Runtime state of a declared port.
#[derive(Debug, Clone, Serialize)]
pub struct Port {
    /// Declaration.
    pub spec: PortSpec,
    /// Indices into the connection list, one per bound slot.
    pub bindings: Vec<usize>,
}

impl Port {
    const fn new(spec: PortSpec) -> Self {
        Self {
            spec,
            bindings: Vec::new(),
        }
    }

    /// Returns `true` if at least one connection uses the port.
    pub fn is_connected(&self) -> bool {
        !self.bindings.is_empty()
    }
}

/// What a component is.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "params")]
pub enum ComponentKind {
    /// Root system object.
    System,
    /// The out-of-order core.
    Core(O3Core),
    /// The core's interrupt controller.
    InterruptController(InterruptController),
    /// A cache level.
    Cache(CacheComponent),
    /// A crossbar.
    Bus(Bus),
    /// The memory controller.
    MemoryController(MemoryController),
    /// The DRAM timing model owned by a memory controller.
    Dram(DramModel),
}

impl ComponentKind {
    fn port_specs(&self) -> &'static [PortSpec] {
        match self {
            Self::System => SYSTEM_PORTS,
            Self::Core(_) => CORE_PORTS,
            Self::InterruptController(ic) => ic.ports(),
            Self::Cache(_) => CACHE_PORTS,
            Self::Bus(_) => BUS_PORTS,
            Self::MemoryController(_) => MEM_CTRL_PORTS,
            Self::Dram(_) => &[],
        }
    }
}

/// A named node in the graph.
#[derive(Debug, Clone, Serialize)]
pub struct Component {
    /// Dotted path, e.g. `system.cpu.icache`.
    pub name: String,
    /// Parameters.
    pub kind: ComponentKind,
    /// Declared ports and their bindings.
    pub ports: Vec<Port>,
}

impl Component {
    fn new(name: String, kind: ComponentKind) -> Self {
        let ports = kind.port_specs().iter().copied().map(Port::new).collect();
        Self { name, kind, ports }
    }

    /// Looks up a port by name.
    pub fn port(&self, name: &str) -> Option<&Port> {
        self.ports.iter().find(|p| p.spec.name == name)
    }
}

/// Memory access mode the engine runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MemMode {
    /// Functional accesses with latency estimates.
    Atomic,
    /// Fully timed accesses.
    #[default]
    Timing,
}

/// Clock and voltage for every component in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClockDomain {
    /// Clock frequency.
    pub clock: Frequency,
    /// Clock period in ticks.
    pub period_ticks: u64,
    /// Supply voltage in millivolts.
    pub voltage_mv: u32,
}

impl ClockDomain {
    /// Creates a clock domain at the default 1 V supply.
    pub fn new(clock: Frequency) -> Self {
        Self {
            clock,
            period_ticks: clock.period_ticks(),
            voltage_mv: 1000,
        }
    }
}

/// The root container of a simulated system.
#[derive(Debug, Clone, Serialize)]
pub struct SystemGraph {
    isa: Isa,
    mem_mode: MemMode,
    clk_domain: ClockDomain,
    mem_ranges: Vec<AddrRange>,
    components: Vec<Component>,
    connections: Vec<Connection>,
    workload: Option<Workload>,
    ready: bool,
}

impl SystemGraph {
    /// Id of the root `system` component.
    pub const ROOT: ComponentId = ComponentId(0);

    /// Creates a graph holding only the root system object.
    pub fn new(isa: Isa, clk_domain: ClockDomain, mem_ranges: Vec<AddrRange>) -> Self {
        Self {
            isa,
            mem_mode: MemMode::Timing,
            clk_domain,
            mem_ranges,
            components: vec![Component::new("system".to_string(), ComponentKind::System)],
            connections: Vec::new(),
            workload: None,
            ready: false,
        }
    }

    /// Target ISA.
    pub const fn isa(&self) -> Isa {
        self.isa
    }

    /// Memory access mode.
    pub const fn mem_mode(&self) -> MemMode {
        self.mem_mode
    }

    /// System clock domain.
    pub const fn clk_domain(&self) -> &ClockDomain {
        &self.clk_domain
    }

    /// Physical memory ranges, in declaration order.
    pub fn mem_ranges(&self) -> &[AddrRange] {
        &self.mem_ranges
    }

    /// SE-mode workload object, once bound.
    pub const fn workload(&self) -> Option<&Workload> {
        self.workload.as_ref()
    }

    /// Returns `true` once the assembler has finalized the graph.
    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    /// All components, indexed by `ComponentId`.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Looks up a component.
    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.get(id.0)
    }

    /// Connections in the order they were issued.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// The (single) core, if one has been added.
    pub fn core(&self) -> Option<&O3Core> {
        self.components.iter().find_map(|c| match &c.kind {
            ComponentKind::Core(core) => Some(core),
            _ => None,
        })
    }

    /// Counts components matching `pred`.
    pub fn count(&self, pred: impl Fn(&ComponentKind) -> bool) -> usize {
        self.components.iter().filter(|c| pred(&c.kind)).count()
    }

    /// Every connection as an unordered-set key, for structural comparison.
    pub fn port_pairs(&self) -> BTreeSet<Connection> {
        self.connections.iter().copied().collect()
    }

    /// `component.port` names of every port without a connection.
    pub fn unconnected_ports(&self) -> Vec<(String, &'static str)> {
        self.components
            .iter()
            .flat_map(|c| {
                c.ports
                    .iter()
                    .filter(|p| !p.is_connected())
                    .map(move |p| (c.name.clone(), p.spec.name))
            })
            .collect()
    }

    /// A copy of this graph with every connection removed.
    ///
    /// Replaying [`connections`](Self::connections) on the copy in order
    /// reproduces the original pairing, slot indices included.
    pub fn disconnected(&self) -> Self {
        let mut copy = self.clone();
        copy.connections.clear();
        copy.ready = false;
        for port in copy.components.iter_mut().flat_map(|c| c.ports.iter_mut()) {
            port.bindings.clear();
        }
        copy
    }

    /// Adds a component and returns its id.
    pub fn add(&mut self, name: impl Into<String>, kind: ComponentKind) -> ComponentId {
        let id = ComponentId(self.components.len());
        self.components.push(Component::new(name.into(), kind));
        id
    }

    /// Connects two ports. Argument order does not matter; roles decide
    /// which end is the requestor.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::UnknownPort`] if either component or port does not exist.
    /// * [`ConfigError::RoleMismatch`] if both ends have the same role.
    /// * [`ConfigError::PortInUse`] if a scalar end is already connected.
    pub fn connect(
        &mut self,
        a: ComponentId,
        a_port: &str,
        b: ComponentId,
        b_port: &str,
    ) -> Result<(), ConfigError> {
        let a_idx = self.locate(a, a_port)?;
        let b_idx = self.locate(b, b_port)?;
        let a_spec = self.components[a.0].ports[a_idx].spec;
        let b_spec = self.components[b.0].ports[b_idx].spec;

        let ((req, req_idx), (resp, resp_idx)) = match (a_spec.role, b_spec.role) {
            (PortRole::Requestor, PortRole::Responder) => ((a, a_idx), (b, b_idx)),
            (PortRole::Responder, PortRole::Requestor) => ((b, b_idx), (a, a_idx)),
            (role, _) => {
                return Err(ConfigError::RoleMismatch {
                    left: self.describe(a, a_spec.name),
                    right: self.describe(b, b_spec.name),
                    role: role.as_str(),
                });
            }
        };

        self.ensure_free(req, req_idx)?;
        self.ensure_free(resp, resp_idx)?;

        let conn_idx = self.connections.len();
        let requestor = self.bind(req, req_idx, conn_idx);
        let responder = self.bind(resp, resp_idx, conn_idx);
        debug!(
            "connect {} -> {}",
            self.describe_ref(&requestor),
            self.describe_ref(&responder)
        );
        self.connections.push(Connection {
            requestor,
            responder,
        });
        Ok(())
    }

    pub(crate) fn component_mut(&mut self, id: ComponentId) -> Option<&mut Component> {
        self.components.get_mut(id.0)
    }

    pub(crate) fn set_workload(&mut self, workload: Workload) {
        self.workload = Some(workload);
    }

    pub(crate) const fn mark_ready(&mut self) {
        self.ready = true;
    }

    fn locate(&self, id: ComponentId, port: &str) -> Result<usize, ConfigError> {
        self.components
            .get(id.0)
            .and_then(|c| c.ports.iter().position(|p| p.spec.name == port))
            .ok_or_else(|| ConfigError::UnknownPort {
                component: id.0,
                port: port.to_string(),
            })
    }

    fn ensure_free(&self, id: ComponentId, port_idx: usize) -> Result<(), ConfigError> {
        let component = &self.components[id.0];
        let port = &component.ports[port_idx];
        if !port.spec.vector && port.is_connected() {
            return Err(ConfigError::PortInUse {
                component: component.name.clone(),
                port: port.spec.name.to_string(),
            });
        }
        Ok(())
    }

    fn bind(&mut self, id: ComponentId, port_idx: usize, conn_idx: usize) -> PortRef {
        let port = &mut self.components[id.0].ports[port_idx];
        let index = port.spec.vector.then_some(port.bindings.len());
        port.bindings.push(conn_idx);
        PortRef {
            component: id,
            port: port.spec.name,
            index,
        }
    }

    fn describe(&self, id: ComponentId, port: &str) -> String {
        format!("{}.{port}", self.components[id.0].name)
    }

    fn describe_ref(&self, port: &PortRef) -> String {
        match port.index {
            Some(i) => format!("{}[{i}]", self.describe(port.component, port.port)),
            None => self.describe(port.component, port.port),
        }
    }
}
