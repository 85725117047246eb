//! Command-line front end for the topology assembler.
//!
//! This binary builds one system graph from options and runs it. It performs:
//! 1. **Option resolution:** Defaults, then an optional JSON file, then individual flags.
//! 2. **Assembly:** Mode selection, caches, topology and workload binding.
//! 3. **Run:** Hands the graph to the run driver once and reports the exit tick and cause.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rasim_core::common::Isa;
use rasim_core::config::{ModeTag, Options};
use rasim_core::sim::{DryRunDriver, loader, run};
use rasim_core::soc::build_system;

#[derive(Parser, Debug)]
#[command(
    name = "rasim",
    author,
    version,
    about = "Assemble and run a single-core O3 system (baseline, runahead or PRE)",
    long_about = "Builds a core with split L1 caches, a shared L2, an L2 crossbar, a system crossbar and a DDR3 memory controller, binds a workload and hands the result to the run driver.\n\nExamples:\n  rasim --binary randacc --binary_args 600000 --mode runahead\n  rasim --mode pre --sst_entries 64 --dump-config config.json\n  rasim --config opts.json --isa auto"
)]
struct Cli {
    /// JSON file with options; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Test binary.
    #[arg(long)]
    binary: Option<String>,

    /// Arguments to the test binary, comma separated.
    #[arg(long = "binary_args")]
    binary_args: Option<String>,

    /// Which implementation of the O3 CPU should be run (baseline, runahead, pre).
    #[arg(long)]
    mode: Option<String>,

    /// Size of the reorder buffer.
    #[arg(long = "rob_size")]
    rob_size: Option<usize>,

    /// Whether PRE uses the Stalling Slice Table.
    #[arg(long = "sst_enabled")]
    sst_enabled: Option<bool>,

    /// Whether PRE uses register reuse.
    #[arg(long = "rrr_enabled")]
    rrr_enabled: Option<bool>,

    /// Whether the CPU leaves PRE mode on a ROB squash.
    #[arg(long = "exit_PRE_when_squash")]
    exit_pre_when_squash: Option<bool>,

    /// Size of the Precise Register Deallocation Queue.
    #[arg(long = "prdq_entries")]
    prdq_entries: Option<usize>,

    /// Maximum entries of the Stalling Slice Table.
    #[arg(long = "sst_entries")]
    sst_entries: Option<usize>,

    /// L1 instruction cache size.
    #[arg(long = "l1i_size")]
    l1i_size: Option<String>,

    /// L1 data cache size.
    #[arg(long = "l1d_size")]
    l1d_size: Option<String>,

    /// L2 cache size.
    #[arg(long = "l2_size")]
    l2_size: Option<String>,

    /// Target ISA, or `auto` to read it from the binary.
    #[arg(long)]
    isa: Option<String>,

    /// System clock.
    #[arg(long)]
    clock: Option<String>,

    /// Physical memory size.
    #[arg(long = "mem_size")]
    mem_size: Option<String>,

    /// Write the instantiated graph as JSON.
    #[arg(long = "dump-config")]
    dump_config: Option<PathBuf>,

    /// Do not check that the binary is an ELF file for the target ISA.
    #[arg(long = "no-binary-check")]
    no_binary_check: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run_cli(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_cli(cli: Cli) -> Result<(), Box<dyn Error>> {
    let opts = resolve_options(&cli)?;
    debug!("resolved options: {opts:?}");
    let graph = build_system(&opts)?;

    if let Some(core) = graph.core() {
        println!("{}\n", core.variant.banner());
        if let Some(process) = core.process() {
            println!("cmd: {:?}", process.cmd());
        }
    }

    let mut driver = DryRunDriver::new();
    if let Some(path) = &cli.dump_config {
        driver = driver.with_dump(path);
    }
    if cli.no_binary_check {
        driver = driver.without_binary_check();
    }

    println!("Beginning simulation!");
    let exit = run(graph, &mut driver)?;
    println!("Exiting @ tick {} because {}", exit.tick, exit.cause);
    Ok(())
}

/// Layers defaults, the JSON file and flags, in that order.
fn resolve_options(cli: &Cli) -> Result<Options, Box<dyn Error>> {
    let mut opts = match &cli.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => Options::default(),
    };

    if let Some(binary) = &cli.binary {
        opts.binary.clone_from(binary);
    }
    if let Some(args) = &cli.binary_args {
        opts.binary_args.clone_from(args);
    }
    if let Some(mode) = &cli.mode {
        opts.mode = mode.parse::<ModeTag>()?;
    }
    if let Some(v) = cli.rob_size {
        opts.rob_size = v;
    }
    if let Some(v) = cli.sst_enabled {
        opts.sst_enabled = v;
    }
    if let Some(v) = cli.rrr_enabled {
        opts.rrr_enabled = v;
    }
    if let Some(v) = cli.exit_pre_when_squash {
        opts.exit_pre_when_squash = v;
    }
    if let Some(v) = cli.prdq_entries {
        opts.prdq_entries = v;
    }
    if let Some(v) = cli.sst_entries {
        opts.sst_entries = v;
    }
    if let Some(v) = &cli.l1i_size {
        opts.l1i_size.clone_from(v);
    }
    if let Some(v) = &cli.l1d_size {
        opts.l1d_size.clone_from(v);
    }
    if let Some(v) = &cli.l2_size {
        opts.l2_size.clone_from(v);
    }
    if let Some(v) = &cli.clock {
        opts.clock.clone_from(v);
    }
    if let Some(v) = &cli.mem_size {
        opts.mem_size.clone_from(v);
    }
    match cli.isa.as_deref() {
        Some("auto") => opts.isa = loader::detect_isa(Path::new(&opts.binary))?,
        Some(tag) => opts.isa = tag.parse::<Isa>()?,
        None => {}
    }
    Ok(opts)
}
