//! Load, plan, simulate, report.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use mr_core::Turn;
use mr_network::load_network;
use mr_output::{CsvWriter, ReportObserver, RunInfo, TextReporter};
use mr_sim::{SimBuilder, Strategy};

use crate::args::Args;

/// Run one simulation, writing the turn report to `out`.
pub fn run<W: Write>(args: &Args, out: W) -> Result<Turn> {
    let graph = load_network(&args.filename)
        .with_context(|| format!("cannot load network from {}", args.filename.display()))?;
    let strategy = Strategy::try_from(args.algo)?;

    let mut builder = SimBuilder::new(&graph).strategy(strategy);
    if let Some(n) = args.max_turns {
        builder = builder.max_turns(n);
    }
    let mut sim = builder.build()?;
    info!(%strategy, paths = sim.paths().len(), vehicles = sim.vehicle_count(), "starting run");

    let text = TextReporter::new(&graph, out).quiet(args.quiet);
    let csv = match &args.csv {
        Some(dir) => {
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("cannot create CSV output in {}", dir.display()))?;
            let info = RunInfo {
                strategy: strategy.name().to_owned(),
                paths:    sim.paths().len(),
                vehicles: sim.vehicle_count(),
            };
            Some(ReportObserver::new(&graph, writer, info))
        }
        None => None,
    };

    let mut observers = (text, csv);
    let total = sim.run(&mut observers)?;

    if let Some(e) = observers.0.take_error() {
        return Err(e).context("writing turn report");
    }
    if let Some(e) = observers.1.as_mut().and_then(ReportObserver::take_error) {
        return Err(e).context("writing CSV output");
    }
    Ok(total)
}
