use std::io::Write;

use anyhow::{Context, Result};
use log::info;
use quality_probe_infra::{FsSnapshotStore, MeasurementDocumentReader};
use quality_probe_usecase::{CompareSnapshots, RunProbe};

use crate::{
    args::{Args, Command, CompareArgs, ScanArgs},
    config::ScanConfig,
    presentation,
};

/// What the process should report through its exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
}

pub fn run(args: Args) -> Result<Outcome> {
    match args.command {
        Command::Scan(scan) => run_scan(scan),
        Command::Compare(cmp) => run_compare(&cmp),
    }
}

fn run_scan(args: ScanArgs) -> Result<Outcome> {
    let config = ScanConfig::from_args(args).context("invalid scan options")?;
    let reader = MeasurementDocumentReader;
    let store = FsSnapshotStore;

    let output = RunProbe::new(&reader).with_store(&store).run(&config.request)?;
    let rendered = presentation::render_scan(
        &output.snapshot,
        &output.verdict,
        config.format,
        &config.request.options,
        config.complexity_target,
    )?;
    emit(&rendered)?;

    if output.verdict.passed {
        Ok(Outcome::Passed)
    } else {
        info!("{} threshold(s) breached", output.verdict.breaches.len());
        Ok(Outcome::Failed)
    }
}

fn run_compare(args: &CompareArgs) -> Result<Outcome> {
    let store = FsSnapshotStore;
    let diff = CompareSnapshots::new(&store).run(&args.old, &args.new).context("compare failed")?;
    emit(&presentation::render_diff(&diff, args.format)?)?;
    Ok(Outcome::Passed)
}

fn emit(text: &str) -> Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    lock.write_all(text.as_bytes()).context("failed to write output")?;
    lock.flush().context("failed to flush output")?;
    Ok(())
}
