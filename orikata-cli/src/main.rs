//! Fold a crease pattern from the command line.
//!
//! ```text
//! orikata <pattern.fold> [fold-percent] [steps]
//! ```
//!
//! Imports the pattern, relaxes it toward the given fold percentage (0-100,
//! default 100) for the given number of steps (default 5000) and writes the
//! folded state to stdout as JSON.

use std::error::Error;
use std::path::PathBuf;

use orikata_core::Solver;
use orikata_model::{SimulationParameters, Vector3F};

#[derive(serde::Serialize)]
struct Output {
    title: Option<String>,
    fold_percent: f32,
    steps: usize,
    dt: f32,
    kinetic_energy: f32,
    positions: Vec<Vector3F>,
    fold_angles: Vec<f32>,
}

fn usage() -> Box<dyn Error> {
    "usage: orikata <pattern.fold> [fold-percent] [steps]".into()
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let path: PathBuf = args.next().ok_or_else(usage)?.into();
    let fold_percent = match args.next() {
        Some(raw) => raw.parse::<f32>().map_err(|_| usage())? / 100.0,
        None => 1.0,
    };
    let steps = match args.next() {
        Some(raw) => raw.parse::<usize>().map_err(|_| usage())?,
        None => 5000,
    };

    let model = orikata_importer::import_file(&path)?;
    tracing::info!(
        title = model.title.as_deref(),
        nodes = model.positions.len(),
        creases = model.creases.len(),
        "imported pattern"
    );

    let mut solver = Solver::new(model, SimulationParameters::default());
    solver.set_fold_percent(fold_percent);
    solver.step_n(steps);

    let output = Output {
        title: solver.model().title.clone(),
        fold_percent: solver.parameters().fold_percent,
        steps,
        dt: solver.dt(),
        kinetic_energy: solver.kinetic_energy(),
        positions: solver.positions().to_vec(),
        fold_angles: solver.fold_angles().to_vec(),
    };
    serde_json::to_writer_pretty(std::io::stdout().lock(), &output)?;
    println!();
    Ok(())
}
