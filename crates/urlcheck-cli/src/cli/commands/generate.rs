//! `urlcheck generate` – build the database seed script from the dataset.

use anyhow::Result;
use std::path::Path;
use urlcheck_core::loader::Loader;

pub fn run_generate(dataset_dir: &Path, output: &Path) -> Result<()> {
    let summary = Loader::new(dataset_dir, output).run()?;
    println!(
        "Appended {} statement(s) from {} dataset file(s) to {}",
        summary.statements,
        summary.files,
        output.display()
    );
    Ok(())
}
