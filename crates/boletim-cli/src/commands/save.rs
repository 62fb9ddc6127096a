use boletim_core::model::Extraction;
use boletim_core::store::sqlite::SqliteStore;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    week: &str,
    db: PathBuf,
) -> Result<(), boletim_core::error::BoletimError> {
    let json_bytes = std::fs::read(&input_file)?;
    let extraction: Extraction = serde_json::from_slice(&json_bytes)?;

    let mut store = SqliteStore::open(&db)?;
    let summary = boletim_core::store::save_batch(&mut store, &extraction.items, week)?;

    println!(
        "Saved {} item(s) under week '{}'.",
        extraction.items.len(),
        week.trim()
    );
    print!("{}", output::table::format_store_summary(&summary));

    Ok(())
}
