use boletim_core::store::sqlite::SqliteStore;
use boletim_core::store::ItemStore;
use std::path::PathBuf;

use crate::output;

pub fn run(db: PathBuf) -> Result<(), boletim_core::error::BoletimError> {
    let store = SqliteStore::open(&db)?;
    let summary = store.aggregate_summary()?;
    print!("{}", output::table::format_store_summary(&summary));
    Ok(())
}
