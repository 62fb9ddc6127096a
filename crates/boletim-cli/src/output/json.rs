use boletim_core::error::BoletimError;
use boletim_core::model::Extraction;

pub fn print(extraction: &Extraction) -> Result<(), BoletimError> {
    let json = serde_json::to_string_pretty(extraction)?;
    println!("{json}");
    Ok(())
}
