use boletim_core::extraction::pdftotext::PdftotextExtractor;
use std::path::PathBuf;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), boletim_core::error::BoletimError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let filename = pdf_file
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string);

    let extractor = PdftotextExtractor::new();
    let extraction = boletim_core::extract_pdf(&pdf_bytes, &extractor, filename.as_deref())?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&extraction)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} item(s), written to {}",
                extraction.items.len(),
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(&extraction)?,
            _ => print!("{}", output::table::format_extraction(&extraction)),
        },
    }

    for row in &extraction.skipped {
        eprintln!(
            "  warning: skipped row in solicitation {}: {}",
            row.solicitation_number, row.reason
        );
    }

    Ok(())
}
