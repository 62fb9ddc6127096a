use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Identifier used when a document carries no solicitation marker at all.
/// Deliberately non-numeric so it never enters the numeric range summary.
pub const UNKNOWN_SOLICITATION: &str = "sem-numero";

/// Marker patterns tried over the whole document. Accent variants cover
/// bulletins whose text layer lost the cedilla or tilde.
static MARKER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)N[ºo°]?\s*Solicita[çc][ãa]o\s*:?\s*([\d.]+)").unwrap(),
        Regex::new(r"(?i)Solicita[çc][ãa]o\s+([\d.]+)").unwrap(),
    ]
});

/// The slice of a document belonging to one solicitation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub solicitation_number: String,
    pub text: String,
}

/// Split raw bulletin text into per-solicitation sections.
///
/// Each distinct solicitation number creates one boundary at its first
/// marker position; a number reported again later does not restart a
/// section. Sections run from marker to next marker, the last one to end
/// of text, and are emitted in text-appearance order (not numeric order).
/// With no markers at all the whole text becomes a single section under
/// [`UNKNOWN_SOLICITATION`] so extraction can still attempt a scan.
pub fn segment(text: &str) -> Vec<Section> {
    let mut markers: Vec<(usize, String)> = Vec::new();
    for pattern in MARKER_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            let number = normalize_number(&caps[1]);
            if number.is_empty() {
                continue;
            }
            let pos = caps.get(0).map(|m| m.start()).unwrap_or(0);
            markers.push((pos, number));
        }
    }
    markers.sort_by_key(|(pos, _)| *pos);

    let mut seen = HashSet::new();
    markers.retain(|(_, number)| seen.insert(number.clone()));

    if markers.is_empty() {
        return vec![Section {
            solicitation_number: UNKNOWN_SOLICITATION.to_string(),
            text: text.to_string(),
        }];
    }

    markers
        .iter()
        .enumerate()
        .map(|(i, (pos, number))| {
            let end = markers.get(i + 1).map(|(p, _)| *p).unwrap_or(text.len());
            Section {
                solicitation_number: number.clone(),
                text: text[*pos..end].to_string(),
            }
        })
        .collect()
}

/// Strip formatting punctuation: "286.344" -> "286344".
fn normalize_number(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}
