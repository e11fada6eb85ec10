use serde::Serialize;

use crate::document::LineRecord;
use crate::line::LineCategory;
use crate::transform::PRIMER_SEPARATOR;

/// The two named primers derived from one transformed sequence line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimerPair {
    pub name_a: String,
    pub primer_a: String,
    pub name_b: String,
    pub primer_b: String,
}

impl LineRecord {
    /// Split a transformed sequence line into its primer rows.
    ///
    /// Returns `None` for non-sequence lines, lines with errors, and text that
    /// does not hold exactly one separator.
    pub fn primer_pair(&self) -> Option<PrimerPair> {
        if self.category != LineCategory::Sequence || !self.errors.is_empty() {
            return None;
        }

        let (primer_a, primer_b) = self.text.split_once(PRIMER_SEPARATOR)?;
        if primer_b.contains(PRIMER_SEPARATOR) {
            return None;
        }

        let label = self.label.as_deref().unwrap_or_default();

        Some(PrimerPair {
            name_a: format!("primerA{label}"),
            primer_a: primer_a.to_string(),
            name_b: format!("primerB{label}"),
            primer_b: primer_b.to_string(),
        })
    }
}
