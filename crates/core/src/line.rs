use serde::{Deserialize, Serialize};

/// Structural category of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCategory {
    Header,
    Sequence,
    Comment,
    Blank,
    Unknown,
}

impl LineCategory {
    /// Every category, in classification precedence order.
    pub const ALL: [LineCategory; 5] = [
        LineCategory::Header,
        LineCategory::Sequence,
        LineCategory::Comment,
        LineCategory::Blank,
        LineCategory::Unknown,
    ];

    /// Display tag handed to the presentation layer.
    ///
    /// The core never interprets this value.
    pub fn display_tag(&self) -> &'static str {
        match self {
            LineCategory::Header => "header",
            LineCategory::Sequence => "sequence",
            LineCategory::Comment => "comment",
            LineCategory::Blank => "blank",
            LineCategory::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for LineCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_tag())
    }
}

/// Returns true for the mixed RNA/DNA alphabet, in either case.
pub fn is_nucleotide(c: char) -> bool {
    matches!(c.to_ascii_uppercase(), 'A' | 'U' | 'T' | 'G' | 'C')
}

/// Classify a raw line.
///
/// Rules are checked in order and the first match wins:
///
/// 1. `>` in leading position is a header
/// 2. one or more nucleotide characters is a sequence
/// 3. `;` in leading position is a comment
/// 4. the empty string is blank
/// 5. everything else is unknown, including whitespace-only lines
pub fn classify(line: &str) -> LineCategory {
    if line.starts_with('>') {
        LineCategory::Header
    } else if !line.is_empty() && line.chars().all(is_nucleotide) {
        LineCategory::Sequence
    } else if line.starts_with(';') {
        LineCategory::Comment
    } else if line.is_empty() {
        LineCategory::Blank
    } else {
        LineCategory::Unknown
    }
}
