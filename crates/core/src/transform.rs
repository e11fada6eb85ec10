use crate::config::PrimerConfig;

/// Separator between primer A and primer B in transformer output.
pub const PRIMER_SEPARATOR: char = '-';

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    #[error("Sequence is {length} nt, too short to leave anything outside the {overlap} nt RT overlap")]
    SequenceTooShort { length: usize, overlap: usize },

    #[error("The {0} literal contains the primer separator '-'")]
    SeparatorInLiteral(&'static str),

    #[error("Transform failed: {0}")]
    Other(String),
}

/// Rewrites a validated sequence into primer-pair text.
///
/// Implementations return primer A and primer B joined by a single `-`.
pub trait SequenceTransformer {
    fn transform(&self, sequence: &str, prefix: &str, suffix: &str)
        -> Result<String, TransformError>;
}

impl<F> SequenceTransformer for F
where
    F: Fn(&str, &str, &str) -> Result<String, TransformError>,
{
    fn transform(
        &self,
        sequence: &str,
        prefix: &str,
        suffix: &str,
    ) -> Result<String, TransformError> {
        self(sequence, prefix, suffix)
    }
}

/// Stem-loop RT-qPCR primer design.
///
/// Primer A is the forward primer: `prefix` followed by the sequence without its
/// last `rt_overlap` bases. Primer B is the stem-loop RT primer: `suffix` followed
/// by the reverse complement of those last `rt_overlap` bases. Both are emitted as
/// uppercase DNA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemLoopTransformer {
    pub rt_overlap: usize,
}

impl StemLoopTransformer {
    pub fn new(rt_overlap: usize) -> Self {
        Self { rt_overlap }
    }

    pub fn from_config(config: &PrimerConfig) -> Self {
        Self::new(config.rt_overlap)
    }
}

impl SequenceTransformer for StemLoopTransformer {
    fn transform(
        &self,
        sequence: &str,
        prefix: &str,
        suffix: &str,
    ) -> Result<String, TransformError> {
        if prefix.contains(PRIMER_SEPARATOR) {
            return Err(TransformError::SeparatorInLiteral("prefix"));
        }
        if suffix.contains(PRIMER_SEPARATOR) {
            return Err(TransformError::SeparatorInLiteral("suffix"));
        }

        let dna = to_dna(sequence);
        if dna.len() <= self.rt_overlap {
            return Err(TransformError::SequenceTooShort {
                length: dna.len(),
                overlap: self.rt_overlap,
            });
        }

        let (body, tail) = dna.split_at(dna.len() - self.rt_overlap);

        Ok(format!(
            "{prefix}{body}{PRIMER_SEPARATOR}{suffix}{}",
            reverse_complement(tail)
        ))
    }
}

/// Uppercase a sequence and replace uracil with thymine.
pub fn to_dna(sequence: &str) -> String {
    sequence
        .chars()
        .map(|c| match c.to_ascii_uppercase() {
            'U' => 'T',
            other => other,
        })
        .collect()
}

/// Reverse complement of an uppercase DNA string.
///
/// Characters outside `ACGT` are kept as they are.
pub fn reverse_complement(dna: &str) -> String {
    dna.chars()
        .rev()
        .map(|c| match c {
            'A' => 'T',
            'T' => 'A',
            'G' => 'C',
            'C' => 'G',
            other => other,
        })
        .collect()
}
