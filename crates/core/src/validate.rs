use crate::config::PrimerConfig;

/// Decides whether a sequence line can be turned into primers.
///
/// Returns human-readable error descriptions in the order they were found.
/// An empty list means the sequence is valid.
pub trait SequenceValidator {
    fn validate(&self, sequence: &str) -> Vec<String>;
}

impl<F> SequenceValidator for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn validate(&self, sequence: &str) -> Vec<String> {
        self(sequence)
    }
}

/// Validator bundled with mirprimer.
///
/// Checks length bounds and that a sequence does not mix RNA (`U`) with DNA (`T`).
/// Alphabet purity is already guaranteed by classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthValidator {
    pub min_length: usize,
    pub max_length: usize,
}

impl LengthValidator {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }

    pub fn from_config(config: &PrimerConfig) -> Self {
        Self::new(config.min_length, config.max_length)
    }
}

impl SequenceValidator for LengthValidator {
    fn validate(&self, sequence: &str) -> Vec<String> {
        let mut errors = Vec::new();
        let length = sequence.chars().count();

        if length < self.min_length {
            errors.push(format!(
                "Sequence is {length} nt, shorter than the minimum of {} nt",
                self.min_length
            ));
        }

        if length > self.max_length {
            errors.push(format!(
                "Sequence is {length} nt, longer than the maximum of {} nt",
                self.max_length
            ));
        }

        let has_uracil = sequence.chars().any(|c| c.eq_ignore_ascii_case(&'U'));
        let has_thymine = sequence.chars().any(|c| c.eq_ignore_ascii_case(&'T'));
        if has_uracil && has_thymine {
            errors.push("Sequence mixes RNA (U) and DNA (T) bases".to_string());
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIR_21: &str = "UAGCUUAUCAGACUGAUGUUGA";

    #[test]
    fn test_valid_mirna_has_no_errors() {
        let validator = LengthValidator::new(16, 30);
        assert!(validator.validate(MIR_21).is_empty());
        assert!(validator.validate(&MIR_21.to_lowercase()).is_empty());
    }

    #[test]
    fn test_dna_alphabet_is_accepted() {
        let validator = LengthValidator::new(16, 30);
        assert!(validator.validate("TAGCTTATCAGACTGATGTTGA").is_empty());
    }

    #[test]
    fn test_too_short() {
        let validator = LengthValidator::new(16, 30);
        let errors = validator.validate("AUGC");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("shorter"));
        assert!(errors[0].contains("4 nt"));
    }

    #[test]
    fn test_too_long() {
        let validator = LengthValidator::new(4, 6);
        let errors = validator.validate("AUGCAUGC");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("longer"));
    }

    #[test]
    fn test_errors_are_reported_in_order() {
        let validator = LengthValidator::new(16, 30);
        let errors = validator.validate("AUGT");
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("shorter"));
        assert!(errors[1].contains("mixes"));
    }

    #[test]
    fn test_closure_is_a_validator() {
        let validator = |seq: &str| vec![format!("rejected {seq}")];
        assert_eq!(validator.validate("AUGC"), vec!["rejected AUGC".to_string()]);
    }
}
