use serde::Serialize;

use crate::config::{PrimerConfig, DEFAULT_MAX_INPUT_BYTES};
use crate::line::{classify, LineCategory};
use crate::transform::{SequenceTransformer, StemLoopTransformer};
use crate::validate::{LengthValidator, SequenceValidator};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("Input is {size} bytes, above the limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },
}

/// One annotated input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineRecord {
    pub category: LineCategory,
    /// Only set on sequence lines: `""` or `"_" + header token`.
    pub label: Option<String>,
    pub text: String,
    pub errors: Vec<String>,
}

impl LineRecord {
    /// A record for any non-sequence line.
    fn plain(category: LineCategory, line: &str) -> Self {
        Self {
            category,
            label: None,
            text: line.to_string(),
            errors: Vec::new(),
        }
    }

    /// True for sequence lines whose text was replaced by primer text.
    pub fn is_transformed(&self) -> bool {
        self.category == LineCategory::Sequence && self.errors.is_empty()
    }
}

/// Per-category counts of a built document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    pub headers: usize,
    pub sequences: usize,
    pub comments: usize,
    pub blanks: usize,
    pub unknown: usize,
    pub transformed: usize,
    pub rejected: usize,
}

/// The ordered records of one submission, index-aligned with the input lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    records: Vec<LineRecord>,
}

impl Document {
    pub fn records(&self) -> &[LineRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineRecord> {
        self.records.iter()
    }

    pub fn summary(&self) -> DocumentSummary {
        let mut summary = DocumentSummary::default();

        for record in &self.records {
            match record.category {
                LineCategory::Header => summary.headers += 1,
                LineCategory::Sequence => {
                    summary.sequences += 1;
                    if record.is_transformed() {
                        summary.transformed += 1;
                    } else {
                        summary.rejected += 1;
                    }
                }
                LineCategory::Comment => summary.comments += 1,
                LineCategory::Blank => summary.blanks += 1,
                LineCategory::Unknown => summary.unknown += 1,
            }
        }

        summary
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a LineRecord;
    type IntoIter = std::slice::Iter<'a, LineRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Derive the label of a sequence line from the record right before it.
///
/// Only a header immediately above counts. Its raw text loses the leading `>`
/// and is cut at the first whitespace character.
pub fn derive_label(previous: Option<&LineRecord>) -> String {
    match previous {
        Some(record) if record.category == LineCategory::Header => {
            let name = record.text.strip_prefix('>').unwrap_or(&record.text);
            let token = name
                .split_once(char::is_whitespace)
                .map_or(name, |(token, _)| token);
            format!("_{token}")
        }
        _ => String::new(),
    }
}

/// Builds a [`Document`] from raw text.
///
/// The validator and transformer are injected at construction time. The builder
/// holds no state between calls, so one instance can serve any number of
/// independent submissions, from several threads when the collaborators allow it.
#[derive(Debug, Clone)]
pub struct DocumentBuilder<V, T> {
    validator: V,
    transformer: T,
    max_input_bytes: usize,
}

impl DocumentBuilder<LengthValidator, StemLoopTransformer> {
    /// Builder wired with the bundled strategies.
    pub fn from_config(config: &PrimerConfig) -> Self {
        DocumentBuilder::new(
            LengthValidator::from_config(config),
            StemLoopTransformer::from_config(config),
        )
        .with_max_input_bytes(config.max_input_bytes)
    }
}

impl<V, T> DocumentBuilder<V, T>
where
    V: SequenceValidator,
    T: SequenceTransformer,
{
    pub fn new(validator: V, transformer: T) -> Self {
        Self {
            validator,
            transformer,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }

    pub fn with_max_input_bytes(mut self, max_input_bytes: usize) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }

    /// Classify, validate and transform every line of `raw_input`.
    ///
    /// Lines are split on `\n` only, so a trailing newline yields a final blank
    /// record. Line-level failures end up in [`LineRecord::errors`]; the only
    /// error returned here is an input above the size limit.
    pub fn build(
        &self,
        raw_input: &str,
        prefix: &str,
        suffix: &str,
    ) -> Result<Document, BuildError> {
        if raw_input.len() > self.max_input_bytes {
            return Err(BuildError::InputTooLarge {
                size: raw_input.len(),
                limit: self.max_input_bytes,
            });
        }

        let mut records: Vec<LineRecord> = Vec::new();

        for (index, line) in raw_input.split('\n').enumerate() {
            let category = classify(line);

            let record = if category == LineCategory::Sequence {
                let label = derive_label(records.last());
                self.sequence_record(index, line, label, prefix, suffix)
            } else {
                LineRecord::plain(category, line)
            };

            records.push(record);
        }

        log::debug!("Built document with {} records", records.len());

        Ok(Document { records })
    }

    fn sequence_record(
        &self,
        index: usize,
        line: &str,
        label: String,
        prefix: &str,
        suffix: &str,
    ) -> LineRecord {
        let mut errors = self.validator.validate(line);

        let text = if errors.is_empty() {
            match self.transformer.transform(line, prefix, suffix) {
                Ok(primers) => primers,
                Err(err) => {
                    errors.push(err.to_string());
                    line.to_string()
                }
            }
        } else {
            line.to_string()
        };

        if !errors.is_empty() {
            log::trace!("Line {} rejected: {}", index + 1, errors.join("; "));
        }

        LineRecord {
            category: LineCategory::Sequence,
            label: Some(label),
            text,
            errors,
        }
    }
}
