//! Core library for mirprimer
//!
//! This crate implements the **Functional Core** of the mirprimer application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The mirprimer project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`mirprimer_core`** (this crate): Pure transformation functions with zero I/O
//! - **`mirprimer`**: File and stdin reading, config loading and rendering (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Building the same input twice yields equal documents
//! - **Testable**: Collaborators are plain closures in tests, no biological rules required
//!
//! # Module Organization
//!
//! - [`line`]: Line classification into [`LineCategory`]
//! - [`document`]: The [`DocumentBuilder`] pipeline and the [`Document`] it produces
//! - [`validate`]: The [`SequenceValidator`] capability and the bundled [`LengthValidator`]
//! - [`transform`]: The [`SequenceTransformer`] capability and the bundled [`StemLoopTransformer`]
//! - [`primer`]: Splitting transformed lines into named primer rows
//! - [`config`]: [`PrimerConfig`], the only knobs the pipeline reads
//!
//! # Example Usage
//!
//! ```rust
//! use mirprimer_core::{BuildError, DocumentBuilder, LineCategory, TransformError};
//!
//! # fn main() -> Result<(), BuildError> {
//! let builder = DocumentBuilder::new(
//!     |_: &str| -> Vec<String> { Vec::new() },
//!     |seq: &str, prefix: &str, suffix: &str| -> Result<String, TransformError> {
//!         Ok(format!("{prefix}{seq}-{suffix}"))
//!     },
//! );
//!
//! let document = builder.build(">mir1 desc\nAUGC", "GG", "CC")?;
//! assert_eq!(document.records()[1].category, LineCategory::Sequence);
//! assert_eq!(document.records()[1].label.as_deref(), Some("_mir1"));
//! assert_eq!(document.records()[1].text, "GGAUGC-CC");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod document;
pub mod line;
pub mod primer;
pub mod transform;
pub mod validate;

pub use config::{ConfigError, PrimerConfig};
pub use document::{BuildError, Document, DocumentBuilder, DocumentSummary, LineRecord};
pub use line::{classify, LineCategory};
pub use primer::PrimerPair;
pub use transform::{SequenceTransformer, StemLoopTransformer, TransformError};
pub use validate::{LengthValidator, SequenceValidator};
