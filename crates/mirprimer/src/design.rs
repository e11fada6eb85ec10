use crate::input::{read_source, sources, Source};
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use futures::future::join_all;
use mirprimer_core::{Document, DocumentBuilder, DocumentSummary, PrimerConfig};
use serde::Serialize;
use std::io::IsTerminal;
use std::sync::Arc;

#[derive(Debug, clap::Args, Clone)]
pub struct DesignOptions {
    /// FASTA-style miRNA records to read; `-` or nothing reads stdin
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// One submission's result, as printed by `--json`.
#[derive(Debug, Serialize)]
pub struct DesignOutput {
    pub source: String,
    pub records: Document,
    pub summary: DocumentSummary,
}

pub async fn run(options: DesignOptions, global: crate::Global) -> Result<()> {
    let config = crate::config::load_config(&global).await?;

    if global.verbose {
        eprintln!("Prefix: {}", config.prefix);
        eprintln!("Suffix: {}", config.suffix);
        eprintln!(
            "Length bounds: {}..={} nt, RT overlap: {} nt",
            config.min_length, config.max_length, config.rt_overlap
        );
    }

    let results = design_data(sources(&options.files), config).await;
    let total = results.len();

    let mut outputs = Vec::with_capacity(total);
    let mut failed = 0;
    for result in results {
        match result {
            Ok(output) => outputs.push(output),
            Err(err) => {
                failed += 1;
                eprintln!("{} {}", "error:".red().bold(), err);
            }
        }
    }

    if !outputs.is_empty() {
        if options.json {
            output_json(&outputs)?;
        } else {
            output_formatted(&outputs);
        }
    }

    if failed > 0 {
        return Err(eyre!("{} of {} inputs failed", failed, total));
    }

    Ok(())
}

/// Build one document per source.
///
/// Every source is an independent submission, so they are read and built
/// concurrently and a failure only affects its own entry. Results come back in
/// the order the sources were given.
pub async fn design_data(
    sources: Vec<Source>,
    config: PrimerConfig,
) -> Vec<Result<DesignOutput>> {
    let builder = Arc::new(DocumentBuilder::from_config(&config));
    let config = Arc::new(config);

    let submissions = sources.into_iter().map(|source| {
        let builder = Arc::clone(&builder);
        let config = Arc::clone(&config);

        async move {
            let text = read_source(&source, config.max_input_bytes).await?;

            let document = tokio::task::spawn_blocking(move || {
                builder.build(&text, &config.prefix, &config.suffix)
            })
            .await
            .wrap_err_with(|| format!("{}: build task failed", source.name()))?
            .map_err(|e| eyre!("{}: {}", source.name(), e))?;

            log::debug!("{}: {} records", source.name(), document.len());

            Ok::<_, color_eyre::eyre::Report>(DesignOutput {
                source: source.name(),
                summary: document.summary(),
                records: document,
            })
        }
    });

    join_all(submissions).await
}

fn output_json(outputs: &[DesignOutput]) -> Result<()> {
    let json = match outputs {
        [single] => serde_json::to_string_pretty(single),
        many => serde_json::to_string_pretty(many),
    }
    .map_err(|e| eyre!("JSON serialization failed: {}", e))?;

    println!("{}", json);
    Ok(())
}

fn output_formatted(outputs: &[DesignOutput]) {
    // Decorations go to stderr and only when attached to a terminal.
    let is_tty = std::io::stdout().is_terminal();

    for output in outputs {
        if is_tty {
            eprintln!("\n{}", "=".repeat(80).bright_cyan());
            eprintln!("{}", output.source.bright_cyan().bold());
            eprintln!("{}", "=".repeat(80).bright_cyan());
        }

        println!("{}", crate::render::document_table(&output.records));

        if is_tty {
            eprintln!("{}\n", crate::render::format_summary(&output.summary));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirprimer_core::LineCategory;
    use std::io::Write;

    fn succeeded(results: Vec<Result<DesignOutput>>) -> Vec<DesignOutput> {
        results.into_iter().map(|r| r.unwrap()).collect()
    }

    fn fasta_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[tokio::test]
    async fn test_design_keeps_source_order() {
        let first = fasta_file(">hsa-miR-21-5p MIMAT0000076\nUAGCUUAUCAGACUGAUGUUGA\n");
        let second = fasta_file(">short\nAUGC");

        let sources = vec![
            Source::File(first.path().to_path_buf()),
            Source::File(second.path().to_path_buf()),
        ];
        let outputs = succeeded(design_data(sources, PrimerConfig::default()).await);

        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[0].source, first.path().display().to_string());
        assert_eq!(outputs[1].source, second.path().display().to_string());

        assert_eq!(outputs[0].records.len(), 3);
        assert_eq!(outputs[0].summary.transformed, 1);
        let pair = outputs[0].records.records()[1].primer_pair().unwrap();
        assert_eq!(pair.name_a, "primerA_hsa-miR-21-5p");
        assert_eq!(pair.primer_a, "GCGGCGTAGCTTATCAGACTGA");

        assert_eq!(outputs[1].summary.rejected, 1);
        assert_eq!(outputs[1].records.records()[1].text, "AUGC");
    }

    #[tokio::test]
    async fn test_design_uses_configured_literals() {
        let file = fasta_file("UAGCUUAUCAGACUGAUGUUGA");
        let config = PrimerConfig::default()
            .with_overrides(Some("AAAA".to_string()), Some("CCCC".to_string()));

        let sources = vec![Source::File(file.path().to_path_buf())];
        let outputs = succeeded(design_data(sources, config).await);
        let record = &outputs[0].records.records()[0];

        assert_eq!(record.category, LineCategory::Sequence);
        assert_eq!(record.label.as_deref(), Some(""));
        assert_eq!(record.text, "AAAATAGCTTATCAGACTGA-CCCCTCAACA");
    }

    #[tokio::test]
    async fn test_design_rejects_oversized_input() {
        let file = fasta_file(">mir1\nAUGCAUGCAUGCAUGCAUGC\n");
        let config = PrimerConfig {
            max_input_bytes: 8,
            ..PrimerConfig::default()
        };

        let sources = vec![Source::File(file.path().to_path_buf())];
        let mut results = design_data(sources, config).await;
        let err = results.remove(0).unwrap_err();
        assert!(err.to_string().contains("above the limit of 8 bytes"));
    }

    #[tokio::test]
    async fn test_failed_input_keeps_other_results() {
        let good = fasta_file(">mir1\nUAGCUUAUCAGACUGAUGUUGA\n");
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("missing.fa");
        let also_good = fasta_file(";only a comment");

        let sources = vec![
            Source::File(good.path().to_path_buf()),
            Source::File(missing.clone()),
            Source::File(also_good.path().to_path_buf()),
        ];
        let results = design_data(sources, PrimerConfig::default()).await;

        assert_eq!(results.len(), 3);

        let first = results[0].as_ref().unwrap();
        assert_eq!(first.source, good.path().display().to_string());
        assert_eq!(first.summary.transformed, 1);

        let err = results[1].as_ref().unwrap_err();
        assert!(err.to_string().contains(&missing.display().to_string()));

        let third = results[2].as_ref().unwrap();
        assert_eq!(third.summary.comments, 1);
    }

    #[tokio::test]
    async fn test_json_shape() {
        let file = fasta_file(">mir1 desc\nAUGCAUGC\n;note\n\n???");
        let sources = vec![Source::File(file.path().to_path_buf())];
        let outputs = succeeded(design_data(sources, PrimerConfig::default()).await);

        let json = serde_json::to_value(&outputs[0]).unwrap();
        let records = json["records"].as_array().unwrap();

        assert_eq!(records.len(), 5);
        assert_eq!(records[0]["category"], "header");
        assert_eq!(records[1]["category"], "sequence");
        assert_eq!(records[1]["label"], "_mir1");
        assert_eq!(records[1]["text"], "AUGCAUGC");
        assert_eq!(records[2]["label"], serde_json::Value::Null);
        assert_eq!(records[3]["category"], "blank");
        assert_eq!(records[4]["category"], "unknown");
        assert_eq!(json["summary"]["rejected"], 1);
    }
}
