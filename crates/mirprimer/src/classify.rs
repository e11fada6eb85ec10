use crate::input::{read_source, Source};
use crate::prelude::{eprintln, println, *};
use mirprimer_core::config::DEFAULT_MAX_INPUT_BYTES;
use mirprimer_core::{classify, LineCategory};
use serde::Serialize;

#[derive(Debug, clap::Args, Clone)]
pub struct ClassifyOptions {
    /// Lines to classify; reads stdin when none are given
    #[arg(value_name = "LINE")]
    pub lines: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedLine {
    pub category: LineCategory,
    pub line: String,
}

pub async fn run(options: ClassifyOptions, global: crate::Global) -> Result<()> {
    let lines = if options.lines.is_empty() {
        if global.verbose {
            eprintln!("Reading lines from stdin...");
        }
        let text = read_source(&Source::Stdin, DEFAULT_MAX_INPUT_BYTES).await?;
        text.split('\n').map(str::to_string).collect()
    } else {
        options.lines
    };

    let classified = classify_lines(&lines);

    if options.json {
        let json = serde_json::to_string_pretty(&classified)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
    } else {
        let mut table = new_table();
        for entry in &classified {
            table.add_row(prettytable::row![
                crate::render::category_tag(entry.category),
                format!("{:?}", entry.line)
            ]);
        }
        println!("{}", table);
    }

    Ok(())
}

pub fn classify_lines(lines: &[String]) -> Vec<ClassifiedLine> {
    lines
        .iter()
        .map(|line| ClassifiedLine {
            category: classify(line),
            line: line.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_lines_keeps_order() {
        let lines: Vec<String> = [">mir1", "AUGC", ";note", "", "  "]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let categories: Vec<LineCategory> = classify_lines(&lines)
            .into_iter()
            .map(|entry| entry.category)
            .collect();

        assert_eq!(
            categories,
            vec![
                LineCategory::Header,
                LineCategory::Sequence,
                LineCategory::Comment,
                LineCategory::Blank,
                LineCategory::Unknown,
            ]
        );
    }

    #[test]
    fn test_classified_line_json() {
        let lines = vec!["augc".to_string()];
        let json = serde_json::to_value(classify_lines(&lines)).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "category": "sequence", "line": "augc" }])
        );
    }
}
