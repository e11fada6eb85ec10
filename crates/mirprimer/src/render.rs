use colored::{ColoredString, Colorize};
use mirprimer_core::{Document, DocumentSummary, LineCategory, LineRecord};
use prettytable::row;

/// Color each base with a fixed mapping; other characters are left as they are.
pub fn color_nucleotides(sequence: &str) -> String {
    sequence
        .chars()
        .map(|c| {
            let base = c.to_string();
            match c.to_ascii_uppercase() {
                'G' => base.yellow().to_string(),
                'T' | 'U' => base.red().to_string(),
                'A' => base.green().to_string(),
                'C' => base.blue().to_string(),
                _ => base,
            }
        })
        .collect()
}

pub fn category_tag(category: LineCategory) -> ColoredString {
    let tag = category.display_tag();
    match category {
        LineCategory::Header => tag.cyan().bold(),
        LineCategory::Sequence => tag.bright_white().bold(),
        LineCategory::Comment => tag.bright_black(),
        LineCategory::Blank => tag.normal(),
        LineCategory::Unknown => tag.magenta(),
    }
}

fn text_cell(record: &LineRecord) -> String {
    match record.category {
        LineCategory::Header => record.text.bright_white().bold().to_string(),
        LineCategory::Sequence => color_nucleotides(&record.text),
        LineCategory::Comment => record.text.bright_black().italic().to_string(),
        LineCategory::Blank => String::new(),
        LineCategory::Unknown => record.text.magenta().to_string(),
    }
}

/// Render a document as a Tag / Name / Text table.
///
/// Transformed sequence lines become two primer rows. Rejected sequence lines
/// keep their raw text and get one error row per message.
pub fn document_table(document: &Document) -> prettytable::Table {
    let mut table = crate::prelude::new_table();

    for record in document {
        let tag = category_tag(record.category);

        if let Some(pair) = record.primer_pair() {
            table.add_row(row![
                tag,
                pair.name_a.green(),
                color_nucleotides(&pair.primer_a)
            ]);
            table.add_row(row![
                tag,
                pair.name_b.green(),
                color_nucleotides(&pair.primer_b)
            ]);
            continue;
        }

        let name = record.label.as_deref().unwrap_or_default();
        table.add_row(row![tag, name, text_cell(record)]);

        for error in &record.errors {
            table.add_row(row!["", "error".red().bold(), error.red()]);
        }
    }

    table
}

pub fn format_summary(summary: &DocumentSummary) -> String {
    format!(
        "{} {} | {} {} ({} {}, {} {}) | {} {} | {} {} | {} {}",
        summary.headers.to_string().bright_cyan().bold(),
        "headers".green(),
        summary.sequences.to_string().bright_cyan().bold(),
        "sequences".green(),
        summary.transformed.to_string().bright_green(),
        "designed".green(),
        summary.rejected.to_string().bright_red(),
        "rejected".green(),
        summary.comments.to_string().bright_cyan().bold(),
        "comments".green(),
        summary.blanks.to_string().bright_cyan().bold(),
        "blank".green(),
        summary.unknown.to_string().bright_cyan().bold(),
        "unknown".green(),
    )
}
