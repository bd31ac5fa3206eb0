use std::path::Path;

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::models::ClassificationVerdict;
use crate::report::Summary;

/// Render a colored terminal report.
pub fn render(verdicts: &[ClassificationVerdict], summary: &Summary, path: &Path, quiet: bool) {
    if quiet {
        println!("{}", summary_line(summary));
        return;
    }

    println!(
        "\n {} v{}",
        "nc-license-checkr".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Scanning: {}\n", path.display());

    if verdicts.is_empty() {
        println!(" {} No non-commercial licenses found.\n", "✓".green());
    } else {
        println!(
            " {} Packages with non-commercial licenses:\n",
            "[NC]".red().bold()
        );
        println!("{}\n", table(verdicts));
        for verdict in verdicts {
            println!(" {} {}", "✗".red(), verdict);
        }
        println!();
    }

    println!(" {}", summary_line(summary));
}

fn table(verdicts: &[ClassificationVerdict]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Version").add_attribute(Attribute::Bold),
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Reason").add_attribute(Attribute::Bold),
        ]);

    for verdict in verdicts {
        table.add_row(vec![
            Cell::new(&verdict.name),
            Cell::new(&verdict.version),
            Cell::new(&verdict.license).fg(Color::Red),
            Cell::new(&verdict.reason),
        ]);
    }

    table
}

fn summary_line(summary: &Summary) -> String {
    let flagged = if summary.flagged > 0 {
        summary.flagged.to_string().red()
    } else {
        summary.flagged.to_string().green()
    };
    format!(
        "Scanned: {}  Flagged: {}  Ignored: {}  Skipped: {}",
        summary.scanned,
        flagged,
        summary.ignored,
        summary.skipped.to_string().yellow(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_row_per_verdict() {
        let verdicts = vec![
            ClassificationVerdict {
                name: "a".to_string(),
                version: "1.0.0".to_string(),
                license: "CC-BY-NC-4.0".to_string(),
                reason: "license field contains NC keyword (filter: keyword)".to_string(),
            },
            ClassificationVerdict {
                name: "a".to_string(),
                version: "1.0.0".to_string(),
                license: "CC-BY-NC-4.0".to_string(),
                reason: "SPDX identifier is known to be non-commercial (filter: spdx)".to_string(),
            },
        ];
        let rendered = table(&verdicts);
        assert_eq!(rendered.row_iter().count(), 2);
    }

    #[test]
    fn test_summary_line_plain() {
        colored::control::set_override(false);
        let line = summary_line(&Summary {
            scanned: 3,
            skipped: 0,
            ignored: 1,
            flagged: 1,
        });
        assert_eq!(line, "Scanned: 3  Flagged: 1  Ignored: 1  Skipped: 0");
    }
}
