//! Text rendering of coefficient tables
//!
//! Two markups are supported: a booktabs `tabular` block for LaTeX documents
//! and a plain aligned table for terminals. Both format every value with a
//! fixed number of decimals.

use crate::config::{OutputFormat, ReportConfig};
use crate::types::{CoefficientReport, CoefficientTable};

/// Width of the `=` separator lines around banners
pub const BANNER_WIDTH: usize = 80;

const STANDARDIZED_BANNER: (&str, &str) = (
    "Standardized Coefficients (for 1-std-dev change)",
    "Use this to compare relative feature importance.",
);

const UNSCALED_BANNER: (&str, &str) = (
    "Unscaled Coefficients (for 1-unit change)",
    "Use this for interpretation on the original feature scale.",
);

/// Escape LaTeX special characters
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash "),
            '~' => out.push_str("\\textasciitilde "),
            '^' => out.push_str("\\textasciicircum "),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

fn format_value(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

/// Render a table as a booktabs `tabular` environment
///
/// Requires `\usepackage{booktabs}` in the including document.
pub fn render_latex(table: &CoefficientTable, precision: usize, escape: bool) -> String {
    let label = |s: &str| if escape { escape_latex(s) } else { s.to_string() };

    let mut out = String::new();
    out.push_str(&format!(
        "\\begin{{tabular}}{{l{}}}\n",
        "r".repeat(table.ncols())
    ));
    out.push_str("\\toprule\n");

    let header: Vec<String> = table.column_labels.iter().map(|c| label(c.as_str())).collect();
    out.push_str(&format!(" & {} \\\\\n", header.join(" & ")));
    out.push_str("\\midrule\n");

    for (row_label, row) in table.row_labels.iter().zip(table.values.rows()) {
        let cells: Vec<String> = row.iter().map(|v| format_value(*v, precision)).collect();
        out.push_str(&format!("{} & {} \\\\\n", label(row_label.as_str()), cells.join(" & ")));
    }

    out.push_str("\\bottomrule\n");
    out.push_str("\\end{tabular}\n");
    out
}

/// Render a table as right-aligned plain text columns
pub fn render_txt(table: &CoefficientTable, precision: usize) -> String {
    let cells: Vec<Vec<String>> = table
        .values
        .rows()
        .into_iter()
        .map(|row| row.iter().map(|v| format_value(*v, precision)).collect())
        .collect();

    let label_width = table.row_labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let col_widths: Vec<usize> = table
        .column_labels
        .iter()
        .enumerate()
        .map(|(j, header)| {
            cells
                .iter()
                .map(|row| row[j].len())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let mut line = format!("{:<width$}", "", width = label_width);
    for (header, width) in table.column_labels.iter().zip(&col_widths) {
        line.push_str(&format!("  {:>width$}", header, width = *width));
    }
    out.push_str(line.trim_end());
    out.push('\n');

    for (row_label, row) in table.row_labels.iter().zip(&cells) {
        let mut line = format!("{:<width$}", row_label, width = label_width);
        for (cell, width) in row.iter().zip(&col_widths) {
            line.push_str(&format!("  {:>width$}", cell, width = *width));
        }
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Render one table in the configured markup
pub fn render_table(table: &CoefficientTable, config: &ReportConfig) -> String {
    match config.format {
        OutputFormat::Latex => render_latex(table, config.precision, config.escape),
        OutputFormat::Txt => render_txt(table, config.precision),
    }
}

fn push_banner(out: &mut String, format: OutputFormat, index: usize, (title, hint): (&str, &str)) {
    let rule = "=".repeat(BANNER_WIDTH);
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "--- {} Table {}: {} ---\n",
        format.banner_name(),
        index,
        title
    ));
    out.push_str(&format!("--- {} ---\n", hint));
    out.push_str(&rule);
    out.push('\n');
}

/// Render both tables with their banners
///
/// Layout: a blank line, the standardized table's banner and table, three
/// blank lines, then the unscaled table's banner and table.
pub fn render_report(report: &CoefficientReport, config: &ReportConfig) -> String {
    let mut out = String::from("\n");

    push_banner(&mut out, config.format, 1, STANDARDIZED_BANNER);
    out.push_str(&render_table(&report.standardized, config));
    out.push_str("\n\n\n");

    push_banner(&mut out, config.format, 2, UNSCALED_BANNER);
    out.push_str(&render_table(&report.unscaled, config));
    out
}
