//! Terminal output formatting.

use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use pitchlens_core::report::{CompareRow, Report, NO_RISKS, NO_SWOT};
use serde::Serialize;
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// Column headers of the comparison table, in display order.
const COMPARE_HEADERS: [&str; 8] = [
    "Company",
    "Team",
    "Market",
    "Product/Traction",
    "Funding",
    "Team Size",
    "Location",
    "Industry",
];

/// Team, Market and Product/Traction hold excerpts and keep their full width.
const EXCERPT_COLUMNS: [usize; 3] = [1, 2, 3];

/// Narrowest a short column may shrink to in the table layout.
const MIN_COLUMN_WIDTH: usize = 6;

/// Start a spinner on stderr. Call `finish_and_clear` when the request ends.
pub fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.enable_steady_tick(Duration::from_millis(100));
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.to_string());
    bar
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the detail view of a single pitch.
pub fn print_report(report: &Report) {
    println!(
        "{} {}",
        report.company_name.cyan().bold(),
        format!("({})", report.pitch_id).dimmed()
    );
    println!();

    println!("{}", "Sections".bold());
    print_block("Team", &report.team);
    print_block("Market", &report.market);
    print_block("Product/Traction", &report.product_traction);
    println!();

    println!("{}", "Enriched Data".bold());
    print_field("Funding Raised", &report.funding_raised);
    print_field("Team Size", &report.team_size);
    print_field("Location", &report.location);
    print_field("Industry", &report.industry);
    print_field("Uploaded", &report.uploaded);
    println!();

    println!("{}", "AI Analysis".bold());
    print_block("Summary", &report.summary);

    println!("  {}", "SWOT Analysis".yellow());
    match &report.swot {
        Some(swot) => {
            println!("    {} {}", "Strengths:".green(), swot.strengths);
            println!("    {} {}", "Weaknesses:".red(), swot.weaknesses);
            println!("    {} {}", "Opportunities:".cyan(), swot.opportunities);
            println!("    {} {}", "Threats:".magenta(), swot.threats);
        }
        None => println!("    {}", NO_SWOT.dimmed()),
    }

    println!("  {}", "Risks".yellow());
    if report.risks.is_empty() {
        println!("    {}", NO_RISKS.dimmed());
    } else {
        for risk in &report.risks {
            println!("    • {}", risk);
        }
    }
}

fn print_block(label: &str, text: &str) {
    println!("  {}", label.yellow());
    println!("    {}", text);
}

fn print_field(label: &str, value: &str) {
    println!("  {}: {}", label.bold(), value);
}

/// Print comparison rows, as a table when the terminal is wide enough.
pub fn print_compare_table(rows: &[CompareRow]) {
    if rows.is_empty() {
        println!("{}", "No pitches found.".dimmed());
        return;
    }

    match column_widths(rows, term_width()) {
        Some(widths) => print_compare_wide(rows, &widths),
        None => print_compare_compact(rows),
    }
}

fn row_cells(row: &CompareRow) -> [&str; 8] {
    [
        &row.company,
        &row.team,
        &row.market,
        &row.product_traction,
        &row.funding,
        &row.team_size,
        &row.location,
        &row.industry,
    ]
}

fn print_compare_wide(rows: &[CompareRow], widths: &[usize]) {
    let header: Vec<String> = COMPARE_HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| pad_right(&truncate_visual(h, *w), *w))
        .collect();
    println!("{}", header.join(" │ ").bold());

    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    println!("{}", rule.join("─┼─").dimmed());

    for row in rows {
        let cells = wide_cells(row, widths);
        let (company, rest) = cells.split_at(1);
        println!("{} │ {}", company[0].cyan(), rest.join(" │ "));
    }
}

/// Padded cells of one table row. Excerpt columns are never cut further.
fn wide_cells(row: &CompareRow, widths: &[usize]) -> Vec<String> {
    row_cells(row)
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, w))| {
            if EXCERPT_COLUMNS.contains(&i) {
                pad_right(cell, *w)
            } else {
                pad_right(&truncate_visual(cell, *w), *w)
            }
        })
        .collect()
}

fn print_compare_compact(rows: &[CompareRow]) {
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{} {}",
            row.company.cyan().bold(),
            format!("({})", row.pitch_id).dimmed()
        );
        for (label, value) in COMPARE_HEADERS.iter().zip(row_cells(row)).skip(1) {
            println!("  {} {}", pad_right(&format!("{label}:"), 18).bold(), value);
        }
    }
}

/// Fit the eight columns into `total` cells.
///
/// Only the short columns shrink, widest first and never below
/// `MIN_COLUMN_WIDTH`. Returns `None` when the excerpts do not fit at
/// full width, in which case the compact layout is used.
fn column_widths(rows: &[CompareRow], total: usize) -> Option<Vec<usize>> {
    let mut widths: Vec<usize> = COMPARE_HEADERS
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row_cells(row)) {
            *w = (*w).max(UnicodeWidthStr::width(cell));
        }
    }

    let separators = 3 * (COMPARE_HEADERS.len() - 1);
    let budget = total.saturating_sub(separators);
    while widths.iter().sum::<usize>() > budget {
        let widest = widths
            .iter_mut()
            .enumerate()
            .filter(|(i, w)| !EXCERPT_COLUMNS.contains(i) && **w > MIN_COLUMN_WIDTH)
            .map(|(_, w)| w)
            .max()?;
        *widest -= 1;
    }
    Some(widths)
}

fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string respecting visual width.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}
