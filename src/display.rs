//! Terminal rendering for ranges, MDF tables, and quiz feedback.

use std::collections::HashSet;

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Table};

use crate::cards::{Combo, HandType, ALL_RANKS};
use crate::mdf::MdfResult;

/// 13x13 hand grid: pockets on the diagonal, suited above, offsuit below.
/// Cells inside the combo set are highlighted.
pub fn render_range_grid(combos: &[Combo]) -> String {
    let in_range: HashSet<HandType> = combos.iter().map(|&c| HandType::of(c)).collect();

    let mut out = String::new();
    for &row_rank in ALL_RANKS.iter().rev() {
        for &col_rank in ALL_RANKS.iter().rev() {
            let hi = row_rank.value().max(col_rank.value());
            let lo = row_rank.value().min(col_rank.value());
            // Above the diagonal = suited, below = offsuit.
            let suited = col_rank.value() > row_rank.value();
            let hand = HandType::new(hi, lo, suited);

            let label = format!("{:>4}", hand.label());
            if in_range.contains(&hand) {
                out.push_str(&label.green().bold().to_string());
            } else {
                out.push_str(&label.dimmed().to_string());
            }
        }
        out.push('\n');
    }
    out
}

/// Combo count plus percentage of the full 1326-hand space.
pub fn range_summary(range_id: &str, combos: &[Combo]) -> String {
    format!(
        "{}: {} combos ({:.1}% of all hands)",
        range_id.bold(),
        combos.len(),
        combos.len() as f64 / 1326.0 * 100.0
    )
}

/// The strength-ordered bucket table with cumulative columns.
pub fn render_mdf_table(result: &MdfResult) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Bucket", "Count", "%", "Cum", "Cum %"]);

    for row in &result.buckets {
        let mut name = Cell::new(row.name);
        if row.name == result.cutoff_bucket {
            name = Cell::new(format!("{} ◄ cutoff", row.name));
        }
        table.add_row(vec![
            name,
            Cell::new(row.count),
            Cell::new(format!("{:.1}", row.pct)),
            Cell::new(row.cum_count),
            Cell::new(format!("{:.1}", row.cum_pct)),
        ]);
    }
    table
}

/// One-line verdict under the MDF table.
pub fn mdf_verdict(result: &MdfResult) -> String {
    if result.total_combos == 0 {
        return "Range fully blocked by the board — nothing to defend.".yellow().to_string();
    }
    let mut line = format!(
        "MDF {:.3} → defend {} of {} combos, down through {}",
        result.mdf,
        result.need_defend_combos,
        result.total_combos,
        result.cutoff_bucket.bold()
    );
    if let Some(ratio) = result.mix_ratio {
        line.push_str(&format!(" (mix: defend {:.1}% of that bucket)", ratio));
    }
    line
}

pub fn correct_banner() -> String {
    "✓ correct".green().bold().to_string()
}

pub fn wrong_banner(expected: &str) -> String {
    format!("{} — correct answer: {}", "✗ wrong".red().bold(), expected.bold())
}
