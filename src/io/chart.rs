use crate::scenario::ScenarioResult;
use std::fmt::Write;

pub const CHART_TITLE: &str = "Rainwater Collected vs Household Need";
pub const CHART_UNIT: &str = "Liters";
const BAR_WIDTH: usize = 40;

// Horizontal two-bar chart, bars scaled against the larger value
pub fn render_bar_chart(result: &ScenarioResult) -> String {
    let bars = [
        ("Rainwater Collected", result.rainwater_collected_liters),
        ("Household Need", result.storage_tank_liters),
    ];
    let max = bars.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let label_width = bars.iter().map(|(l, _)| l.len()).max().unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{}", CHART_TITLE);
    for (label, value) in bars {
        let filled = scaled_width(value, max);
        let _ = writeln!(
            out,
            "  {:<label_width$} |{:<BAR_WIDTH$}| {:.2}",
            label,
            "#".repeat(filled),
            value,
        );
    }
    let _ = writeln!(out, "  {:<label_width$}  ({})", "", CHART_UNIT);
    out
}

fn scaled_width(value: f64, max: f64) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    let width = (value / max * BAR_WIDTH as f64).round() as usize;
    // Keep tiny non-zero values visible
    width.clamp(1, BAR_WIDTH)
}
