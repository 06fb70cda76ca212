use anyhow::{Context, Result};
use chrono::Local;
use std::io::Write;

mod cli;
mod config;
mod error;
mod io;
mod kernel;
mod rainfall;
mod scenario;

use cli::{Command, PlanArgs, get_args};
use config::{REPORT_MIME_TYPE, RoofType};
use io::chart::render_bar_chart;
use io::report::Report;
use rainfall::RainfallTable;
use scenario::{RainfallSource, ScenarioInput};

fn main() -> Result<()> {
    let args = get_args();
    let table = RainfallTable::global();

    match args.command {
        Command::Districts => list_districts(&table),
        Command::RoofTypes => list_roof_types(),
        Command::Plan(plan) => run_plan(&plan, &table),
    }
}

fn list_districts(table: &RainfallTable) -> Result<()> {
    println!("{} districts (mean annual rainfall):", table.len());
    for (district, mm) in table.districts() {
        println!("  {:<22} {:>7} mm", district, mm);
    }
    Ok(())
}

fn list_roof_types() -> Result<()> {
    println!("Roof types (runoff coefficient):");
    for roof in RoofType::ALL {
        println!("  {:<12} {}", roof.display_name(), roof.runoff_coefficient());
    }
    Ok(())
}

fn run_plan(plan: &PlanArgs, table: &RainfallTable) -> Result<()> {
    let source = plan.rainfall_source()?;
    let input = ScenarioInput::from_selection(
        plan.roof_area,
        &source,
        plan.roof_type,
        plan.family_size,
        plan.dry_days,
        table,
    )
    .context("Failed to build scenario")?;

    // Keep stdout clean for the CSV when exporting there
    let to_stdout = !plan.no_export && plan.writes_to_stdout();
    macro_rules! say {
        ($($arg:tt)*) => {
            if to_stdout { eprintln!($($arg)*) } else { println!($($arg)*) }
        };
    }

    say!("Rainwater Harvesting Planner ({})", Local::now().format("%Y-%m-%d %H:%M"));
    match &source {
        RainfallSource::District(name) => {
            let district = table.canonical_name(name).unwrap_or(name.as_str());
            say!(
                "Selected District: {} | Average Rainfall: {} mm",
                district, input.rainfall_mm
            );
        }
        RainfallSource::Manual(mm) => say!("Manual Rainfall: {} mm", mm),
    }
    say!(
        "Runoff Coefficient for {} roof: {}",
        plan.roof_type, input.runoff_coeff
    );

    let result = input
        .evaluate(plan.daily_usage)
        .context("Failed to evaluate scenario")?;

    say!("\nScenario:");
    say!("  Roof area: {} m²", input.roof_area_m2);
    say!("  Family size: {}", input.family_size);
    say!("  Dry days: {}", input.dry_days);
    say!("  Daily usage per person: {} L", plan.daily_usage);

    say!(
        "\nTotal Rainwater Collected: {:.2} Liters per Year",
        result.rainwater_collected_liters
    );
    say!(
        "Recommended Storage Tank Size: {} Liters",
        result.storage_tank_liters
    );

    let surplus = result.surplus_liters();
    if surplus < 0.0 {
        say!("Shortfall against household need: {:.2} Liters", -surplus);
    } else {
        say!("Surplus over household need: {:.2} Liters", surplus);
    }

    if !plan.no_chart {
        say!("\n{}", render_bar_chart(&result));
    }

    if plan.no_export {
        return Ok(());
    }

    let report = Report::assemble(&input, &result);
    if to_stdout {
        let text = io::csv::serialize_csv(&report)?;
        let mut out = std::io::stdout().lock();
        out.write_all(text.as_bytes())
            .context("Failed to write report to stdout")?;
        out.flush().context("Failed to flush stdout")?;
        eprintln!("Report written to stdout ({})", REPORT_MIME_TYPE);
    } else {
        io::csv::write_report(&plan.output, &report)?;
    }

    Ok(())
}
