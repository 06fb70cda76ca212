use crate::config::{
    DAILY_USAGE_PER_PERSON_LITERS, DEFAULT_DRY_DAYS, DEFAULT_FAMILY_SIZE, DRY_DAYS_RANGE,
    FAMILY_SIZE_RANGE, MIN_RAINFALL_MM, MIN_ROOF_AREA_M2, REPORT_FILE_NAME, RoofType,
};
use crate::error::PlannerError;
use crate::scenario::RainfallSource;
use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

/// Estimate rainwater harvest and storage tank size for a household
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute yield and tank size for one scenario
    Plan(PlanArgs),
    /// List districts with their mean annual rainfall
    Districts,
    /// List roof types with their runoff coefficients
    RoofTypes,
}

#[derive(clap::Args, Debug)]
#[command(group(
    ArgGroup::new("rainfall_source")
        .required(true)
        .args(["district", "rainfall"])
))]
pub struct PlanArgs {
    /// Roof catchment area in square meters
    #[arg(long, value_parser = parse_roof_area)]
    pub roof_area: f64,

    /// District to take mean annual rainfall from
    #[arg(long)]
    pub district: Option<String>,

    /// Annual rainfall in millimeters, entered manually
    #[arg(long, value_parser = parse_rainfall)]
    pub rainfall: Option<f64>,

    /// Roof material: concrete, metal-sheet, tile or asphalt
    #[arg(long, default_value = "concrete")]
    pub roof_type: RoofType,

    /// Number of people in the household
    #[arg(long, default_value_t = DEFAULT_FAMILY_SIZE, value_parser = clap::value_parser!(u32).range((FAMILY_SIZE_RANGE.0 as i64)..=(FAMILY_SIZE_RANGE.1 as i64)))]
    pub family_size: u32,

    /// Consecutive days without rain the tank must cover
    #[arg(long, default_value_t = DEFAULT_DRY_DAYS, value_parser = clap::value_parser!(u32).range((DRY_DAYS_RANGE.0 as i64)..=(DRY_DAYS_RANGE.1 as i64)))]
    pub dry_days: u32,

    /// Daily water use per person in liters
    #[arg(long, default_value_t = DAILY_USAGE_PER_PERSON_LITERS, value_parser = parse_daily_usage)]
    pub daily_usage: f64,

    /// Report path; "-" writes the CSV to stdout
    #[arg(short, long, default_value = REPORT_FILE_NAME)]
    pub output: PathBuf,

    /// Skip the CSV export
    #[arg(long)]
    pub no_export: bool,

    /// Skip the bar chart
    #[arg(long)]
    pub no_chart: bool,
}

impl PlanArgs {
    pub fn rainfall_source(&self) -> Result<RainfallSource, PlannerError> {
        match (&self.district, self.rainfall) {
            (Some(district), None) => Ok(RainfallSource::District(district.clone())),
            (None, Some(mm)) => Ok(RainfallSource::Manual(mm)),
            (district, rainfall) => Err(PlannerError::invalid(
                "rainfall_source",
                format!("district={:?}, rainfall={:?}", district, rainfall),
                "exactly one of --district or --rainfall",
            )),
        }
    }

    pub fn writes_to_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }
}

pub fn get_args() -> Args {
    Args::parse()
}

fn parse_finite(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if !value.is_finite() {
        return Err(format!("'{}' is not a finite number", s));
    }
    Ok(value)
}

fn parse_roof_area(s: &str) -> Result<f64, String> {
    let value = parse_finite(s)?;
    if value < MIN_ROOF_AREA_M2 {
        return Err(format!("roof area must be at least {} m²", MIN_ROOF_AREA_M2));
    }
    Ok(value)
}

fn parse_rainfall(s: &str) -> Result<f64, String> {
    let value = parse_finite(s)?;
    if value < MIN_RAINFALL_MM {
        return Err("rainfall cannot be negative".to_string());
    }
    Ok(value)
}

fn parse_daily_usage(s: &str) -> Result<f64, String> {
    let value = parse_finite(s)?;
    if value <= 0.0 {
        return Err("daily usage must be greater than zero".to_string());
    }
    Ok(value)
}
