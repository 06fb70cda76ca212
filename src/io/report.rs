use crate::scenario::{ScenarioInput, ScenarioResult};
use serde::{Deserialize, Serialize};

// Single-row export record; field order is the CSV column order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub roof_area_m2: f64,
    pub rainfall_mm: f64,
    pub runoff_coeff: f64,
    pub family_size: u32,
    pub dry_days: u32,
    pub rainwater_collected_liters: f64,
    pub storage_tank_liters: f64,
}

impl Report {
    pub fn assemble(input: &ScenarioInput, result: &ScenarioResult) -> Self {
        Report {
            roof_area_m2: input.roof_area_m2,
            rainfall_mm: input.rainfall_mm,
            runoff_coeff: input.runoff_coeff,
            family_size: input.family_size,
            dry_days: input.dry_days,
            rainwater_collected_liters: result.rainwater_collected_liters,
            storage_tank_liters: result.storage_tank_liters,
        }
    }
}
