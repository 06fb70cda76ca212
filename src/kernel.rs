use crate::config::YIELD_CONVERSION_FACTOR;

// Annual harvest in liters. Callers pass bounded inputs; nothing is re-checked here.
pub fn compute_yield(roof_area_m2: f64, rainfall_mm: f64, runoff_coeff: f64) -> f64 {
    roof_area_m2 * rainfall_mm * runoff_coeff * YIELD_CONVERSION_FACTOR
}

// Tank volume needed to carry the household through `dry_days` without rain
pub fn compute_storage(family_size: u32, dry_days: u32, daily_usage_per_person_liters: f64) -> f64 {
    family_size as f64 * daily_usage_per_person_liters * dry_days as f64
}
