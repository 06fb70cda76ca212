use crate::config::{
    DRY_DAYS_RANGE, FAMILY_SIZE_RANGE, MIN_RAINFALL_MM, MIN_ROOF_AREA_M2, RoofType,
};
use crate::error::PlannerError;
use crate::kernel::{compute_storage, compute_yield};
use crate::rainfall::RainfallTable;

// Where the rainfall figure comes from
#[derive(Debug, Clone, PartialEq)]
pub enum RainfallSource {
    District(String),
    Manual(f64),
}

impl RainfallSource {
    pub fn resolve(&self, table: &RainfallTable) -> Result<f64, PlannerError> {
        match self {
            RainfallSource::District(name) => table.lookup(name),
            RainfallSource::Manual(mm) => Ok(*mm),
        }
    }
}

// One household scenario, built fresh for each run
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioInput {
    pub roof_area_m2: f64,
    pub rainfall_mm: f64,
    pub runoff_coeff: f64,
    pub family_size: u32,
    pub dry_days: u32,
}

impl ScenarioInput {
    pub fn new(
        roof_area_m2: f64,
        rainfall_mm: f64,
        runoff_coeff: f64,
        family_size: u32,
        dry_days: u32,
    ) -> Result<Self, PlannerError> {
        if !roof_area_m2.is_finite() || roof_area_m2 < MIN_ROOF_AREA_M2 {
            return Err(PlannerError::invalid("roof_area_m2", roof_area_m2, ">= 1"));
        }
        if !rainfall_mm.is_finite() || rainfall_mm < MIN_RAINFALL_MM {
            return Err(PlannerError::invalid("rainfall_mm", rainfall_mm, ">= 0"));
        }
        if !(runoff_coeff > 0.0 && runoff_coeff <= 1.0) {
            return Err(PlannerError::invalid("runoff_coeff", runoff_coeff, "(0, 1]"));
        }
        if family_size < FAMILY_SIZE_RANGE.0 || family_size > FAMILY_SIZE_RANGE.1 {
            return Err(PlannerError::invalid("family_size", family_size, "[1, 20]"));
        }
        if dry_days < DRY_DAYS_RANGE.0 || dry_days > DRY_DAYS_RANGE.1 {
            return Err(PlannerError::invalid("dry_days", dry_days, "[1, 365]"));
        }

        Ok(ScenarioInput {
            roof_area_m2,
            rainfall_mm,
            runoff_coeff,
            family_size,
            dry_days,
        })
    }

    pub fn from_selection(
        roof_area_m2: f64,
        source: &RainfallSource,
        roof_type: RoofType,
        family_size: u32,
        dry_days: u32,
        table: &RainfallTable,
    ) -> Result<Self, PlannerError> {
        let rainfall_mm = source.resolve(table)?;
        ScenarioInput::new(
            roof_area_m2,
            rainfall_mm,
            roof_type.runoff_coefficient(),
            family_size,
            dry_days,
        )
    }

    // Fails when the formulas overflow, e.g. an enormous roof area
    pub fn evaluate(
        &self,
        daily_usage_per_person_liters: f64,
    ) -> Result<ScenarioResult, PlannerError> {
        let rainwater_collected_liters =
            compute_yield(self.roof_area_m2, self.rainfall_mm, self.runoff_coeff);
        if !rainwater_collected_liters.is_finite() {
            return Err(PlannerError::invalid(
                "rainwater_collected_liters",
                rainwater_collected_liters,
                "finite (reduce roof area or rainfall)",
            ));
        }

        let storage_tank_liters =
            compute_storage(self.family_size, self.dry_days, daily_usage_per_person_liters);
        if !storage_tank_liters.is_finite() {
            return Err(PlannerError::invalid(
                "storage_tank_liters",
                storage_tank_liters,
                "finite (reduce daily usage)",
            ));
        }

        Ok(ScenarioResult {
            rainwater_collected_liters,
            storage_tank_liters,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioResult {
    pub rainwater_collected_liters: f64,
    pub storage_tank_liters: f64,
}

impl ScenarioResult {
    // Negative when the harvest falls short of what the tank should hold
    pub fn surplus_liters(&self) -> f64 {
        self.rainwater_collected_liters - self.storage_tank_liters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DAILY_USAGE_PER_PERSON_LITERS;

    #[test]
    fn district_source_resolves_from_table() {
        let table = RainfallTable::global();
        let source = RainfallSource::District("Pokhara".to_string());
        assert_eq!(source.resolve(&table), Ok(3900.0));
    }

    #[test]
    fn manual_source_passes_through() {
        let table = RainfallTable::global();
        assert_eq!(RainfallSource::Manual(812.5).resolve(&table), Ok(812.5));
    }

    #[test]
    fn unknown_district_propagates() {
        let table = RainfallTable::global();
        let source = RainfallSource::District("Atlantis".to_string());
        let err = ScenarioInput::from_selection(100.0, &source, RoofType::Tile, 4, 30, &table)
            .unwrap_err();
        assert_eq!(err, PlannerError::UnknownDistrict("Atlantis".to_string()));
    }

    #[test]
    fn kathmandu_reference_scenario() {
        let table = RainfallTable::global();
        let input = ScenarioInput::from_selection(
            100.0,
            &RainfallSource::District("Kathmandu".to_string()),
            RoofType::Concrete,
            4,
            30,
            &table,
        )
        .unwrap();
        let result = input.evaluate(DAILY_USAGE_PER_PERSON_LITERS).unwrap();
        assert!((result.rainwater_collected_liters - 108.8).abs() < 1e-9);
        assert_eq!(result.storage_tank_liters, 6000.0);
        assert!(result.surplus_liters() < 0.0);
    }

    #[test]
    fn bounds_are_enforced() {
        assert!(ScenarioInput::new(0.5, 100.0, 0.8, 4, 30).is_err());
        assert!(ScenarioInput::new(10.0, -1.0, 0.8, 4, 30).is_err());
        assert!(ScenarioInput::new(10.0, 100.0, 0.0, 4, 30).is_err());
        assert!(ScenarioInput::new(10.0, 100.0, 1.1, 4, 30).is_err());
        assert!(ScenarioInput::new(10.0, 100.0, 0.8, 0, 30).is_err());
        assert!(ScenarioInput::new(10.0, 100.0, 0.8, 21, 30).is_err());
        assert!(ScenarioInput::new(10.0, 100.0, 0.8, 4, 0).is_err());
        assert!(ScenarioInput::new(10.0, 100.0, 0.8, 4, 366).is_err());
        assert!(ScenarioInput::new(f64::NAN, 100.0, 0.8, 4, 30).is_err());
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(ScenarioInput::new(1.0, 0.0, 1.0, 1, 1).is_ok());
        assert!(ScenarioInput::new(1.0, 0.0, 0.7, 20, 365).is_ok());
    }

    #[test]
    fn invalid_input_names_field() {
        let err = ScenarioInput::new(10.0, 100.0, 0.8, 25, 30).unwrap_err();
        match err {
            PlannerError::InvalidInput { field, value, .. } => {
                assert_eq!(field, "family_size");
                assert_eq!(value, "25");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn overflowing_yield_is_rejected() {
        let input = ScenarioInput::new(1e308, 13433.0, 0.8, 4, 30).unwrap();
        match input.evaluate(DAILY_USAGE_PER_PERSON_LITERS) {
            Err(PlannerError::InvalidInput { field, .. }) => {
                assert_eq!(field, "rainwater_collected_liters")
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn overflowing_storage_is_rejected() {
        let input = ScenarioInput::new(100.0, 1360.0, 0.8, 20, 365).unwrap();
        match input.evaluate(f64::MAX) {
            Err(PlannerError::InvalidInput { field, .. }) => {
                assert_eq!(field, "storage_tank_liters")
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn large_finite_scenario_still_evaluates() {
        let input = ScenarioInput::new(1e12, 13433.0, 0.9, 20, 365).unwrap();
        let result = input.evaluate(DAILY_USAGE_PER_PERSON_LITERS).unwrap();
        assert!(result.rainwater_collected_liters.is_finite());
        assert_eq!(result.storage_tank_liters, 365000.0);
    }
}
