use crate::error::PlannerError;
use std::fmt;
use std::str::FromStr;

// Household demand defaults
pub const DAILY_USAGE_PER_PERSON_LITERS: f64 = 50.0;
pub const DEFAULT_FAMILY_SIZE: u32 = 4;
pub const DEFAULT_DRY_DAYS: u32 = 30;

// Kept at 0.001 so results match existing reports, even though mm * m2 is already liters
pub const YIELD_CONVERSION_FACTOR: f64 = 0.001;

// Input bounds
pub const MIN_ROOF_AREA_M2: f64 = 1.0;
pub const MIN_RAINFALL_MM: f64 = 0.0;
pub const FAMILY_SIZE_RANGE: (u32, u32) = (1, 20);
pub const DRY_DAYS_RANGE: (u32, u32) = (1, 365);

// Export
pub const REPORT_FILE_NAME: &str = "rainwater_harvesting_report.csv";
pub const REPORT_MIME_TYPE: &str = "text/csv";

// Header labels for the exported report, in column order
#[derive(Debug, Clone)]
pub struct ReportColumns {
    pub roof_area: String,
    pub rainfall: String,
    pub runoff_coeff: String,
    pub family_size: String,
    pub dry_days: String,
    pub rainwater_collected: String,
    pub storage_tank: String,
}

impl ReportColumns {
    pub fn new() -> Self {
        ReportColumns {
            roof_area: "Roof Area (m²)".to_string(),
            rainfall: "Rainfall (mm)".to_string(),
            runoff_coeff: "Runoff Coefficient".to_string(),
            family_size: "Family Size".to_string(),
            dry_days: "Dry Days".to_string(),
            rainwater_collected: "Total Rainwater Collected (Liters)".to_string(),
            storage_tank: "Recommended Storage Tank Size (Liters)".to_string(),
        }
    }

    pub fn headers(&self) -> [&str; 7] {
        [
            &self.roof_area,
            &self.rainfall,
            &self.runoff_coeff,
            &self.family_size,
            &self.dry_days,
            &self.rainwater_collected,
            &self.storage_tank,
        ]
    }
}

// Roof material, which fixes the runoff coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoofType {
    Concrete,
    MetalSheet,
    Tile,
    Asphalt,
}

impl RoofType {
    pub const ALL: [RoofType; 4] = [
        RoofType::Concrete,
        RoofType::MetalSheet,
        RoofType::Tile,
        RoofType::Asphalt,
    ];

    pub fn runoff_coefficient(self) -> f64 {
        match self {
            RoofType::Concrete => 0.8,
            RoofType::MetalSheet => 0.9,
            RoofType::Tile => 0.75,
            RoofType::Asphalt => 0.7,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            RoofType::Concrete => "Concrete",
            RoofType::MetalSheet => "Metal Sheet",
            RoofType::Tile => "Tile",
            RoofType::Asphalt => "Asphalt",
        }
    }
}

impl fmt::Display for RoofType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for RoofType {
    type Err = PlannerError;

    // Accepts "Metal Sheet", "metal-sheet", "metal_sheet" and "metalsheet"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "concrete" => Ok(RoofType::Concrete),
            "metalsheet" => Ok(RoofType::MetalSheet),
            "tile" => Ok(RoofType::Tile),
            "asphalt" => Ok(RoofType::Asphalt),
            _ => Err(PlannerError::UnknownRoofType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roof_coefficients_match_table() {
        assert_eq!(RoofType::Concrete.runoff_coefficient(), 0.8);
        assert_eq!(RoofType::MetalSheet.runoff_coefficient(), 0.9);
        assert_eq!(RoofType::Tile.runoff_coefficient(), 0.75);
        assert_eq!(RoofType::Asphalt.runoff_coefficient(), 0.7);
    }

    #[test]
    fn roof_coefficients_in_unit_interval() {
        for roof in RoofType::ALL {
            let c = roof.runoff_coefficient();
            assert!(c > 0.0 && c <= 1.0, "{} out of range: {}", roof, c);
        }
    }

    #[test]
    fn roof_type_parses_display_and_cli_forms() {
        assert_eq!("Metal Sheet".parse::<RoofType>(), Ok(RoofType::MetalSheet));
        assert_eq!("metal-sheet".parse::<RoofType>(), Ok(RoofType::MetalSheet));
        assert_eq!("TILE".parse::<RoofType>(), Ok(RoofType::Tile));
        for roof in RoofType::ALL {
            assert_eq!(roof.display_name().parse::<RoofType>(), Ok(roof));
        }
    }

    #[test]
    fn unknown_roof_type_is_rejected() {
        assert_eq!(
            "thatch".parse::<RoofType>(),
            Err(PlannerError::UnknownRoofType("thatch".to_string()))
        );
    }

    #[test]
    fn report_columns_order() {
        let columns = ReportColumns::new();
        let headers = columns.headers();
        assert_eq!(headers[0], "Roof Area (m²)");
        assert_eq!(headers[4], "Dry Days");
        assert_eq!(headers[6], "Recommended Storage Tank Size (Liters)");
    }
}
