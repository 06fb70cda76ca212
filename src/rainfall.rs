use crate::error::PlannerError;

// Mean annual rainfall per district (mm), in selector order.
// Jumla is an estimate; Bajura is an unvalidated outlier and is kept as published.
static DISTRICT_RAINFALL: [(&str, f64); 47] = [
    ("Kathmandu", 1360.0),
    ("Pokhara", 3900.0),
    ("Biratnagar", 1550.0),
    ("Nepalgunj", 1302.0),
    ("Butwal", 1827.0),
    ("Dhangadhi", 1500.0),
    ("Jumla", 850.0),
    ("Dharan", 1416.0),
    ("Dhankuta", 1810.0),
    ("Ilam", 2552.0),
    ("Bhojpur", 2290.0),
    ("Khandbari", 2041.0),
    ("Bhadrapur", 2352.0),
    ("Damak", 2618.0),
    ("Khumbu Pasang Lhamu", 645.0),
    ("Gaur", 1590.0),
    ("Siraha", 1293.0),
    ("Birgunj", 1862.0),
    ("Jaleshwar", 1493.0),
    ("Malangawa", 1818.0),
    ("Janakpur", 1517.0),
    ("Rajbiraj", 1223.0),
    ("Lahan", 1231.0),
    ("Hetauda", 2069.0),
    ("Bharatpur", 2550.0),
    ("Banepa", 1931.0),
    ("Suryabinayak", 1822.0),
    ("Kirtipur", 2101.0),
    ("Gorkha", 2500.0),
    ("Baglung", 2200.0),
    ("Lamjung", 2300.0),
    ("Syangja", 2100.0),
    ("Tanahun", 2400.0),
    ("Gulariya", 1504.0),
    ("Siddharthanagar", 1763.0),
    ("Tansen", 1949.0),
    ("Tulsipur", 1495.0),
    ("Sitganga", 1633.0),
    ("Birendranagar", 1651.0),
    ("Narayan", 1252.0),
    ("Chandannath", 729.0),
    ("Simikot", 304.0),
    ("Kharpunath", 210.0),
    ("Bajura", 13433.0),
    ("Dadeldhura", 1200.0),
    ("Mahendranagar", 1800.0),
    ("Doti", 1100.0),
];

/// Read-only view over the district rainfall reference data.
#[derive(Debug, Clone, Copy)]
pub struct RainfallTable {
    entries: &'static [(&'static str, f64)],
}

impl RainfallTable {
    pub fn global() -> Self {
        RainfallTable {
            entries: &DISTRICT_RAINFALL,
        }
    }

    /// Mean annual rainfall for `district`. Exact names win over
    /// case-insensitive matches.
    pub fn lookup(&self, district: &str) -> Result<f64, PlannerError> {
        let name = district.trim();
        self.entries
            .iter()
            .find(|(d, _)| *d == name)
            .or_else(|| self.entries.iter().find(|(d, _)| d.eq_ignore_ascii_case(name)))
            .map(|(_, mm)| *mm)
            .ok_or_else(|| PlannerError::UnknownDistrict(district.to_string()))
    }

    /// Canonical spelling of a district name as stored in the table.
    pub fn canonical_name(&self, district: &str) -> Option<&'static str> {
        let name = district.trim();
        self.entries
            .iter()
            .find(|(d, _)| d.eq_ignore_ascii_case(name))
            .map(|(d, _)| *d)
    }

    pub fn districts(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
