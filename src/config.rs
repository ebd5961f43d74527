use chrono::{Datelike, NaiveDate};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const PEAK_SURCHARGE_PERCENT: u64 = 130;
const DEFAULT_PEAK_MONTHS: [u32; 5] = [12, 1, 4, 5, 6];

/// Months (1-12) whose start dates count as peak season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeakSeason {
    pub months: Vec<u32>,
}

impl Default for PeakSeason {
    fn default() -> Self {
        Self {
            months: DEFAULT_PEAK_MONTHS.to_vec(),
        }
    }
}

impl PeakSeason {
    pub fn new(months: Vec<u32>) -> Self {
        Self { months }
    }

    pub fn contains(&self, start_date: NaiveDate) -> bool {
        self.months.contains(&start_date.month())
    }

    /// Parse "12,1,4" style lists. Out-of-range or malformed entries make the whole value invalid.
    pub fn parse(value: &str) -> Option<Self> {
        let months: Option<Vec<u32>> = value
            .split(',')
            .map(|m| m.trim().parse::<u32>().ok().filter(|m| (1..=12).contains(m)))
            .collect();
        months.filter(|m| !m.is_empty()).map(Self::new)
    }
}

#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub host: String,
    pub port: u16,
    pub peak_season: PeakSeason,
    /// Peak-season multiplier expressed in percent (130 = +30%)
    pub peak_surcharge_percent: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            peak_season: PeakSeason::default(),
            peak_surcharge_percent: PEAK_SURCHARGE_PERCENT,
        }
    }
}

impl PlannerConfig {
    /// Create config from environment variables or use defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            peak_season: lookup("PEAK_MONTHS")
                .and_then(|s| PeakSeason::parse(&s))
                .unwrap_or(defaults.peak_season),
            peak_surcharge_percent: lookup("PEAK_SURCHARGE_PERCENT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.peak_surcharge_percent),
        }
    }
}
