use crate::{
    error::{GenError, GenResult},
    identity::WorkerNameGenerator,
};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TRIAL_COUNT: usize = 100;
pub const DEFAULT_SKIP_PROBABILITY: f64 = 0.25;
pub const DEFAULT_EARLIEST_HOUR: u32 = 7;
pub const DEFAULT_LATEST_HOUR: u32 = 23;
pub const DEFAULT_TIME_ZONE: &str = "America/New_York";

/// Tunables for one generator run. Defaults reproduce the fixed behavior of
/// the staffing generator; a JSON file may override any subset of fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Candidate workers attempted. Workers with no shifts are dropped,
    /// so the emitted pool is at most this large.
    pub trial_count: usize,
    /// Probability that a candidate is unavailable on a given date.
    pub skip_probability: f64,
    pub earliest_hour: u32,
    pub latest_hour: u32,
    /// IANA zone name all timestamps are constructed in.
    pub time_zone: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            trial_count: DEFAULT_TRIAL_COUNT,
            skip_probability: DEFAULT_SKIP_PROBABILITY,
            earliest_hour: DEFAULT_EARLIEST_HOUR,
            latest_hour: DEFAULT_LATEST_HOUR,
            time_zone: DEFAULT_TIME_ZONE.into(),
        }
    }
}

impl GeneratorConfig {
    /// Load from a JSON file. Missing keys keep their defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: GeneratorConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Small pool for tests. Everything else stays at production values.
    pub fn default_test() -> Self {
        Self {
            trial_count: 20,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> GenResult<()> {
        if !(0.0..=1.0).contains(&self.skip_probability) {
            return Err(GenError::invalid_config(format!(
                "skip_probability must be within [0, 1], got {}",
                self.skip_probability
            )));
        }
        if self.latest_hour > 23 {
            return Err(GenError::invalid_config(format!(
                "latest_hour must be <= 23, got {}",
                self.latest_hour
            )));
        }
        if self.earliest_hour > self.latest_hour {
            return Err(GenError::invalid_config(format!(
                "earliest_hour {} is after latest_hour {}",
                self.earliest_hour, self.latest_hour
            )));
        }
        if self.trial_count > WorkerNameGenerator::name_space() {
            return Err(GenError::invalid_config(format!(
                "trial_count {} exceeds the {} distinct worker ids available",
                self.trial_count,
                WorkerNameGenerator::name_space()
            )));
        }
        self.zone()?;
        Ok(())
    }

    pub fn zone(&self) -> GenResult<Tz> {
        self.time_zone.parse::<Tz>().map_err(|_| {
            GenError::invalid_config(format!("unknown time zone '{}'", self.time_zone))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_fixed_generator_constants() {
        let c = GeneratorConfig::default();
        assert_eq!(c.trial_count, 100);
        assert_eq!(c.skip_probability, 0.25);
        assert_eq!((c.earliest_hour, c.latest_hour), (7, 23));
        assert_eq!(c.zone().unwrap(), chrono_tz::America::New_York);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "trial_count": 5 }}"#).unwrap();

        let c = GeneratorConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(c.trial_count, 5);
        assert_eq!(c.skip_probability, 0.25);
        assert_eq!(c.time_zone, "America/New_York");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(GeneratorConfig::load("/nonexistent/staffgen.json").is_err());
    }

    #[test]
    fn rejects_inverted_hours() {
        let c = GeneratorConfig {
            earliest_hour: 20,
            latest_hour: 8,
            ..GeneratorConfig::default()
        };
        assert!(matches!(c.validate(), Err(GenError::InvalidConfig { .. })));
    }

    #[test]
    fn rejects_out_of_range_probability() {
        let c = GeneratorConfig {
            skip_probability: 1.5,
            ..GeneratorConfig::default()
        };
        assert!(matches!(c.validate(), Err(GenError::InvalidConfig { .. })));
    }

    #[test]
    fn rejects_pool_larger_than_id_space() {
        let c = GeneratorConfig {
            trial_count: WorkerNameGenerator::name_space() + 1,
            ..GeneratorConfig::default()
        };
        assert!(matches!(c.validate(), Err(GenError::InvalidConfig { .. })));
    }

    #[test]
    fn rejects_unknown_zone() {
        let c = GeneratorConfig {
            time_zone: "Mars/Olympus_Mons".into(),
            ..GeneratorConfig::default()
        };
        assert!(matches!(c.validate(), Err(GenError::InvalidConfig { .. })));
    }
}
