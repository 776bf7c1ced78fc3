//! Driver configuration, optionally loaded from a JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use fleet_core::FleetConfig;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Master RNG seed.  The same seed always produces identical reports.
    pub seed: u64,
    /// Number of driver steps; each step advances one randomly chosen vehicle.
    pub total_ticks: u64,
    /// Print a report every N steps.
    pub report_interval_ticks: u64,
    /// Directory for `fleet_report.csv`.  `None` disables CSV output.
    pub output_dir: Option<PathBuf>,
    /// Attribute limits applied when admitting roster vehicles.
    pub limits: FleetConfig,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            seed:                  42,
            total_ticks:           24,
            report_interval_ticks: 6,
            output_dir:            None,
            limits:                FleetConfig::default(),
        }
    }
}

impl DriverConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: DriverConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.report_interval_ticks > 0, "report_interval_ticks must be at least 1");
        self.limits.validate()?;
        Ok(())
    }
}
