//! Configuration API for chunk processing

use crate::api::Error;
use crate::domain::{PlanTable, PlanTier};

/// Processing configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub(crate) plan_table: PlanTable,
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Planning table in use
    pub fn plan_table(&self) -> &PlanTable {
        &self.plan_table
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    tiers: Option<Vec<PlanTier>>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the planning tiers
    pub fn tiers(mut self, tiers: Vec<PlanTier>) -> Self {
        self.tiers = Some(tiers);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(tiers) = self.tiers {
            config.plan_table = PlanTable::new(tiers)?;
        }

        Ok(config)
    }
}
