use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::env::RewardKind;
use crate::error::ConfigError;

/// Asset classes with built-in environment presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Stock,
    Bitcoin,
}

impl FromStr for AssetClass {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "stock" => Ok(AssetClass::Stock),
            "bitcoin" => Ok(AssetClass::Bitcoin),
            other => Err(ConfigError::UnknownAssetClass(other.to_string())),
        }
    }
}

/// Per-asset-class environment parameters, immutable for an episode run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvConfig {
    pub max_steps: usize,
    pub init_balance: f64,
    /// Historical rows per observation window, in addition to the current row.
    pub lookback_range: usize,
    /// Proportional fee applied to both buy and sell notional value.
    pub transaction_cost_rate: f64,
    /// Deterministic sequential traversal vs. randomized window selection.
    pub serial: bool,
    pub reward: RewardKind,
}

impl EnvConfig {
    pub fn for_asset(asset: AssetClass) -> Self {
        match asset {
            AssetClass::Stock => Self {
                max_steps: 1000,
                init_balance: 10_000.0,
                lookback_range: 5,
                transaction_cost_rate: 0.00075,
                serial: true,
                reward: RewardKind::TimeDecayedBalance,
            },
            AssetClass::Bitcoin => Self {
                max_steps: 1000,
                init_balance: 10_000.0,
                lookback_range: 50,
                transaction_cost_rate: 0.00075,
                serial: true,
                reward: RewardKind::MarkToMarket,
            },
        }
    }

    /// Preset lookup keyed by asset-class name.
    pub fn for_asset_name(name: &str) -> Result<Self, ConfigError> {
        Ok(Self::for_asset(name.parse()?))
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.max_steps == 0 {
            return Err(ConfigError::InvalidParameter("max_steps must be > 0"));
        }
        if self.init_balance <= 0.0 {
            return Err(ConfigError::InvalidParameter("init_balance must be > 0"));
        }
        if self.lookback_range == 0 {
            return Err(ConfigError::InvalidParameter("lookback_range must be >= 1"));
        }
        if !(0.0..1.0).contains(&self.transaction_cost_rate) {
            return Err(ConfigError::InvalidParameter(
                "transaction_cost_rate must be in [0, 1)",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_preset() {
        let config = EnvConfig::for_asset_name("stock").unwrap();

        assert_eq!(config.lookback_range, 5);
        assert_eq!(config.transaction_cost_rate, 0.00075);
        assert_eq!(config.reward, RewardKind::TimeDecayedBalance);
        assert!(config.serial);
    }

    #[test]
    fn bitcoin_preset() {
        let config = EnvConfig::for_asset_name("bitcoin").unwrap();

        assert_eq!(config.lookback_range, 50);
        assert_eq!(config.reward, RewardKind::MarkToMarket);
    }

    #[test]
    fn unknown_asset_class_is_fatal() {
        let result = EnvConfig::for_asset_name("options");
        assert!(matches!(result, Err(ConfigError::UnknownAssetClass(_))));
    }

    #[test]
    fn presets_validate() {
        EnvConfig::for_asset(AssetClass::Stock).validate().unwrap();
        EnvConfig::for_asset(AssetClass::Bitcoin).validate().unwrap();
    }

    #[test]
    fn out_of_range_cost_rate_is_rejected() {
        let config = EnvConfig {
            transaction_cost_rate: 1.0,
            ..EnvConfig::for_asset(AssetClass::Stock)
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidParameter(_))
        ));
    }
}
