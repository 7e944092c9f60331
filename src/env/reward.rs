use serde::{Deserialize, Serialize};

use crate::account::Account;

/// Scalar reward derived from the ledger after each step.
///
/// Policies are selected per asset class through [`RewardKind`] in the
/// environment config rather than branched on inline, so new asset classes
/// only need a new implementation here.
pub trait RewardPolicy {
    fn reward(&self, account: &Account, current_step: usize, max_steps: usize) -> f64;
}

/// Cash balance discounted by episode progress. The stock preset.
pub struct TimeDecayedBalance;

impl RewardPolicy for TimeDecayedBalance {
    fn reward(&self, account: &Account, current_step: usize, max_steps: usize) -> f64 {
        let delay_modifier = current_step as f64 / max_steps as f64;
        account.balance * delay_modifier
    }
}

/// Mark-to-market net worth. The bitcoin preset.
pub struct MarkToMarket;

impl RewardPolicy for MarkToMarket {
    fn reward(&self, account: &Account, _current_step: usize, _max_steps: usize) -> f64 {
        account.net_worth
    }
}

/// Reward policy selector carried by `EnvConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardKind {
    TimeDecayedBalance,
    MarkToMarket,
}

impl RewardKind {
    pub fn policy(self) -> Box<dyn RewardPolicy> {
        match self {
            RewardKind::TimeDecayedBalance => Box::new(TimeDecayedBalance),
            RewardKind::MarkToMarket => Box::new(MarkToMarket),
        }
    }
}
