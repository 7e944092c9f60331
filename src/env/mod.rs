mod env;
mod obs;
mod reward;
mod session;
mod trade;

pub use env::{Step, TradingEnv};
pub use reward::{MarkToMarket, RewardKind, RewardPolicy, TimeDecayedBalance};
