//! Episodic market-trading simulation core.
//!
//! Drives an account ledger over a historical price series one step at a
//! time, for an external policy that maps observations to actions. The
//! policy, data loading and charting all live outside this crate.
//!
//! ```no_run
//! use trading_env::{EnvConfig, TradingEnv};
//! # fn series() -> trading_env::PriceSeries { unimplemented!() }
//! # fn policy(_obs: &ndarray::Array2<f64>) -> (f64, f64) { (2.5, 0.0) }
//!
//! let config = EnvConfig::for_asset_name("stock")?;
//! let mut env = TradingEnv::with_seed(series(), config, 42)?;
//!
//! let mut observation = env.reset();
//! loop {
//!     let step = env.step(policy(&observation));
//!     observation = step.observation;
//!     if step.done {
//!         break;
//!     }
//! }
//! env.close();
//! # Ok::<(), trading_env::ConfigError>(())
//! ```

pub mod account;
pub mod config;
pub mod env;
pub mod error;
pub mod render;
pub mod series;

#[cfg(test)]
pub(crate) mod test_support;

pub use account::{Account, AccountHistory, TradeRecord, TradeSide};
pub use config::{AssetClass, EnvConfig};
pub use env::{MarkToMarket, RewardKind, RewardPolicy, Step, TimeDecayedBalance, TradingEnv};
pub use error::ConfigError;
pub use render::{RenderFrame, RenderMode, Renderer};
pub use series::{Candle, PriceSeries};
