use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;
use hashbrown::HashMap;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::account::{Account, AccountHistory, TradeRecord};
use crate::config::EnvConfig;
use crate::error::ConfigError;
use crate::render::{RenderFrame, RenderMode, Renderer};
use crate::series::PriceSeries;

use super::reward::RewardPolicy;

/// Result of one `step` call.
pub struct Step {
    pub observation: Array2<f64>,
    pub reward: f64,
    pub done: bool,
    pub info: HashMap<&'static str, f64>,
}

/// Episodic trading simulation over a historical price series.
///
/// Single-owner and synchronous: one caller drives `reset`/`step`/`close`
/// sequentially, one episode in flight per instance. All randomness (session
/// selection and intrabar price draws) goes through the owned rng, so a
/// seeded environment replays exactly.
pub struct TradingEnv {
    pub(super) config: EnvConfig,
    pub(super) series: PriceSeries,
    pub(super) rng: StdRng,
    reward_policy: Box<dyn RewardPolicy>,

    pub(super) account: Account,
    pub(super) account_history: AccountHistory,
    pub(super) trades: Vec<TradeRecord>,

    /// First traversed row of the active slice (absolute series index).
    pub(super) frame_start: usize,
    /// Steps remaining before the slice is exhausted.
    pub(super) steps_left: usize,
    /// Steps taken within the current slice.
    pub(super) current_step: usize,

    /// Price drawn for the most recent step.
    pub(super) current_price: f64,

    renderer: Option<Box<dyn Renderer>>,
}

impl TradingEnv {
    pub fn new(series: PriceSeries, config: EnvConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let needed = config.lookback_range + 2;
        if series.len() < needed {
            return Err(ConfigError::SeriesTooShort {
                len: series.len(),
                needed,
            });
        }

        let account = Account::new(config.init_balance);
        let account_history =
            AccountHistory::seeded(account.snapshot(), config.lookback_range + 1);
        let frame_start = config.lookback_range;
        let steps_left = series.len() - config.lookback_range - 1;
        let reward_policy = config.reward.policy();

        Ok(Self {
            config,
            series,
            rng: StdRng::from_entropy(),
            reward_policy,
            account,
            account_history,
            trades: Vec::new(),
            frame_start,
            steps_left,
            current_step: 0,
            current_price: 0.0,
            renderer: None,
        })
    }

    pub fn with_seed(
        series: PriceSeries,
        config: EnvConfig,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let mut env = Self::new(series, config)?;
        env.seed(seed);
        Ok(env)
    }

    /// Re-seed the random source. Combined with `reset`, replays a
    /// randomized session and its price draws exactly.
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Replace the reward policy selected by the config.
    pub fn set_reward_policy(&mut self, policy: Box<dyn RewardPolicy>) {
        self.reward_policy = policy;
    }

    /// Start a fresh episode and return its first observation.
    pub fn reset(&mut self) -> Array2<f64> {
        self.account = Account::new(self.config.init_balance);
        self.reset_session();
        self.account_history =
            AccountHistory::seeded(self.account.snapshot(), self.config.lookback_range + 1);
        self.trades.clear();
        self.current_price = 0.0;

        self.next_observation()
    }

    /// Advance the simulation by one step.
    ///
    /// `action` is `(action_type, amount)`: `[0, 1)` buys, `[1, 2)` sells,
    /// `[2, 3)` holds; `amount` is the fraction to trade. Out-of-range
    /// components are clamped rather than rejected.
    pub fn step(&mut self, action: (f64, f64)) -> Step {
        if self.steps_left == 0 {
            // Finished episode; nothing to trade until the caller resets.
            return Step {
                observation: self.next_observation(),
                reward: 0.0,
                done: true,
                info: self.info(),
            };
        }

        self.take_action(action);

        self.current_step += 1;
        self.steps_left -= 1;

        let reward =
            self.reward_policy
                .reward(&self.account, self.current_step, self.config.max_steps);

        let mut end_of_data = false;
        if self.steps_left == 0 {
            // Unwind the open position at the last drawn price before
            // leaving the slice.
            self.account.balance += self.account.assets_held * self.current_price;
            self.account.assets_held = 0.0;
            self.account.net_worth = self.account.balance;

            if self.config.serial {
                // The serial slice spans the whole series; exhausting it
                // means there is no fresh data to re-slice.
                end_of_data = true;
            } else {
                self.reset_session();
            }
        }

        let done = self.account.net_worth <= 0.0 || end_of_data;
        if done {
            self.log_episode_end();
        }

        Step {
            observation: self.next_observation(),
            reward,
            done,
            info: self.info(),
        }
    }

    /// Install the render collaborator used by `RenderMode::Human`.
    pub fn set_renderer(&mut self, renderer: Box<dyn Renderer>) {
        self.renderer = Some(renderer);
    }

    /// Render the current state. IO failures are logged and swallowed so a
    /// long training loop never dies on a render path.
    pub fn render(&mut self, mode: &RenderMode) {
        match mode {
            RenderMode::Human => {
                if self.current_step <= self.config.lookback_range {
                    return;
                }

                let frame = RenderFrame {
                    current_step: self.current_step,
                    net_worth: self.account.net_worth,
                    trades: &self.trades,
                    window_size: self.config.lookback_range,
                };

                if let Some(renderer) = self.renderer.as_mut() {
                    if let Err(err) = renderer.render(&frame) {
                        eprintln!("{} {err}", "render failed:".yellow());
                    }
                }
            }
            RenderMode::File(path) => {
                if let Err(err) = self.render_to_file(path) {
                    eprintln!("{} {err}", "render failed:".yellow());
                }
            }
        }
    }

    fn render_to_file(&self, path: &Path) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;

        let profit = self.account.net_worth - self.config.init_balance;
        writeln!(file, "Step: {}", self.current_step)?;
        writeln!(file, "Balance: {}", self.account.balance)?;
        writeln!(
            file,
            "Assets held: {} (Total sold: {})",
            self.account.assets_held, self.account.total_assets_sold
        )?;
        writeln!(
            file,
            "Avg cost for held assets: {} (Total sales value: {})",
            self.account.avg_cost, self.account.total_sales_value
        )?;
        writeln!(file, "Net worth: {}", self.account.net_worth)?;
        writeln!(file, "Profit: {}\n", profit)?;

        Ok(())
    }

    /// Release render resources. Ledger and session state are untouched.
    pub fn close(&mut self) {
        if let Some(mut renderer) = self.renderer.take() {
            renderer.close();
        }
    }

    fn log_episode_end(&self) {
        let profit = self.account.net_worth - self.config.init_balance;
        let profit_str = if profit >= 0.0 {
            format!("+${profit:.2}").green()
        } else {
            format!("-${:.2}", -profit).red()
        };

        println!(
            "{} at step {} - net worth {} ({}), {} trades",
            "Episode over".bright_blue(),
            self.current_step,
            format!("${:.2}", self.account.net_worth).bold(),
            profit_str,
            self.trades.len(),
        );
    }

    fn info(&self) -> HashMap<&'static str, f64> {
        let mut info = HashMap::new();
        info.insert("balance", self.account.balance);
        info.insert("net_worth", self.account.net_worth);
        info.insert("assets_held", self.account.assets_held);
        info.insert("steps_left", self.steps_left as f64);
        info
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn trades(&self) -> &[TradeRecord] {
        &self.trades
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn steps_left(&self) -> usize {
        self.steps_left
    }

    pub fn frame_start(&self) -> usize {
        self.frame_start
    }

    pub fn current_price(&self) -> f64 {
        self.current_price
    }
}
