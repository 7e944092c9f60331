use ndarray::{s, Array2, ArrayViewMut2};

use crate::account::SNAPSHOT_FIELDS;
use crate::series::Candle;

use super::env::TradingEnv;

impl TradingEnv {
    /// Rows in an observation: market channels stacked over portfolio channels.
    pub const OBSERVATION_CHANNELS: usize = Candle::CHANNELS + SNAPSHOT_FIELDS;

    /// Build the observation for the current step: the `lookback_range + 1`
    /// bars ending at the current row, plus the matching span of account
    /// history. The two blocks are min-max scaled independently; market
    /// values never share a scale with portfolio values, and the scaling is
    /// local to this window.
    pub(super) fn next_observation(&self) -> Array2<f64> {
        let window = self.config.lookback_range + 1;
        let start = self.frame_start + self.current_step - self.config.lookback_range;

        let mut obs = Array2::zeros((Self::OBSERVATION_CHANNELS, window));

        for (col, row) in self.series.rows()[start..start + window].iter().enumerate() {
            for (channel, value) in row.channels().into_iter().enumerate() {
                obs[[channel, col]] = value;
            }
        }

        for (col, snapshot) in self.account_history.tail(window).iter().enumerate() {
            for (channel, value) in snapshot.iter().enumerate() {
                obs[[Candle::CHANNELS + channel, col]] = *value;
            }
        }

        min_max_scale(obs.slice_mut(s![..Candle::CHANNELS, ..]));
        min_max_scale(obs.slice_mut(s![Candle::CHANNELS.., ..]));

        obs
    }
}

/// Scale a block to `[0, 1]` across all of its values. A constant block
/// becomes all zeros rather than dividing by zero.
fn min_max_scale(mut block: ArrayViewMut2<f64>) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &value in block.iter() {
        min = min.min(value);
        max = max.max(value);
    }

    let span = max - min;
    if span == 0.0 {
        block.fill(0.0);
        return;
    }

    block.mapv_inplace(|value| (value - min) / span);
}
