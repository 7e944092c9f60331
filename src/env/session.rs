use rand::Rng;

use super::env::TradingEnv;

impl TradingEnv {
    /// Pick the next contiguous slice of the series to traverse.
    ///
    /// Serial mode always walks the full series from the first row that has
    /// a complete lookback behind it. Randomized mode draws the slice length
    /// and start from the owned rng, keeping
    /// `frame_start - lookback >= 0` and `frame_start + steps_left <= len`.
    pub(super) fn reset_session(&mut self) {
        self.current_step = 0;

        let len = self.series.len();
        let lookback = self.config.lookback_range;

        if self.config.serial {
            self.steps_left = len - lookback - 1;
            self.frame_start = lookback;
        } else {
            // Cap the draw so a start position always exists.
            self.steps_left = self.rng.gen_range(len / 2..len).min(len - lookback - 1);
            self.frame_start = self.rng.gen_range(lookback..len - self.steps_left);
        }
    }
}
