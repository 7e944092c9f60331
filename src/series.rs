use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One OHLCV bar. `date` is the identifying column and never enters the
/// observation; the remaining five fields are the market channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    /// Number of numeric market channels per bar.
    pub const CHANNELS: usize = 5;

    pub fn channels(&self) -> [f64; Self::CHANNELS] {
        [self.open, self.high, self.low, self.close, self.volume]
    }
}

/// Date-ascending series of bars, immutable once constructed.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    rows: Vec<Candle>,
}

impl PriceSeries {
    /// Rejects rows that are not sorted by date ascending.
    pub fn new(rows: Vec<Candle>) -> Result<Self, ConfigError> {
        if rows.windows(2).any(|pair| pair[0].date > pair[1].date) {
            return Err(ConfigError::UnsortedSeries);
        }

        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Candle] {
        &self.rows
    }
}

impl std::ops::Index<usize> for PriceSeries {
    type Output = Candle;

    fn index(&self, index: usize) -> &Candle {
        &self.rows[index]
    }
}
