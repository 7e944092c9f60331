use chrono::{Days, NaiveDate};

use crate::config::EnvConfig;
use crate::env::RewardKind;
use crate::series::{Candle, PriceSeries};

pub fn config(lookback_range: usize, serial: bool) -> EnvConfig {
    EnvConfig {
        max_steps: 100,
        init_balance: 10_000.0,
        lookback_range,
        transaction_cost_rate: 0.0,
        serial,
        reward: RewardKind::TimeDecayedBalance,
    }
}

fn date(day_offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Days::new(day_offset)
}

/// Bars with `open == close` pin the intrabar price draw, making trade
/// arithmetic deterministic regardless of the seed.
pub fn flat_series(len: usize, price: f64) -> PriceSeries {
    series_of(&vec![price; len])
}

/// One flat bar per given price.
pub fn series_of(prices: &[f64]) -> PriceSeries {
    let rows = prices
        .iter()
        .enumerate()
        .map(|(index, &price)| Candle {
            date: date(index as u64),
            open: price,
            high: price,
            low: price,
            close: price,
            volume: 1_000.0,
        })
        .collect();

    PriceSeries::new(rows).unwrap()
}

/// A drifting, non-constant series with intrabar ranges and varying volume.
pub fn varied_series(len: usize) -> PriceSeries {
    let rows = (0..len)
        .map(|index| {
            let base = 100.0 + (index as f64 * 0.7).sin() * 10.0 + index as f64 * 0.1;
            Candle {
                date: date(index as u64),
                open: base,
                high: base + 2.0,
                low: base - 2.0,
                close: base + (index as f64 * 1.3).cos(),
                volume: 1_000.0 + (index % 7) as f64 * 250.0,
            }
        })
        .collect();

    PriceSeries::new(rows).unwrap()
}
