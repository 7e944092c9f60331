use serde::Serialize;

/// Number of portfolio channels recorded per step, stacked under the market
/// channels in the observation.
pub const SNAPSHOT_FIELDS: usize = 5;

/// Account ledger. Mutated only by trade execution and rollover liquidation.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    /// Cash balance. May go negative, which terminates the episode.
    pub balance: f64,
    pub assets_held: f64,
    /// Weighted average purchase price of the units currently held.
    pub avg_cost: f64,
    pub total_assets_sold: f64,
    pub total_sales_value: f64,
    /// `balance + assets_held * current_price`, recomputed every step.
    pub net_worth: f64,
}

impl Account {
    pub fn new(init_balance: f64) -> Self {
        Self {
            balance: init_balance,
            assets_held: 0.0,
            avg_cost: 0.0,
            total_assets_sold: 0.0,
            total_sales_value: 0.0,
            net_worth: init_balance,
        }
    }

    pub fn snapshot(&self) -> [f64; SNAPSHOT_FIELDS] {
        [
            self.net_worth,
            self.assets_held,
            self.avg_cost,
            self.total_assets_sold,
            self.total_sales_value,
        ]
    }
}

/// Append-only per-episode snapshots of the ledger, oldest first.
#[derive(Debug, Clone, Default)]
pub struct AccountHistory {
    snapshots: Vec<[f64; SNAPSHOT_FIELDS]>,
}

impl AccountHistory {
    /// Seed the history with repeated copies of the initial state so the
    /// first observation window is already full.
    pub fn seeded(initial: [f64; SNAPSHOT_FIELDS], copies: usize) -> Self {
        Self {
            snapshots: vec![initial; copies],
        }
    }

    pub fn push(&mut self, snapshot: [f64; SNAPSHOT_FIELDS]) {
        self.snapshots.push(snapshot);
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The most recent `count` snapshots, oldest first.
    pub fn tail(&self, count: usize) -> &[[f64; SNAPSHOT_FIELDS]] {
        let start = self.snapshots.len().saturating_sub(count);
        &self.snapshots[start..]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

/// An executed trade. Recorded only when the executed quantity is positive.
#[derive(Debug, Clone, Serialize)]
pub struct TradeRecord {
    /// Absolute index into the price series at execution time.
    pub step: usize,
    pub assets: f64,
    pub total: f64,
    pub side: TradeSide,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_account_is_all_cash() {
        let account = Account::new(10_000.0);

        assert_eq!(account.balance, 10_000.0);
        assert_eq!(account.assets_held, 0.0);
        assert_eq!(account.net_worth, 10_000.0);
        assert_eq!(account.snapshot(), [10_000.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn seeded_history_repeats_initial_state() {
        let history = AccountHistory::seeded([1.0, 2.0, 3.0, 4.0, 5.0], 6);

        assert_eq!(history.len(), 6);
        assert!(history.tail(6).iter().all(|s| *s == [1.0, 2.0, 3.0, 4.0, 5.0]));
    }

    #[test]
    fn tail_returns_most_recent_in_order() {
        let mut history = AccountHistory::seeded([0.0; SNAPSHOT_FIELDS], 3);
        history.push([1.0, 0.0, 0.0, 0.0, 0.0]);
        history.push([2.0, 0.0, 0.0, 0.0, 0.0]);

        let tail = history.tail(2);
        assert_eq!(tail[0][0], 1.0);
        assert_eq!(tail[1][0], 2.0);
    }

    #[test]
    fn tail_saturates_when_short() {
        let history = AccountHistory::seeded([0.0; SNAPSHOT_FIELDS], 2);
        assert_eq!(history.tail(10).len(), 2);
    }
}
