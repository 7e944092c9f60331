use rand::Rng;

use crate::account::{TradeRecord, TradeSide};

use super::env::TradingEnv;

impl TradingEnv {
    /// Execute one action against a price drawn inside the current bar,
    /// then snapshot the ledger.
    pub(super) fn take_action(&mut self, action: (f64, f64)) {
        let row = self.series[self.frame_start + self.current_step];

        // Intrabar execution uncertainty: any price between open and close,
        // not the close itself.
        let (low, high) = if row.open <= row.close {
            (row.open, row.close)
        } else {
            (row.close, row.open)
        };
        self.current_price = self.rng.gen_range(low..=high);

        // Out-of-range action components are clamped, never rejected.
        let action_type = action.0.clamp(0.0, 3.0);
        let amount = action.1.clamp(0.0, 1.0);

        if action_type < 1.0 {
            self.buy(amount);
        } else if action_type < 2.0 {
            self.sell(amount);
        }

        self.account.net_worth =
            self.account.balance + self.account.assets_held * self.current_price;
        self.account_history.push(self.account.snapshot());
    }

    /// Buy `amount` of what the balance can afford. Buys are floored to
    /// whole units; sells are not. The asymmetry is intentional
    /// (whole-share buying).
    fn buy(&mut self, amount: f64) {
        let total_possible = (self.account.balance / self.current_price).max(0.0).floor();
        let assets_bought = (total_possible * amount).floor();
        let buying_cost =
            assets_bought * self.current_price * (1.0 + self.config.transaction_cost_rate);
        self.account.balance -= buying_cost;

        let prev_cost = self.account.avg_cost * self.account.assets_held;
        let held = self.account.assets_held + assets_bought;
        self.account.avg_cost = if held > 0.0 {
            (prev_cost + buying_cost) / held
        } else {
            0.0
        };
        self.account.assets_held = held;

        if assets_bought > 0.0 {
            self.trades.push(TradeRecord {
                step: self.frame_start + self.current_step,
                assets: assets_bought,
                total: buying_cost,
                side: TradeSide::Buy,
            });
        }
    }

    /// Sell `amount` of the held units. Fractional quantities are allowed.
    fn sell(&mut self, amount: f64) {
        let assets_sold = self.account.assets_held * amount;
        let sales = assets_sold * self.current_price * (1.0 - self.config.transaction_cost_rate);

        self.account.balance += sales;
        self.account.assets_held -= assets_sold;
        self.account.total_assets_sold += assets_sold;
        self.account.total_sales_value += sales;

        if assets_sold > 0.0 {
            self.trades.push(TradeRecord {
                step: self.frame_start + self.current_step,
                assets: assets_sold,
                total: sales,
                side: TradeSide::Sell,
            });
        }
    }
}
