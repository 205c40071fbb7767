//! Platform collaborators
//!
//! The balance readout lives outside the simulation; the game pushes the
//! formatted balance to it after every change and never reads anything back.

/// One-way balance readout
pub trait BalanceDisplay {
    fn show_balance(&mut self, text: &str);
}

/// Readout that writes to the log (native runner)
#[derive(Debug, Default)]
pub struct LogDisplay;

impl BalanceDisplay for LogDisplay {
    fn show_balance(&mut self, text: &str) {
        log::info!("Balance: {}", text);
    }
}

/// Readout that keeps the latest value (headless hosts, tests)
#[derive(Debug, Default, Clone)]
pub struct LatestBalance {
    pub text: String,
    pub updates: usize,
}

impl BalanceDisplay for LatestBalance {
    fn show_balance(&mut self, text: &str) {
        self.text = text.to_string();
        self.updates += 1;
    }
}
