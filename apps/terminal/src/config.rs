//! # Terminal Configuration
//!
//! Display configuration loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TALLY_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization; no mutex needed.

use tally_core::Money;

/// Terminal display configuration.
#[derive(Debug, Clone)]
pub struct TerminalConfig {
    /// Store name shown in the session banner and on receipts.
    pub store_name: String,

    /// Currency symbol (display only).
    pub currency_symbol: String,

    /// Number of decimal places for currency.
    pub currency_decimals: u8,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        TerminalConfig {
            store_name: "Tally POS Counter".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
        }
    }
}

impl TerminalConfig {
    /// Creates a config from environment variables over the defaults.
    ///
    /// ## Environment Variables
    /// - `TALLY_STORE_NAME`: override the store name
    /// - `TALLY_CURRENCY_SYMBOL`: override the currency symbol
    pub fn from_env() -> Self {
        let mut config = TerminalConfig::default();

        if let Ok(store_name) = std::env::var("TALLY_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(symbol) = std::env::var("TALLY_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Formats a money amount as a display string.
    ///
    /// ```rust
    /// use tally_core::Money;
    /// use tally_terminal::config::TerminalConfig;
    ///
    /// let config = TerminalConfig::default();
    /// assert_eq!(config.format_money(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        let divisor = 10_i64.pow(u32::from(self.currency_decimals));
        let cents = amount.cents();
        let whole = (cents / divisor).abs();
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!("{}.{:0width$}", whole, frac, width = self.currency_decimals as usize)
            } else {
                whole.to_string()
            }
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
