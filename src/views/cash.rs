use crate::{
    currency::{CurrencyTable, CALC_ACCURACY},
    ledger::Ledger,
};

pub const NO_MONEY: &str = "No money left today";

/// Reports the remaining cash limit in a chosen currency.
#[derive(Debug, Clone, Default)]
pub struct CashView {
    currencies: CurrencyTable,
}

impl CashView {
    pub fn new(currencies: CurrencyTable) -> Self {
        Self { currencies }
    }

    pub fn currencies(&self) -> &CurrencyTable {
        &self.currencies
    }

    /// Unknown currency codes yield a message listing the supported ones.
    pub fn remaining_message(&self, ledger: &Ledger, currency: &str) -> String {
        let Some(entry) = self.currencies.lookup(currency) else {
            tracing::warn!(currency, "unsupported currency requested");
            return self.unsupported_message();
        };

        let remaining = ledger.get_limit_today();
        if remaining == 0.0 {
            return NO_MONEY.to_string();
        }

        let converted = entry.convert(remaining);
        // `converted` is already rounded; the precision only pads zeros.
        let precision = CALC_ACCURACY as usize;
        if remaining > 0.0 {
            format!(
                "You can still spend {converted:.precision$}{} today",
                entry.symbol
            )
        } else {
            format!("Your debt is {:.precision$}{}", converted.abs(), entry.symbol)
        }
    }

    pub fn unsupported_message(&self) -> String {
        let codes: Vec<&str> = self.currencies.codes().collect();
        format!(
            "Currency is not supported, choose one of: {}",
            codes.join(", ")
        )
    }
}
