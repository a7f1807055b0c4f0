use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Decimal digits kept after converting into a target currency.
pub const CALC_ACCURACY: u32 = 2;

/// Conversion entry: `rate` local units buy one unit of `code`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrencyRate {
    pub code: String,
    pub rate: f64,
    pub symbol: String,
}

impl CurrencyRate {
    pub fn new(code: impl Into<String>, rate: f64, symbol: impl Into<String>) -> Self {
        Self {
            code: code.into().to_lowercase(),
            rate,
            symbol: symbol.into(),
        }
    }

    /// Converts an amount in local units into this currency.
    pub fn convert(&self, amount: f64) -> f64 {
        round_to(amount / self.rate, CALC_ACCURACY)
    }
}

/// Ordered set of supported currencies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CurrencyTable {
    rates: Vec<CurrencyRate>,
}

impl CurrencyTable {
    pub fn empty() -> Self {
        Self { rates: Vec::new() }
    }

    /// Adds a currency, replacing an existing entry with the same code in place.
    pub fn insert(&mut self, rate: CurrencyRate) {
        match self.rates.iter_mut().find(|entry| entry.code == rate.code) {
            Some(existing) => *existing = rate,
            None => self.rates.push(rate),
        }
    }

    pub fn lookup(&self, code: &str) -> Option<&CurrencyRate> {
        self.rates.iter().find(|entry| entry.code == code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.rates.iter().map(|entry| entry.code.as_str())
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for CurrencyTable {
    fn default() -> Self {
        Self {
            rates: vec![
                CurrencyRate::new("usd", 93.0, "$"),
                CurrencyRate::new("eur", 102.1, "€"),
                CurrencyRate::new("rub", 1.0, "₽"),
            ],
        }
    }
}

/// Rounds the exact binary value of `value` to `digits` decimals, ties to even.
/// NaN, infinities and magnitudes beyond `Decimal` come back unchanged.
pub fn round_to(value: f64, digits: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|exact| {
            exact.round_dp_with_strategy(digits, RoundingStrategy::MidpointNearestEven)
        })
        .and_then(|rounded| rounded.to_f64())
        .unwrap_or(value)
}
