#![doc(test(attr(deny(warnings))))]

//! Daily Budget tracks dated spending or calorie records against a daily
//! limit and reports what is left for today.

pub mod cli;
pub mod clock;
pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod utils;
pub mod views;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Daily Budget tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
