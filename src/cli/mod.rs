//! Demo driver: fills a cash ledger and a calorie ledger with sample records
//! and prints what is left for today.

pub mod output;

use std::{env::VarError, sync::Arc};

use crate::{
    clock::{Clock, FixedClock, SystemClock},
    config::{Config, ConfigLoader},
    errors::LedgerError,
    ledger::{parse_date, Ledger, Record},
    views::{CalorieView, CashView},
};

/// Pins "today" to a `DD.MM.YYYY` date instead of the wall clock.
pub const TODAY_ENV_VAR: &str = "DAILY_BUDGET_TODAY";

pub const DEFAULT_CURRENCY: &str = "rub";

const SAMPLE_CASH: [(i64, &str, Option<&str>); 3] = [
    (145, "Shopping spree", None),
    (1568, "Weekly groceries", None),
    (691, "Taxi ride", Some("08.03.2019")),
];

const SAMPLE_CALORIES: [(i64, &str, Option<&str>); 3] = [
    (1186, "A slice of cake. And another one.", Some("24.02.2019")),
    (84, "Yogurt.", None),
    (1140, "A can of chips.", Some("24.02.2019")),
];

pub struct SampleLedgers {
    pub cash: Ledger,
    pub calories: Ledger,
}

pub fn sample_ledgers(
    config: &Config,
    clock: Arc<dyn Clock>,
) -> Result<SampleLedgers, LedgerError> {
    let mut cash = Ledger::with_clock(config.cash_limit, Arc::clone(&clock));
    for (amount, comment, date) in SAMPLE_CASH {
        cash.add_record(Record::new(amount, comment, date, clock.as_ref())?);
    }

    let mut calories = Ledger::with_clock(config.calorie_limit, Arc::clone(&clock));
    for (amount, comment, date) in SAMPLE_CALORIES {
        calories.add_record(Record::new(amount, comment, date, clock.as_ref())?);
    }

    Ok(SampleLedgers { cash, calories })
}

/// Lines printed by the demo, grouped under section titles.
pub fn report(
    config: &Config,
    ledgers: &SampleLedgers,
    currency: &str,
) -> Vec<(String, Vec<String>)> {
    let calories = &ledgers.calories;
    let cash = &ledgers.cash;
    let cash_view = CashView::new(config.currencies.clone());

    vec![
        (
            "Calories".to_string(),
            vec![
                format!("Remaining today: {}", calories.get_limit_today()),
                format!("Eaten this week: {}", calories.get_week_stats()),
                CalorieView.remaining_message(calories),
            ],
        ),
        (
            "Cash".to_string(),
            vec![
                format!("Remaining today: {}", cash.get_limit_today()),
                format!("Spent this week: {}", cash.get_week_stats()),
                cash_view.remaining_message(cash, currency),
            ],
        ),
    ]
}

fn clock_from_env() -> Result<Arc<dyn Clock>, LedgerError> {
    clock_from_var(std::env::var(TODAY_ENV_VAR))
}

fn clock_from_var(value: Result<String, VarError>) -> Result<Arc<dyn Clock>, LedgerError> {
    match value {
        Ok(text) => Ok(Arc::new(FixedClock(parse_date(&text)?))),
        Err(VarError::NotPresent) => Ok(Arc::new(SystemClock)),
        Err(VarError::NotUnicode(raw)) => Err(LedgerError::format(
            &raw.to_string_lossy(),
            format!("{TODAY_ENV_VAR} is not valid unicode"),
        )),
    }
}

/// Runs the demo. `args` excludes the program name; the first one, if any,
/// selects the currency for the cash report.
pub fn run_cli(args: &[String]) -> Result<(), LedgerError> {
    let currency = args.first().map(String::as_str).unwrap_or(DEFAULT_CURRENCY);
    let config = ConfigLoader::from_env().load()?;
    let clock = clock_from_env()?;
    tracing::debug!(currency, today = %clock.today(), "running demo");

    let ledgers = sample_ledgers(&config, clock)?;
    if config.currencies.lookup(currency).is_none() {
        output::warning(format!("unknown currency `{currency}`"));
    }
    for (title, lines) in report(&config, &ledgers, currency) {
        output::section(title);
        for line in lines {
            output::info(line);
        }
    }
    Ok(())
}
