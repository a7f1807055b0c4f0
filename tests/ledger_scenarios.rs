mod common;

use chrono::Duration;
use common::{date, ledger_on};
use daily_budget::{
    currency::CurrencyTable,
    errors::LedgerError,
    ledger::{format_date, parse_date, Record},
    views::{calories::STOP_EATING, cash::NO_MONEY, CalorieView, CashView},
};

#[test]
fn calorie_day_with_old_records() {
    let today = date(19, 10, 2026);
    let (mut ledger, clock) = ledger_on(today, 3000.0);
    ledger.add_record(Record::new(1186, "Cake", Some("24.02.2019"), clock.as_ref()).unwrap());
    ledger.add_record(Record::new(84, "Yogurt", None, clock.as_ref()).unwrap());
    ledger.add_record(Record::new(1140, "Chips", Some("24.02.2019"), clock.as_ref()).unwrap());

    assert_eq!(ledger.get_today_stats(), 84);
    assert_eq!(ledger.get_week_stats(), 84);
    assert_eq!(ledger.get_limit_today(), 2916.0);
    assert_eq!(
        CalorieView.remaining_message(&ledger),
        "You may still eat 2916 kcal today"
    );
}

#[test]
fn spent_exactly_the_limit() {
    let (mut ledger, clock) = ledger_on(date(8, 3, 2019), 3000.0);
    for amount in [1000, 1500, 500] {
        ledger.add_record(Record::new(amount, "spend", None, clock.as_ref()).unwrap());
    }
    assert_eq!(ledger.get_limit_today(), 0.0);

    let view = CashView::new(CurrencyTable::default());
    for code in ["usd", "eur", "rub"] {
        assert_eq!(view.remaining_message(&ledger, code), NO_MONEY);
    }
    assert_eq!(CalorieView.remaining_message(&ledger), STOP_EATING);
}

#[test]
fn unsupported_currency_is_a_message() {
    let (ledger, _) = ledger_on(date(8, 3, 2019), 3000.0);
    let message = CashView::default().remaining_message(&ledger, "gbp");
    assert!(message.starts_with("Currency is not supported"));
    assert!(message.contains("usd, eur, rub"));
}

#[test]
fn overspending_reports_debt_magnitude() {
    let (mut ledger, clock) = ledger_on(date(8, 3, 2019), 100.0);
    ledger.add_record(Record::new(150, "Dinner", None, clock.as_ref()).unwrap());
    assert_eq!(ledger.get_limit_today(), -50.0);

    let view = CashView::default();
    assert_eq!(view.remaining_message(&ledger, "rub"), "Your debt is 50.00₽");
    assert_eq!(view.remaining_message(&ledger, "usd"), "Your debt is 0.54$");
}

#[test]
fn week_boundary() {
    let today = date(1, 3, 2019);
    let (mut ledger, _) = ledger_on(today, 0.0);
    ledger.add_record(Record::dated(7, "edge", today - Duration::days(7)));
    ledger.add_record(Record::dated(8, "outside", today - Duration::days(8)));
    assert_eq!(ledger.get_week_stats(), 7);
    assert_eq!(ledger.get_today_stats(), 0);
    assert_eq!(ledger.get_limit_today(), 0.0);
}

#[test]
fn record_date_is_captured_at_construction() {
    let (mut ledger, clock) = ledger_on(date(8, 3, 2019), 500.0);
    let record = Record::new(200, "Lunch", None, clock.as_ref()).unwrap();

    let (mut later, _) = ledger_on(date(9, 3, 2019), 500.0);
    ledger.add_record(record.clone());
    later.add_record(record);

    assert_eq!(ledger.get_today_stats(), 200);
    assert_eq!(later.get_today_stats(), 0);
    assert_eq!(later.get_week_stats(), 200);
}

#[test]
fn bad_date_text_fails_construction() {
    let (_, clock) = ledger_on(date(8, 3, 2019), 500.0);
    let err = Record::new(10, "Taxi", Some("31.04.2019"), clock.as_ref()).unwrap_err();
    assert!(matches!(err, LedgerError::Format { .. }));
}

#[test]
fn date_text_round_trip_across_a_year() {
    let mut day = date(1, 1, 2024);
    while day < date(1, 1, 2025) {
        let text = format_date(day);
        assert_eq!(format_date(parse_date(&text).unwrap()), text);
        day += Duration::days(1);
    }
}
