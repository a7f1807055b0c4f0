use crate::ledger::Ledger;

pub const STOP_EATING: &str = "Stop eating!";

/// Calorie advice for the current day.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalorieView;

impl CalorieView {
    pub fn remaining_message(&self, ledger: &Ledger) -> String {
        let remaining = ledger.get_limit_today();
        if remaining > 0.0 {
            format!("You may still eat {remaining} kcal today")
        } else {
            STOP_EATING.to_string()
        }
    }
}
