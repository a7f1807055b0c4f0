use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{clock::Clock, errors::LedgerError};

/// Text layout accepted for explicit record dates.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// One dated transaction: money spent or calories eaten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    amount: i64,
    comment: String,
    #[serde(with = "date_text")]
    date: NaiveDate,
}

impl Record {
    /// Builds a record, parsing `date` as `DD.MM.YYYY` or stamping it with
    /// `clock.today()` when absent.
    pub fn new(
        amount: i64,
        comment: impl Into<String>,
        date: Option<&str>,
        clock: &dyn Clock,
    ) -> Result<Self, LedgerError> {
        let date = match date {
            Some(text) => parse_date(text)?,
            None => clock.today(),
        };
        Ok(Self::dated(amount, comment, date))
    }

    pub fn dated(amount: i64, comment: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            comment: comment.into(),
            date,
        }
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Parses `DD.MM.YYYY`, rejecting short components and other separators.
pub fn parse_date(text: &str) -> Result<NaiveDate, LedgerError> {
    let bytes = text.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            2 | 5 => *byte == b'.',
            _ => byte.is_ascii_digit(),
        });
    if !well_formed {
        return Err(LedgerError::format(text, "expected DD.MM.YYYY"));
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|err| LedgerError::format(text, err.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

mod date_text {
    use chrono::NaiveDate;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::parse_date(&text).map_err(D::Error::custom)
    }
}
