use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::TrackerError;
use crate::time::{Clock, SystemClock};

/// Textual date format accepted by [`Record::new`].
pub const RECORD_DATE_FORMAT: &str = "%d.%m.%Y";

/// One dated expenditure entry. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    amount: f64,
    comment: String,
    date: NaiveDate,
}

impl Record {
    /// Builds a record dated `date` (`DD.MM.YYYY`), or today by the system clock.
    pub fn new(
        amount: f64,
        comment: impl Into<String>,
        date: Option<&str>,
    ) -> Result<Self, TrackerError> {
        Self::with_clock(amount, comment, date, &SystemClock)
    }

    /// Same as [`Record::new`] but takes "today" from `clock`.
    pub fn with_clock(
        amount: f64,
        comment: impl Into<String>,
        date: Option<&str>,
        clock: &dyn Clock,
    ) -> Result<Self, TrackerError> {
        let date = match date {
            Some(raw) => parse_date(raw)?,
            None => clock.today(),
        };
        Ok(Self::on(amount, comment, date))
    }

    pub fn on(amount: f64, comment: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            comment: comment.into(),
            date,
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Запись содержит: количество - {}, дата - {}, комментарий - {}.",
            self.amount, self.date, self.comment
        )
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, TrackerError> {
    NaiveDate::parse_from_str(raw, RECORD_DATE_FORMAT).map_err(|source| TrackerError::DateParse {
        input: raw.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;

    #[test]
    fn parses_day_month_year() {
        let record = Record::new(145.0, "Безудержный шопинг", Some("15.03.2024")).unwrap();
        assert_eq!(record.date(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn missing_date_uses_clock() {
        let today = NaiveDate::from_ymd_opt(2019, 3, 8).unwrap();
        let record =
            Record::with_clock(300.0, "Шоколад", None, &FixedClock::new(today)).unwrap();
        assert_eq!(record.date(), today);
    }

    #[test]
    fn rejects_other_formats() {
        for raw in ["2024-03-15", "15/03/2024", "32.01.2024", ""] {
            let err = Record::new(1.0, "bad", Some(raw)).unwrap_err();
            assert!(
                matches!(&err, TrackerError::DateParse { input, .. } if input == raw),
                "{raw} should fail to parse"
            );
        }
    }

    #[test]
    fn display_uses_iso_date() {
        let record = Record::on(
            1186.0,
            "Кафе",
            NaiveDate::from_ymd_opt(2019, 2, 24).unwrap(),
        );
        assert_eq!(
            record.to_string(),
            "Запись содержит: количество - 1186, дата - 2019-02-24, комментарий - Кафе."
        );
    }
}
