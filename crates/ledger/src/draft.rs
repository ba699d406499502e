//! Transaction validator: turns an untrusted payload into a store-ready
//! draft, or rejects it with a specific reason.
//!
//! Validation always runs before any write, so a rejected payload never
//! touches the database.

use chrono::NaiveDate;

use crate::{LedgerError, MoneyCents, records::RecordKind};

/// Category applied when the payload omits one or sends blanks.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Amount as it arrives from the outside: clients send either a JSON number
/// or a decimal string.
#[derive(Clone, Debug, PartialEq)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

/// Untrusted input for a new record. Every field is optional here; the
/// validator decides what is missing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordPayload {
    pub description: Option<String>,
    pub amount: Option<AmountInput>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub kind: Option<String>,
}

/// A fully validated record, ready for the store (no id yet).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordDraft {
    pub description: String,
    pub amount: MoneyCents,
    pub category: String,
    pub date: NaiveDate,
    pub kind: RecordKind,
}

impl RecordDraft {
    /// Validates a payload field by field.
    ///
    /// Error messages are part of the API contract:
    /// `"missing description"`, `"invalid amount"`, `"invalid date format"`,
    /// `"invalid type"`.
    pub fn from_payload(payload: &RecordPayload) -> Result<Self, LedgerError> {
        let description = payload
            .description
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| LedgerError::Validation("missing description".to_string()))?
            .to_string();

        let amount = parse_amount(payload.amount.as_ref())?;

        let category = match payload.category.as_deref().map(str::trim) {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => DEFAULT_CATEGORY.to_string(),
        };

        let date = payload
            .date
            .as_deref()
            .ok_or_else(invalid_date)
            .and_then(parse_date)?;

        let kind = payload
            .kind
            .as_deref()
            .ok_or_else(|| LedgerError::Validation("invalid type".to_string()))
            .and_then(RecordKind::try_from)?;

        Ok(Self {
            description,
            amount,
            category,
            date,
            kind,
        })
    }
}

fn invalid_amount() -> LedgerError {
    LedgerError::Validation("invalid amount".to_string())
}

fn invalid_date() -> LedgerError {
    LedgerError::Validation("invalid date format".to_string())
}

fn parse_amount(input: Option<&AmountInput>) -> Result<MoneyCents, LedgerError> {
    let amount = match input {
        None => return Err(invalid_amount()),
        Some(AmountInput::Number(n)) => MoneyCents::from_units(*n)?,
        Some(AmountInput::Text(s)) => s.parse().map_err(|_| invalid_amount())?,
    };

    if !amount.is_positive() {
        return Err(invalid_amount());
    }
    Ok(amount)
}

/// Parses a calendar date from one of the two accepted textual forms.
///
/// ISO `YYYY-MM-DD` is tried first; the fallback is day-first `DD/MM/YYYY`,
/// interpreted strictly as day/month/year. Impossible dates (day 32,
/// month 13) are rejected in either form.
fn parse_date(input: &str) -> Result<NaiveDate, LedgerError> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }

    let mut parts = input.split('/');
    let (Some(day), Some(month), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid_date());
    };

    let day: u32 = day.parse().map_err(|_| invalid_date())?;
    let month: u32 = month.parse().map_err(|_| invalid_date())?;
    let year: i32 = year.parse().map_err(|_| invalid_date())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid_date)
}
