//! Caller-side validation that turns raw form input into a calculator request.
//!
//! The calculator assumes clean input. Everything that can go wrong with user
//! input (blank or non-numeric amounts, missing dates, reversed dates) is
//! rejected here, before a record is created.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use tracing::debug;

use crate::error::TrackerError;
use crate::interest::expected_return::{InterestType, InvestmentRequest, InvestmentType};
use crate::tracker::currency::default_currency;
use crate::tracker::records::InvestmentRecord;
use crate::tracker::store::InvestmentStore;
use crate::TrackerResult;

/// Length of the term filled in for `annually` submissions.
pub const ANNUAL_TERM_DAYS: u64 = 365;

/// Raw submission as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentForm {
    #[serde(deserialize_with = "text_or_number")]
    pub principal: String,
    #[serde(deserialize_with = "text_or_number")]
    pub rate: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub interest_type: InterestType,
    #[serde(default)]
    pub investment_type: InvestmentType,
    #[serde(default)]
    pub currency: Option<String>,
}

impl InvestmentForm {
    /// A blank form: compound, annually, default currency, and a one-year
    /// term starting `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            principal: String::new(),
            rate: String::new(),
            start_date: Some(today),
            end_date: today.checked_add_days(Days::new(ANNUAL_TERM_DAYS)),
            interest_type: InterestType::Compound,
            investment_type: InvestmentType::Annually,
            currency: Some(default_currency().code.to_string()),
        }
    }

    /// Restore every field to its blank-form value.
    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    /// Change the start date; annual terms keep their one-year length.
    pub fn set_start_date(&mut self, start: NaiveDate) {
        self.start_date = Some(start);
        if self.investment_type == InvestmentType::Annually {
            self.end_date = annual_end_date(start);
        }
    }

    /// Switch mode; switching to `annually` re-derives a one-year end date.
    pub fn set_investment_type(&mut self, investment_type: InvestmentType) {
        self.investment_type = investment_type;
        if investment_type == InvestmentType::Annually {
            if let Some(start) = self.start_date {
                self.end_date = annual_end_date(start);
            }
        }
    }

    /// Parse and check every field, producing a request the calculator can
    /// take without further checks.
    pub fn validate(&self) -> TrackerResult<InvestmentRequest> {
        let principal = parse_amount("principal", &self.principal)?;
        if principal < Decimal::ZERO {
            return Err(TrackerError::InvalidInput {
                field: "principal".into(),
                reason: "Principal must be >= 0".into(),
            });
        }
        let annual_rate_percent = parse_amount("rate", &self.rate)?;

        let (start_date, end_date) = self.resolve_dates()?;
        if end_date < start_date {
            return Err(TrackerError::DateError(format!(
                "end date {end_date} precedes start date {start_date}"
            )));
        }

        Ok(InvestmentRequest {
            principal,
            annual_rate_percent,
            start_date,
            end_date,
            interest_type: self.interest_type,
            investment_type: self.investment_type,
        })
    }

    /// Validate and compute, producing the record a store would hold.
    pub fn to_record(&self) -> TrackerResult<InvestmentRecord> {
        let request = self.validate()?;
        InvestmentRecord::from_request(request, self.currency_label())
    }

    fn resolve_dates(&self) -> TrackerResult<(NaiveDate, NaiveDate)> {
        let start = self.start_date.ok_or_else(|| TrackerError::MissingField {
            field: "start_date".into(),
            reason: "Select a start date".into(),
        })?;

        match (self.investment_type, self.end_date) {
            (_, Some(end)) => Ok((start, end)),
            (InvestmentType::Annually, None) => {
                let end = annual_end_date(start).ok_or_else(|| {
                    TrackerError::DateError(format!("no date one year after {start}"))
                })?;
                Ok((start, end))
            }
            (InvestmentType::Daily, None) => Err(TrackerError::MissingField {
                field: "end_date".into(),
                reason: "Daily investments need an explicit end date".into(),
            }),
        }
    }

    fn currency_label(&self) -> Option<String> {
        self.currency
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
    }
}

/// Validate `form`, compute its return, and append the record to `store`.
pub fn submit<'a>(
    form: &InvestmentForm,
    store: &'a mut InvestmentStore,
) -> TrackerResult<&'a InvestmentRecord> {
    let record = form.to_record()?;
    debug!(expected_return = %record.expected_return(), "investment submitted");
    Ok(store.append(record))
}

fn annual_end_date(start: NaiveDate) -> Option<NaiveDate> {
    start.checked_add_days(Days::new(ANNUAL_TERM_DAYS))
}

fn parse_amount(field: &str, raw: &str) -> TrackerResult<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::MissingField {
            field: field.into(),
            reason: "A value is required".into(),
        });
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| TrackerError::InvalidInput {
            field: field.into(),
            reason: format!("'{trimmed}' is not a number"),
        })
}

/// Accept either a JSON string or a JSON number for a text field.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
