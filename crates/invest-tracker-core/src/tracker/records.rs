use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::interest::expected_return::{
    expected_return, InterestType, InvestmentRequest, InvestmentType,
};
use crate::time_value::amount_overflow;
use crate::types::{Money, Percent};
use crate::TrackerResult;

/// A submitted investment with its expected return fixed at submission time.
///
/// Fields are private so the return can never drift from the request it was
/// computed for; there is no update path. Deserializing a record takes the
/// stored `expected_return` as given, so only feed back records that
/// [`InvestmentRecord::from_request`] produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRecord {
    #[serde(flatten)]
    request: InvestmentRequest,
    expected_return: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    currency: Option<String>,
}

impl InvestmentRecord {
    /// Compute the expected return once and attach it to the request.
    pub fn from_request(
        request: InvestmentRequest,
        currency: Option<String>,
    ) -> TrackerResult<Self> {
        let expected_return = expected_return(&request)?;
        Ok(Self {
            request,
            expected_return,
            currency,
        })
    }

    pub fn principal(&self) -> Money {
        self.request.principal
    }

    pub fn annual_rate_percent(&self) -> Percent {
        self.request.annual_rate_percent
    }

    pub fn start_date(&self) -> NaiveDate {
        self.request.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.request.end_date
    }

    pub fn interest_type(&self) -> InterestType {
        self.request.interest_type
    }

    pub fn investment_type(&self) -> InvestmentType {
        self.request.investment_type
    }

    pub fn expected_return(&self) -> Money {
        self.expected_return
    }

    /// Free-form display label; carries no conversion semantics.
    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    pub fn maturity_value(&self) -> TrackerResult<Money> {
        self.request
            .principal
            .checked_add(self.expected_return)
            .ok_or_else(|| amount_overflow("maturity value"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> InvestmentRequest {
        InvestmentRequest {
            principal: dec!(1000),
            annual_rate_percent: dec!(10),
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            interest_type: InterestType::Simple,
            investment_type: InvestmentType::Annually,
        }
    }

    #[test]
    fn test_record_carries_computed_return() {
        let record = InvestmentRecord::from_request(sample(), Some("EUR".into())).unwrap();
        assert_eq!(record.expected_return(), dec!(100));
        assert_eq!(record.maturity_value().unwrap(), dec!(1100));
        assert_eq!(record.currency(), Some("EUR"));
    }

    #[test]
    fn test_record_serializes_flat() {
        let record = InvestmentRecord::from_request(sample(), None).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["principal"], "1000");
        assert_eq!(value["interest_type"], "simple");
        assert_eq!(value["start_date"], "2023-01-01");
        assert!(value.get("currency").is_none());
    }
}
