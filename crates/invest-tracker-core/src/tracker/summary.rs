use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::time_value::amount_overflow;
use crate::tracker::currency::default_currency;
use crate::tracker::records::InvestmentRecord;
use crate::types::Money;
use crate::TrackerResult;

/// Totals for every record sharing one currency label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencySummary {
    pub currency: String,
    pub count: usize,
    pub total_principal: Money,
    pub total_expected_return: Money,
    pub total_maturity_value: Money,
}

/// Aggregate records per currency label, ordered by label.
///
/// Labels are never converted, so amounts in different currencies are kept in
/// separate rows. Records without a label count under the default currency.
pub fn summarize(records: &[InvestmentRecord]) -> TrackerResult<Vec<CurrencySummary>> {
    let mut groups: BTreeMap<String, CurrencySummary> = BTreeMap::new();

    for record in records {
        let label = record
            .currency()
            .unwrap_or(default_currency().code)
            .to_ascii_uppercase();
        let entry = groups
            .entry(label.clone())
            .or_insert_with(|| CurrencySummary {
                currency: label,
                count: 0,
                total_principal: Decimal::ZERO,
                total_expected_return: Decimal::ZERO,
                total_maturity_value: Decimal::ZERO,
            });
        entry.count += 1;
        entry.total_principal = checked_total(entry.total_principal, record.principal())?;
        entry.total_expected_return =
            checked_total(entry.total_expected_return, record.expected_return())?;
        entry.total_maturity_value =
            checked_total(entry.total_maturity_value, record.maturity_value()?)?;
    }

    Ok(groups.into_values().collect())
}

fn checked_total(total: Money, amount: Money) -> TrackerResult<Money> {
    total
        .checked_add(amount)
        .ok_or_else(|| amount_overflow("currency total"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interest::expected_return::{InterestType, InvestmentRequest, InvestmentType};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn record(principal: Decimal, currency: Option<&str>) -> InvestmentRecord {
        let request = InvestmentRequest {
            principal,
            annual_rate_percent: dec!(10),
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            interest_type: InterestType::Simple,
            investment_type: InvestmentType::Annually,
        };
        InvestmentRecord::from_request(request, currency.map(str::to_string)).unwrap()
    }

    #[test]
    fn test_summary_groups_by_label() {
        let records = vec![
            record(dec!(1000), Some("USD")),
            record(dec!(500), Some("EUR")),
            record(dec!(2000), None),
            record(dec!(100), Some("eur")),
        ];
        let summary = summarize(&records).unwrap();
        assert_eq!(
            summary,
            vec![
                CurrencySummary {
                    currency: "EUR".into(),
                    count: 2,
                    total_principal: dec!(600),
                    total_expected_return: dec!(60),
                    total_maturity_value: dec!(660),
                },
                CurrencySummary {
                    currency: "USD".into(),
                    count: 2,
                    total_principal: dec!(3000),
                    total_expected_return: dec!(300),
                    total_maturity_value: dec!(3300),
                },
            ]
        );
    }

    #[test]
    fn test_summary_total_overflow_is_error() {
        let big = Decimal::MAX / dec!(2);
        let records = vec![record(big, Some("USD")), record(big, Some("USD"))];
        assert!(matches!(
            summarize(&records),
            Err(crate::error::TrackerError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_summary_of_nothing_is_empty() {
        assert!(summarize(&[]).unwrap().is_empty());
    }
}
