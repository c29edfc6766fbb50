use rust_decimal::Decimal;

use crate::interest::expected_return::round_money;
use crate::tracker::currency::currency_or_default;
use crate::tracker::records::InvestmentRecord;
use crate::types::Money;

/// Confirmation shown after a successful submission, e.g.
/// `At maturity (Mar 1, 2025), you would have made: 🇺🇸 USD 1,234.56`.
pub fn maturity_notice(record: &InvestmentRecord) -> String {
    let currency = currency_or_default(record.currency().unwrap_or_default());
    let code = record.currency().unwrap_or(currency.code);
    let flag = if currency.code.eq_ignore_ascii_case(code) {
        currency.flag
    } else {
        ""
    };

    let amount = format_amount(record.expected_return());
    let label = [flag, code, amount.as_str()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "At maturity ({}), you would have made: {}",
        record.end_date().format("%b %-d, %Y"),
        label
    )
}

/// Two decimal places with comma thousands separators.
pub fn format_amount(amount: Money) -> String {
    let rounded = round_money(amount);
    let negative = rounded < Decimal::ZERO;
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}.{}", if negative { "-" } else { "" }, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interest::expected_return::{InterestType, InvestmentRequest, InvestmentType};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn record(currency: Option<&str>) -> InvestmentRecord {
        let request = InvestmentRequest {
            principal: dec!(25000),
            annual_rate_percent: dec!(10),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            interest_type: InterestType::Compound,
            investment_type: InvestmentType::Annually,
        };
        InvestmentRecord::from_request(request, currency.map(str::to_string)).unwrap()
    }

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(dec!(1234567.891)), "1,234,567.89");
        assert_eq!(format_amount(dec!(100)), "100.00");
        assert_eq!(format_amount(dec!(-2500.5)), "-2,500.50");
        assert_eq!(format_amount(dec!(0)), "0.00");
    }

    #[test]
    fn test_notice_for_catalog_currency() {
        assert_eq!(
            maturity_notice(&record(Some("GBP"))),
            "At maturity (Mar 1, 2025), you would have made: 🇬🇧 GBP 2,500.00"
        );
    }

    #[test]
    fn test_notice_for_free_form_label_has_no_flag() {
        assert_eq!(
            maturity_notice(&record(Some("CHF"))),
            "At maturity (Mar 1, 2025), you would have made: CHF 2,500.00"
        );
    }

    #[test]
    fn test_notice_without_label_uses_default() {
        assert!(maturity_notice(&record(None)).ends_with("🇺🇸 USD 2,500.00"));
    }
}
