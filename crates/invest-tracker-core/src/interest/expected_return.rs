use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;
use tracing::debug;

use crate::error::TrackerError;
use crate::time_value::{amount_overflow, growth_factor, maturity_days, years_from_days};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Rate, Years};
use crate::TrackerResult;

/// Decimal places kept on every expected return.
pub const RETURN_DP: u32 = 2;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// How interest accrues over the term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestType {
    /// Linear growth: `P * r * t`.
    Simple,
    /// Exponential growth: `P * (1 + r)^t - P`.
    #[default]
    Compound,
}

/// The time unit the rate is applied over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentType {
    /// Rate applies per day; the exponent/multiplier is the raw day count.
    Daily,
    /// Rate applies per 365-day year; the exponent/multiplier is days / 365.
    #[default]
    Annually,
}

impl fmt::Display for InterestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterestType::Simple => write!(f, "simple"),
            InterestType::Compound => write!(f, "compound"),
        }
    }
}

impl FromStr for InterestType {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(InterestType::Simple),
            "compound" => Ok(InterestType::Compound),
            other => Err(TrackerError::InvalidInput {
                field: "interest_type".into(),
                reason: format!("expected 'simple' or 'compound', got '{other}'"),
            }),
        }
    }
}

impl fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvestmentType::Daily => write!(f, "daily"),
            InvestmentType::Annually => write!(f, "annually"),
        }
    }
}

impl FromStr for InvestmentType {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(InvestmentType::Daily),
            "annually" | "annual" => Ok(InvestmentType::Annually),
            other => Err(TrackerError::InvalidInput {
                field: "investment_type".into(),
                reason: format!("expected 'daily' or 'annually', got '{other}'"),
            }),
        }
    }
}

/// A validated request for an expected-return calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRequest {
    pub principal: Money,
    /// Percentage, e.g. 5 means 5%.
    pub annual_rate_percent: Percent,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub interest_type: InterestType,
    #[serde(default)]
    pub investment_type: InvestmentType,
}

/// Breakdown returned alongside the expected return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedReturnOutput {
    pub days: i64,
    pub years: Years,
    /// Exponent (compound) or multiplier (simple) actually applied.
    pub time_unit: Decimal,
    pub rate_fraction: Rate,
    pub expected_return: Money,
    pub maturity_value: Money,
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// Expected return of `request`, rounded to two decimal places.
///
/// `days` is the whole-day distance between the two dates and a year is a
/// fixed 365 days. `annually` uses years as the time unit, `daily` uses the
/// raw day count. Deterministic and side-effect free.
pub fn expected_return(request: &InvestmentRequest) -> TrackerResult<Money> {
    Ok(compute(request)?.expected_return)
}

/// Same figure as [`expected_return`], wrapped in the standard output
/// envelope with the day count, exponent, and maturity value.
pub fn calculate_expected_return(
    request: &InvestmentRequest,
) -> TrackerResult<ComputationOutput<ExpectedReturnOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let output = compute(request)?;

    if output.days == 0 {
        warnings.push("Start and end dates coincide; expected return is zero".into());
    }
    if request.investment_type == InvestmentType::Daily && request.annual_rate_percent > dec!(1)
    {
        warnings.push(format!(
            "Daily mode applies {}% per day over {} days",
            request.annual_rate_percent, output.days
        ));
    }

    let methodology = match (request.interest_type, request.investment_type) {
        (InterestType::Compound, InvestmentType::Annually) => {
            "Compound interest, P*(1+r)^(days/365) - P"
        }
        (InterestType::Compound, InvestmentType::Daily) => "Compound interest, P*(1+r)^days - P",
        (InterestType::Simple, InvestmentType::Annually) => "Simple interest, P*r*(days/365)",
        (InterestType::Simple, InvestmentType::Daily) => "Simple interest, P*r*days",
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        methodology,
        &serde_json::json!({
            "day_count": "actual calendar days",
            "year_length_days": 365,
            "rounding": "2dp, midpoint away from zero",
            "rate_input": "percent",
        }),
        warnings,
        elapsed,
        output,
    ))
}

fn compute(request: &InvestmentRequest) -> TrackerResult<ExpectedReturnOutput> {
    validate(request)?;

    let principal = request.principal;
    let rate = request.annual_rate_percent / dec!(100);
    let days = maturity_days(request.start_date, request.end_date);
    let years = years_from_days(days);

    let time_unit = match request.investment_type {
        InvestmentType::Annually => years,
        InvestmentType::Daily => Decimal::from(days),
    };

    let raw = match request.interest_type {
        InterestType::Compound => principal
            .checked_mul(growth_factor(rate, time_unit)?)
            .and_then(|grown| grown.checked_sub(principal)),
        InterestType::Simple => principal
            .checked_mul(rate)
            .and_then(|accrual| accrual.checked_mul(time_unit)),
    }
    .ok_or_else(|| amount_overflow("expected return"))?;
    let expected_return = round_money(raw);
    let maturity_value = principal
        .checked_add(expected_return)
        .ok_or_else(|| amount_overflow("maturity value"))?;

    debug!(
        %principal,
        %rate,
        days,
        interest_type = %request.interest_type,
        investment_type = %request.investment_type,
        %expected_return,
        "computed expected return"
    );

    Ok(ExpectedReturnOutput {
        days,
        years,
        time_unit,
        rate_fraction: rate,
        expected_return,
        maturity_value,
    })
}

fn validate(request: &InvestmentRequest) -> TrackerResult<()> {
    if request.principal < Decimal::ZERO {
        return Err(TrackerError::InvalidInput {
            field: "principal".into(),
            reason: "Principal must be >= 0".into(),
        });
    }
    if request.end_date < request.start_date {
        return Err(TrackerError::DateError(format!(
            "end date {} precedes start date {}",
            request.end_date, request.start_date
        )));
    }
    if request.interest_type == InterestType::Compound && request.annual_rate_percent <= dec!(-100)
    {
        return Err(TrackerError::InvalidInput {
            field: "annual_rate_percent".into(),
            reason: "Compound rate must be greater than -100%".into(),
        });
    }
    Ok(())
}

/// Round a monetary amount to two decimal places, half away from zero.
pub fn round_money(amount: Money) -> Money {
    amount.round_dp_with_strategy(RETURN_DP, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use rust_decimal_macros::dec;

    fn request(
        principal: Decimal,
        rate: Decimal,
        days: u64,
        interest_type: InterestType,
        investment_type: InvestmentType,
    ) -> InvestmentRequest {
        let start_date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        InvestmentRequest {
            principal,
            annual_rate_percent: rate,
            start_date,
            end_date: start_date.checked_add_days(Days::new(days)).unwrap(),
            interest_type,
            investment_type,
        }
    }

    #[test]
    fn test_one_year_compound_matches_simple() {
        let compound = request(
            dec!(1000),
            dec!(10),
            365,
            InterestType::Compound,
            InvestmentType::Annually,
        );
        let simple = InvestmentRequest {
            interest_type: InterestType::Simple,
            ..compound.clone()
        };
        assert_eq!(expected_return(&compound).unwrap(), dec!(100.00));
        assert_eq!(expected_return(&simple).unwrap(), dec!(100.00));
    }

    #[test]
    fn test_breakdown_reports_time_unit() {
        let req = request(
            dec!(1000),
            dec!(1),
            30,
            InterestType::Compound,
            InvestmentType::Daily,
        );
        let out = calculate_expected_return(&req).unwrap();
        assert_eq!(out.result.days, 30);
        assert_eq!(out.result.time_unit, dec!(30));
        assert_eq!(out.result.rate_fraction, dec!(0.01));
        assert_eq!(out.result.expected_return, dec!(347.85));
        assert_eq!(out.result.maturity_value, dec!(1347.85));
    }

    #[test]
    fn test_zero_day_term_warns() {
        let req = request(
            dec!(1000),
            dec!(5),
            0,
            InterestType::Simple,
            InvestmentType::Annually,
        );
        let out = calculate_expected_return(&req).unwrap();
        assert_eq!(out.result.expected_return, Decimal::ZERO);
        assert!(out.warnings.iter().any(|w| w.contains("coincide")));
    }

    #[test]
    fn test_compound_amount_overflow_is_error() {
        // 1.1^600 fits in a Decimal, a million times it does not
        let req = request(
            dec!(1000000),
            dec!(10),
            600,
            InterestType::Compound,
            InvestmentType::Daily,
        );
        assert!(matches!(
            calculate_expected_return(&req),
            Err(TrackerError::InvalidInput { ref field, .. }) if field == "principal"
        ));
    }

    #[test]
    fn test_maturity_value_overflow_is_error() {
        let req = request(
            Decimal::MAX,
            dec!(10),
            365,
            InterestType::Simple,
            InvestmentType::Annually,
        );
        assert!(matches!(
            expected_return(&req),
            Err(TrackerError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_end_before_start_rejected() {
        let mut req = request(
            dec!(1000),
            dec!(5),
            10,
            InterestType::Simple,
            InvestmentType::Annually,
        );
        std::mem::swap(&mut req.start_date, &mut req.end_date);
        assert!(matches!(
            expected_return(&req),
            Err(TrackerError::DateError(_))
        ));
    }

    #[test]
    fn test_negative_principal_rejected() {
        let req = request(
            dec!(-1),
            dec!(5),
            10,
            InterestType::Simple,
            InvestmentType::Daily,
        );
        assert!(matches!(
            expected_return(&req),
            Err(TrackerError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_round_money_half_up() {
        assert_eq!(round_money(dec!(2.345)), dec!(2.35));
        assert_eq!(round_money(dec!(-2.345)), dec!(-2.35));
        assert_eq!(round_money(dec!(2.344)), dec!(2.34));
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("Simple".parse::<InterestType>().unwrap(), InterestType::Simple);
        assert_eq!(
            " annually ".parse::<InvestmentType>().unwrap(),
            InvestmentType::Annually
        );
        assert!("monthly".parse::<InvestmentType>().is_err());
    }
}
