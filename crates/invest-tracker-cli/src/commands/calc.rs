use chrono::NaiveDate;
use clap::Args;
use serde_json::Value;

use invest_tracker_core::interest::expected_return::{
    self, InterestType, InvestmentType,
};
use invest_tracker_core::InvestmentForm;

use crate::input;

/// Arguments for a single expected-return calculation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct CalcArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Principal amount
    #[arg(long)]
    pub principal: Option<String>,

    /// Interest rate in percent (e.g. 5 for 5%)
    #[arg(long)]
    pub rate: Option<String>,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// End date (YYYY-MM-DD); annual terms default to start + 365 days
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// simple or compound
    #[arg(long, default_value = "compound")]
    pub interest_type: InterestType,

    /// daily or annually
    #[arg(long, default_value = "annually")]
    pub investment_type: InvestmentType,
}

pub fn run_calc(args: CalcArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let form: InvestmentForm = match input::read_input(args.input.as_deref())? {
        Some(form) => form,
        None => form_from_flags(args)?,
    };
    let request = form.validate()?;
    let result = expected_return::calculate_expected_return(&request)?;
    Ok(serde_json::to_value(result)?)
}

fn form_from_flags(args: CalcArgs) -> Result<InvestmentForm, Box<dyn std::error::Error>> {
    let principal = args
        .principal
        .ok_or("--principal is required (or provide --input)")?;
    let rate = args.rate.ok_or("--rate is required (or provide --input)")?;
    let start = args.start.ok_or("--start is required (or provide --input)")?;

    Ok(InvestmentForm {
        principal,
        rate,
        start_date: Some(start),
        end_date: args.end,
        interest_type: args.interest_type,
        investment_type: args.investment_type,
        currency: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CalcArgs {
        CalcArgs {
            input: None,
            principal: Some("1000".into()),
            rate: Some("10".into()),
            start: NaiveDate::from_ymd_opt(2023, 1, 1),
            end: None,
            interest_type: InterestType::Compound,
            investment_type: InvestmentType::Annually,
        }
    }

    #[test]
    fn test_flags_build_annual_form() {
        let form = form_from_flags(args()).unwrap();
        let request = form.validate().unwrap();
        assert_eq!(request.end_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_missing_start_flag_is_error() {
        let mut a = args();
        a.start = None;
        let err = form_from_flags(a).unwrap_err();
        assert!(err.to_string().contains("--start"));
    }
}
