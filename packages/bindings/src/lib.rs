use napi::Result as NapiResult;
use napi_derive::napi;

use invest_tracker_core::tracker::{currency, notice, summary};
use invest_tracker_core::{InvestmentForm, InvestmentRecord, InvestmentRequest};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Calculator
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_expected_return(input_json: String) -> NapiResult<String> {
    let input: InvestmentRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = invest_tracker_core::calculate_expected_return(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// Validate raw form input; rejects blank or non-numeric amounts, missing
/// dates, and reversed dates.
#[napi]
pub fn validate_investment(form_json: String) -> NapiResult<String> {
    let form: InvestmentForm = serde_json::from_str(&form_json).map_err(to_napi_error)?;
    let request = form.validate().map_err(to_napi_error)?;
    serde_json::to_string(&request).map_err(to_napi_error)
}

/// Validate a form and return the record the caller should append to its
/// list.
#[napi]
pub fn create_investment_record(form_json: String) -> NapiResult<String> {
    let form: InvestmentForm = serde_json::from_str(&form_json).map_err(to_napi_error)?;
    let record = form.to_record().map_err(to_napi_error)?;
    serde_json::to_string(&record).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

/// Trusts the `expected_return` inside `record_json`; pass records produced
/// by `create_investment_record`.
#[napi]
pub fn maturity_notice(record_json: String) -> NapiResult<String> {
    let record: InvestmentRecord = serde_json::from_str(&record_json).map_err(to_napi_error)?;
    Ok(notice::maturity_notice(&record))
}

/// Trusts each record's `expected_return`; pass records produced by
/// `create_investment_record`.
#[napi]
pub fn summarize_investments(records_json: String) -> NapiResult<String> {
    let records: Vec<InvestmentRecord> =
        serde_json::from_str(&records_json).map_err(to_napi_error)?;
    let totals = summary::summarize(&records).map_err(to_napi_error)?;
    serde_json::to_string(&totals).map_err(to_napi_error)
}

#[napi]
pub fn list_currencies() -> NapiResult<String> {
    serde_json::to_string(&currency::CURRENCIES).map_err(to_napi_error)
}
