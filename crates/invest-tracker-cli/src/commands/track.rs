use clap::Args;
use colored::Colorize;
use serde_json::{json, Value};
use tracing::warn;

use invest_tracker_core::tracker::notice::{format_amount, maturity_notice};
use invest_tracker_core::tracker::summary::summarize;
use invest_tracker_core::{submit, InvestmentForm, InvestmentRecord, InvestmentStore};

use crate::config::Settings;
use crate::input;

/// Arguments for tracking a batch of submissions
#[derive(Args)]
pub struct TrackArgs {
    /// Path to JSON file holding an array of submissions
    #[arg(long)]
    pub input: Option<String>,

    /// Positions to delete once every submission is in, applied in order (e.g. "0,2")
    #[arg(long, value_delimiter = ',')]
    pub remove: Vec<usize>,

    /// Print per-currency totals instead of the list
    #[arg(long)]
    pub summary: bool,
}

pub fn run_track(args: TrackArgs, settings: &Settings) -> Result<Value, Box<dyn std::error::Error>> {
    let forms: Vec<InvestmentForm> = input::read_input(args.input.as_deref())?
        .ok_or("--input <file.json> or stdin required for track")?;

    let mut store = InvestmentStore::new();
    for (position, form) in forms.into_iter().enumerate() {
        match submit_with_default_currency(form, &settings.currency, &mut store) {
            Ok(record) => eprintln!("{} {}", "added".green().bold(), maturity_notice(record)),
            Err(e) => warn!(submission = position, "rejected: {e}"),
        }
    }
    apply_removals(&mut store, &args.remove);

    if args.summary {
        Ok(serde_json::to_value(summarize(store.list())?)?)
    } else {
        Ok(Value::Array(investment_rows(store.list())))
    }
}

fn submit_with_default_currency<'a>(
    mut form: InvestmentForm,
    default_currency: &str,
    store: &'a mut InvestmentStore,
) -> invest_tracker_core::TrackerResult<&'a InvestmentRecord> {
    if form.currency.is_none() {
        form.currency = Some(default_currency.to_string());
    }
    submit(&form, store)
}

/// Remove each position in turn. Later positions refer to the store as it
/// stands after the earlier removals.
fn apply_removals(store: &mut InvestmentStore, positions: &[usize]) {
    for &position in positions {
        if let Err(e) = store.remove_at(position) {
            warn!("remove skipped: {e}");
        }
    }
}

/// One display row per record, in store order.
fn investment_rows(records: &[InvestmentRecord]) -> Vec<Value> {
    records
        .iter()
        .enumerate()
        .map(|(position, record)| {
            json!({
                "#": position,
                "principal": format!("{:.2}", record.principal()),
                "rate": format!("{:.2}%", record.annual_rate_percent()),
                "start_date": record.start_date().to_string(),
                "end_date": record.end_date().to_string(),
                "interest_type": record.interest_type().to_string(),
                "investment_type": record.investment_type().to_string(),
                "expected_return": format_amount(record.expected_return()),
                "currency": record.currency().unwrap_or_default(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn form(principal: &str, currency: Option<&str>) -> InvestmentForm {
        InvestmentForm {
            principal: principal.into(),
            rate: "10".into(),
            currency: currency.map(str::to_string),
            ..InvestmentForm::new(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap())
        }
    }

    fn store_of(principals: &[&str]) -> InvestmentStore {
        let mut store = InvestmentStore::new();
        for p in principals {
            submit(&form(p, Some("USD")), &mut store).unwrap();
        }
        store
    }

    #[test]
    fn test_default_currency_fills_blank_label() {
        let mut store = InvestmentStore::new();
        let record = submit_with_default_currency(form("1000", None), "NGN", &mut store).unwrap();
        assert_eq!(record.currency(), Some("NGN"));
        let record = submit_with_default_currency(form("1000", Some("EUR")), "NGN", &mut store).unwrap();
        assert_eq!(record.currency(), Some("EUR"));
    }

    #[test]
    fn test_removals_apply_sequentially() {
        let mut store = store_of(&["1", "2", "3"]);
        // removing 0 then 0 drops the first two submissions
        apply_removals(&mut store, &[0, 0]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].principal().to_string(), "3");
    }

    #[test]
    fn test_out_of_range_removal_is_skipped() {
        let mut store = store_of(&["1"]);
        apply_removals(&mut store, &[4]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_rows_render_display_strings() {
        let store = store_of(&["12500"]);
        let rows = investment_rows(store.list());
        assert_eq!(
            rows,
            vec![json!({
                "#": 0,
                "principal": "12500.00",
                "rate": "10.00%",
                "start_date": "2023-01-01",
                "end_date": "2024-01-01",
                "interest_type": "compound",
                "investment_type": "annually",
                "expected_return": "1,250.00",
                "currency": "USD",
            })]
        );
    }
}
