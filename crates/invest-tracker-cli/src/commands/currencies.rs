use serde_json::Value;

use invest_tracker_core::tracker::currency::CURRENCIES;

pub fn run_currencies() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(CURRENCIES)?)
}
