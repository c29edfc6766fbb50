pub mod error;
pub mod interest;
pub mod time_value;
pub mod tracker;
pub mod types;

pub use error::TrackerError;
pub use interest::expected_return::{
    calculate_expected_return, expected_return, InterestType, InvestmentRequest, InvestmentType,
};
pub use tracker::records::InvestmentRecord;
pub use tracker::store::InvestmentStore;
pub use tracker::submission::{submit, InvestmentForm};
pub use types::*;

/// Standard result type for all invest-tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
