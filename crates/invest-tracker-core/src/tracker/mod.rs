pub mod currency;
pub mod notice;
pub mod records;
pub mod store;
pub mod submission;
pub mod summary;
