pub mod calc;
pub mod currencies;
pub mod track;
