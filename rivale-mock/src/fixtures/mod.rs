pub mod companies;
pub mod financials;
