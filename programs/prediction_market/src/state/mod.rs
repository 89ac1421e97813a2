//! State accounts for the prediction market program

pub mod bet;
pub mod config;
pub mod market;

pub use bet::*;
pub use config::*;
pub use market::*;
