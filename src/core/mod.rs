//! Core data types for BS Options
//!
//! Defines fundamental types:
//! - OptionType / OptionParams: call or put and the formula inputs
//! - SpotQuote / PriceSeries: market data snapshots
//! - Greeks: option sensitivities
//! - BSError: error taxonomy

pub mod option;
pub mod quote;
pub mod greeks;
pub mod error;

pub use option::*;
pub use quote::*;
pub use greeks::*;
pub use error::*;
