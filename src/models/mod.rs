//! Pricing and estimation models
//!
//! Implements:
//! - Standard normal distribution (self-contained erf / CDF)
//! - Black-Scholes European pricing and Greeks
//! - Historical (close-to-close) volatility

pub mod normal;
pub mod black_scholes;
pub mod volatility;

pub use normal::*;
pub use black_scholes::*;
pub use volatility::*;
