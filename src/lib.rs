pub mod error;
pub mod numbers;
pub mod report;
pub mod strings;

pub use error::FundamentalsError;
pub use report::{lines, run, GREETING};
