pub mod binary;
pub mod report;
pub mod sci;

pub use report::{format_pattern, FormattedReport};
