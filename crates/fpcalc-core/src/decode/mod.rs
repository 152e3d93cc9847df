pub mod class;
pub mod fields;

pub use class::{classify, ValueClass};
pub use fields::{extract, DecodedFields};
