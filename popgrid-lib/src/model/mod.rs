//! Row, value, column, and action models

mod action;
mod column;
mod record;
mod value;

pub use action::*;
pub use column::*;
pub use record::*;
pub use value::*;
