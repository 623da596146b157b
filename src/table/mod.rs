//! Tabular record sets
//!
//! Every reader produces a [`RecordSet`] and every transformer consumes one.

mod record_set;
mod value;

pub use record_set::{RecordSet, Row};
pub use value::{MISSING_MARKERS, Value};
