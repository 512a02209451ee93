//! Template records for every icon in the bundled dataset
//!
//! The statics live in `generated.rs`, written by `heroicons-svg generate`.

#[rustfmt::skip]
mod generated;

pub use generated::*;

use crate::icon::IconRecord;

/// Look up a template by its dataset name (e.g. `"moon-20-solid"`)
pub fn by_name(name: &str) -> Option<&'static IconRecord> {
    ALL.iter().copied().find(|icon| icon.name() == name)
}
