//! Inspection of extractor symbols: names, classification, types, lookup.

pub mod classify;
pub mod keywords;
pub mod lookup;
pub mod name;
pub mod types;

pub use classify::*;
pub use keywords::get_keywords;
pub use lookup::{get_levels, get_parent, get_parent_name, get_symbol_by_name};
pub use name::{clean_name, get_code_name, get_full_name, get_long_name, get_name};
pub use types::{get_return_types, get_types};
