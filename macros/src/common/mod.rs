// Common utilities shared by the attribute and its expansion
//
// This module contains:
// - naming: identifier conventions (tables, supertrait fields)
// - parse_utils: attribute argument parsing

mod naming;
mod parse_utils;

pub use naming::*;
pub use parse_utils::*;
