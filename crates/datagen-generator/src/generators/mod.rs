//! Value generators.
//!
//! - [`selection`] picks candidates out of extracted dataset maps
//! - [`string`] synthesizes random strings for passwords and email parts

pub mod selection;
pub mod string;

pub use selection::{select_values, Selection};
pub use string::{synthesize, CharClasses};
