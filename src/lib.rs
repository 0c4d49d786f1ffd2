//! ordinals — English ordinal suffixes for integers (library crate).
//!
//! ```
//! use ordinals::{suffix_for, OrdinalSuffix, Suffix};
//!
//! assert_eq!(suffix_for(21), "st");
//! assert_eq!(suffix_for(111), "th");
//! assert_eq!(3u8.ordinal_suffix(), Suffix::Rd);
//! ```

pub mod constants;
pub mod env;
pub mod input;
pub mod logging;
pub mod suffix;

pub use input::{InputError, parse_number};
pub use suffix::{OrdinalSuffix, Suffix, suffix_for};
