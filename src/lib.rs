//! # versioncompare
//!
//! A library for parsing loosely formatted version strings and comparing them.
//!
//! Version strings found in the wild rarely follow SemVer exactly. They miss parts, carry
//! pre-release qualifiers in odd places or end in arbitrary text. This crate extracts the leading
//! numeric parts and a suffix from any such string and orders versions by those, ranking the
//! usual pre-release qualifiers (`snapshot`, `pre-alpha`, `alpha`, `beta`, `rc`) below a plain
//! release.
//!
//! # Example
//!
//! ```rust
//! use versioncompare::{ReleaseClass, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let version = Version::parse("2.4.0-beta3");
//! assert_eq!(version.major(), 2);
//! assert_eq!(version.minor(), 4);
//! assert_eq!(version.suffix(), "-beta3");
//! assert_eq!(version.release_class(), ReleaseClass::Beta);
//!
//! // trailing zeros and separators do not matter
//! assert!(version.is_equal("2.4.beta3"));
//! assert!(version.is_higher_than("2.4-alpha7"));
//! assert!(version.is_lower_than("2.4"));
//! assert!(version.is_at_least_ignoring_suffix("2.4"));
//!
//! // strict parsing rejects strings not starting with a digit
//! assert!("x1.2.4".parse::<Version>().is_err());
//!
//! let mut versions: Vec<Version> = ["1.10", "1.2-rc1", "1.2", "1.2-snapshot"]
//!     .into_iter()
//!     .map(Version::parse)
//!     .collect();
//! versions.sort();
//! assert_eq!(
//!     versions.iter().map(Version::to_string).collect::<Vec<_>>(),
//!     ["1.2-snapshot", "1.2-rc1", "1.2", "1.10"]
//! );
//! # Ok(())
//! # }
//! ```

#![allow(unknown_lints, clippy::uninlined_format_args)]

mod errors;
pub use crate::errors::*;

pub mod constants;

mod qualifier;
pub use crate::qualifier::*;

mod version;
pub use crate::version::*;
