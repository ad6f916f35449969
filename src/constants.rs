//! Constants shared by the parser and the suffix classifier

/// Index of the major component in [`Version::numbers`](crate::Version::numbers)
pub const MAJOR: usize = 0;
/// Index of the minor component
pub const MINOR: usize = 1;
/// Index of the patch component
pub const PATCH: usize = 2;

pub const RC_KEYWORD: &str = "rc";
pub const BETA_KEYWORD: &str = "beta";
pub const ALPHA_KEYWORD: &str = "alpha";
pub const PRE_KEYWORD: &str = "pre";
pub const SNAPSHOT_KEYWORD: &str = "snapshot";

/// Maximum number of decimal digits converted into a version number.
///
/// Longer digit runs keep their most significant digits and drop the rest. Nineteen digits
/// always fit into a `u64`.
pub const MAX_NUMBER_DIGITS: usize = 19;

/// Number of characters after a qualifier keyword that may start its pre-release counter.
pub const COUNTER_LOOKAHEAD: usize = 2;

/// Rendered in place of the numeric parts when a version could not be parsed.
pub const INVALID_MARKER: &str = "invalid";
