use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use itertools::Itertools;

use crate::constants::*;
use crate::errors::*;
use crate::qualifier::{Qualifier, ReleaseClass};

/// A version parsed from a loosely formatted string.
///
/// Parsing splits the whitespace-stripped string on `.` and collects the leading numeric parts.
/// The first character that is not a digit starts the suffix, which extends to the end of the
/// string. Everything after it, numeric or not, belongs to the suffix.
///
/// ```text
/// 1.65.5-beta.23-4  =>  numbers [1, 65, 5], suffix "-beta.23-4"
/// 2.4beta3          =>  numbers [2, 4],     suffix "beta3"
/// ```
///
/// Strings which do not start with a digit produce the invalid version: no numbers and no
/// suffix. It still takes part in comparisons and behaves like version `0`.
///
/// Versions are compared by their numbers first, ignoring trailing zeros (`1.2.0` equals `1.2`),
/// then by the [`ReleaseClass`] of their suffix and its pre-release counter. A version without a
/// suffix ranks above any suffixed version with equal numbers.
///
/// Values are immutable once constructed.
#[derive(Clone, Debug, Default)]
pub struct Version {
    original: Option<String>,
    numbers: Vec<u64>,
    numbers_trimmed: Vec<u64>,
    suffix: String,
    qualifier: Qualifier,
}

impl Version {
    /// Parse a version string, falling back to the invalid version if it does not start with
    /// a digit
    pub fn parse(version: &str) -> Self {
        Self::from_raw(Some(version))
    }

    /// Parse an optional version string. `None` produces the invalid version.
    pub fn parse_opt(version: Option<&str>) -> Self {
        Self::from_raw(version)
    }

    /// Parse a version string, failing if it does not start with a digit
    pub fn try_parse(version: &str) -> Result<Self> {
        Self::try_parse_opt(Some(version))
    }

    /// Parse an optional version string, failing if it is missing or does not start with a digit
    pub fn try_parse_opt(version: Option<&str>) -> Result<Self> {
        let version = version.ok_or(Error::MissingInput)?;
        if !starts_numeric(version) {
            return Err(Error::InvalidFormat(version.to_owned()));
        }
        Ok(Self::from_raw(Some(version)))
    }

    fn from_raw(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Version::default();
        };

        if !starts_numeric(raw) {
            log::trace!("{:?} does not start with a digit, using the invalid version", raw);
            return Version {
                original: Some(raw.to_owned()),
                ..Version::default()
            };
        }

        let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let (numbers, suffix) = split_components(&stripped);
        if !suffix.is_empty() {
            log::trace!("{:?} has suffix {:?}", raw, suffix);
        }

        let numbers_trimmed = trim_trailing_zeros(&numbers).to_vec();
        let qualifier = Qualifier::from_suffix(suffix);

        Version {
            original: Some(raw.to_owned()),
            numbers,
            numbers_trimmed,
            suffix: suffix.to_owned(),
            qualifier,
        }
    }

    /// The major version, 0 if absent
    pub fn major(&self) -> u64 {
        self.number_at(MAJOR)
    }

    /// The minor version, 0 if absent
    pub fn minor(&self) -> u64 {
        self.number_at(MINOR)
    }

    /// The patch version, 0 if absent
    pub fn patch(&self) -> u64 {
        self.number_at(PATCH)
    }

    fn number_at(&self, position: usize) -> u64 {
        self.numbers.get(position).copied().unwrap_or(0)
    }

    /// All numeric parts, including trailing zeros
    pub fn numbers(&self) -> &[u64] {
        &self.numbers
    }

    /// The suffix starting at the first non-numeric character, empty if there is none
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The string this version was parsed from
    pub fn original(&self) -> Option<&str> {
        self.original.as_deref()
    }

    /// The classified suffix
    pub fn qualifier(&self) -> Qualifier {
        self.qualifier
    }

    pub fn release_class(&self) -> ReleaseClass {
        self.qualifier.class()
    }

    pub fn pre_release_counter(&self) -> u64 {
        self.qualifier.counter()
    }

    /// Whether any numeric part could be parsed
    pub fn is_valid(&self) -> bool {
        !self.numbers.is_empty()
    }

    /// Compare only the numeric parts of two versions, treating missing positions as 0
    pub fn cmp_numbers(&self, other: &Version) -> Ordering {
        compare_numbers(&self.numbers_trimmed, &other.numbers_trimmed)
    }

    /// Whether this version is higher than `other`
    pub fn is_higher_than<V: AsVersion + ?Sized>(&self, other: &V) -> bool {
        self.cmp(&other.as_version()) == Ordering::Greater
    }

    /// Whether this version is lower than `other`
    pub fn is_lower_than<V: AsVersion + ?Sized>(&self, other: &V) -> bool {
        self.cmp(&other.as_version()) == Ordering::Less
    }

    /// Whether this version is equal to `other`
    pub fn is_equal<V: AsVersion + ?Sized>(&self, other: &V) -> bool {
        self.cmp(&other.as_version()) == Ordering::Equal
    }

    /// Whether this version is equal to or higher than `other`
    pub fn is_at_least<V: AsVersion + ?Sized>(&self, other: &V) -> bool {
        self.cmp(&other.as_version()) != Ordering::Less
    }

    /// Whether the numeric parts of this version are equal to or higher than those of `other`.
    /// Suffixes are not considered, so `2.4-beta3` is at least `2.4`.
    pub fn is_at_least_ignoring_suffix<V: AsVersion + ?Sized>(&self, other: &V) -> bool {
        self.cmp_numbers(&other.as_version()) != Ordering::Less
    }
}

/// Types usable as the right-hand side of a version comparison.
///
/// Strings are parsed leniently, so malformed input compares as the invalid version.
pub trait AsVersion {
    fn as_version(&self) -> Cow<'_, Version>;
}

impl AsVersion for Version {
    fn as_version(&self) -> Cow<'_, Version> {
        Cow::Borrowed(self)
    }
}

impl AsVersion for str {
    fn as_version(&self) -> Cow<'_, Version> {
        Cow::Owned(Version::parse(self))
    }
}

impl AsVersion for String {
    fn as_version(&self) -> Cow<'_, Version> {
        self.as_str().as_version()
    }
}

impl AsVersion for Option<&str> {
    fn as_version(&self) -> Cow<'_, Version> {
        Cow::Owned(Version::parse_opt(*self))
    }
}

impl<T: AsVersion + ?Sized> AsVersion for &T {
    fn as_version(&self) -> Cow<'_, Version> {
        (**self).as_version()
    }
}

impl From<&str> for Version {
    fn from(version: &str) -> Self {
        Version::parse(version)
    }
}

impl From<String> for Version {
    fn from(version: String) -> Self {
        Version::parse(&version)
    }
}

impl From<Option<&str>> for Version {
    fn from(version: Option<&str>) -> Self {
        Version::parse_opt(version)
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Version::try_parse(s)
    }
}

/// Renders the numeric parts joined by `.` followed by the suffix, or `invalid` for a version
/// without numeric parts
impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.numbers.is_empty() {
            return f.write_str(INVALID_MARKER);
        }
        write!(f, "{}{}", self.numbers.iter().join("."), self.suffix)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numbers_trimmed.hash(state);
        self.qualifier.hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let numbers_cmp = self.cmp_numbers(other);
        if numbers_cmp != Ordering::Equal {
            return numbers_cmp;
        }

        self.qualifier.cmp(&other.qualifier)
    }
}

/// Compare two strings as loosely formatted versions
pub fn version_compare(version1: &str, version2: &str) -> Ordering {
    Version::parse(version1).cmp(&Version::parse(version2))
}

fn starts_numeric(version: &str) -> bool {
    version.trim_start().starts_with(|c: char| c.is_ascii_digit())
}

/// Split a whitespace-free version string into its leading numbers and the suffix.
///
/// Empty tokens before the suffix (`1..2`) are skipped.
fn split_components(version: &str) -> (Vec<u64>, &str) {
    let mut numbers = Vec::new();
    let mut offset = 0;

    for token in version.split('.') {
        match token.find(|c: char| !c.is_ascii_digit()) {
            None if token.is_empty() => {}
            None => numbers.push(parse_number(token)),
            Some(idx) => {
                if idx > 0 {
                    numbers.push(parse_number(&token[..idx]));
                }
                return (numbers, &version[offset + idx..]);
            }
        }
        offset += token.len() + 1;
    }

    (numbers, "")
}

fn trim_trailing_zeros(numbers: &[u64]) -> &[u64] {
    let len = numbers.iter().rposition(|&n| n != 0).map_or(0, |idx| idx + 1);
    &numbers[..len]
}

/// Convert a run of ASCII digits into a number.
///
/// Runs longer than [`MAX_NUMBER_DIGITS`] keep their most significant digits, so the conversion
/// never overflows.
pub(crate) fn parse_number(digits: &str) -> u64 {
    debug_assert!(digits.bytes().all(|b| b.is_ascii_digit()));

    if digits.len() > MAX_NUMBER_DIGITS {
        log::debug!(
            "numeric token {} exceeds {} digits, truncating",
            digits,
            MAX_NUMBER_DIGITS
        );
    }

    digits
        .bytes()
        .take(MAX_NUMBER_DIGITS)
        .fold(0, |acc, b| acc * 10 + u64::from(b - b'0'))
}

fn compare_numbers(numbers1: &[u64], numbers2: &[u64]) -> Ordering {
    numbers1
        .iter()
        .zip_longest(numbers2)
        .map(|pair| {
            let (n1, n2) = pair.or(&0, &0);
            n1.cmp(n2)
        })
        .find(|ordering| *ordering != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}
