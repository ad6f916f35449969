use std::fmt;

use crate::constants::*;
use crate::version::parse_number;

/// Pre-release category of a version suffix.
///
/// Variants are declared in ascending precedence, so the derived ordering is the ranking used
/// when comparing two versions with equal numeric parts: any suffix ranks below no suffix at
/// all, and an unrecognized suffix ranks below every recognized pre-release qualifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReleaseClass {
    /// A non-empty suffix without any known qualifier keyword
    Unknown,
    Snapshot,
    PreAlpha,
    Alpha,
    Beta,
    ReleaseCandidate,
    /// No suffix
    Stable,
}

/// Keywords in matching priority. The first keyword found anywhere in the suffix decides the class.
const KEYWORD_PRIORITY: [(&str, ReleaseClass); 4] = [
    (RC_KEYWORD, ReleaseClass::ReleaseCandidate),
    (BETA_KEYWORD, ReleaseClass::Beta),
    (ALPHA_KEYWORD, ReleaseClass::Alpha),
    (SNAPSHOT_KEYWORD, ReleaseClass::Snapshot),
];

impl ReleaseClass {
    /// Whether versions of this class are further ordered by a pre-release counter
    pub fn is_counted(self) -> bool {
        matches!(
            self,
            ReleaseClass::ReleaseCandidate
                | ReleaseClass::Beta
                | ReleaseClass::Alpha
                | ReleaseClass::PreAlpha
        )
    }
}

impl fmt::Display for ReleaseClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReleaseClass::Unknown => "unknown",
            ReleaseClass::Snapshot => "snapshot",
            ReleaseClass::PreAlpha => "pre-alpha",
            ReleaseClass::Alpha => "alpha",
            ReleaseClass::Beta => "beta",
            ReleaseClass::ReleaseCandidate => "rc",
            ReleaseClass::Stable => "stable",
        };
        f.write_str(name)
    }
}

/// Classified suffix of a version: its release class and pre-release counter.
///
/// The counter is always 0 for classes that are not counted, which lets the derived ordering
/// (class first, counter second) compare two suffixes directly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Qualifier {
    class: ReleaseClass,
    counter: u64,
}

impl Qualifier {
    pub const STABLE: Qualifier = Qualifier {
        class: ReleaseClass::Stable,
        counter: 0,
    };

    /// Classify a version suffix
    ///
    /// Keyword matching is ASCII case-insensitive. `pre` only matters when it appears before
    /// `alpha`, turning it into [`ReleaseClass::PreAlpha`].
    pub fn from_suffix(suffix: &str) -> Self {
        if suffix.is_empty() {
            return Qualifier::STABLE;
        }

        // ascii folding keeps byte offsets identical to the original suffix
        let lowered = suffix.to_ascii_lowercase();

        let Some((class, keyword_end)) = KEYWORD_PRIORITY.iter().find_map(|(keyword, class)| {
            lowered.find(keyword).map(|start| {
                let class = if *class == ReleaseClass::Alpha && lowered[..start].contains(PRE_KEYWORD)
                {
                    ReleaseClass::PreAlpha
                } else {
                    *class
                };
                (class, start + keyword.len())
            })
        }) else {
            return Qualifier {
                class: ReleaseClass::Unknown,
                counter: 0,
            };
        };

        let counter = if class.is_counted() {
            counter_after(&lowered[keyword_end..])
        } else {
            0
        };

        Qualifier { class, counter }
    }

    /// The release class
    pub fn class(&self) -> ReleaseClass {
        self.class
    }

    /// The pre-release counter, 0 if the suffix has none
    pub fn counter(&self) -> u64 {
        self.counter
    }
}

impl Default for Qualifier {
    fn default() -> Self {
        Qualifier::STABLE
    }
}

/// Read the pre-release counter following a qualifier keyword.
///
/// A digit must appear within the lookahead window, which allows one separator character
/// between the keyword and the counter (`rc-12`). The counter is the digit run starting at the
/// first digit found.
fn counter_after(rest: &str) -> u64 {
    let Some(start) = rest
        .char_indices()
        .take(COUNTER_LOOKAHEAD)
        .find(|(_, c)| c.is_ascii_digit())
        .map(|(idx, _)| idx)
    else {
        return 0;
    };

    let digits = &rest[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    parse_number(&digits[..end])
}
