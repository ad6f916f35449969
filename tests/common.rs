#![allow(dead_code)]

use versioncompare::Version;

/// Pairs of versions where the first one is higher than the second one
pub const HIGHER_LOWER: &[(&str, Option<&str>)] = &[
    ("1.1.1", Some("0.0.0")),
    ("1.1.1", Some("1.0.2")),
    ("1.2.3", Some("1.2.2")),
    ("12.4.567.3", Some("12.4.566.3")),
    ("12.4-beta", Some("12.4-alpha")),
    ("12.4-beta", Some("12.4.alpha")),
    ("12.4.beta", Some("12.4-alpha")),
    ("12.4.5-rc", Some("12.4.5-beta")),
    ("12.4.5-alpha", Some("12.4.5-pre-alpha")),
    ("12.4.5-rc1", Some("12.4.5-rc")),
    ("12.4.5-rc", Some("12.4.5-beta.3")),
    ("12.4.5-rc12", Some("12.4.5-rc11")),
    ("12.4.5-rc12", Some("12.4.5-rc11asd")),
    ("12.4.5-alpha3", Some("12.4.5-alpha1")),
    ("12.4.5-alpha", Some("12.4.5-snapshot")),
    ("12.4.5-pre-alpha", Some("12.4.5-snapshot")),
    ("12.4.5-snapshot", Some("12.4.5-xyz1")),
    ("12.4.5-alpha1", Some("12.4.5-xyz1")),
    ("12.4.5", Some("12.4.5-xyz1")),
    ("12.4.5-alpha3a2", Some("12.4.5-alpha1a3")),
    ("12.4.5-alpha3", Some("12.4.5-alpha002")),
    ("12.4.5-alpha3xyz", Some("12.4.5-alpha1yxz")),
    ("12.4.5-rc1", Some("12.4.5-rcxyz3")),
    ("12.4.5-rc13", Some("12.4.5-rc-12")),
    ("12.4.6-xyz1", Some("12.4.5")),
    ("1.2beta33", Some("1.2-4beta3")),
    ("1.2beta33", Some("1.2-44beta32")),
    ("1-beta3", Some("1-alpha4")),
    ("1.0", Some("1.0-RC5")),
    ("10", Some("9")),
    ("1.10", Some("1.9.9")),
    ("2", Some("jgfa9")),
    ("2.1-alpha", Some("jgfa9-beta")),
    ("1", None),
];

/// Pairs of versions which compare as equal
pub const EQUAL: &[(Option<&str>, Option<&str>)] = &[
    (Some("1.2.3"), Some("1.2.3")),
    (Some("1"), Some("1.0")),
    (Some("2.0.0"), Some("2")),
    (Some("2.4.0-beta3"), Some("2.4.beta3")),
    (Some("2.4.0-snapshot"), Some("2.4.snapshot3")),
    (Some("2.4.0.0.0-beta3"), Some("2.4.beta3")),
    (Some("2.4.0.0.0-beta3"), Some("2.4.beta-03")),
    (Some("2.4.0.beta3"), Some("2.4-beta3")),
    (Some("2.4.0.beta3a1"), Some("2.4-beta3a2")),
    (Some("2.4-BETA3"), Some("2.4-beta3")),
    (Some("2.4-foo"), Some("2.4-bar")),
    (Some("hasdh10uadf"), Some("hasdh10uadf")),
    (Some("?ü+"), Some("?ü+")),
    (Some("kasfd5"), Some("posfd4")),
    (Some("0.0"), Some("kasfd5")),
    (Some("1.0.3838484884444"), Some("1.0.3838484884444")),
    (None, None),
    (None, Some("")),
];

/// Pairs where the first version is at least the second one
pub const AT_LEAST: &[(Option<&str>, Option<&str>)] = &[
    (Some("1.2.3"), Some("1.2")),
    (Some("2.0.0"), Some("2")),
    (Some("1.0.3"), Some("1.0.3-rc1")),
    (Some("2.4"), Some("2.4-beta3")),
    (Some("2.4"), Some("2.4-snapshot")),
    (Some("2.4-rc"), Some("2.4-beta3")),
    (Some("2.4.0.2"), Some("2.4.0.1")),
    (Some("hasdh10uadf"), Some("hasdh10uadf")),
    (Some("?ü+"), Some("?ü+")),
    (Some("kasfd5"), Some("posfd4")),
    (Some("1.0.3838484884444"), Some("1.0.3838484884444")),
    (
        Some("1.0.38384848844443838484884444"),
        Some("1.0.38384848844443838484884444"),
    ),
    (None, None),
];

/// Pairs where the numeric parts of the first version are at least those of the second one
pub const AT_LEAST_IGNORING_SUFFIX: &[(Option<&str>, Option<&str>)] = &[
    (Some("1.2.3"), Some("1.2")),
    (Some("2.0.0"), Some("2")),
    (Some("2.4.0-beta3"), Some("2.4")),
    (Some("2.4-beta3"), Some("2.4")),
    (Some("2.4-alpha"), Some("2.4-beta3")),
    (Some("2.4-snapshot"), Some("2.4-beta")),
    (Some("2.4.0.2"), Some("2.4.0.1")),
    (Some("hasdh10uadf"), Some("hasdh10uadf")),
    (Some("?ü+"), Some("?ü+")),
    (Some("kasfd5"), Some("posfd4")),
    (Some("1.0.3838484884444"), Some("1.0.3838484884444")),
    (None, None),
];

/// Every version string used by the tables above
pub fn all_versions() -> Vec<Version> {
    HIGHER_LOWER
        .iter()
        .flat_map(|(a, b)| [Some(*a), *b])
        .chain(EQUAL.iter().flat_map(|(a, b)| [*a, *b]))
        .chain(AT_LEAST.iter().flat_map(|(a, b)| [*a, *b]))
        .map(Version::parse_opt)
        .collect()
}
