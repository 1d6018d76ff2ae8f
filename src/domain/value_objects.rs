//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared.

use serde::Serialize;
use std::cmp::Ordering;

/// ISO 3166-1 alpha-2 country code, always upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    /// Parse a country code.
    ///
    /// Accepts exactly two ASCII letters (surrounding whitespace is ignored)
    /// and normalizes them to upper case.
    ///
    /// # Examples
    /// ```
    /// use locprov::CountryCode;
    ///
    /// assert_eq!(CountryCode::parse("de").unwrap().as_str(), "DE");
    /// assert!(CountryCode::parse("DEU").is_none());
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.len() == 2 && s.bytes().all(|b| b.is_ascii_alphabetic()) {
            Some(Self(s.to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Upper-case code (`"US"`).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-case code, used as the flag file stem (`"us"`).
    pub fn to_lowercase(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Flag icon size.
///
/// Each size lives in its own directory named after its dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FlagSize {
    /// 18x12 pixels (index 0)
    Small,
    /// 25x15 pixels (index 1)
    Large,
}

impl FlagSize {
    /// Map a size index to a flag size.
    ///
    /// Index 0 is [`FlagSize::Small`]; every other index selects
    /// [`FlagSize::Large`].
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Small,
            _ => Self::Large,
        }
    }

    /// Width and height in pixels.
    pub fn dimensions(&self) -> [u32; 2] {
        match self {
            Self::Small => [18, 12],
            Self::Large => [25, 15],
        }
    }

    /// Directory holding icons of this size.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Small => "18x12",
            Self::Large => "25x15",
        }
    }

    /// All sizes in index order.
    pub fn all() -> [FlagSize; 2] {
        [Self::Small, Self::Large]
    }
}

/// Dot-separated plugin version (`0.1.1`, `1.2`).
///
/// Versions compare segment by segment as numbers. Only the leading digits
/// of a segment count, and missing segments are zero, so `1.0 == 1.0.0`.
#[derive(Debug, Clone, Default)]
pub struct PluginVersion(String);

impl PluginVersion {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no version is known.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn segments(&self) -> Vec<u64> {
        self.0
            .split('.')
            .map(|seg| {
                let digits: String = seg.chars().take_while(|c| c.is_ascii_digit()).collect();
                digits.parse().unwrap_or(0)
            })
            .collect()
    }
}

impl Ord for PluginVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let a = self.segments();
        let b = other.segments();
        let len = a.len().max(b.len());

        for i in 0..len {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            match x.cmp(&y) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for PluginVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PluginVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PluginVersion {}

impl std::fmt::Display for PluginVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Capabilities advertised by a location provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Capabilities(u64);

impl Capabilities {
    pub const COUNTRY_BY_IP: Capabilities = Capabilities(0x0001);
    pub const FLAG_BY_IP: Capabilities = Capabilities(0x0002);
    pub const ISO3166_BY_IP: Capabilities = Capabilities(0x0004);

    pub fn bits(&self) -> u64 {
        self.0
    }
}

impl std::ops::BitOr for Capabilities {
    type Output = Capabilities;

    fn bitor(self, rhs: Self) -> Self::Output {
        Capabilities(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CountryCode Tests =====

    #[test]
    fn test_country_code_normalizes_case() {
        let tests = vec![("us", "US"), ("Gb", "GB"), (" fr ", "FR"), ("BR", "BR")];

        for (input, expected) in tests {
            assert_eq!(
                CountryCode::parse(input).map(|c| c.as_str().to_string()),
                Some(expected.to_string()),
                "Failed for input: {}",
                input
            );
        }
    }

    #[test]
    fn test_country_code_rejects_invalid() {
        for input in ["", "U", "USA", "1A", "u-", "ü1"] {
            assert!(CountryCode::parse(input).is_none(), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_country_code_lowercase_stem() {
        let code = CountryCode::parse("DE").unwrap();
        assert_eq!(code.to_lowercase(), "de");
        assert_eq!(code.to_string(), "DE");
    }

    #[test]
    fn test_country_code_serializes_as_string() {
        let code = CountryCode::parse("jp").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"JP\"");
    }

    // ===== FlagSize Tests =====

    #[test]
    fn test_flag_size_from_index() {
        assert_eq!(FlagSize::from_index(0), FlagSize::Small);
        assert_eq!(FlagSize::from_index(1), FlagSize::Large);
        // out-of-range indexes fall back to the large size
        assert_eq!(FlagSize::from_index(7), FlagSize::Large);
    }

    #[test]
    fn test_flag_size_directories() {
        assert_eq!(FlagSize::Small.dir_name(), "18x12");
        assert_eq!(FlagSize::Large.dir_name(), "25x15");
    }

    #[test]
    fn test_flag_size_table() {
        let dims: Vec<[u32; 2]> = FlagSize::all().iter().map(|s| s.dimensions()).collect();
        assert_eq!(dims, vec![[18, 12], [25, 15]]);

        for (index, size) in FlagSize::all().into_iter().enumerate() {
            assert_eq!(FlagSize::from_index(index), size);
        }
    }

    // ===== PluginVersion Tests =====

    #[test]
    fn test_version_ordering() {
        let tests = vec![
            ("0.1.2", "0.1.1", Ordering::Greater),
            ("0.1.1", "0.1.1", Ordering::Equal),
            ("0.1.0", "0.1.1", Ordering::Less),
            ("0.1.10", "0.1.9", Ordering::Greater),
            ("1.0", "1.0.0", Ordering::Equal),
            ("0.2", "0.1.1", Ordering::Greater),
            ("", "0.1.1", Ordering::Less),
        ];

        for (a, b, expected) in tests {
            assert_eq!(
                PluginVersion::new(a).cmp(&PluginVersion::new(b)),
                expected,
                "{} vs {}",
                a,
                b
            );
        }
    }

    #[test]
    fn test_version_ignores_suffixes() {
        assert_eq!(PluginVersion::new("0.2.0_B12"), PluginVersion::new("0.2.0"));
        assert!(PluginVersion::new("0.3beta") > PluginVersion::new("0.2.9"));
    }

    #[test]
    fn test_version_empty() {
        assert!(PluginVersion::new("").is_empty());
        assert!(PluginVersion::new("   ").is_empty());
        assert!(!PluginVersion::new("0.1").is_empty());
        assert!(PluginVersion::default().is_empty());
    }

    // ===== Capabilities Tests =====

    #[test]
    fn test_capabilities_bits() {
        let caps =
            Capabilities::COUNTRY_BY_IP | Capabilities::FLAG_BY_IP | Capabilities::ISO3166_BY_IP;
        assert_eq!(caps.bits(), 0x7);
        assert_eq!(caps.bits() & Capabilities::FLAG_BY_IP.bits(), 0x2);
        assert_eq!(Capabilities::default().bits(), 0);
    }
}
