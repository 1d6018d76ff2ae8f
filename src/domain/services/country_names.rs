//! Country Name Localization
//!
//! Picks the best display name for a locale out of the names stored in a
//! database record.

use std::collections::BTreeMap;

/// Normalize a locale tag: `pt_br` -> `pt-br`, lower case.
fn normalize(tag: &str) -> String {
    tag.trim().replace('_', "-").to_ascii_lowercase()
}

fn language(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

/// Select the name for `locale`.
///
/// Order: exact tag, the tag's language, any tag sharing that language
/// (`zh` finds `zh-CN`), then English. Tags compare case-insensitively and
/// `_` is accepted in place of `-`.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use locprov::domain::services::localized_name;
///
/// let mut names = BTreeMap::new();
/// names.insert("en".to_string(), "Germany".to_string());
/// names.insert("fr".to_string(), "Allemagne".to_string());
///
/// assert_eq!(localized_name(&names, "fr_CA"), Some("Allemagne"));
/// assert_eq!(localized_name(&names, "ru"), Some("Germany"));
/// ```
pub fn localized_name<'a>(names: &'a BTreeMap<String, String>, locale: &str) -> Option<&'a str> {
    let wanted = normalize(locale);
    let wanted_lang = language(&wanted);

    let mut by_lang = None;
    let mut by_prefix = None;
    let mut english = None;

    for (tag, name) in names {
        let tag = normalize(tag);
        if tag == wanted {
            return Some(name.as_str());
        }
        if tag == wanted_lang {
            by_lang.get_or_insert(name.as_str());
        } else if !wanted_lang.is_empty() && language(&tag) == wanted_lang {
            by_prefix.get_or_insert(name.as_str());
        }
        if tag == "en" {
            english = Some(name.as_str());
        }
    }

    by_lang.or(by_prefix).or(english)
}
