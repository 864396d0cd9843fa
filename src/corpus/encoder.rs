//! Key encoders.
//!
//! An encoder derives the key a candidate is indexed under in one trie from
//! the surface key found in the corpus. Building one trie per encoding and
//! merging them lets a query match a candidate through any of its encodings.

use std::fmt;

use pinyin::ToPinyin;
use serde::{Deserialize, Serialize};

/// Derives an index key from a surface key.
///
/// Returning an empty string means the key has no representation in this
/// encoding; builders skip such keys.
pub trait KeyEncoder: Send + Sync + fmt::Debug {
    /// Short, stable name used in logs and statistics.
    fn name(&self) -> &str;

    /// Encodes `key`.
    fn encode(&self, key: &str) -> String;
}

/// Indexes the surface key unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExactEncoder;

impl KeyEncoder for ExactEncoder {
    fn name(&self) -> &str {
        "exact"
    }

    fn encode(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Indexes the Unicode lowercase form of the surface key.
#[derive(Debug, Default, Clone, Copy)]
pub struct LowercaseEncoder;

impl KeyEncoder for LowercaseEncoder {
    fn name(&self) -> &str {
        "lowercase"
    }

    fn encode(&self, key: &str) -> String {
        key.to_lowercase()
    }
}

/// Indexes the lowercase first character of every word.
///
/// Words are maximal runs of alphanumeric characters, so `"Hello, World"`
/// encodes to `"hw"`. Scripts written without word separators form a single
/// word.
#[derive(Debug, Default, Clone, Copy)]
pub struct InitialsEncoder;

impl KeyEncoder for InitialsEncoder {
    fn name(&self) -> &str {
        "initials"
    }

    fn encode(&self, key: &str) -> String {
        key.split(|c: char| !c.is_alphanumeric())
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_lowercase)
            .collect()
    }
}

/// Indexes the toneless pinyin spelling of Han characters.
///
/// Characters without a reading (Latin letters, digits, punctuation) are kept
/// as they are, so `"王者荣耀2"` encodes to `"wangzherongyao2"`. Heteronyms
/// use their most common reading.
#[derive(Debug, Default, Clone, Copy)]
pub struct PinyinEncoder;

impl KeyEncoder for PinyinEncoder {
    fn name(&self) -> &str {
        "pinyin"
    }

    fn encode(&self, key: &str) -> String {
        let mut encoded = String::with_capacity(key.len() * 2);
        for symbol in key.chars() {
            match symbol.to_pinyin() {
                Some(reading) => encoded.push_str(reading.plain()),
                None => encoded.push(symbol),
            }
        }
        encoded
    }
}

/// Indexes the first pinyin letter of every Han character.
///
/// Characters without a reading are dropped, so keys with no Han characters
/// have no representation in this encoding.
#[derive(Debug, Default, Clone, Copy)]
pub struct PinyinInitialsEncoder;

impl KeyEncoder for PinyinInitialsEncoder {
    fn name(&self) -> &str {
        "pinyin_initials"
    }

    fn encode(&self, key: &str) -> String {
        key.chars()
            .filter_map(|symbol| symbol.to_pinyin())
            .map(|reading| reading.first_letter())
            .collect()
    }
}

/// Configurable choice of built-in encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncoderKind {
    /// [`ExactEncoder`]
    Exact,
    /// [`LowercaseEncoder`]
    Lowercase,
    /// [`InitialsEncoder`]
    Initials,
    /// [`PinyinEncoder`]
    Pinyin,
    /// [`PinyinInitialsEncoder`]
    PinyinInitials,
}

impl EncoderKind {
    /// Creates the encoder this kind names.
    pub fn encoder(self) -> Box<dyn KeyEncoder> {
        match self {
            Self::Exact => Box::new(ExactEncoder),
            Self::Lowercase => Box::new(LowercaseEncoder),
            Self::Initials => Box::new(InitialsEncoder),
            Self::Pinyin => Box::new(PinyinEncoder),
            Self::PinyinInitials => Box::new(PinyinInitialsEncoder),
        }
    }
}

impl fmt::Display for EncoderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.encoder().name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Hello World", "Hello World"; "ascii")]
    #[test_case("王者荣耀", "王者荣耀"; "han")]
    fn test_exact(key: &str, expected: &str) {
        assert_eq!(ExactEncoder.encode(key), expected);
    }

    #[test_case("Hello World", "hello world"; "ascii")]
    #[test_case("ÉCOLE", "école"; "accented")]
    #[test_case("王者", "王者"; "uncased")]
    fn test_lowercase(key: &str, expected: &str) {
        assert_eq!(LowercaseEncoder.encode(key), expected);
    }

    #[test_case("Hello World", "hw"; "two words")]
    #[test_case("  league of-legends ", "lol"; "mixed separators")]
    #[test_case("Counter Strike 2", "cs2"; "digits")]
    #[test_case("王者荣耀", "王"; "unspaced script")]
    #[test_case(" - ", ""; "separators only")]
    #[test_case("", ""; "empty")]
    fn test_initials(key: &str, expected: &str) {
        assert_eq!(InitialsEncoder.encode(key), expected);
    }

    #[test_case("王者荣耀", "wangzherongyao"; "han")]
    #[test_case("心动", "xindong"; "two characters")]
    #[test_case("英雄联盟LOL", "yingxionglianmengLOL"; "mixed latin kept")]
    #[test_case("原神 2", "yuanshen 2"; "digits and spaces kept")]
    #[test_case("Hello", "Hello"; "no han")]
    fn test_pinyin(key: &str, expected: &str) {
        assert_eq!(PinyinEncoder.encode(key), expected);
    }

    #[test_case("王者荣耀", "wzry"; "han")]
    #[test_case("英雄联盟LOL", "yxlm"; "latin dropped")]
    #[test_case("原神 2", "ys"; "digits and spaces dropped")]
    #[test_case("Hello", ""; "no han")]
    fn test_pinyin_initials(key: &str, expected: &str) {
        assert_eq!(PinyinInitialsEncoder.encode(key), expected);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(EncoderKind::Exact.to_string(), "exact");
        assert_eq!(EncoderKind::Lowercase.to_string(), "lowercase");
        assert_eq!(EncoderKind::Initials.to_string(), "initials");
        assert_eq!(EncoderKind::Pinyin.to_string(), "pinyin");
        assert_eq!(EncoderKind::PinyinInitials.to_string(), "pinyin_initials");
    }
}
