//! The [`IdentityNumber`] value type.
//!
//! A validated string newtype: you cannot hold one that the checksum
//! validator would refuse. Construction is the only gate; after it the value
//! is immutable and the canonical text is preserved verbatim.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::checksum::{self, is_valid};
use crate::domain::error::DomainError;

/// A proven-valid Turkish national identity number.
///
/// Equality, ordering of hashes, and the `Display` form all come from the
/// canonical eleven-digit text the value was constructed from. Two instances
/// are equal iff that text matches exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IdentityNumber(String);

impl IdentityNumber {
    /// Smallest nine-digit sequence value.
    pub const MIN_SEQUENCE: u32 = 100_000_000;
    /// Largest nine-digit sequence value.
    pub const MAX_SEQUENCE: u32 = 999_999_999;

    /// Strict constructor: accepts `number` only if [`is_valid`] does.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidNumber`] on any rejected input. The
    /// error describes the input without echoing it.
    pub fn new(number: impl Into<String>) -> Result<Self, DomainError> {
        let number = number.into();
        if !is_valid(&number) {
            return Err(DomainError::InvalidNumber {
                len: number.chars().count(),
            });
        }
        Ok(Self(number))
    }

    /// Non-throwing parse.
    ///
    /// `Some` exactly when [`is_valid`] accepts `number`; there is no input
    /// on which this and [`IdentityNumber::new`] disagree.
    pub fn try_parse(number: &str) -> Option<Self> {
        is_valid(number).then(|| Self(number.to_owned()))
    }

    /// Build the number for a nine-digit sequence value by deriving and
    /// appending both checksum digits.
    ///
    /// This is the generator half of the checksum relation: everything it
    /// produces satisfies [`is_valid`].
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::SequenceOutOfRange`] when `sequence` is not in
    /// `100_000_000..=999_999_999` (nine digits, no leading zero).
    pub fn from_sequence(sequence: u32) -> Result<Self, DomainError> {
        if !(Self::MIN_SEQUENCE..=Self::MAX_SEQUENCE).contains(&sequence) {
            return Err(DomainError::SequenceOutOfRange { sequence });
        }

        let mut digits = [0i32; 9];
        let mut rest = sequence;
        for slot in digits.iter_mut().rev() {
            *slot = (rest % 10) as i32;
            rest /= 10;
        }

        let (first, last) = checksum::checksum_pair(digits);
        Ok(Self(format!("{sequence}{first}{last}")))
    }

    /// The canonical eleven-digit text, verbatim. No reformatting, no
    /// masking.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the value and return the canonical text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IdentityNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<IdentityNumber> for String {
    fn from(id: IdentityNumber) -> Self {
        id.0
    }
}

impl FromStr for IdentityNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Deserializes as a plain `String`, then routes through
/// [`IdentityNumber::new`] so invalid values are rejected at
/// deserialization time, not silently accepted.
impl<'de> Deserialize<'de> for IdentityNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::*;

    fn hash_of(id: &IdentityNumber) -> u64 {
        let mut hasher = DefaultHasher::new();
        id.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn new_preserves_text_verbatim() {
        let id = IdentityNumber::new("14948892948").unwrap();
        assert_eq!(id.as_str(), "14948892948");
        assert_eq!(id.to_string(), "14948892948");
        assert_eq!(String::from(id), "14948892948");
    }

    #[test]
    fn new_rejects_invalid_input() {
        let err = IdentityNumber::new("14948892946").unwrap_err();
        assert_eq!(err, DomainError::InvalidNumber { len: 11 });

        let err = IdentityNumber::new("123").unwrap_err();
        assert_eq!(err, DomainError::InvalidNumber { len: 3 });
    }

    #[test]
    fn try_parse_agrees_with_is_valid() {
        for input in &[
            "14948892948",
            "10000000146",
            "04948892948",
            "14948892946",
            "123",
            "",
            "1494889294x",
        ] {
            assert_eq!(
                IdentityNumber::try_parse(input).is_some(),
                is_valid(input),
                "disagreement on {input:?}"
            );
            assert_eq!(
                IdentityNumber::new(*input).is_ok(),
                is_valid(input),
                "disagreement on {input:?}"
            );
        }
    }

    #[test]
    fn try_parse_yields_matching_text() {
        let id = IdentityNumber::try_parse("14948892948").unwrap();
        assert_eq!(id.as_str(), "14948892948");
    }

    #[test]
    fn from_str_is_the_strict_constructor() {
        let id: IdentityNumber = "14948892948".parse().unwrap();
        assert_eq!(id.as_str(), "14948892948");
        assert!("04948892948".parse::<IdentityNumber>().is_err());
    }

    #[test]
    fn from_sequence_matches_reference_derivation() {
        let id = IdentityNumber::from_sequence(123_456_789).unwrap();
        assert_eq!(id.as_str(), "12345678950");
        assert!(is_valid(id.as_str()));
    }

    #[test]
    fn from_sequence_output_is_always_valid() {
        for sequence in [
            IdentityNumber::MIN_SEQUENCE,
            123_456_789,
            190_909_090, // negative-modulo branch
            500_000_000,
            IdentityNumber::MAX_SEQUENCE,
        ] {
            let id = IdentityNumber::from_sequence(sequence).unwrap();
            assert!(is_valid(id.as_str()), "generator broke on {sequence}");
        }
    }

    #[test]
    fn from_sequence_rejects_out_of_range() {
        for sequence in [0, 1, 99_999_999, 1_000_000_000] {
            assert_eq!(
                IdentityNumber::from_sequence(sequence).unwrap_err(),
                DomainError::SequenceOutOfRange { sequence }
            );
        }
    }

    #[test]
    fn equality_is_structural() {
        let a = IdentityNumber::new("14948892948").unwrap();
        let b = IdentityNumber::new("14948892948").unwrap();
        let c = IdentityNumber::new("10000000146").unwrap();

        assert_eq!(a, a); // reflexive
        assert_eq!(a, b);
        assert_eq!(b, a); // symmetric
        assert_ne!(a, c);
    }

    #[test]
    fn equal_values_hash_identically() {
        let a = IdentityNumber::new("14948892948").unwrap();
        let b = IdentityNumber::try_parse("14948892948").unwrap();
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn construction_paths_agree_on_canonical_text() {
        let built = IdentityNumber::from_sequence(149_488_929).unwrap();
        let parsed = IdentityNumber::new(built.as_str()).unwrap();
        assert_eq!(built, parsed);
    }

    #[test]
    fn serializes_as_the_plain_string() {
        let id = IdentityNumber::new("14948892948").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"14948892948\"");
    }

    #[test]
    fn deserialization_validates() {
        let id: IdentityNumber = serde_json::from_str("\"14948892948\"").unwrap();
        assert_eq!(id.as_str(), "14948892948");

        assert!(serde_json::from_str::<IdentityNumber>("\"04948892948\"").is_err());
        assert!(serde_json::from_str::<IdentityNumber>("\"123\"").is_err());
        assert!(serde_json::from_str::<IdentityNumber>("42").is_err());
    }
}
