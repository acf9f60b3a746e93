use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed fixing every random choice the generator makes.
///
/// Seeds display as (and parse from) 64 lowercase hex characters, which makes
/// a generated puzzle reproducible from its printed seed alone.
///
/// # Examples
///
/// ```
/// use sudoq_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed =
///     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef".parse()?;
/// assert_eq!(
///     seed.to_string(),
///     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
/// );
///
/// // Seeds can also be derived from a memorable phrase
/// let phrase_seed = PuzzleSeed::from_phrase("tuesday puzzle");
/// assert_eq!(phrase_seed, PuzzleSeed::from_phrase("tuesday puzzle"));
/// # Ok::<(), sudoq_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Creates a fresh seed from the thread-local entropy source.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0u8; 32];
        rand::rng().fill(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed deterministically from a text phrase (SHA-256).
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Builds the PRNG used for one generation run.
    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`PuzzleSeed`] from a hex string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string was not exactly 64 characters long.
    #[display("expected 64 hex characters, found {found}")]
    BadLength {
        /// Number of characters found.
        found: usize,
    },
    /// The string contained a non-hexadecimal character.
    #[display("invalid hex character {found:?}")]
    BadCharacter {
        /// The offending character.
        found: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    #[expect(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(ch) = s.chars().find(|ch| !ch.is_ascii_hexdigit()) {
            return Err(ParseSeedError::BadCharacter { found: ch });
        }
        if s.len() != 64 {
            return Err(ParseSeedError::BadLength { found: s.chars().count() });
        }
        let mut bytes = [0u8; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            let hi = char::from(pair[0]).to_digit(16).unwrap_or_default();
            let lo = char::from(pair[1]).to_digit(16).unwrap_or_default();
            *byte = ((hi << 4) | lo) as u8;
        }
        Ok(Self(bytes))
    }
}
