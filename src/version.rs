//! Dotted version strings and their positional ordering.
//!
//! A [`Version`] is the sequence of integers obtained by splitting a string
//! like `"1.10.2"` on `.`. Versions compare segment by segment as integers,
//! never as text, so `10.0` is newer than `9.9`. Segment counts are not
//! normalized: when one version is a strict prefix of the other, the shorter
//! one is older (`1.2 < 1.2.0`).
//!
//! # Example
//!
//! ```
//! use vercheck::version::parse_version;
//!
//! let old = parse_version("9.9").unwrap();
//! let new = parse_version("10.0").unwrap();
//! assert!(old < new);
//! assert_eq!(new.segments(), &[10, 0]);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VercheckError};

/// A parsed dotted version.
///
/// Ordering is the derived lexicographic ordering of the segment vector,
/// which is exactly positional sequence comparison.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version(Vec<u64>);

impl Version {
    /// Build a version directly from its segments.
    pub fn from_segments(segments: impl Into<Vec<u64>>) -> Self {
        Self(segments.into())
    }

    /// The integer segments, most significant first.
    pub fn segments(&self) -> &[u64] {
        &self.0
    }
}

/// Parse a dotted version string into its integer segments.
///
/// Every `.`-separated segment must be a non-empty run of ASCII digits that
/// fits in a `u64`. Whitespace, signs, letters and empty segments are all
/// rejected.
///
/// # Errors
///
/// Returns [`VercheckError::VersionParse`] naming the first bad segment.
pub fn parse_version(version: &str) -> Result<Version> {
    version
        .split('.')
        .map(|segment| parse_segment(version, segment))
        .collect::<Result<Vec<_>>>()
        .map(Version)
}

fn parse_segment(input: &str, segment: &str) -> Result<u64> {
    let invalid = || VercheckError::VersionParse {
        input: input.to_string(),
        segment: segment.to_string(),
    };

    // u64::from_str accepts a leading '+', which is not a version digit.
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    segment.parse().map_err(|_| invalid())
}

impl FromStr for Version {
    type Err = VercheckError;

    fn from_str(s: &str) -> Result<Self> {
        parse_version(s)
    }
}

impl TryFrom<String> for Version {
    type Error = VercheckError;

    fn try_from(value: String) -> Result<Self> {
        parse_version(&value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.0 {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
            first = false;
        }
        Ok(())
    }
}
