//! Bureau Types

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::{Error, Result};

/// Maximum length of a bureau code.
pub const MAX_BUREAU_CODE_LENGTH: usize = 32;

static VALID_BUREAU_CODE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[A-Z][A-Z0-9_]*$").expect("valid regex"));

/// Code identifying a committee bureau (e.g. `FINANCE`, `GENERAL_AFFAIRS`).
///
/// Codes are uppercase ASCII, start with a letter and may contain digits and
/// underscores. Values are checked on construction and on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BureauCode(SmolStr);

impl BureauCode {
    /// Parse and validate a bureau code.
    pub fn new(code: &str) -> Result<Self> {
        if code.is_empty() {
            return Err(Error::EmptyBureauCode);
        }
        if code.len() > MAX_BUREAU_CODE_LENGTH {
            return Err(Error::BureauCodeTooLong {
                code: code.to_string(),
                max: MAX_BUREAU_CODE_LENGTH,
            });
        }
        if !VALID_BUREAU_CODE.is_match(code) {
            return Err(Error::InvalidBureauCode(code.to_string()));
        }
        Ok(Self(SmolStr::new(code)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BureauCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BureauCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for BureauCode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<BureauCode> for String {
    fn from(code: BureauCode) -> Self {
        code.0.to_string()
    }
}
