use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ArktosError;

/// A supported UI locale. `qq` is a debug locale without its own bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ca,
    Es,
    Qq,
}

pub const DEFAULT_LOCALE: Locale = Locale::En;

pub const SUPPORTED_LOCALES: [Locale; 4] = [Locale::En, Locale::Ca, Locale::Es, Locale::Qq];

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ca => "ca",
            Locale::Es => "es",
            Locale::Qq => "qq",
        }
    }

    /// English display name
    pub fn name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ca => "Catalan",
            Locale::Es => "Spanish",
            Locale::Qq => "QQQQQ (Debug)",
        }
    }
}

impl FromStr for Locale {
    type Err = ArktosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SUPPORTED_LOCALES
            .into_iter()
            .find(|locale| locale.code() == s)
            .ok_or_else(|| ArktosError::UnknownLocale(s.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
