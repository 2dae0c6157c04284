// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pitchdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use smol_str::SmolStr;

/// Route path identifying one slide in a deck (e.g. `/problem`, `/the-ask`).
///
/// Ids are compared byte-for-byte; `/Problem` and `/problem` are different slides. The value is
/// kept in a [`SmolStr`] since route paths are short and cloned on every transition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlideId(SmolStr);

impl SlideId {
    pub fn new(value: impl AsRef<str>) -> Result<Self, SlideIdError> {
        let value = value.as_ref();
        validate_route_path(value)?;
        Ok(Self(SmolStr::new(value)))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for SlideId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for SlideId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for SlideId {
    type Err = SlideIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SlideId {
    type Error = SlideIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideIdError {
    Empty,
    MissingLeadingSlash { value: String },
    InvalidCharacters { value: String },
}

impl fmt::Display for SlideIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("slide id must not be empty"),
            Self::MissingLeadingSlash { value } => {
                write!(f, "slide id {value:?} must start with '/'")
            }
            Self::InvalidCharacters { value } => write!(
                f,
                "slide id {value:?} must be a route path of letters, digits, '-', '_', '.' or '~' segments"
            ),
        }
    }
}

impl std::error::Error for SlideIdError {}

fn route_path_regex() -> &'static Regex {
    static ROUTE_PATH: OnceLock<Regex> = OnceLock::new();
    ROUTE_PATH.get_or_init(|| {
        Regex::new(r"^/(?:[A-Za-z0-9._~-]+(?:/[A-Za-z0-9._~-]+)*)?$").expect("route path regex")
    })
}

fn validate_route_path(value: &str) -> Result<(), SlideIdError> {
    if value.is_empty() {
        return Err(SlideIdError::Empty);
    }
    if !value.starts_with('/') {
        return Err(SlideIdError::MissingLeadingSlash { value: value.to_owned() });
    }
    if !route_path_regex().is_match(value) {
        return Err(SlideIdError::InvalidCharacters { value: value.to_owned() });
    }
    Ok(())
}
