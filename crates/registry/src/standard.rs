// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use bitflags::bitflags;
use thiserror::Error;

/// The error returned when parsing an unknown standard name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown standard {0:?}, expected one of \"oauth2\", \"oidc\" or \"uma2\"")]
pub struct UnknownStandard(String);

/// A standard from which a registry entry originates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Standard {
    /// OAuth 2.0, its extensions and profiles published as RFCs
    OAuth2,

    /// OpenID Connect
    Oidc,

    /// User-Managed Access 2.0
    Uma2,
}

impl Standard {
    /// All the known standards.
    pub const ALL: [Standard; 3] = [Self::OAuth2, Self::Oidc, Self::Uma2];

    /// The name of this standard, as used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OAuth2 => "oauth2",
            Self::Oidc => "oidc",
            Self::Uma2 => "uma2",
        }
    }
}

impl core::fmt::Display for Standard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Standard {
    type Err = UnknownStandard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "oauth2" => Ok(Self::OAuth2),
            "oidc" => Ok(Self::Oidc),
            "uma2" => Ok(Self::Uma2),
            _ => Err(UnknownStandard(s.to_owned())),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Standard {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        core::str::FromStr::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for Standard {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for Standard {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        std::borrow::Cow::Borrowed("Standard")
    }

    fn json_schema(_gen: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "description": "A standard from which registry entries originate",
            "anyOf": [
                {
                    "description": "OAuth 2.0 and its extensions",
                    "const": "oauth2",
                },
                {
                    "description": "OpenID Connect",
                    "const": "oidc",
                },
                {
                    "description": "User-Managed Access 2.0",
                    "const": "uma2",
                },
            ],
        })
    }
}

bitflags! {
    /// A set of [`Standard`]s, used to filter the registries.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StandardSet: u8 {
        /// See [`Standard::OAuth2`]
        const OAUTH2 = 1;
        /// See [`Standard::Oidc`]
        const OIDC = 1 << 1;
        /// See [`Standard::Uma2`]
        const UMA2 = 1 << 2;
    }
}

impl StandardSet {
    /// Whether the given standard is part of this set.
    #[must_use]
    pub const fn includes(self, standard: Standard) -> bool {
        self.contains(Self::from_standard(standard))
    }

    const fn from_standard(standard: Standard) -> Self {
        match standard {
            Standard::OAuth2 => Self::OAUTH2,
            Standard::Oidc => Self::OIDC,
            Standard::Uma2 => Self::UMA2,
        }
    }

    /// Iterate over the standards in this set.
    pub fn standards(self) -> impl Iterator<Item = Standard> {
        Standard::ALL
            .into_iter()
            .filter(move |standard| self.includes(*standard))
    }
}

impl From<Standard> for StandardSet {
    fn from(standard: Standard) -> Self {
        Self::from_standard(standard)
    }
}

impl FromIterator<Standard> for StandardSet {
    fn from_iter<T: IntoIterator<Item = Standard>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, standard| set | standard.into())
    }
}
