// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use figment::Figment;
use serde::de::DeserializeOwned;

/// Trait implemented by all configuration sections, to load a specific part
/// of the config out of a [`Figment`].
pub trait ConfigurationSection: Sized + DeserializeOwned {
    /// Specify where this section should live relative to the root.
    const PATH: Option<&'static str> = None;

    /// Validate the configuration section
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    fn validate(&self, _figment: &Figment) -> Result<(), figment::Error> {
        Ok(())
    }

    /// Extract configuration from a Figment instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration could not be loaded
    fn extract(figment: &Figment) -> Result<Self, figment::Error> {
        let this: Self = if let Some(path) = Self::PATH {
            figment.extract_inner(path)?
        } else {
            figment.extract()?
        };

        this.validate(figment)?;
        Ok(this)
    }
}

/// Extension trait for [`ConfigurationSection`] to allow extracting the
/// configuration section from a [`Figment`] or return the default value if the
/// section is not present.
pub trait ConfigurationSectionExt: ConfigurationSection + Default {
    /// Extract the configuration section from the given [`Figment`], or return
    /// the default value if the section is not present.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration section is invalid.
    fn extract_or_default(figment: &Figment) -> Result<Self, figment::Error> {
        match Self::PATH {
            Some(path) if !figment.contains(path) => {
                tracing::debug!(path, "Configuration section not present, using defaults");
                let this = Self::default();
                this.validate(figment)?;
                Ok(this)
            }
            _ => Self::extract(figment),
        }
    }
}

impl<T: ConfigurationSection + Default> ConfigurationSectionExt for T {}

/// Build a validation error pointing at the given section of the
/// configuration, so that it can be reported with the file it comes from.
pub(crate) fn section_error(figment: &Figment, path: &str, message: String) -> figment::Error {
    let mut error = figment::Error::from(message);
    error.metadata = figment.find_metadata(path).cloned();
    error.profile = Some(figment::Profile::Default);
    error.path = path.split('.').map(ToOwned::to_owned).collect();
    error
}
