// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

mod scopes;
mod standards;

pub use self::{scopes::ScopesConfig, standards::StandardsConfig};
use crate::util::ConfigurationSection;

/// Application configuration root
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct RootConfig {
    /// Standards used to filter the registries
    #[serde(default, skip_serializing_if = "StandardsConfig::is_default")]
    pub standards: StandardsConfig,

    /// Scopes that clients may request
    #[serde(default, skip_serializing_if = "ScopesConfig::is_default")]
    pub scopes: ScopesConfig,
}

impl ConfigurationSection for RootConfig {
    fn validate(&self, figment: &figment::Figment) -> Result<(), figment::Error> {
        self.standards.validate(figment)?;
        self.scopes.validate(figment)?;

        Ok(())
    }
}
