// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use oauth2_registry::{Standard, StandardSet};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{ConfigurationSection, util::section_error};

fn default_enabled() -> Vec<Standard> {
    vec![Standard::OAuth2]
}

/// Which standards are supported, used to filter the registries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StandardsConfig {
    /// The standards to take registry entries from.
    ///
    /// Defaults to `[oauth2]`.
    #[serde(default = "default_enabled")]
    pub enabled: Vec<Standard>,
}

impl Default for StandardsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

impl StandardsConfig {
    pub(crate) fn is_default(&self) -> bool {
        self == &Self::default()
    }

    /// The enabled standards, as a set
    #[must_use]
    pub fn standard_set(&self) -> StandardSet {
        self.enabled.iter().copied().collect()
    }
}

impl ConfigurationSection for StandardsConfig {
    const PATH: Option<&'static str> = Some("standards");

    fn validate(&self, figment: &figment::Figment) -> Result<(), figment::Error> {
        if self.enabled.is_empty() {
            return Err(section_error(
                figment,
                "standards.enabled",
                "At least one standard must be enabled".to_owned(),
            ));
        }

        Ok(())
    }
}
