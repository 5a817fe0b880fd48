// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use oauth2_types::scope::{MalformedScopeParameter, Scope, ScopeToken};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{ConfigurationSection, util::section_error};

/// Scopes that clients may request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScopesConfig {
    /// The scope tokens that clients may request.
    ///
    /// When empty, every well-formed scope token is accepted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(with = "Vec<String>")]
    pub supported: Vec<ScopeToken>,

    /// Space-separated scope used when a request has no `scope` parameter.
    #[serde(default, skip_serializing_if = "Scope::is_empty")]
    #[schemars(with = "String")]
    pub default: Scope,
}

impl ScopesConfig {
    pub(crate) fn is_default(&self) -> bool {
        self == &Self::default()
    }

    /// The supported scope tokens, as a [`Scope`]
    #[must_use]
    pub fn supported_scope(&self) -> Scope {
        self.supported.iter().cloned().collect()
    }

    /// The tokens of the requested scope which are not supported.
    ///
    /// Always empty if no supported scope tokens are configured.
    #[must_use]
    pub fn unsupported(&self, requested: &Scope) -> Scope {
        if self.supported.is_empty() {
            return Scope::empty();
        }

        requested.difference(&self.supported_scope())
    }

    /// Parse the `scope` parameter of a request, falling back to the default
    /// scope if it is absent or empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is present and malformed.
    pub fn resolve(&self, parameter: Option<&str>) -> Result<Scope, MalformedScopeParameter> {
        let scope = Scope::from_optional_parameter(parameter)?;
        if scope.is_empty() {
            return Ok(self.default.clone());
        }

        Ok(scope)
    }
}

impl ConfigurationSection for ScopesConfig {
    const PATH: Option<&'static str> = Some("scopes");

    fn validate(&self, figment: &figment::Figment) -> Result<(), figment::Error> {
        if self.supported.is_empty() {
            tracing::debug!("No supported scope configured, any well-formed scope is accepted");
            return Ok(());
        }

        let unsupported = self.unsupported(&self.default);
        if !unsupported.is_empty() {
            return Err(section_error(
                figment,
                "scopes.default",
                format!("The default scope contains unsupported tokens: {unsupported}"),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use figment::{
        Figment, Jail,
        providers::{Format, Yaml},
    };
    use oauth2_types::scope::{OPENID, PROFILE};

    use super::*;

    #[test]
    fn load_config() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.yaml",
                r"
                    scopes:
                      supported:
                        - openid
                        - profile
                        - urn:example:api:*
                      default: openid profile
                ",
            )?;

            let figment = Figment::new().merge(Yaml::file("config.yaml"));
            let config = ScopesConfig::extract(&figment)?;

            assert_eq!(config.supported.len(), 3);
            assert_eq!(config.default, Scope::from_iter([OPENID, PROFILE]));

            let requested = Scope::from_parameter("openid email").unwrap();
            assert_eq!(config.unsupported(&requested).to_parameter(), "email");

            Ok(())
        });
    }

    #[test]
    fn reject_malformed_tokens() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.yaml",
                r#"
                    scopes:
                      supported:
                        - "not a token"
                "#,
            )?;

            let figment = Figment::new().merge(Yaml::file("config.yaml"));
            ScopesConfig::extract(&figment).unwrap_err();

            jail.create_file(
                "config.yaml",
                r#"
                    scopes:
                      default: "openid  profile"
                "#,
            )?;

            let figment = Figment::new().merge(Yaml::file("config.yaml"));
            ScopesConfig::extract(&figment).unwrap_err();

            Ok(())
        });
    }

    #[test]
    fn reject_unsupported_default() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.yaml",
                r"
                    scopes:
                      supported: [openid]
                      default: openid profile
                ",
            )?;

            let figment = Figment::new().merge(Yaml::file("config.yaml"));
            let error = ScopesConfig::extract(&figment).unwrap_err();
            assert!(error.to_string().contains("unsupported tokens: profile"));

            Ok(())
        });
    }

    #[test]
    fn resolve_scope() {
        let config = ScopesConfig {
            supported: Vec::new(),
            default: Scope::from_iter([OPENID]),
        };

        assert_eq!(config.resolve(None), Ok(Scope::from_iter([OPENID])));
        assert_eq!(config.resolve(Some("")), Ok(Scope::from_iter([OPENID])));
        assert_eq!(config.resolve(Some("profile")), Ok(Scope::from_iter([PROFILE])));
        assert_eq!(config.resolve(Some(" ")), Err(MalformedScopeParameter));

        let requested = Scope::from_parameter("anything:goes").unwrap();
        assert!(config.unsupported(&requested).is_empty());
    }
}
