// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::process::ExitCode;

use clap::Parser;
use console::style;
use figment::Figment;
use oauth2_types::scope::{MalformedScopeParameter, Scope, is_scope_token};
use oauth2_utils_config::{ConfigurationSectionExt, ScopesConfig};
use tracing::{info_span, warn};

#[derive(Parser, Debug)]
pub(super) struct Options {
    #[command(subcommand)]
    subcommand: Subcommand,
}

#[derive(Parser, Debug)]
enum Subcommand {
    /// Parse a scope parameter and print it in its canonical form
    ///
    /// Fails if the parameter is malformed, or if it contains tokens which are
    /// not in the configured list of supported scopes.
    Check {
        /// The space-separated scope parameter
        parameter: String,
    },

    /// Check whether a string is a single valid scope token
    Token {
        /// The scope token
        token: String,
    },

    /// Print the scope a request would get, falling back to the configured
    /// default scope when the parameter is absent or empty
    Resolve {
        /// The space-separated scope parameter, if any
        parameter: Option<String>,
    },
}

/// Why a scope parameter was rejected
#[derive(Debug, PartialEq, Eq)]
enum Rejection {
    /// The parameter does not follow the scope grammar
    Malformed,

    /// Some tokens are not in the configured list of supported scopes
    Unsupported { scope: Scope, unsupported: Scope },
}

/// Parse a scope parameter and check it against the configured scopes
fn check(config: &ScopesConfig, parameter: &str) -> Result<Scope, Rejection> {
    let scope = Scope::from_parameter(parameter).map_err(|_| Rejection::Malformed)?;

    let unsupported = config.unsupported(&scope);
    if !unsupported.is_empty() {
        return Err(Rejection::Unsupported { scope, unsupported });
    }

    Ok(scope)
}

/// Resolve the scope a request would get
fn resolve(
    config: &ScopesConfig,
    parameter: Option<&str>,
) -> Result<Scope, MalformedScopeParameter> {
    config.resolve(parameter)
}

fn exit_code<T, E>(result: &Result<T, E>) -> ExitCode {
    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

impl Options {
    pub fn run(self, figment: &Figment) -> anyhow::Result<ExitCode> {
        use Subcommand as SC;
        match self.subcommand {
            SC::Check { parameter } => {
                let _span = info_span!("cli.scope.check").entered();
                let config = ScopesConfig::extract_or_default(figment)?;

                let result = check(&config, &parameter);
                match &result {
                    Ok(scope) => println!("{scope}"),

                    Err(Rejection::Malformed) => {
                        warn!(?parameter, "Malformed scope parameter");
                        println!("{} {parameter:?}", style("malformed").red().bold());
                    }

                    Err(Rejection::Unsupported { scope, unsupported }) => {
                        warn!(%unsupported, "Scope contains unsupported tokens");
                        println!("{scope}");
                        for token in unsupported {
                            println!("{} {token}", style("unsupported").yellow().bold());
                        }
                    }
                }

                Ok(exit_code(&result))
            }

            SC::Token { token } => {
                let _span = info_span!("cli.scope.token").entered();

                if is_scope_token(&token) {
                    println!("{} {token}", style("valid").green().bold());
                    Ok(ExitCode::SUCCESS)
                } else {
                    println!("{} {token:?}", style("invalid").red().bold());
                    Ok(ExitCode::FAILURE)
                }
            }

            SC::Resolve { parameter } => {
                let _span = info_span!("cli.scope.resolve").entered();
                let config = ScopesConfig::extract_or_default(figment)?;

                let result = resolve(&config, parameter.as_deref());
                match &result {
                    Ok(scope) => println!("{scope}"),
                    Err(e) => {
                        warn!(?parameter, "{e}");
                        println!("{} {parameter:?}", style("malformed").red().bold());
                    }
                }

                Ok(exit_code(&result))
            }
        }
    }
}
