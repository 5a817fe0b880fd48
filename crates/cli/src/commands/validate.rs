// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use console::style;
use oauth2_types::{rfc6749, scope};
use tracing::info_span;

/// The kind of element to validate
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    ClientId,
    ClientSecret,
    AccessToken,
    RefreshToken,
    Code,
    State,
    Username,
    Password,
    ResponseType,
    GrantName,
    TokenType,
    Error,
    ErrorDescription,
    ExpiresIn,
    ScopeToken,
    Scope,
}

impl Kind {
    fn check(self, value: &str) -> bool {
        match self {
            Self::ClientId => rfc6749::is_client_id(value),
            Self::ClientSecret => rfc6749::is_client_secret(value),
            Self::AccessToken => rfc6749::is_access_token(value),
            Self::RefreshToken => rfc6749::is_refresh_token(value),
            Self::Code => rfc6749::is_authorization_code(value),
            Self::State => rfc6749::is_state(value),
            Self::Username => rfc6749::is_username(value),
            Self::Password => rfc6749::is_password(value),
            Self::ResponseType => rfc6749::is_response_type(value),
            Self::GrantName => rfc6749::is_grant_name(value),
            Self::TokenType => rfc6749::is_token_type_name(value),
            Self::Error => rfc6749::is_error_code(value),
            Self::ErrorDescription => rfc6749::is_error_description(value),
            Self::ExpiresIn => rfc6749::is_expires_in(value),
            Self::ScopeToken => scope::is_scope_token(value),
            Self::Scope => scope::is_scope_parameter(value),
        }
    }
}

#[derive(Parser, Debug)]
pub(super) struct Options {
    /// What the value is
    #[arg(value_enum)]
    kind: Kind,

    /// The value to check
    #[arg(allow_hyphen_values = true)]
    value: String,
}

impl Options {
    pub fn run(self) -> ExitCode {
        let _span = info_span!("cli.validate", kind = ?self.kind).entered();

        if self.kind.check(&self.value) {
            println!("{}", style("valid").green().bold());
            ExitCode::SUCCESS
        } else {
            println!("{} {:?}", style("invalid").red().bold(), self.value);
            ExitCode::FAILURE
        }
    }
}
