// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! Static registries of [OAuth 2.0], [OpenID Connect] and [UMA 2.0] names.
//!
//! Every entry is tagged with the [`Standard`] it comes from, and every query
//! takes a [`StandardSet`] to only return the entries an integrator supports.
//!
//! [OAuth 2.0]: https://oauth.net/2/
//! [OpenID Connect]: https://openid.net/connect/
//! [UMA 2.0]: https://docs.kantarainitiative.org/uma/wg/rec-oauth-uma-grant-2.0.html

#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod errors;
pub mod parameters;
mod standard;
pub mod values;

pub use self::{
    errors::{ErrorCode, ErrorLocation, error_codes, error_codes_at},
    parameters::{Location, Parameter, parameters, parameters_at},
    standard::{Standard, StandardSet, UnknownStandard},
    values::{
        authorization_server_metadata, client_metadata, endpoint_auth_methods, grant_types,
        response_types, token_type_hints,
    },
};

/// An error that occurred while parsing a value from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    _private: (),
}

impl ParseError {
    fn new() -> Self {
        Self { _private: () }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Parse error")
    }
}

impl std::error::Error for ParseError {}

/// An entry of a registry which is only tagged by its standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// The registered name
    pub name: &'static str,

    /// The standard defining this name
    pub standard: Standard,
}

impl Entry {
    const fn new(name: &'static str, standard: Standard) -> Self {
        Self { name, standard }
    }
}

/// One of the registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// See [`parameters`]
    Parameters,

    /// See [`grant_types`]
    GrantTypes,

    /// See [`response_types`]
    ResponseTypes,

    /// See [`token_type_hints`]
    TokenTypeHints,

    /// See [`endpoint_auth_methods`]
    EndpointAuthMethods,

    /// See [`client_metadata`]
    ClientMetadata,

    /// See [`authorization_server_metadata`]
    AuthorizationServerMetadata,

    /// See [`error_codes`]
    ErrorCodes,
}

impl Table {
    /// All the registries.
    pub const ALL: [Table; 8] = [
        Self::Parameters,
        Self::GrantTypes,
        Self::ResponseTypes,
        Self::TokenTypeHints,
        Self::EndpointAuthMethods,
        Self::ClientMetadata,
        Self::AuthorizationServerMetadata,
        Self::ErrorCodes,
    ];

    /// The names registered in this registry by the given standards.
    #[must_use]
    pub fn names(self, standards: StandardSet) -> Vec<&'static str> {
        match self {
            Self::Parameters => parameters(standards),
            Self::GrantTypes => grant_types(standards),
            Self::ResponseTypes => response_types(standards),
            Self::TokenTypeHints => token_type_hints(standards),
            Self::EndpointAuthMethods => endpoint_auth_methods(standards),
            Self::ClientMetadata => client_metadata(standards),
            Self::AuthorizationServerMetadata => authorization_server_metadata(standards),
            Self::ErrorCodes => error_codes(standards),
        }
    }
}

impl core::fmt::Display for Table {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Parameters => write!(f, "parameters"),
            Self::GrantTypes => write!(f, "grant-types"),
            Self::ResponseTypes => write!(f, "response-types"),
            Self::TokenTypeHints => write!(f, "token-type-hints"),
            Self::EndpointAuthMethods => write!(f, "endpoint-auth-methods"),
            Self::ClientMetadata => write!(f, "client-metadata"),
            Self::AuthorizationServerMetadata => write!(f, "authorization-server-metadata"),
            Self::ErrorCodes => write!(f, "error-codes"),
        }
    }
}

impl core::str::FromStr for Table {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|table| table.to_string() == s)
            .ok_or_else(ParseError::new)
    }
}
