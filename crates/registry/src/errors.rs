// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! Error codes, from RFC6749 and the [OAuth Extensions Error] registry.
//!
//! [OAuth Extensions Error]: https://www.iana.org/assignments/oauth-parameters/oauth-parameters.xhtml#extensions-error

use self::ErrorLocation::{
    AuthorizationEndpoint as Authz, RegistrationEndpoint as Registration,
    ResourceAccess as Resource, TokenEndpoint as Token,
};
use crate::{
    ParseError, Standard,
    Standard::{OAuth2, Oidc, Uma2},
    StandardSet,
};

/// Where an error code may be returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorLocation {
    /// `authorization endpoint`
    AuthorizationEndpoint,

    /// `token endpoint`
    TokenEndpoint,

    /// `resource access error response`
    ResourceAccess,

    /// `client registration endpoint`
    RegistrationEndpoint,
}

impl core::fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AuthorizationEndpoint => write!(f, "authorization_endpoint"),
            Self::TokenEndpoint => write!(f, "token_endpoint"),
            Self::ResourceAccess => write!(f, "resource_access"),
            Self::RegistrationEndpoint => write!(f, "registration_endpoint"),
        }
    }
}

impl core::str::FromStr for ErrorLocation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "authorization_endpoint" => Ok(Self::AuthorizationEndpoint),
            "token_endpoint" => Ok(Self::TokenEndpoint),
            "resource_access" => Ok(Self::ResourceAccess),
            "registration_endpoint" => Ok(Self::RegistrationEndpoint),
            _ => Err(ParseError::new()),
        }
    }
}

/// An entry of the error codes registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCode {
    /// The error code, as sent in the `error` parameter
    pub name: &'static str,

    /// The standard defining this error code
    pub standard: Standard,

    /// Where this error code may be returned
    pub locations: &'static [ErrorLocation],
}

const fn e(
    name: &'static str,
    standard: Standard,
    locations: &'static [ErrorLocation],
) -> ErrorCode {
    ErrorCode {
        name,
        standard,
        locations,
    }
}

/// All the known error codes.
pub static ERROR_CODES: &[ErrorCode] = &[
    // RFC6749, RFC6750
    e("invalid_request", OAuth2, &[Authz, Token, Resource]),
    e("invalid_client", OAuth2, &[Token]),
    e("invalid_grant", OAuth2, &[Token]),
    e("unauthorized_client", OAuth2, &[Authz, Token]),
    e("unsupported_grant_type", OAuth2, &[Token]),
    e("access_denied", OAuth2, &[Authz]),
    e("unsupported_response_type", OAuth2, &[Authz]),
    e("invalid_scope", OAuth2, &[Authz, Token]),
    e("server_error", OAuth2, &[Authz]),
    e("temporarily_unavailable", OAuth2, &[Authz]),
    e("invalid_token", OAuth2, &[Resource]),
    e("insufficient_scope", OAuth2, &[Resource]),
    // RFC7591
    e("invalid_redirect_uri", OAuth2, &[Registration]),
    e("invalid_client_metadata", OAuth2, &[Registration]),
    e("invalid_software_statement", OAuth2, &[Registration]),
    e("unapproved_software_statement", OAuth2, &[Registration]),
    // RFC8628
    e("authorization_pending", OAuth2, &[Token]),
    e("slow_down", OAuth2, &[Token]),
    e("expired_token", OAuth2, &[Token]),
    // RFC8707
    e("invalid_target", OAuth2, &[Authz, Token]),
    // OpenID Connect Core 1.0
    e("interaction_required", Oidc, &[Authz]),
    e("login_required", Oidc, &[Authz]),
    e("account_selection_required", Oidc, &[Authz]),
    e("consent_required", Oidc, &[Authz]),
    e("invalid_request_uri", Oidc, &[Authz]),
    e("invalid_request_object", Oidc, &[Authz]),
    e("request_not_supported", Oidc, &[Authz]),
    e("request_uri_not_supported", Oidc, &[Authz]),
    e("registration_not_supported", Oidc, &[Authz]),
    // UMA 2.0 Grant
    e("need_info", Uma2, &[Token]),
    e("request_denied", Uma2, &[Token]),
    e("request_submitted", Uma2, &[Token]),
];

/// The error codes defined by the given standards.
#[must_use]
pub fn error_codes(standards: StandardSet) -> Vec<&'static str> {
    ERROR_CODES
        .iter()
        .filter(|error| standards.includes(error.standard))
        .map(|error| error.name)
        .collect()
}

/// The error codes defined by the given standards which may be returned in
/// the given location.
#[must_use]
pub fn error_codes_at(location: ErrorLocation, standards: StandardSet) -> Vec<&'static str> {
    ERROR_CODES
        .iter()
        .filter(|error| standards.includes(error.standard))
        .filter(|error| error.locations.contains(&location))
        .map(|error| error.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_access_errors() {
        assert_eq!(
            error_codes_at(ErrorLocation::ResourceAccess, StandardSet::all()),
            ["invalid_request", "invalid_token", "insufficient_scope"]
        );
    }

    #[test]
    fn token_endpoint_errors() {
        let errors = error_codes_at(ErrorLocation::TokenEndpoint, StandardSet::UMA2);
        assert_eq!(errors, ["need_info", "request_denied", "request_submitted"]);

        let errors = error_codes_at(ErrorLocation::TokenEndpoint, StandardSet::OAUTH2);
        assert!(errors.contains(&"invalid_grant"));
        assert!(errors.contains(&"invalid_scope"));
        assert!(!errors.contains(&"access_denied"));
        assert!(!errors.contains(&"need_info"));
    }

    #[test]
    fn filter_by_standard() {
        let errors = error_codes(StandardSet::OIDC);
        assert_eq!(errors.len(), 9);
        assert!(errors.iter().all(|error| error.ends_with("_required")
            || error.contains("request")
            || error.contains("registration")));

        assert!(error_codes(StandardSet::empty()).is_empty());
    }

    #[test]
    fn codes_are_valid() {
        for error in ERROR_CODES {
            assert!(
                error
                    .name
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b == b'_'),
                "{}",
                error.name
            );
        }
    }

    #[test]
    fn parse_location() {
        for location in [
            ErrorLocation::AuthorizationEndpoint,
            ErrorLocation::TokenEndpoint,
            ErrorLocation::ResourceAccess,
            ErrorLocation::RegistrationEndpoint,
        ] {
            assert_eq!(location.to_string().parse(), Ok(location));
        }
        assert!("userinfo_endpoint".parse::<ErrorLocation>().is_err());
    }
}
