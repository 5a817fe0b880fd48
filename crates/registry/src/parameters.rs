// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! The [OAuth Parameters] registry.
//!
//! [OAuth Parameters]: https://www.iana.org/assignments/oauth-parameters/oauth-parameters.xhtml#parameters

use self::Location::{
    AuthorizationRequest as AReq, AuthorizationResponse as ARes, TokenRequest as TReq,
    TokenResponse as TRes,
};
use crate::{
    ParseError, Standard,
    Standard::{OAuth2, Oidc, Uma2},
    StandardSet,
};

/// A location in which a parameter may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Location {
    /// `authorization request`
    AuthorizationRequest,

    /// `authorization response`
    AuthorizationResponse,

    /// `token request`
    TokenRequest,

    /// `token response`
    TokenResponse,
}

impl core::fmt::Display for Location {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AuthorizationRequest => write!(f, "authorization_request"),
            Self::AuthorizationResponse => write!(f, "authorization_response"),
            Self::TokenRequest => write!(f, "token_request"),
            Self::TokenResponse => write!(f, "token_response"),
        }
    }
}

impl core::str::FromStr for Location {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "authorization_request" => Ok(Self::AuthorizationRequest),
            "authorization_response" => Ok(Self::AuthorizationResponse),
            "token_request" => Ok(Self::TokenRequest),
            "token_response" => Ok(Self::TokenResponse),
            _ => Err(ParseError::new()),
        }
    }
}

/// An entry of the parameters registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    /// The name of the parameter
    pub name: &'static str,

    /// The standard defining this parameter
    pub standard: Standard,

    /// Where this parameter may appear
    pub locations: &'static [Location],
}

const fn p(name: &'static str, standard: Standard, locations: &'static [Location]) -> Parameter {
    Parameter {
        name,
        standard,
        locations,
    }
}

/// All the known parameters.
pub static PARAMETERS: &[Parameter] = &[
    // RFC6749
    p("client_id", OAuth2, &[AReq, TReq]),
    p("client_secret", OAuth2, &[TReq]),
    p("response_type", OAuth2, &[AReq]),
    p("redirect_uri", OAuth2, &[AReq, TReq]),
    p("scope", OAuth2, &[AReq, ARes, TReq, TRes]),
    p("state", OAuth2, &[AReq, ARes]),
    p("code", OAuth2, &[ARes, TReq]),
    p("error", OAuth2, &[ARes, TRes]),
    p("error_description", OAuth2, &[ARes, TRes]),
    p("error_uri", OAuth2, &[ARes, TRes]),
    p("grant_type", OAuth2, &[TReq]),
    p("access_token", OAuth2, &[ARes, TRes]),
    p("token_type", OAuth2, &[ARes, TRes]),
    p("expires_in", OAuth2, &[ARes, TRes]),
    p("username", OAuth2, &[TReq]),
    p("password", OAuth2, &[TReq]),
    p("refresh_token", OAuth2, &[TReq, TRes]),
    // RFC7521, RFC7523
    p("assertion", OAuth2, &[TReq]),
    p("client_assertion", OAuth2, &[TReq]),
    p("client_assertion_type", OAuth2, &[TReq]),
    // RFC7636
    p("code_verifier", OAuth2, &[TReq]),
    p("code_challenge", OAuth2, &[AReq]),
    p("code_challenge_method", OAuth2, &[AReq]),
    // RFC8628
    p("device_code", OAuth2, &[TReq]),
    // RFC8707
    p("resource", OAuth2, &[AReq, TReq]),
    // RFC8693
    p("audience", OAuth2, &[TReq]),
    p("subject_token", OAuth2, &[TReq]),
    p("subject_token_type", OAuth2, &[TReq]),
    p("actor_token", OAuth2, &[TReq]),
    p("actor_token_type", OAuth2, &[TReq]),
    p("requested_token_type", OAuth2, &[TReq]),
    p("issued_token_type", OAuth2, &[TRes]),
    // OpenID Connect Core 1.0
    p("nonce", Oidc, &[AReq]),
    p("display", Oidc, &[AReq]),
    p("prompt", Oidc, &[AReq]),
    p("max_age", Oidc, &[AReq]),
    p("ui_locales", Oidc, &[AReq]),
    p("claims_locales", Oidc, &[AReq]),
    p("id_token_hint", Oidc, &[AReq]),
    p("login_hint", Oidc, &[AReq]),
    p("acr_values", Oidc, &[AReq]),
    p("claims", Oidc, &[AReq]),
    p("registration", Oidc, &[AReq]),
    p("request", Oidc, &[AReq]),
    p("request_uri", Oidc, &[AReq]),
    p("id_token", Oidc, &[ARes, TRes]),
    // OpenID Connect Session Management 1.0
    p("session_state", Oidc, &[ARes]),
    // OAuth 2.0 Multiple Response Type Encoding Practices
    p("response_mode", Oidc, &[AReq]),
    // UMA 2.0 Grant
    p("ticket", Uma2, &[TReq]),
    p("claim_token", Uma2, &[TReq]),
    p("claim_token_format", Uma2, &[TReq]),
    p("pct", Uma2, &[TReq, TRes]),
    p("rpt", Uma2, &[TReq]),
    p("upgraded", Uma2, &[TRes]),
];

/// The names of the parameters defined by the given standards.
#[must_use]
pub fn parameters(standards: StandardSet) -> Vec<&'static str> {
    PARAMETERS
        .iter()
        .filter(|parameter| standards.includes(parameter.standard))
        .map(|parameter| parameter.name)
        .collect()
}

/// The names of the parameters defined by the given standards which may
/// appear in the given location.
#[must_use]
pub fn parameters_at(location: Location, standards: StandardSet) -> Vec<&'static str> {
    PARAMETERS
        .iter()
        .filter(|parameter| standards.includes(parameter.standard))
        .filter(|parameter| parameter.locations.contains(&location))
        .map(|parameter| parameter.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = PARAMETERS.iter().map(|parameter| parameter.name).collect();
        names.sort_unstable();
        let count = names.len();
        names.dedup();
        assert_eq!(names.len(), count);
    }

    #[test]
    fn every_parameter_has_a_location() {
        for parameter in PARAMETERS {
            assert!(!parameter.locations.is_empty(), "{}", parameter.name);
        }
    }

    #[test]
    fn filter_by_standard() {
        let oauth2 = parameters(StandardSet::OAUTH2);
        assert!(oauth2.contains(&"scope"));
        assert!(oauth2.contains(&"code_verifier"));
        assert!(!oauth2.contains(&"nonce"));
        assert!(!oauth2.contains(&"ticket"));

        let uma2 = parameters(StandardSet::UMA2);
        assert_eq!(
            uma2,
            ["ticket", "claim_token", "claim_token_format", "pct", "rpt", "upgraded"]
        );

        assert!(parameters(StandardSet::empty()).is_empty());
        assert_eq!(parameters(StandardSet::all()).len(), PARAMETERS.len());
    }

    #[test]
    fn filter_by_location() {
        let params = parameters_at(Location::AuthorizationResponse, StandardSet::OAUTH2);
        insta::assert_debug_snapshot!(params, @r###"
        [
            "scope",
            "state",
            "code",
            "error",
            "error_description",
            "error_uri",
            "access_token",
            "token_type",
            "expires_in",
        ]
        "###);

        let params = parameters_at(
            Location::AuthorizationResponse,
            StandardSet::OAUTH2 | StandardSet::OIDC,
        );
        assert!(params.contains(&"id_token"));
        assert!(params.contains(&"session_state"));

        let params = parameters_at(Location::TokenResponse, StandardSet::UMA2);
        assert_eq!(params, ["pct", "upgraded"]);
    }

    #[test]
    fn parse_location() {
        assert_eq!("token_request".parse(), Ok(Location::TokenRequest));
        assert!("token".parse::<Location>().is_err());
        assert_eq!(
            Location::AuthorizationRequest.to_string(),
            "authorization_request"
        );
    }
}
