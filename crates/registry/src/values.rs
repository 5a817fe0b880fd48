// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! Registries of parameter values and metadata names.

use crate::{
    Entry,
    Standard::{OAuth2, Oidc, Uma2},
    StandardSet,
};

/// Values of the `grant_type` parameter.
pub static GRANT_TYPES: &[Entry] = &[
    Entry::new("authorization_code", OAuth2),
    Entry::new("implicit", OAuth2),
    Entry::new("password", OAuth2),
    Entry::new("client_credentials", OAuth2),
    Entry::new("refresh_token", OAuth2),
    Entry::new("urn:ietf:params:oauth:grant-type:jwt-bearer", OAuth2),
    Entry::new("urn:ietf:params:oauth:grant-type:saml2-bearer", OAuth2),
    Entry::new("urn:ietf:params:oauth:grant-type:device_code", OAuth2),
    Entry::new("urn:ietf:params:oauth:grant-type:token-exchange", OAuth2),
    Entry::new("urn:ietf:params:oauth:grant-type:uma-ticket", Uma2),
];

/// Values of the `response_type` parameter.
pub static RESPONSE_TYPES: &[Entry] = &[
    Entry::new("code", OAuth2),
    Entry::new("token", OAuth2),
    Entry::new("id_token", Oidc),
    Entry::new("id_token token", Oidc),
    Entry::new("code id_token", Oidc),
    Entry::new("code token", Oidc),
    Entry::new("code id_token token", Oidc),
    Entry::new("none", Oidc),
];

/// Values of the `token_type_hint` parameter of the revocation and
/// introspection endpoints.
pub static TOKEN_TYPE_HINTS: &[Entry] = &[
    Entry::new("access_token", OAuth2),
    Entry::new("refresh_token", OAuth2),
    Entry::new("pct", Uma2),
];

/// Client authentication methods at the token endpoint.
pub static ENDPOINT_AUTH_METHODS: &[Entry] = &[
    Entry::new("none", OAuth2),
    Entry::new("client_secret_post", OAuth2),
    Entry::new("client_secret_basic", OAuth2),
    Entry::new("tls_client_auth", OAuth2),
    Entry::new("self_signed_tls_client_auth", OAuth2),
    Entry::new("client_secret_jwt", Oidc),
    Entry::new("private_key_jwt", Oidc),
];

/// Dynamic client registration metadata.
pub static CLIENT_METADATA: &[Entry] = &[
    // RFC7591
    Entry::new("redirect_uris", OAuth2),
    Entry::new("token_endpoint_auth_method", OAuth2),
    Entry::new("grant_types", OAuth2),
    Entry::new("response_types", OAuth2),
    Entry::new("client_name", OAuth2),
    Entry::new("client_uri", OAuth2),
    Entry::new("logo_uri", OAuth2),
    Entry::new("scope", OAuth2),
    Entry::new("contacts", OAuth2),
    Entry::new("tos_uri", OAuth2),
    Entry::new("policy_uri", OAuth2),
    Entry::new("jwks_uri", OAuth2),
    Entry::new("jwks", OAuth2),
    Entry::new("software_id", OAuth2),
    Entry::new("software_version", OAuth2),
    Entry::new("software_statement", OAuth2),
    // OpenID Connect Dynamic Client Registration 1.0
    Entry::new("application_type", Oidc),
    Entry::new("sector_identifier_uri", Oidc),
    Entry::new("subject_type", Oidc),
    Entry::new("id_token_signed_response_alg", Oidc),
    Entry::new("id_token_encrypted_response_alg", Oidc),
    Entry::new("id_token_encrypted_response_enc", Oidc),
    Entry::new("userinfo_signed_response_alg", Oidc),
    Entry::new("userinfo_encrypted_response_alg", Oidc),
    Entry::new("userinfo_encrypted_response_enc", Oidc),
    Entry::new("request_object_signing_alg", Oidc),
    Entry::new("request_object_encryption_alg", Oidc),
    Entry::new("request_object_encryption_enc", Oidc),
    Entry::new("token_endpoint_auth_signing_alg", Oidc),
    Entry::new("default_max_age", Oidc),
    Entry::new("require_auth_time", Oidc),
    Entry::new("default_acr_values", Oidc),
    Entry::new("initiate_login_uri", Oidc),
    Entry::new("request_uris", Oidc),
    Entry::new("post_logout_redirect_uris", Oidc),
    // UMA 2.0 Grant
    Entry::new("claims_redirect_uris", Uma2),
];

/// Authorization server metadata.
pub static AUTHORIZATION_SERVER_METADATA: &[Entry] = &[
    // RFC8414
    Entry::new("issuer", OAuth2),
    Entry::new("authorization_endpoint", OAuth2),
    Entry::new("token_endpoint", OAuth2),
    Entry::new("jwks_uri", OAuth2),
    Entry::new("registration_endpoint", OAuth2),
    Entry::new("scopes_supported", OAuth2),
    Entry::new("response_types_supported", OAuth2),
    Entry::new("response_modes_supported", OAuth2),
    Entry::new("grant_types_supported", OAuth2),
    Entry::new("token_endpoint_auth_methods_supported", OAuth2),
    Entry::new("token_endpoint_auth_signing_alg_values_supported", OAuth2),
    Entry::new("service_documentation", OAuth2),
    Entry::new("ui_locales_supported", OAuth2),
    Entry::new("op_policy_uri", OAuth2),
    Entry::new("op_tos_uri", OAuth2),
    Entry::new("revocation_endpoint", OAuth2),
    Entry::new("revocation_endpoint_auth_methods_supported", OAuth2),
    Entry::new("introspection_endpoint", OAuth2),
    Entry::new("introspection_endpoint_auth_methods_supported", OAuth2),
    Entry::new("code_challenge_methods_supported", OAuth2),
    // OpenID Connect Discovery 1.0
    Entry::new("userinfo_endpoint", Oidc),
    Entry::new("acr_values_supported", Oidc),
    Entry::new("subject_types_supported", Oidc),
    Entry::new("id_token_signing_alg_values_supported", Oidc),
    Entry::new("claims_supported", Oidc),
    Entry::new("claim_types_supported", Oidc),
    Entry::new("claims_parameter_supported", Oidc),
    Entry::new("request_parameter_supported", Oidc),
    Entry::new("request_uri_parameter_supported", Oidc),
    Entry::new("require_request_uri_registration", Oidc),
    Entry::new("end_session_endpoint", Oidc),
    // UMA 2.0 Grant and Federated Authorization
    Entry::new("claims_interaction_endpoint", Uma2),
    Entry::new("uma_profiles_supported", Uma2),
    Entry::new("permission_endpoint", Uma2),
    Entry::new("resource_registration_endpoint", Uma2),
];

fn names(entries: &'static [Entry], standards: StandardSet) -> Vec<&'static str> {
    entries
        .iter()
        .filter(|entry| standards.includes(entry.standard))
        .map(|entry| entry.name)
        .collect()
}

/// The grant types defined by the given standards.
#[must_use]
pub fn grant_types(standards: StandardSet) -> Vec<&'static str> {
    names(GRANT_TYPES, standards)
}

/// The response types defined by the given standards.
#[must_use]
pub fn response_types(standards: StandardSet) -> Vec<&'static str> {
    names(RESPONSE_TYPES, standards)
}

/// The token type hints defined by the given standards.
#[must_use]
pub fn token_type_hints(standards: StandardSet) -> Vec<&'static str> {
    names(TOKEN_TYPE_HINTS, standards)
}

/// The token endpoint authentication methods defined by the given standards.
#[must_use]
pub fn endpoint_auth_methods(standards: StandardSet) -> Vec<&'static str> {
    names(ENDPOINT_AUTH_METHODS, standards)
}

/// The client metadata defined by the given standards.
#[must_use]
pub fn client_metadata(standards: StandardSet) -> Vec<&'static str> {
    names(CLIENT_METADATA, standards)
}

/// The authorization server metadata defined by the given standards.
#[must_use]
pub fn authorization_server_metadata(standards: StandardSet) -> Vec<&'static str> {
    names(AUTHORIZATION_SERVER_METADATA, standards)
}
