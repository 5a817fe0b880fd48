// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! Syntax of the request and response elements defined in [Appendix A] of
//! RFC6749.
//!
//! Each predicate is an anchored match of the corresponding ABNF production.
//! They only check the syntax of a value, not whether it is known or
//! acceptable.
//!
//! [Appendix A]: https://www.rfc-editor.org/rfc/rfc6749#appendix-A

use std::sync::LazyLock;

use regex::Regex;

macro_rules! grammar {
    ($name:ident, $pattern:literal) => {
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($pattern).expect(concat!(stringify!($name), " is valid")));
    };
}

// VSCHAR = %x20-7E
grammar!(VSCHAR_ANY, r"^[\x20-\x7E]*$");
grammar!(VSCHAR_SOME, r"^[\x20-\x7E]+$");

// UNICODECHARNOCRLF = %x09 / %x20-7E / %x80-D7FF / %xE000-FFFD / %x10000-10FFFF
grammar!(
    UNICODECHARNOCRLF_ANY,
    r"^[\x09\x20-\x7E\x{80}-\x{D7FF}\x{E000}-\x{FFFD}\x{10000}-\x{10FFFF}]*$"
);

// response-type = response-name *( SP response-name )
// response-name = 1*response-char
// response-char = "_" / DIGIT / ALPHA
grammar!(RESPONSE_TYPE, r"^[_0-9A-Za-z]+(?: [_0-9A-Za-z]+)*$");

// name-char = "-" / "." / "_" / DIGIT / ALPHA
grammar!(NAME, r"^[\-._0-9A-Za-z]+$");

// NQSCHAR = %x20-21 / %x23-5B / %x5D-7E
grammar!(NQSCHAR_SOME, r"^[\x20\x21\x23-\x5B\x5D-\x7E]+$");

grammar!(DIGITS, r"^[0-9]+$");

/// `client_id = *VSCHAR`
#[must_use]
pub fn is_client_id(value: &str) -> bool {
    VSCHAR_ANY.is_match(value)
}

/// `client_secret = *VSCHAR`
#[must_use]
pub fn is_client_secret(value: &str) -> bool {
    VSCHAR_ANY.is_match(value)
}

/// `access-token = 1*VSCHAR`
#[must_use]
pub fn is_access_token(value: &str) -> bool {
    VSCHAR_SOME.is_match(value)
}

/// `refresh-token = 1*VSCHAR`
#[must_use]
pub fn is_refresh_token(value: &str) -> bool {
    VSCHAR_SOME.is_match(value)
}

/// `code = 1*VSCHAR`
#[must_use]
pub fn is_authorization_code(value: &str) -> bool {
    VSCHAR_SOME.is_match(value)
}

/// `state = 1*VSCHAR`
#[must_use]
pub fn is_state(value: &str) -> bool {
    VSCHAR_SOME.is_match(value)
}

/// `username = *UNICODECHARNOCRLF`
#[must_use]
pub fn is_username(value: &str) -> bool {
    UNICODECHARNOCRLF_ANY.is_match(value)
}

/// `password = *UNICODECHARNOCRLF`
#[must_use]
pub fn is_password(value: &str) -> bool {
    UNICODECHARNOCRLF_ANY.is_match(value)
}

/// `response-type = response-name *( SP response-name )`
#[must_use]
pub fn is_response_type(value: &str) -> bool {
    RESPONSE_TYPE.is_match(value)
}

/// `grant-name = 1*name-char`
///
/// Extension grant types may also be absolute URIs, which this does not
/// accept.
#[must_use]
pub fn is_grant_name(value: &str) -> bool {
    NAME.is_match(value)
}

/// `type-name = 1*name-char`
#[must_use]
pub fn is_token_type_name(value: &str) -> bool {
    NAME.is_match(value)
}

/// `error = 1*NQSCHAR`
#[must_use]
pub fn is_error_code(value: &str) -> bool {
    NQSCHAR_SOME.is_match(value)
}

/// `error-description = 1*NQSCHAR`
#[must_use]
pub fn is_error_description(value: &str) -> bool {
    NQSCHAR_SOME.is_match(value)
}

/// `expires-in = 1*DIGIT`
#[must_use]
pub fn is_expires_in(value: &str) -> bool {
    DIGITS.is_match(value)
}
