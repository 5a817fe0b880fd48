// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! Types to define an [access token's scope].
//!
//! A scope travels on the wire as a [scope parameter]: one or more
//! [`ScopeToken`]s separated by single spaces. In memory it is a [`Scope`], an
//! ordered set of tokens which can only be built from validated input.
//!
//! [access token's scope]: https://www.rfc-editor.org/rfc/rfc6749#section-3.3
//! [scope parameter]: https://www.rfc-editor.org/rfc/rfc6749#appendix-A.4

#![allow(clippy::module_name_repetitions)]

use std::{
    borrow::{Borrow, Cow},
    collections::BTreeSet,
    ops::Deref,
    str::FromStr,
    sync::LazyLock,
};

use regex::Regex;
use serde::{Deserialize, Serialize, de::Error as _};
use thiserror::Error;

/// `scope-token = 1*( %x21 / %x23-5B / %x5D-7E )`
static SCOPE_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\x21\x23-\x5B\x5D-\x7E]+$").expect("scope-token regex is valid")
});

/// `scope = scope-token *( SP scope-token )`
static SCOPE_PARAMETER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\x21\x23-\x5B\x5D-\x7E]+(?: [\x21\x23-\x5B\x5D-\x7E]+)*$")
        .expect("scope regex is valid")
});

/// Returns `true` if the given string is a valid [scope token].
///
/// The empty string is not a valid scope token. No normalization is applied:
/// the characters are matched by their raw value.
///
/// [scope token]: https://www.rfc-editor.org/rfc/rfc6749#section-3.3
#[must_use]
pub fn is_scope_token(text: &str) -> bool {
    SCOPE_TOKEN_REGEX.is_match(text)
}

/// Returns `true` if the given string is a valid [scope parameter], i.e. one
/// or more scope tokens separated by exactly one space.
///
/// Leading, trailing or doubled spaces are rejected, and so is the empty
/// string.
///
/// [scope parameter]: https://www.rfc-editor.org/rfc/rfc6749#section-3.3
#[must_use]
pub fn is_scope_parameter(text: &str) -> bool {
    SCOPE_PARAMETER_REGEX.is_match(text)
}

/// The error type returned when a scope token is invalid.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Invalid scope token")]
pub struct InvalidScopeToken;

/// The error type returned when a scope parameter is malformed.
///
/// Protocol layers usually map this to an `invalid_scope` error response.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Malformed scope parameter")]
pub struct MalformedScopeParameter;

/// A scope token.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone)]
pub struct ScopeToken(Cow<'static, str>);

impl ScopeToken {
    /// Create a `ScopeToken` from a static string.
    ///
    /// In const contexts an invalid token fails the build.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid scope token.
    #[must_use]
    pub const fn from_static(token: &'static str) -> Self {
        let bytes = token.as_bytes();
        assert!(!bytes.is_empty(), "Invalid scope token: empty");

        let mut i = 0;
        while i < bytes.len() {
            assert!(
                matches!(bytes[i], 0x21 | 0x23..=0x5B | 0x5D..=0x7E),
                "Invalid scope token: forbidden character"
            );
            i += 1;
        }

        Self(Cow::Borrowed(token))
    }

    /// Get the scope token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }
}

/// `openid`.
///
/// Must be included in OpenID Connect requests.
pub const OPENID: ScopeToken = ScopeToken::from_static("openid");

/// `profile`.
///
/// Requests access to the End-User's default profile Claims.
pub const PROFILE: ScopeToken = ScopeToken::from_static("profile");

/// `email`.
///
/// Requests access to the `email` and `email_verified` Claims.
pub const EMAIL: ScopeToken = ScopeToken::from_static("email");

/// `address`.
///
/// Requests access to the `address` Claim.
pub const ADDRESS: ScopeToken = ScopeToken::from_static("address");

/// `phone`.
///
/// Requests access to the `phone_number` and `phone_number_verified` Claims.
pub const PHONE: ScopeToken = ScopeToken::from_static("phone");

/// `offline_access`.
///
/// Requests that an OAuth 2.0 Refresh Token be issued that can be used to
/// obtain an Access Token that grants access to the End-User's Userinfo
/// Endpoint even when the End-User is not present (not logged in).
pub const OFFLINE_ACCESS: ScopeToken = ScopeToken::from_static("offline_access");

/// `uma_protection`.
///
/// Requests a Protection API Access Token from a UMA 2.0 authorization
/// server.
pub const UMA_PROTECTION: ScopeToken = ScopeToken::from_static("uma_protection");

impl FromStr for ScopeToken {
    type Err = InvalidScopeToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_scope_token(s) {
            Ok(ScopeToken(Cow::Owned(s.to_owned())))
        } else {
            Err(InvalidScopeToken)
        }
    }
}

impl Deref for ScopeToken {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for ScopeToken {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for ScopeToken {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ScopeToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ScopeToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ScopeToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s: Cow<'de, str> = Deserialize::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// A set of [`ScopeToken`]s.
///
/// Members are kept in byte order, so [`Scope::to_parameter`] is
/// deterministic.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct Scope(BTreeSet<ScopeToken>);

impl Scope {
    /// Create a scope with no tokens.
    #[must_use]
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    /// Parse a scope parameter.
    ///
    /// Duplicate tokens collapse into one.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid scope parameter. This
    /// includes the empty string.
    pub fn from_parameter(text: &str) -> Result<Self, MalformedScopeParameter> {
        if !is_scope_parameter(text) {
            return Err(MalformedScopeParameter);
        }

        let tokens = text
            .split(' ')
            .map(|token| ScopeToken(Cow::Owned(token.to_owned())))
            .collect();

        Ok(Self(tokens))
    }

    /// Parse a scope parameter which is known to be well-formed.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid scope parameter.
    #[must_use]
    #[track_caller]
    pub fn from_parameter_or_panic(text: &str) -> Self {
        match Self::from_parameter(text) {
            Ok(scope) => scope,
            Err(e) => panic!("{e}: {text:?}"),
        }
    }

    /// Parse an optional scope parameter, where an absent or empty parameter
    /// means no scope at all.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not empty and is not a valid scope
    /// parameter.
    pub fn from_optional_parameter(text: Option<&str>) -> Result<Self, MalformedScopeParameter> {
        match text {
            None | Some("") => Ok(Self::empty()),
            Some(text) => Self::from_parameter(text),
        }
    }

    /// Build a scope out of arbitrary strings, checking that each of them is
    /// a valid scope token.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the strings is not a valid scope token.
    pub fn try_from_tokens<I, S>(tokens: I) -> Result<Self, InvalidScopeToken>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .map(|token| token.as_ref().parse())
            .collect()
    }

    /// Serialize the scope as a scope parameter.
    ///
    /// The empty scope serializes to the empty string.
    #[must_use]
    pub fn to_parameter(&self) -> String {
        self.to_string()
    }

    /// Whether this scope is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of tokens in the scope.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this scope contains the given token.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    /// Inserts the given token in this scope.
    ///
    /// Returns whether the token was newly inserted.
    pub fn insert(&mut self, value: ScopeToken) -> bool {
        self.0.insert(value)
    }

    /// Removes the given token from this scope.
    ///
    /// Returns whether the token was present.
    pub fn remove(&mut self, token: &str) -> bool {
        self.0.remove(token)
    }

    /// The tokens present in either scope.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        self.0.union(&other.0).cloned().collect()
    }

    /// The tokens present in both scopes.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.0.intersection(&other.0).cloned().collect()
    }

    /// The tokens present in this scope but not in the other one.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.0.difference(&other.0).cloned().collect()
    }

    /// Whether every token of this scope is in the other one.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Whether every token of the other scope is in this one.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        self.0.is_superset(&other.0)
    }

    /// Whether the two scopes have no token in common.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.0.is_disjoint(&other.0)
    }

    /// Get an iterator over the tokens of this scope, in order.
    pub fn iter(&self) -> impl Iterator<Item = &ScopeToken> {
        self.0.iter()
    }

    /// Collect the tokens of this scope in a list, in order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<ScopeToken> {
        self.0.iter().cloned().collect()
    }
}

impl FromStr for Scope {
    type Err = MalformedScopeParameter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_parameter(s)
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tokens = self.0.iter();
        if let Some(first) = tokens.next() {
            write!(f, "{first}")?;
            for token in tokens {
                write!(f, " {token}")?;
            }
        }

        Ok(())
    }
}

impl FromIterator<ScopeToken> for Scope {
    fn from_iter<T: IntoIterator<Item = ScopeToken>>(iter: T) -> Self {
        Self(BTreeSet::from_iter(iter))
    }
}

impl Extend<ScopeToken> for Scope {
    fn extend<T: IntoIterator<Item = ScopeToken>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Scope {
    type Item = ScopeToken;
    type IntoIter = std::collections::btree_set::IntoIter<ScopeToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Scope {
    type Item = &'a ScopeToken;
    type IntoIter = std::collections::btree_set::Iter<'a, ScopeToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for Scope {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_parameter().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Scope {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let scope: Cow<'de, str> = Deserialize::deserialize(deserializer)?;
        Scope::from_optional_parameter(Some(&*scope)).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn scope_token_grammar() {
        assert!(is_scope_token("openid"));
        assert!(is_scope_token("{~~~~~}"));
        assert!(is_scope_token("urn:matrix:client:api:*"));
        assert!(is_scope_token("!#[]"));

        assert!(!is_scope_token(""));
        assert!(!is_scope_token(" "));
        assert!(!is_scope_token("a\\c"));
        assert!(!is_scope_token("\"quoted\""));
        assert!(!is_scope_token("user read"));
        assert!(!is_scope_token("tab\there"));
        assert!(!is_scope_token("new\nline"));
        assert!(!is_scope_token("line\n"));
        assert!(!is_scope_token("\u{7f}"));
        assert!(!is_scope_token("caf\u{e9}"));
    }

    #[test]
    fn scope_token_grammar_covers_the_whole_printable_range() {
        for c in (0x21_u8..=0x7e).map(char::from) {
            let expected = c != '"' && c != '\\';
            assert_eq!(is_scope_token(&c.to_string()), expected, "{c:?}");
        }

        for c in (0x00_u8..=0x20).chain([0x7f]).map(char::from) {
            assert!(!is_scope_token(&c.to_string()), "{c:?}");
        }
    }

    #[test]
    fn scope_parameter_grammar() {
        assert!(is_scope_parameter("openid"));
        assert!(is_scope_parameter("abc:def ghi:xyz"));
        assert!(is_scope_parameter("users:read feed:edit room:manage"));
        assert!(is_scope_parameter("a a a"));

        assert!(!is_scope_parameter(""));
        assert!(!is_scope_parameter(" "));
        assert!(!is_scope_parameter("   "));
        assert!(!is_scope_parameter("a b  c"));
        assert!(!is_scope_parameter(" a b c"));
        assert!(!is_scope_parameter("a b c "));
        assert!(!is_scope_parameter("a\tb"));
        assert!(!is_scope_parameter("a\\c d"));
        assert!(!is_scope_parameter("a b\n"));
    }

    #[test]
    fn parse_scope_token() {
        let token: ScopeToken = "urn:matrix:client:api:*".parse().unwrap();
        assert_eq!(token.as_str(), "urn:matrix:client:api:*");
        assert_eq!(token.to_string(), "urn:matrix:client:api:*");

        assert_matches!("".parse::<ScopeToken>(), Err(InvalidScopeToken));
        assert_matches!("a b".parse::<ScopeToken>(), Err(InvalidScopeToken));
        assert_matches!("a\\c".parse::<ScopeToken>(), Err(InvalidScopeToken));
    }

    #[test]
    fn static_scope_tokens() {
        assert_eq!(ScopeToken::from_static("openid"), OPENID);
        assert_eq!(
            ScopeToken::from_static("urn:example:api:*").as_str(),
            "urn:example:api:*"
        );

        let scope = Scope::from_iter([UMA_PROTECTION, ScopeToken::from_static("!#[]")]);
        assert_eq!(Scope::from_parameter(&scope.to_parameter()), Ok(scope));
    }

    #[test]
    #[should_panic(expected = "Invalid scope token")]
    fn static_scope_token_with_space() {
        let _ = ScopeToken::from_static("a b");
    }

    #[test]
    #[should_panic(expected = "Invalid scope token")]
    fn static_scope_token_empty() {
        let _ = ScopeToken::from_static("");
    }

    #[test]
    #[should_panic(expected = "Invalid scope token")]
    fn static_scope_token_with_backslash() {
        let _ = ScopeToken::from_static("a\\c");
    }

    #[test]
    fn parse_scope_parameter() {
        let scope = Scope::from_parameter("openid profile address").unwrap();
        assert_eq!(scope.len(), 3);
        assert!(scope.contains("openid"));
        assert!(scope.contains("profile"));
        assert!(scope.contains("address"));
        assert!(!scope.contains("unknown"));
        assert!(!scope.contains("not a token"));

        let scope = Scope::from_parameter("openid openid profile").unwrap();
        assert_eq!(scope.len(), 2);

        assert_matches!(Scope::from_parameter(""), Err(MalformedScopeParameter));
        assert_matches!(Scope::from_parameter("a b c "), Err(MalformedScopeParameter));
        assert_matches!(Scope::from_parameter(" a b c"), Err(MalformedScopeParameter));
        assert_matches!(Scope::from_parameter("a b  c"), Err(MalformedScopeParameter));
        assert_matches!(Scope::from_parameter("  "), Err(MalformedScopeParameter));
        assert_matches!(Scope::from_parameter("a\\c"), Err(MalformedScopeParameter));
    }

    #[test]
    fn parse_optional_scope_parameter() {
        assert_eq!(Scope::from_optional_parameter(None), Ok(Scope::empty()));
        assert_eq!(Scope::from_optional_parameter(Some("")), Ok(Scope::empty()));
        assert_eq!(
            Scope::from_optional_parameter(Some("openid")),
            Ok(Scope::from_iter([OPENID]))
        );
        assert_matches!(
            Scope::from_optional_parameter(Some(" ")),
            Err(MalformedScopeParameter)
        );
        assert_matches!(
            Scope::from_optional_parameter(Some("a ")),
            Err(MalformedScopeParameter)
        );
    }

    #[test]
    fn parse_or_panic() {
        let scope = Scope::from_parameter_or_panic("openid profile");
        assert_eq!(scope, Scope::from_iter([OPENID, PROFILE]));
    }

    #[test]
    #[should_panic(expected = "Malformed scope parameter")]
    fn parse_or_panic_on_malformed() {
        let _ = Scope::from_parameter_or_panic("a b c ");
    }

    #[test]
    fn try_from_tokens() {
        let scope = Scope::try_from_tokens(["openid", "email", "openid"]).unwrap();
        assert_eq!(scope, Scope::from_iter([OPENID, EMAIL]));

        let scope = Scope::try_from_tokens(Vec::<String>::new()).unwrap();
        assert!(scope.is_empty());

        assert_matches!(
            Scope::try_from_tokens(["openid", "not valid"]),
            Err(InvalidScopeToken)
        );
        assert_matches!(Scope::try_from_tokens(["openid", ""]), Err(InvalidScopeToken));
    }

    #[test]
    fn serialize_scope_parameter() {
        assert_eq!(Scope::empty().to_parameter(), "");

        let scope = Scope::from_iter([PROFILE, OPENID, EMAIL]);
        assert_eq!(scope.to_parameter(), "email openid profile");
        assert_eq!(scope.to_string(), scope.to_parameter());
    }

    #[test]
    fn round_trip() {
        let scope = Scope::from_parameter("users:read feed:edit room:manage").unwrap();
        assert_eq!(scope.len(), 3);

        let parameter = scope.to_parameter();
        assert!(is_scope_parameter(&parameter));
        assert_eq!(Scope::from_parameter(&parameter).unwrap(), scope);

        let parameter = "c b a b";
        let scope = Scope::from_parameter(parameter).unwrap();
        assert_eq!(scope.to_parameter(), "a b c");
        assert_eq!(
            Scope::from_parameter(&scope.to_parameter()).unwrap(),
            Scope::from_parameter(parameter).unwrap()
        );
    }

    #[test]
    fn set_algebra() {
        let s = Scope::from_parameter("openid profile email").unwrap();
        let t = Scope::from_parameter("email phone").unwrap();
        let empty = Scope::empty();

        assert_eq!(s.union(&s), s);
        assert_eq!(s.intersection(&empty), empty);
        assert!(empty.is_subset(&s));
        assert!(empty.is_subset(&empty));

        assert_eq!(
            s.union(&t),
            Scope::from_parameter("openid profile email phone").unwrap()
        );
        assert_eq!(s.intersection(&t), Scope::from_iter([EMAIL]));
        assert_eq!(s.difference(&t), Scope::from_iter([OPENID, PROFILE]));
        assert!(!s.is_disjoint(&t));
        assert!(s.is_disjoint(&Scope::from_iter([ADDRESS])));
        assert!(s.is_superset(&Scope::from_iter([OPENID, EMAIL])));
        assert!(!s.is_subset(&t));
    }

    #[test]
    fn insert_and_remove() {
        let mut scope = Scope::empty();
        assert!(scope.insert(OPENID));
        assert!(!scope.insert(OPENID));
        assert!(scope.insert(OFFLINE_ACCESS));
        assert_eq!(scope.len(), 2);

        assert!(scope.remove("openid"));
        assert!(!scope.remove("openid"));
        assert!(!scope.remove("not a token"));
        assert_eq!(scope.to_vec(), vec![OFFLINE_ACCESS]);

        scope.extend([UMA_PROTECTION, PHONE]);
        let tokens: Vec<&str> = scope.iter().map(ScopeToken::as_str).collect();
        assert_eq!(tokens, ["offline_access", "phone", "uma_protection"]);
    }

    #[test]
    fn serde() {
        let scope = Scope::from_parameter("openid email").unwrap();
        insta::assert_json_snapshot!(scope, @r###""email openid""###);

        let scope: Scope = serde_json::from_str(r#""profile openid""#).unwrap();
        assert_eq!(scope, Scope::from_iter([OPENID, PROFILE]));

        let scope: Scope = serde_json::from_str(r#""""#).unwrap();
        assert!(scope.is_empty());

        serde_json::from_str::<Scope>(r#""openid  profile""#).unwrap_err();

        let token: ScopeToken = serde_json::from_str(r#""offline_access""#).unwrap();
        assert_eq!(token, OFFLINE_ACCESS);
        serde_json::from_str::<ScopeToken>(r#""a b""#).unwrap_err();
    }
}
