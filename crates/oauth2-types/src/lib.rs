// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! [OAuth 2.0] scope types and request element syntax.
//!
//! The [`scope`] module validates [scope parameters] and turns them into
//! [`Scope`](scope::Scope) sets. The [`rfc6749`] module checks the syntax of
//! the other request and response elements.
//!
//! [OAuth 2.0]: https://oauth.net/2/
//! [scope parameters]: https://www.rfc-editor.org/rfc/rfc6749#section-3.3

#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod rfc6749;
pub mod scope;

/// Types intended for blanket imports.
pub mod prelude {
    pub use crate::scope::{
        InvalidScopeToken, MalformedScopeParameter, Scope, ScopeToken, is_scope_parameter,
        is_scope_token,
    };
}
