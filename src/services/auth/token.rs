//! Credential token extraction.
//!
//! Precedence is fixed and first match wins:
//! 1. `Authorization: Bearer <token>`
//! 2. cookie `token=<token>`
//!
//! If the header carries the `Bearer ` prefix, the cookie is never consulted,
//! even when the header yields nothing usable.

use axum::http::{HeaderMap, header};
use axum_extra::extract::cookie::CookieJar;

pub const BEARER_PREFIX: &str = "Bearer ";
pub const TOKEN_COOKIE: &str = "token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Header,
    Cookie,
}

/// A raw, not yet verified credential.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialToken {
    value: String,
    source: TokenSource,
}

impl std::fmt::Debug for CredentialToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print the bearer value
        f.debug_struct("CredentialToken")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl CredentialToken {
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn source(&self) -> TokenSource {
        self.source
    }
}

pub fn extract_token(headers: &HeaderMap) -> Option<CredentialToken> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .filter(|v| v.starts_with(BEARER_PREFIX));

    if let Some(value) = bearer {
        return value
            .split(' ')
            .nth(1)
            .filter(|t| !t.is_empty())
            .map(|t| CredentialToken {
                value: t.to_string(),
                source: TokenSource::Header,
            });
    }

    CookieJar::from_headers(headers)
        .get(TOKEN_COOKIE)
        .map(|c| c.value())
        .filter(|v| !v.is_empty())
        .map(|v| CredentialToken {
            value: v.to_string(),
            source: TokenSource::Cookie,
        })
}
