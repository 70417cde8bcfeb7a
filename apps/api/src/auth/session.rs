//! The signed-in session record and its cookie encoding.

use axum::http::{header, HeaderMap};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::role::Role;

/// Name of both the local-storage entry and the cookie holding the session.
pub const SESSION_KEY: &str = "talentdesk_session";

/// Cookie carrying the browser's visit id, which keys its tour state.
pub const VISIT_KEY: &str = "talentdesk_visit";

/// Cookie lifetime: 7 days.
const SESSION_MAX_AGE_SECS: u64 = 7 * 24 * 60 * 60;
/// The visit outlives sign-outs so tour completion sticks to the browser.
const VISIT_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

/// The demo user's identity and role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar: String,
}

impl Session {
    /// JSON form stored in local storage.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// URL-encoded JSON form stored in the cookie.
    pub fn to_cookie_value(&self) -> Result<String, serde_json::Error> {
        Ok(urlencoding::encode(&self.to_json()?).into_owned())
    }

    /// Decodes a cookie value. `None` when the value is not URL-encoded
    /// session JSON or does not name one of the demo users.
    pub fn from_cookie_value(raw: &str) -> Option<Self> {
        let decoded = urlencoding::decode(raw).ok()?;
        Self::from_json(&decoded).ok().filter(Self::is_demo_user)
    }

    /// Sessions are only ever issued for the fixed demo users.
    pub fn is_demo_user(&self) -> bool {
        *self == self.role.demo_user()
    }
}

/// Reads a cookie by name from the request's `Cookie` headers.
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

fn set_cookie(name: &str, value: &str, max_age: u64, secure: bool) -> String {
    let mut cookie = format!("{name}={value}; Path=/; Max-Age={max_age}; SameSite=Lax; HttpOnly");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value writing the session.
pub fn session_set_cookie(value: &str, secure: bool) -> String {
    set_cookie(SESSION_KEY, value, SESSION_MAX_AGE_SECS, secure)
}

/// `Set-Cookie` value writing the visit id.
pub fn visit_set_cookie(id: Uuid, secure: bool) -> String {
    set_cookie(VISIT_KEY, &id.to_string(), VISIT_MAX_AGE_SECS, secure)
}

/// `Set-Cookie` value expiring the session cookie.
pub fn session_clear_cookie() -> String {
    format!("{SESSION_KEY}=; Path=/; Max-Age=0; SameSite=Lax; HttpOnly")
}
