use std::borrow::Borrow;
use std::fmt;

/// Server-side record of an authenticated identity.
///
/// The username is bound at login and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    username: String,
}

impl Session {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Opaque bearer token naming a [`Session`].
///
/// `Debug` is redacted; use [`SessionId::as_str`] only where the raw value has
/// to go on the wire.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionId(<redacted>)")
    }
}

impl Borrow<str> for SessionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Outcome of resolving a request against the session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Authenticated(Session),
    Unauthenticated,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn into_session(self) -> Option<Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            Self::Unauthenticated => None,
        }
    }
}
