#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::{Role, Session};

/// Authentication state: the persisted session plus whether storage has been
/// read yet.
///
/// `loaded` stays `false` during SSR and until the hydrate-side bootstrap
/// reads `localStorage`; guards make no decision before that.
/// `signed_out` marks a session the user ended themselves, so guards still
/// mounted during the logout redirect stay quiet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loaded: bool,
    pub signed_out: bool,
}

impl AuthState {
    /// State after reading storage.
    #[must_use]
    pub fn loaded(session: Option<Session>) -> Self {
        Self { session, loaded: true, signed_out: false }
    }

    #[must_use]
    pub fn role(&self) -> Option<&Role> {
        self.session.as_ref().map(|s| &s.role)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn sign_in(&mut self, session: Session) {
        self.session = Some(session);
        self.loaded = true;
        self.signed_out = false;
    }

    pub fn sign_out(&mut self) {
        self.session = None;
        self.loaded = true;
        self.signed_out = true;
    }
}
