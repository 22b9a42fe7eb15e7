//! Signed-in user state that survives restarts.
//!
//! [`AuthSession`] is the persisted shape. [`SessionManager`] holds the live
//! session and writes every change through an injected [`SessionStore`].

use crate::domain::error::WealthPathError;
use crate::ports::session_port::SessionStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

impl AuthSession {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn login(&mut self, user: User) {
        self.user = Some(user);
        self.is_authenticated = true;
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.is_authenticated = false;
    }

    pub fn set_user(&mut self, user: Option<User>) {
        self.is_authenticated = user.is_some();
        self.user = user;
    }

    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }
}

pub struct SessionManager<S: SessionStore> {
    store: S,
    session: AuthSession,
}

impl<S: SessionStore> SessionManager<S> {
    /// Starts anonymous; call [`SessionManager::restore`] to rehydrate.
    pub fn new(store: S) -> Self {
        Self {
            store,
            session: AuthSession::anonymous(),
        }
    }

    pub fn restore(&mut self) -> Result<&AuthSession, WealthPathError> {
        self.session = self.store.load()?;
        log::debug!(
            "restored session (authenticated: {})",
            self.session.is_authenticated
        );
        Ok(&self.session)
    }

    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The live session only changes once the store has accepted it.
    pub fn login(&mut self, user: User) -> Result<(), WealthPathError> {
        log::info!("signing in {}", user.email);
        let mut next = self.session.clone();
        next.login(user);
        self.commit(next)
    }

    pub fn logout(&mut self) -> Result<(), WealthPathError> {
        log::info!("signing out");
        self.store.clear()?;
        self.session.logout();
        Ok(())
    }

    pub fn set_user(&mut self, user: Option<User>) -> Result<(), WealthPathError> {
        let mut next = self.session.clone();
        next.set_user(user);
        self.commit(next)
    }

    fn commit(&mut self, next: AuthSession) -> Result<(), WealthPathError> {
        self.store.save(&next)?;
        self.session = next;
        Ok(())
    }
}
