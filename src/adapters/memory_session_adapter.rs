//! In-process session store. Nothing survives the process.

use crate::domain::error::WealthPathError;
use crate::domain::session::AuthSession;
use crate::ports::session_port::SessionStore;
use std::cell::RefCell;

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    stored: RefCell<Option<AuthSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<AuthSession, WealthPathError> {
        Ok(self.stored.borrow().clone().unwrap_or_default())
    }

    fn save(&self, session: &AuthSession) -> Result<(), WealthPathError> {
        *self.stored.borrow_mut() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), WealthPathError> {
        self.stored.borrow_mut().take();
        Ok(())
    }
}
