//! Session persistence port.

use crate::domain::error::WealthPathError;
use crate::domain::session::AuthSession;

pub trait SessionStore {
    /// Returns the anonymous session when nothing has been stored yet.
    fn load(&self) -> Result<AuthSession, WealthPathError>;
    fn save(&self, session: &AuthSession) -> Result<(), WealthPathError>;
    /// Removing an already-empty store is not an error.
    fn clear(&self) -> Result<(), WealthPathError>;
}
