//! JSON file session store.

use crate::domain::error::WealthPathError;
use crate::domain::session::AuthSession;
use crate::ports::config_port::ConfigPort;
use crate::ports::session_port::SessionStore;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_SESSION_PATH: &str = "wealthpath-session.json";

#[derive(Debug, Clone)]
pub struct JsonSessionStore {
    path: PathBuf,
}

impl JsonSessionStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Reads `[session] path`, defaulting to [`DEFAULT_SESSION_PATH`].
    pub fn from_config(config: &dyn ConfigPort) -> Self {
        let path = config
            .get_string("session", "path")
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SESSION_PATH.to_string());
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, e: std::io::Error) -> WealthPathError {
        WealthPathError::SessionIo {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        }
    }
}

impl SessionStore for JsonSessionStore {
    fn load(&self) -> Result<AuthSession, WealthPathError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::warn!("no session at {}, starting anonymous", self.path.display());
                return Ok(AuthSession::anonymous());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_str(&content).map_err(|e| WealthPathError::SessionCorrupt {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }

    fn save(&self, session: &AuthSession) -> Result<(), WealthPathError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let json = serde_json::to_string_pretty(session).map_err(|e| {
            WealthPathError::SessionCorrupt {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            }
        })?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        log::info!("session saved to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), WealthPathError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                log::info!("session cleared at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}
