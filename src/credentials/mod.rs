//! Token persistence in the OS keyring
//!
//! A single secret is stored under a fixed service name and the local OS
//! username.

use keyring::Entry;

use crate::error::Result;

/// Keyring service identifier
pub const SERVICE_NAME: &str = "github_repo_sweeper";

/// Storage for the personal access token
pub trait CredentialStore {
    /// Stored token, if any
    fn get(&self) -> Result<Option<String>>;

    /// Store (or replace) the token
    fn set(&self, secret: &str) -> Result<()>;
}

/// [`CredentialStore`] backed by the platform keyring
pub struct KeyringStore {
    service: String,
    user: String,
}

impl KeyringStore {
    /// Store keyed by [`SERVICE_NAME`] and the current OS user
    pub fn for_current_user() -> Self {
        Self::new(SERVICE_NAME, &current_os_user())
    }

    pub fn new(service: &str, user: &str) -> Self {
        Self {
            service: service.to_string(),
            user: user.to_string(),
        }
    }

    fn entry(&self) -> Result<Entry> {
        Ok(Entry::new(&self.service, &self.user)?)
    }
}

impl CredentialStore for KeyringStore {
    fn get(&self) -> Result<Option<String>> {
        match self.entry()?.get_password() {
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, secret: &str) -> Result<()> {
        self.entry()?.set_password(secret)?;
        log::info!("Stored token in keyring for user {}", self.user);
        Ok(())
    }
}

/// Local OS username, from the environment
pub fn current_os_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .ok()
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| {
            log::warn!("Could not determine OS username, using 'default' keyring entry");
            "default".to_string()
        })
}


#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;

    #[test]
    fn test_keyring_store_keys() {
        let store = KeyringStore::new(SERVICE_NAME, "alice");
        assert_eq!(store.service, "github_repo_sweeper");
        assert_eq!(store.user, "alice");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_linux_keystore_outlives_reboot() {
        use keyring::credential::{CredentialBuilderApi, CredentialPersistence};

        let builder = keyring::default::default_credential_builder();
        assert!(matches!(
            CredentialBuilderApi::persistence(builder.as_ref()),
            CredentialPersistence::UntilDelete
        ));
    }

    #[test]
    fn test_current_os_user_is_never_empty() {
        assert!(!current_os_user().is_empty());
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::default();
        assert_eq!(store.get().unwrap(), None);

        store.set("ghp_secret").unwrap();
        assert_eq!(store.get().unwrap().as_deref(), Some("ghp_secret"));
        assert_eq!(*store.writes.borrow(), 1);
    }
}
