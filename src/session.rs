use std::cell::RefCell;
use std::rc::Rc;

/// localStorage key for the issued session token. The only client-side
/// persisted state in the application.
pub const TOKEN_KEY: &str = "token";

/// Explicit session context handed to the transport at construction.
///
/// Init happens on app start (`restore` reads the stored token), teardown on
/// logout (`clear` removes it). The server stays the authority on token
/// validity; there is no client-side expiry or refresh.
#[derive(Clone)]
pub struct Session {
    token: Rc<RefCell<Option<String>>>,
    persist: bool,
}

impl Session {
    /// Session backed by browser storage, seeded from any previously stored
    /// token. On non-wasm targets there is no browser storage, so restored
    /// sessions start empty.
    pub fn restore() -> Self {
        Self {
            token: Rc::new(RefCell::new(load_persisted_token())),
            persist: true,
        }
    }

    /// Memory-only session. Used by tests and anywhere persistence is
    /// undesirable.
    pub fn ephemeral() -> Self {
        Self {
            token: Rc::new(RefCell::new(None)),
            persist: false,
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.borrow().is_some()
    }

    pub fn store(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
        if self.persist {
            persist_token(token);
        }
    }

    pub fn clear(&self) {
        *self.token.borrow_mut() = None;
        if self.persist {
            remove_persisted_token();
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn load_persisted_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok()?
}

#[cfg(target_arch = "wasm32")]
fn persist_token(token: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(TOKEN_KEY, token).is_err() {
            log::warn!("failed to persist session token");
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn remove_persisted_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_persisted_token() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn persist_token(_token: &str) {}

#[cfg(not(target_arch = "wasm32"))]
fn remove_persisted_token() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ephemeral_session_starts_unauthenticated() {
        let session = Session::ephemeral();
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }

    #[test]
    fn store_and_clear_round_trip() {
        let session = Session::ephemeral();
        session.store("abc123");
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("abc123"));

        session.clear();
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }

    #[test]
    fn clones_share_the_same_token_cell() {
        let session = Session::ephemeral();
        let other = session.clone();
        session.store("tok");
        assert_eq!(other.token().as_deref(), Some("tok"));
        other.clear();
        assert!(!session.is_authenticated());
    }
}
