use std::sync::RwLock;
use std::time::Duration;

use tokio::time::Instant;

/// A cached session is treated as stale once it is this old.
pub const FRESHNESS_WINDOW: Duration = Duration::from_secs(10 * 60);

/// One authenticated session with the router: the opaque cookie the login
/// endpoint issued and when it was issued. Both fields are set together by
/// a successful login and never independently.
#[derive(Debug, Clone)]
struct RouterSession {
    token: String,
    acquired_at: Instant,
}

/// Holds at most one router session. Freshness is computed lazily at read
/// time; there is no expiry timer. Concurrent `replace` calls are not
/// ordered beyond overwrite-wins.
pub struct SessionStore {
    slot: RwLock<Option<RouterSession>>,
}

impl SessionStore {
    /// Create a store with no session.
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// True iff a session exists and is younger than the freshness window.
    pub fn is_fresh(&self) -> bool {
        self.slot
            .read()
            .map(|slot| {
                slot.as_ref()
                    .is_some_and(|s| s.acquired_at.elapsed() < FRESHNESS_WINDOW)
            })
            .unwrap_or(false)
    }

    /// Unconditionally replace the stored session with a new token acquired
    /// now. Last writer wins.
    pub fn replace(&self, token: String) {
        if let Ok(mut slot) = self.slot.write() {
            *slot = Some(RouterSession {
                token,
                acquired_at: Instant::now(),
            });
        }
    }

    /// The current session token, if any. Callers should have just checked
    /// `is_fresh` or just completed a `replace`.
    pub fn current(&self) -> Option<String> {
        self.slot
            .read()
            .map(|slot| slot.as_ref().map(|s| s.token.clone()))
            .unwrap_or(None)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
