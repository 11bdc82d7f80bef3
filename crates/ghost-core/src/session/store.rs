//! The session store: single owner of the [`Session`] singleton.

use tokio::sync::watch;

use crate::bridge::HostBridge;
use crate::session::model::Session;
use crate::user::User;

/// Holds the session singleton and broadcasts changes to subscribers.
///
/// Every operation applies synchronously and atomically: the state is
/// updated and all subscribers are notified before the call returns, and a
/// subscriber can only ever observe a complete snapshot. In particular a
/// half-updated (`user`, `is_authenticated`) pair is impossible to observe.
///
/// Operations are total; none of them can fail or suspend. The store holds
/// no timer handles and performs no cleanup — collaborators that schedule
/// delayed calls into it own their cancellation.
///
/// The store is constructed once at application start and passed by
/// reference (typically `Arc`) to the frontend and router.
pub struct SessionStore {
    tx: watch::Sender<Session>,
}

impl SessionStore {
    /// Creates a store with a fresh default session.
    pub fn new() -> Self {
        Self::with_session(Session::default())
    }

    /// Creates a store seeded with `initial`, e.g. to apply the configured
    /// sound preference.
    pub fn with_session(initial: Session) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Returns a clone of the current session state.
    pub fn snapshot(&self) -> Session {
        self.tx.borrow().clone()
    }

    /// Registers a subscriber. Each receiver observes complete snapshots
    /// only, in the order the mutations were applied.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }

    /// Updates the boot flag.
    ///
    /// This is a plain last-write-wins setter; the one-way-ness of booting
    /// is a frontend convention, not enforced here.
    pub fn set_booted(&self, booted: bool) {
        self.tx.send_modify(|session| session.is_booted = booted);
        tracing::debug!(booted, "boot flag updated");
    }

    /// Stores the authenticated user.
    ///
    /// `user` and `is_authenticated` change as one observable update. The
    /// record is stored as given, without validation — constructing a valid
    /// user is the sign-in flow's obligation. Calling again simply replaces
    /// the session user; there is no distinct re-login transition.
    pub fn login(&self, user: User) {
        tracing::info!(user_id = %user.id, "session user signed in");
        self.tx.send_modify(|session| {
            session.user = Some(user);
            session.is_authenticated = true;
        });
    }

    /// Clears the session user.
    ///
    /// Both fields are cleared as one observable update. Safe to call when
    /// already signed out; subscribers are still notified.
    pub fn logout(&self) {
        self.tx.send_modify(|session| {
            session.user = None;
            session.is_authenticated = false;
        });
        tracing::info!("session user signed out");
    }

    /// Capability probe: records whether a native host bridge is reachable.
    ///
    /// Intended to run once during bootstrap, but re-probing is a harmless
    /// redundant write. Absence of a bridge is a valid state, not an error.
    pub fn probe_host(&self, bridge: &dyn HostBridge) {
        let available = bridge.is_available();
        self.tx
            .send_modify(|session| session.host_bridge_available = available);
        tracing::debug!(available, "host bridge probed");
    }

    /// Flips the sound preference.
    pub fn toggle_sound(&self) {
        self.tx
            .send_modify(|session| session.sound_enabled = !session.sound_enabled);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::DisconnectedBridge;
    use crate::user::{User, UserRole};

    fn operator(role: UserRole) -> User {
        User {
            id: "1".to_string(),
            name: "Ghost Operator".to_string(),
            email: "operator@ghost.sys".to_string(),
            role,
            xp: 0,
            streak: 0,
            level: 1,
        }
    }

    #[test]
    fn test_login_sets_user_and_flag_atomically() {
        let store = SessionStore::new();
        let rx = store.subscribe();
        let user = operator(UserRole::User);

        store.login(user.clone());

        // The subscriber's view is a single complete snapshot.
        let observed = rx.borrow().clone();
        assert!(observed.is_authenticated);
        assert_eq!(observed.user, Some(user));
    }

    #[test]
    fn test_relogin_replaces_user() {
        let store = SessionStore::new();
        store.login(operator(UserRole::User));
        store.login(operator(UserRole::Admin));

        let session = store.snapshot();
        assert!(session.is_authenticated);
        assert_eq!(session.user.unwrap().role, UserRole::Admin);
    }

    #[test]
    fn test_logout_clears_both_fields() {
        let store = SessionStore::new();
        store.login(operator(UserRole::User));
        store.logout();

        let session = store.snapshot();
        assert!(!session.is_authenticated);
        assert!(session.user.is_none());
    }

    #[test]
    fn test_logout_when_signed_out_still_notifies() {
        let store = SessionStore::new();
        let mut rx = store.subscribe();
        // Drain the initial value so only the logout notification remains.
        rx.borrow_and_update();

        store.logout();

        assert!(rx.has_changed().unwrap());
        let session = rx.borrow_and_update().clone();
        assert!(!session.is_authenticated);
        assert!(session.user.is_none());
    }

    #[test]
    fn test_set_booted_is_last_write_wins() {
        let store = SessionStore::new();
        store.set_booted(false);
        store.set_booted(true);
        store.set_booted(false);
        assert!(!store.snapshot().is_booted);

        store.set_booted(true);
        store.set_booted(false);
        store.set_booted(true);
        assert!(store.snapshot().is_booted);
    }

    #[test]
    fn test_toggle_sound_parity() {
        let store = SessionStore::new();
        let initial = store.snapshot().sound_enabled;

        store.toggle_sound();
        assert_eq!(store.snapshot().sound_enabled, !initial);

        store.toggle_sound();
        assert_eq!(store.snapshot().sound_enabled, initial);

        store.toggle_sound();
        store.toggle_sound();
        store.toggle_sound();
        assert_eq!(store.snapshot().sound_enabled, !initial);
    }

    #[test]
    fn test_probe_host_is_idempotent() {
        let store = SessionStore::new();
        let bridge = DisconnectedBridge;

        store.probe_host(&bridge);
        assert!(!store.snapshot().host_bridge_available);

        store.probe_host(&bridge);
        assert!(!store.snapshot().host_bridge_available);
    }

    #[test]
    fn test_operations_apply_in_invocation_order() {
        let store = SessionStore::new();
        let mut rx = store.subscribe();
        rx.borrow_and_update();

        store.login(operator(UserRole::User));
        store.set_booted(true);
        store.logout();

        // A late subscriber sees the final state only.
        let session = rx.borrow_and_update().clone();
        assert!(session.is_booted);
        assert!(!session.is_authenticated);
    }
}
