//! Simulated sign-in flow.
//!
//! There is no real authentication anywhere in the runtime. The identity
//! provider waits out a configured delay and hands back a fully populated
//! profile; the use case stores it. The "authenticating" visual state
//! belongs to whoever drives the flow, never to the store.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use ghost_core::Result;
use ghost_core::session::SessionStore;
use ghost_core::user::{User, UserRole};

/// Resolves the identity of whoever is signing in.
///
/// Implementations construct the complete [`User`] record; the store
/// performs no validation of its own.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn authenticate(&self) -> Result<User>;
}

/// Stand-in for the real OAuth exchange.
///
/// Waits out the configured delay, then returns a fixed profile — the
/// default operator, or any profile supplied via [`with_profile`].
///
/// [`with_profile`]: SimulatedGoogleIdentity::with_profile
pub struct SimulatedGoogleIdentity {
    delay: Duration,
    profile: User,
}

impl SimulatedGoogleIdentity {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            profile: operator_profile(),
        }
    }

    /// Substitutes the profile handed back after the delay, e.g. an admin
    /// account.
    pub fn with_profile(delay: Duration, profile: User) -> Self {
        Self { delay, profile }
    }
}

#[async_trait]
impl IdentityProvider for SimulatedGoogleIdentity {
    async fn authenticate(&self) -> Result<User> {
        tokio::time::sleep(self.delay).await;
        Ok(self.profile.clone())
    }
}

/// The fresh operator profile issued on first sign-in.
pub fn operator_profile() -> User {
    User {
        id: "1".to_string(),
        name: "Ghost Operator".to_string(),
        email: "operator@ghost.sys".to_string(),
        role: UserRole::User,
        xp: 0,
        streak: 0,
        level: 1,
    }
}

/// Coordinates the identity provider with the session store.
pub struct AuthUseCase {
    store: Arc<SessionStore>,
    provider: Arc<dyn IdentityProvider>,
}

impl AuthUseCase {
    pub fn new(store: Arc<SessionStore>, provider: Arc<dyn IdentityProvider>) -> Self {
        Self { store, provider }
    }

    /// Runs the provider and stores the resulting session user.
    ///
    /// The store update is a single observable change; signing in while
    /// already signed in replaces the session user.
    pub async fn sign_in(&self) -> Result<User> {
        let user = self.provider.authenticate().await?;
        self.store.login(user.clone());
        Ok(user)
    }

    /// Clears the session user. Safe to call when already signed out.
    pub fn sign_out(&self) {
        self.store.logout();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_auth(store: &Arc<SessionStore>) -> AuthUseCase {
        AuthUseCase::new(
            store.clone(),
            Arc::new(SimulatedGoogleIdentity::new(Duration::ZERO)),
        )
    }

    #[tokio::test]
    async fn test_sign_in_stores_operator_profile() {
        let store = Arc::new(SessionStore::new());
        let auth = instant_auth(&store);

        let user = auth.sign_in().await.unwrap();
        assert_eq!(user, operator_profile());

        let session = store.snapshot();
        assert!(session.is_authenticated);
        assert_eq!(session.user, Some(user));
    }

    #[tokio::test]
    async fn test_sign_out_clears_session() {
        let store = Arc::new(SessionStore::new());
        let auth = instant_auth(&store);

        auth.sign_in().await.unwrap();
        auth.sign_out();

        let session = store.snapshot();
        assert!(!session.is_authenticated);
        assert!(session.user.is_none());
    }

    #[tokio::test]
    async fn test_custom_profile_is_stored_verbatim() {
        let store = Arc::new(SessionStore::new());
        let admin = User {
            role: UserRole::Admin,
            name: "Ghost Admin".to_string(),
            ..operator_profile()
        };
        let auth = AuthUseCase::new(
            store.clone(),
            Arc::new(SimulatedGoogleIdentity::with_profile(
                Duration::ZERO,
                admin.clone(),
            )),
        );

        auth.sign_in().await.unwrap();
        assert_eq!(store.snapshot().user, Some(admin));
    }
}
