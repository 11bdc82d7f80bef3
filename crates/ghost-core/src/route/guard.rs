//! Navigation guard.
//!
//! Permits or denies entry to a route from the current session state. This
//! is an explicit allow/deny decision consumed by the router; there is no
//! server-side authority behind it, so the admin redirect is concealment,
//! not a security boundary.

use crate::route::model::{Access, Route, View};
use crate::session::Session;
use crate::user::User;

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Entry granted; render this view.
    Grant(View),
    /// Entry denied; navigate to this route instead.
    Redirect(Route),
}

/// Decides whether the session may enter `route`.
///
/// Unauthenticated access to any non-public route redirects to the login
/// screen. An authenticated non-admin hitting the admin route is sent to
/// the not-found view, keeping the route indistinguishable from a missing
/// one.
pub fn authorize(session: &Session, route: Route) -> RouteDecision {
    match route.access() {
        Access::Public => RouteDecision::Grant(route.view()),
        Access::Authenticated => {
            if session.is_authenticated {
                RouteDecision::Grant(route.view())
            } else {
                RouteDecision::Redirect(Route::Login)
            }
        }
        Access::Admin => {
            if !session.is_authenticated {
                RouteDecision::Redirect(Route::Login)
            } else if session.user.as_ref().is_some_and(User::is_admin) {
                RouteDecision::Grant(route.view())
            } else {
                RouteDecision::Redirect(Route::NotFound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::UserRole;

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

    fn signed_in(role: UserRole) -> Session {
        Session {
            user: Some(operator(role)),
            is_authenticated: true,
            ..Session::default()
        }
    }

    #[test]
    fn test_fresh_session_is_redirected_to_login() {
        let session = Session::default();
        assert_eq!(
            authorize(&session, Route::Dashboard),
            RouteDecision::Redirect(Route::Login)
        );
        assert_eq!(
            authorize(&session, Route::Chat),
            RouteDecision::Redirect(Route::Login)
        );
    }

    #[test]
    fn test_public_routes_are_always_granted() {
        let session = Session::default();
        assert_eq!(
            authorize(&session, Route::Login),
            RouteDecision::Grant(View::Login)
        );
        assert_eq!(
            authorize(&session, Route::NotFound),
            RouteDecision::Grant(View::NotFound)
        );
    }

    #[test]
    fn test_authenticated_user_enters_protected_routes() {
        let session = signed_in(UserRole::User);
        assert_eq!(
            authorize(&session, Route::Dashboard),
            RouteDecision::Grant(View::Dashboard)
        );
        // Aliased routes grant the dashboard view.
        assert_eq!(
            authorize(&session, Route::Settings),
            RouteDecision::Grant(View::Dashboard)
        );
    }

    #[test]
    fn test_non_admin_is_concealed_from_admin_route() {
        let session = signed_in(UserRole::User);
        assert_eq!(
            authorize(&session, Route::Admin),
            RouteDecision::Redirect(Route::NotFound)
        );
    }

    #[test]
    fn test_admin_enters_admin_route() {
        let session = signed_in(UserRole::Admin);
        assert_eq!(
            authorize(&session, Route::Admin),
            RouteDecision::Grant(View::Admin)
        );
    }

    #[test]
    fn test_unauthenticated_admin_attempt_goes_to_login() {
        let session = Session::default();
        assert_eq!(
            authorize(&session, Route::Admin),
            RouteDecision::Redirect(Route::Login)
        );
    }
}
