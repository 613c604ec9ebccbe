//! Route guards

use fantasy_client::Session;
use fantasy_core::Route;

/// Decision of a guard for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    RedirectTo(Route),
}

/// Signed-in users only; everyone else goes to the login screen.
pub fn auth_guard(session: &Session) -> GuardOutcome {
    if session.authenticated() {
        GuardOutcome::Allow
    } else {
        GuardOutcome::RedirectTo(Route::Login)
    }
}

/// Signed-out visitors only; signed-in users go to the dashboard.
pub fn guest_guard(session: &Session) -> GuardOutcome {
    if session.authenticated() {
        GuardOutcome::RedirectTo(Route::Dashboard)
    } else {
        GuardOutcome::Allow
    }
}

/// Admins only; everyone else goes to the dashboard.
pub fn admin_guard(session: &Session) -> GuardOutcome {
    if session.authenticated() && session.is_admin() {
        GuardOutcome::Allow
    } else {
        GuardOutcome::RedirectTo(Route::Dashboard)
    }
}

/// Run the guards the route table attaches to `route`, in order.
pub fn check_route(route: Route, session: &Session) -> GuardOutcome {
    if route.is_guest_only() {
        return guest_guard(session);
    }

    match auth_guard(session) {
        GuardOutcome::Allow if route.requires_admin() => admin_guard(session),
        outcome => outcome,
    }
}
