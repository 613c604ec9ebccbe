//! Navigable screens of the application
//!
//! Routes mirror the web client's route table. Parsing never fails: unknown
//! paths fall back to the dashboard, like the catch-all redirect did.

use std::fmt;

/// A screen the user can navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    MyTeam,
    Players,
    Matchweeks,
    CurrentMatchweek,
    MatchweekDetail(i64),
    AdminDashboard,
    AdminPlayers,
    AdminTeams,
    AdminMatchweeks,
}

impl Route {
    /// Parse a path such as `/admin/players` or `matchweeks/12`.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["my-team"] => Route::MyTeam,
            ["players"] => Route::Players,
            ["matchweeks"] => Route::Matchweeks,
            ["matchweeks", "current"] => Route::CurrentMatchweek,
            ["matchweeks", id] => id
                .parse()
                .map(Route::MatchweekDetail)
                .unwrap_or(Route::Matchweeks),
            ["admin"] | ["admin", "dashboard"] => Route::AdminDashboard,
            ["admin", "players"] => Route::AdminPlayers,
            ["admin", "teams"] => Route::AdminTeams,
            ["admin", "matchweeks"] => Route::AdminMatchweeks,
            _ => Route::Dashboard,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".into(),
            Route::Register => "/register".into(),
            Route::Dashboard => "/dashboard".into(),
            Route::MyTeam => "/my-team".into(),
            Route::Players => "/players".into(),
            Route::Matchweeks => "/matchweeks".into(),
            Route::CurrentMatchweek => "/matchweeks/current".into(),
            Route::MatchweekDetail(id) => format!("/matchweeks/{}", id),
            Route::AdminDashboard => "/admin/dashboard".into(),
            Route::AdminPlayers => "/admin/players".into(),
            Route::AdminTeams => "/admin/teams".into(),
            Route::AdminMatchweeks => "/admin/matchweeks".into(),
        }
    }

    /// Login and register are only for signed-out visitors.
    pub fn is_guest_only(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }

    pub fn requires_auth(&self) -> bool {
        !self.is_guest_only()
    }

    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            Route::AdminDashboard | Route::AdminPlayers | Route::AdminTeams | Route::AdminMatchweeks
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("my-team"), Route::MyTeam);
        assert_eq!(Route::parse("/matchweeks/current"), Route::CurrentMatchweek);
        assert_eq!(Route::parse("/matchweeks/12"), Route::MatchweekDetail(12));
        assert_eq!(Route::parse("/admin"), Route::AdminDashboard);
        assert_eq!(Route::parse("/admin/teams?page=2"), Route::AdminTeams);
    }

    #[test]
    fn test_unknown_paths_fall_back_to_dashboard() {
        assert_eq!(Route::parse(""), Route::Dashboard);
        assert_eq!(Route::parse("/"), Route::Dashboard);
        assert_eq!(Route::parse("/nowhere/at/all"), Route::Dashboard);
    }

    #[test]
    fn test_path_round_trips() {
        let routes = [
            Route::Login,
            Route::Register,
            Route::Dashboard,
            Route::MyTeam,
            Route::Players,
            Route::Matchweeks,
            Route::CurrentMatchweek,
            Route::MatchweekDetail(7),
            Route::AdminDashboard,
            Route::AdminPlayers,
            Route::AdminTeams,
            Route::AdminMatchweeks,
        ];

        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_access_classes() {
        assert!(Route::Login.is_guest_only());
        assert!(!Route::Login.requires_auth());
        assert!(Route::Players.requires_auth());
        assert!(!Route::Players.requires_admin());
        assert!(Route::AdminMatchweeks.requires_admin());
    }
}
