//! Fantasy Football Core
//!
//! Platform-agnostic domain types, routes and state containers shared by the
//! API client, the view models and the terminal front-end.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Matchweek`, `Player`, `Team`, `UserTeam`, `User`, etc.
//! - **Routes**: the navigable screens of the application
//! - **State**: `Store<T>`, a publish-on-change holder views observe
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use fantasy_core::{Position, Route, Store};
//!
//! let position: Position = "midfielder".parse().unwrap();
//! assert_eq!(position.code(), 3);
//!
//! let route = Route::parse("/admin/teams");
//! assert!(route.requires_admin());
//!
//! let counter = Store::new(0);
//! counter.update(|n| *n += 1);
//! assert_eq!(counter.get(), 1);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod route;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use route::Route;
pub use store::Store;

pub use types::{
    // Auth
    AuthResponse, ErrorResponse, LoginRequest, LogoutRequest, RefreshTokenRequest,
    RegisterRequest,
    // Common
    Paginated,
    // Matchweeks
    parse_timestamp, CreateMatchweek, Matchweek, UpdateMatchweek,
    // Players
    CreatePlayer, Player, PlayerQuery, Position, UpdatePlayer,
    // Teams
    CreateTeam, RosterPlayer, Team, TeamWithPlayers, UpdateTeam,
    // User teams
    CreateUserTeam, TeamValidation, UpdateUserTeam, UpdateUserTeamPoints, UserTeam,
    UserTeamDetails,
    MAX_ROSTER_SIZE,
    // Users
    ChangePasswordRequest, UpdateUser, User, UserRole,
};
