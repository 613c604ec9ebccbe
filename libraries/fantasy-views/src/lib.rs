//! Fantasy Football - View Models
//!
//! Headless screen logic for the fantasy football client. Each view composes
//! the client's resource services with its own local state (form fields,
//! filters, an error banner) and exposes plain methods a front-end calls.
//!
//! This crate provides:
//! - Route guards (`auth_guard`, `guest_guard`, `admin_guard`)
//! - Login and registration forms
//! - Matchweek list, detail, current-matchweek and admin screens
//! - Player browser with "add to my team", and admin player management
//! - Admin team management
//! - The team builder ("my team")
//! - User and admin dashboards
//!
//! # Architecture
//!
//! Views never talk HTTP themselves. They hold `Arc`s to the services of a
//! `FantasyClient`, and read cached collections through the services'
//! stores. Derived lists (filtered, searched, sorted) are recomputed from
//! those caches on every call.
//!
//! Destructive actions go through a [`Confirm`] implementation supplied by
//! the front-end, and submissions are validated locally first: a blocked
//! submission sends nothing.
//!
//! # Example
//!
//! ```rust
//! use fantasy_views::{countdown_text, page_numbers, CountdownStyle, PageItem};
//! use chrono::Duration;
//!
//! let text = countdown_text(Duration::hours(27), CountdownStyle::Short);
//! assert_eq!(text, "1d 3h left");
//!
//! let pages = page_numbers(5, 10);
//! assert_eq!(pages.first(), Some(&PageItem::Page(1)));
//! assert_eq!(pages.last(), Some(&PageItem::Page(10)));
//! ```

#![forbid(unsafe_code)]

pub mod auth;
mod confirm;
pub mod countdown;
pub mod dashboard;
mod error;
pub mod form;
pub mod guards;
pub mod matchweeks;
pub mod my_team;
pub mod players;
pub mod teams;

// Public exports
pub use auth::{landing_route, AuthFeedback, LoginForm, LoginView, RegisterForm, RegisterView};
pub use confirm::{AutoConfirm, Confirm};
pub use countdown::{countdown_text, deadline_text, Countdown, CountdownStyle, DEADLINE_PASSED};
pub use dashboard::{AdminDashboardView, AdminStats, DashboardView};
pub use error::{Result, ViewError};
pub use form::{FieldError, Rule};
pub use guards::{admin_guard, auth_guard, check_route, guest_guard, GuardOutcome};
pub use matchweeks::{
    AdminMatchweeksView, CurrentMatchweekView, MatchweekDetailView, MatchweekForm,
    MatchweekListView, SortDirection, SortField, StatusFilter,
};
pub use my_team::MyTeamView;
pub use players::{page_numbers, AdminPlayersView, PageItem, PlayerBrowserView, PlayerFilter, PlayerForm};
pub use teams::{AdminTeamsView, TeamForm};
