mod auth;
mod common;
mod matchweek;
mod player;
mod team;
mod user;
mod user_team;

pub use auth::{
    AuthResponse, LoginRequest, LogoutRequest, RefreshTokenRequest, RegisterRequest,
};
pub use common::{ErrorResponse, Paginated};
pub use matchweek::{parse_timestamp, CreateMatchweek, Matchweek, UpdateMatchweek};
pub use player::{CreatePlayer, Player, PlayerQuery, Position, UpdatePlayer};
pub use team::{CreateTeam, RosterPlayer, Team, TeamWithPlayers, UpdateTeam};
pub use user::{ChangePasswordRequest, UpdateUser, User, UserRole};
pub use user_team::{
    CreateUserTeam, TeamValidation, UpdateUserTeam, UpdateUserTeamPoints, UserTeam, UserTeamDetails,
    MAX_ROSTER_SIZE,
};
