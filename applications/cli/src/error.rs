/// Command-line error types
use fantasy_client::ClientError;
use fantasy_core::Route;
use fantasy_views::ViewError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// A route guard turned the command away
    #[error("{}", redirect_message(.0))]
    Redirected(Route),

    #[error("Already logged in. Run `fantasy logout` first.")]
    AlreadyLoggedIn,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    View(#[from] ViewError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn redirect_message(route: &Route) -> String {
    match route {
        Route::Login => "Not logged in. Run `fantasy login` first.".to_string(),
        Route::Dashboard => "This command is not available for your account.".to_string(),
        other => format!("Redirected to {}", other.path()),
    }
}
