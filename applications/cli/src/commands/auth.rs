use crate::app::App;
use crate::cli::RegisterArgs;
use crate::error::{CliError, Result};
use chrono::Utc;
use fantasy_core::Route;
use fantasy_views::{AuthFeedback, DashboardView, LoginView, RegisterView, ViewError};
use std::sync::Arc;
use tracing::info;

pub async fn login(
    app: &App,
    user: String,
    password: String,
    return_to: Option<String>,
) -> Result<()> {
    app.enter(Route::Login)?;

    let client = app.client();
    let mut view = LoginView::new(Arc::clone(client.auth()));
    view.form.username_or_email = user;
    view.form.password = password;
    view.return_to = return_to.as_deref().map(Route::parse);

    let result = view.submit().await;
    let landing = report(result, view.feedback())?;

    let username = client.session().user().map(|u| u.username).unwrap_or_default();
    println!("Logged in as {}", username);
    println!("Next: {}", landing.path());
    Ok(())
}

pub async fn register(app: &App, args: RegisterArgs) -> Result<()> {
    app.enter(Route::Register)?;

    let mut view = RegisterView::new(Arc::clone(app.client().auth()));
    view.form.confirm_password = args.confirm_password.unwrap_or_else(|| args.password.clone());
    view.form.username = args.username;
    view.form.email = args.email;
    view.form.password = args.password;

    let result = view.submit().await;
    let landing = report(result, view.feedback())?;

    println!("Account created for {}", view.form.username.trim());
    println!("Next: {}", landing.path());
    Ok(())
}

/// Print server-side violations under the banner before failing.
fn report(result: fantasy_views::Result<Route>, feedback: &AuthFeedback) -> Result<Route> {
    if result.is_err() {
        for violation in &feedback.violations {
            eprintln!("  - {}", violation);
        }
    }
    result.map_err(CliError::from)
}

pub async fn logout(app: &App, all: bool) -> Result<()> {
    let client = app.client();
    if !client.session().authenticated() {
        println!("Not logged in");
        return Ok(());
    }

    let result = if all {
        client.auth().logout_all().await
    } else {
        client.auth().logout().await
    };

    // The local session is gone either way
    if let Err(e) = result {
        info!(error = %e, "Server rejected logout; local session cleared");
    }
    println!("Logged out{}", if all { " from all devices" } else { "" });
    Ok(())
}

pub async fn whoami(app: &App) -> Result<()> {
    app.enter(Route::Dashboard)?;

    let client = app.client();
    let Some(user) = client.session().user() else {
        return Err(ViewError::Rejected("User not authenticated".into()).into());
    };
    println!("{} <{}> ({})", user.username, user.email, user.role);

    let mut view = DashboardView::new(
        Arc::clone(client.matchweeks()),
        Arc::clone(client.user_teams()),
        Arc::clone(client.session()),
    );
    if let Err(e) = view.load().await {
        eprintln!("Dashboard data unavailable: {}", e);
    }

    println!();
    println!("Team:          {}", view.team_name());
    println!("Total points:  {}", view.total_points());
    println!("Players:       {}", view.player_count());
    println!("Locked:        {}", if view.is_locked() { "yes" } else { "no" });
    if let Some(matchweek) = view.current_matchweek() {
        println!("Matchweek:     {}", matchweek.week_number);
    }
    println!("Deadline in:   {}", view.countdown(Utc::now()));
    Ok(())
}
