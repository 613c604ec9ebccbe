use crate::app::App;
use crate::cli::MatchweekCommand;
use crate::error::{CliError, Result};
use chrono::{DateTime, Utc};
use fantasy_core::{Matchweek, Route};
use fantasy_views::matchweeks::CSV_FILE_NAME;
use fantasy_views::{
    AdminMatchweeksView, CurrentMatchweekView, MatchweekDetailView, MatchweekListView, ViewError,
};
use std::sync::Arc;

pub async fn run(app: &App, command: MatchweekCommand) -> Result<()> {
    match command {
        MatchweekCommand::List { status, sort, desc } => {
            app.enter(Route::Matchweeks)?;
            let mut view = MatchweekListView::new(Arc::clone(app.client().matchweeks()));
            view.status_filter = status;
            view.sort_field = sort.into();
            view.sort_direction = MatchweekCommand::sort_direction(desc);
            view.load().await?;

            let stats = view.stats();
            println!(
                "{} matchweeks: {} active, {} completed, {} upcoming",
                stats.total, stats.active, stats.completed, stats.upcoming
            );
            let now = Utc::now();
            for matchweek in view.visible() {
                println!("{}  {}", row(&matchweek), view.countdown_text(&matchweek, now));
            }
            if let Some(route) = view.current_route() {
                println!("Current matchweek: {}", route.path());
            }
            Ok(())
        }
        MatchweekCommand::Current => {
            app.enter(Route::CurrentMatchweek)?;
            let view = CurrentMatchweekView::new(Arc::clone(app.client().matchweeks()));
            let matchweek = view.load().await?;
            let now = Utc::now();
            let countdown = view.countdown(now);

            println!("{}", row(&matchweek));
            if view.is_deadline_passed(now) {
                println!("Deadline passed");
            } else {
                println!(
                    "{} days {} hours {} minutes {} seconds left",
                    countdown.days, countdown.hours, countdown.minutes, countdown.seconds
                );
            }
            Ok(())
        }
        MatchweekCommand::Show { id } => {
            app.enter(Route::MatchweekDetail(id))?;
            let view = MatchweekDetailView::new(Arc::clone(app.client().matchweeks()));
            let matchweek = view.open(id).await?;

            println!("{}", row(&matchweek));
            println!("{}", view.countdown_text(Utc::now()));
            if let Some(previous) = view.previous_route() {
                println!("Previous: {}", previous.path());
            }
            if let Some(next) = view.next_route() {
                println!("Next: {}", next.path());
            }
            Ok(())
        }
        MatchweekCommand::Create { week, deadline } => {
            let mut view = admin_view(app)?;
            view.open_create();
            view.form.week_number = Some(week);
            view.form.deadline = deadline;

            let created = view.submit().await?;
            println!("Created {}", row(&created));
            Ok(())
        }
        MatchweekCommand::Update {
            id,
            week,
            deadline,
            active,
            completed,
        } => {
            let mut view = admin_view(app)?;
            let existing = fetch(app, id).await?;
            view.open_edit(&existing);
            if let Some(week) = week {
                view.form.week_number = Some(week);
            }
            if let Some(deadline) = deadline {
                view.form.deadline = deadline;
            }
            if let Some(active) = active {
                view.form.is_active = active;
            }
            if let Some(completed) = completed {
                view.form.is_completed = completed;
            }

            let updated = view.submit().await?;
            println!("Updated {}", row(&updated));
            Ok(())
        }
        MatchweekCommand::Delete { id } => {
            let mut view = admin_view(app)?;
            let matchweek = fetch(app, id).await?;
            view.request_delete(&matchweek);

            let prompt = format!(
                "Are you sure you want to delete Matchweek {}?",
                matchweek.week_number
            );
            if !app.confirm().confirm(&prompt) {
                view.cancel_delete();
                return Err(ViewError::Cancelled.into());
            }

            view.confirm_delete().await?;
            println!("Deleted matchweek {}", matchweek.week_number);
            Ok(())
        }
        MatchweekCommand::DeactivateAll => {
            let mut view = admin_view(app)?;
            view.load().await?;
            let count = view.deactivate_all().await?;
            println!("Deactivated {} matchweeks", count);
            Ok(())
        }
        MatchweekCommand::Export {
            status,
            search,
            output,
        } => {
            let mut view = admin_view(app)?;
            view.load().await?;
            view.status_filter = status;
            view.search_term = search;

            let path = output.unwrap_or_else(|| CSV_FILE_NAME.into());
            tokio::fs::write(&path, view.export_csv()).await?;
            println!("Exported {} matchweeks to {}", view.visible().len(), path.display());
            Ok(())
        }
    }
}

fn admin_view(app: &App) -> Result<AdminMatchweeksView> {
    app.enter(Route::AdminMatchweeks)?;
    Ok(AdminMatchweeksView::new(
        Arc::clone(app.client().matchweeks()),
        app.confirm(),
    ))
}

async fn fetch(app: &App, id: i64) -> Result<Matchweek> {
    app.client()
        .matchweeks()
        .get(id)
        .await
        .map_err(CliError::from)
}

fn row(matchweek: &Matchweek) -> String {
    format!(
        "#{:<4} Week {:>2}  {}  {:<9}",
        matchweek.id,
        matchweek.week_number,
        format_deadline(matchweek.deadline_date),
        status(matchweek)
    )
}

fn format_deadline(deadline: DateTime<Utc>) -> String {
    deadline.format("%Y-%m-%d %H:%M UTC").to_string()
}

fn status(matchweek: &Matchweek) -> &'static str {
    if matchweek.is_completed {
        "Completed"
    } else if matchweek.is_active {
        "Active"
    } else {
        "Upcoming"
    }
}
