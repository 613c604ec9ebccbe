//! Integration tests for the view models.
//!
//! Each test wires a real `FantasyClient` to a wiremock server and drives a
//! view the way a front-end would.

use chrono::Utc;
use fantasy_client::{ClientConfig, FantasyClient, KeyValueStore, MemoryStore, TokenStore};
use fantasy_core::{Position, Route, User, UserRole};
use fantasy_views::{
    check_route, AdminDashboardView, AdminMatchweeksView, AdminStats, AdminTeamsView,
    AutoConfirm, GuardOutcome, LoginView, MyTeamView, PlayerBrowserView, StatusFilter, ViewError,
};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Helpers
// =============================================================================

#[derive(Serialize)]
struct Claims {
    sub: String,
    exp: i64,
}

fn long_lived_token() -> String {
    let claims = Claims {
        sub: "7".into(),
        exp: Utc::now().timestamp() + 24 * 3600,
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(b"test-secret")).unwrap()
}

fn user(role: UserRole) -> User {
    User {
        id: 7,
        username: "alice".into(),
        email: "alice@example.com".into(),
        role,
        created_at: "2024-01-01T00:00:00Z".into(),
    }
}

fn client_for(server: &MockServer, signed_in: Option<UserRole>) -> FantasyClient {
    let backend: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    if let Some(role) = signed_in {
        let tokens = TokenStore::new(Arc::clone(&backend));
        tokens.set_token(&long_lived_token());
        tokens.set_refresh_token("refresh-1");
        tokens.set_user(&user(role));
    }
    FantasyClient::new(ClientConfig::new(server.uri()), backend).unwrap()
}

fn matchweek_json(id: i64, week: u32, active: bool, completed: bool) -> Value {
    json!({
        "id": id,
        "weekNumber": week,
        "deadlineDate": format!("2030-01-{:02}T12:00:00Z", week),
        "isActive": active,
        "isCompleted": completed,
        "createdAt": "2024-01-01T00:00:00Z"
    })
}

fn team_json(id: i64, name: &str) -> Value {
    json!({ "id": id, "name": name, "createdAt": "2024-01-01T00:00:00Z" })
}

fn player_json(id: i64, name: &str, position: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "position": position,
        "teamId": id,
        "teamName": format!("Club {}", id),
        "createdAt": "2024-01-01T00:00:00Z"
    })
}

fn user_team_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "userId": 7,
        "username": "alice",
        "teamName": name,
        "totalPoints": 12,
        "isLocked": false,
        "createdAt": "2024-01-01T00:00:00Z"
    })
}

fn user_team_details_json(id: i64, name: &str, players: Vec<Value>) -> Value {
    let mut details = user_team_json(id, name);
    details["players"] = Value::Array(players);
    details
}

// =============================================================================
// Admin Matchweeks
// =============================================================================

mod admin_matchweeks {
    use super::*;

    async fn mount_all(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/matchweeks/all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                matchweek_json(1, 1, true, false),
                matchweek_json(2, 2, false, true),
                matchweek_json(3, 3, false, false),
            ])))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_upcoming_filter_keeps_unstarted_weeks() {
        let server = MockServer::start().await;
        mount_all(&server).await;

        let client = client_for(&server, Some(UserRole::Admin));
        let mut view =
            AdminMatchweeksView::new(Arc::clone(client.matchweeks()), Arc::new(AutoConfirm(true)));
        view.load().await.unwrap();

        view.status_filter = StatusFilter::Upcoming;
        let weeks: Vec<u32> = view.visible().iter().map(|m| m.week_number).collect();
        assert_eq!(weeks, vec![3]);

        view.status_filter = StatusFilter::All;
        view.search_term = "2".into();
        let weeks: Vec<u32> = view.visible().iter().map(|m| m.week_number).collect();
        assert_eq!(weeks, vec![2]);
    }

    #[tokio::test]
    async fn test_week_zero_blocks_submit() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/matchweeks"))
            .respond_with(ResponseTemplate::new(201).set_body_json(matchweek_json(9, 1, false, false)))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server, Some(UserRole::Admin));
        let mut view =
            AdminMatchweeksView::new(Arc::clone(client.matchweeks()), Arc::new(AutoConfirm(true)));
        view.open_create();
        view.form.week_number = Some(0);
        view.form.deadline = "2030-01-01T12:00".into();

        let err = view.submit().await.unwrap_err();
        assert!(matches!(err, ViewError::InvalidForm(_)));
    }

    #[tokio::test]
    async fn test_busy_service_blocks_submit_and_delete() {
        let server = MockServer::start().await;
        mount_all(&server).await;

        Mock::given(method("POST"))
            .and(path("/matchweeks"))
            .respond_with(ResponseTemplate::new(201).set_body_json(matchweek_json(9, 4, false, false)))
            .expect(0)
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server, Some(UserRole::Admin));
        let mut view =
            AdminMatchweeksView::new(Arc::clone(client.matchweeks()), Arc::new(AutoConfirm(true)));
        view.load().await.unwrap();

        view.open_create();
        view.form.week_number = Some(4);
        view.form.deadline = "2030-01-04T12:00".into();

        let third = view.visible()[2].clone();
        view.request_delete(&third);

        client.matchweeks().loading().set(true);

        assert!(matches!(view.submit().await, Err(ViewError::Busy)));
        assert!(view.is_form_open());

        assert!(matches!(view.confirm_delete().await, Err(ViewError::Busy)));
        assert_eq!(view.pending_delete().map(|m| m.id), Some(3));
        assert_eq!(client.matchweeks().matchweeks().get().len(), 3);
    }

    #[tokio::test]
    async fn test_duplicate_week_banner() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/matchweeks"))
            .respond_with(
                ResponseTemplate::new(409).set_body_json(json!({"message": "Week exists"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Some(UserRole::Admin));
        let mut view =
            AdminMatchweeksView::new(Arc::clone(client.matchweeks()), Arc::new(AutoConfirm(true)));
        view.open_create();
        view.form.week_number = Some(4);
        view.form.deadline = "2030-01-04T12:00".into();

        assert!(view.submit().await.is_err());
        assert!(view.error().unwrap().contains("already exists"));
        assert!(client.matchweeks().matchweeks().get().is_empty());
    }

    #[tokio::test]
    async fn test_deactivate_all_declined_sends_nothing() {
        let server = MockServer::start().await;
        mount_all(&server).await;

        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server, Some(UserRole::Admin));
        let mut view =
            AdminMatchweeksView::new(Arc::clone(client.matchweeks()), Arc::new(AutoConfirm(false)));
        view.load().await.unwrap();

        assert!(matches!(view.deactivate_all().await, Err(ViewError::Cancelled)));
    }
}

// =============================================================================
// Admin Teams
// =============================================================================

mod admin_teams {
    use super::*;

    async fn mount_teams(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                team_json(1, "Arsenal"),
                team_json(2, "Chelsea"),
            ])))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_delete_team_with_players_keeps_list() {
        let server = MockServer::start().await;
        mount_teams(&server).await;

        Mock::given(method("DELETE"))
            .and(path("/teams/1"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"message": "Team has players"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Some(UserRole::Admin));
        let mut view = AdminTeamsView::new(Arc::clone(client.teams()), Arc::new(AutoConfirm(true)));
        view.load().await.unwrap();

        let arsenal = view.teams()[0].clone();
        assert!(view.delete(&arsenal).await.is_err());

        assert_eq!(
            view.error(),
            Some("Cannot delete team: This team has existing players. Remove all players first.")
        );
        assert_eq!(view.teams().len(), 2);
    }

    #[tokio::test]
    async fn test_busy_service_blocks_submit() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/teams"))
            .respond_with(ResponseTemplate::new(201).set_body_json(team_json(9, "Everton")))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server, Some(UserRole::Admin));
        let mut view = AdminTeamsView::new(Arc::clone(client.teams()), Arc::new(AutoConfirm(true)));
        view.open_create();
        view.form.name = "Everton".into();

        client.teams().loading().set(true);
        assert!(matches!(view.submit().await, Err(ViewError::Busy)));
        assert!(view.is_form_open());
        assert!(client.teams().teams().get().is_empty());
    }

    #[tokio::test]
    async fn test_declined_confirmation_sends_no_delete() {
        let server = MockServer::start().await;
        mount_teams(&server).await;

        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server, Some(UserRole::Admin));
        let mut view = AdminTeamsView::new(Arc::clone(client.teams()), Arc::new(AutoConfirm(false)));
        view.load().await.unwrap();

        let chelsea = view.teams()[1].clone();
        assert!(matches!(view.delete(&chelsea).await, Err(ViewError::Cancelled)));
        assert_eq!(view.teams().len(), 2);
    }

    #[tokio::test]
    async fn test_create_sends_trimmed_form() {
        let server = MockServer::start().await;
        mount_teams(&server).await;

        Mock::given(method("POST"))
            .and(path("/teams"))
            .and(body_json(json!({"name": "Everton"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(team_json(3, "Everton")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Some(UserRole::Admin));
        let mut view = AdminTeamsView::new(Arc::clone(client.teams()), Arc::new(AutoConfirm(true)));
        view.open_create();
        view.form.name = " Everton ".into();

        let saved = view.submit().await.unwrap();
        assert_eq!(saved.id, 3);
        assert!(!view.is_form_open());
    }
}

// =============================================================================
// Player Browser
// =============================================================================

mod player_browser {
    use super::*;

    async fn mount_my_team(server: &MockServer, players: Vec<Value>) {
        Mock::given(method("GET"))
            .and(path("/userteams/user/7"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([user_team_json(5, "Alice FC")])),
            )
            .mount(server)
            .await;

        Mock::given(method("GET"))
            .and(path("/userteams/5"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(user_team_details_json(5, "Alice FC", players)),
            )
            .mount(server)
            .await;
    }

    fn browser(client: &FantasyClient) -> PlayerBrowserView {
        PlayerBrowserView::new(
            Arc::clone(client.players()),
            Arc::clone(client.teams()),
            Arc::clone(client.user_teams()),
            Arc::clone(client.session()),
        )
    }

    fn player(id: i64) -> fantasy_core::Player {
        serde_json::from_value(player_json(id, "Saka", "Midfielder")).unwrap()
    }

    #[tokio::test]
    async fn test_add_player_appends_to_roster() {
        let server = MockServer::start().await;
        mount_my_team(&server, vec![player_json(9, "Haaland", "Forward")]).await;

        Mock::given(method("PUT"))
            .and(path("/userteams/5"))
            .and(body_json(json!({"teamName": "Alice FC", "playerIds": [9, 10]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_team_json(5, "Alice FC")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Some(UserRole::User));
        let mut view = browser(&client);

        let team = view.add_to_team(&player(10)).await.unwrap();
        assert_eq!(team.id, 5);
        assert!(view.error().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_player_is_rejected() {
        let server = MockServer::start().await;
        mount_my_team(&server, vec![player_json(10, "Saka", "Midfielder")]).await;

        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server, Some(UserRole::User));
        let mut view = browser(&client);

        let err = view.add_to_team(&player(10)).await.unwrap_err();
        assert_eq!(err.to_string(), "Player is already in your team");
    }

    #[tokio::test]
    async fn test_full_roster_is_rejected() {
        let server = MockServer::start().await;
        mount_my_team(
            &server,
            vec![
                player_json(1, "Raya", "Goalkeeper"),
                player_json(2, "Saliba", "Defender"),
                player_json(3, "Rice", "Midfielder"),
                player_json(4, "Watkins", "Forward"),
            ],
        )
        .await;

        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server, Some(UserRole::User));
        let mut view = browser(&client);

        let err = view.add_to_team(&player(10)).await.unwrap_err();
        assert_eq!(err.to_string(), "Team is full (4 players maximum)");
        assert_eq!(view.error(), Some("Team is full (4 players maximum)"));
    }

    #[tokio::test]
    async fn test_position_filter_resets_page() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/players"))
            .and(query_param("pageNumber", "1"))
            .and(query_param("position", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [player_json(1, "Raya", "Goalkeeper")],
                "totalItems": 1,
                "totalPages": 1,
                "currentPage": 1,
                "pageSize": 20
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/players"))
            .and(query_param("pageNumber", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = client_for(&server, Some(UserRole::User));
        let mut view = browser(&client);
        view.go_to_page(3).await.unwrap();

        view.set_position(Some(Position::Goalkeeper)).await.unwrap();
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.visible().len(), 1);
    }
}

// =============================================================================
// My Team
// =============================================================================

mod my_team {
    use super::*;

    #[tokio::test]
    async fn test_create_team_uses_username() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/matchweeks/current"))
            .respond_with(ResponseTemplate::new(200).set_body_json(matchweek_json(3, 3, true, false)))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/userteams/user/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/userteams"))
            .and(body_json(json!({
                "matchweekId": 3,
                "teamName": "alice's Team",
                "playerIds": [],
                "captainId": 0,
                "viceCaptainId": 0
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(user_team_json(5, "alice's Team")))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/userteams/5"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(user_team_details_json(5, "alice's Team", vec![])),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, Some(UserRole::User));
        let mut view = MyTeamView::new(
            Arc::clone(client.matchweeks()),
            Arc::clone(client.user_teams()),
            Arc::clone(client.session()),
        );
        view.load().await.unwrap();
        assert!(!view.has_team());

        let details = view.create_team().await.unwrap();
        assert_eq!(details.team.team_name, "alice's Team");
        assert!(view.has_team());
        assert!(!view.is_valid());
    }

    #[tokio::test]
    async fn test_create_without_matchweek_is_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/matchweeks/current"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "None"})))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/userteams/user/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/userteams"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server, Some(UserRole::User));
        let mut view = MyTeamView::new(
            Arc::clone(client.matchweeks()),
            Arc::clone(client.user_teams()),
            Arc::clone(client.session()),
        );
        view.load().await.unwrap();
        assert_eq!(view.error(), Some("Failed to load current matchweek"));

        let err = view.create_team().await.unwrap_err();
        assert_eq!(err.to_string(), "No active matchweek found");
    }

    #[tokio::test]
    async fn test_remove_player_and_group_by_position() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/matchweeks/current"))
            .respond_with(ResponseTemplate::new(200).set_body_json(matchweek_json(3, 3, true, false)))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/userteams/user/7"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([user_team_json(5, "Alice FC")])),
            )
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/userteams/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_team_details_json(
                5,
                "Alice FC",
                vec![
                    player_json(1, "Raya", "Goalkeeper"),
                    player_json(3, "Rice", "Midfielder"),
                    player_json(4, "Odegaard", "Midfielder"),
                ],
            )))
            .mount(&server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/userteams/5"))
            .and(body_json(json!({"teamName": "Alice FC", "playerIds": [1, 4]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_team_json(5, "Alice FC")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Some(UserRole::User));
        let mut view = MyTeamView::new(
            Arc::clone(client.matchweeks()),
            Arc::clone(client.user_teams()),
            Arc::clone(client.session()),
        );
        view.load().await.unwrap();

        let groups = view.players_by_position();
        assert_eq!(groups[&Position::Goalkeeper].len(), 1);
        assert_eq!(groups[&Position::Midfielder].len(), 2);
        assert!(!groups.contains_key(&Position::Forward));

        view.remove_player(3).await.unwrap();
    }
}

// =============================================================================
// Dashboards
// =============================================================================

mod dashboards {
    use super::*;

    #[tokio::test]
    async fn test_admin_stats() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/players"))
            .and(query_param("pageNumber", "1"))
            .and(query_param("pageSize", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [player_json(1, "Raya", "Goalkeeper")],
                "totalItems": 42,
                "totalPages": 42,
                "currentPage": 1,
                "pageSize": 1
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/teams"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                team_json(1, "Arsenal"),
                team_json(2, "Chelsea"),
            ])))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                user(UserRole::Admin),
                user(UserRole::User),
                user(UserRole::User),
            ])))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/userteams"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([user_team_json(5, "Alice FC")])),
            )
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/matchweeks/all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                matchweek_json(1, 1, true, false),
                matchweek_json(2, 2, true, false),
                matchweek_json(3, 3, false, false),
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server, Some(UserRole::Admin));
        let mut view = AdminDashboardView::new(
            Arc::clone(client.players()),
            Arc::clone(client.teams()),
            Arc::clone(client.users()),
            Arc::clone(client.user_teams()),
            Arc::clone(client.matchweeks()),
        );

        let stats = view.load().await.unwrap();
        assert_eq!(
            stats,
            AdminStats {
                total_players: 42,
                total_teams: 2,
                total_users: 3,
                total_user_teams: 1,
                active_matchweeks: 2,
            }
        );
    }
}

// =============================================================================
// Login and Guards
// =============================================================================

mod login {
    use super::*;

    fn auth_body(role: UserRole) -> Value {
        json!({
            "token": long_lived_token(),
            "refreshToken": "refresh-2",
            "expiresAt": "2030-01-01T00:00:00Z",
            "user": user(role),
        })
    }

    #[tokio::test]
    async fn test_admin_lands_on_admin_dashboard() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/users/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(auth_body(UserRole::Admin)))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        assert_eq!(
            check_route(Route::AdminDashboard, client.session()),
            GuardOutcome::RedirectTo(Route::Login)
        );

        let mut view = LoginView::new(Arc::clone(client.auth()));
        view.form.username_or_email = "alice".into();
        view.form.password = "secret".into();

        assert_eq!(view.submit().await.unwrap(), Route::AdminDashboard);
        assert_eq!(check_route(Route::AdminDashboard, client.session()), GuardOutcome::Allow);
        assert_eq!(
            check_route(Route::Login, client.session()),
            GuardOutcome::RedirectTo(Route::Dashboard)
        );
    }

    #[tokio::test]
    async fn test_failed_login_shows_server_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/users/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "message": "Invalid credentials",
                "violations": ["Password is incorrect"]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let mut view = LoginView::new(Arc::clone(client.auth()));
        view.form.username_or_email = "alice".into();
        view.form.password = "wrong".into();

        assert!(view.submit().await.is_err());
        assert_eq!(view.feedback().message.as_deref(), Some("Invalid credentials"));
        assert_eq!(view.feedback().violations, vec!["Password is incorrect".to_string()]);
        assert!(!view.is_loading());
        assert!(!client.session().authenticated());
    }

    #[tokio::test]
    async fn test_empty_login_form_sends_nothing() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let mut view = LoginView::new(Arc::clone(client.auth()));
        assert!(matches!(view.submit().await, Err(ViewError::InvalidForm(_))));
    }
}
