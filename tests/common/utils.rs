use std::net::TcpListener;

use once_cell::sync::Lazy;
use reqwest::Client;
use serde_json::json;
use uuid::Uuid;

use scorebridge_backend::run;
use scorebridge_backend::storage::AppStores;
use scorebridge_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub stores: AppStores,
}

pub async fn spawn_app() -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let stores = AppStores::in_memory();
    let server = run(listener, stores.clone()).expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);

    TestApp { address, stores }
}

fn data_id(body: &serde_json::Value) -> Uuid {
    let id = body["data"]["id"].as_str().expect("data.id should be present");
    Uuid::parse_str(id).expect("data.id should be a uuid")
}

pub async fn register_user(app: &TestApp, client: &Client, username: &str) -> Uuid {
    let response = client
        .post(format!("{}/register_user", app.address))
        .json(&json!({
            "username": username,
            "email": format!("{}@example.com", username),
        }))
        .send()
        .await
        .expect("Failed to register user");
    assert!(response.status().is_success(), "User registration should succeed");
    data_id(&response.json::<serde_json::Value>().await.unwrap())
}

pub async fn create_league(app: &TestApp, client: &Client, owner_id: Uuid) -> Uuid {
    let response = client
        .post(format!("{}/league/create", app.address))
        .json(&json!({
            "name": format!("League {}", Uuid::new_v4()),
            "description": "integration test league",
            "owner_id": owner_id,
        }))
        .send()
        .await
        .expect("Failed to create league");
    assert!(response.status().is_success(), "League creation should succeed");
    data_id(&response.json::<serde_json::Value>().await.unwrap())
}

pub async fn register_team(
    app: &TestApp,
    client: &Client,
    league_id: Uuid,
    owner_id: Uuid,
    name: &str,
) -> Uuid {
    let response = client
        .post(format!("{}/league/teams/register", app.address))
        .json(&json!({
            "team_name": name,
            "team_description": "an integration test team",
            "league_id": league_id,
            "owner_id": owner_id,
        }))
        .send()
        .await
        .expect("Failed to register team");
    assert!(response.status().is_success(), "Team registration should succeed");
    data_id(&response.json::<serde_json::Value>().await.unwrap())
}

pub async fn create_match(
    app: &TestApp,
    client: &Client,
    league_id: Uuid,
    home_team_id: Uuid,
    away_team_id: Uuid,
) -> Uuid {
    let response = client
        .post(format!("{}/matches", app.address))
        .json(&json!({
            "home_team_id": home_team_id,
            "away_team_id": away_team_id,
            "league_id": league_id,
        }))
        .send()
        .await
        .expect("Failed to create match");
    assert!(response.status().is_success(), "Match creation should succeed");
    data_id(&response.json::<serde_json::Value>().await.unwrap())
}

pub fn report_body(
    match_id: Uuid,
    victor_id: Uuid,
    loser_id: Uuid,
    home_score: i32,
    away_score: i32,
    reported_by: Uuid,
) -> serde_json::Value {
    json!({
        "match_id": match_id,
        "victor_id": victor_id,
        "loser_id": loser_id,
        "home_score": home_score,
        "away_score": away_score,
        "reported_by": reported_by,
    })
}

/// A user, a league and two registered teams: the smallest world in which a
/// match can be reconciled.
pub struct LeagueFixture {
    pub owner_id: Uuid,
    pub league_id: Uuid,
    pub home_id: Uuid,
    pub away_id: Uuid,
}

pub async fn seed_league(app: &TestApp, client: &Client) -> LeagueFixture {
    let owner_id = register_user(app, client, &format!("owner{}", Uuid::new_v4())).await;
    let league_id = create_league(app, client, owner_id).await;
    let home_id = register_team(app, client, league_id, owner_id, "Home Side").await;
    let away_id = register_team(app, client, league_id, owner_id, "Away Side").await;
    LeagueFixture {
        owner_id,
        league_id,
        home_id,
        away_id,
    }
}
