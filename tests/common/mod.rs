#![allow(dead_code)]

use ratings::configuration::{get_configuration, DatabaseSettings, Settings};
use ratings::models::Rating;
use sqlx::{Connection, Executor, PgConnection, PgPool};

/// Author seeded into every fresh database.
pub const SEEDED_USER: i64 = 1;
pub const DATE: i64 = 1257894000000;

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

/// Creates a throwaway database, migrates it and seeds one user.
/// Returns `None` when Postgres is not reachable so callers can skip.
pub async fn test_pool() -> Option<PgPool> {
    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    match configure_database(&configuration.database).await {
        Ok(pool) => Some(pool),
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            None
        }
    }
}

pub async fn spawn_app_with_configuration(mut configuration: Settings) -> Option<TestApp> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let connection_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let server = ratings::startup::run(listener, connection_pool.clone())
        .await
        .expect("Failed to bind address.");

    let _ = tokio::spawn(server);

    Some(TestApp {
        address,
        db_pool: connection_pool,
    })
}

pub async fn spawn_app() -> Option<TestApp> {
    let configuration = get_configuration().expect("Failed to get configuration");
    spawn_app_with_configuration(configuration).await
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    create_user(&connection_pool, SEEDED_USER).await?;

    Ok(connection_pool)
}

pub async fn create_user(pool: &PgPool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO users (id, email) VALUES ($1, $2)")
        .bind(id)
        .bind(format!("user{}@test.com", id))
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn drop_ratings_table(pool: &PgPool) {
    sqlx::query("DROP TABLE rating")
        .execute(pool)
        .await
        .expect("Failed to drop rating table");
}

/// A fully populated rating as it would sit in the table.
pub fn stored_rating(id: i64, target: i64, user_id: i64) -> Rating {
    Rating {
        id,
        target,
        user_id,
        score: 10,
        comment: String::new(),
        extra: serde_json::json!({}),
        active: true,
        anonymous: true,
        date: DATE,
    }
}
