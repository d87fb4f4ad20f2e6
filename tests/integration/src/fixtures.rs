//! Test fixtures
//!
//! Creates the tables the backend reads from and seeds users, chats and
//! messages with unique names so tests can share one database.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use sqlx::PgPool;
use tokio::sync::OnceCell;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

static SCHEMA_READY: OnceCell<()> = OnceCell::const_new();

const SCHEMA: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        online BOOLEAN NOT NULL DEFAULT FALSE
    )"#,
    r#"CREATE TABLE IF NOT EXISTS chats (
        id BIGSERIAL PRIMARY KEY,
        name TEXT,
        avatar TEXT,
        is_group BOOLEAN NOT NULL DEFAULT FALSE
    )"#,
    r#"CREATE TABLE IF NOT EXISTS chat_members (
        chat_id BIGINT NOT NULL REFERENCES chats(id),
        user_id BIGINT NOT NULL REFERENCES users(id),
        pinned BOOLEAN DEFAULT FALSE,
        muted BOOLEAN DEFAULT FALSE
    )"#,
    r#"CREATE TABLE IF NOT EXISTS messages (
        id BIGSERIAL PRIMARY KEY,
        chat_id BIGINT NOT NULL REFERENCES chats(id),
        sender_id BIGINT NOT NULL REFERENCES users(id),
        text TEXT NOT NULL,
        status TEXT DEFAULT 'sent',
        created_at TIMESTAMP NOT NULL DEFAULT NOW()
    )"#,
    r#"CREATE TABLE IF NOT EXISTS message_reactions (
        message_id BIGINT NOT NULL REFERENCES messages(id),
        user_id BIGINT NOT NULL REFERENCES users(id),
        emoji TEXT NOT NULL,
        UNIQUE (message_id, user_id, emoji)
    )"#,
    // Databases created by older test runs had stricter columns
    "ALTER TABLE chats ALTER COLUMN name DROP NOT NULL",
    "ALTER TABLE messages ALTER COLUMN status DROP NOT NULL",
    "ALTER TABLE chat_members DROP CONSTRAINT IF EXISTS chat_members_pkey",
];

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Connect to the test database and make sure the tables exist
pub async fn test_pool() -> Result<PgPool> {
    let url = std::env::var("DATABASE_URL")?;
    let pool = PgPool::connect(&url).await?;
    SCHEMA_READY
        .get_or_try_init(|| async {
            for statement in SCHEMA {
                sqlx::query(statement).execute(&pool).await?;
            }
            Ok::<_, sqlx::Error>(())
        })
        .await?;
    Ok(pool)
}

/// A one-to-one chat between two fresh users
#[derive(Debug, Clone, Copy)]
pub struct DirectChat {
    pub chat_id: i64,
    pub me: i64,
    pub peer: i64,
}

impl DirectChat {
    /// Seed two users and a chat they both belong to
    pub async fn seed(pool: &PgPool, peer_online: bool) -> Result<Self> {
        let suffix = unique_suffix();
        let me = insert_user(pool, &format!("me-{suffix}"), false).await?;
        let peer = insert_user(pool, &format!("peer-{suffix}"), peer_online).await?;

        let chat_id: i64 = sqlx::query_scalar("INSERT INTO chats (name) VALUES ($1) RETURNING id")
            .bind(format!("Chat {suffix}"))
            .fetch_one(pool)
            .await?;

        for user in [me, peer] {
            sqlx::query("INSERT INTO chat_members (chat_id, user_id) VALUES ($1, $2)")
                .bind(chat_id)
                .bind(user)
                .execute(pool)
                .await?;
        }

        Ok(Self { chat_id, me, peer })
    }
}

/// Insert a user and return its id
pub async fn insert_user(pool: &PgPool, name: &str, online: bool) -> Result<i64> {
    let id = sqlx::query_scalar("INSERT INTO users (name, online) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(online)
        .fetch_one(pool)
        .await?;
    Ok(id)
}
