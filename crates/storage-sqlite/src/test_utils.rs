//! Fixtures for repository tests.

use diesel::RunQueryDsl;
use std::sync::Arc;
use tempfile::tempdir;

use crate::db::{create_pool, get_connection, init, run_migrations, spawn_writer, DbPool, WriteHandle};

/// Creates a migrated database in a temp dir. Keep the `TempDir` alive for
/// the duration of the test.
pub async fn create_test_db() -> (Arc<DbPool>, WriteHandle, tempfile::TempDir) {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("daybook.db");
    let db_path = init(&db_path.to_string_lossy()).expect("Failed to init database");

    let pool = create_pool(&db_path).expect("Failed to create pool");
    run_migrations(&pool).expect("Failed to run migrations");
    let writer = spawn_writer((*pool).clone());
    (pool, writer, temp_dir)
}

/// Inserts a bare user row so foreign keys are satisfied.
pub fn insert_test_user(pool: &Arc<DbPool>, user_id: &str) {
    let mut conn = get_connection(pool).expect("Failed to get connection");
    diesel::sql_query(format!(
        "INSERT INTO users (id, email, first_name, last_name, password_hash, is_active, created_at) \
         VALUES ('{0}', '{0}@example.com', 'Test', 'Trader', 'hash', 1, datetime('now'))",
        user_id
    ))
    .execute(&mut conn)
    .expect("Failed to create test user");
}
