use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    cm_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Number of rows in the customers table, deleted or not
pub async fn count_all_rows(pool: &SqlitePool) -> i64 {
    // Use sqlx::query_scalar (not the macro) to avoid offline mode issues in tests
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers")
        .fetch_one(pool)
        .await
        .expect("Failed to count customers")
}

/// File-backed pool with several connections, as the server opens it
pub async fn create_file_pool(dir: &tempfile::TempDir, max_connections: u32) -> SqlitePool {
    cm_db::connect(&dir.path().join("customers.db"), max_connections)
        .await
        .expect("Failed to create file-backed pool")
}
