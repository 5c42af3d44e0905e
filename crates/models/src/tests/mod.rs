/// Database connection tests
pub mod db_tests;


/// Tests touching Postgres run only when a database is configured.
pub(crate) fn skip_db_tests() -> bool {
    let _ = dotenvy::dotenv();
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return true;
    }
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("skip: DATABASE_URL not set");
        return true;
    }
    false
}
