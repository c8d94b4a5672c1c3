//! Shared helpers for CSV storage tests.

use tempfile::TempDir;

use super::connection::CsvConnection;

/// Create a connection rooted in a fresh temp directory. The directory is
/// returned so it stays alive for the duration of the test.
pub fn temp_connection() -> (TempDir, CsvConnection) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let connection =
        CsvConnection::new(dir.path().to_path_buf()).expect("failed to create connection");
    (dir, connection)
}
