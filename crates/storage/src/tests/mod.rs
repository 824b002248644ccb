//! Test utilities and module declarations for storage tests.

use crate::Storage;
use tempfile::TempDir;
use travel_qa_core::NewQuery;

pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

pub fn create_test_query(n: usize, user_id: Option<&str>) -> NewQuery {
    NewQuery::new(format!("Question {n}"), format!("Answer {n}"))
        .user_id(user_id.map(ToOwned::to_owned))
        .response_time(Some(0.25))
}
