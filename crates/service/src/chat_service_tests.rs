use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;
use travel_qa_core::{NewQuery, PageRequest, ValidationError};
use travel_qa_llm::{CompletionClient, CompletionConfig, RetryPolicy};
use travel_qa_storage::Storage;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{ChatService, ServiceError};

struct Harness {
    service: ChatService,
    storage: Arc<Storage>,
    server: MockServer,
    _temp_dir: TempDir,
}

async fn harness() -> Harness {
    let temp_dir = TempDir::new().unwrap();
    let storage = Arc::new(Storage::new(&temp_dir.path().join("svc.db")).unwrap());
    let server = MockServer::start().await;
    let config = CompletionConfig {
        retry: RetryPolicy::new(3, Duration::from_millis(5)),
        ..CompletionConfig::default()
    };
    let llm = Arc::new(CompletionClient::new("test-key".to_owned(), server.uri(), config).unwrap());
    let service = ChatService::new(Arc::clone(&storage), llm);
    Harness { service, storage, server, _temp_dir: temp_dir }
}

fn answer(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "choices": [{ "message": { "content": content }, "finish_reason": "stop" }],
        "usage": { "prompt_tokens": 1, "completion_tokens": 1, "total_tokens": 2 }
    }))
}

fn stored_count(storage: &Storage) -> u64 {
    storage.list(None, 1, 0).unwrap().total
}

#[tokio::test]
async fn test_submit_persists_exactly_one_record() {
    let h = harness().await;
    let earlier = h.storage.insert(&NewQuery::new("old", "old answer")).unwrap();

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(answer("Bring your passport."))
        .expect(1)
        .mount(&h.server)
        .await;

    let record = h
        .service
        .submit("Do I need a visa for Canada?".to_owned(), Some("alice".to_owned()))
        .await
        .unwrap();

    assert!(record.id > earlier);
    assert_eq!(record.query, "Do I need a visa for Canada?");
    assert_eq!(record.response, "Bring your passport.");
    assert_eq!(record.user_id.as_deref(), Some("alice"));
    assert!(record.success);
    assert!(record.response_time.is_some());
    assert_eq!(stored_count(&h.storage), 2);
    assert_eq!(h.storage.get_by_id(record.id).unwrap(), Some(record));
}

#[tokio::test]
async fn test_blank_query_never_reaches_client_or_store() {
    let h = harness().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(answer("unused"))
        .expect(0)
        .mount(&h.server)
        .await;

    for blank in ["", "   ", "\n\t"] {
        let err = h.service.submit(blank.to_owned(), None).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ValidationError::EmptyQuery)));
        assert!(err.is_client_error());
    }
    assert_eq!(stored_count(&h.storage), 0);
}

#[tokio::test]
async fn test_completion_failure_writes_nothing() {
    let h = harness().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(3)
        .mount(&h.server)
        .await;

    let err = h.service.submit("Passport validity rules?".to_owned(), None).await.unwrap_err();
    assert!(matches!(err, ServiceError::Completion(_)));
    assert!(!err.is_client_error());
    assert_eq!(stored_count(&h.storage), 0);
}

#[tokio::test]
async fn test_history_second_page_for_user() {
    let h = harness().await;
    let ids: Vec<i64> = (1..=5)
        .map(|n| {
            let new = NewQuery::new(format!("q{n}"), format!("a{n}")).user_id(Some("alice".to_owned()));
            h.storage.insert(&new).unwrap()
        })
        .collect();
    h.storage.insert(&NewQuery::new("other", "other").user_id(Some("bob".to_owned()))).unwrap();

    let page = h
        .service
        .history(Some("alice".to_owned()), PageRequest::new(2, 2).unwrap())
        .await
        .unwrap();

    assert_eq!(page.total_count, 5);
    assert_eq!(page.page, 2);
    assert_eq!(page.page_size, 2);
    let got: Vec<i64> = page.records.iter().map(|r| r.id).collect();
    assert_eq!(got, vec![ids[2], ids[1]]);
}

#[tokio::test]
async fn test_total_queries_and_get() {
    let h = harness().await;
    assert_eq!(h.service.total_queries().await.unwrap(), 0);

    let id = h.storage.insert(&NewQuery::new("q", "a")).unwrap();
    h.storage.insert(&NewQuery::new("q2", "a2")).unwrap();

    assert_eq!(h.service.total_queries().await.unwrap(), 2);
    assert_eq!(h.service.get(id).await.unwrap().unwrap().query, "q");
    assert!(h.service.get(id + 100).await.unwrap().is_none());
}

#[tokio::test]
async fn test_history_empty_user_id_means_no_filter() {
    let h = harness().await;
    for n in 0..3 {
        let new = NewQuery::new(format!("q{n}"), "a").user_id(Some("alice".to_owned()));
        h.storage.insert(&new).unwrap();
    }
    h.storage.insert(&NewQuery::new("anonymous", "a")).unwrap();

    let page = h
        .service
        .history(Some(String::new()), PageRequest::new(1, 10).unwrap())
        .await
        .unwrap();

    assert_eq!(page.total_count, 4);
    assert_eq!(page.records.len(), 4);
}
