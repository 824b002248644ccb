use serde::Serialize;
use std::sync::Arc;
use tokio::task::spawn_blocking;

use travel_qa_core::{NewQuery, PageRequest, QueryRecord, QueryText};
use travel_qa_llm::CompletionClient;
use travel_qa_storage::{Storage, StorageError};

use crate::ServiceError;

/// One page of history plus the paging inputs that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryPage {
    pub records: Vec<QueryRecord>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
}

/// Request-scoped flows over the shared store and completion client.
///
/// Holds no mutable state of its own; concurrent calls are independent.
pub struct ChatService {
    storage: Arc<Storage>,
    llm: Arc<CompletionClient>,
}

impl ChatService {
    #[must_use]
    pub const fn new(storage: Arc<Storage>, llm: Arc<CompletionClient>) -> Self {
        Self { storage, llm }
    }

    async fn with_storage<T, F>(&self, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&Storage) -> Result<T, StorageError> + Send + 'static,
        T: Send + 'static,
    {
        let storage = Arc::clone(&self.storage);
        Ok(spawn_blocking(move || f(&storage)).await??)
    }

    /// Validates `query`, asks the completion client, and stores the pair.
    ///
    /// Nothing is written unless the completion succeeds. The returned record
    /// carries the store-assigned id and timestamp.
    pub async fn submit(
        &self,
        query: String,
        user_id: Option<String>,
    ) -> Result<QueryRecord, ServiceError> {
        let query = QueryText::parse(query)?;
        let preview: String = query.as_str().chars().take(50).collect();
        tracing::info!(user_id = ?user_id, "Processing query: {preview}...");

        let completion = self.llm.generate(query.as_str(), None).await?;

        let new = NewQuery::new(query.into_inner(), completion.response)
            .user_id(user_id)
            .response_time(Some(completion.response_time));
        let record = self
            .with_storage(move |s| {
                let id = s.insert(&new)?;
                Ok((id, s.get_by_id(id)?))
            })
            .await?;

        match record {
            (_, Some(record)) => {
                tracing::info!(
                    id = record.id,
                    response_time = completion.response_time,
                    tokens = ?completion.tokens_used,
                    "Query processed successfully"
                );
                Ok(record)
            },
            (id, None) => Err(ServiceError::MissingAfterInsert(id)),
        }
    }

    /// Newest-first history, optionally for one user. An empty `user_id`
    /// means no filter.
    pub async fn history(
        &self,
        user_id: Option<String>,
        page: PageRequest,
    ) -> Result<HistoryPage, ServiceError> {
        let user_id = user_id.filter(|u| !u.is_empty());
        let result = self
            .with_storage(move |s| s.list(user_id.as_deref(), page.limit(), page.offset()))
            .await?;
        Ok(HistoryPage {
            records: result.items,
            total_count: result.total,
            page: page.page(),
            page_size: page.page_size(),
        })
    }

    pub async fn get(&self, id: i64) -> Result<Option<QueryRecord>, ServiceError> {
        self.with_storage(move |s| s.get_by_id(id)).await
    }

    /// Number of stored records, read through a one-row list call.
    pub async fn total_queries(&self) -> Result<u64, ServiceError> {
        let page = self.with_storage(|s| s.list(None, 1, 0)).await?;
        Ok(page.total)
    }
}
