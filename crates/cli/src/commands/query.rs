use anyhow::{Result, bail};

use travel_qa_core::PageRequest;
use travel_qa_service::ChatService;

use crate::{build_client, build_read_only_service, open_storage};

pub(crate) async fn ask(query: String, user_id: Option<String>) -> Result<()> {
    let service = ChatService::new(open_storage()?, build_client()?);
    let record = service.submit(query, user_id).await?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

pub(crate) async fn history(user_id: Option<String>, page: u32, page_size: u32) -> Result<()> {
    let page = PageRequest::new(page, page_size)?;
    let history = build_read_only_service()?.history(user_id, page).await?;
    println!("{}", serde_json::to_string_pretty(&history)?);
    Ok(())
}

pub(crate) async fn get(id: i64) -> Result<()> {
    match build_read_only_service()?.get(id).await? {
        Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
        None => println!("Query not found: {id}"),
    }
    Ok(())
}

pub(crate) async fn stats() -> Result<()> {
    let total = build_read_only_service()?.total_queries().await?;
    println!("{}", serde_json::json!({ "total_queries": total }));
    Ok(())
}

pub(crate) async fn check_key() -> Result<()> {
    let client = build_client()?;
    let info = client.model_info();
    if !client.validate_api_key().await {
        bail!("API key was rejected by {}", client.base_url());
    }
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
