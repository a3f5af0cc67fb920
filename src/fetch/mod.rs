// src/fetch/mod.rs

use anyhow::{Context, Result};
use reqwest::{header, Client};
use std::path::Path;
use tokio::fs;
use tracing::info;
use url::Url;

/// Obtain the workbook bytes from an http(s) URL or a local path.
pub async fn fetch_workbook(client: &Client, source: &str) -> Result<Vec<u8>> {
    match Url::parse(source) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
            download(client, &url).await
        }
        _ => read_local(source).await,
    }
}

async fn download(client: &Client, url: &Url) -> Result<Vec<u8>> {
    let resp = client
        .get(url.as_str())
        .header(header::CACHE_CONTROL, "no-store")
        .send()
        .await
        .with_context(|| format!("GET {}", url))?
        .error_for_status()
        .with_context(|| format!("could not load workbook from {}", url))?;
    let bytes = resp
        .bytes()
        .await
        .with_context(|| format!("reading body from {}", url))?;
    info!(url = %url, len = bytes.len(), "downloaded workbook");
    Ok(bytes.to_vec())
}

async fn read_local(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let bytes = fs::read(path)
        .await
        .with_context(|| format!("could not load workbook file {:?}", path))?;
    info!(path = %path.display(), len = bytes.len(), "read workbook");
    Ok(bytes)
}
