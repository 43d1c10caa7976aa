//! Asset download into a scratch directory
//!
//! Downloads are streamed chunk-wise to disk. A download that leaves no
//! file or an empty file behind fails the setup.

use crate::error::{AppError, ReleaseError, SetupError};
use crate::progress::Progress;
use crate::release::HttpClient;
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Download a release asset to `dest`, returning the number of bytes written
///
/// Fails with [`SetupError::Download`] when the file is missing or empty
/// afterwards.
pub async fn download_asset(
    client: &HttpClient,
    url: &str,
    dest: &Path,
    progress: &mut Progress,
    label: &str,
) -> Result<u64, AppError> {
    progress.spinner(&format!("Downloading {}", label));
    let result = fetch_to_file(client, url, dest).await;
    progress.finish_and_clear();
    result?;

    let size = std::fs::metadata(dest).map(|m| m.len()).unwrap_or(0);
    if size == 0 {
        return Err(SetupError::download(url, dest).into());
    }

    Ok(size)
}

async fn fetch_to_file(client: &HttpClient, url: &str, dest: &Path) -> Result<(), AppError> {
    let mut response = client.get(url).await?;

    let mut file = tokio::fs::File::create(dest)
        .await
        .map_err(|e| SetupError::io(dest, e))?;

    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| ReleaseError::network(url, e.to_string()))?
    {
        file.write_all(&chunk)
            .await
            .map_err(|e| SetupError::io(dest, e))?;
    }

    file.flush().await.map_err(|e| SetupError::io(dest, e))?;
    Ok(())
}
