//! The sync pipeline: discover, retrieve, generate, emit.
//!
//! Control flows strictly forward. The only concurrency is the per-icon
//! asset download fan-out; every other stage runs sequentially. There is no
//! retry and no rollback: the first fatal error aborts the run, leaving any
//! artifacts already written on disk.

use crate::config::SyncConfig;
use futures::future::join_all;
use iconsync_codegen::{GeneratedFile, IconAsset, IconModule, extract_icons, plan_artifacts};
use iconsync_figma::FigmaClient;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

/// Fatal pipeline failures. A missing per-icon image URL is not among them;
/// that icon is skipped with a warning and the run continues.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Api(#[from] iconsync_figma::Error),

    #[error(transparent)]
    Codegen(#[from] iconsync_codegen::Error),

    #[error("failed to write artifact {path}")]
    WriteArtifact {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Summary of one completed run.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub icons_found: usize,
    pub assets_downloaded: usize,
    /// Component names of icons dropped for lack of a rendered-image URL.
    pub skipped: Vec<String>,
    pub files_written: usize,
}

/// Run one full sync pass over the configured icon container.
pub async fn run(config: &SyncConfig) -> Result<SyncReport, SyncError> {
    let client =
        FigmaClient::builder(&config.token).with_base_url(config.api_base.clone()).build()?;

    info!(file = %config.file_id, node = %config.icon_node_id, "fetching icon container from Figma");
    let document = client.get_file_nodes(&config.file_id, &config.icon_node_id).await?;

    let icons = extract_icons(&document);
    info!(count = icons.len(), "discovered icon components");

    let ids: Vec<String> = icons.iter().map(|icon| icon.id.clone()).collect();
    let urls = client.get_image_urls(&config.file_id, &ids, config.format).await?;

    let downloads = icons.iter().map(|icon| {
        let client = client.clone();
        let url = urls.get(&icon.id).cloned().flatten();
        let icon = icon.clone();
        async move {
            let Some(url) = url else {
                warn!(
                    icon = %icon.component_name,
                    label = %icon.original_name,
                    "no rendered image URL; skipping icon"
                );
                return Ok(None);
            };
            let svg = client.download_asset(&url).await?;
            Ok(Some(IconAsset { node: icon, svg }))
        }
    });

    // Unordered completion, order-preserving join.
    let results: Vec<Result<Option<IconAsset>, iconsync_figma::Error>> =
        join_all(downloads).await;

    let mut assets = Vec::with_capacity(icons.len());
    let mut skipped = Vec::new();
    for (icon, result) in icons.iter().zip(results) {
        match result? {
            Some(asset) => assets.push(asset),
            None => skipped.push(icon.component_name.clone()),
        }
    }
    info!(downloaded = assets.len(), skipped = skipped.len(), "asset retrieval complete");

    let modules =
        assets.iter().map(IconModule::from_asset).collect::<Result<Vec<_>, _>>()?;
    let files = plan_artifacts(&modules, &config.layout, &config.package_name);

    for file in &files {
        write_artifact(file)?;
    }
    info!(files = files.len(), "icon sync complete");

    Ok(SyncReport {
        icons_found: icons.len(),
        assets_downloaded: assets.len(),
        skipped,
        files_written: files.len(),
    })
}

/// Unconditional overwrite; missing parent directories are created on demand.
fn write_artifact(file: &GeneratedFile) -> Result<(), SyncError> {
    if let Some(parent) = file.path.parent() {
        fs::create_dir_all(parent)
            .map_err(|source| SyncError::WriteArtifact { path: file.path.clone(), source })?;
    }
    fs::write(&file.path, &file.content)
        .map_err(|source| SyncError::WriteArtifact { path: file.path.clone(), source })?;
    info!(path = %file.path.display(), "wrote artifact");
    Ok(())
}
