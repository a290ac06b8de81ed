//! Storage for uploaded project and gallery media.

use async_trait::async_trait;
use rand::{distributions::Alphanumeric, Rng};
use serde::Serialize;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use domain::services::slugify;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "svg"];
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "ogg"];

/// Upload destinations, one per file column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFolder {
    Projects,
    Gallery,
    GalleryThumbnails,
}

impl MediaFolder {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaFolder::Projects => "projects",
            MediaFolder::Gallery => "gallery",
            MediaFolder::GalleryThumbnails => "gallery-thumbnails",
        }
    }

    /// Thumbnails and project images are images only; gallery media may be video.
    pub fn accepts(&self, extension: &str) -> bool {
        IMAGE_EXTENSIONS.contains(&extension)
            || (*self == MediaFolder::Gallery && VIDEO_EXTENSIONS.contains(&extension))
    }
}

impl FromStr for MediaFolder {
    type Err = MediaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "projects" => Ok(MediaFolder::Projects),
            "gallery" => Ok(MediaFolder::Gallery),
            "gallery-thumbnails" => Ok(MediaFolder::GalleryThumbnails),
            other => Err(MediaError::UnknownFolder(other.to_string())),
        }
    }
}

impl fmt::Display for MediaFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Unknown media folder '{0}'")]
    UnknownFolder(String),

    #[error("Unsupported file type '.{ext}' for {folder}")]
    UnsupportedType { folder: MediaFolder, ext: String },

    #[error("Uploaded file is empty")]
    Empty,

    #[error("Failed to write media: {0}")]
    Io(#[from] std::io::Error),
}

/// Where an upload ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredMedia {
    /// Relative to the media root; goes into `*_file` columns.
    pub path: String,
    /// Public URL under the media prefix.
    pub url: String,
}

#[async_trait]
pub trait MediaStorage: Send + Sync {
    async fn store(
        &self,
        folder: MediaFolder,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<StoredMedia, MediaError>;

    /// Maps a relative media path to a readable location, refusing anything
    /// that would leave the media root.
    fn resolve(&self, relative: &str) -> Option<PathBuf>;
}

/// Files on the local disk under `media.root`.
#[derive(Debug, Clone)]
pub struct LocalMediaStorage {
    root: PathBuf,
    url_prefix: String,
}

impl LocalMediaStorage {
    pub fn new(root: impl Into<PathBuf>, url_prefix: &str) -> Self {
        Self {
            root: root.into(),
            url_prefix: url_prefix.trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    async fn store(
        &self,
        folder: MediaFolder,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<StoredMedia, MediaError> {
        if bytes.is_empty() {
            return Err(MediaError::Empty);
        }

        let (stem, ext) = split_file_name(original_name);
        if !folder.accepts(&ext) {
            return Err(MediaError::UnsupportedType { folder, ext });
        }

        let dir = self.root.join(folder.as_str());
        tokio::fs::create_dir_all(&dir).await?;

        let file_name = format!("{}_{}.{}", stem, random_suffix(), ext);
        tokio::fs::write(dir.join(&file_name), bytes).await?;

        let path = format!("{}/{}", folder.as_str(), file_name);
        tracing::info!(path = %path, size = bytes.len(), "Stored uploaded media");

        Ok(StoredMedia {
            url: format!("{}/{}", self.url_prefix, path),
            path,
        })
    }

    fn resolve(&self, relative: &str) -> Option<PathBuf> {
        let relative = Path::new(relative);
        let safe = relative.components().count() > 0
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        safe.then(|| self.root.join(relative))
    }
}

/// Slugged stem (`"upload"` when nothing survives) and lower-case extension.
fn split_file_name(name: &str) -> (String, String) {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let (stem, ext) = match base.rsplit_once('.') {
        Some((stem, ext)) => (stem, ext.to_ascii_lowercase()),
        None => (base, String::new()),
    };
    let mut stem = slugify(stem);
    stem.truncate(80);
    let stem = stem.trim_end_matches('-').to_string();
    if stem.is_empty() {
        ("upload".to_string(), ext)
    } else {
        (stem, ext)
    }
}

fn random_suffix() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect()
}
