/// File loader for uploads
///
/// Reads picked or dropped files into memory. Unreadable files are logged
/// and skipped; the rest of the batch still loads, in submission order.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::state::data::SourceFile;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Files that loaded, plus how many were skipped
#[derive(Debug, Clone, Default)]
pub struct LoadedBatch {
    pub files: Vec<SourceFile>,
    pub failed: usize,
}

/// Load every path, keeping the order they were given in
pub async fn read_files(paths: Vec<PathBuf>) -> LoadedBatch {
    let mut batch = LoadedBatch::default();

    for path in paths {
        match read_file(&path).await {
            Ok(file) => {
                if file.mime.is_none() {
                    log::warn!("⚠️  {} does not look like an image, adding anyway", file.name);
                }
                batch.files.push(file);
            }
            Err(e) => {
                log::error!("⚠️  {}", e);
                batch.failed += 1;
            }
        }
    }

    log::info!("📥 Loaded {} files ({} failed)", batch.files.len(), batch.failed);
    batch
}

/// Read a single file and sniff its format
pub async fn read_file(path: &Path) -> Result<SourceFile, UploadError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| UploadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mime = image::guess_format(&bytes).ok().map(|format| format.to_mime_type());
    let name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    Ok(SourceFile {
        name,
        path: path.to_path_buf(),
        bytes: bytes.into(),
        mime,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    // The PNG signature alone is enough for format sniffing
    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[tokio::test]
    async fn test_read_files_in_order_and_skips_missing() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.png");
        let second = dir.path().join("second.txt");
        fs::write(&first, PNG_MAGIC).unwrap();
        fs::write(&second, b"hello").unwrap();

        let batch = read_files(vec![
            first.clone(),
            dir.path().join("missing.jpg"),
            second.clone(),
        ])
        .await;

        assert_eq!(batch.failed, 1);
        assert_eq!(batch.files.len(), 2);
        assert_eq!(batch.files[0].name, "first.png");
        assert_eq!(batch.files[0].mime, Some("image/png"));
        assert_eq!(&*batch.files[0].bytes, &PNG_MAGIC[..]);
        assert_eq!(batch.files[1].path, second);
        assert_eq!(batch.files[1].mime, None);
    }

    #[tokio::test]
    async fn test_read_file_error() {
        let result = read_file(Path::new("/nonexistent/photo.jpg")).await;
        assert!(matches!(result, Err(UploadError::Read { .. })));
    }
}
