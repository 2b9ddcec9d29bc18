/// Upload handling module
///
/// This module handles:
/// - Reading picked and dropped files into memory (loader.rs)
/// - Turning loaded files into collage images with display references
/// - Serialising import batches so images keep their submission order

pub mod loader;

use std::collections::VecDeque;
use std::path::PathBuf;

use crate::state::data::{CollageImage, ImageId, SourceFile};
use crate::state::display::DisplayRefs;

/// File extensions offered by the picker. Only a hint; not enforced.
pub const IMAGE_EXTENSIONS: [&str; 9] = [
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff", "heic",
];

/// Turn loaded files into collage images.
///
/// Each file gets a fresh id and a freshly minted display reference.
/// An absent file list is ignored.
pub fn process_files(files: Option<Vec<SourceFile>>, display: &mut DisplayRefs) -> Vec<CollageImage> {
    let Some(files) = files else {
        return Vec::new();
    };

    files
        .into_iter()
        .map(|source| CollageImage {
            id: ImageId::new(),
            url: display.mint(&source),
            source,
            filter: None,
        })
        .collect()
}

/// Queue of pending import batches.
///
/// Only one batch loads at a time; the next starts when the current one
/// finishes, so completion order matches submission order.
#[derive(Debug, Default)]
pub struct ImportQueue {
    pending: VecDeque<Vec<PathBuf>>,
    in_flight: bool,
}

impl ImportQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit paths. Returns the batch to start loading now, if idle.
    pub fn submit(&mut self, paths: Vec<PathBuf>) -> Option<Vec<PathBuf>> {
        if paths.is_empty() {
            return None;
        }
        self.pending.push_back(paths);
        self.next()
    }

    /// Mark the running batch done. Returns the next batch to start, if any.
    pub fn finish(&mut self) -> Option<Vec<PathBuf>> {
        self.in_flight = false;
        self.next()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    fn next(&mut self) -> Option<Vec<PathBuf>> {
        if self.in_flight {
            return None;
        }
        let batch = self.pending.pop_front()?;
        self.in_flight = true;
        Some(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(name: &str) -> SourceFile {
        SourceFile {
            name: name.to_string(),
            path: PathBuf::from(name),
            bytes: name.as_bytes().to_vec().into(),
            mime: Some("image/jpeg"),
        }
    }

    #[test]
    fn test_absent_file_list_is_ignored() {
        let mut display = DisplayRefs::new();
        assert!(process_files(None, &mut display).is_empty());
        assert_eq!(display.live_count(), 0);
    }

    #[test]
    fn test_process_files() {
        let mut display = DisplayRefs::new();
        let images = process_files(Some(vec![source("a.jpg"), source("b.jpg")]), &mut display);

        assert_eq!(images.len(), 2);
        assert_eq!(images[0].source.name, "a.jpg");
        assert_eq!(images[1].source.name, "b.jpg");
        assert_ne!(images[0].id, images[1].id);
        assert_ne!(images[0].url, images[1].url);
        assert!(images.iter().all(|img| img.filter.is_none()));
        assert!(images.iter().all(|img| display.is_live(&img.url)));
    }

    #[test]
    fn test_queue_runs_one_batch_at_a_time() {
        let mut queue = ImportQueue::new();
        let a = vec![PathBuf::from("a.jpg")];
        let b = vec![PathBuf::from("b.jpg")];
        let c = vec![PathBuf::from("c.jpg"), PathBuf::from("d.jpg")];

        assert_eq!(queue.submit(a.clone()), Some(a));
        assert!(queue.is_busy());
        assert_eq!(queue.submit(b.clone()), None);
        assert_eq!(queue.submit(c.clone()), None);

        assert_eq!(queue.finish(), Some(b));
        assert_eq!(queue.finish(), Some(c));
        assert_eq!(queue.finish(), None);
        assert!(!queue.is_busy());
    }

    #[test]
    fn test_empty_submission_is_ignored() {
        let mut queue = ImportQueue::new();
        assert_eq!(queue.submit(Vec::new()), None);
        assert!(!queue.is_busy());
    }
}
