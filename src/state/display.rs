/// Display references for uploaded blobs
///
/// Every uploaded image gets a `DisplayUrl` bound to an iced image handle.
/// The pool holds the handle alive until the owning image is removed or
/// the session ends; a released url no longer resolves.

use std::collections::HashMap;
use std::fmt;

use iced::widget::image::Handle;
use uuid::Uuid;

use super::data::SourceFile;

const URL_PREFIX: &str = "blob:collage/";

/// Opaque reference to a blob registered in a `DisplayRefs` pool
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayUrl(String);

impl fmt::Display for DisplayUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pool of live display references
#[derive(Default)]
pub struct DisplayRefs {
    live: HashMap<DisplayUrl, Handle>,
}

impl DisplayRefs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh reference bound to the file's bytes
    pub fn mint(&mut self, file: &SourceFile) -> DisplayUrl {
        let url = DisplayUrl(format!("{}{}", URL_PREFIX, Uuid::new_v4()));
        let handle = Handle::from_bytes(file.bytes.clone());
        self.live.insert(url.clone(), handle);
        url
    }

    /// Resolve a reference to its image handle
    pub fn handle(&self, url: &DisplayUrl) -> Option<&Handle> {
        self.live.get(url)
    }

    /// Release a reference. Returns false if it was not live.
    pub fn release(&mut self, url: &DisplayUrl) -> bool {
        self.live.remove(url).is_some()
    }

    /// Release every live reference, returns how many were dropped
    pub fn release_all(&mut self) -> usize {
        let count = self.live.len();
        self.live.clear();
        count
    }

    #[cfg(test)]
    pub fn is_live(&self, url: &DisplayUrl) -> bool {
        self.live.contains_key(url)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

impl fmt::Debug for DisplayRefs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayRefs")
            .field("live", &self.live.len())
            .finish()
    }
}
