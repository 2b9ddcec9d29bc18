use std::sync::Arc;

use super::data::{
    CollageImage, ImageId, LayerId, StickerLayer, StickerPatch, TextLayer, TextPatch,
};
use super::display::DisplayRefs;
use super::filter::FilterPreset;
use super::settings::{CollageSettings, SettingsChange, MAX_IMAGES};

/// Placeholder content of a freshly added text layer
pub const DEFAULT_TEXT: &str = "Double click to edit";
pub const DEFAULT_TEXT_COLOR: &str = "#000000";
pub const DEFAULT_FONT_SIZE: f32 = 28.0;
/// Default position of new text layers (percent of canvas)
pub const DEFAULT_TEXT_POSITION: (f32, f32) = (30.0, 30.0);
/// Default position of new stickers (percent of canvas)
pub const DEFAULT_STICKER_POSITION: (f32, f32) = (45.0, 45.0);

/// Result of appending uploaded images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOutcome {
    pub added: usize,
    /// Uploads discarded because the collage was full
    pub dropped: usize,
}

/// Immutable view of every collection at one point in time
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub images: Arc<[CollageImage]>,
    pub texts: Arc<[TextLayer]>,
    pub stickers: Arc<[StickerLayer]>,
    pub settings: Arc<CollageSettings>,
}

/// The collage being edited.
///
/// Owns the image list, overlay layers, layout settings and the display
/// references of its images. Every mutation builds a new collection and
/// swaps it in, so a `Snapshot` taken earlier never changes.
#[derive(Debug)]
pub struct Document {
    images: Arc<[CollageImage]>,
    texts: Arc<[TextLayer]>,
    stickers: Arc<[StickerLayer]>,
    settings: Arc<CollageSettings>,
    display: DisplayRefs,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            images: Arc::from(Vec::new()),
            texts: Arc::from(Vec::new()),
            stickers: Arc::from(Vec::new()),
            settings: Arc::new(CollageSettings::default()),
            display: DisplayRefs::new(),
        }
    }

    pub fn images(&self) -> &[CollageImage] {
        &self.images
    }

    pub fn texts(&self) -> &[TextLayer] {
        &self.texts
    }

    pub fn stickers(&self) -> &[StickerLayer] {
        &self.stickers
    }

    pub fn settings(&self) -> &CollageSettings {
        &self.settings
    }

    pub fn display(&self) -> &DisplayRefs {
        &self.display
    }

    /// Pool used by the uploader to mint references for new images
    pub fn display_mut(&mut self) -> &mut DisplayRefs {
        &mut self.display
    }

    pub fn is_full(&self) -> bool {
        self.images.len() >= MAX_IMAGES
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            images: Arc::clone(&self.images),
            texts: Arc::clone(&self.texts),
            stickers: Arc::clone(&self.stickers),
            settings: Arc::clone(&self.settings),
        }
    }

    // ========== Images ==========

    /// Append uploaded images in order, keeping at most `MAX_IMAGES`.
    ///
    /// Images beyond the cap are discarded and their display references released.
    pub fn add_images(&mut self, uploaded: Vec<CollageImage>) -> AddOutcome {
        let room = MAX_IMAGES.saturating_sub(self.images.len());
        let mut next = self.images.to_vec();
        let mut outcome = AddOutcome { added: 0, dropped: 0 };

        for image in uploaded {
            if outcome.added < room {
                next.push(image);
                outcome.added += 1;
            } else {
                self.display.release(&image.url);
                outcome.dropped += 1;
            }
        }

        if outcome.dropped > 0 {
            log::warn!(
                "📦 Collage full: kept {} uploads, dropped {}",
                outcome.added,
                outcome.dropped
            );
        }

        self.images = next.into();
        outcome
    }

    /// Remove an image and release its display reference. Returns false if absent.
    pub fn remove_image(&mut self, id: &ImageId) -> bool {
        let Some(removed) = self.images.iter().find(|img| &img.id == id) else {
            return false;
        };
        self.display.release(&removed.url);

        self.images = self
            .images
            .iter()
            .filter(|img| &img.id != id)
            .cloned()
            .collect::<Vec<_>>()
            .into();
        true
    }

    /// Move `dragged` to the position currently held by `target`.
    ///
    /// This is a single-element move, not a swap. No-op when either id is
    /// absent or both are the same.
    pub fn reorder_images(&mut self, dragged: &ImageId, target: &ImageId) -> bool {
        let dragged_idx = self.images.iter().position(|img| &img.id == dragged);
        let target_idx = self.images.iter().position(|img| &img.id == target);

        match (dragged_idx, target_idx) {
            (Some(from), Some(to)) if from != to => {
                let mut next = self.images.to_vec();
                let moved = next.remove(from);
                next.insert(to, moved);
                self.images = next.into();
                true
            }
            _ => false,
        }
    }

    /// Overwrite the filter of every image with the preset's descriptor
    pub fn apply_filter_to_all(&mut self, preset: FilterPreset) {
        let descriptor = preset.descriptor();
        self.images = self
            .images
            .iter()
            .map(|img| CollageImage { filter: Some(descriptor.to_string()), ..img.clone() })
            .collect::<Vec<_>>()
            .into();
    }

    // ========== Overlay layers ==========

    /// Add a text layer with placeholder content, returns its id
    pub fn add_text(&mut self) -> LayerId {
        let (x, y) = DEFAULT_TEXT_POSITION;
        let layer = TextLayer {
            id: LayerId::new(),
            text: DEFAULT_TEXT.to_string(),
            color: DEFAULT_TEXT_COLOR.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            x,
            y,
        };
        let id = layer.id.clone();

        let mut next = self.texts.to_vec();
        next.push(layer);
        self.texts = next.into();
        id
    }

    /// Apply a partial update to a text layer. Returns false if absent.
    pub fn update_text(&mut self, id: &LayerId, patch: TextPatch) -> bool {
        let Some(index) = self.texts.iter().position(|t| &t.id == id) else {
            return false;
        };
        let mut next = self.texts.to_vec();
        patch.apply(&mut next[index]);
        self.texts = next.into();
        true
    }

    /// Add a sticker at the default position, returns its id
    pub fn add_sticker(&mut self, emoji: &str) -> LayerId {
        let (x, y) = DEFAULT_STICKER_POSITION;
        let sticker = StickerLayer {
            id: LayerId::new(),
            emoji: emoji.to_string(),
            x,
            y,
        };
        let id = sticker.id.clone();

        let mut next = self.stickers.to_vec();
        next.push(sticker);
        self.stickers = next.into();
        id
    }

    /// Apply a partial update to a sticker. Returns false if absent.
    pub fn update_sticker(&mut self, id: &LayerId, patch: StickerPatch) -> bool {
        let Some(index) = self.stickers.iter().position(|s| &s.id == id) else {
            return false;
        };
        let mut next = self.stickers.to_vec();
        patch.apply(&mut next[index]);
        self.stickers = next.into();
        true
    }

    // ========== Settings ==========

    /// Replace every setting at once
    pub fn replace_settings(&mut self, settings: CollageSettings) {
        self.settings = Arc::new(settings);
    }

    pub fn update_setting(&mut self, change: SettingsChange) {
        self.settings = Arc::new(self.settings.with(change));
    }

    /// Release every display reference. Called when the session ends.
    pub fn teardown(&mut self) -> usize {
        self.display.release_all()
    }
}

impl Drop for Document {
    fn drop(&mut self) {
        let released = self.teardown();
        if released > 0 {
            log::info!("🧹 Released {} display references", released);
        }
    }
}
