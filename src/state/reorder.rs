use super::data::ImageId;

/// Tracks the image currently being dragged in the grid
#[derive(Debug, Clone, Default)]
pub struct ReorderController {
    dragged: Option<ImageId>,
}

impl ReorderController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag_start(&mut self, id: ImageId) {
        self.dragged = Some(id);
    }

    pub fn drag_end(&mut self) {
        self.dragged = None;
    }

    /// Drop the dragged image on `target`.
    ///
    /// Always ends the drag. Returns the (dragged, target) pair to reorder,
    /// or None when nothing was dragged or it was dropped on itself.
    pub fn drop_on(&mut self, target: &ImageId) -> Option<(ImageId, ImageId)> {
        let dragged = self.dragged.take()?;
        if &dragged == target {
            return None;
        }
        Some((dragged, target.clone()))
    }

    pub fn is_dragging(&self, id: &ImageId) -> bool {
        self.dragged.as_ref() == Some(id)
    }
}
