/// In-place editing and dragging of overlay layers
///
/// Text content is edited in a draft that only reaches the document on
/// commit (Enter or focus loss). Layer drags keep the grab offset so the
/// layer does not jump to the pointer.

use std::time::{Duration, Instant};

use super::data::{LayerId, LayerRef, TextPatch};

/// Two presses on the same layer within this window open the editor
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

/// An open text edit session
#[derive(Debug, Clone, PartialEq)]
pub struct TextEdit {
    pub id: LayerId,
    pub draft: String,
}

impl TextEdit {
    pub fn begin(id: LayerId, current: &str) -> Self {
        Self { id, draft: current.to_string() }
    }

    pub fn input(&mut self, value: String) {
        self.draft = value;
    }

    /// Finish editing, producing the patch to apply to the layer
    pub fn commit(self) -> (LayerId, TextPatch) {
        (self.id, TextPatch::content(self.draft))
    }
}

/// Detects double presses on a layer
#[derive(Debug, Clone, Default)]
pub struct ClickTracker {
    last: Option<(LayerId, Instant)>,
}

impl ClickTracker {
    /// Register a press, returns true when it completes a double press
    pub fn press(&mut self, id: &LayerId, now: Instant) -> bool {
        match self.last.take() {
            Some((prev, at)) if &prev == id && now.duration_since(at) <= DOUBLE_CLICK_WINDOW => true,
            _ => {
                self.last = Some((id.clone(), now));
                false
            }
        }
    }
}

/// A layer being moved with the pointer
#[derive(Debug, Clone, PartialEq)]
pub struct LayerDrag {
    pub layer: LayerRef,
    /// Pointer position minus layer position, in percent
    grab: (f32, f32),
}

impl LayerDrag {
    pub fn new(layer: LayerRef, layer_pos: (f32, f32), pointer: (f32, f32)) -> Self {
        Self {
            layer,
            grab: (pointer.0 - layer_pos.0, pointer.1 - layer_pos.1),
        }
    }

    /// New layer position for a pointer position, clamped to the canvas
    pub fn position_for(&self, pointer: (f32, f32)) -> (f32, f32) {
        (
            (pointer.0 - self.grab.0).clamp(0.0, 100.0),
            (pointer.1 - self.grab.1).clamp(0.0, 100.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_does_not_leak_until_commit() {
        let id = LayerId::new();
        let mut edit = TextEdit::begin(id.clone(), "Double click to edit");
        edit.input("Hel".to_string());
        edit.input("Hello".to_string());

        let (patched, patch) = edit.commit();
        assert_eq!(patched, id);
        assert_eq!(patch, TextPatch::content("Hello"));
    }

    #[test]
    fn test_double_press() {
        let a = LayerId::new();
        let b = LayerId::new();
        let t0 = Instant::now();
        let mut tracker = ClickTracker::default();

        assert!(!tracker.press(&a, t0));
        assert!(tracker.press(&a, t0 + Duration::from_millis(200)));
        // Consumed: a third press starts over
        assert!(!tracker.press(&a, t0 + Duration::from_millis(300)));

        assert!(!tracker.press(&b, t0 + Duration::from_millis(350)));
        assert!(!tracker.press(&a, t0 + Duration::from_millis(400)));
        assert!(!tracker.press(&a, t0 + Duration::from_millis(1000)));
    }

    #[test]
    fn test_layer_drag_keeps_grab_offset() {
        let drag = LayerDrag::new(LayerRef::Sticker(LayerId::new()), (45.0, 45.0), (50.0, 48.0));
        assert_eq!(drag.position_for((60.0, 58.0)), (55.0, 55.0));
        assert_eq!(drag.position_for((2.0, 110.0)), (0.0, 100.0));
    }
}
