use iced::widget::{button, column, container, row, text, Column};
use iced::{event, mouse, window, Alignment, Element, Event, Length, Point, Size, Subscription, Task, Theme};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::PathBuf;
use std::time::Instant;

mod layout;
mod state;
mod ui;
mod upload;

use state::data::{ImageId, LayerRef, StickerPatch, Tab, TextPatch};
use state::document::Document;
use state::edit::{ClickTracker, LayerDrag, TextEdit};
use state::filter::FilterPreset;
use state::reorder::ReorderController;
use state::settings::{CollageSettings, SettingsChange, MAX_IMAGES};
use upload::loader::LoadedBatch;
use upload::ImportQueue;

/// Main application state
struct CollageEditor {
    /// The collage being edited
    document: Document,
    /// Active sidebar tab
    tab: Tab,
    /// Pending and running file imports
    imports: ImportQueue,
    /// Grid drag-and-drop state
    reorder: ReorderController,
    /// Overlay layer being moved, if any
    layer_drag: Option<LayerDrag>,
    /// Open text edit session, if any
    editing: Option<TextEdit>,
    clicks: ClickTracker,
    /// Last pointer position over the canvas, in percent
    pointer: Option<(f32, f32)>,
    /// Files are being dragged over the window
    hovering_files: bool,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked one of the upload affordances
    PickFiles,
    /// Files are dragged over the window
    FilesHovered,
    FilesHoverLeft,
    /// A file was dropped on the window (one message per file)
    FileDropped(PathBuf),
    /// Background load of an import batch finished
    FilesLoaded(LoadedBatch),
    RemoveImage(ImageId),
    /// Mouse pressed on a grid tile: start dragging it
    TilePressed(ImageId),
    /// Mouse released over a grid tile: drop onto it
    TileReleased(ImageId),
    /// Mouse pressed outside any interactive widget
    PointerPressed,
    /// Mouse released anywhere else
    PointerReleased,
    /// Pointer moved over the canvas (canvas-relative position)
    CanvasPointerMoved(Point),
    LayerPressed(LayerRef),
    EditInput(String),
    EditCommit,
    TabSelected(Tab),
    SettingChanged(SettingsChange),
    /// Restore the default layout settings
    ResetLayout,
    ApplyFilter(FilterPreset),
    AddText,
    AddSticker(&'static str),
    Export,
}

impl Message {
    /// Messages that leave an open text edit focused
    fn keeps_edit_focus(&self) -> bool {
        matches!(
            self,
            Message::EditInput(_)
                | Message::EditCommit
                | Message::CanvasPointerMoved(_)
                | Message::PointerReleased
                | Message::FilesHovered
                | Message::FilesHoverLeft
                | Message::FilesLoaded(_)
        )
    }
}

impl CollageEditor {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        log::info!("🎨 Collage editor ready (up to {} photos)", MAX_IMAGES);

        (
            CollageEditor {
                document: Document::new(),
                tab: Tab::default(),
                imports: ImportQueue::new(),
                reorder: ReorderController::new(),
                layer_drag: None,
                editing: None,
                clicks: ClickTracker::default(),
                pointer: None,
                hovering_files: false,
                status: "Ready.".to_string(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        if self.editing.is_some() && !message.keeps_edit_focus() {
            self.commit_edit();
        }

        match message {
            Message::PickFiles => {
                // Show the native file picker; cancelling yields no list at all
                let files = FileDialog::new()
                    .set_title("Select Photos")
                    .add_filter("Images", &upload::IMAGE_EXTENSIONS)
                    .pick_files();

                match files {
                    Some(paths) => self.enqueue(paths),
                    None => Task::none(),
                }
            }
            Message::FilesHovered => {
                self.hovering_files = true;
                Task::none()
            }
            Message::FilesHoverLeft => {
                self.hovering_files = false;
                Task::none()
            }
            Message::FileDropped(path) => {
                self.hovering_files = false;
                self.enqueue(vec![path])
            }
            Message::FilesLoaded(batch) => {
                let images = upload::process_files(Some(batch.files), self.document.display_mut());
                let outcome = self.document.add_images(images);

                self.status = if outcome.dropped > 0 {
                    format!(
                        "Added {} photos. {} skipped: the collage holds at most {}.",
                        outcome.added, outcome.dropped, MAX_IMAGES
                    )
                } else {
                    format!("Added {} photos.", outcome.added)
                };
                if batch.failed > 0 {
                    self.status.push_str(&format!(" {} files could not be read.", batch.failed));
                }
                log::info!(
                    "🖼️  {} photos in collage (+{}, {} over the cap)",
                    self.document.images().len(),
                    outcome.added,
                    outcome.dropped
                );

                match self.imports.finish() {
                    Some(next) => load(next),
                    None => Task::none(),
                }
            }
            Message::RemoveImage(id) => {
                if self.document.remove_image(&id) {
                    log::info!(
                        "🗑️  Removed photo {} ({} display references live)",
                        id,
                        self.document.display().live_count()
                    );
                    self.status = format!("{} / {} photos.", self.document.images().len(), MAX_IMAGES);
                }
                Task::none()
            }
            Message::TilePressed(id) => {
                self.reorder.drag_start(id);
                Task::none()
            }
            Message::TileReleased(target) => {
                if let Some((dragged, target)) = self.reorder.drop_on(&target) {
                    if self.document.reorder_images(&dragged, &target) {
                        log::debug!("↔️  Moved {} to the slot of {}", dragged, target);
                    }
                }
                self.end_pointer_interactions();
                Task::none()
            }
            // Only closes an open text edit, which happened above
            Message::PointerPressed => Task::none(),
            Message::PointerReleased => {
                self.end_pointer_interactions();
                Task::none()
            }
            Message::CanvasPointerMoved(point) => {
                let pointer = ui::canvas::canvas_size(&self.document).to_percent(point);
                self.pointer = Some(pointer);

                if let Some(drag) = &self.layer_drag {
                    let (x, y) = drag.position_for(pointer);
                    match &drag.layer {
                        LayerRef::Text(id) => {
                            self.document.update_text(id, TextPatch::position(x, y));
                        }
                        LayerRef::Sticker(id) => {
                            self.document.update_sticker(id, StickerPatch::position(x, y));
                        }
                    }
                }
                Task::none()
            }
            Message::LayerPressed(layer) => self.press_layer(layer),
            Message::EditInput(value) => {
                if let Some(edit) = &mut self.editing {
                    edit.input(value);
                }
                Task::none()
            }
            Message::EditCommit => {
                self.commit_edit();
                Task::none()
            }
            Message::TabSelected(tab) => {
                self.tab = tab;
                Task::none()
            }
            Message::SettingChanged(change) => {
                self.document.update_setting(change);
                match self.document.settings().to_json() {
                    Ok(json) => log::debug!("⚙️  Settings: {}", json),
                    Err(e) => log::warn!("⚠️  Could not serialize settings: {}", e),
                }
                Task::none()
            }
            Message::ResetLayout => {
                self.document.replace_settings(CollageSettings::default());
                log::debug!("⚙️  Layout reset to defaults");
                Task::none()
            }
            Message::ApplyFilter(preset) => {
                self.document.apply_filter_to_all(preset);
                log::info!(
                    "🎛️  Applied {} to {} photos",
                    preset.name(),
                    self.document.images().len()
                );
                self.status = format!("{} filter applied to every photo.", preset.name());
                Task::none()
            }
            Message::AddText => {
                let id = self.document.add_text();
                log::debug!("🔤 Added text layer {}", id);
                self.tab = Tab::Text;
                Task::none()
            }
            Message::AddSticker(emoji) => {
                let id = self.document.add_sticker(emoji);
                log::debug!("😀 Added sticker {} ({})", emoji, id);
                Task::none()
            }
            Message::Export => {
                // Export is a notification only; no file is written
                let snapshot = self.document.snapshot();
                log::info!(
                    "📤 Export requested: {} photos, {} texts, {} stickers",
                    snapshot.images.len(),
                    snapshot.texts.len(),
                    snapshot.stickers.len()
                );
                if let Ok(json) = snapshot.settings.to_json() {
                    log::debug!("📤 Export layout: {}", json);
                }
                self.status = "High-resolution export triggered!".to_string();

                MessageDialog::new()
                    .set_level(MessageLevel::Info)
                    .set_title("Export")
                    .set_description("High-resolution export triggered!")
                    .set_buttons(MessageButtons::Ok)
                    .show();
                Task::none()
            }
        }
    }

    /// Queue paths for import, starting a load if none is running
    fn enqueue(&mut self, paths: Vec<PathBuf>) -> Task<Message> {
        log::info!("📂 Queued {} files for import", paths.len());
        match self.imports.submit(paths) {
            Some(batch) => {
                self.status = "Importing...".to_string();
                load(batch)
            }
            None => Task::none(),
        }
    }

    /// Press on a text or sticker layer: start moving it, or open the
    /// editor on a double press of a text layer
    fn press_layer(&mut self, layer: LayerRef) -> Task<Message> {
        if let LayerRef::Text(id) = &layer {
            if self.clicks.press(id, Instant::now()) {
                if let Some(current) = self.document.texts().iter().find(|t| &t.id == id) {
                    self.layer_drag = None;
                    self.editing = Some(TextEdit::begin(id.clone(), &current.text));
                    return iced::widget::text_input::focus(ui::canvas::edit_input_id());
                }
            }
        }

        let position = match &layer {
            LayerRef::Text(id) => self.document.texts().iter().find(|t| &t.id == id).map(|t| (t.x, t.y)),
            LayerRef::Sticker(id) => self.document.stickers().iter().find(|s| &s.id == id).map(|s| (s.x, s.y)),
        };
        if let Some(position) = position {
            let pointer = self.pointer.unwrap_or(position);
            self.layer_drag = Some(LayerDrag::new(layer, position, pointer));
        }
        Task::none()
    }

    /// Push the open text edit into the document
    fn commit_edit(&mut self) {
        if let Some(edit) = self.editing.take() {
            let (id, patch) = edit.commit();
            self.document.update_text(&id, patch);
        }
    }

    fn end_pointer_interactions(&mut self) {
        self.reorder.drag_end();
        self.layer_drag = None;
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mut header = row![text("Collage Editor").size(24), iced::widget::horizontal_space()]
            .spacing(16)
            .padding(16)
            .align_y(Alignment::Center);
        if self.imports.is_busy() {
            header = header.push(text("Importing...").size(14));
        }
        if !self.document.images().is_empty() {
            header = header.push(
                button(text("Export Image"))
                    .on_press(Message::Export)
                    .padding([10, 24])
                    .style(button::primary),
            );
        }

        let body: Element<Message> = if self.document.images().is_empty() {
            container(ui::uploader::drop_zone(self.hovering_files))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into()
        } else {
            let editor: Column<Message> = column![
                ui::canvas::view(&self.document, &self.reorder, self.editing.as_ref()),
                ui::sidebar::tab_bar(self.tab),
            ]
            .spacing(20)
            .align_x(Alignment::Center);

            row![
                ui::sidebar::view(self.tab, self.document.settings()),
                container(editor).center_x(Length::Fill).padding(24),
            ]
            .height(Length::Fill)
            .into()
        };

        column![header, body, text(&self.status).size(14)]
            .padding(8)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Window file drops and pointer presses/releases no widget handled
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, status, _window| match event {
            Event::Window(window::Event::FileHovered(_)) => Some(Message::FilesHovered),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoverLeft),
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
                if status == event::Status::Ignored =>
            {
                Some(Message::PointerPressed)
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                if status == event::Status::Ignored =>
            {
                Some(Message::PointerReleased)
            }
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Load a batch of files in the background
fn load(paths: Vec<PathBuf>) -> Task<Message> {
    Task::perform(upload::loader::read_files(paths), Message::FilesLoaded)
}

fn main() -> iced::Result {
    env_logger::init();

    iced::application("Collage Editor", CollageEditor::update, CollageEditor::view)
        .subscription(CollageEditor::subscription)
        .theme(CollageEditor::theme)
        .window_size(Size::new(1200.0, 860.0))
        .centered()
        .run_with(CollageEditor::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::SourceFile;
    use crate::state::document::DEFAULT_TEXT;

    fn editor() -> CollageEditor {
        CollageEditor::new().0
    }

    /// Load `count` photos the way a finished import does
    fn with_photos(count: usize) -> (CollageEditor, Vec<ImageId>) {
        let mut app = editor();
        let files = (0..count)
            .map(|i| SourceFile {
                name: format!("{}.jpg", i),
                path: PathBuf::from(format!("/photos/{}.jpg", i)),
                bytes: vec![i as u8].into(),
                mime: Some("image/jpeg"),
            })
            .collect();
        let _ = app.update(Message::FilesLoaded(LoadedBatch { files, failed: 0 }));
        let ids = app.document.images().iter().map(|img| img.id.clone()).collect();
        (app, ids)
    }

    fn order(app: &CollageEditor) -> Vec<ImageId> {
        app.document.images().iter().map(|img| img.id.clone()).collect()
    }

    /// Add a text layer and double press it to open the editor
    fn editing_text(app: &mut CollageEditor) {
        let _ = app.update(Message::AddText);
        let id = app.document.texts()[0].id.clone();
        let _ = app.update(Message::LayerPressed(LayerRef::Text(id.clone())));
        let _ = app.update(Message::LayerPressed(LayerRef::Text(id)));
        assert!(app.editing.is_some());
    }

    #[test]
    fn test_switching_tab_commits_draft() {
        let mut app = editor();
        editing_text(&mut app);

        let _ = app.update(Message::EditInput("Beach day".to_string()));
        assert_eq!(app.document.texts()[0].text, DEFAULT_TEXT);

        let _ = app.update(Message::TabSelected(Tab::Sticker));
        assert!(app.editing.is_none());
        assert_eq!(app.document.texts()[0].text, "Beach day");
        assert_eq!(app.tab, Tab::Sticker);
    }

    #[test]
    fn test_pointer_motion_keeps_draft_open() {
        let mut app = editor();
        editing_text(&mut app);

        let _ = app.update(Message::EditInput("Beach".to_string()));
        let _ = app.update(Message::CanvasPointerMoved(Point::new(10.0, 10.0)));

        assert!(app.editing.is_some());
        assert_eq!(app.document.texts()[0].text, DEFAULT_TEXT);

        let _ = app.update(Message::EditCommit);
        assert!(app.editing.is_none());
        assert_eq!(app.document.texts()[0].text, "Beach");
    }

    #[test]
    fn test_empty_canvas_press_commits_draft() {
        let mut app = editor();
        editing_text(&mut app);

        let _ = app.update(Message::EditInput("Hello".to_string()));
        let _ = app.update(Message::PointerPressed);

        assert!(app.editing.is_none());
        assert_eq!(app.document.texts()[0].text, "Hello");
    }

    #[test]
    fn test_tile_drop_moves_image() {
        let (mut app, ids) = with_photos(4);
        let (a, b, c, d) = (&ids[0], &ids[1], &ids[2], &ids[3]);

        let _ = app.update(Message::TilePressed(a.clone()));
        assert!(app.reorder.is_dragging(a));
        let _ = app.update(Message::TileReleased(c.clone()));

        assert_eq!(order(&app), vec![b.clone(), c.clone(), a.clone(), d.clone()]);
        assert!(!app.reorder.is_dragging(a));
    }

    #[test]
    fn test_release_outside_tiles_cancels_drag() {
        let (mut app, ids) = with_photos(4);

        let _ = app.update(Message::TilePressed(ids[0].clone()));
        let _ = app.update(Message::PointerReleased);
        let _ = app.update(Message::TileReleased(ids[2].clone()));

        assert_eq!(order(&app), ids);
    }

    #[test]
    fn test_tile_dropped_on_itself() {
        let (mut app, ids) = with_photos(3);

        let _ = app.update(Message::TilePressed(ids[1].clone()));
        let _ = app.update(Message::TileReleased(ids[1].clone()));

        assert_eq!(order(&app), ids);
        assert!(!app.reorder.is_dragging(&ids[1]));
    }

    #[test]
    fn test_reset_layout() {
        let (mut app, _) = with_photos(1);
        let _ = app.update(Message::SettingChanged(SettingsChange::Spacing(40)));
        let _ = app.update(Message::SettingChanged(SettingsChange::BorderRadius(0)));

        let _ = app.update(Message::ResetLayout);

        assert_eq!(app.document.settings(), &CollageSettings::default());
    }
}
