/// View layer
///
/// - `canvas.rs` - the collage grid with text and sticker layers
/// - `corners.rs` - rounded tile corners drawn over the image
/// - `sidebar.rs` - tab bar and per-tab settings panels
/// - `uploader.rs` - full drop zone and compact "add more" tile

pub mod canvas;
pub mod corners;
pub mod sidebar;
pub mod uploader;
