//! Screenshot-into-frame rendering.
//!
//! ## Components
//! - `cover`: cover scaling and centered crop
//! - `paste`: mask paste and plain paste
//! - `frame`: the shared device-frame artwork
//! - `compositor`: screenshot first, frame second

pub mod compositor;
pub mod cover;
pub mod frame;
pub mod paste;
pub mod types;

pub use compositor::{composite, Compositor};
pub use cover::resize_to_cover;
pub use frame::{FrameAsset, BUNDLED_FRAME_PATH};
pub use types::*;
