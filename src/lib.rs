//! Device mockup generator.
//!
//! Composites screenshots into a fixed device-frame image: each screenshot
//! is cover-scaled into the frame's screen area, then the frame artwork is
//! layered on top using its alpha. One screenshot yields one PNG; several
//! yield a zip of PNGs, with per-item failures reported instead of aborting.
//!
//! ```ignore
//! use mockup_gen::{BatchItem, BatchPackager, MockupConfig};
//!
//! let packager = BatchPackager::with_bundled_frame(MockupConfig::default())?;
//! let report = packager.process(&[BatchItem::new("home.png", bytes)]);
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod rendering;

pub use batch::{
    BatchItem, BatchOutput, BatchPackager, BatchReport, BatchSummary, FailureRecord, NamedBuffer,
};
pub use config::{Dimensions, MockupConfig, MockupGeometry, Offset, PasteMode};
pub use error::{MockupError, MockupResult};
pub use rendering::{composite, resize_to_cover, Compositor, FrameAsset};
