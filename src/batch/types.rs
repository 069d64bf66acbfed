//! Type definitions for batch packaging.

use serde::Serialize;
use ts_rs::TS;

use crate::error::MockupError;

/// Content type of a single composited mockup.
pub const PNG_CONTENT_TYPE: &str = "image/png";
/// Content type of a multi-mockup bundle.
pub const ZIP_CONTENT_TYPE: &str = "application/zip";
/// Suggested file name of a multi-mockup bundle.
pub const ARCHIVE_NAME: &str = "mockups.zip";
/// Upload extensions the screenshot picker accepts.
pub const SUPPORTED_UPLOAD_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Output name for an input file: `mockup_<name>.png`.
pub fn output_name(file_name: &str) -> String {
    format!("mockup_{}.png", file_name)
}

/// Whether `file_name` has an extension the upload picker accepts.
pub fn is_supported_upload(file_name: &str) -> bool {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_UPLOAD_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// One uploaded screenshot.
#[derive(Debug, Clone)]
pub struct BatchItem {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl BatchItem {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// A named, typed byte buffer ready for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedBuffer {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl NamedBuffer {
    pub fn png(file_name: String, bytes: Vec<u8>) -> Self {
        Self {
            file_name,
            content_type: PNG_CONTENT_TYPE,
            bytes,
        }
    }

    pub fn zip(bytes: Vec<u8>) -> Self {
        Self {
            file_name: ARCHIVE_NAME.to_string(),
            content_type: ZIP_CONTENT_TYPE,
            bytes,
        }
    }
}

/// What a batch hands back for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutput {
    /// Batch of exactly one item: the bare PNG.
    Single(NamedBuffer),
    /// Batch of several items: one zip with an entry per success.
    Archive(NamedBuffer),
}

impl BatchOutput {
    pub fn buffer(&self) -> &NamedBuffer {
        match self {
            BatchOutput::Single(buffer) | BatchOutput::Archive(buffer) => buffer,
        }
    }

    pub fn into_buffer(self) -> NamedBuffer {
        match self {
            BatchOutput::Single(buffer) | BatchOutput::Archive(buffer) => buffer,
        }
    }

    pub fn is_archive(&self) -> bool {
        matches!(self, BatchOutput::Archive(_))
    }
}

/// An input that could not be turned into a mockup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct FailureRecord {
    pub file_name: String,
    pub message: String,
}

impl FailureRecord {
    pub fn new(file_name: &str, error: &MockupError) -> Self {
        Self {
            file_name: file_name.to_string(),
            message: error.to_string(),
        }
    }
}

/// Result of one batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// `None` when nothing succeeded (or the batch was empty).
    pub output: Option<BatchOutput>,
    /// Number of items that produced a mockup.
    pub succeeded: usize,
    /// Items that failed, in the order they were recorded.
    pub failures: Vec<FailureRecord>,
}

impl BatchReport {
    /// True when items were supplied but no output could be produced.
    pub fn is_total_failure(&self) -> bool {
        self.output.is_none() && !self.failures.is_empty()
    }

    /// Serializable overview for a UI shell (no payload bytes).
    pub fn summary(&self) -> BatchSummary {
        let buffer = self.output.as_ref().map(BatchOutput::buffer);
        BatchSummary {
            output_name: buffer.map(|b| b.file_name.clone()),
            content_type: buffer.map(|b| b.content_type.to_string()),
            output_size: buffer.map(|b| b.bytes.len()),
            succeeded: self.succeeded,
            failures: self.failures.clone(),
        }
    }
}

/// Overview of a batch run sent to the shell.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub output_name: Option<String>,
    pub content_type: Option<String>,
    pub output_size: Option<usize>,
    pub succeeded: usize,
    pub failures: Vec<FailureRecord>,
}
