//! folio - a tabbed image-gallery/reader core.
//!
//! The heart of the crate is the reader view-state machine: `GalleryState`
//! holds one tab's ordered image list, display-mode flags, and navigation
//! position, and the pure functions in `reader` derive what is shown and
//! how next/previous moves. Around it sit the collaborators a full
//! application needs: directory enumeration (`scanner`), the book library
//! (`library`), persisted settings (`settings`), and tab lifecycle
//! (`tabs`). No rendering lives here; a presentation layer consumes the
//! `reader` output.

pub mod library;
pub mod models;
pub mod reader;
pub mod scanner;
pub mod settings;
pub mod tabs;
