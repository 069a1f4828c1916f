/// State management module
///
/// This module handles all application state, including:
/// - Folder listing and navigation (browser.rs)
/// - Shared data structures (data.rs)
/// - The archive timestamp log (tracker.rs)
/// - Check and copy operations (archive.rs)
/// - The controller tying them together (archiver.rs)

pub mod archive;
pub mod archiver;
pub mod browser;
pub mod data;
pub mod tracker;
