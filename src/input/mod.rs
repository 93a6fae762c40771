//! Input processing module
//! Handles file detection and text extraction ahead of parsing

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use manager::InputManager;
pub use text_extractor::Extraction;
