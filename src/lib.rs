//! Convert a plain-text script into SubRip (.srt) subtitles.
//!
//! [`segment`] cuts the script into cue texts and [`render`] lays them out
//! on a timeline and serializes the result.

pub mod args;
pub mod errors;
pub mod script;
pub mod segmenter;
pub mod subtitle;

pub use segmenter::{SplitMode, segment};
pub use subtitle::{SrtDocument, TimingConfig, render};
