use std::fmt;

use serde::{Deserialize, Serialize};

pub const MIN_CUE_DURATION_MS: u64 = 500;
pub const DEFAULT_CUE_DURATION_SEC: f64 = 2.5;
pub const DEFAULT_GAP_MS: i64 = 200;
pub const DEFAULT_START_MS: i64 = 0;

/// Normalized timing parameters, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    pub cue_duration_ms: u64,
    pub gap_ms: u64,
    pub start_ms: u64,
}

impl TimingConfig {
    /// Clamp raw caller input: the cue duration never drops below 500 ms,
    /// negative gap and start become zero.
    pub fn normalized(cue_duration_sec: f64, gap_ms: i64, start_ms: i64) -> Self {
        // `as` saturates and maps NaN to 0, which the floor then lifts
        let duration = (cue_duration_sec * 1000.0).round() as i64;
        Self {
            cue_duration_ms: duration.max(MIN_CUE_DURATION_MS as i64) as u64,
            gap_ms: gap_ms.max(0) as u64,
            start_ms: start_ms.max(0) as u64,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::normalized(DEFAULT_CUE_DURATION_SEC, DEFAULT_GAP_MS, DEFAULT_START_MS)
    }
}

// Wider than the config fields so long timelines with huge durations and
// gaps never overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start_ms: u128,
    pub end_ms: u128,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrtEntry {
    pub index: usize,
    #[serde(flatten)]
    pub interval: TimeInterval,
    pub text: String,
}

/// A complete subtitle document, built once from the cue texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrtDocument {
    entries: Vec<SrtEntry>,
}

impl SrtDocument {
    pub fn build<S: AsRef<str>>(cues: &[S], timing: &TimingConfig) -> Self {
        let duration = u128::from(timing.cue_duration_ms);
        let gap = u128::from(timing.gap_ms);
        let mut cursor = u128::from(timing.start_ms);
        let entries = cues
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let interval = TimeInterval {
                    start_ms: cursor,
                    end_ms: cursor + duration,
                };
                cursor = interval.end_ms + gap;
                SrtEntry {
                    index: i + 1,
                    interval,
                    text: text.as_ref().to_string(),
                }
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[SrtEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize to SubRip text. Blocks are separated by one blank line and
    /// the document ends with exactly one newline.
    pub fn to_srt(&self) -> String {
        if self.entries.is_empty() {
            return "\n".to_string();
        }
        self.entries
            .iter()
            .map(|entry| {
                format!(
                    "{}\n{} --> {}\n{}\n",
                    entry.index,
                    format_timestamp(entry.interval.start_ms),
                    format_timestamp(entry.interval.end_ms),
                    entry.text
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for SrtDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_srt())
    }
}

/// Format milliseconds as an SRT timestamp (HH:MM:SS,mmm). Hours are not
/// capped and widen past two digits.
pub fn format_timestamp(ms: u128) -> String {
    let millis = ms % 1000;
    let total_sec = ms / 1000;
    let s = total_sec % 60;
    let total_min = total_sec / 60;
    let m = total_min % 60;
    let h = total_min / 60;
    format!("{:02}:{:02}:{:02},{:03}", h, m, s, millis)
}

/// Render cue texts straight to SRT text from raw timing input.
pub fn render<S: AsRef<str>>(cues: &[S], cue_duration_sec: f64, gap_ms: i64, start_ms: i64) -> String {
    let timing = TimingConfig::normalized(cue_duration_sec, gap_ms, start_ms);
    SrtDocument::build(cues, &timing).to_srt()
}
