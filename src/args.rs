use std::path::PathBuf;

use clap::Parser;

use crate::segmenter::SplitMode;
use crate::subtitle::TimingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Srt,
    Json,
}

/// Turn a plain-text script into an SRT subtitle file.
#[derive(Parser, Debug)]
#[clap(name = "script2srt", version)]
pub struct Args {
    /// Script file to read; stdin when omitted or `-`
    pub script: Option<PathBuf>,

    #[clap(long, value_enum, default_value_t = SplitMode::Auto)]
    pub split_mode: SplitMode,

    /// Seconds each cue stays on screen (at least 0.5)
    #[clap(long, default_value_t = 2.5)]
    pub duration: f64,

    /// Milliseconds between the end of one cue and the next
    #[clap(long, default_value_t = 200, allow_negative_numbers = true)]
    pub gap: i64,

    /// Milliseconds before the first cue
    #[clap(long, default_value_t = 0, allow_negative_numbers = true)]
    pub start: i64,

    #[clap(long, default_value = "subtitles.srt")]
    pub filename: String,

    #[clap(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Print the result instead of writing a file
    #[clap(long)]
    pub stdout: bool,

    #[clap(long, value_enum, default_value_t = OutputFormat::Srt)]
    pub format: OutputFormat,

    #[clap(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn timing(&self) -> TimingConfig {
        TimingConfig::normalized(self.duration, self.gap, self.start)
    }
}
