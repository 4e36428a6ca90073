use std::path::{Path, PathBuf};

use tokio::io::AsyncReadExt;
use tracing::{debug, info};

use crate::errors::ScriptError;
use crate::segmenter::trim_blank;

pub const DEFAULT_FILENAME: &str = "subtitles.srt";

/// Where the script text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    File(PathBuf),
    Stdin,
}

impl ScriptSource {
    /// `None` and `-` both mean standard input.
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(p) if p != Path::new("-") => ScriptSource::File(p.to_path_buf()),
            _ => ScriptSource::Stdin,
        }
    }

    fn describe(&self) -> String {
        match self {
            ScriptSource::File(p) => p.display().to_string(),
            ScriptSource::Stdin => "<stdin>".to_string(),
        }
    }
}

/// Read the script and reject it when there is nothing but whitespace.
pub async fn load_script(source: &ScriptSource) -> Result<String, ScriptError> {
    let raw = match source {
        ScriptSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| ScriptError::Read {
                    path: source.describe(),
                    source: e,
                })?
        }
        ScriptSource::Stdin => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .map_err(|e| ScriptError::Read {
                    path: source.describe(),
                    source: e,
                })?;
            buf
        }
    };
    info!("Read {} bytes of script from {}", raw.len(), source.describe());
    validate_script(&raw).map(str::to_string)
}

pub fn validate_script(raw: &str) -> Result<&str, ScriptError> {
    let text = trim_blank(raw);
    if text.is_empty() {
        return Err(ScriptError::EmptyInput);
    }
    Ok(text)
}

/// Trimmed output name, or the default when nothing usable was given.
pub fn output_filename(raw: &str) -> String {
    let name = raw.trim();
    if name.is_empty() {
        DEFAULT_FILENAME.to_string()
    } else {
        name.to_string()
    }
}

pub async fn write_output(dir: &Path, filename: &str, contents: &str) -> Result<PathBuf, ScriptError> {
    let path = dir.join(filename);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ScriptError::Write {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }
    }
    debug!("Writing {} bytes to {}", contents.len(), path.display());
    tokio::fs::write(&path, contents)
        .await
        .map_err(|e| ScriptError::Write {
            path: path.clone(),
            source: e,
        })?;
    Ok(path)
}
