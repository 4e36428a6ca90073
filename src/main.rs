use anyhow::Context;
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use script2srt::args::{Args, OutputFormat};
use script2srt::script::{self, ScriptSource};
use script2srt::{SrtDocument, segmenter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let source = ScriptSource::from_arg(args.script.as_deref());
    let text = script::load_script(&source).await?;

    let cues = segmenter::segment(&text, args.split_mode);
    if cues.is_empty() {
        warn!("Script produced no subtitle cues");
        anyhow::bail!("Script produced no subtitle cues");
    }
    debug!("First cue: {}", cues[0]);

    let timing = args.timing();
    info!(
        "Timing: {} ms per cue, {} ms gap, starting at {} ms",
        timing.cue_duration_ms, timing.gap_ms, timing.start_ms
    );
    let doc = SrtDocument::build(&cues, &timing);

    let output = match args.format {
        OutputFormat::Srt => doc.to_srt(),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(&doc).context("Failed to serialize subtitles")?;
            json.push('\n');
            json
        }
    };

    if args.stdout {
        print!("{}", output);
    } else {
        let filename = script::output_filename(&args.filename);
        let path = script::write_output(&args.out_dir, &filename, &output).await?;
        info!("Subtitles written to {}", path.display());
    }

    info!("Generated {} subtitle cues.", doc.len());
    Ok(())
}
