mod config;
mod effects;
mod logging;
mod render;

use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc};
use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;
use client_logging::client_info;
use matchlens_core::{update, ControllerState, ExperienceLevel, Msg, RequestPhase};

use crate::config::AppConfig;
use crate::effects::EffectRunner;

#[derive(Parser)]
#[command(
    name = "matchlens",
    about = "Match a resume PDF against a job description via the analysis service"
)]
struct Cli {
    /// Path to the resume PDF.
    resume: PathBuf,
    /// Read the job description from this file.
    #[arg(long, value_name = "FILE", conflicts_with = "text")]
    description: Option<PathBuf>,
    /// Pass the job description inline.
    #[arg(long, value_name = "STRING")]
    text: Option<String>,
    /// Experience level to report (auto, intern, fresher, experienced).
    #[arg(long, default_value = "auto")]
    level: String,
    /// Also log to ./matchlens.log.
    #[arg(long)]
    log_file: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(if cli.log_file {
        logging::LogDestination::Both
    } else {
        logging::LogDestination::Terminal
    });

    let config = AppConfig::from_env();
    let level = ExperienceLevel::parse(&cli.level)
        .with_context(|| format!("unknown experience level {:?}", cli.level))?;

    let description = match (&cli.description, &cli.text) {
        (Some(path), None) => std::fs::read_to_string(path)
            .with_context(|| format!("reading job description from {}", path.display()))?,
        (None, Some(text)) => text.clone(),
        _ => bail!("provide the job description with --description <FILE> or --text <STRING>"),
    };

    let resume_bytes = std::fs::read(&cli.resume)
        .with_context(|| format!("reading resume from {}", cli.resume.display()))?;
    let file_name = cli
        .resume
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume.pdf".to_string());
    let mime_type = mime_for_path(&cli.resume);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx, config.service.clone(), config.limits.clone())?;

    let mut state = ControllerState::new(config.limits);
    for msg in [
        Msg::FileSelected {
            name: file_name,
            mime_type,
            bytes: Arc::new(resume_bytes),
        },
        Msg::DescriptionEdited(description),
        Msg::ExperienceLevelChosen(level),
        Msg::SubmitClicked,
    ] {
        let (next, effects) = update(state, msg);
        state = next;
        runner.run(effects);
    }

    if state.phase() != RequestPhase::InFlight {
        // A selection or submit gate failed; nothing went on the wire.
        match state.error() {
            Some(error) => bail!("{error}"),
            None => bail!("submission did not start"),
        }
    }

    client_info!(
        "analysis request in flight, waiting up to {:?}",
        config.service.request_timeout
    );
    // The client enforces its own timeout; the margin only covers delivery.
    let deadline = config.service.request_timeout + Duration::from_secs(5);
    while !state.phase().is_terminal() {
        match msg_rx.recv_timeout(deadline) {
            Ok(msg) => {
                let (next, effects) = update(state, msg);
                state = next;
                runner.run(effects);
            }
            Err(_) => {
                let (next, effects) = update(state, Msg::TeardownRequested);
                state = next;
                runner.run(effects);
                bail!("no response from the analysis service");
            }
        }
    }

    match state.report() {
        Some(report) => {
            print!("{}", render::format_report(report));
            Ok(())
        }
        None => match state.error() {
            Some(error) => bail!("{error}"),
            None => bail!("analysis ended without a result"),
        },
    }
}

fn mime_for_path(path: &Path) -> String {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => "application/pdf".to_string(),
        _ => "application/octet-stream".to_string(),
    }
}
