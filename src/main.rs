use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::Duration;

use console::style;
use eyre::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

mod cli;

use cli::Cli;
use ytsum::config::{Config, Credentials};
use ytsum::summarize::{DEFAULT_MODEL, SUMMARY_PROMPT};

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytsum.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytsum")
        .join("logs")
}

fn build_after_help() -> String {
    let log_path = log_dir().join("ytsum.log");

    format!(
        "\nSUPPORTED URL FORMATS:\n  \
         https://www.youtube.com/watch?v=ID\n  \
         https://youtu.be/ID\n\nLogs are written to: {}",
        log_path.display()
    )
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let after_help = build_after_help();
    let cmd = <Cli as clap::CommandFactory>::command().after_help(after_help);
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    // Load config file (non-fatal if missing/invalid)
    let config = Config::load().unwrap_or_default();

    // CLI flags take priority over config defaults
    let lang = cli
        .lang
        .clone()
        .or_else(|| config.default_lang.clone())
        .unwrap_or_else(|| "en".to_string());
    let model = cli
        .model
        .clone()
        .or_else(|| config.default_model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    if cli.verbose {
        let config_path = ytsum::config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
        debug!("Resolved lang: {lang}");
        debug!("Resolved model: {model}");
    }

    // Summarization needs the Gemini key; resolve it up front so a missing
    // credential fails before any network call.
    let credentials = if cli.transcript {
        None
    } else {
        Some(Credentials::from_env()?)
    };

    let client = reqwest::Client::new();

    // Collect URLs: from arg or stdin
    let urls = if let Some(ref url) = cli.url {
        vec![url.clone()]
    } else {
        let stdin = io::stdin();
        stdin.lock().lines().collect::<Result<Vec<_>, _>>()?
    };

    if urls.is_empty() {
        bail!("no URL provided\n\nUsage: ytsum <URL>\n       echo <URL> | ytsum");
    }

    for url_input in &urls {
        let url_input = url_input.trim();
        if url_input.is_empty() {
            continue;
        }

        if let Some(video_id) = ytsum::extract_video_id(url_input).filter(|id| !id.is_empty()) {
            println!("{} {}", style("Thumbnail:").dim(), ytsum::thumbnail_url(&video_id));
        }

        let spinner = create_spinner("Fetching transcript...");
        let transcript = match ytsum::youtube::fetch_transcript(&client, url_input, &lang).await {
            Ok(t) => {
                spinner.finish_with_message(format!(
                    "{} Transcript fetched ({} segments)",
                    style("✓").green().bold(),
                    t.segments.len()
                ));
                t
            }
            Err(err) => {
                spinner.finish_with_message(format!("{} {err}", style("✗").red().bold()));
                return Err(eyre::Report::new(err));
            }
        };

        if cli.verbose {
            eprintln!(
                "Video: {} ({})\nLanguage: {}\nSegments: {}",
                transcript.title,
                transcript.video_id,
                transcript.language,
                transcript.segments.len(),
            );
        }

        match credentials {
            None => {
                // --transcript: print the text and skip summarization
                if let Some(ref path) = cli.output {
                    std::fs::write(path, transcript.text())?;
                    if cli.verbose {
                        eprintln!("Transcript written to: {}", path.display());
                    }
                } else {
                    println!("{}", transcript.text());
                }
            }
            Some(ref creds) => {
                let spinner = create_spinner("Generating summary...");
                let summary = match ytsum::summarize::generate_summary(
                    &client,
                    creds,
                    &model,
                    SUMMARY_PROMPT,
                    &transcript.text(),
                )
                .await
                {
                    Ok(s) => {
                        spinner.finish_with_message(format!(
                            "{} Summary generated",
                            style("✓").green().bold()
                        ));
                        s
                    }
                    Err(err) => {
                        spinner.finish_with_message(format!(
                            "{} Summary generation failed",
                            style("✗").red().bold()
                        ));
                        return Err(err.wrap_err("summary generation failed"));
                    }
                };

                if let Some(ref path) = cli.output {
                    std::fs::write(path, &summary)?;
                    if cli.verbose {
                        eprintln!("Summary written to: {}", path.display());
                    }
                } else {
                    println!("{}", style("─".repeat(60)).dim());
                    println!("{summary}");
                }
            }
        }
    }

    Ok(())
}
