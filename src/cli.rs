use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ytsum",
    about = "Summarize YouTube videos from their captions",
    version = env!("GIT_DESCRIBE"),
)]
pub struct Cli {
    /// YouTube video URL (reads URLs from stdin if omitted)
    pub url: Option<String>,

    /// Print the transcript instead of summarizing
    #[arg(short, long)]
    pub transcript: bool,

    /// Preferred caption language
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Gemini model for summarization
    #[arg(short, long)]
    pub model: Option<String>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show video metadata and extraction details
    #[arg(short, long)]
    pub verbose: bool,
}
