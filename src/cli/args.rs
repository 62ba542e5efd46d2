//! Command-line argument parsing for searchbuddy

use clap::Parser;

/// searchbuddy - ask the web a question, get a cited answer from your LLM
#[derive(Parser, Debug)]
#[command(name = "searchbuddy")]
#[command(version)]
#[command(about = "Ask the web a question, get a cited answer from your LLM", long_about = None)]
pub struct Args {
    /// The query to answer, e.g. "Best time to visit Japan"
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Number of search results to retrieve
    #[arg(short = 'k', long, default_value_t = 3)]
    pub top_k: usize,

    /// Chat model to use (overrides SEARCHBUDDY_MODEL)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Print the composed prompt instead of calling the model
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress progress output, print only the answer
    #[arg(short, long)]
    pub quiet: bool,
}
