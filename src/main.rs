//! searchbuddy - CLI entry point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use searchbuddy::{
    cli::Args, AnswerPipeline, Config, ExaSearchClient, OpenAiChatClient, SearchParams,
};

fn spinner(message: &str, quiet: bool) -> Option<ProgressBar> {
    if quiet {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    Some(pb)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Fail fast before any boundary is constructed
    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            std::process::exit(2);
        }
    };

    if let Some(model) = &args.model {
        config.generation.model = model.clone();
    }

    let retriever = ExaSearchClient::new(&config.search)?;
    let generator = OpenAiChatClient::new(&config.generation)?;

    let params = SearchParams {
        top_k: args.top_k,
        highlights: true,
    };
    let pipeline = AnswerPipeline::with_params(retriever, generator, params);

    if args.dry_run {
        let pb = spinner("Searching...", args.quiet);
        let messages = pipeline.compose_only(&args.query).await?;
        if let Some(pb) = pb {
            pb.finish_and_clear();
        }

        if !args.quiet {
            println!("{}", "system:".cyan().bold());
        }
        println!("{}", messages.system);
        if !args.quiet {
            println!("\n{}", "human:".cyan().bold());
        }
        println!("{}", messages.human);
        return Ok(());
    }

    let pb = spinner("Searching and answering...", args.quiet);
    let result = pipeline.answer(&args.query).await;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let result = result?;

    if !args.quiet {
        eprintln!(
            "{}",
            format!("retrieved {} documents", result.documents_retrieved).dimmed()
        );
    }
    println!("{}", result.completion);

    Ok(())
}
