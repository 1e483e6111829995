//! Review Scope CLI entry point
//!
//! Thin wiring only: configuration, logging, component construction,
//! model warm-up, then one analysis request with incremental output.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use review_scope_lib::application::{spawn_warmup, AnalysisEvent, ModelLifecycle, ReviewAnalysisUseCases};
use review_scope_lib::domain::{AnalysisInput, SentimentClassifier};
use review_scope_lib::infrastructure::{
    init_logging_with_config, BertSentimentClassifier, ConfigManager, HttpClient,
    ImdbListingFetcher, ReviewListParser,
};

const USAGE: &str = "Usage: review-scope --url <imdb-title-url>\n       review-scope --text <review text>";

fn parse_input(args: &[String]) -> Option<AnalysisInput> {
    match args {
        [flag, value] if flag == "--url" => Some(AnalysisInput::Listing(value.clone())),
        [flag, rest @ ..] if flag == "--text" && !rest.is_empty() => {
            Some(AnalysisInput::DirectText(rest.join(" ")))
        }
        _ => None,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config_manager = ConfigManager::new()?;
    let config = config_manager.load_config().await?;
    init_logging_with_config(&config.logging)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(input) = parse_input(&args) else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };

    // Explicitly constructed, immutable components handed to the pipeline
    let http = Arc::new(HttpClient::new(config.http.clone())?);
    let fetcher = Arc::new(ImdbListingFetcher::new(http));
    let parser = Arc::new(ReviewListParser::with_config(
        &config.parsing.review_list_selectors,
    )?);

    let model_config = config.model.clone();
    let classifier =
        tokio::task::spawn_blocking(move || BertSentimentClassifier::load(&model_config))
            .await??;
    let classifier: Arc<dyn SentimentClassifier> = Arc::new(classifier);

    let lifecycle = ModelLifecycle::new();
    let warmup = spawn_warmup(
        lifecycle.clone(),
        classifier.clone(),
        config.model.warmup_seq_len,
    );
    info!("Warming up the sentiment model");
    warmup.await?;
    if !lifecycle.is_ready() {
        anyhow::bail!("model warm-up failed; see logs for details");
    }

    let use_cases = ReviewAnalysisUseCases::new(
        fetcher,
        parser,
        classifier,
        lifecycle,
        config.model.clone(),
    );

    use_cases
        .analyze(input, |event| match event {
            AnalysisEvent::Started { total_items, .. } => {
                println!("Analyzing {total_items} reviews...");
            }
            AnalysisEvent::ReviewClassified {
                formatted,
                progress,
                ..
            } => {
                println!("{formatted}");
                println!("[{:>3}%]", progress.display_percent());
            }
            AnalysisEvent::DirectResult { formatted, .. } => println!("{formatted}"),
            AnalysisEvent::Message { text } => println!("{text}"),
            AnalysisEvent::Finished { .. } => {}
        })
        .await?;

    Ok(())
}
