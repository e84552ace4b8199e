//! One-shot analysis commands.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use sentra_core::sentiment::SentimentClass;
use sentra_core::{LexiconScorer, LinearToxicityClassifier, SentraConfig};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Text to analyze
    pub text: String,

    /// Print the API JSON response instead of a summary
    #[arg(long)]
    pub json: bool,
}

/// Print the sentiment analysis of a text.
pub fn sentiment(args: AnalyzeArgs, config: &SentraConfig) -> Result<()> {
    let scorer = LexiconScorer::load(config.models.lexicon_path.as_deref())
        .context("Failed to load sentiment lexicon")?;
    let analysis = sentra_core::analyze_sentiment(&scorer, &args.text)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    let label = match analysis.sentiment_classification {
        SentimentClass::Positive => "positive".green().bold(),
        SentimentClass::Negative => "negative".red().bold(),
        SentimentClass::Neutral => "neutral".dimmed(),
    };

    println!("{}", "Sentiment Analysis".bold());
    println!("{}", "─".repeat(40));
    println!("  Classification: {}", label);
    println!("  Polarity:       {:.3}", analysis.polarity);
    println!("  Subjectivity:   {:.3}", analysis.subjectivity);
    println!("  Positive:       {}", analysis.positive_percentage.green());
    println!("  Negative:       {}", analysis.negative_percentage.red());
    println!("{}", "─".repeat(40));

    Ok(())
}

/// Print the toxicity classification of a text.
pub fn toxicity(args: AnalyzeArgs, config: &SentraConfig) -> Result<()> {
    let classifier =
        LinearToxicityClassifier::load(&config.models.vectorizer_path, &config.models.model_path)
            .context("Failed to load toxicity classifier")?;
    let result = sentra_core::analyze_toxicity(&classifier, &args.text)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let label = if result.label.is_toxic() {
        result.label.as_str().red().bold()
    } else {
        result.label.as_str().green().bold()
    };

    println!("{}", "Toxicity".bold());
    println!("{}", "─".repeat(40));
    println!("  Class:       {}", label);
    println!("  Probability: {:.1}%", classifier.probability(&args.text) * 100.0);
    println!("{}", "─".repeat(40));

    Ok(())
}
