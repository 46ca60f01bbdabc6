//! Command line argument parsing using clap.
//!
//! Paths and the bind address fall back to environment variables, then to
//! the defaults the training and inference sides agree on (`params.json`
//! next to the working directory).

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// sentiment-bayes - Naive Bayes sentiment classification
#[derive(Parser, Debug, Clone)]
#[command(name = "sentiment-bayes")]
#[command(about = "Train, evaluate and serve a three-class Naive Bayes sentiment model")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SentimentArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SentimentArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train on a CSV file, report accuracy on a test file, write params
    Train(TrainArgs),

    /// Report accuracy of saved params on a test file
    Evaluate(EvaluateArgs),

    /// Classify a sentence with saved params
    Classify(ClassifyArgs),

    /// Serve the HTTP inference endpoint
    Serve(ServeArgs),
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Labeled training set
    #[arg(long, env = "SENTIMENT_TRAIN", default_value = "train.csv")]
    pub train: PathBuf,

    /// Labeled test set
    #[arg(long, env = "SENTIMENT_TEST", default_value = "test.csv")]
    pub test: PathBuf,

    /// Where to write the params blob
    #[arg(short, long, env = "SENTIMENT_PARAMS", default_value = "params.json")]
    pub params: PathBuf,

    /// CSV field delimiter
    #[arg(short, long, env = "SENTIMENT_DELIMITER", default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,
}

/// Arguments for evaluating saved params
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    /// Labeled test set
    #[arg(long, env = "SENTIMENT_TEST", default_value = "test.csv")]
    pub test: PathBuf,

    /// Params blob to evaluate
    #[arg(short, long, env = "SENTIMENT_PARAMS", default_value = "params.json")]
    pub params: PathBuf,

    /// CSV field delimiter
    #[arg(short, long, env = "SENTIMENT_DELIMITER", default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,
}

/// Arguments for classifying a sentence
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Params blob to classify with
    #[arg(short, long, env = "SENTIMENT_PARAMS", default_value = "params.json")]
    pub params: PathBuf,

    /// Sentence to classify (multiple words are joined with spaces)
    #[arg(value_name = "TEXT", required = true, num_args = 1..)]
    pub text: Vec<String>,
}

impl ClassifyArgs {
    /// The sentence as a single string.
    pub fn sentence(&self) -> String {
        self.text.join(" ")
    }
}

/// Arguments for serving
#[derive(Parser, Debug, Clone)]
pub struct ServeArgs {
    /// Params blob loaded at startup
    #[arg(short, long, env = "SENTIMENT_PARAMS", default_value = "params.json")]
    pub params: PathBuf,

    /// Address to listen on
    #[arg(short, long, env = "SENTIMENT_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Expose POST /reload to swap in a retrained params file
    #[arg(long)]
    pub allow_reload: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(format!("delimiter must be a single ASCII character, got {value:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_defaults() {
        let args = SentimentArgs::try_parse_from(["sentiment-bayes", "train"]).unwrap();

        if let Command::Train(train_args) = args.command {
            assert_eq!(train_args.train, PathBuf::from("train.csv"));
            assert_eq!(train_args.test, PathBuf::from("test.csv"));
            assert_eq!(train_args.params, PathBuf::from("params.json"));
            assert_eq!(train_args.delimiter, b',');
        } else {
            panic!("Expected Train command");
        }
    }

    #[test]
    fn test_train_paths_and_delimiter() {
        let args = SentimentArgs::try_parse_from([
            "sentiment-bayes",
            "train",
            "--train",
            "data/a.csv",
            "--test",
            "data/b.csv",
            "-p",
            "out/params.json",
            "--delimiter",
            ";",
        ])
        .unwrap();

        if let Command::Train(train_args) = args.command {
            assert_eq!(train_args.train, PathBuf::from("data/a.csv"));
            assert_eq!(train_args.test, PathBuf::from("data/b.csv"));
            assert_eq!(train_args.params, PathBuf::from("out/params.json"));
            assert_eq!(train_args.delimiter, b';');
        } else {
            panic!("Expected Train command");
        }
    }

    #[test]
    fn test_bad_delimiter() {
        let result =
            SentimentArgs::try_parse_from(["sentiment-bayes", "train", "--delimiter", ",,"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_classify_joins_words() {
        let args =
            SentimentArgs::try_parse_from(["sentiment-bayes", "classify", "Good", "shop"]).unwrap();

        if let Command::Classify(classify_args) = args.command {
            assert_eq!(classify_args.sentence(), "Good shop");
        } else {
            panic!("Expected Classify command");
        }

        assert!(SentimentArgs::try_parse_from(["sentiment-bayes", "classify"]).is_err());
    }

    #[test]
    fn test_serve_args() {
        let args = SentimentArgs::try_parse_from([
            "sentiment-bayes",
            "serve",
            "--bind",
            "0.0.0.0:9000",
            "--allow-reload",
        ])
        .unwrap();

        if let Command::Serve(serve_args) = args.command {
            assert_eq!(serve_args.bind, "0.0.0.0:9000".parse().unwrap());
            assert!(serve_args.allow_reload);
        } else {
            panic!("Expected Serve command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = SentimentArgs::try_parse_from(["sentiment-bayes", "train"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = SentimentArgs::try_parse_from(["sentiment-bayes", "-vv", "train"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = SentimentArgs::try_parse_from(["sentiment-bayes", "train", "--quiet"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            SentimentArgs::try_parse_from(["sentiment-bayes", "--format", "json", "train"]).unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
