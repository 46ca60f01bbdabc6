//! Command implementations for the sentiment CLI.

use std::sync::Arc;

use log::info;

use crate::analysis::SentimentAnalyzer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::dataset::{read_labeled_csv, to_training_set};
use crate::error::Result;
use crate::evaluation::evaluate;
use crate::model::{ModelStore, NaiveBayesClassifier, load_params_file, save_params};
use crate::server::{self, ServerConfig};

/// Execute a CLI command.
pub fn execute_command(args: SentimentArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train(train_args, &args),
        Command::Evaluate(evaluate_args) => evaluate_params(evaluate_args, &args),
        Command::Classify(classify_args) => classify_text(classify_args, &args),
        Command::Serve(serve_args) => serve(serve_args),
    }
}

/// Fit on the training set, score on the test set, then write params.
///
/// Params are only written once evaluation succeeded, so a failed run leaves
/// the previous params file in place.
fn train(args: &TrainArgs, cli_args: &SentimentArgs) -> Result<()> {
    let analyzer = SentimentAnalyzer::new();

    let train_rows = read_labeled_csv(&args.train, args.delimiter)?;
    let test_rows = read_labeled_csv(&args.test, args.delimiter)?;
    info!(
        "read {} training rows from {} and {} test rows from {}",
        train_rows.len(),
        args.train.display(),
        test_rows.len(),
        args.test.display()
    );

    let training_set = to_training_set(&train_rows, &analyzer);
    let store = Arc::new(ModelStore::new());
    let model = store.train(&training_set.examples)?;

    let classifier = NaiveBayesClassifier::with_analyzer(Arc::clone(&store), analyzer);
    let evaluation = evaluate(&classifier, &test_rows)?;

    save_params(&model, &args.params)?;

    output_result(
        "Training finished",
        &TrainingResult {
            params_path: args.params.to_string_lossy().to_string(),
            training_rows: train_rows.len(),
            unlabeled_rows: training_set.unlabeled_rows,
            vocabulary_size: model.vocabulary_size(),
            evaluation,
        },
        cli_args,
    )
}

/// Score saved params on a test set.
fn evaluate_params(args: &EvaluateArgs, cli_args: &SentimentArgs) -> Result<()> {
    let store = Arc::new(ModelStore::open(&args.params)?);
    let test_rows = read_labeled_csv(&args.test, args.delimiter)?;

    let classifier = NaiveBayesClassifier::new(store);
    let evaluation = evaluate(&classifier, &test_rows)?;

    output_result(
        "Evaluation finished",
        &EvaluationResult {
            params_path: args.params.to_string_lossy().to_string(),
            evaluation,
        },
        cli_args,
    )
}

/// Classify one sentence with saved params.
fn classify_text(args: &ClassifyArgs, cli_args: &SentimentArgs) -> Result<()> {
    let model = load_params_file(&args.params)?;
    let text = args.sentence();
    let label = model.classify(&text)?;

    output_result(
        "Classification",
        &ClassificationResult { text, label },
        cli_args,
    )
}

/// Run the HTTP service on a fresh tokio runtime.
fn serve(args: &ServeArgs) -> Result<()> {
    let config = ServerConfig {
        bind: args.bind,
        params_path: args.params.clone(),
        allow_reload: args.allow_reload,
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(config))
}
