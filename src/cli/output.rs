//! Output formatting for CLI results.

use serde::Serialize;

use crate::cli::args::{OutputFormat, SentimentArgs};
use crate::error::{Result, SentimentError};
use crate::evaluation::EvaluationReport;
use crate::model::Label;

/// Results that know how to print themselves for humans.
pub trait HumanOutput {
    fn human_lines(&self) -> Vec<String>;
}

/// Result of the `train` command.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingResult {
    pub params_path: String,
    pub training_rows: usize,
    pub unlabeled_rows: usize,
    pub vocabulary_size: usize,
    pub evaluation: EvaluationReport,
}

/// Result of the `evaluate` command.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResult {
    pub params_path: String,
    pub evaluation: EvaluationReport,
}

/// Result of the `classify` command.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResult {
    pub text: String,
    pub label: Label,
}

fn accuracy_line(report: &EvaluationReport) -> String {
    format!("Accuracy of the model is: {:.4}", report.accuracy)
}

fn label_lines(report: &EvaluationReport) -> Vec<String> {
    report
        .per_label()
        .iter()
        .map(|(label, score)| {
            format!(
                "  {label:<8} {}/{} correct",
                score.correct, score.support
            )
        })
        .collect()
}

impl HumanOutput for TrainingResult {
    fn human_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Training rows: {}", self.training_rows),
            format!("Vocabulary size: {}", self.vocabulary_size),
        ];
        if self.unlabeled_rows > 0 {
            lines.push(format!(
                "Rows with unrecognized labels: {}",
                self.unlabeled_rows
            ));
        }
        lines.push(format!("Params written to: {}", self.params_path));
        lines.extend(label_lines(&self.evaluation));
        lines.push(accuracy_line(&self.evaluation));
        lines
    }
}

impl HumanOutput for EvaluationResult {
    fn human_lines(&self) -> Vec<String> {
        let mut lines = label_lines(&self.evaluation);
        lines.push(accuracy_line(&self.evaluation));
        lines
    }
}

impl HumanOutput for ClassificationResult {
    fn human_lines(&self) -> Vec<String> {
        vec![self.label.to_string()]
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &SentimentArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    println!("{}", render_result(message, result, args)?);
    Ok(())
}

/// Render a result without printing it.
pub fn render_result<T>(message: &str, result: &T, args: &SentimentArgs) -> Result<String>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            let mut lines = Vec::new();
            if args.verbosity() > 1 {
                lines.push(message.to_string());
                lines.push(String::new());
            }
            lines.extend(result.human_lines());
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => {
            let rendered = if args.pretty {
                serde_json::to_string_pretty(result)
            } else {
                serde_json::to_string(result)
            };
            rendered.map_err(|e| SentimentError::invalid_input(format!("cannot render output: {e}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::evaluation::LabelScore;

    fn report() -> EvaluationReport {
        EvaluationReport {
            total: 4,
            correct: 3,
            accuracy: 0.75,
            unlabeled: 0,
            positive: LabelScore { support: 2, correct: 1 },
            neutral: LabelScore { support: 1, correct: 1 },
            negative: LabelScore { support: 1, correct: 1 },
        }
    }

    #[test]
    fn test_human_evaluation_output() {
        let args = SentimentArgs::parse_from(["sentiment-bayes", "train"]);
        let result = EvaluationResult {
            params_path: "params.json".to_string(),
            evaluation: report(),
        };

        let rendered = render_result("Evaluation finished", &result, &args).unwrap();
        assert!(rendered.ends_with("Accuracy of the model is: 0.7500"));
        assert!(rendered.contains("positive 1/2 correct"));
        assert!(!rendered.contains("Evaluation finished"));
    }

    #[test]
    fn test_json_classification_output() {
        let args = SentimentArgs::parse_from(["sentiment-bayes", "-f", "json", "train"]);
        let result = ClassificationResult {
            text: "Good shop".to_string(),
            label: Label::Positive,
        };

        let rendered = render_result("Classification", &result, &args).unwrap();
        assert_eq!(rendered, r#"{"text":"Good shop","label":"positive"}"#);
    }
}
