//! Score a single pair and explain the result.

use clap::Args;
use serde::Serialize;

use crate::batch::format::encode_text;
use crate::cli::OutputFormat;
use crate::core::types::{PairScore, Status};
use crate::matching::alignment::align;
use crate::matching::Policy;
use crate::text::charset::{is_clean, is_foreign_script};
use crate::text::normalize;

#[derive(Args)]
pub struct CompareArgs {
    /// First string (the query for containment-style policies)
    #[arg(required = true)]
    pub left: String,

    /// Second string (the name for containment-style policies)
    #[arg(required = true)]
    pub right: String,

    /// Scoring policy
    #[arg(long, value_enum, default_value_t = Policy::Similarity)]
    pub policy: Policy,
}

#[derive(Debug, Serialize)]
pub struct SideReport {
    pub input: String,
    pub normalized: String,
    pub words: usize,
    pub clean: bool,
    pub foreign_script: bool,
}

#[derive(Debug, Serialize)]
pub struct PairReport {
    pub left: String,
    pub right: String,
    pub cost: usize,
}

#[derive(Debug, Serialize)]
pub struct ComparisonReport {
    pub policy: Policy,
    pub left: SideReport,
    pub right: SideReport,
    /// Word alignment of the two whole normalized strings
    pub alignment: Vec<PairReport>,
    pub total_cost: usize,
    pub status: Status,
    /// Score as a batch would write it
    pub score: String,
}

fn side(input: &str) -> SideReport {
    let normalized = normalize(input);
    SideReport {
        input: input.to_string(),
        words: normalized.words().len(),
        clean: is_clean(normalized.as_str()),
        foreign_script: is_foreign_script(normalized.as_str()),
        normalized: normalized.into_inner(),
    }
}

/// Score `left` against `right` and collect everything shown to the user.
///
/// # Errors
///
/// Returns an error if the policy hits a scoring invariant violation.
pub fn build_report(policy: Policy, left: &str, right: &str) -> anyhow::Result<ComparisonReport> {
    let score: PairScore = policy.score(left, right)?;
    let left_side = side(left);
    let right_side = side(right);

    let left_words: Vec<&str> = left_side.normalized.split(' ').collect();
    let right_words: Vec<&str> = right_side.normalized.split(' ').collect();
    let alignment = align(&left_words, &right_words);

    let pairs = alignment
        .pairs
        .iter()
        .map(|pair| PairReport {
            left: alignment.row_word(pair).to_string(),
            right: alignment.column_word(pair).to_string(),
            cost: pair.cost,
        })
        .collect();

    Ok(ComparisonReport {
        policy,
        total_cost: alignment.total_cost,
        alignment: pairs,
        status: score.status(),
        score: encode_text(&score, policy),
        left: left_side,
        right: right_side,
    })
}

pub fn run(args: &CompareArgs, format: OutputFormat) -> anyhow::Result<()> {
    let report = build_report(args.policy, &args.left, &args.right)?;

    match format {
        OutputFormat::Text => print_text_comparison(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Tsv => print_tsv_comparison(&report),
    }

    Ok(())
}

fn print_side(label: &str, side: &SideReport) {
    println!("\n{label}: {}", side.input);
    println!("  Normalized: {}", side.normalized);
    println!("  Words: {}", side.words);
    println!("  Clean: {}", side.clean);
    println!("  Foreign script: {}", side.foreign_script);
}

fn print_text_comparison(report: &ComparisonReport) {
    println!("Comparison Results ({})", report.policy);
    println!("{}", "=".repeat(60));

    print_side("Left", &report.left);
    print_side("Right", &report.right);

    println!("\nWord Alignment:");
    for pair in &report.alignment {
        println!(
            "  {:<20} {:<20} cost {}",
            display_word(&pair.left),
            display_word(&pair.right),
            pair.cost
        );
    }
    println!("  Total cost: {}", report.total_cost);

    println!("\nStatus: {}", report.status);
    println!("Score: {}", report.score);
}

fn display_word(word: &str) -> &str {
    if word.is_empty() {
        "<blank>"
    } else {
        word
    }
}

fn print_tsv_comparison(report: &ComparisonReport) {
    println!("policy\tleft\tright\ttotal_cost\tstatus\tscore");
    println!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        report.policy,
        report.left.normalized,
        report.right.normalized,
        report.total_cost,
        report.status,
        report.score,
    );
}
