//! Subcommand handlers

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simeval_application::{
    SimilarityEvaluator, accuracy_and_se, augment_negatives, count_labels, train_test_split,
};
use simeval_domain::error::Result;
use simeval_infrastructure::config::AppConfig;
use simeval_infrastructure::error_ext::ErrorContext;
use simeval_infrastructure::io::{
    load_embeddings, load_pairings, load_projection_matrix, load_similarity_records, save_json,
};
use std::io::Write;
use std::path::Path;
use tracing::info;

use super::Command;

/// Run one subcommand against an already loaded configuration
///
/// Human-readable results are written to `out`.
pub fn execute<W: Write>(command: &Command, config: &AppConfig, out: &mut W) -> Result<()> {
    let evaluator = SimilarityEvaluator::new(config.evaluation.zero_norm);
    match command {
        Command::CosinePairings {
            embeddings,
            pairings,
            output,
            matrix,
        } => cosine_pairings(&evaluator, embeddings, pairings, matrix.as_deref(), output),
        Command::Accuracy {
            cosine_pairings,
            output,
        } => accuracy(cosine_pairings, output, out),
        Command::Evaluate {
            embeddings,
            pairings,
            matrix,
            output,
        } => evaluate(
            &evaluator,
            embeddings,
            pairings,
            matrix.as_deref(),
            output.as_deref(),
            out,
        ),
        Command::Compare {
            embeddings,
            pairings,
            matrix,
            output,
        } => compare(
            &evaluator,
            embeddings,
            pairings,
            matrix,
            output.as_deref(),
            out,
        ),
        Command::AugmentNegatives {
            pairings,
            output,
            seed,
        } => augment(pairings, output, seed.or(config.augment.seed)),
        Command::Split {
            pairings,
            train_output,
            test_output,
            test_fraction,
            seed,
        } => split(
            pairings,
            train_output,
            test_output,
            test_fraction.unwrap_or(config.split.test_fraction),
            seed.or(config.split.seed),
        ),
        Command::Inspect { pairings } => inspect(pairings, out),
    }
}

fn cosine_pairings(
    evaluator: &SimilarityEvaluator,
    embeddings: &Path,
    pairings: &Path,
    matrix: Option<&Path>,
    output: &Path,
) -> Result<()> {
    let embeddings = load_embeddings(embeddings)?;
    let pairings = load_pairings(pairings)?;
    let matrix = matrix.map(load_projection_matrix).transpose()?;

    let records = evaluator.similarities(&embeddings, &pairings, matrix.as_ref())?;
    save_json(output, &records, "similarity records")?;
    info!(
        records = records.len(),
        projected = matrix.is_some(),
        output = %output.display(),
        "Wrote cosine pairings"
    );
    Ok(())
}

fn accuracy<W: Write>(cosine_pairings: &Path, output: &Path, out: &mut W) -> Result<()> {
    let records = load_similarity_records(cosine_pairings)?;
    let result = accuracy_and_se(&records)?;
    save_json(output, &result, "accuracy result")?;
    writeln!(out, "{}", result.message).io_context("Failed to write result")
}

fn evaluate<W: Write>(
    evaluator: &SimilarityEvaluator,
    embeddings: &Path,
    pairings: &Path,
    matrix: Option<&Path>,
    output: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    let embeddings = load_embeddings(embeddings)?;
    let pairings = load_pairings(pairings)?;
    let matrix = matrix.map(load_projection_matrix).transpose()?;

    let result = evaluator.evaluate(&embeddings, &pairings, matrix.as_ref())?;
    if let Some(output) = output {
        save_json(output, &result, "accuracy result")?;
    }
    writeln!(out, "{}", result.message).io_context("Failed to write result")
}

fn compare<W: Write>(
    evaluator: &SimilarityEvaluator,
    embeddings: &Path,
    pairings: &Path,
    matrix: &Path,
    output: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    let embeddings = load_embeddings(embeddings)?;
    let pairings = load_pairings(pairings)?;
    let matrix = load_projection_matrix(matrix)?;

    let report = evaluator.compare(&embeddings, &pairings, &matrix)?;
    if let Some(output) = output {
        save_json(output, &report, "comparison report")?;
    }
    writeln!(out, "{report}").io_context("Failed to write report")
}

fn augment(pairings: &Path, output: &Path, seed: Option<u64>) -> Result<()> {
    let pairings = load_pairings(pairings)?;
    let mut rng = seeded_rng(seed);

    let augmented = augment_negatives(&pairings, &mut rng);
    save_json(output, &augmented, "augmented pairings")?;

    let counts = count_labels(&augmented);
    info!(
        added = augmented.len() - pairings.len(),
        positives = counts.positives,
        negatives = counts.negatives,
        output = %output.display(),
        "Wrote augmented pairings"
    );
    Ok(())
}

fn split(
    pairings: &Path,
    train_output: &Path,
    test_output: &Path,
    test_fraction: f64,
    seed: Option<u64>,
) -> Result<()> {
    let pairings = load_pairings(pairings)?;
    let mut rng = seeded_rng(seed);

    let split = train_test_split(&pairings, test_fraction, &mut rng)?;
    save_json(train_output, &split.train, "training pairings")?;
    save_json(test_output, &split.test, "test pairings")?;
    info!(
        train = split.train.len(),
        test = split.test.len(),
        test_fraction,
        "Wrote train/test split"
    );
    Ok(())
}

fn inspect<W: Write>(pairings: &Path, out: &mut W) -> Result<()> {
    let counts = count_labels(&load_pairings(pairings)?);
    writeln!(
        out,
        "Pairings: {}\nPositives: {}\nNegatives: {}",
        counts.total(),
        counts.positives,
        counts.negatives
    )
    .io_context("Failed to write label counts")
}

/// Seeded RNG; without a seed one is drawn and logged so the run can be repeated
fn seeded_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(|| {
        let drawn: u64 = rand::rng().random();
        info!(seed = drawn, "No shuffle seed configured, drew one");
        drawn
    });
    StdRng::seed_from_u64(seed)
}
