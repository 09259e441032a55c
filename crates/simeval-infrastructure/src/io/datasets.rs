//! JSON and CSV dataset loaders

use crate::constants::{CSV_EXTENSION, JSON_LINES_EXTENSION, PYTHON_NAN_TOKEN};
use crate::error_ext::ErrorContext;
use crate::utils::FileUtils;
use serde::Serialize;
use simeval_domain::error::Result;
use simeval_domain::{EmbeddingStore, Pairing, SimilarityRecord};
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

/// Load an embeddings file
///
/// Every vector must have the same length.
pub fn load_embeddings<P: AsRef<Path>>(path: P) -> Result<EmbeddingStore> {
    let store: EmbeddingStore = FileUtils::read_json(path.as_ref(), "embeddings")?;
    let dimensions = store.dimensions()?;
    debug!(
        path = %path.as_ref().display(),
        texts = store.len(),
        dimensions,
        "Loaded embeddings"
    );
    Ok(store)
}

/// Load a pairings file
///
/// | Extension | Format |
/// |-----------|--------|
/// | `.jsonl` | one pairing object per line, blank lines skipped |
/// | `.csv` | header row `text_1,text_2,label`, blank lines skipped |
/// | anything else | a single JSON array |
pub fn load_pairings<P: AsRef<Path>>(path: P) -> Result<Vec<Pairing>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());

    let pairings = match extension.as_deref() {
        Some(JSON_LINES_EXTENSION) => read_json_lines(path)?,
        Some(CSV_EXTENSION) => read_csv(path)?,
        _ => FileUtils::read_json(path, "pairings")?,
    };

    debug!(path = %path.display(), pairings = pairings.len(), "Loaded pairings");
    Ok(pairings)
}

fn read_json_lines(path: &Path) -> Result<Vec<Pairing>> {
    let content = FileUtils::read_to_string(path, "pairings")?;
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str::<Pairing>(line).io_context(format!(
                "Failed to parse pairing on line {} of {}",
                index + 1,
                path.display()
            ))
        })
        .collect()
}

fn read_csv(path: &Path) -> Result<Vec<Pairing>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .io_context(format!("Failed to open pairings {}", path.display()))?;

    reader
        .deserialize::<Pairing>()
        .map(|row| row.io_context(format!("Failed to parse pairings {}", path.display())))
        .collect()
}

/// Load a cosine-pairings file
///
/// Files written by Python's `json` module may contain bare `NaN` tokens for
/// zero-norm similarities; they are read as NaN.
pub fn load_similarity_records<P: AsRef<Path>>(path: P) -> Result<Vec<SimilarityRecord>> {
    let path = path.as_ref();
    let content = FileUtils::read_to_string(path, "similarity records")?;
    let records: Vec<SimilarityRecord> = serde_json::from_str(&nan_tokens_to_null(&content))
        .io_context(format!(
            "Failed to parse similarity records from {}",
            path.display()
        ))?;
    debug!(
        path = %path.display(),
        records = records.len(),
        "Loaded similarity records"
    );
    Ok(records)
}

/// Rewrite bare `NaN` tokens outside string literals as `null`
fn nan_tokens_to_null(content: &str) -> Cow<'_, str> {
    if !content.contains(PYTHON_NAN_TOKEN) {
        return Cow::Borrowed(content);
    }

    let mut rewritten = String::with_capacity(content.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut rest = content;
    while let Some(c) = rest.chars().next() {
        if !in_string && rest.starts_with(PYTHON_NAN_TOKEN) {
            rewritten.push_str("null");
            rest = &rest[PYTHON_NAN_TOKEN.len()..];
            continue;
        }
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
        }
        rewritten.push(c);
        rest = &rest[c.len_utf8()..];
    }
    Cow::Owned(rewritten)
}

/// Write any serializable result as JSON
pub fn save_json<T: Serialize, P: AsRef<Path>>(path: P, value: &T, context: &str) -> Result<()> {
    FileUtils::write_json(path.as_ref(), value, context)?;
    debug!(path = %path.as_ref().display(), "Wrote {}", context);
    Ok(())
}
