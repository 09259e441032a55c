//! Dataset file I/O
//!
//! | Loader | Format |
//! |--------|--------|
//! | [`load_embeddings`] | JSON object `text -> [number]` |
//! | [`load_pairings`] | JSON array of pairings, or JSON Lines for `.jsonl` |
//! | [`load_similarity_records`] | JSON array of `[similarity, label]` |
//! | [`load_projection_matrix`] | 2-D NumPy `.npy`, `float64` or `float32` |

mod datasets;
mod matrix;

pub use datasets::{load_embeddings, load_pairings, load_similarity_records, save_json};
pub use matrix::load_projection_matrix;
