//! Domain services: the pure computations of an evaluation run

pub mod accuracy;
pub mod labels;
pub mod pairwise;
pub mod similarity;

pub use accuracy::{accuracy_and_se, accuracy_at_threshold, format_message};
pub use labels::count_labels;
pub use pairwise::generate_similarities;
pub use similarity::{cosine_similarity, project, similarity};
