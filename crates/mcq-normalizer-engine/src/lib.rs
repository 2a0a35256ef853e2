pub mod io;
pub mod models;
pub mod numbering;
pub mod output;
pub mod pipeline;
pub mod segmenting;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use models::*;
pub use output::{NormalizedDocument, OutputBlock, assemble};
pub use pipeline::{DocumentSource, NormalizeError, normalize, normalize_source};
pub use segmenting::{Segmentation, segment};

pub use mcq_normalizer_config::{AnswerKeyPolicy, Config, OptionCapacity};
