use std::convert::Infallible;

use mcq_normalizer_config::{AnswerKeyPolicy, Config};

use crate::models::SourceDocument;
use crate::numbering::flatten_paragraphs;
use crate::output::{NormalizedDocument, assemble};
use crate::segmenting::segment;

#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("Failed to read input document: {source}")]
    Unreadable {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("No answer key found")]
    MissingAnswerKey,
}

/// Anything that can hand over the paragraphs and list styles of a document.
pub trait DocumentSource {
    type Error: std::error::Error + Send + Sync + 'static;

    fn load(&self) -> Result<SourceDocument, Self::Error>;
}

impl DocumentSource for SourceDocument {
    type Error = Infallible;

    fn load(&self) -> Result<SourceDocument, Self::Error> {
        Ok(self.clone())
    }
}

/// Load a document from `source` and normalize it.
pub fn normalize_source<S: DocumentSource>(
    source: &S,
    config: &Config,
) -> Result<NormalizedDocument, NormalizeError> {
    let doc = source.load().map_err(|e| NormalizeError::Unreadable {
        source: Box::new(e),
    })?;
    normalize(&doc, config)
}

/// Rebuild list prefixes, segment the quiz and write it out explicitly.
pub fn normalize(
    doc: &SourceDocument,
    config: &Config,
) -> Result<NormalizedDocument, NormalizeError> {
    let lines = flatten_paragraphs(&doc.paragraphs, &doc.numbering);
    let segmentation = segment(&lines, config);

    if !segmentation.answer_key_found {
        match config.answer_key {
            AnswerKeyPolicy::Require => return Err(NormalizeError::MissingAnswerKey),
            AnswerKeyPolicy::Tolerate => {
                log::warn!("no answer key found, questions will be written without answers")
            }
        }
    } else if segmentation.answers.len() != segmentation.questions.len() {
        log::warn!(
            "answer key has {} answers for {} questions",
            segmentation.answers.len(),
            segmentation.questions.len()
        );
    }

    log::info!(
        "normalized {} questions, {} answers, {} tail lines",
        segmentation.questions.len(),
        segmentation.answers.len(),
        segmentation.tail.len()
    );

    Ok(assemble(&segmentation, config.option_capacity))
}
