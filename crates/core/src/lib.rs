pub mod cascade;
pub mod classify;
pub mod document;
pub mod engine;
pub mod error;
pub mod extraction;
pub mod faq;
pub mod markup;
pub mod normalize;
pub mod outline;
pub mod payload;
pub mod steps;

pub use classify::{Classification, ContentKind, classify, classify_with_gate};
pub use document::{AuthorRef, CategoryRef, Document};
pub use engine::{
    SynthesisConfig, SynthesisConfigBuilder, Synthesizer, build_collection_payload, extract_and_classify,
};
pub use error::{Result, StructuraError};
pub use extraction::Extraction;
pub use faq::{FaqPair, extract_faq_pairs};
#[doc(hidden)]
pub use markup::{EmphasisSpan, HeadingBlock};
pub use normalize::{reading_duration, strip_markup, word_count};
pub use outline::{TocEntry, extract_outline, slugify};
pub use payload::{
    ArticlePayload, CollectionPayload, FaqEntity, FaqPayload, HowToPayload, PayloadStep, StructuredDataPayload,
    assemble,
};
pub use steps::{HowToStep, extract_steps};
