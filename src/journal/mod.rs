//! The entry pipeline: the record type, its factory and its mood decorator.
//!
//! Raw text becomes an [`Entry`] through [`EntryFactory::create`], is tagged by
//! [`TaggingDecorator::add_tag`], and only then handed to a store.

pub mod entry;
pub mod factory;
pub mod tagging;

pub use entry::{Entry, EntryId, MoodTag, Sentiment, SentimentLabel};
pub use factory::EntryFactory;
pub use tagging::{tag_for, TaggingDecorator};
