//! Serializers for the vocabulary.
//!
//! - **JSON-LD context** ([`context`]): the term definitions documents use
//!   when they reference the vocabulary by its context IRI.

pub mod context;
