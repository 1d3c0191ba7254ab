//! Core pipeline orchestration for AgriGuide.
//!
//! This crate ties the prompt builder, generation client, section extractor,
//! assembler, and validator into the end-to-end `fetch_guide` workflow.

pub mod assembler;
pub mod pipeline;
pub mod validate;
