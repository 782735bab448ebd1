//! Infrastructure services: LLM extraction client, page fetching,
//! markdown conversion and debug artifact storage.

pub mod debug_store;
pub mod extraction_llm;
pub mod fetcher;
pub mod markdown;
