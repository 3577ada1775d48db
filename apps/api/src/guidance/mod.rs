// Guidance pipeline: prompt construction, strict response parsing, report
// rendering. All generation calls go through llm_client; nothing here talks
// to the provider directly.

pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod report;
