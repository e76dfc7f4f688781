// Resume parsing: PDF text → LLM completion → cleaned JSON record.
// All completion calls go through llm_client::CompletionService.

pub mod export;
pub mod handlers;
pub mod json_extract;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod prompts;
pub mod text_extractor;

#[cfg(test)]
pub mod fixtures;
