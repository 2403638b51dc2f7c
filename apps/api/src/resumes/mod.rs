// Resume parsing: raw text in, structured `ResumeOutput` out.
// All LLM calls go through llm_client; no direct Gemini calls here.

pub mod handlers;
pub mod parser;
pub mod prompts;
