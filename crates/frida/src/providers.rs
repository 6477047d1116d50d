pub mod configs;
pub mod llm;
