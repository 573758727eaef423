//! doxyfix - Fix doxygen documentation warnings with an LLM
//!
//! Groups doxygen warning lines by file, builds one prompt per file asking
//! a language model to fix the documentation without touching the code,
//! and overwrites each file with the model's corrected version. Supports
//! OpenAI, Anthropic, and OpenAI-compatible (local) providers.

pub mod cli;
pub mod companion;
pub mod config;
pub mod extract;
pub mod llm;
pub mod prompt;
pub mod resolver;
pub mod util;
pub mod warnings;
