//! Prompt building and response parsing

pub mod parser;
pub mod prompt;

pub use parser::{check_selection, extract_generated_text, judgment_from_text, parse_judgment_text, JudgmentParse};
pub use prompt::{build_prediction_prompt, build_selection_prompt};
