mod client;
mod parse;
mod prompt;

pub use client::{GeminiVision, VisionClient};
pub use parse::{parse_analysis, VisionAnalysis};
pub use prompt::{build_prompt, ScanHints};
