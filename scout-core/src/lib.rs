pub mod campaigns;
pub mod config;
pub mod http;
pub mod perplexity;
pub mod runner;

// Re-export commonly used types
pub use campaigns::Campaign;
pub use config::Config;
pub use perplexity::{ChatRequest, ChatResponse, Message, SonarClient};
pub use runner::RunReport;
