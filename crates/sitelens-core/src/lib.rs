//! Sitelens Core Library
//!
//! Domain model, prompt construction, and the analysis session state machine.

pub mod error;
pub mod prompt;
pub mod report;
pub mod session;

pub use error::{AnalysisError, AnalysisResult};
pub use report::{AnalysisReport, Platform};
pub use session::{AnalysisSession, Analyzer, SessionState};
