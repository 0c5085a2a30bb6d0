//! Agent execution error types.
//!
//! Used by `Node::run` and every adapter the research graph calls into.

use thiserror::Error;

/// Agent execution error.
///
/// Returned by graph nodes when a step fails (LLM call failed, retrieval
/// failed, search API error). One variant by design: failures propagate
/// uncaught to the caller of `invoke`, there is no per-layer recovery.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Execution failed with a message (e.g. LLM call failed, search error).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}
