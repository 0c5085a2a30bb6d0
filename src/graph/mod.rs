//! State-graph engine: build and run stateful node graphs.
//!
//! A graph is a set of named async nodes over one state type `S`, wired with
//! explicit edges (`START` / `END` sentinels) and optional conditional edges
//! resolved from state at runtime. Compile-time validation catches broken
//! wiring; the run loop adds structured logging and per-node retries.

mod compile_error;
mod compiled;
mod conditional;
mod logging;
mod next;
mod node;
mod retry;
mod state_graph;

pub use compile_error::CompilationError;
pub use compiled::CompiledStateGraph;
pub use conditional::{ConditionalRouter, ConditionalRouterFn, NextEntry};
pub use logging::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
    log_node_state,
};
pub use next::Next;
pub use node::Node;
pub use retry::RetryPolicy;
pub use state_graph::{StateGraph, END, START};
