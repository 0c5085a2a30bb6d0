//! Graph node trait: one step in a `StateGraph`.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::AgentError;

use super::Next;

/// One step in a graph: state in, (state out, next step).
///
/// Each research-graph node (retrieve, grade, search, generate) implements
/// this for the shared state type. The run loop uses the returned [`Next`]
/// when the node has no conditional edges.
///
/// **Interaction**: registered via `StateGraph::add_node`; executed by
/// `CompiledStateGraph::invoke`.
#[async_trait]
pub trait Node<S>: Send + Sync
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Node id (e.g. `"vector_store_retrieve"`). Unique within a graph.
    fn id(&self) -> &str;

    /// One step: state in, (state out, next step).
    async fn run(&self, state: S) -> Result<(S, Next), AgentError>;
}
