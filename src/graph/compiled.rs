//! Compiled state graph: immutable, supports invoke only.
//!
//! Built by `StateGraph::compile`. Holds the node map, the per-node next
//! entry (unconditional edge or conditional router), and the retry policy.
//! The run loop executes one node at a time, resolves the next node, and
//! returns the final state when END is reached.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use crate::error::AgentError;

use super::conditional::NextEntry;
use super::logging::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
    log_node_state,
};
use super::retry::RetryPolicy;
use super::state_graph::END;
use super::{Next, Node};

/// Compiled graph: immutable structure, supports `invoke` only.
///
/// Created by [`StateGraph::compile`](super::StateGraph::compile). Runs from
/// the node wired to START; after each node, the conditional router (when
/// present) or the node's returned [`Next`] chooses the next node.
#[derive(Clone)]
pub struct CompiledStateGraph<S> {
    pub(super) nodes: HashMap<String, Arc<dyn Node<S>>>,
    /// First node to run (target of the START edge).
    pub(super) first_node_id: String,
    /// Node id -> how to find the next node after it runs.
    pub(super) next_map: HashMap<String, NextEntry<S>>,
    /// Retry policy applied around each node run.
    pub(super) retry_policy: RetryPolicy,
}

impl<S> CompiledStateGraph<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Runs one node, retrying per the configured policy on failure.
    async fn run_node_with_retry(
        &self,
        node: Arc<dyn Node<S>>,
        state: &S,
    ) -> Result<(S, Next), AgentError> {
        let mut attempt = 0;
        loop {
            match node.run(state.clone()).await {
                Ok(output) => return Ok(output),
                Err(e) => {
                    if self.retry_policy.should_retry(attempt) {
                        let delay = self.retry_policy.delay(attempt);
                        tracing::warn!(
                            node_id = node.id(),
                            attempt = attempt,
                            delay_ms = delay.as_millis() as u64,
                            error = %e,
                            "node failed, retrying"
                        );
                        if delay > std::time::Duration::ZERO {
                            tokio::time::sleep(delay).await;
                        }
                        attempt += 1;
                        continue;
                    }
                    return Err(e);
                }
            }
        }
    }

    /// Runs the graph to completion with the given initial state.
    ///
    /// Steps through nodes starting at the START edge's target. After each
    /// node: a conditional router resolves the next id from the updated
    /// state; otherwise the node's `Next` is honored (`Continue` follows the
    /// wired edge, `Node(id)` jumps, `End` stops).
    pub async fn invoke(&self, state: S) -> Result<S, AgentError> {
        if !self.nodes.contains_key(&self.first_node_id) {
            return Err(AgentError::ExecutionFailed("empty graph".into()));
        }

        log_graph_start();
        let mut state = state;
        let mut current_id = self.first_node_id.clone();

        loop {
            // A router without a path map can emit an id compile() never saw.
            let node = match self.nodes.get(&current_id) {
                Some(node) => node.clone(),
                None => {
                    let e = AgentError::ExecutionFailed(format!("unknown node id: {}", current_id));
                    log_graph_error(&e);
                    return Err(e);
                }
            };

            log_node_start(&current_id);
            log_node_state(&current_id, &state);

            let (new_state, next) = match self.run_node_with_retry(node, &state).await {
                Ok(output) => output,
                Err(e) => {
                    log_graph_error(&e);
                    return Err(e);
                }
            };
            state = new_state;
            log_node_complete(&current_id, &next);

            let next_id: Option<String> =
                if let Some(NextEntry::Conditional(router)) = self.next_map.get(&current_id) {
                    let target = router.resolve_next(&state);
                    tracing::debug!(from = %current_id, to = %target, "conditional routing");
                    Some(target)
                } else {
                    match next {
                        Next::End => None,
                        Next::Node(id) => Some(id),
                        Next::Continue => self.next_map.get(&current_id).and_then(|e| match e {
                            NextEntry::Unconditional(id) => Some(id.clone()),
                            NextEntry::Conditional(_) => None,
                        }),
                    }
                };

            match next_id {
                None => break,
                Some(id) if id == END => break,
                Some(id) => current_id = id,
            }
        }

        log_graph_complete();
        Ok(state)
    }
}
