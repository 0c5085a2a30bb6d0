//! Conditional edges: route to the next node based on state.
//!
//! A source node gets a routing function `(state) -> key`; the key is either
//! used directly as the next node id or looked up in an optional path map.
//!
//! **Interaction**: stored by `StateGraph::add_conditional_edges`; resolved by
//! the compiled graph's run loop after the source node returns.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

/// Router function: takes the current state, returns a routing key.
pub type ConditionalRouterFn<S> = Arc<dyn Fn(&S) -> String + Send + Sync>;

/// Conditional edge definition: routing function plus optional path map.
///
/// - `path_map` is `None`: the router's return value is the next node id.
/// - `path_map` is `Some(map)`: the return value is the key; the next node is
///   `map[key]` when present, otherwise the key itself.
#[derive(Clone)]
pub struct ConditionalRouter<S> {
    pub(super) path: ConditionalRouterFn<S>,
    pub(super) path_map: Option<HashMap<String, String>>,
}

impl<S> ConditionalRouter<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Builds a conditional router with an optional path map.
    pub fn new(path: ConditionalRouterFn<S>, path_map: Option<HashMap<String, String>>) -> Self {
        Self { path, path_map }
    }

    /// Resolves the next node id (or END) from the current state.
    pub fn resolve_next(&self, state: &S) -> String {
        let key = (self.path)(state);
        self.path_map
            .as_ref()
            .and_then(|m| m.get(&key))
            .cloned()
            .unwrap_or(key)
    }
}

/// How to find the next node after a given node runs.
///
/// Stored in the compiled graph's next map: `Unconditional(to_id)` for a
/// single wired edge, `Conditional(router)` for state-based routing.
#[derive(Clone)]
pub enum NextEntry<S> {
    /// Single fixed next node (or END). The node's own `Next` is still respected.
    Unconditional(String),
    /// Next node is decided by the router; the node's `Next` is ignored.
    Conditional(ConditionalRouter<S>),
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: without a path map the router key is the next node id.
    #[test]
    fn resolve_next_uses_key_directly_without_path_map() {
        let router: ConditionalRouter<i32> =
            ConditionalRouter::new(Arc::new(|s: &i32| format!("node{}", s)), None);
        assert_eq!(router.resolve_next(&7), "node7");
    }

    /// **Scenario**: with a path map the key is translated; unknown keys pass through.
    #[test]
    fn resolve_next_translates_through_path_map() {
        let map: HashMap<String, String> = [("hit".to_string(), "target".to_string())]
            .into_iter()
            .collect();
        let router: ConditionalRouter<bool> = ConditionalRouter::new(
            Arc::new(|s: &bool| if *s { "hit".into() } else { "miss".into() }),
            Some(map),
        );
        assert_eq!(router.resolve_next(&true), "target");
        assert_eq!(router.resolve_next(&false), "miss");
    }
}
