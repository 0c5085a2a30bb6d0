//! Next-step result from a graph node.

/// Next step after running a node.
///
/// - **Continue**: follow the wired edge out of this node (or END if none).
/// - **Node(id)**: jump to the given node, bypassing wiring.
/// - **End**: stop; the current state is the final result.
///
/// **Interaction**: returned by `Node::run`; consumed by the compiled graph's
/// run loop. Nodes with conditional edges have their `Next` ignored: the
/// router decides.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Next {
    /// Follow the wired edge; if the node has none, equivalent to End.
    Continue,
    /// Run the node with the given id next.
    Node(String),
    /// Stop and return the current state.
    End,
}
