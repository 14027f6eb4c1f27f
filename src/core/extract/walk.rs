//! Predicate-driven walks over the parsed tree.
//!
//! Every walk is bounded to the subtree below a given node and visits nodes in
//! document order (depth-first, pre-order). The starting node itself is never visited.

use ego_tree::NodeRef;
use scraper::Node;

/// True for an element carrying `attr`, whatever its value.
pub(crate) fn has_attr(node: &Node, attr: &str) -> bool {
    node.as_element().is_some_and(|el| el.attr(attr).is_some())
}

/// True for an element with local name `name`.
pub(crate) fn is_element(node: &Node, name: &str) -> bool {
    node.as_element().is_some_and(|el| el.name() == name)
}

/// Nodes strictly below `root`, pre-order.
pub(crate) fn descendants<'a>(root: NodeRef<'a, Node>) -> impl Iterator<Item = NodeRef<'a, Node>> {
    root.descendants().skip(1)
}

/// First node below `root` matching `pred`.
pub(crate) fn find_first<'a, P>(root: NodeRef<'a, Node>, pred: P) -> Option<NodeRef<'a, Node>>
where
    P: Fn(&Node) -> bool,
{
    descendants(root).find(|node| pred(node.value()))
}

/// Every node below `root` matching `pred`, in document order.
pub(crate) fn find_all<'a, P>(
    root: NodeRef<'a, Node>,
    pred: P,
) -> impl Iterator<Item = NodeRef<'a, Node>>
where
    P: Fn(&Node) -> bool + 'a,
{
    descendants(root).filter(move |node| pred(node.value()))
}

/// Next sibling of `node` matching `pred`, skipping everything else.
pub(crate) fn next_sibling_matching<'a, P>(
    node: NodeRef<'a, Node>,
    pred: P,
) -> Option<NodeRef<'a, Node>>
where
    P: Fn(&Node) -> bool,
{
    let mut current = node.next_sibling();
    while let Some(sibling) = current {
        if pred(sibling.value()) {
            return Some(sibling);
        }
        current = sibling.next_sibling();
    }
    None
}

/// Trimmed text of the node's first child when that child is a text node, else `""`.
/// Nested text is not concatenated.
pub(crate) fn direct_text(node: NodeRef<'_, Node>) -> String {
    node.first_child()
        .and_then(|child| child.value().as_text().map(|text| text.trim().to_string()))
        .unwrap_or_default()
}
