//! Namespace-agnostic helpers over `roxmltree` nodes.
//!
//! Transitional and strict OOXML use different namespace URIs for the same
//! vocabulary, so elements and attributes are matched by local name.

use roxmltree::Node;

/// Strip a UTF-8 byte order mark.
pub(crate) fn strip_bom(s: &str) -> &str {
    s.strip_prefix('\u{FEFF}').unwrap_or(s)
}

pub(crate) fn is_tag(node: &Node, local: &str) -> bool {
    node.is_element() && node.tag_name().name() == local
}

/// Attribute value by local name, ignoring the prefix.
pub(crate) fn attr<'a>(node: &Node<'a, 'a>, local: &str) -> Option<&'a str> {
    node.attributes()
        .find(|a| a.name() == local)
        .map(|a| a.value())
}

pub(crate) fn child<'a>(node: &Node<'a, 'a>, local: &str) -> Option<Node<'a, 'a>> {
    node.children().find(|n| is_tag(n, local))
}

pub(crate) fn children<'a>(
    node: &Node<'a, 'a>,
    local: &'a str,
) -> impl Iterator<Item = Node<'a, 'a>> + 'a {
    node.children().filter(move |n| is_tag(n, local))
}

pub(crate) fn descendant<'a>(node: &Node<'a, 'a>, local: &str) -> Option<Node<'a, 'a>> {
    node.descendants().find(|n| is_tag(n, local))
}

pub(crate) fn has_descendant(node: &Node, local: &str) -> bool {
    node.descendants().any(|n| is_tag(&n, local))
}

/// Text content of a simple element, trimmed; `None` when empty.
pub(crate) fn trimmed_text(node: &Node) -> Option<String> {
    let text = node.text()?.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
