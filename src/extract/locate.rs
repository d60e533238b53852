//! Microdata property lookup.
use kuchiki::NodeRef;

/// Find the first node, in document order, whose `itemprop` attribute
/// contains `prop`.
///
/// Pre-order depth-first search starting at (and including) `node`; the
/// search does not continue past a match. Containment is substring-based,
/// which lets a lookup for `Answer` match a node carrying
/// `itemprop="acceptedAnswer"` the way real-world markup uses it, at the
/// cost of over-matching property names that are infixes of longer tokens.
pub fn find_itemprop(node: &NodeRef, prop: &str) -> Option<NodeRef> {
    if let Some(element) = node.as_element() {
        if let Some(value) = element.attributes.borrow().get("itemprop") {
            if value.contains(prop) {
                return Some(node.clone());
            }
        }
    }
    node.children().find_map(|child| find_itemprop(&child, prop))
}
