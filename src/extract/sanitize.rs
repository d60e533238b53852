//! Markup sanitization for text-bearing fields.
//!
//! Free-text markup coming out of the archives carries arbitrary page
//! furniture (scripts, widgets, tracking pixels) interleaved with the actual
//! content. [sanitize] reduces a subtree to a fixed whitelist of inline and
//! block text tags, unwrapping everything else so that the text itself
//! survives.
use std::collections::HashSet;

use kuchiki::{NodeData, NodeRef};
use lazy_static::lazy_static;

lazy_static! {
    /// Text-bearing HTML elements kept by [sanitize].
    ///
    /// Taken from the text content, inline text semantics and table content
    /// sections of the MDN element reference.
    pub static ref TEXT_TAGS: HashSet<&'static str> = {
        let mut m = HashSet::new();
        m.insert("blockquote");
        m.insert("dd");
        m.insert("div");
        m.insert("dl");
        m.insert("dt");
        m.insert("figcaption");
        m.insert("hr");
        m.insert("li");
        m.insert("ol");
        m.insert("p");
        m.insert("pre");
        m.insert("ul");
        m.insert("h1");
        m.insert("h2");
        m.insert("h3");
        m.insert("h4");
        m.insert("h5");
        m.insert("h6");
        m.insert("a");
        m.insert("abbr");
        m.insert("b");
        m.insert("bdi");
        m.insert("bdo");
        m.insert("br");
        m.insert("cite");
        m.insert("code");
        m.insert("data");
        m.insert("dfn");
        m.insert("em");
        m.insert("i");
        m.insert("kbd");
        m.insert("mark");
        m.insert("q");
        m.insert("rb");
        m.insert("rp");
        m.insert("rt");
        m.insert("rtc");
        m.insert("ruby");
        m.insert("s");
        m.insert("samp");
        m.insert("small");
        m.insert("span");
        m.insert("strong");
        m.insert("sub");
        m.insert("sup");
        m.insert("time");
        m.insert("u");
        m.insert("var");
        m.insert("wbr");
        m.insert("caption");
        m.insert("col");
        m.insert("colgroup");
        m.insert("table");
        m.insert("tbody");
        m.insert("td");
        m.insert("tfoot");
        m.insert("th");
        m.insert("thead");
        m.insert("tr");
        m
    };
}

/// Restrict a subtree to whitelisted tags, in place.
///
/// Post-order: children are sanitized before the node itself is tested, so
/// that splicing a node's children does not interfere with descendants that
/// were already processed. A node survives when its tag is whitelisted or it
/// carries an `itemprop` attribute (microdata fields are needed by the
/// collectors even when their tag is not a text tag). Everything else is
/// unwrapped, not deleted: its children are re-inserted as following
/// siblings, in document order, and the node alone is detached.
///
/// The traversal root has no parent and is left in place even when it fails
/// the test.
pub fn sanitize(node: &NodeRef, whitelist: &HashSet<&'static str>) {
    for child in node.children().collect::<Vec<_>>() {
        sanitize(&child, whitelist);
    }

    let keep = match node.data() {
        NodeData::Element(element) => {
            whitelist.contains(&*element.name.local)
                || element.attributes.borrow().contains("itemprop")
        }
        // bare text always survives
        NodeData::Text(_) => true,
        // comments, doctypes and processing instructions carry no text
        NodeData::Comment(_) | NodeData::ProcessingInstruction(_) | NodeData::Doctype(_) => false,
        // document roots have no parent and are never detached anyway
        _ => true,
    };
    if keep {
        return;
    }

    // cannot splice a parentless node
    if node.parent().is_none() {
        return;
    }

    let mut anchor = node.clone();
    for child in node.children().collect::<Vec<_>>() {
        anchor.insert_after(child.clone());
        anchor = child;
    }
    node.detach();
}

/// Serialize a node's subtree, stripping the node's own enclosing tag.
///
/// The callers already know the semantic role of the node (it was located by
/// its `itemprop`), so only the inner markup is relevant.
pub fn inner_markup(node: &NodeRef) -> String {
    let serialized = node.to_string();
    let start = match serialized.find('>') {
        Some(idx) => idx + 1,
        None => 0,
    };
    let end = serialized.rfind("</").unwrap_or(serialized.len());
    if start <= end {
        serialized[start..end].to_string()
    } else {
        String::new()
    }
}
