//! Entity field collectors.
//!
//! Each collector takes a node presumed to be the root of the corresponding
//! entity markup and pulls its known fields out of the subtree. Text-bearing
//! fields are sanitized and re-serialized without their enclosing tag;
//! metadata fields (dates, counts) are passed through as raw strings.
use kuchiki::NodeRef;

use crate::pipelines::qarecords::types::{Answer, Question};

use super::locate::find_itemprop;
use super::sanitize::{inner_markup, sanitize, TEXT_TAGS};

/// Collect question fields from `node` into `record`.
///
/// Fields already present on the record are overwritten when found again;
/// the answer list is never touched here.
pub fn question(node: &NodeRef, record: &mut Question) {
    if let Some(markup) = markup_field(node, "name") {
        record.name_markup = Some(markup);
    }
    if let Some(markup) = markup_field(node, "text") {
        record.text_markup = Some(markup);
    }

    if let Some(value) = metadata_field(node, "dateCreated") {
        record.date_created = Some(value);
    }
    if let Some(value) = metadata_field(node, "dateModified") {
        record.date_modified = Some(value);
    }
    if let Some(value) = metadata_field(node, "datePublished") {
        record.date_published = Some(value);
    }

    if let Some(value) = metadata_field(node, "upvoteCount") {
        record.upvote_count = Some(value);
    }
    if let Some(value) = metadata_field(node, "downvoteCount") {
        record.downvote_count = Some(value);
    }
    if let Some(value) = metadata_field(node, "commentCount") {
        record.comment_count = Some(value);
    }
    if let Some(value) = metadata_field(node, "answerCount") {
        record.answer_count = Some(value);
    }
}

/// Collect answer fields from `node` into `record`.
///
/// `status` is read off the answer root's own `itemprop` attribute, not
/// searched for: the node carrying the `Answer` itemtype is the one that
/// holds the `acceptedAnswer`/`suggestedAnswer` property.
pub fn answer(node: &NodeRef, record: &mut Answer) {
    if let Some(markup) = markup_field(node, "text") {
        record.text_markup = Some(markup);
    }

    record.status = own_itemprop(node);

    if let Some(value) = metadata_field(node, "dateCreated") {
        record.date_created = Some(value);
    }
    if let Some(value) = metadata_field(node, "dateModified") {
        record.date_modified = Some(value);
    }
    if let Some(value) = metadata_field(node, "datePublished") {
        record.date_published = Some(value);
    }

    if let Some(value) = metadata_field(node, "upvoteCount") {
        record.upvote_count = Some(value);
    }
    if let Some(value) = metadata_field(node, "downvoteCount") {
        record.downvote_count = Some(value);
    }
    if let Some(value) = metadata_field(node, "commentCount") {
        record.comment_count = Some(value);
    }
}

/// Collect an author name from a person subtree.
///
/// Looks for the `name` property first, falling back to `author`, which some
/// pages use for the same role. Returns [None] when neither is present, in
/// which case no person is attached to the enclosing context.
pub fn person(node: &NodeRef) -> Option<String> {
    let located =
        find_itemprop(node, "name").or_else(|| find_itemprop(node, "author"))?;
    node_value(&located)
}

/// Locate a text-bearing property, sanitize it in place and serialize the
/// surviving inner markup.
fn markup_field(node: &NodeRef, prop: &str) -> Option<String> {
    let located = find_itemprop(node, prop)?;
    sanitize(&located, &TEXT_TAGS);
    Some(inner_markup(&located))
}

/// Locate a metadata property and extract its raw value.
fn metadata_field(node: &NodeRef, prop: &str) -> Option<String> {
    let located = find_itemprop(node, prop)?;
    node_value(&located)
}

/// The raw value carried by a located metadata node: `content` for `<meta>`
/// tags, the `datetime` attribute for timestamp elements that have one, the
/// leading text otherwise.
fn node_value(node: &NodeRef) -> Option<String> {
    let element = node.as_element()?;
    let attributes = element.attributes.borrow();
    if &*element.name.local == "meta" {
        return attributes.get("content").map(str::to_string);
    }
    if let Some(datetime) = attributes.get("datetime") {
        return Some(datetime.to_string());
    }
    drop(attributes);
    node.first_child()
        .and_then(|child| child.as_text().map(|text| text.borrow().clone()))
}

fn own_itemprop(node: &NodeRef) -> Option<String> {
    let element = node.as_element()?;
    let attributes = element.attributes.borrow();
    attributes.get("itemprop").map(str::to_string)
}
