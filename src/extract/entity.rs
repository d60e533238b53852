//! Schema.org entity resolution.
use kuchiki::NodeRef;

// Scheme-agnostic type markers: pages link both http and https vocabularies.
const QUESTION_TYPE: &str = "//schema.org/Question";
const ANSWER_TYPE: &str = "//schema.org/Answer";
const PERSON_TYPE: &str = "//schema.org/Person";

/// The entity kinds the extraction engine knows about.
///
/// Resolved once per node from its `itemtype` attribute, so that the tree
/// walk dispatches on a tag instead of re-checking substrings at every site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Question,
    Answer,
    Person,
}

impl Entity {
    /// Resolve the entity kind of a node, if any.
    pub fn of(node: &NodeRef) -> Option<Entity> {
        let element = node.as_element()?;
        let attributes = element.attributes.borrow();
        let itemtype = attributes.get("itemtype")?;
        if itemtype.contains(QUESTION_TYPE) {
            Some(Entity::Question)
        } else if itemtype.contains(ANSWER_TYPE) {
            Some(Entity::Answer)
        } else if itemtype.contains(PERSON_TYPE) {
            Some(Entity::Person)
        } else {
            None
        }
    }
}
