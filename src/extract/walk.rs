//! Entity tree reconciliation.
//!
//! Real-world Q&A markup nests inconsistently: answers may sit anywhere
//! below their question, person blocks float inside either, and malformed
//! pages stack a second question (or answer) where only answers are
//! expected. The walk runs in two phases so each entity is consumed exactly
//! once:
//!
//! 1. a flat pre-order discovery pass collects every question root without
//!    descending into one, then
//! 2. a bounded recursive descent per discovered root builds the record,
//!    detaching each entity node from the tree as it is collected so that no
//!    outer or sibling traversal can re-match its remnants.
//!
//! Stacked entities that cannot be attributed to any context are detached
//! uncollected; processing of their siblings continues.
use kuchiki::NodeRef;

use crate::pipelines::qarecords::types::{Answer, Question};

use super::collect;
use super::entity::Entity;

/// The record a subtree is currently being collected into. Only a question
/// context can receive answers.
enum Context<'a> {
    Question(&'a mut Question),
    Answer(&'a mut Answer),
}

/// Phase 1: collect every question root in the page, in document order.
///
/// Does not descend into a found question; nested questions are dealt with
/// by the per-root walk.
pub fn find_questions(node: &NodeRef, found: &mut Vec<NodeRef>) {
    if let Some(Entity::Question) = Entity::of(node) {
        found.push(node.clone());
        return;
    }
    for child in node.children() {
        find_questions(&child, found);
    }
}

/// Phase 2: build the record for one discovered question root.
///
/// The root subtree is consumed: every entity node below it (and the root
/// itself) is detached from the page DOM.
pub fn build_question(root: &NodeRef) -> Question {
    let mut question = Question::default();
    walk(root, &mut Context::Question(&mut question));
    question
}

fn walk(node: &NodeRef, context: &mut Context) {
    match Entity::of(node) {
        Some(Entity::Answer) => {
            let Context::Question(question) = context else {
                // an answer nested below another answer has no place to go
                node.detach();
                return;
            };
            let mut record = Answer::default();
            {
                let mut context = Context::Answer(&mut record);
                for child in node.children().collect::<Vec<_>>() {
                    walk(&child, &mut context);
                }
            }
            collect::answer(node, &mut record);
            question.answers.push(record);
            node.detach();
        }
        Some(Entity::Question) => {
            for child in node.children().collect::<Vec<_>>() {
                walk(&child, context);
            }
            match context {
                // the root itself, or a nested question merging into it
                Context::Question(question) => collect::question(node, question),
                // a question stacked inside an answer is dropped
                Context::Answer(_) => {}
            }
            node.detach();
        }
        Some(Entity::Person) => {
            for child in node.children().collect::<Vec<_>>() {
                walk(&child, context);
            }
            if let Some(author) = collect::person(node) {
                match context {
                    Context::Question(question) => question.author = Some(author),
                    Context::Answer(answer) => answer.author = Some(author),
                }
            }
            node.detach();
        }
        None => {
            for child in node.children().collect::<Vec<_>>() {
                walk(&child, context);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use kuchiki::traits::TendrilSink;
    use kuchiki::NodeRef;

    use super::*;

    fn page(html: &str) -> NodeRef {
        kuchiki::parse_html().one(html)
    }

    #[test]
    fn test_discovery_does_not_descend() {
        let document = page(
            r#"<div itemtype="https://schema.org/Question">
                <div itemtype="https://schema.org/Question"></div>
            </div>
            <div itemtype="https://schema.org/Question"></div>"#,
        );
        let mut found = Vec::new();
        find_questions(&document, &mut found);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_answers_attach_to_question() {
        let document = page(
            r#"<div itemtype="https://schema.org/Question">
                <h2 itemprop="name">Title</h2>
                <div itemprop="acceptedAnswer" itemtype="https://schema.org/Answer">
                    <div itemprop="text"><p>First.</p></div>
                    <div itemtype="https://schema.org/Person"><span itemprop="name">ada</span></div>
                </div>
                <div itemprop="suggestedAnswer" itemtype="https://schema.org/Answer">
                    <div itemprop="text"><p>Second.</p></div>
                </div>
            </div>"#,
        );
        let mut found = Vec::new();
        find_questions(&document, &mut found);
        assert_eq!(found.len(), 1);

        let question = build_question(&found[0]);
        assert_eq!(question.name_markup.as_deref(), Some("Title"));
        assert_eq!(question.answers.len(), 2);
        assert_eq!(question.answers[0].status.as_deref(), Some("acceptedAnswer"));
        assert_eq!(question.answers[0].text_markup.as_deref(), Some("<p>First.</p>"));
        assert_eq!(question.answers[0].author.as_deref(), Some("ada"));
        assert_eq!(question.answers[1].status.as_deref(), Some("suggestedAnswer"));
        assert_eq!(question.answers[1].text_markup.as_deref(), Some("<p>Second.</p>"));
    }

    #[test]
    fn test_person_attaches_to_question() {
        let document = page(
            r#"<div itemtype="https://schema.org/Question">
                <div itemprop="text"><p>Q</p></div>
                <div itemtype="https://schema.org/Person"><span itemprop="name">grace</span></div>
            </div>"#,
        );
        let mut found = Vec::new();
        find_questions(&document, &mut found);
        let question = build_question(&found[0]);
        assert_eq!(question.author.as_deref(), Some("grace"));
        assert!(question.answers.is_empty());
    }

    #[test]
    fn test_stacked_answer_is_pruned() {
        // an answer nested inside another answer cannot be attributed
        let document = page(
            r#"<div itemtype="https://schema.org/Question">
                <div itemprop="text"><p>Q</p></div>
                <div itemprop="acceptedAnswer" itemtype="https://schema.org/Answer">
                    <div itemprop="text"><p>outer</p></div>
                    <div itemprop="suggestedAnswer" itemtype="https://schema.org/Answer">
                        <div itemprop="text"><p>orphan</p></div>
                    </div>
                </div>
            </div>"#,
        );
        let mut found = Vec::new();
        find_questions(&document, &mut found);
        let question = build_question(&found[0]);

        assert_eq!(question.answers.len(), 1);
        assert_eq!(question.answers[0].text_markup.as_deref(), Some("<p>outer</p>"));
        // the orphan subtree is gone from the DOM as well
        assert!(!document.to_string().contains("orphan"));
    }

    #[test]
    fn test_stacked_question_inside_answer_is_dropped() {
        let document = page(
            r#"<div itemtype="https://schema.org/Question">
                <div itemprop="text"><p>Q</p></div>
                <div itemprop="acceptedAnswer" itemtype="https://schema.org/Answer">
                    <div itemprop="text"><p>A</p></div>
                    <div itemtype="https://schema.org/Question">
                        <h2 itemprop="name">stacked</h2>
                    </div>
                </div>
            </div>"#,
        );
        let mut found = Vec::new();
        find_questions(&document, &mut found);
        let question = build_question(&found[0]);

        assert_eq!(question.text_markup.as_deref(), Some("<p>Q</p>"));
        assert_eq!(question.answers.len(), 1);
        // the stacked question contributed nothing, not even to the answer
        assert_eq!(question.name_markup, None);
        assert!(!document.to_string().contains("stacked"));
    }

    #[test]
    fn test_nested_question_merges_into_context() {
        // a question directly below a question merges its fields upward
        let document = page(
            r#"<div itemtype="https://schema.org/Question">
                <div itemtype="https://schema.org/Question">
                    <h2 itemprop="name">inner title</h2>
                </div>
                <div itemprop="text"><p>outer text</p></div>
            </div>"#,
        );
        let mut found = Vec::new();
        find_questions(&document, &mut found);
        let question = build_question(&found[0]);

        assert_eq!(question.name_markup.as_deref(), Some("inner title"));
        assert_eq!(question.text_markup.as_deref(), Some("<p>outer text</p>"));
    }

    #[test]
    fn test_consumption_is_exactly_once() {
        let document = page(
            r#"<div itemtype="https://schema.org/Question">
                <div itemprop="text"><p>Q</p></div>
                <div itemtype="https://schema.org/Answer">
                    <div itemprop="text"><p>A</p></div>
                </div>
            </div>"#,
        );
        let mut found = Vec::new();
        find_questions(&document, &mut found);
        for node in &found {
            build_question(node);
        }

        let mut remaining = Vec::new();
        find_questions(&document, &mut remaining);
        assert!(remaining.is_empty());
    }
}
