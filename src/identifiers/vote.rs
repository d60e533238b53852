//! Majority-vote language tagging.
//!
//! Each retained question is classified on its most representative piece of
//! text; the page-level label is the most frequent per-question label.
use crate::error::Error;
use crate::pipelines::qarecords::types::Question;

use super::identifier::Identifier;

/// The text a question gets classified on: its text markup, else its name
/// markup, else the first answer text available.
fn voteable_text(question: &Question) -> Option<&String> {
    question
        .text_markup
        .as_ref()
        .or(question.name_markup.as_ref())
        .or_else(|| {
            question
                .answers
                .iter()
                .find_map(|answer| answer.text_markup.as_ref())
        })
}

/// Classify one question.
///
/// HTML entities are unescaped before classification. Returns [None] when
/// the question has no voteable text at all (such a question casts no vote)
/// or when the identifier declines to produce a label.
pub fn question_language<I>(question: &Question, identifier: &I) -> Result<Option<String>, Error>
where
    I: for<'a> Identifier<&'a str>,
{
    let markup = match voteable_text(question) {
        Some(markup) => markup,
        None => return Ok(None),
    };
    let unescaped = html_escape::decode_html_entities(markup);
    let identification = identifier.identify(unescaped.as_ref())?;
    Ok(identification.map(|id| id.label().to_string()))
}

/// The most frequent label, `"-"` when no votes were cast.
///
/// The tally is insertion-ordered: on a tie, the label observed first wins.
pub fn majority_language(labels: &[String]) -> String {
    let mut tally: Vec<(&String, usize)> = Vec::new();
    for label in labels {
        match tally.iter_mut().find(|(seen, _)| *seen == label) {
            Some((_, count)) => *count += 1,
            None => tally.push((label, 1)),
        }
    }

    let mut language = "-";
    let mut appearances = 0;
    for (label, count) in tally {
        if count > appearances {
            appearances = count;
            language = label;
        }
    }
    language.to_string()
}

#[cfg(test)]
mod tests {
    use crate::identifiers::identification::Identification;
    use crate::pipelines::qarecords::types::{Answer, Question};

    use super::*;

    /// Answers with the last word of whatever it is given.
    struct LastWord;

    impl<'a> Identifier<&'a str> for LastWord {
        fn identify(&self, sentence: &str) -> Result<Option<Identification>, Error> {
            Ok(sentence
                .split_whitespace()
                .last()
                .map(|word| Identification::new(word.to_string(), 1.0)))
        }
    }

    fn labels(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_majority() {
        assert_eq!(majority_language(&labels(&["en", "en", "fr"])), "en");
        assert_eq!(majority_language(&labels(&["fr", "en", "en"])), "en");
    }

    #[test]
    fn test_tie_goes_to_first_observed() {
        assert_eq!(majority_language(&labels(&["en", "fr"])), "en");
        assert_eq!(majority_language(&labels(&["fr", "en"])), "fr");
    }

    #[test]
    fn test_no_votes() {
        assert_eq!(majority_language(&[]), "-");
    }

    #[test]
    fn test_fallback_order() {
        let mut question = Question {
            text_markup: Some("vote text".to_string()),
            name_markup: Some("vote name".to_string()),
            answers: vec![Answer {
                text_markup: Some("vote answer".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };

        let label = question_language(&question, &LastWord).unwrap();
        assert_eq!(label.as_deref(), Some("text"));

        question.text_markup = None;
        let label = question_language(&question, &LastWord).unwrap();
        assert_eq!(label.as_deref(), Some("name"));

        question.name_markup = None;
        let label = question_language(&question, &LastWord).unwrap();
        assert_eq!(label.as_deref(), Some("answer"));
    }

    #[test]
    fn test_no_voteable_text_casts_no_vote() {
        let question = Question {
            answers: vec![Answer {
                status: Some("suggestedAnswer".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let label = question_language(&question, &LastWord).unwrap();
        assert_eq!(label, None);
    }

    #[test]
    fn test_entities_unescaped_before_classification() {
        let question = Question {
            text_markup: Some("fish &amp;chips".to_string()),
            ..Default::default()
        };
        let label = question_language(&question, &LastWord).unwrap();
        assert_eq!(label.as_deref(), Some("&chips"));
    }
}
