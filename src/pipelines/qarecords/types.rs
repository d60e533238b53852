//! Record types for extracted Q&A pages.
//!
//! Field presence is sparse on purpose: optional fields are omitted from the
//! serialized record, never written as null or empty. Count and date values
//! are kept as the raw strings found in the markup; downstream consumers
//! coerce them.
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A question entity together with its answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_markup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_markup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upvote_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downvote_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(rename = "Answers", default)]
    pub answers: Vec<Answer>,
}

impl Question {
    /// Retention test: a question record is worth keeping only when it has
    /// name markup, text markup, or at least one answer with text markup.
    pub fn has_content(&self) -> bool {
        self.name_markup.is_some()
            || self.text_markup.is_some()
            || self.answers.iter().any(|answer| answer.text_markup.is_some())
    }
}

/// An answer entity.
///
/// `status` is the raw `itemprop` value found on the answer root
/// (`acceptedAnswer`, `suggestedAnswer`, or whatever the page used),
/// uninterpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_markup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upvote_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downvote_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// One line-delimited JSON record per archived page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "Fasttext_language")]
    pub fasttext_language: String,
    #[serde(rename = "URI")]
    pub uri: String,
    #[serde(rename = "UUID")]
    pub uuid: String,
    #[serde(rename = "WARC_ID")]
    pub warc_id: String,
    #[serde(rename = "Questions")]
    pub questions: Vec<Question>,
}

impl PageRecord {
    /// Assemble a record, assigning it a fresh identifier.
    pub fn new(
        language: String,
        fasttext_language: String,
        uri: String,
        warc_id: String,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            language,
            fasttext_language,
            uri,
            uuid: Uuid::new_v4().to_string(),
            warc_id,
            questions,
        }
    }
}
