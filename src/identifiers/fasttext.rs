//! Fasttext identifier
use std::path::Path;

use fasttext::FastText as FastTextLib;

use crate::error::Error;

use super::identification::Identification;
use super::identifier::Identifier;

/// Holds a [fasttext::FastText] instance and its parameters:
/// - k, number of predicted languages on a sentence
/// - threshold, prediction threshold
pub struct FastText {
    predictor: FastTextLib,
    pub k: i32,
    pub threshold: f32,
}

impl FastText {
    /// Create a new fasttext classifier allowing to identify
    /// language of strings.
    ///
    /// - [Self::k] is set to 1
    /// - [Self::threshold] is set to 0, so that a best guess is always
    ///   produced (majority voting needs a label per question, however
    ///   unsure)
    ///
    /// **Having `lid.176.bin` at `.` is mandatory**
    ///
    /// # Errors
    /// Propagates [fasttext::FastText] errors.
    pub fn new_lid() -> Result<Self, Error> {
        Self::new(Path::new("lid.176.bin"), 1, 0.0)
    }

    /// Create a new fasttext classifier.
    ///
    /// filename has to be a path to a `bin` file.
    ///
    /// See [fasttext::FastText::predict] for other parameters explanation
    pub fn new(filename: &Path, k: i32, threshold: f32) -> Result<Self, Error> {
        let mut predictor = FastTextLib::new();
        let filename_str = filename.to_str();
        match filename_str {
            None => Err(Error::Custom(format!(
                "invalid filepath for lid: {:?}",
                filename
            ))),
            Some(filename) => {
                predictor.load_model(filename).map_err(Error::FastText)?;
                Ok(Self {
                    predictor,
                    k,
                    threshold,
                })
            }
        }
    }
}

impl Identifier<&str> for FastText {
    fn identify(&self, sentence: &str) -> Result<Option<Identification>, Error> {
        // filter out unicode nulls and newlines:
        // both crash the underlying C++ tokenizer
        let sentence = sentence
            .replace(char::from(0), " ")
            .replace(['\n', '\r'], " ");
        let predictions = self
            .predictor
            .predict(&sentence, self.k, self.threshold)
            .map_err(Error::FastText)?;

        match predictions.into_iter().next() {
            Some(prediction) => Ok(Some(prediction.into())),
            None => Ok(None),
        }
    }
}
