//! Page batches.
//!
//! The upstream preprocessor emits one JSON file per source archive, holding
//! an array of page objects: the page markup reduced to its Question
//! subtrees, the declared language, the page URI and the crawler-reported
//! address. The archive identifier carried into the records is the batch
//! file stem.
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One archived page, as stored in a batch file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub mhtml: String,
    pub language: String,
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

/// A batch of pages sharing a source archive.
#[derive(Debug)]
pub struct Batch {
    warc_id: String,
    pages: Vec<Page>,
}

impl Batch {
    /// Read a batch file, deriving the archive identifier from its stem.
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let warc_id = src
            .file_stem()
            .and_then(OsStr::to_str)
            .ok_or_else(|| Error::Custom(format!("invalid batch filename: {:?}", src)))?
            .to_string();

        let file = File::open(src)?;
        let pages = serde_json::from_reader(BufReader::new(file))?;

        Ok(Self { warc_id, pages })
    }

    /// Get the batch's source-archive identifier.
    pub fn warc_id(&self) -> &str {
        &self.warc_id
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl IntoIterator for Batch {
    type Item = Page;
    type IntoIter = std::vec::IntoIter<Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crawl-2021-10.json");
        let mut file = File::create(&path).unwrap();
        file.write_all(
            br#"[{"mhtml":"<div></div>","language":"en","uri":"https://example.com/q","ip_address":"127.0.0.1"},
                {"mhtml":"<p></p>","language":"-","uri":"https://example.com/r"}]"#,
        )
        .unwrap();

        let batch = Batch::from_path(&path).unwrap();
        assert_eq!(batch.warc_id(), "crawl-2021-10");
        assert_eq!(batch.len(), 2);

        let pages: Vec<Page> = batch.into_iter().collect();
        assert_eq!(pages[0].language, "en");
        assert_eq!(pages[1].ip_address, None);
    }

    #[test]
    fn test_malformed_batch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"not json").unwrap();

        assert!(Batch::from_path(&path).is_err());
    }
}
