//! Q&A record generation pipeline.
//!
//! Input is a folder of per-archive batch files, each an array of archived
//! pages annotated with schema.org microdata.
//!
//! # Processing
//! 1. Each page's markup is parsed into a DOM tree owned by that page's pass.
//! 1. Question roots are discovered flat, then each one is consumed by a
//!    bounded recursive walk that rebuilds its answers and prunes stacked
//!    markup ([crate::extract::walk]).
//! 1. Questions with no name, text or answered text are discarded.
//! 1. The remaining ones vote on the page language
//!    ([crate::identifiers::vote]).
//! 1. One line-delimited JSON record per page with retained questions is
//!    appended to `<dst>/<archive>.jsonl`.
//!
//! Pages are independent and processed one at a time; a page contributing
//! zero questions is silent by design, while a classifier failure aborts the
//! run.
use std::path::PathBuf;

use glob::glob;
use kuchiki::traits::TendrilSink;
use log::{debug, error, info};

use crate::error::Error;
use crate::extract::walk;
use crate::identifiers::fasttext::FastText;
use crate::identifiers::vote;
use crate::identifiers::Identifier;
use crate::io::RecordWriter;
use crate::pipelines::pipeline::Pipeline;
use crate::sources::batch::{Batch, Page};

use super::types::PageRecord;

pub struct QaRecords {
    src: PathBuf,
    dst: PathBuf,
    lid_path: PathBuf,
}

impl QaRecords {
    pub fn new(src: PathBuf, dst: PathBuf, lid_path: PathBuf) -> Self {
        Self { src, dst, lid_path }
    }

    /// Extract one page into a record.
    ///
    /// Returns [None] when no question survives the retention filter: such a
    /// page contributes nothing. Classifier errors propagate.
    pub fn process_page<I>(
        page: &Page,
        warc_id: &str,
        identifier: &I,
    ) -> Result<Option<PageRecord>, Error>
    where
        I: for<'a> Identifier<&'a str>,
    {
        let root = kuchiki::parse_html().one(page.mhtml.as_str());

        let mut question_roots = Vec::new();
        walk::find_questions(&root, &mut question_roots);

        let mut questions = Vec::new();
        let mut labels = Vec::new();
        for node in &question_roots {
            let question = walk::build_question(node);
            if !question.has_content() {
                continue;
            }
            if let Some(label) = vote::question_language(&question, identifier)? {
                labels.push(label);
            }
            questions.push(question);
        }

        if questions.is_empty() {
            return Ok(None);
        }

        let fasttext_language = vote::majority_language(&labels);
        Ok(Some(PageRecord::new(
            page.language.clone(),
            fasttext_language,
            page.uri.clone(),
            warc_id.to_string(),
            questions,
        )))
    }
}

impl Pipeline<()> for QaRecords {
    fn run(&self) -> Result<(), Error> {
        let cls = FastText::new(&self.lid_path, 1, 0.0)?;

        let pattern = self.src.join("*.json");
        let pattern = pattern
            .to_str()
            .ok_or_else(|| Error::Custom(format!("invalid source path: {:?}", self.src)))?;

        for entry in glob(pattern)? {
            let path = entry?;
            info!("processing batch {:?}", &path);

            // a batch that fails to read is skipped, not fatal
            let batch = match Batch::from_path(&path) {
                Ok(batch) => batch,
                Err(e) => {
                    error!("could not read batch {:?}: {:?}", &path, e);
                    continue;
                }
            };

            let warc_id = batch.warc_id().to_string();
            let dst = self.dst.join(format!("{}.jsonl", &warc_id));
            let mut writer = RecordWriter::from_path(&dst)?;

            let (mut pages, mut records) = (0usize, 0usize);
            for page in batch {
                pages += 1;
                match Self::process_page(&page, &warc_id, &cls)? {
                    Some(record) => {
                        writer.write_single(&record)?;
                        records += 1;
                    }
                    None => debug!("no questions retained for {}", page.uri),
                }
            }

            info!("{}: {} records out of {} pages", warc_id, records, pages);
        }

        Ok(())
    }
}
