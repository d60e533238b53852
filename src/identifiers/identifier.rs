/*! Identifier trait

All identifiers should implement [Identifier] to be useable in processing and pipelines.
!*/
use crate::error::Error;

use super::identification::Identification;

pub trait Identifier<T> {
    /// returns a language identification for the provided text.
    fn identify(&self, sentence: T) -> Result<Option<Identification>, Error>;
}
