/*! Language identification

Holds an [Identifier] trait for implementing other ones.

The current identifier used is [fasttext](https://fasttext.cc) !*/
pub mod fasttext;
pub mod identification;
pub mod identifier;
pub mod vote;

pub use identification::Identification;
pub use identifier::Identifier;
