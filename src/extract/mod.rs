/*! DOM-to-record extraction engine.

Walks a page DOM annotated with schema.org microdata, reconstructs the
nesting of `Question`/`Answer`/`Person` entities even when the markup is
malformed, and produces the record types from
[crate::pipelines::qarecords::types].

The page tree is mutated destructively along the way: sanitization unwraps
non-text tags and the entity walk detaches consumed nodes. A page's DOM is
owned by its extraction pass and discarded afterwards.
!*/
pub mod collect;
pub mod entity;
pub mod locate;
pub mod sanitize;
pub mod walk;

pub use entity::Entity;
pub use locate::find_itemprop;
pub use sanitize::{sanitize, TEXT_TAGS};
