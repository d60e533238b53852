/*!
# IO utilities

Record saving. Reading of batches lives in [crate::sources].
!*/
pub mod writer;

pub use writer::RecordWriter;
