//! Line parsing and document assembly.

mod cv_parser;
mod options;

pub use cv_parser::CvParser;
pub use options::{DuplicateNamePolicy, OrphanPolicy, ParseOptions};
