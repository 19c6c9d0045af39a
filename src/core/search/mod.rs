//! Search layer: term index, span highlighter and lookup service.

pub mod highlight;
pub mod index;
pub mod lookup;

pub use index::TermIndex;
pub use lookup::LookupService;
