//! Infrastructure - source-language specific extractors

mod php_extractor;

pub use php_extractor::PhpClassExtractor;
