pub mod test_codec;
pub mod test_glossary;
