pub mod dictionary;
pub mod extractor;

pub use dictionary::{
    CharDictionary,
    CharReading,
    CompoundTable,
};
pub use extractor::{
    extract,
    HanjaExtractor,
};
