mod language;
mod table;

pub use language::{BASE_LANGUAGE, Language, LanguageError, print_languages};
pub use table::{Key, Lookup, lookup, t, t_with};
