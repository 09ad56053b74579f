//! 규칙 적용 전 단계 (숙어, 영어, 경계 표지, 숫자)

pub mod annotate;
pub mod english;
pub mod idioms;
pub mod numerals;

pub use annotate::{MorphAnalyzer, Morpheme, PosTagger, PreAnnotated, Tagger};
pub use english::{convert_english, CmuDict, PronunciationDictionary};
pub use idioms::IdiomList;
pub use numerals::{spell_numerals, KoreanNumeralSpeller, NumeralSpeller};
