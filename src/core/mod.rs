//! 한글 음절 분해/조합 (Grapheme Codec)

pub mod codec;
pub mod composer;
pub mod jamo;
pub mod stream;
pub mod unicode;

pub use codec::{compose, decompose, normalize_vowels};
pub use jamo::{Marker, Unit};
pub use stream::UnitStream;
