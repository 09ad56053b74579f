//! 한국어 표기 -> 발음 변환 (G2P)
//!
//! 표준 발음법 규칙을 자모 단위 치환으로 적용해 한글 문장을 소리 나는 대로 바꿉니다.
//!
//! # 사용 예시
//!
//! ```
//! use g2pk::{CmuDict, ConvertOptions, G2p, PreAnnotated};
//!
//! let g2p = G2p::builder()
//!     .tagger(PreAnnotated)
//!     .dictionary(CmuDict::default())
//!     .build()
//!     .unwrap();
//!
//! let options = ConvertOptions::default();
//! assert_eq!(g2p.convert("읽/P고", &options), "일꼬");
//! assert_eq!(g2p.convert("나의/J 책", &options), "나의 책");
//! assert_eq!(g2p.convert("나의/J 책", &ConvertOptions::descriptive()), "나에 책");
//! ```
//!
//! 형태소 분석기와 영어 발음 사전은 외부에서 주입합니다.
//! `PosTagger`는 분석 결과(`Morpheme` 목록)로 경계 표지를 붙이고,
//! `PreAnnotated`는 이미 표지가 붙은 입력을 그대로 사용합니다.

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod preprocess;
pub mod rules;
pub mod trace;

pub use config::{load_config, save_config, ConvertOptions, G2pConfig};
pub use core::{compose, decompose, normalize_vowels, Marker, Unit, UnitStream};
pub use engine::{Conversion, G2p, G2pBuilder};
pub use error::{G2pError, Result};
pub use preprocess::{
    CmuDict, IdiomList, KoreanNumeralSpeller, MorphAnalyzer, Morpheme, NumeralSpeller, PosTagger,
    PreAnnotated, PronunciationDictionary, Tagger,
};
pub use rules::{CitationMap, RuleTable};
pub use trace::TraceRecord;
