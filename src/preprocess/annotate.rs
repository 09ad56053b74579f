//! 경계 표지 붙이기 (형태소 분석 결과 기반)
//!
//! 품사 태그에 따라 음절 뒤에 표지를 붙입니다.
//!
//! | 조건 | 표지 |
//! |------|------|
//! | 조사(J) `의` | `/J` |
//! | 어미(E)로 끝나는 음절의 받침이 ㄹ | `/E` |
//! | 용언(V)으로 끝나는 음절의 받침이 ㄴ, ㄵ, ㅁ, ㄻ, ㄺ, ㄼ, ㄾ | `/P` |
//! | 단위성 의존명사(NNBC) | `/B` |

use crate::core::jamo::Marker;
use crate::core::unicode::decompose_syllable;

/// 텍스트에 경계 표지를 붙이는 외부 구성요소
pub trait Tagger: Send + Sync {
    fn tag(&self, text: &str) -> String;
}

/// 형태소 하나 (표면형, 품사 태그)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    pub surface: String,
    /// 세종 품사 태그, 복합 태그는 `VV+ETM`처럼 `+`로 연결
    pub tag: String,
}

impl Morpheme {
    pub fn new(surface: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            tag: tag.into(),
        }
    }
}

/// 형태소 분석기
pub trait MorphAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Vec<Morpheme>;
}

impl<F> MorphAnalyzer for F
where
    F: Fn(&str) -> Vec<Morpheme> + Send + Sync,
{
    fn analyze(&self, text: &str) -> Vec<Morpheme> {
        self(text)
    }
}

/// 형태소 분석기 결과로 표지를 붙이는 태거
#[derive(Debug, Clone, Default)]
pub struct PosTagger<A> {
    analyzer: A,
}

// 종성 인덱스
const JONG_RIEUL: u32 = 8;
const STEM_CODAS: [u32; 7] = [4, 5, 16, 10, 9, 11, 13];

impl<A: MorphAnalyzer> PosTagger<A> {
    pub fn new(analyzer: A) -> Self {
        Self { analyzer }
    }

    /// 형태소마다 마지막 글자에만 태그 한 글자 (`_`는 태그 없음)
    fn char_tags(morphemes: &[Morpheme]) -> Vec<char> {
        let mut tags = Vec::new();
        for morpheme in morphemes {
            let last_tag = morpheme.tag.rsplit('+').next().unwrap_or("");
            let tag = if last_tag == "NNBC" {
                Marker::BoundNoun.tag()
            } else {
                last_tag.chars().next().unwrap_or('_')
            };
            let len = morpheme.surface.chars().count();
            tags.extend(std::iter::repeat('_').take(len.saturating_sub(1)));
            if len > 0 {
                tags.push(tag);
            }
        }
        tags
    }

    fn marker_for(c: char, tag: char) -> Option<Marker> {
        let coda = decompose_syllable(c).map(|(_, _, jong)| jong);
        match tag {
            'J' if c == '의' => Some(Marker::Particle),
            'E' if coda == Some(JONG_RIEUL) => Some(Marker::ModifierEnding),
            'V' if coda.is_some_and(|jong| STEM_CODAS.contains(&jong)) => Some(Marker::VerbEnding),
            'B' => Some(Marker::BoundNoun),
            _ => None,
        }
    }
}

impl<A: MorphAnalyzer> Tagger for PosTagger<A> {
    fn tag(&self, text: &str) -> String {
        let morphemes = self.analyzer.analyze(text);

        // 분석 결과가 입력 전체를 덮지 못하면 그대로 반환
        let covered: String = morphemes.iter().map(|m| m.surface.as_str()).collect();
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        if covered != compact {
            log::debug!("형태소 분석 결과가 입력과 다름: {}", text);
            return text.to_string();
        }

        let mut tags = Self::char_tags(&morphemes).into_iter();
        let mut out = String::with_capacity(text.len() + 8);
        for c in text.chars() {
            out.push(c);
            if c.is_whitespace() {
                continue;
            }
            let tag = tags.next().unwrap_or('_');
            if let Some(marker) = Self::marker_for(c, tag) {
                out.push_str(&marker.to_string());
            }
        }
        out
    }
}

/// 이미 표지가 붙은 텍스트를 그대로 사용
#[derive(Debug, Clone, Copy, Default)]
pub struct PreAnnotated;

impl Tagger for PreAnnotated {
    fn tag(&self, text: &str) -> String {
        text.to_string()
    }
}
