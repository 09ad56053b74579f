//! 단위 스트림 재작성 규칙
//!
//! 모든 규칙 집합(특수 규칙, 규칙표, 연음 규칙)이 공유하는 작은 해석기입니다.
//!
//! # 표기법
//!
//! 패턴과 치환은 문자열 표기로 작성하고 생성 시점에 타입이 있는 원소로 변환됩니다.
//!
//! - 조합형 자모(`ᄀ`, `ᅡ`, `ᆨ`)는 해당 단위 하나
//! - 완성형 음절(`걸`)은 초성, 중성, (종성) 단위로 펼쳐짐
//! - `/P`, `/J`, `/E`, `/B`는 경계 표지
//! - `[ᄌᄍᄎ]`는 나열된 단위 중 하나, `[^ᄋᄒ]`는 나열되지 않은 단위 하나
//! - 치환의 `$1`~`$9`는 패턴의 해당 번째 원소가 맞춘 단위를 그대로 복사
//! - 그 외 문자는 그대로 `Unit::Other`
//!
//! # 적용 방식
//!
//! 왼쪽부터 훑으며 겹치지 않는 모든 일치를 한 번의 패스로 치환합니다.
//! 치환 결과는 같은 패스에서 다시 검사하지 않습니다.

use std::fmt;

use crate::core::jamo::{Marker, Unit};
use crate::core::stream::UnitStream;
use crate::core::unicode::decompose_syllable;
use crate::error::{G2pError, Result};

/// 단위 하나를 맞추는 패턴 원소
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// 정확히 이 단위
    Exact(Unit),
    /// 나열된 단위 중 하나
    AnyOf(Vec<Unit>),
    /// 나열되지 않은 단위 하나
    NoneOf(Vec<Unit>),
}

impl Element {
    fn matches(&self, unit: &Unit) -> bool {
        match self {
            Element::Exact(u) => u == unit,
            Element::AnyOf(set) => set.contains(unit),
            Element::NoneOf(set) => !set.contains(unit),
        }
    }
}

/// 일치 위치 주변에 대한 조건 (소비하지 않음)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// 바로 앞에 공백이 아닌 단위가 있어야 함 (스트림 시작은 불가)
    AfterNonSpace,
    /// 뒤따르는 첫 자모(경계 표지는 건너뜀)가 없거나 나열되지 않은 단위여야 함
    NotBefore(Vec<Unit>),
    /// 바로 뒤가 스트림 끝이거나 자모가 아님 (공백, 문장 부호 등)
    AtWordEnd,
}

impl Context {
    fn holds(&self, units: &[Unit], start: usize, end: usize) -> bool {
        match self {
            Context::AfterNonSpace => start > 0 && !units[start - 1].is_whitespace(),
            Context::NotBefore(set) => units[end..]
                .iter()
                .find(|u| !u.is_marker())
                .map_or(true, |u| !set.contains(u)),
            Context::AtWordEnd => units.get(end).map_or(true, |u| !u.is_jamo()),
        }
    }
}

/// 치환 결과의 원소
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    /// 이 단위를 출력
    Unit(Unit),
    /// 패턴의 n번째(0부터) 원소가 맞춘 단위를 복사
    Keep(usize),
}

/// 패턴 -> 치환 규칙 하나
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pattern: Vec<Element>,
    contexts: Vec<Context>,
    replacement: Vec<Emit>,
    /// 디버깅용 원래 표기
    source: String,
}

impl Rewrite {
    /// 표기법 문자열로부터 규칙 생성
    pub fn parse(pattern: &str, replacement: &str) -> Result<Self> {
        let elements = parse_pattern(pattern)?;
        if elements.is_empty() {
            return Err(G2pError::pattern(pattern, "empty pattern"));
        }
        let emits = parse_replacement(replacement)?;
        if let Some(Emit::Keep(i)) = emits
            .iter()
            .find(|e| matches!(e, Emit::Keep(i) if *i >= elements.len()))
        {
            return Err(G2pError::pattern(
                replacement,
                format!("${} refers past the {}-unit pattern", i + 1, elements.len()),
            ));
        }
        Ok(Self {
            pattern: elements,
            contexts: Vec::new(),
            replacement: emits,
            source: format!("{pattern} -> {replacement}"),
        })
    }

    /// 주변 조건 추가
    pub fn with_context(mut self, context: Context) -> Self {
        self.contexts.push(context);
        self
    }

    /// 패턴 원소
    pub fn pattern(&self) -> &[Element] {
        &self.pattern
    }

    /// 주어진 위치에서 패턴이 일치하는지 확인
    pub fn matches_at(&self, units: &[Unit], pos: usize) -> bool {
        let end = pos + self.pattern.len();
        if end > units.len() {
            return false;
        }
        self.pattern
            .iter()
            .zip(&units[pos..end])
            .all(|(element, unit)| element.matches(unit))
            && self.contexts.iter().all(|c| c.holds(units, pos, end))
    }

    /// 스트림 전체에 한 번 적용 (왼쪽부터, 겹치지 않게)
    pub fn apply(&self, stream: &UnitStream) -> UnitStream {
        let units = stream.units();
        let mut out = Vec::with_capacity(units.len());
        let mut pos = 0;

        while pos < units.len() {
            if self.matches_at(units, pos) {
                let matched = &units[pos..pos + self.pattern.len()];
                out.extend(self.replacement.iter().map(|emit| match *emit {
                    Emit::Unit(u) => u,
                    Emit::Keep(i) => matched[i],
                }));
                pos += self.pattern.len();
            } else {
                out.push(units[pos]);
                pos += 1;
            }
        }

        UnitStream::from(out)
    }
}

impl fmt::Display for Rewrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// 규칙 목록을 순서대로 적용
pub fn apply_all(rewrites: &[Rewrite], stream: &UnitStream) -> UnitStream {
    rewrites
        .iter()
        .fold(stream.clone(), |acc, rewrite| rewrite.apply(&acc))
}

/// 문자 하나를 단위로 펼침 (완성형 음절은 여러 단위)
fn push_char_units(c: char, out: &mut Vec<Unit>) {
    if let Some((cho, jung, jong)) = decompose_syllable(c) {
        out.push(Unit::Onset(cho));
        out.push(Unit::Nucleus(jung));
        if jong != 0 {
            out.push(Unit::Coda(jong));
        }
    } else {
        out.push(Unit::from_char(c));
    }
}

/// 패턴 표기 해석
pub fn parse_pattern(notation: &str) -> Result<Vec<Element>> {
    let mut elements = Vec::new();
    let mut chars = notation.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '[' => {
                let negated = chars.next_if_eq(&'^').is_some();
                let mut set = Vec::new();
                loop {
                    match chars.next() {
                        Some(']') => break,
                        Some(member) => {
                            if decompose_syllable(member).is_some() {
                                return Err(G2pError::pattern(
                                    notation,
                                    format!("class member `{member}` must be a single jamo"),
                                ));
                            }
                            set.push(Unit::from_char(member));
                        }
                        None => return Err(G2pError::pattern(notation, "unclosed `[`")),
                    }
                }
                if set.is_empty() {
                    return Err(G2pError::pattern(notation, "empty class"));
                }
                elements.push(if negated {
                    Element::NoneOf(set)
                } else {
                    Element::AnyOf(set)
                });
            }
            '/' => match chars.peek().copied().and_then(Marker::from_tag) {
                Some(marker) => {
                    chars.next();
                    elements.push(Element::Exact(Unit::Marker(marker)));
                }
                None => elements.push(Element::Exact(Unit::Other('/'))),
            },
            _ => {
                let mut units = Vec::with_capacity(3);
                push_char_units(c, &mut units);
                elements.extend(units.into_iter().map(Element::Exact));
            }
        }
    }

    Ok(elements)
}

/// 치환 표기 해석
pub fn parse_replacement(notation: &str) -> Result<Vec<Emit>> {
    let mut emits = Vec::new();
    let mut chars = notation.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '$' => {
                let index = chars
                    .next()
                    .and_then(|d| d.to_digit(10))
                    .filter(|&d| d >= 1)
                    .ok_or_else(|| G2pError::pattern(notation, "`$` must be followed by 1-9"))?;
                emits.push(Emit::Keep(index as usize - 1));
            }
            '[' | ']' => {
                return Err(G2pError::pattern(notation, "classes are not allowed in a replacement"));
            }
            '/' => match chars.peek().copied().and_then(Marker::from_tag) {
                Some(marker) => {
                    chars.next();
                    emits.push(Emit::Unit(Unit::Marker(marker)));
                }
                None => emits.push(Emit::Unit(Unit::Other('/'))),
            },
            _ => {
                let mut units = Vec::with_capacity(3);
                push_char_units(c, &mut units);
                emits.extend(units.into_iter().map(Emit::Unit));
            }
        }
    }

    Ok(emits)
}
