//! 단위 스트림
//!
//! 한 문장을 초성/중성/종성 단위와 경계 표지의 나열로 표현합니다.
//! 각 규칙은 스트림을 받아 새 스트림을 돌려주며, 기존 스트림을 고치지 않습니다.

use std::fmt;

use crate::core::jamo::{Marker, Unit};
use crate::core::unicode::decompose_syllable;

/// 초성/중성/종성 단위와 경계 표지의 나열
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UnitStream {
    units: Vec<Unit>,
}

impl UnitStream {
    /// 빈 스트림 생성
    pub fn new() -> Self {
        Self { units: Vec::new() }
    }

    /// 텍스트를 단위 스트림으로 분해
    ///
    /// - 완성형 음절은 초성, 중성, (종성) 순서로 분해
    /// - 조합형 자모는 해당 단위로 변환
    /// - 한글 자모 바로 뒤의 `/P`, `/J`, `/E`, `/B`는 경계 표지로 인식
    /// - 나머지 문자는 `Unit::Other`로 그대로 통과
    pub fn parse(text: &str) -> Self {
        let mut units = Vec::with_capacity(text.len());
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            if let Some((cho, jung, jong)) = decompose_syllable(c) {
                units.push(Unit::Onset(cho));
                units.push(Unit::Nucleus(jung));
                if jong != 0 {
                    units.push(Unit::Coda(jong));
                }
                continue;
            }

            // 경계 표지: 한글 자모 뒤에 붙은 "/X"만 인정
            if c == '/' && units.last().is_some_and(Unit::is_jamo) {
                if let Some(marker) = chars.peek().copied().and_then(Marker::from_tag) {
                    chars.next();
                    units.push(Unit::Marker(marker));
                    continue;
                }
            }

            units.push(Unit::from_char(c));
        }

        Self { units }
    }

    /// 단위 목록
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// 단위 개수
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// 비어 있는지 확인
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// 경계 표지가 남아 있는지 확인
    pub fn has_markers(&self) -> bool {
        self.units.iter().any(Unit::is_marker)
    }

    /// 모든 경계 표지를 제거한 새 스트림
    pub fn without_markers(&self) -> Self {
        self.units.iter().filter(|u| !u.is_marker()).copied().collect()
    }

    /// 각 단위에 함수를 적용한 새 스트림
    pub fn map_units(&self, f: impl Fn(Unit) -> Unit) -> Self {
        self.units.iter().map(|&u| f(u)).collect()
    }
}

impl From<Vec<Unit>> for UnitStream {
    fn from(units: Vec<Unit>) -> Self {
        Self { units }
    }
}

impl FromIterator<Unit> for UnitStream {
    fn from_iter<I: IntoIterator<Item = Unit>>(iter: I) -> Self {
        Self {
            units: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for UnitStream {
    type Item = Unit;
    type IntoIter = std::vec::IntoIter<Unit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.into_iter()
    }
}

/// 조합형 자모 문자열로 출력 (표지는 `/P` 등 텍스트 표기)
impl fmt::Display for UnitStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for unit in &self.units {
            write!(f, "{}", unit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_syllables() {
        let stream = UnitStream::parse("한글");
        assert_eq!(
            stream.units(),
            &[
                Unit::Onset(18),
                Unit::Nucleus(0),
                Unit::Coda(4),
                Unit::Onset(0),
                Unit::Nucleus(18),
                Unit::Coda(8),
            ]
        );
        assert_eq!(stream.to_string(), "\u{1112}\u{1161}\u{11ab}\u{1100}\u{1173}\u{11af}");
    }

    #[test]
    fn test_parse_passthrough() {
        let stream = UnitStream::parse("a1 가!");
        assert_eq!(stream.len(), 6);
        assert_eq!(stream.units()[0], Unit::Other('a'));
        assert_eq!(stream.units()[2], Unit::Other(' '));
        assert_eq!(stream.units()[5], Unit::Other('!'));
    }

    #[test]
    fn test_parse_markers() {
        let stream = UnitStream::parse("나의/J 읽/P고");
        assert!(stream.units().contains(&Unit::Marker(Marker::Particle)));
        assert!(stream.units().contains(&Unit::Marker(Marker::VerbEnding)));
        assert_eq!(stream.units().iter().filter(|u| u.is_marker()).count(), 2);
        assert!(stream.to_string().contains("\u{1174}/J"));
    }

    #[test]
    fn test_slash_without_hangul_is_text() {
        // 한글 뒤가 아니거나 알 수 없는 표지 문자는 일반 문자
        let stream = UnitStream::parse("A/P 가/X");
        assert!(!stream.has_markers());
        assert_eq!(stream.to_string(), "A/P \u{1100}\u{1161}/X");
    }

    #[test]
    fn test_without_markers() {
        let stream = UnitStream::parse("갈/E 것");
        assert!(stream.has_markers());
        let stripped = stream.without_markers();
        assert!(!stripped.has_markers());
        assert_eq!(stripped.to_string(), "\u{1100}\u{1161}\u{11af} \u{1100}\u{1165}\u{11ba}");
    }

    #[test]
    fn test_empty() {
        let stream = UnitStream::parse("");
        assert!(stream.is_empty());
        assert_eq!(stream, UnitStream::new());
    }
}
