//! 음절 하위 단위(초성/중성/종성)와 형태소 경계 표지
//!
//! 규칙 엔진이 패턴을 맞춰 보는 최소 단위입니다.

use std::fmt;

use crate::core::unicode::{
    choseong_char, choseong_index, jongseong_char, jongseong_index, jungseong_char,
    jungseong_index, CHOSEONG_IEUNG,
};

/// 형태소 경계 표지
///
/// 외부 형태소 분석기가 음절 바로 뒤에 붙이는 표지입니다.
/// 텍스트 표기는 `/P`, `/J`, `/E`, `/B` 입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// 용언 어간 + 어미 경계 (`/P`)
    VerbEnding,
    /// 조사 '의' (`/J`)
    Particle,
    /// ㄹ로 끝나는 관형사형 어미 (`/E`)
    ModifierEnding,
    /// 단위성 의존 명사 (`/B`)
    BoundNoun,
}

impl Marker {
    /// 모든 표지 종류
    pub const ALL: [Marker; 4] = [
        Marker::VerbEnding,
        Marker::Particle,
        Marker::ModifierEnding,
        Marker::BoundNoun,
    ];

    /// 표지 문자 (`/` 뒤에 오는 글자)
    pub fn tag(&self) -> char {
        match self {
            Marker::VerbEnding => 'P',
            Marker::Particle => 'J',
            Marker::ModifierEnding => 'E',
            Marker::BoundNoun => 'B',
        }
    }

    /// 표지 문자로부터 표지 종류 판별
    /// 알 수 없는 문자는 None (표지로 취급하지 않음)
    pub fn from_tag(c: char) -> Option<Marker> {
        match c {
            'P' => Some(Marker::VerbEnding),
            'J' => Some(Marker::Particle),
            'E' => Some(Marker::ModifierEnding),
            'B' => Some(Marker::BoundNoun),
            _ => None,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.tag())
    }
}

/// 단위 스트림의 원소
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// 초성 (인덱스 0~18)
    Onset(u32),
    /// 중성 (인덱스 0~20)
    Nucleus(u32),
    /// 종성 (인덱스 1~27)
    Coda(u32),
    /// 형태소 경계 표지
    Marker(Marker),
    /// 한글이 아닌 문자 (숫자, 영문, 문장부호, 공백 등)
    Other(char),
}

impl Unit {
    /// 조합형 자모 문자 하나를 단위로 변환
    /// 자모가 아니면 `Other`
    pub fn from_char(c: char) -> Unit {
        if let Some(i) = choseong_index(c) {
            Unit::Onset(i)
        } else if let Some(i) = jungseong_index(c) {
            Unit::Nucleus(i)
        } else if let Some(i) = jongseong_index(c) {
            Unit::Coda(i)
        } else {
            Unit::Other(c)
        }
    }

    /// 단위를 문자 하나로 표현 (표지는 문자 하나로 표현할 수 없으므로 None)
    pub fn to_char(&self) -> Option<char> {
        match *self {
            Unit::Onset(i) => choseong_char(i),
            Unit::Nucleus(i) => jungseong_char(i),
            Unit::Coda(i) => jongseong_char(i),
            Unit::Marker(_) => None,
            Unit::Other(c) => Some(c),
        }
    }

    /// 음가 없는 초성 ㅇ 인지 확인
    pub fn is_silent_onset(&self) -> bool {
        matches!(self, Unit::Onset(CHOSEONG_IEUNG))
    }

    /// 공백 문자인지 확인
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Unit::Other(c) if c.is_whitespace())
    }

    /// 경계 표지인지 확인
    pub fn is_marker(&self) -> bool {
        matches!(self, Unit::Marker(_))
    }

    /// 한글 자모(초성/중성/종성)인지 확인
    pub fn is_jamo(&self) -> bool {
        matches!(self, Unit::Onset(_) | Unit::Nucleus(_) | Unit::Coda(_))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Marker(m) => write!(f, "{}", m),
            other => match other.to_char() {
                Some(c) => write!(f, "{}", c),
                None => Ok(()),
            },
        }
    }
}
