//! 음절 조합 상태 기계
//!
//! 규칙 적용이 끝난 단위 스트림을 완성형 음절로 되돌립니다.
//! 초성 없이 나온 중성에는 음가 없는 초성 ㅇ을 채우고,
//! 음절을 이루지 못한 초성/종성은 조합형 자모 그대로 출력합니다.

use crate::core::jamo::Unit;
use crate::core::unicode::{choseong_char, compose_syllable, jongseong_char, CHOSEONG_IEUNG};

/// 조합 중인 음절
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Pending {
    #[default]
    Nothing,
    Onset(u32),
    /// 초성 + 중성
    Open(u32, u32),
    /// 초성 + 중성 + 종성
    Closed(u32, u32, u32),
}

impl Pending {
    fn to_char(self) -> Option<char> {
        match self {
            Pending::Nothing => None,
            Pending::Onset(cho) => choseong_char(cho),
            Pending::Open(cho, jung) => compose_syllable(cho, jung, 0),
            Pending::Closed(cho, jung, jong) => compose_syllable(cho, jung, jong),
        }
    }
}

/// 단위 스트림 -> 음절 텍스트
#[derive(Debug, Default)]
pub struct SyllableComposer {
    pending: Pending,
    output: String,
}

impl SyllableComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, unit: Unit) {
        self.pending = match (self.pending, unit) {
            (Pending::Onset(cho), Unit::Nucleus(jung)) => Pending::Open(cho, jung),
            (Pending::Open(cho, jung), Unit::Coda(jong)) => Pending::Closed(cho, jung, jong),
            (_, Unit::Onset(cho)) => {
                self.commit();
                Pending::Onset(cho)
            }
            // 초성 없는 중성
            (_, Unit::Nucleus(jung)) => {
                self.commit();
                Pending::Open(CHOSEONG_IEUNG, jung)
            }
            // 붙을 음절이 없는 종성
            (_, Unit::Coda(jong)) => {
                self.commit();
                self.output.extend(jongseong_char(jong));
                Pending::Nothing
            }
            (_, Unit::Marker(marker)) => {
                self.commit();
                self.output.push_str(&marker.to_string());
                Pending::Nothing
            }
            (_, Unit::Other(c)) => {
                self.commit();
                self.output.push(c);
                Pending::Nothing
            }
        };
    }

    fn commit(&mut self) {
        self.output.extend(self.pending.to_char());
        self.pending = Pending::Nothing;
    }

    pub fn finish(mut self) -> String {
        self.commit();
        self.output
    }
}
