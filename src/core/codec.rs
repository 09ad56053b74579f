//! 한글 음절 <-> 단위 스트림 변환기

use crate::core::composer::SyllableComposer;
use crate::core::jamo::Unit;
use crate::core::stream::UnitStream;

/// 텍스트를 단위 스트림으로 분해
/// 한글이 아닌 문자는 그대로 유지
pub fn decompose(text: &str) -> UnitStream {
    UnitStream::parse(text)
}

/// 단위 스트림을 완성형 음절 텍스트로 조합
pub fn compose(stream: &UnitStream) -> String {
    let mut fsm = SyllableComposer::new();
    for &unit in stream.units() {
        fsm.feed(unit);
    }
    fsm.finish()
}

/// 현대 구어에서 구별되지 않는 모음을 하나로 통일
/// ㅐ->ㅔ, ㅒ->ㅖ, ㅙ->ㅚ, ㅞ->ㅚ
pub fn normalize_vowels(stream: &UnitStream) -> UnitStream {
    stream.map_units(|unit| match unit {
        Unit::Nucleus(1) => Unit::Nucleus(5),
        Unit::Nucleus(3) => Unit::Nucleus(7),
        Unit::Nucleus(10) | Unit::Nucleus(15) => Unit::Nucleus(11),
        other => other,
    })
}
