//! 한글 코드포인트 계산
//!
//! 완성형 음절(가~힣)과 첫가끝 자모(U+1100 블록)를 인덱스로 오갑니다.
//! 인덱스는 모두 유니코드 배열 순서를 따릅니다.
//!
//! 종성 인덱스: 없음(0) ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ㄺ(9)
//! ㄻ(10) ㄼ(11) ㄽ(12) ㄾ(13) ㄿ(14) ㅀ(15) ㅁ(16) ㅂ(17) ㅄ(18) ㅅ(19)
//! ㅆ(20) ㅇ(21) ㅈ(22) ㅊ(23) ㅋ(24) ㅌ(25) ㅍ(26) ㅎ(27)

use std::ops::RangeInclusive;

const SYLLABLES: RangeInclusive<u32> = 0xAC00..=0xD7A3;

const ONSET_FIRST: u32 = 0x1100;
const NUCLEUS_FIRST: u32 = 0x1161;
// 종성 인덱스 1이 U+11A8
const CODA_OFFSET: u32 = 0x11A7;

pub const CHOSEONG_COUNT: u32 = 19;
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 없음(0) 포함
pub const JONGSEONG_COUNT: u32 = 28;

/// 음가 없는 초성 ㅇ
pub const CHOSEONG_IEUNG: u32 = 11;

/// 종성 -> 같은 자음의 초성 (겹받침, ㄳ 등은 없음)
const CODA_AS_ONSET: [Option<u32>; JONGSEONG_COUNT as usize] = [
    None,
    Some(0),
    Some(1),
    None,
    Some(2),
    None,
    None,
    Some(3),
    Some(5),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some(6),
    Some(7),
    None,
    Some(9),
    Some(10),
    Some(11),
    Some(12),
    Some(14),
    Some(15),
    Some(16),
    Some(17),
    Some(18),
];

/// 겹받침 (종성, 앞 종성, 뒤 자음의 초성)
const CLUSTERS: [(u32, u32, u32); 11] = [
    (3, 1, 9),
    (5, 4, 12),
    (6, 4, 18),
    (9, 8, 0),
    (10, 8, 6),
    (11, 8, 7),
    (12, 8, 9),
    (13, 8, 16),
    (14, 8, 17),
    (15, 8, 18),
    (18, 17, 9),
];

/// 이중 모음 (앞 모음, 뒤 모음, 결과)
const DIPHTHONGS: [(u32, u32, u32); 7] = [
    (8, 0, 9),
    (8, 1, 10),
    (8, 20, 11),
    (13, 4, 14),
    (13, 5, 15),
    (13, 20, 16),
    (18, 20, 19),
];

/// 예사소리 -> 된소리 (ㄱ ㄷ ㅂ ㅅ ㅈ)
const TENSE_PAIRS: [(u32, u32); 5] = [(0, 1), (3, 4), (7, 8), (9, 10), (12, 13)];

/// 인덱스 세 개로 음절을 만듦 (범위를 벗어나면 None)
pub fn compose_syllable(cho: u32, jung: u32, jong: u32) -> Option<char> {
    let in_range = cho < CHOSEONG_COUNT && jung < JUNGSEONG_COUNT && jong < JONGSEONG_COUNT;
    in_range
        .then(|| SYLLABLES.start() + (cho * JUNGSEONG_COUNT + jung) * JONGSEONG_COUNT + jong)
        .and_then(char::from_u32)
}

/// 음절을 (초성, 중성, 종성) 인덱스로 나눔
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = u32::from(c);
    if !SYLLABLES.contains(&code) {
        return None;
    }
    let index = code - SYLLABLES.start();
    let jong = index % JONGSEONG_COUNT;
    let rest = index / JONGSEONG_COUNT;
    Some((rest / JUNGSEONG_COUNT, rest % JUNGSEONG_COUNT, jong))
}

fn to_char(first: u32, index: u32, valid: bool) -> Option<char> {
    valid.then(|| first + index).and_then(char::from_u32)
}

fn to_index(c: char, first: u32, count: u32) -> Option<u32> {
    u32::from(c)
        .checked_sub(first)
        .filter(|index| *index < count)
}

pub fn choseong_char(cho: u32) -> Option<char> {
    to_char(ONSET_FIRST, cho, cho < CHOSEONG_COUNT)
}

pub fn jungseong_char(jung: u32) -> Option<char> {
    to_char(NUCLEUS_FIRST, jung, jung < JUNGSEONG_COUNT)
}

/// 종성 없음(0)은 문자가 없음
pub fn jongseong_char(jong: u32) -> Option<char> {
    to_char(CODA_OFFSET, jong, (1..JONGSEONG_COUNT).contains(&jong))
}

pub fn choseong_index(c: char) -> Option<u32> {
    to_index(c, ONSET_FIRST, CHOSEONG_COUNT)
}

pub fn jungseong_index(c: char) -> Option<u32> {
    to_index(c, NUCLEUS_FIRST, JUNGSEONG_COUNT)
}

/// 1~27
pub fn jongseong_index(c: char) -> Option<u32> {
    to_index(c, CODA_OFFSET, JONGSEONG_COUNT).filter(|jong| *jong > 0)
}

/// 두 모음을 이중 모음으로 (ㅗ+ㅏ -> ㅘ 등)
pub fn combine_jungseong(first: u32, second: u32) -> Option<u32> {
    DIPHTHONGS
        .iter()
        .find(|(a, b, _)| *a == first && *b == second)
        .map(|(_, _, combined)| *combined)
}

/// 겹받침을 (남는 종성, 뒤로 넘어가는 초성)으로 나눔
pub fn split_jongseong(jong: u32) -> Option<(u32, u32)> {
    CLUSTERS
        .iter()
        .find(|(cluster, _, _)| *cluster == jong)
        .map(|(_, kept, moved)| (*kept, *moved))
}

/// 홑받침을 초성으로 (연음)
pub fn jongseong_to_choseong(jong: u32) -> Option<u32> {
    CODA_AS_ONSET.get(jong as usize).copied().flatten()
}

pub fn tense_choseong(cho: u32) -> Option<u32> {
    TENSE_PAIRS
        .iter()
        .find(|(plain, _)| *plain == cho)
        .map(|(_, tense)| *tense)
}
