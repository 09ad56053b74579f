//! 아라비아 숫자 읽기
//!
//! `숫자+단위명사/B` 는 단위명사에 따라 고유어(한, 두, 세) 또는
//! 한자어(일, 이, 삼)로 읽고, 나머지 숫자는 한 자리씩 읽습니다.

use std::collections::HashSet;
use std::sync::LazyLock;

/// 숫자를 한글로 읽는 방식
pub trait NumeralSpeller: Send + Sync {
    /// `digits`(0-9만)를 읽음, `counter`는 뒤따르는 단위명사
    fn spell(&self, digits: &str, counter: Option<&str>) -> String;
}

/// 고유어 수사와 함께 쓰는 단위명사
static NATIVE_COUNTERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    "개 군데 권 그루 닢 대 돈 마리 모금 발 발짝 방 번 벌 병 보루 살 시 시간 쌍 잔 장 줄 채 척 첩 켤레 톨 통 판 명 사람"
        .split_whitespace()
        .collect()
});

const SINO_DIGITS: [&str; 10] = ["영", "일", "이", "삼", "사", "오", "육", "칠", "팔", "구"];
const NATIVE_ONES: [&str; 10] = ["", "한", "두", "세", "네", "다섯", "여섯", "일곱", "여덟", "아홉"];
const NATIVE_TENS: [&str; 10] = ["", "열", "스물", "서른", "마흔", "쉰", "예순", "일흔", "여든", "아흔"];
const SINO_POSITIONS: [&str; 4] = ["", "십", "백", "천"];
const SINO_GROUPS: [&str; 5] = ["", "만", "억", "조", "경"];

/// 한국어 수 읽기
#[derive(Debug, Clone, Copy, Default)]
pub struct KoreanNumeralSpeller;

impl KoreanNumeralSpeller {
    /// 고유어로 읽는 단위명사인지 확인
    pub fn is_native_counter(counter: &str) -> bool {
        NATIVE_COUNTERS.contains(counter)
    }

    /// 한자어 읽기 (일, 십, 백, 천, 만, 억, 조)
    pub fn sino(digits: &str) -> String {
        let digits = only_digits(digits);
        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            return SINO_DIGITS[0].to_string();
        }
        let values: Vec<usize> = digits.bytes().map(|b| usize::from(b - b'0')).collect();
        // 네 자리씩 묶음 (아래에서부터)
        let groups: Vec<&[usize]> = values.rchunks(4).collect();
        if groups.len() > SINO_GROUPS.len() {
            return spell_digits(digits);
        }

        let mut out = String::new();
        for (group_index, group) in groups.iter().enumerate().rev() {
            if group.iter().all(|&d| d == 0) {
                continue;
            }
            let mut part = String::new();
            for (i, &d) in group.iter().enumerate() {
                let position = group.len() - 1 - i;
                if d == 0 {
                    continue;
                }
                // 일십, 일백, 일천 -> 십, 백, 천
                if !(d == 1 && position > 0) {
                    part.push_str(SINO_DIGITS[d]);
                }
                part.push_str(SINO_POSITIONS[position]);
            }
            // 일만 -> 만
            if group_index == 1 && part == SINO_DIGITS[1] {
                part.clear();
            }
            out.push_str(&part);
            out.push_str(SINO_GROUPS[group_index]);
        }
        out
    }

    /// 고유어 읽기 (단위명사 앞, 99까지)
    /// 100 이상은 백의 자리 위를 한자어로 읽음
    pub fn native(digits: &str) -> String {
        let digits = only_digits(digits);
        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            return SINO_DIGITS[0].to_string();
        }
        let split = digits.len().saturating_sub(2);
        let (high, low) = digits.split_at(split);
        let low: usize = low.bytes().fold(0, |acc, b| acc * 10 + usize::from(b - b'0'));

        let mut out = String::new();
        if !high.is_empty() && high.bytes().any(|b| b != b'0') {
            out.push_str(&Self::sino(&format!("{high}00")));
        }
        let (tens, ones) = (low / 10, low % 10);
        if tens == 2 && ones == 0 {
            // 스물 -> 스무 (단위명사 앞)
            out.push_str("스무");
        } else {
            out.push_str(NATIVE_TENS[tens]);
            out.push_str(NATIVE_ONES[ones]);
        }
        out
    }
}

impl NumeralSpeller for KoreanNumeralSpeller {
    fn spell(&self, digits: &str, counter: Option<&str>) -> String {
        match counter {
            Some(counter) if Self::is_native_counter(counter) => Self::native(digits),
            Some(_) => Self::sino(digits),
            None => spell_digits(digits),
        }
    }
}

/// 숫자가 아닌 글자 제거 (`3,000` -> `3000`)
fn only_digits(digits: &str) -> String {
    digits.chars().filter(char::is_ascii_digit).collect()
}

/// 한 자리씩 읽기
fn spell_digits(digits: &str) -> String {
    digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| SINO_DIGITS[usize::from(b - b'0')])
        .collect()
}

fn is_hangul_syllable(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

/// 텍스트 안의 숫자를 한글로 바꿈
///
/// `3,000원/B`처럼 숫자 사이의 쉼표는 무시합니다.
pub fn spell_numerals(text: &str, speller: &dyn NumeralSpeller) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        // 숫자 (중간의 쉼표 포함)
        let start = i;
        while i < chars.len()
            && (chars[i].is_ascii_digit()
                || (chars[i] == ',' && chars.get(i + 1).is_some_and(char::is_ascii_digit)))
        {
            i += 1;
        }
        let digits: String = chars[start..i].iter().filter(|c| c.is_ascii_digit()).collect();

        // 단위명사 + /B
        let counter_end = chars[i..]
            .iter()
            .position(|&c| !is_hangul_syllable(c))
            .map_or(chars.len(), |p| i + p);
        let has_counter = counter_end > i
            && chars.get(counter_end) == Some(&'/')
            && chars.get(counter_end + 1) == Some(&'B');

        if has_counter {
            let counter: String = chars[i..counter_end].iter().collect();
            out.push_str(&speller.spell(&digits, Some(&counter)));
        } else {
            out.push_str(&speller.spell(&digits, None));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sino() {
        assert_eq!(KoreanNumeralSpeller::sino("0"), "영");
        assert_eq!(KoreanNumeralSpeller::sino("10"), "십");
        assert_eq!(KoreanNumeralSpeller::sino("15"), "십오");
        assert_eq!(KoreanNumeralSpeller::sino("110"), "백십");
        assert_eq!(KoreanNumeralSpeller::sino("2024"), "이천이십사");
        assert_eq!(KoreanNumeralSpeller::sino("10000"), "만");
        assert_eq!(KoreanNumeralSpeller::sino("12345"), "만이천삼백사십오");
        assert_eq!(KoreanNumeralSpeller::sino("100000000"), "일억");
        assert_eq!(KoreanNumeralSpeller::sino("21000"), "이만천");
    }

    #[test]
    fn test_native() {
        assert_eq!(KoreanNumeralSpeller::native("1"), "한");
        assert_eq!(KoreanNumeralSpeller::native("3"), "세");
        assert_eq!(KoreanNumeralSpeller::native("20"), "스무");
        assert_eq!(KoreanNumeralSpeller::native("21"), "스물한");
        assert_eq!(KoreanNumeralSpeller::native("99"), "아흔아홉");
        assert_eq!(KoreanNumeralSpeller::native("101"), "백한");
    }

    #[test]
    fn test_non_digits_ignored() {
        assert_eq!(KoreanNumeralSpeller::sino("3,000"), "삼천");
        assert_eq!(KoreanNumeralSpeller::native("1,2"), "열두");
        assert_eq!(KoreanNumeralSpeller::sino("a"), "영");
        assert_eq!(KoreanNumeralSpeller::native(""), "영");
    }

    #[test]
    fn test_spell_by_counter() {
        let speller = KoreanNumeralSpeller;
        assert_eq!(speller.spell("3", Some("개")), "세");
        assert_eq!(speller.spell("3", Some("층")), "삼");
        assert_eq!(speller.spell("112", None), "일일이");
    }

    #[test]
    fn test_spell_numerals_in_text() {
        let speller = KoreanNumeralSpeller;
        assert_eq!(spell_numerals("3개/B를", &speller), "세개/B를");
        assert_eq!(spell_numerals("5층/B에", &speller), "오층/B에");
        assert_eq!(spell_numerals("3,000원/B", &speller), "삼천원/B");
        assert_eq!(spell_numerals("mp3 2번", &speller), "mp삼 이번");
        assert_eq!(spell_numerals("숫자 없음", &speller), "숫자 없음");
    }
}
