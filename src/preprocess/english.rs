//! 영어 단어 -> 한글 표기
//!
//! 발음 사전(ARPAbet)에서 첫 번째 발음을 찾아 한글로 옮깁니다.
//! 사전에 없는 단어는 그대로 둡니다.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::core::codec::compose;
use crate::core::jamo::{Marker, Unit};
use crate::core::stream::UnitStream;
use crate::core::unicode::{combine_jungseong, decompose_syllable};
use crate::error::{G2pError, Result};

/// 영어 발음 사전
pub trait PronunciationDictionary: Send + Sync {
    /// 단어의 발음 목록 (ARPAbet 음소열, 없으면 빈 목록)
    fn lookup(&self, word: &str) -> Vec<Vec<String>>;
}

/// CMU 발음 사전
///
/// 형식: `WORD  PH1 PH2 ...`, 변이형은 `WORD(2)`, `;;;`로 시작하면 주석
#[derive(Debug, Clone, Default)]
pub struct CmuDict {
    entries: HashMap<String, Vec<Vec<String>>>,
}

impl CmuDict {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| G2pError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut entries: HashMap<String, Vec<Vec<String>>> = HashMap::new();
        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                continue;
            };
            let phones: Vec<String> = fields.map(String::from).collect();
            if phones.is_empty() {
                return Err(G2pError::resource(
                    "pronunciation dictionary",
                    line_no + 1,
                    format!("`{word}` has no phones"),
                ));
            }
            // WORD(2) -> word
            let word = match word.find('(') {
                Some(i) if word.ends_with(')') => &word[..i],
                _ => word,
            };
            entries.entry(word.to_lowercase()).or_default().push(phones);
        }
        log::debug!("발음 사전 로드: {}개 단어", entries.len());
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PronunciationDictionary for CmuDict {
    fn lookup(&self, word: &str) -> Vec<Vec<String>> {
        self.entries
            .get(&word.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }
}

/// 텍스트 안의 영어 단어를 한글 표기로 바꿈
///
/// 한글 바로 뒤의 `/P`, `/J`, `/E`, `/B`는 경계 표지이므로 그대로 둡니다.
pub fn convert_english(text: &str, dictionary: &dyn PronunciationDictionary) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word = String::new();
    // 직전 두 글자가 (한글, '/')
    let mut marker_slot = false;
    let mut prev_hangul = false;

    for c in text.chars() {
        let at_marker_slot = std::mem::replace(&mut marker_slot, prev_hangul && c == '/');
        prev_hangul = Unit::from_char(c).is_jamo() || decompose_syllable(c).is_some();

        if at_marker_slot && Marker::from_tag(c).is_some() {
            out.push(c);
        } else if c.is_ascii_alphabetic() {
            word.push(c);
        } else {
            flush_word(&mut word, &mut out, dictionary);
            out.push(c);
        }
    }
    flush_word(&mut word, &mut out, dictionary);
    out
}

fn flush_word(word: &mut String, out: &mut String, dictionary: &dyn PronunciationDictionary) {
    if word.is_empty() {
        return;
    }
    match dictionary.lookup(word).first() {
        Some(phones) => out.push_str(&transcribe(phones)),
        None => {
            log::debug!("발음 사전에 없는 단어: {}", word);
            out.push_str(word);
        }
    }
    word.clear();
}

// 중성 인덱스
const A: u32 = 0;
const AE: u32 = 1;
const EO: u32 = 4;
const E: u32 = 5;
const O: u32 = 8;
const U: u32 = 13;
const EU: u32 = 18;
const I: u32 = 20;

// 초성 인덱스
const RIEUL: u32 = 5;
const MIEUM: u32 = 6;
const IEUNG: u32 = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Glide {
    W,
    Y,
}

/// ARPAbet 음소 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phone {
    /// 모음 (이중 모음은 두 번째 모음 포함)
    Vowel(u32, Option<u32>),
    /// 활음 W, Y
    Glide(Glide),
    /// 자음: 초성 인덱스, 받침이 될 수 있으면 종성 인덱스
    Consonant(Consonant),
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Consonant {
    onset: u32,
    coda: Option<u32>,
    /// 홀로 쓰일 때 ㅣ를 붙이는 자음 (CH, JH, SH, ZH)
    palatal: bool,
    /// 모음 뒤에서 발음하지 않음 (R)
    silent_after_vowel: bool,
    /// 모음 앞에서 y 활음을 더함 (SH)
    y_glide: bool,
}

impl Consonant {
    const fn new(onset: u32) -> Self {
        Self {
            onset,
            coda: None,
            palatal: false,
            silent_after_vowel: false,
            y_glide: false,
        }
    }

    const fn coda(mut self, coda: u32) -> Self {
        self.coda = Some(coda);
        self
    }

    const fn palatal(mut self) -> Self {
        self.palatal = true;
        self
    }
}

fn classify(phone: &str) -> Phone {
    let base = phone.trim_end_matches(|c: char| c.is_ascii_digit());
    match base {
        "AA" => Phone::Vowel(A, None),
        "AE" => Phone::Vowel(AE, None),
        "AH" | "ER" => Phone::Vowel(EO, None),
        "AO" | "OW" => Phone::Vowel(O, None),
        "AW" => Phone::Vowel(A, Some(U)),
        "AY" => Phone::Vowel(A, Some(I)),
        "EH" => Phone::Vowel(E, None),
        "EY" => Phone::Vowel(E, Some(I)),
        "IH" | "IY" => Phone::Vowel(I, None),
        "OY" => Phone::Vowel(O, Some(I)),
        "UH" | "UW" => Phone::Vowel(U, None),
        "W" => Phone::Glide(Glide::W),
        "Y" => Phone::Glide(Glide::Y),
        "B" | "V" => Phone::Consonant(Consonant::new(7)),
        "CH" => Phone::Consonant(Consonant::new(14).palatal()),
        "D" | "DH" => Phone::Consonant(Consonant::new(3)),
        "F" => Phone::Consonant(Consonant::new(17)),
        "G" => Phone::Consonant(Consonant::new(0)),
        "HH" => Phone::Consonant(Consonant {
            silent_after_vowel: true,
            ..Consonant::new(18)
        }),
        "JH" | "Z" | "ZH" => {
            let c = Consonant::new(12);
            Phone::Consonant(if base == "Z" { c } else { c.palatal() })
        }
        "K" => Phone::Consonant(Consonant::new(15).coda(1)),
        "L" => Phone::Consonant(Consonant::new(5).coda(8)),
        "M" => Phone::Consonant(Consonant::new(6).coda(16)),
        "N" => Phone::Consonant(Consonant::new(2).coda(4)),
        "NG" => Phone::Consonant(Consonant::new(IEUNG).coda(21)),
        "P" => Phone::Consonant(Consonant::new(17).coda(17)),
        "R" => Phone::Consonant(Consonant {
            silent_after_vowel: true,
            ..Consonant::new(5)
        }),
        "S" => Phone::Consonant(Consonant::new(9)),
        "SH" => Phone::Consonant(Consonant {
            y_glide: true,
            ..Consonant::new(9).palatal()
        }),
        "T" => Phone::Consonant(Consonant::new(16).coda(19)),
        "TH" => Phone::Consonant(Consonant::new(10)),
        _ => Phone::Unknown,
    }
}

/// 활음 + 모음 -> 이중 모음
fn glide_vowel(glide: Glide, vowel: u32) -> u32 {
    match glide {
        Glide::W => match vowel {
            A | AE => combine_jungseong(O, vowel).unwrap_or(vowel),
            O => 14, // ㅝ
            _ => combine_jungseong(U, vowel).unwrap_or(vowel),
        },
        Glide::Y => match vowel {
            A => 2,   // ㅑ
            AE => 3,  // ㅒ
            EO => 6,  // ㅕ
            E => 7,   // ㅖ
            O => 12,  // ㅛ
            U => 17,  // ㅠ
            _ => vowel,
        },
    }
}

/// ARPAbet 음소열 -> 한글
pub fn transcribe(phones: &[String]) -> String {
    let phones: Vec<Phone> = phones
        .iter()
        .map(|p| classify(p))
        .filter(|p| *p != Phone::Unknown)
        .collect();

    let mut units: Vec<Unit> = Vec::new();
    let mut onset: Option<u32> = None;
    let mut glide: Option<Glide> = None;
    // 바로 앞 음소가 모음이었는지 (받침 여부 판단)
    let mut prev_vowel = false;
    // 바로 앞 음소가 받침 ㄹ이 되었는지
    let mut prev_lateral_coda = false;

    let vowel_follows = |i: usize| match phones.get(i + 1) {
        Some(Phone::Vowel(..)) => true,
        Some(Phone::Glide(_)) => matches!(phones.get(i + 2), Some(Phone::Vowel(..))),
        _ => false,
    };

    for (i, phone) in phones.iter().enumerate() {
        match *phone {
            Phone::Vowel(first, second) => {
                let nucleus = glide.take().map_or(first, |g| glide_vowel(g, first));
                units.push(Unit::Onset(onset.take().unwrap_or(IEUNG)));
                units.push(Unit::Nucleus(nucleus));
                if let Some(second) = second {
                    units.push(Unit::Onset(IEUNG));
                    units.push(Unit::Nucleus(second));
                }
                prev_vowel = true;
                prev_lateral_coda = false;
            }
            Phone::Glide(g) => {
                if matches!(phones.get(i + 1), Some(Phone::Vowel(..))) {
                    glide = Some(g);
                } else {
                    let vowel = if g == Glide::W { U } else { I };
                    units.push(Unit::Onset(onset.take().unwrap_or(IEUNG)));
                    units.push(Unit::Nucleus(vowel));
                    prev_vowel = true;
                }
            }
            Phone::Consonant(c) => {
                if vowel_follows(i) {
                    // 모음 사이의 L은 ㄹㄹ
                    if c.onset == 5 && !c.silent_after_vowel && prev_vowel {
                        units.push(Unit::Coda(8));
                    }
                    onset = Some(c.onset);
                    if c.y_glide {
                        glide = Some(Glide::Y);
                    }
                } else if prev_vowel && c.coda.is_some() {
                    units.extend(c.coda.map(Unit::Coda));
                } else if (prev_vowel && c.silent_after_vowel) || c.onset == IEUNG {
                    // 발음하지 않음
                } else if prev_lateral_coda && c.onset == MIEUM {
                    // 받침 ㄹ 뒤의 M은 ㄹ을 겹침 (film -> 필름)
                    units.extend([Unit::Onset(RIEUL), Unit::Nucleus(EU), Unit::Coda(16)]);
                } else {
                    units.push(Unit::Onset(c.onset));
                    units.push(Unit::Nucleus(if c.palatal { I } else { EU }));
                }
                prev_lateral_coda = prev_vowel && !vowel_follows(i) && c.coda == Some(8);
                prev_vowel = false;
            }
            Phone::Unknown => {}
        }
    }

    compose(&UnitStream::from(units))
}
