//! 연음 규칙 (받침 + 모음으로 시작하는 음절)
//!
//! link1: 홑받침/쌍받침이 다음 음절 초성으로 (제13항)
//! link2: 겹받침의 뒤엣것만 다음 음절 초성으로, ㅅ은 ㅆ (제14항)
//! link3: 공백 하나를 사이에 둔 경우 (제15항)
//! link4: ㅎ 받침 탈락 (제12항 4)
//!
//! 패턴은 연속한 단위만 맞추므로 문장 부호 등을 건너 연음되지 않습니다.

use crate::core::stream::UnitStream;
use crate::core::unicode::{
    choseong_char, jongseong_char, jongseong_to_choseong, split_jongseong, tense_choseong,
    CHOSEONG_IEUNG, JONGSEONG_COUNT,
};
use crate::error::{G2pError, Result};
use crate::rules::citation::CitationMap;
use crate::rules::pattern::{apply_all, Rewrite};
use crate::trace::Tracer;

const JONG_IEUNG: u32 = 21;
const JONG_HIEUH: u32 = 27;
/// ㄶ, ㅀ (link4에서 처리)
const JONG_NIEUN_HIEUH: u32 = 6;
const JONG_RIEUL_HIEUH: u32 = 15;
const CHO_SIOS: u32 = 9;

/// 연음 패스 하나
#[derive(Debug, Clone)]
pub struct LinkPass {
    name: &'static str,
    citation: &'static str,
    rewrites: Vec<Rewrite>,
}

impl LinkPass {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn citation(&self) -> &'static str {
        self.citation
    }

    pub fn apply(&self, stream: &UnitStream) -> UnitStream {
        apply_all(&self.rewrites, stream)
    }
}

/// 네 연음 패스 (고정 순서)
#[derive(Debug, Clone)]
pub struct LinkingRules {
    passes: Vec<LinkPass>,
}

impl LinkingRules {
    pub fn new() -> Result<Self> {
        let passes = vec![
            LinkPass {
                name: "link1",
                citation: "13",
                rewrites: single_coda_rewrites("")?,
            },
            LinkPass {
                name: "link2",
                citation: "14",
                rewrites: cluster_rewrites("")?,
            },
            LinkPass {
                name: "link3",
                citation: "15",
                rewrites: {
                    let mut rewrites = single_coda_rewrites(" ")?;
                    rewrites.extend(cluster_rewrites(" ")?);
                    rewrites
                },
            },
            LinkPass {
                name: "link4",
                citation: "12.4",
                rewrites: vec![
                    Rewrite::parse("ᇂᄋ", "ᄋ")?,
                    Rewrite::parse("ᆭᄋ", "ᄂ")?,
                    Rewrite::parse("ᆶᄋ", "ᄅ")?,
                ],
            },
        ];
        Ok(Self { passes })
    }

    pub fn passes(&self) -> &[LinkPass] {
        &self.passes
    }

    pub fn apply(&self, stream: UnitStream, citations: &CitationMap, tracer: &mut Tracer) -> UnitStream {
        self.passes.iter().fold(stream, |current, pass| {
            let next = pass.apply(&current);
            if tracer.is_enabled() {
                let description = citations.get(pass.citation).unwrap_or("");
                tracer.record(pass.name, &current, &next, description);
            }
            next
        })
    }
}

fn jamo_pair(jong: u32, cho: u32) -> Result<(char, char)> {
    let coda = jongseong_char(jong);
    let onset = choseong_char(cho);
    coda.zip(onset)
        .ok_or_else(|| G2pError::pattern(&format!("{jong}/{cho}"), "no such jamo"))
}

/// 받침 + [gap] + ㅇ -> [gap] + 받침을 초성으로
fn single_coda_rewrites(gap: &str) -> Result<Vec<Rewrite>> {
    let silent = choseong_char(CHOSEONG_IEUNG).unwrap_or('ᄋ');
    let mut rewrites = Vec::new();
    for jong in 1..JONGSEONG_COUNT {
        if matches!(jong, JONG_IEUNG | JONG_HIEUH) {
            continue;
        }
        let Some(cho) = jongseong_to_choseong(jong) else {
            continue;
        };
        let (coda, onset) = jamo_pair(jong, cho)?;
        rewrites.push(Rewrite::parse(
            &format!("{coda}{gap}{silent}"),
            &format!("{gap}{onset}"),
        )?);
    }
    Ok(rewrites)
}

/// 겹받침 + [gap] + ㅇ -> 앞 받침 + [gap] + 뒤 받침을 초성으로
fn cluster_rewrites(gap: &str) -> Result<Vec<Rewrite>> {
    let silent = choseong_char(CHOSEONG_IEUNG).unwrap_or('ᄋ');
    let mut rewrites = Vec::new();
    for jong in 1..JONGSEONG_COUNT {
        if matches!(jong, JONG_NIEUN_HIEUH | JONG_RIEUL_HIEUH) {
            continue;
        }
        let Some((rest, cho)) = split_jongseong(jong) else {
            continue;
        };
        let cho = if cho == CHO_SIOS {
            tense_choseong(cho).unwrap_or(cho)
        } else {
            cho
        };
        let (cluster, _) = jamo_pair(jong, cho)?;
        let (remaining, onset) = jamo_pair(rest, cho)?;
        rewrites.push(Rewrite::parse(
            &format!("{cluster}{gap}{silent}"),
            &format!("{remaining}{gap}{onset}"),
        )?);
    }
    Ok(rewrites)
}
