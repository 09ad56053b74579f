//! 특수 규칙 (표준 발음법의 좁은 범위 조항)
//!
//! 순서가 결과에 영향을 줍니다. 경계 표지를 참조하는 규칙은 모두 여기에 있고,
//! 마지막에 남은 경계 표지를 모두 제거합니다.

use crate::config::ConvertOptions;
use crate::core::jamo::Unit;
use crate::core::stream::UnitStream;
use crate::error::Result;
use crate::rules::citation::CitationMap;
use crate::rules::pattern::{apply_all, Context, Rewrite};
use crate::trace::Tracer;

/// 모드에 따라 다른 재작성 목록을 가진 규칙
#[derive(Debug, Clone)]
pub struct SpecialRule {
    name: &'static str,
    citation: &'static str,
    descriptive: Vec<Rewrite>,
    prescriptive: Vec<Rewrite>,
}

impl SpecialRule {
    /// 두 모드에서 같은 규칙
    fn always(name: &'static str, citation: &'static str, rewrites: Vec<Rewrite>) -> Self {
        Self {
            name,
            citation,
            prescriptive: rewrites.clone(),
            descriptive: rewrites,
        }
    }

    /// 실제 발음 모드에서만 적용
    fn descriptive_only(name: &'static str, citation: &'static str, rewrites: Vec<Rewrite>) -> Self {
        Self {
            name,
            citation,
            descriptive: rewrites,
            prescriptive: Vec::new(),
        }
    }

    fn by_mode(
        name: &'static str,
        citation: &'static str,
        descriptive: Vec<Rewrite>,
        prescriptive: Vec<Rewrite>,
    ) -> Self {
        Self {
            name,
            citation,
            descriptive,
            prescriptive,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 표준 발음법 조항 번호
    pub fn citation(&self) -> &'static str {
        self.citation
    }

    pub fn rewrites(&self, descriptive: bool) -> &[Rewrite] {
        if descriptive {
            &self.descriptive
        } else {
            &self.prescriptive
        }
    }

    pub fn apply(&self, stream: &UnitStream, descriptive: bool) -> UnitStream {
        apply_all(self.rewrites(descriptive), stream)
    }
}

/// 같은 치환을 여러 패턴에 적용하기 위한 도우미
fn rewrites(pairs: &[(&str, &str)]) -> Result<Vec<Rewrite>> {
    pairs
        .iter()
        .map(|(pattern, replacement)| Rewrite::parse(pattern, replacement))
        .collect()
}

fn units(chars: &str) -> Vec<Unit> {
    chars.chars().map(Unit::from_char).collect()
}

/// 특수 규칙 12개 (고정 순서)
#[derive(Debug, Clone)]
pub struct SpecialRules {
    rules: Vec<SpecialRule>,
}

impl SpecialRules {
    pub fn new() -> Result<Self> {
        let rules = vec![
            // ㅈ, ㅉ, ㅊ 뒤의 ㅕ는 ㅓ
            SpecialRule::always("jyeo", "5.1", rewrites(&[("[ᄌᄍᄎ]ᅧ", "$1ᅥ")])?),
            // 예, 례 이외의 ㅖ
            SpecialRule::descriptive_only(
                "ye",
                "5.2",
                rewrites(&[("[ᄀᄁᄃᄄᄆᄇᄈᄌᄍᄎᄏᄐᄑᄒ]ᅨ", "$1ᅦ")])?,
            ),
            SpecialRule::always(
                "consonant_ui",
                "5.3",
                rewrites(&[("[ᄀᄁᄂᄃᄄᄅᄆᄇᄈᄉᄊᄌᄍᄎᄏᄐᄑᄒ]ᅴ", "$1ᅵ")])?,
            ),
            SpecialRule::by_mode(
                "josa_ui",
                "5.4.2",
                rewrites(&[("의/J", "에")])?,
                rewrites(&[("/J", "")])?,
            ),
            // 첫음절 이외의 의
            SpecialRule::descriptive_only(
                "vowel_ui",
                "5.4.1",
                vec![Rewrite::parse("의", "이")?.with_context(Context::AfterNonSpace)],
            ),
            // 자모 이름
            SpecialRule::always(
                "jamo",
                "16",
                rewrites(&[
                    ("귿ᄋ", "그ᄉ"),
                    ("으[ᆽᆾᇀᇂ]ᄋ", "으ᄉ"),
                    ("읔ᄋ", "으ᄀ"),
                    ("읖ᄋ", "으ᄇ"),
                ])?,
            ),
            SpecialRule::always("rieulgiyeok", "11.1", rewrites(&[("ᆰ/P[ᄀᄁ]", "ᆯᄁ")])?),
            SpecialRule::always(
                "rieulbieub",
                "25",
                rewrites(&[
                    ("[ᆲᆴ]/Pᄀ", "$1ᄁ"),
                    ("[ᆲᆴ]/Pᄃ", "$1ᄄ"),
                    ("[ᆲᆴ]/Pᄉ", "$1ᄊ"),
                    ("[ᆲᆴ]/Pᄌ", "$1ᄍ"),
                ])?,
            ),
            SpecialRule::always(
                "verb_nieun",
                "24",
                rewrites(&[
                    ("[ᆫᆷ]/Pᄀ", "$1ᄁ"),
                    ("[ᆫᆷ]/Pᄃ", "$1ᄄ"),
                    ("[ᆫᆷ]/Pᄉ", "$1ᄊ"),
                    ("[ᆫᆷ]/Pᄌ", "$1ᄍ"),
                    ("ᆬ/Pᄀ", "ᆫᄁ"),
                    ("ᆬ/Pᄃ", "ᆫᄄ"),
                    ("ᆬ/Pᄉ", "ᆫᄊ"),
                    ("ᆬ/Pᄌ", "ᆫᄍ"),
                    ("ᆱ/Pᄀ", "ᆷᄁ"),
                    ("ᆱ/Pᄃ", "ᆷᄄ"),
                    ("ᆱ/Pᄉ", "ᆷᄊ"),
                    ("ᆱ/Pᄌ", "ᆷᄍ"),
                ])?,
            ),
            // 밟-, 넓- 예외
            SpecialRule::always(
                "balb",
                "10.1",
                vec![
                    Rewrite::parse("밟", "밥")?.with_context(Context::NotBefore(units("ᄋᄒ"))),
                    Rewrite::parse("넓[ᄌᄍᄃᄄ]ᅮ", "넙$4$5")?,
                    Rewrite::parse("넓/P[ᄌᄍᄃᄄ]ᅮ", "넙/P$5$6")?,
                ],
            ),
            SpecialRule::always(
                "palatalize",
                "17",
                rewrites(&[
                    ("ᆮᄋ[ᅵᅧ]", "ᄌ$3"),
                    ("ᇀᄋ[ᅵᅧ]", "ᄎ$3"),
                    ("ᆴᄋ[ᅵᅧ]", "ᆯᄎ$3"),
                    ("ᆮ히", "치"),
                ])?,
            ),
            // 관형사형 -(으)ㄹ 뒤
            SpecialRule::always(
                "modifying_rieul",
                "27",
                rewrites(&[
                    ("ᆯ/E ᄀ", "ᆯ ᄁ"),
                    ("ᆯ/E ᄃ", "ᆯ ᄄ"),
                    ("ᆯ/E ᄇ", "ᆯ ᄈ"),
                    ("ᆯ/E ᄉ", "ᆯ ᄊ"),
                    ("ᆯ/E ᄌ", "ᆯ ᄍ"),
                    ("ᆯ걸", "ᆯ껄"),
                    ("ᆯ밖에", "ᆯ빠께"),
                    ("ᆯ세라", "ᆯ쎄라"),
                    ("ᆯ수록", "ᆯ쑤록"),
                    ("ᆯ지라도", "ᆯ찌라도"),
                    ("ᆯ지언정", "ᆯ찌언정"),
                    ("ᆯ진대", "ᆯ찐대"),
                ])?,
            ),
        ];

        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[SpecialRule] {
        &self.rules
    }

    /// 규칙을 순서대로 적용한 뒤 경계 표지 제거
    pub fn apply(
        &self,
        stream: UnitStream,
        options: &ConvertOptions,
        citations: &CitationMap,
        tracer: &mut Tracer,
    ) -> UnitStream {
        let mut current = stream;
        for rule in &self.rules {
            let next = rule.apply(&current, options.descriptive);
            if tracer.is_enabled() {
                let description = citations.get(rule.citation).unwrap_or("");
                tracer.record(rule.name, &current, &next, description);
            }
            current = next;
        }
        current.without_markers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::{compose, decompose};

    fn run(text: &str, descriptive: bool) -> String {
        let rules = SpecialRules::new().unwrap();
        let options = ConvertOptions {
            descriptive,
            ..ConvertOptions::default()
        };
        let mut tracer = Tracer::new(false);
        compose(&rules.apply(decompose(text), &options, &CitationMap::default(), &mut tracer))
    }

    fn run_rule(name: &str, text: &str, descriptive: bool) -> String {
        let rules = SpecialRules::new().unwrap();
        let rule = rules.rules().iter().find(|r| r.name() == name).unwrap();
        compose(&rule.apply(&decompose(text), descriptive))
    }

    #[test]
    fn test_rule_order() {
        let rules = SpecialRules::new().unwrap();
        let names: Vec<_> = rules.rules().iter().map(SpecialRule::name).collect();
        assert_eq!(
            names,
            [
                "jyeo",
                "ye",
                "consonant_ui",
                "josa_ui",
                "vowel_ui",
                "jamo",
                "rieulgiyeok",
                "rieulbieub",
                "verb_nieun",
                "balb",
                "palatalize",
                "modifying_rieul"
            ]
        );
    }

    #[test]
    fn test_jyeo() {
        assert_eq!(run("가져 다쳐 쪄", false), "가저 다처 쩌");
    }

    #[test]
    fn test_ye_descriptive_only() {
        assert_eq!(run("시계 혜택 예의", true), "시게 헤택 예이");
        // 례는 그대로
        assert_eq!(run("차례 사례", true), "차례 사례");
        assert_eq!(run("시계 혜택", false), "시계 혜택");
    }

    #[test]
    fn test_consonant_ui() {
        assert_eq!(run("무늬 희망 의사", false), "무니 히망 의사");
    }

    #[test]
    fn test_josa_ui() {
        assert_eq!(run("나의/J 책", true), "나에 책");
        assert_eq!(run("나의/J 책", false), "나의 책");
    }

    #[test]
    fn test_vowel_ui() {
        assert_eq!(run_rule("vowel_ui", "주의 의사", true), "주이 의사");
        assert_eq!(run_rule("vowel_ui", "주의 의사", false), "주의 의사");
    }

    #[test]
    fn test_jamo_names() {
        assert_eq!(run("디귿이 지읒이 키읔이 피읖이 히읗이", false), "디그시 지으시 키으기 피으비 히으시");
    }

    #[test]
    fn test_rieulgiyeok() {
        assert_eq!(run("읽/P고 맑/P게", false), "일꼬 말께");
    }

    #[test]
    fn test_rieulbieub() {
        assert_eq!(run("넓/P게 핥/P다 훑/P소 떫/P지", false), "넓께 핥따 훑쏘 떫찌");
    }

    #[test]
    fn test_verb_nieun() {
        assert_eq!(run("신/P고 앉/P고 삼/P고 젊/P지", false), "신꼬 안꼬 삼꼬 점찌");
        // 경계가 없으면 (명사 등) 적용하지 않음
        assert_eq!(run("신고", false), "신고");
    }

    #[test]
    fn test_balb() {
        assert_eq!(run("밟/P다 밟/P는 밟/P아", false), "밥따 밥는 밟아");
        assert_eq!(run("넓죽하다 넓둥글다", false), "넙죽하다 넙둥글다");
    }

    #[test]
    fn test_palatalize_regardless_of_mode() {
        for descriptive in [false, true] {
            assert_eq!(run("굳이 밭이 벼훑이 굳히다", descriptive), "구지 바치 벼훌치 구치다");
        }
    }

    #[test]
    fn test_modifying_rieul() {
        assert_eq!(run("할/E 것을 갈/E 데가", false), "할 껏을 갈 떼가");
        assert_eq!(run("할수록 할지라도", false), "할쑤록 할찌라도");
        // 공백이 없으면 첫 다섯 쌍은 적용하지 않음
        assert_eq!(run("할/E것", false), "할것");
    }

    #[test]
    fn test_markers_stripped() {
        let rules = SpecialRules::new().unwrap();
        let mut tracer = Tracer::new(false);
        for descriptive in [false, true] {
            let options = ConvertOptions {
                descriptive,
                ..ConvertOptions::default()
            };
            let out = rules.apply(
                decompose("먹/P다 나의/J 할/E 사과 세개/B"),
                &options,
                &CitationMap::default(),
                &mut tracer,
            );
            assert!(!out.has_markers());
        }
    }

    #[test]
    fn test_trace_names_rules() {
        let rules = SpecialRules::new().unwrap();
        let citations = CitationMap::parse("17\n구개음화").unwrap();
        let mut tracer = Tracer::new(true);
        rules.apply(decompose("굳이"), &ConvertOptions::default(), &citations, &mut tracer);
        let records = tracer.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].pass, "palatalize");
        assert_eq!(records[0].rule, "구개음화");
    }
}
