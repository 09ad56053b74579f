//! 통합 테스트 - 전체 변환 흐름

use std::fs;

use g2pk::{
    load_config, CmuDict, ConvertOptions, G2p, G2pConfig, G2pError, IdiomList, Morpheme,
    PosTagger, PreAnnotated,
};

const CMUDICT: &str = "\
;;; 테스트용 발음 사전
FILE  F AY1 L
TEST  T EH1 S T
MUSIC  M Y UW1 Z IH0 K
";

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn g2p() -> G2p {
    init_logger();
    G2p::builder()
        .tagger(PreAnnotated)
        .dictionary(CmuDict::parse(CMUDICT).unwrap())
        .build()
        .unwrap()
}

fn prescriptive(text: &str) -> String {
    g2p().convert(text, &ConvertOptions::default())
}

fn descriptive(text: &str) -> String {
    g2p().convert(text, &ConvertOptions::descriptive())
}

#[test]
fn test_idiom_stage() {
    let g2p = g2p();
    assert_eq!(
        g2p.preprocess_idioms("지금 mp3 파일을 다운받고 있어요", false),
        "지금 엠피쓰리 파일을 다운받고 있어요"
    );
    assert_eq!(g2p.preprocess_idioms("숙어 없음", true), "숙어 없음");
}

#[test]
fn test_verb_stem_rules() {
    assert_eq!(prescriptive("읽/P고"), "일꼬");
    assert_eq!(prescriptive("신/P고"), "신꼬");
    // 표지가 없으면 명사로 보고 된소리로 바꾸지 않음
    assert_eq!(prescriptive("신고"), "신고");
}

#[test]
fn test_particle_ui_by_mode() {
    assert_eq!(prescriptive("나의/J 책"), "나의 책");
    assert_eq!(descriptive("나의/J 책"), "나에 책");
}

#[test]
fn test_palatalization() {
    assert_eq!(prescriptive("굳이"), "구지");
    assert_eq!(prescriptive("같이"), "가치");
}

#[test]
fn test_neutralization_and_linking() {
    assert_eq!(prescriptive("꽃"), "꼳");
    assert_eq!(prescriptive("닭 앞"), "다 갑");
    assert_eq!(prescriptive("국물"), "궁물");
}

#[test]
fn test_full_sentence() {
    let text = "나의/J 친구가 mp3 file 3개/B를 다운받고 있다";
    assert_eq!(prescriptive(text), "나의 친구가 엠피쓰리 파일 세개를 다운받꼬 읻따");
    assert_eq!(descriptive(text), "나에 친구가 엠피쓰리 파일 세개를 다운받꼬 읻따");
}

#[test]
fn test_markers_never_survive() {
    for options in [ConvertOptions::default(), ConvertOptions::descriptive()] {
        let out = g2p().convert("책/B 나/E 가/J 하/P", &options);
        assert!(!out.contains('/'), "{out}");
    }
    assert_eq!(prescriptive("책/B 나/E 하/P"), "책 나 하");
}

#[test]
fn test_descriptive_only_changes() {
    // 표준 발음에서는 그대로
    assert_eq!(prescriptive("계시다"), "계시다");
    assert_eq!(descriptive("계시다"), "게시다");
    assert_eq!(descriptive("차례"), "차례");
    assert_eq!(prescriptive("우리의"), "우리의");
    assert_eq!(descriptive("우리의"), "우리이");
    // 두 모드 공통
    assert_eq!(prescriptive("희망"), "히망");
    assert_eq!(descriptive("희망"), "히망");
}

#[test]
fn test_jamo_output() {
    let options = ConvertOptions {
        to_syllables: false,
        ..ConvertOptions::default()
    };
    assert_eq!(
        g2p().convert("있다", &options),
        "\u{110B}\u{1175}\u{11AE}\u{1104}\u{1161}"
    );
}

#[test]
fn test_group_vowels() {
    let options = ConvertOptions {
        group_vowels: true,
        ..ConvertOptions::default()
    };
    assert_eq!(g2p().convert("얘기 돼지", &options), "예기 되지");
}

#[test]
fn test_english_and_numerals() {
    assert_eq!(prescriptive("music test"), "뮤직 테스트");
    assert_eq!(prescriptive("5층/B"), "오층");
    assert_eq!(prescriptive("2마리/B"), "두마리");
}

#[test]
fn test_markers_survive_letter_entries_in_dictionary() {
    init_logger();
    let dict = CmuDict::parse("P  P IY1\nJ  JH EY1\nE  IY1\nB  B IY1\n").unwrap();
    let g2p = G2p::builder()
        .tagger(PreAnnotated)
        .dictionary(dict)
        .build()
        .unwrap();
    let options = ConvertOptions::default();
    assert_eq!(g2p.convert("읽/P고", &options), "일꼬");
    assert_eq!(g2p.convert("할/E 것", &options), "할 껃");
    assert_eq!(g2p.convert("3개/B를", &options), "세개를");
    assert_eq!(g2p.convert("나의/J 책", &ConvertOptions::descriptive()), "나에 책");
}

#[test]
fn test_missing_dependency() {
    let result = G2p::builder().tagger(PreAnnotated).build();
    assert!(matches!(result, Err(G2pError::MissingDependency(_))));
}

#[test]
fn test_pos_tagger_in_pipeline() {
    fn analyzer(text: &str) -> Vec<Morpheme> {
        match text {
            "읽고" => vec![Morpheme::new("읽", "VV"), Morpheme::new("고", "EC")],
            _ => Vec::new(),
        }
    }
    let g2p = G2p::builder()
        .tagger(PosTagger::new(analyzer))
        .dictionary(CmuDict::default())
        .build()
        .unwrap();
    assert_eq!(g2p.convert("읽고", &ConvertOptions::default()), "일꼬");
}

#[test]
fn test_custom_idioms() {
    let g2p = G2p::builder()
        .tagger(PreAnnotated)
        .dictionary(CmuDict::default())
        .idioms(IdiomList::parse("가나다===라마바\n").unwrap())
        .build()
        .unwrap();
    assert_eq!(g2p.convert("가나다", &ConvertOptions::default()), "라마바");
}

#[test]
fn test_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let idioms_path = dir.path().join("idioms.txt");
    let dict_path = dir.path().join("cmudict.txt");
    let config_path = dir.path().join("g2pk.json");

    fs::write(&idioms_path, "가나다===라마바\n").unwrap();
    fs::write(&dict_path, CMUDICT).unwrap();
    let json = serde_json::json!({
        "options": { "descriptive": true },
        "idioms_path": idioms_path,
        "cmudict_path": dict_path,
    });
    fs::write(&config_path, json.to_string()).unwrap();

    let config: G2pConfig = load_config(&config_path).unwrap();
    assert!(config.options.descriptive);
    assert!(config.options.to_syllables);

    let g2p = G2p::builder()
        .tagger(PreAnnotated)
        .with_config(&config)
        .unwrap()
        .build()
        .unwrap();
    let options = *g2p.options();
    assert_eq!(g2p.convert("가나다 file", &options), "라마바 파일");
    assert_eq!(g2p.convert("계시다", &options), "게시다");
}

#[test]
fn test_config_missing_resource() {
    let config = G2pConfig {
        idioms_path: Some("/nonexistent/idioms.txt".into()),
        ..G2pConfig::default()
    };
    let result = G2p::builder().with_config(&config);
    assert!(matches!(result, Err(G2pError::Io { .. })));
}

#[test]
fn test_trace_records() {
    let g2p = g2p();
    let conversion = g2p.convert_traced("mp3 읽/P고", &ConvertOptions::default());
    assert_eq!(conversion.output, "엠피쓰리 일꼬");

    let passes: Vec<&str> = conversion.trace.iter().map(|r| r.pass.as_str()).collect();
    assert_eq!(passes.first(), Some(&"idioms"));
    assert!(passes.contains(&"rieulgiyeok"));

    let record = conversion
        .trace
        .iter()
        .find(|r| r.pass == "rieulgiyeok")
        .unwrap();
    assert_eq!(record.before, "엠피쓰리 읽/P고");
    assert_eq!(record.after, "엠피쓰리 일꼬");
    assert!(record.rule.starts_with("제11항"));

    let json = serde_json::to_value(&conversion.trace).unwrap();
    assert!(json.is_array());
}

#[test]
fn test_verbose_does_not_change_output() {
    let g2p = g2p();
    for text in ["나의/J 책", "닭 앞", "mp3 file"] {
        let quiet = g2p.convert(text, &ConvertOptions::default());
        let loud = g2p.convert(text, &ConvertOptions::default().with_verbose(true));
        assert_eq!(quiet, loud);
    }
}

#[test]
fn test_engine_shared_across_threads() {
    let g2p = std::sync::Arc::new(g2p());
    let handles: Vec<_> = ["굳이", "있다"]
        .into_iter()
        .map(|text| {
            let g2p = g2p.clone();
            std::thread::spawn(move || g2p.convert(text, &ConvertOptions::default()))
        })
        .collect();
    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec!["구지", "읻따"]);
}
