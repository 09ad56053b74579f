//! G2P 변환기
//!
//! 변환 순서:
//!
//! 1. 숙어 치환
//! 2. 영어 -> 한글
//! 3. 경계 표지 붙이기
//! 4. 숫자 읽기
//! 5. 분해
//! 6. 특수 규칙 (+ 경계 표지 제거)
//! 7. 규칙표
//! 8. 연음
//! 9. 모음 통일 (선택)
//! 10. 음절 조합 (선택)
//!
//! 규칙과 리소스는 생성 시점에 한 번 만들어지고 이후 바뀌지 않습니다.

use crate::config::{ConvertOptions, G2pConfig};
use crate::core::codec::{compose, decompose, normalize_vowels};
use crate::error::{G2pError, Result};
use crate::preprocess::english::{convert_english, CmuDict, PronunciationDictionary};
use crate::preprocess::idioms::IdiomList;
use crate::preprocess::numerals::{spell_numerals, KoreanNumeralSpeller, NumeralSpeller};
use crate::preprocess::annotate::Tagger;
use crate::rules::{CitationMap, LinkingRules, RuleTable, SpecialRules};
use crate::trace::{TraceRecord, Tracer};

const IDIOM_RULE: &str = "from idioms.txt";

/// 변환 결과와 과정 기록
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub output: String,
    pub trace: Vec<TraceRecord>,
}

/// 한국어 G2P 변환기
pub struct G2p {
    idioms: IdiomList,
    tagger: Box<dyn Tagger>,
    dictionary: Box<dyn PronunciationDictionary>,
    numeral_speller: Box<dyn NumeralSpeller>,
    special: SpecialRules,
    table: RuleTable,
    linking: LinkingRules,
    citations: CitationMap,
    options: ConvertOptions,
}

impl G2p {
    pub fn builder() -> G2pBuilder {
        G2pBuilder::default()
    }

    /// 설정에 지정된 기본 옵션
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// 텍스트를 발음으로 변환
    pub fn convert(&self, text: &str, options: &ConvertOptions) -> String {
        let mut tracer = Tracer::new(options.verbose);
        self.run(text, options, &mut tracer)
    }

    /// 변환하며 과정을 함께 반환 (verbose 여부와 무관하게 기록)
    pub fn convert_traced(&self, text: &str, options: &ConvertOptions) -> Conversion {
        let mut tracer = Tracer::new(true);
        let output = self.run(text, options, &mut tracer);
        Conversion {
            output,
            trace: tracer.into_records(),
        }
    }

    /// 숙어 치환만 수행
    pub fn preprocess_idioms(&self, text: &str, verbose: bool) -> String {
        let mut tracer = Tracer::new(verbose);
        self.apply_idioms(text, &mut tracer)
    }

    fn apply_idioms(&self, text: &str, tracer: &mut Tracer) -> String {
        let out = self.idioms.apply(text);
        tracer.record_text("idioms", text, &out, IDIOM_RULE);
        out
    }

    fn run(&self, text: &str, options: &ConvertOptions, tracer: &mut Tracer) -> String {
        let text = self.apply_idioms(text, tracer);
        let text = convert_english(&text, self.dictionary.as_ref());
        let text = self.tagger.tag(&text);
        let text = spell_numerals(&text, self.numeral_speller.as_ref());

        let stream = decompose(&text);
        let stream = self.special.apply(stream, options, &self.citations, tracer);
        let stream = self.table.apply(stream, &self.citations, tracer);
        let stream = self.linking.apply(stream, &self.citations, tracer);
        let stream = if options.group_vowels {
            normalize_vowels(&stream)
        } else {
            stream
        };

        if options.to_syllables {
            compose(&stream)
        } else {
            stream.to_string()
        }
    }
}

/// G2p 생성기
///
/// 태거와 발음 사전은 필수입니다. 나머지는 내장 리소스를 사용합니다.
#[derive(Default)]
pub struct G2pBuilder {
    tagger: Option<Box<dyn Tagger>>,
    dictionary: Option<Box<dyn PronunciationDictionary>>,
    numeral_speller: Option<Box<dyn NumeralSpeller>>,
    idioms: Option<IdiomList>,
    table: Option<RuleTable>,
    citations: Option<CitationMap>,
    options: ConvertOptions,
}

impl G2pBuilder {
    pub fn tagger(mut self, tagger: impl Tagger + 'static) -> Self {
        self.tagger = Some(Box::new(tagger));
        self
    }

    pub fn dictionary(mut self, dictionary: impl PronunciationDictionary + 'static) -> Self {
        self.dictionary = Some(Box::new(dictionary));
        self
    }

    pub fn numeral_speller(mut self, speller: impl NumeralSpeller + 'static) -> Self {
        self.numeral_speller = Some(Box::new(speller));
        self
    }

    pub fn idioms(mut self, idioms: IdiomList) -> Self {
        self.idioms = Some(idioms);
        self
    }

    pub fn rule_table(mut self, table: RuleTable) -> Self {
        self.table = Some(table);
        self
    }

    pub fn citations(mut self, citations: CitationMap) -> Self {
        self.citations = Some(citations);
        self
    }

    pub fn options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    /// 설정 파일에 지정된 리소스를 로드
    pub fn with_config(mut self, config: &G2pConfig) -> Result<Self> {
        if let Some(path) = &config.idioms_path {
            self.idioms = Some(IdiomList::load(path)?);
        }
        if let Some(path) = &config.table_path {
            self.table = Some(RuleTable::load(path)?);
        }
        if let Some(path) = &config.rules_path {
            self.citations = Some(CitationMap::load(path)?);
        }
        if let Some(path) = &config.cmudict_path {
            self.dictionary = Some(Box::new(CmuDict::load(path)?));
        }
        self.options = config.options;
        Ok(self)
    }

    pub fn build(self) -> Result<G2p> {
        let tagger = self
            .tagger
            .ok_or(G2pError::MissingDependency("morphological tagger"))?;
        let dictionary = self
            .dictionary
            .ok_or(G2pError::MissingDependency("pronunciation dictionary"))?;
        let numeral_speller = self
            .numeral_speller
            .unwrap_or_else(|| Box::new(KoreanNumeralSpeller));

        let idioms = match self.idioms {
            Some(idioms) => idioms,
            None => IdiomList::embedded()?,
        };
        let table = match self.table {
            Some(table) => table,
            None => RuleTable::embedded()?,
        };
        let citations = match self.citations {
            Some(citations) => citations,
            None => CitationMap::embedded()?,
        };

        log::debug!(
            "G2p 생성: 숙어 {}개, 규칙표 {}개, 규칙 설명 {}개",
            idioms.len(),
            table.len(),
            citations.len()
        );

        Ok(G2p {
            idioms,
            tagger,
            dictionary,
            numeral_speller,
            special: SpecialRules::new()?,
            table,
            linking: LinkingRules::new()?,
            citations,
            options: self.options,
        })
    }
}
