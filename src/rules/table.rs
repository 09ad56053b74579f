//! 받침 + 초성 규칙표
//!
//! 표는 CSV 격자입니다. 첫 행은 초성 패턴, 각 행의 첫 칸은 받침이며
//! 나머지 칸은 `치환(규칙번호/규칙번호)` 형식입니다. 빈 칸은 규칙 없음.
//! 초성 자리의 `$`는 "단어 끝(뒤에 자모가 없음)"을 뜻합니다.
//!
//! 항목은 행 우선 순서로 읽고, 그 순서대로 하나씩 스트림 전체에 적용합니다.

use std::fs;
use std::path::Path;

use crate::core::stream::UnitStream;
use crate::error::{G2pError, Result};
use crate::rules::citation::CitationMap;
use crate::rules::pattern::{Context, Rewrite};
use crate::trace::Tracer;

/// 내장 규칙표
pub const DEFAULT_TABLE: &str = include_str!("../../resources/table.csv");

const RESOURCE: &str = "rule table";
const WORD_END: &str = "$";

/// 규칙표 항목 하나
#[derive(Debug, Clone)]
pub struct TableEntry {
    rewrite: Rewrite,
    citations: Vec<String>,
}

impl TableEntry {
    pub fn new(rewrite: Rewrite, citations: Vec<String>) -> Self {
        Self { rewrite, citations }
    }

    pub fn rewrite(&self) -> &Rewrite {
        &self.rewrite
    }

    /// 규칙 번호 (추적용, 비어 있을 수 있음)
    pub fn citations(&self) -> &[String] {
        &self.citations
    }
}

/// 순서 있는 규칙표
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    entries: Vec<TableEntry>,
}

impl RuleTable {
    /// 내장 규칙표 로드
    pub fn embedded() -> Result<Self> {
        Self::parse_csv(DEFAULT_TABLE)
    }

    /// 파일에서 로드
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| G2pError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_csv(&content)
    }

    /// CSV 격자 해석
    pub fn parse_csv(content: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(content.as_bytes());

        let mut records = reader.records();
        let header = match records.next() {
            Some(record) => record.map_err(|e| G2pError::resource(RESOURCE, 1, e.to_string()))?,
            None => return Ok(Self::default()),
        };
        let onsets: Vec<String> = header.iter().skip(1).map(|s| s.trim().to_string()).collect();

        let mut entries = Vec::new();
        for (index, record) in records.enumerate() {
            let line = index + 2;
            let record = record.map_err(|e| G2pError::resource(RESOURCE, line, e.to_string()))?;
            let mut cells = record.iter();
            let coda = cells.next().map(str::trim).unwrap_or("");
            if coda.is_empty() {
                return Err(G2pError::resource(RESOURCE, line, "empty coda cell"));
            }

            for (onset, cell) in onsets.iter().zip(cells) {
                let cell = cell.trim();
                if cell.is_empty() {
                    continue;
                }
                let (replacement, citations) = split_cell(cell)
                    .ok_or_else(|| G2pError::resource(RESOURCE, line, format!("bad cell `{cell}`")))?;
                let rewrite = if onset == WORD_END {
                    Rewrite::parse(coda, replacement)?.with_context(Context::AtWordEnd)
                } else {
                    Rewrite::parse(&format!("{coda}{onset}"), replacement)?
                };
                entries.push(TableEntry::new(rewrite, citations));
            }
        }

        log::debug!("규칙표 로드: {}개 항목", entries.len());
        Ok(Self { entries })
    }

    /// (패턴, 치환, 규칙 번호) 목록으로 생성
    pub fn from_entries<'a, I>(triples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str, &'a [&'a str])>,
    {
        let entries = triples
            .into_iter()
            .map(|(pattern, replacement, ids)| {
                Ok(TableEntry::new(
                    Rewrite::parse(pattern, replacement)?,
                    ids.iter().map(|id| id.to_string()).collect(),
                ))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 항목 순서대로 적용 (항목마다 한 번의 패스, 재적용 없음)
    pub fn apply(&self, stream: UnitStream, citations: &CitationMap, tracer: &mut Tracer) -> UnitStream {
        self.entries
            .iter()
            .enumerate()
            .fold(stream, |current, (i, entry)| {
                let next = entry.rewrite.apply(&current);
                if tracer.is_enabled() {
                    let pass = format!("table[{i}]");
                    tracer.record(&pass, &current, &next, &citations.describe(&entry.citations));
                }
                next
            })
    }
}

/// `치환(9/23)` -> ("치환", ["9", "23"])
fn split_cell(cell: &str) -> Option<(&str, Vec<String>)> {
    match cell.find('(') {
        Some(open) => {
            let inner = cell[open + 1..].strip_suffix(')')?;
            let ids = inner
                .split('/')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(String::from)
                .collect();
            Some((&cell[..open], ids))
        }
        None => Some((cell, Vec::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::{compose, decompose};

    fn run(table: &RuleTable, text: &str) -> String {
        let mut tracer = Tracer::new(false);
        compose(&table.apply(decompose(text), &CitationMap::default(), &mut tracer))
    }

    #[test]
    fn test_split_cell() {
        assert_eq!(split_cell("ᆼᄂ(19/18)"), Some(("ᆼᄂ", vec!["19".into(), "18".into()])));
        assert_eq!(split_cell("ᆼᄂ"), Some(("ᆼᄂ", vec![])));
        assert_eq!(split_cell("ᆼᄂ(19"), None);
    }

    #[test]
    fn test_parse_csv_row_major() {
        let table = RuleTable::parse_csv(",ᄂ,ᄅ\nᆨ,ᆼᄂ(18),ᆼᄂ(19/18)\nᆷ,,ᆷᄂ(19)\n").unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.entries()[0].citations(), ["18"]);
        assert_eq!(table.entries()[1].citations(), ["19", "18"]);
        assert_eq!(table.entries()[2].citations(), ["19"]);
    }

    #[test]
    fn test_word_end_column() {
        let table = RuleTable::parse_csv(",ᄃ,$\nᆺ,ᆮᄄ(9/23),ᆮ(9)\n").unwrap();
        assert_eq!(run(&table, "옷 웃다"), "옫 욷따");
    }

    #[test]
    fn test_parse_errors() {
        let result = RuleTable::parse_csv(",ᄂ\n,ᆼᄂ\n");
        assert!(matches!(result, Err(G2pError::Resource { line: 2, .. })));

        let result = RuleTable::parse_csv(",ᄂ\nᆨ,ᆼᄂ(18\n");
        assert!(matches!(result, Err(G2pError::Resource { line: 2, .. })));

        // 행 길이가 다르면 csv 에러
        let result = RuleTable::parse_csv(",ᄂ,ᄅ\nᆨ,ᆼᄂ\n");
        assert!(matches!(result, Err(G2pError::Resource { line: 2, .. })));
    }

    #[test]
    fn test_independent_entries_commute() {
        let a = ("ᆨᄂ", "ᆼᄂ", &["18"][..]);
        let b = ("ᆸᄆ", "ᆷᄆ", &["18"][..]);
        let ab = RuleTable::from_entries([a, b]).unwrap();
        let ba = RuleTable::from_entries([b, a]).unwrap();
        assert_eq!(run(&ab, "국내 밥물"), "궁내 밤물");
        assert_eq!(run(&ab, "국내 밥물"), run(&ba, "국내 밥물"));
    }

    #[test]
    fn test_overlapping_entries_apply_in_order() {
        let first = ("ᆨᄅ", "ᆨᄂ", &["19"][..]);
        let second = ("ᆨᄂ", "ᆼᄂ", &["18"][..]);
        let forward = RuleTable::from_entries([first, second]).unwrap();
        let backward = RuleTable::from_entries([second, first]).unwrap();
        assert_eq!(run(&forward, "막론"), "망논");
        assert_eq!(run(&backward, "막론"), "막논");
    }

    #[test]
    fn test_no_fixed_point_iteration() {
        // 결과가 다시 일치해도 같은 항목은 한 번만
        let table = RuleTable::from_entries([("ᆫᄅ", "ᆫᄂ", &[][..])]).unwrap();
        assert_eq!(run(&table, "신라"), "신나");
    }

    #[test]
    fn test_embedded_table() {
        let table = RuleTable::embedded().unwrap();
        assert!(!table.is_empty());
        for (input, expected) in [
            ("국물", "궁물"),
            ("있다", "읻따"),
            ("닭과", "닥꽈"),
            ("신라", "실라"),
            ("칼날", "칼랄"),
            ("담력", "담녁"),
            ("백리", "뱅니"),
            ("놓고", "노코"),
            ("많소", "만쏘"),
            ("않네", "안네"),
            ("닳는", "달른"),
            ("각하", "가카"),
            ("밝히다", "발키다"),
            ("앉히다", "안치다"),
            ("꽃", "꼳"),
            ("값", "갑"),
        ] {
            assert_eq!(run(&table, input), expected, "{input}");
        }
    }

    #[test]
    fn test_trace_per_entry() {
        let table = RuleTable::from_entries([
            ("ᆨᄆ", "ᆼᄆ", &["18"][..]),
            ("ᆸᄆ", "ᆷᄆ", &["18"][..]),
        ])
        .unwrap();
        let citations = CitationMap::parse("18\n비음화").unwrap();
        let mut tracer = Tracer::new(true);
        table.apply(decompose("국물"), &citations, &mut tracer);
        let records = tracer.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].pass, "table[0]");
        assert_eq!(records[0].rule, "비음화");
    }
}
