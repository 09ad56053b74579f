//! 변환 과정 기록 (verbose 모드)
//!
//! 각 패스 전후 스트림을 비교해 바뀐 경우에만 기록합니다.
//! 경계 표지만 사라진 경우는 기록하지 않습니다.

use serde::Serialize;

use crate::core::codec::compose;
use crate::core::stream::UnitStream;

/// 패스 하나의 변화
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceRecord {
    /// 패스 이름 ("idioms", "jyeo", "table[12]", "link1" 등)
    pub pass: String,
    /// 적용 전 (음절 조합 결과)
    pub before: String,
    /// 적용 후 (음절 조합 결과)
    pub after: String,
    /// 규칙 설명 (없으면 빈 문자열)
    pub rule: String,
}

/// 변환 한 번의 기록 수집기
#[derive(Debug, Default)]
pub struct Tracer {
    enabled: bool,
    records: Vec<TraceRecord>,
}

impl Tracer {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            records: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// 스트림 단위 패스 기록
    pub fn record(&mut self, pass: &str, before: &UnitStream, after: &UnitStream, rule: &str) {
        if !self.enabled || after == before {
            return;
        }
        if before.has_markers() && *after == before.without_markers() {
            return;
        }
        self.push(pass, compose(before), compose(after), rule);
    }

    /// 문자열 단위 패스 기록 (숙어 치환 등 분해 이전 단계)
    pub fn record_text(&mut self, pass: &str, before: &str, after: &str, rule: &str) {
        if !self.enabled || after == before {
            return;
        }
        self.push(pass, before.to_string(), after.to_string(), rule);
    }

    fn push(&mut self, pass: &str, before: String, after: String, rule: &str) {
        log::info!("[{}] {} -> {}", pass, before, after);
        if !rule.is_empty() {
            log::info!("{}", rule);
        }
        self.records.push(TraceRecord {
            pass: pass.to_string(),
            before,
            after,
            rule: rule.to_string(),
        });
    }

    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<TraceRecord> {
        self.records
    }
}
