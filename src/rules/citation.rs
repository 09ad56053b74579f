//! 규칙 번호 -> 설명 (표준 발음법 조항)
//!
//! 추적 출력에만 쓰입니다. 리소스 형식은 빈 줄로 구분된 블록이며,
//! 블록의 첫 줄이 규칙 번호, 나머지 줄이 설명입니다.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{G2pError, Result};

/// 내장 규칙 설명
pub const DEFAULT_RULES: &str = include_str!("../../resources/rules.txt");

/// 규칙 번호 -> 설명
#[derive(Debug, Clone, Default)]
pub struct CitationMap {
    entries: HashMap<String, String>,
}

impl CitationMap {
    /// 내장 규칙 설명 로드
    pub fn embedded() -> Result<Self> {
        Self::parse(DEFAULT_RULES)
    }

    /// 파일에서 로드
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| G2pError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// 문자열에서 로드
    pub fn parse(content: &str) -> Result<Self> {
        let mut entries = HashMap::new();
        let mut current: Option<(String, Vec<&str>)> = None;

        for (line_no, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                if let Some((id, text)) = current.take() {
                    entries.insert(id, text.join("\n"));
                }
                continue;
            }
            match current.as_mut() {
                Some((_, text)) => text.push(line),
                None => {
                    let id = line.trim().to_string();
                    if entries.contains_key(&id) {
                        return Err(G2pError::resource(
                            "rule descriptions",
                            line_no + 1,
                            format!("duplicate rule id `{id}`"),
                        ));
                    }
                    current = Some((id, Vec::new()));
                }
            }
        }
        if let Some((id, text)) = current {
            entries.insert(id, text.join("\n"));
        }

        Ok(Self { entries })
    }

    /// 규칙 번호에 해당하는 설명 (없으면 None)
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    /// 여러 규칙 번호의 설명을 줄바꿈으로 이어 붙임
    /// 알 수 없는 번호는 빈 줄, 번호가 없으면 빈 문자열
    pub fn describe(&self, ids: &[String]) -> String {
        ids.iter()
            .map(|id| self.get(id).unwrap_or(""))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// 등록된 규칙 수
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 비어 있는지 확인
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
