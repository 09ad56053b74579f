//! 숙어 치환 (규칙으로 처리하기 어려운 단어)
//!
//! 형식: 한 줄에 `원래===발음`, `#` 뒤는 주석.
//! 위에서부터 한 번씩 차례로 문자열 그대로 치환합니다.

use std::fs;
use std::path::Path;

use crate::error::{G2pError, Result};

/// 내장 숙어 목록
pub const DEFAULT_IDIOMS: &str = include_str!("../../resources/idioms.txt");

const RESOURCE: &str = "idiom list";
const SEPARATOR: &str = "===";

/// 순서 있는 숙어 목록
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdiomList {
    entries: Vec<(String, String)>,
}

impl IdiomList {
    pub fn embedded() -> Result<Self> {
        Self::parse(DEFAULT_IDIOMS)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| G2pError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for (line_no, line) in content.lines().enumerate() {
            let line = line.split('#').next().unwrap_or("").trim();
            let Some((left, right)) = line.split_once(SEPARATOR) else {
                continue;
            };
            let (left, right) = (left.trim(), right.trim());
            if left.is_empty() {
                return Err(G2pError::resource(RESOURCE, line_no + 1, "empty left side"));
            }
            if right.contains(SEPARATOR) {
                return Err(G2pError::resource(
                    RESOURCE,
                    line_no + 1,
                    format!("more than one `{SEPARATOR}`"),
                ));
            }
            entries.push((left.to_string(), right.to_string()));
        }
        log::debug!("숙어 목록 로드: {}개", entries.len());
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 목록 순서대로 치환
    pub fn apply(&self, text: &str) -> String {
        self.entries
            .iter()
            .fold(text.to_string(), |acc, (left, right)| {
                if acc.contains(left.as_str()) {
                    acc.replace(left.as_str(), right)
                } else {
                    acc
                }
            })
    }
}
