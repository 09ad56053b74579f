//! 변환 옵션과 설정 파일 로드 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{G2pError, Result};

/// 변환 옵션
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConvertOptions {
    /// 표준 발음 대신 실제 언중의 발음을 따름 (ㅖ->ㅔ, 조사 의->에 등)
    #[serde(default)]
    pub descriptive: bool,
    /// 규칙 적용 과정을 기록
    #[serde(default)]
    pub verbose: bool,
    /// 소리가 같은 모음을 하나로 (ㅐ->ㅔ, ㅚ/ㅙ/ㅞ->ㅚ 등)
    #[serde(default)]
    pub group_vowels: bool,
    /// 결과를 음절로 조합 (false면 자모열)
    #[serde(default = "default_to_syllables")]
    pub to_syllables: bool,
}

fn default_to_syllables() -> bool {
    true
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            descriptive: false,
            verbose: false,
            group_vowels: false,
            to_syllables: default_to_syllables(),
        }
    }
}

impl ConvertOptions {
    /// 실제 발음 모드
    pub fn descriptive() -> Self {
        Self {
            descriptive: true,
            ..Self::default()
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// g2pk 설정
///
/// 경로가 없으면 내장 리소스를 사용합니다.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct G2pConfig {
    /// 기본 변환 옵션
    #[serde(default)]
    pub options: ConvertOptions,
    /// 숙어 목록 (`left===right`)
    #[serde(default)]
    pub idioms_path: Option<PathBuf>,
    /// 규칙표 (CSV)
    #[serde(default)]
    pub table_path: Option<PathBuf>,
    /// 규칙 설명
    #[serde(default)]
    pub rules_path: Option<PathBuf>,
    /// CMU 발음 사전
    #[serde(default)]
    pub cmudict_path: Option<PathBuf>,
}

/// 설정 파일 로드
pub fn load_config(path: &Path) -> Result<G2pConfig> {
    let content = fs::read_to_string(path).map_err(|source| G2pError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: G2pConfig = serde_json::from_str(&content)
        .map_err(|e| G2pError::Config(format!("{}: {}", path.display(), e)))?;
    log::debug!("설정 로드: {}", path.display());
    Ok(config)
}

/// 설정 파일 저장
pub fn save_config(path: &Path, config: &G2pConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| G2pError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| G2pError::Config(format!("직렬화 실패: {}", e)))?;
    fs::write(path, json).map_err(|source| G2pError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
