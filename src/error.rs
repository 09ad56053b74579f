//! 엔진 초기화 에러
//!
//! 변환 자체는 실패하지 않습니다. 에러는 모두 엔진 생성 시점
//! (외부 구성요소 누락, 리소스 파일 누락/형식 오류)에 발생합니다.

use std::path::PathBuf;

use thiserror::Error;

/// g2pk 결과 타입
pub type Result<T> = std::result::Result<T, G2pError>;

/// 엔진 초기화 에러
#[derive(Error, Debug)]
pub enum G2pError {
    /// 필수 외부 구성요소가 주어지지 않음
    #[error("missing dependency: {0} (provide it through G2p::builder())")]
    MissingDependency(&'static str),

    /// 리소스 파일 읽기 실패
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 리소스 형식 오류
    #[error("malformed {resource} at line {line}: {message}")]
    Resource {
        resource: String,
        line: usize,
        message: String,
    },

    /// 규칙 표기 오류
    #[error("invalid rule pattern `{pattern}`: {message}")]
    Pattern { pattern: String, message: String },

    /// 설정 파일 오류
    #[error("configuration error: {0}")]
    Config(String),
}

impl G2pError {
    /// 리소스 형식 오류 생성
    pub fn resource(resource: &str, line: usize, message: impl Into<String>) -> Self {
        G2pError::Resource {
            resource: resource.to_string(),
            line,
            message: message.into(),
        }
    }

    /// 규칙 표기 오류 생성
    pub fn pattern(pattern: &str, message: impl Into<String>) -> Self {
        G2pError::Pattern {
            pattern: pattern.to_string(),
            message: message.into(),
        }
    }
}
