//! 검색기 설정 로드 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::matcher::DEFAULT_IGNORABLE;

/// 설정 로드 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 읽기 실패
    Io(std::io::Error),
    /// JSON 파싱 실패
    Parse(String),
    /// 설정값 오류
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "설정 파일 읽기 오류: {}", e),
            ConfigError::Parse(s) => write!(f, "설정 JSON 파싱 오류: {}", s),
            ConfigError::Invalid(s) => write!(f, "설정값 오류: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

/// 검색기 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MatcherConfig {
    /// 매칭 도중 건너뛸 수 있는 구분 문자
    #[serde(default = "default_ignorable")]
    pub ignorable: String,
    /// 대상 문자열 검색 상한 (문자 수, None = 제한 없음)
    #[serde(default)]
    pub max_text_chars: Option<usize>,
}

fn default_ignorable() -> String {
    DEFAULT_IGNORABLE.to_string()
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            ignorable: default_ignorable(),
            max_text_chars: None,
        }
    }
}

impl MatcherConfig {
    pub fn with_ignorable(mut self, ignorable: impl Into<String>) -> Self {
        self.ignorable = ignorable.into();
        self
    }

    pub fn with_max_text_chars(mut self, max: usize) -> Self {
        self.max_text_chars = Some(max);
        self
    }

    /// JSON 문자열에서 설정 로드
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: MatcherConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// JSON 파일에서 설정 로드
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        // 구분 문자는 검색어 문자와 겹칠 수 없음 (겹치면 해당 문자로 매칭 시작 불가)
        if let Some(c) = self.ignorable.chars().find(|c| c.is_alphanumeric()) {
            return Err(ConfigError::Invalid(format!("구분 문자에 글자/숫자 포함: {:?}", c)));
        }
        if self.max_text_chars == Some(0) {
            return Err(ConfigError::Invalid("max_text_chars는 0보다 커야 합니다".into()));
        }
        Ok(())
    }
}

/// 기본 설정 파일 경로: ~/.config/hanmatch/config.json
pub fn config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .map(|home| home.join(".config").join("hanmatch").join("config.json"))
}

/// 기본 경로에서 설정 로드 (파일이 없거나 잘못되면 기본값)
pub fn load_config() -> MatcherConfig {
    let Some(path) = config_path() else {
        return MatcherConfig::default();
    };
    if !path.exists() {
        return MatcherConfig::default();
    }
    MatcherConfig::load(&path).unwrap_or_else(|e| {
        log::warn!("설정 로드 실패, 기본값 사용 ({}): {}", path.display(), e);
        MatcherConfig::default()
    })
}
