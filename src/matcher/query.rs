//! 검색어 정규화
//!
//! 소문자로 바꾼 뒤 영문, 숫자, 한글(음절, 자모, 확장 자모), 아래아 계열
//! 가운뎃점 문자만 남깁니다.

use std::fmt;

/// 정규화된 검색어
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    chars: Vec<char>,
}

impl Query {
    /// 원본 검색어를 정규화하여 생성
    pub fn new(raw: &str) -> Self {
        normalize_query(raw)
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// 검색어 글자 수
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl From<&str> for Query {
    fn from(raw: &str) -> Self {
        normalize_query(raw)
    }
}

/// 검색어에 남길 수 있는 문자인지 확인
pub fn is_query_char(c: char) -> bool {
    matches!(c,
        '0'..='9'
        | 'a'..='z'
        | 'A'..='Z'
        // 한글 자모
        | '\u{1100}'..='\u{11FF}'
        // 호환용 자모 (ㄱ-ㅎ, ㅏ-ㅣ, 옛 자모)
        | '\u{3131}'..='\u{3163}'
        | '\u{3165}'..='\u{318E}'
        // 한글 자모 확장-A, 확장-B
        | '\u{A960}'..='\u{A97C}'
        | '\u{D7B0}'..='\u{D7FB}'
        // 완성형
        | '\u{AC00}'..='\u{D7A3}'
        // 가운뎃점, 아래아 표기용 문자 (·ᆞᆢ•․‥∙〮ㆍ)
        | '\u{00B7}'
        | '\u{2022}'
        | '\u{2024}'
        | '\u{2025}'
        | '\u{2219}'
        | '\u{302E}'
    )
}

/// 한 글자 소문자 변환 (검색어와 대상 문자열 공통)
///
/// 여러 글자로 바뀌는 문자(`İ` -> `i̇`)는 첫 글자만 사용하여 길이를 유지합니다.
pub fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// 원본 검색어를 소문자로 바꾸고 검색 가능한 문자만 남김
///
/// # Examples
/// ```
/// use hanmatch::normalize_query;
///
/// assert_eq!(normalize_query("가나다 ABC123!@#").to_string(), "가나다abc123");
/// assert!(normalize_query("!@# ").is_empty());
/// ```
pub fn normalize_query(raw: &str) -> Query {
    let chars: Vec<char> = raw
        .chars()
        .map(fold_char)
        .filter(|&c| is_query_char(c))
        .collect();

    if log::log_enabled!(log::Level::Debug) {
        let dropped = raw.chars().count().saturating_sub(chars.len());
        if dropped > 0 {
            log::debug!("검색어 정규화: '{}' -> '{}' ({}자 제거)", raw, chars.iter().collect::<String>(), dropped);
        }
    }

    Query { chars }
}
