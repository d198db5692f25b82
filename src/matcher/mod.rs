//! 한글 검색 (초성 검색 포함)
//!
//! 검색어는 세 단계로 입력할 수 있습니다.
//!
//! - 초성만: `ㄱㄴ` -> `가나`, `김내` 등
//! - 초성+중성: `가` -> `가`, `각`, `간` 등
//! - 완성 글자: `각` -> `각`만
//!
//! 대상 문자열의 구분 문자(공백, ASCII 기호)는 매칭이 시작된 뒤에만 건너뜁니다.
//!
//! # 사용 예시
//!
//! ```
//! use hanmatch::{HangulMatch, HangulMatcher};
//!
//! let matcher = HangulMatcher::new("ㅎㄱㄷ");
//! assert_eq!(matcher.find("홍-길동"), Some(HangulMatch::new(0, 4)));
//! assert!(!matcher.is_match("김홍도"));
//! ```

mod ignorable;
mod query;
mod result;
mod scan;

pub use ignorable::{IgnorableSet, DEFAULT_IGNORABLE};
pub use query::{fold_char, is_query_char, normalize_query, Query};
pub use result::HangulMatch;
pub use scan::{classify, find, find_from, find_with, fold_case, Step};

use crate::config::MatcherConfig;

/// 검색어와 구분 문자 집합을 보관하는 검색기
#[derive(Debug, Clone, Default)]
pub struct HangulMatcher {
    query: Query,
    ignorable: IgnorableSet,
    max_text_chars: Option<usize>,
}

impl HangulMatcher {
    /// 기본 설정으로 검색기 생성
    pub fn new(keyword: &str) -> Self {
        Self {
            query: normalize_query(keyword),
            ..Self::default()
        }
    }

    /// 설정을 적용하여 검색기 생성
    pub fn with_config(keyword: &str, config: &MatcherConfig) -> Self {
        Self {
            query: normalize_query(keyword),
            ignorable: IgnorableSet::new(&config.ignorable),
            max_text_chars: config.max_text_chars,
        }
    }

    /// 검색어 교체 (구분 문자 집합은 유지)
    pub fn keyword(&mut self, keyword: &str) -> &mut Self {
        self.query = normalize_query(keyword);
        self
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn ignorable(&self) -> &IgnorableSet {
        &self.ignorable
    }

    /// 처음부터 검색
    pub fn find(&self, text: &str) -> Option<HangulMatch> {
        self.find_from(text, 0)
    }

    /// `start`(문자 오프셋)부터 검색
    pub fn find_from(&self, text: &str, start: usize) -> Option<HangulMatch> {
        if self.query.is_empty() {
            return Some(HangulMatch::new(0, 0));
        }
        let mut target = fold_case(text);
        if let Some(max) = self.max_text_chars {
            target.truncate(max);
        }
        scan::scan(&self.query, &target, start, &self.ignorable)
    }

    /// 일치 여부
    pub fn is_match(&self, text: &str) -> bool {
        self.find(text).is_some()
    }
}
