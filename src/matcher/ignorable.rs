//! 검색 중 건너뛸 수 있는 구분 문자 집합

use std::collections::HashSet;

use lazy_static::lazy_static;

/// 기본 구분 문자: ASCII 기호와 공백
pub const DEFAULT_IGNORABLE: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?~` ";

lazy_static! {
    static ref DEFAULT_SET: HashSet<char> = DEFAULT_IGNORABLE.chars().collect();
}

/// 구분 문자 집합
///
/// 매칭이 시작된 뒤에는 건너뛰지만, 매칭을 시작할 수는 없습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnorableSet {
    chars: HashSet<char>,
}

impl IgnorableSet {
    /// 문자열에 포함된 문자들로 집합 생성
    pub fn new(chars: &str) -> Self {
        Self {
            chars: chars.chars().collect(),
        }
    }

    /// 건너뛸 문자가 없는 집합
    pub fn empty() -> Self {
        Self {
            chars: HashSet::new(),
        }
    }

    /// 구분 문자인지 확인
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for IgnorableSet {
    fn default() -> Self {
        Self {
            chars: DEFAULT_SET.clone(),
        }
    }
}
