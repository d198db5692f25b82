//! 왼쪽 우선 단일 패스 검색
//!
//! 시작 위치 `i`마다 검색어 전체를 소비해 봅니다.
//! - 대상 문자의 자모 시퀀스가 검색어 문자의 자모 시퀀스로 시작하면 일치
//! - 구분 문자는 매칭이 시작된 뒤에만 건너뜀 (시작 위치에 오면 중단)
//! - 검색어를 모두 소비하는 순간 바로 반환 (역추적 없음)

use crate::core::decompose::{classify_char, decompose, CharClass, Jamos};

use super::ignorable::IgnorableSet;
use super::query::{fold_char, Query};
use super::result::HangulMatch;

/// 대상 문자 한 글자에 대한 판정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// 검색어 한 글자 소비
    Match,
    /// 구분 문자: 검색어를 소비하지 않고 구간에 포함
    Skip,
    /// 불일치: 현재 시작 위치 포기
    Abort,
}

/// 대상 문자 `tc`와 검색어 문자 `kc` 비교
/// - consumed: 현재 시작 위치에서 이미 소비한 검색어 글자 수
pub fn classify(tc: char, kc: char, consumed: usize, ignorable: &IgnorableSet) -> Step {
    step_for(tc, &decompose(kc), consumed, ignorable)
}

fn step_for(tc: char, key: &Jamos, consumed: usize, ignorable: &IgnorableSet) -> Step {
    if classify_char(tc, |c| ignorable.contains(c)) == CharClass::Ignorable {
        // 구분 문자로 매칭을 시작할 수 없음
        return if consumed == 0 { Step::Abort } else { Step::Skip };
    }
    if decompose(tc).starts_with(key) {
        Step::Match
    } else {
        Step::Abort
    }
}

/// 대상 문자열 소문자 변환 (한 글자 -> 한 글자, 오프셋 유지)
pub fn fold_case(text: &str) -> Vec<char> {
    text.chars().map(fold_char).collect()
}

/// 기본 구분 문자 집합으로 처음부터 검색
///
/// # Examples
/// ```
/// use hanmatch::{find, normalize_query, HangulMatch};
///
/// let query = normalize_query("ㄱㅎ");
/// assert_eq!(find(&query, "김홍도"), Some(HangulMatch::new(0, 2)));
/// assert_eq!(find(&normalize_query("ㅋㅌㅍ"), "가나다"), None);
/// ```
pub fn find(query: &Query, text: &str) -> Option<HangulMatch> {
    find_with(query, text, 0, &IgnorableSet::default())
}

/// 기본 구분 문자 집합으로 `start`(문자 오프셋)부터 검색
pub fn find_from(query: &Query, text: &str, start: usize) -> Option<HangulMatch> {
    find_with(query, text, start, &IgnorableSet::default())
}

/// 지정한 구분 문자 집합으로 검색
///
/// 검색어가 비어 있으면 항상 `(0, 0)`을 반환합니다.
pub fn find_with(
    query: &Query,
    text: &str,
    start: usize,
    ignorable: &IgnorableSet,
) -> Option<HangulMatch> {
    if query.is_empty() {
        return Some(HangulMatch::new(0, 0));
    }
    let target = fold_case(text);
    scan(query, &target, start, ignorable)
}

/// 소문자 변환이 끝난 대상 문자 배열 검색
pub(crate) fn scan(
    query: &Query,
    target: &[char],
    start: usize,
    ignorable: &IgnorableSet,
) -> Option<HangulMatch> {
    let keys: Vec<Jamos> = query.as_chars().iter().map(|&c| decompose(c)).collect();
    if keys.is_empty() {
        return Some(HangulMatch::new(0, 0));
    }

    // 구분 문자 없이 검색어가 들어갈 수 있는 마지막 시작 위치까지만 시도
    let last_start = (target.len() + 1).saturating_sub(keys.len());

    for i in start..last_start {
        let mut k = 0;
        let mut j = 0;
        while i + j < target.len() {
            match step_for(target[i + j], &keys[k], k, ignorable) {
                Step::Abort => break,
                Step::Skip => {}
                Step::Match => {
                    k += 1;
                    if k == keys.len() {
                        log::trace!("검색 일치: '{}' at {} (길이 {})", query, i, j + 1);
                        return Some(HangulMatch::new(i, j + 1));
                    }
                }
            }
            j += 1;
        }
    }
    None
}
