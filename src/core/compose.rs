//! 호환용 자모 -> 완성형 한글 조합

use crate::core::decompose::decompose;
use crate::core::unicode::{choseong_index, compose_syllable, jongseong_index, jungseong_index};

/// 초성/중성/종성 호환용 자모로 완성형 한글 생성
///
/// - 중성이 없으면 초성 자체를 반환
/// - 테이블에 없는 자모가 들어오면 None
///
/// # Examples
/// ```
/// use hanmatch::compose;
///
/// assert_eq!(compose('ㅎ', Some('ㅏ'), Some('ㄴ')), Some('한'));
/// assert_eq!(compose('ㄱ', Some('ㅏ'), None), Some('가'));
/// assert_eq!(compose('ㄱ', None, None), Some('ㄱ'));
/// ```
pub fn compose(choseong: char, jungseong: Option<char>, jongseong: Option<char>) -> Option<char> {
    let Some(jungseong) = jungseong else {
        return Some(choseong);
    };
    let cho = choseong_index(choseong)?;
    let jung = jungseong_index(jungseong)?;
    let jong = match jongseong {
        Some(c) => jongseong_index(c)?,
        None => 0,
    };
    compose_syllable(cho, jung, jong)
}

/// 자모 슬라이스(분해 결과)를 다시 한 글자로 조합
pub fn compose_jamos(jamos: &[char]) -> Option<char> {
    match *jamos {
        [cho] => compose(cho, None, None),
        [cho, jung] => compose(cho, Some(jung), None),
        [cho, jung, jong] => compose(cho, Some(jung), Some(jong)),
        _ => None,
    }
}

/// 글자의 초성 (한글이 아니면 그 문자 자체)
///
/// # Examples
/// ```
/// use hanmatch::leading_of;
///
/// assert_eq!(leading_of('김'), 'ㄱ');
/// assert_eq!(leading_of('a'), 'a');
/// ```
pub fn leading_of(c: char) -> char {
    decompose(c).leading()
}
