//! 문자 분해기: 한 글자를 비교 가능한 자모 시퀀스로 변환
//!
//! - 완성형 한글: 초성, 중성, (종성) 호환용 자모
//! - 한글 자모 영역 초성(ᄀ ~ ᄒ): 대응하는 호환용 자모 초성
//! - 그 외 모든 문자: 자기 자신
//!
//! 두 문자 `a`, `b`에 대해 `decompose(b)`가 `decompose(a)`로 시작하면
//! `a`는 `b`의 초성/부분 검색어로 일치합니다.

use std::fmt;
use std::ops::Deref;

use crate::core::unicode::{
    conjoining_choseong_to_compat, decompose_syllable, is_compat_jamo, is_syllable,
    COMPAT_CHOSEONG, COMPAT_JONGSEONG, COMPAT_JUNGSEONG,
};

/// 분해 결과 (코드포인트 1~3개)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Jamos {
    buf: [char; 3],
    len: u8,
}

impl Jamos {
    fn one(c: char) -> Self {
        Self {
            buf: [c, '\0', '\0'],
            len: 1,
        }
    }

    fn syllable(cho: char, jung: char, jong: Option<char>) -> Self {
        match jong {
            Some(jong) => Self {
                buf: [cho, jung, jong],
                len: 3,
            },
            None => Self {
                buf: [cho, jung, '\0'],
                len: 2,
            },
        }
    }

    /// 자모 슬라이스
    pub fn as_slice(&self) -> &[char] {
        &self.buf[..self.len as usize]
    }

    /// 첫 번째 자모 (완성형 한글이면 초성)
    pub fn leading(&self) -> char {
        self.buf[0]
    }

    /// `prefix`로 시작하는지 확인
    pub fn starts_with(&self, prefix: &Jamos) -> bool {
        self.as_slice().starts_with(prefix.as_slice())
    }
}

impl Deref for Jamos {
    type Target = [char];

    fn deref(&self) -> &[char] {
        self.as_slice()
    }
}

impl fmt::Debug for Jamos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl fmt::Display for Jamos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.as_slice() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// 문자 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// 완성형 한글 (가-힣)
    HangulSyllable,
    /// 호환용 자모 (ㄱ, ㅏ 등 낱자모)
    HangulJamo,
    /// 검색 중 건너뛸 수 있는 구분 문자
    Ignorable,
    /// 그 외 (영문, 숫자, 기타 기호)
    Other,
}

/// 문자 분류 (`is_ignorable`은 구분 문자 집합 판정)
///
/// 구분 문자 집합에 든 문자는 한글 범위에 있어도 `Ignorable`.
pub fn classify_char(c: char, is_ignorable: impl Fn(char) -> bool) -> CharClass {
    if is_ignorable(c) {
        CharClass::Ignorable
    } else if is_syllable(c) {
        CharClass::HangulSyllable
    } else if is_compat_jamo(c) {
        CharClass::HangulJamo
    } else {
        CharClass::Other
    }
}

/// 한 글자를 자모 시퀀스로 분해 (모든 코드포인트에 대해 정의됨)
///
/// # Examples
/// ```
/// use hanmatch::decompose;
///
/// assert_eq!(decompose('김').as_slice(), &['ㄱ', 'ㅣ', 'ㅁ']);
/// assert_eq!(decompose('가').as_slice(), &['ㄱ', 'ㅏ']);
/// assert_eq!(decompose('ㄱ').as_slice(), &['ㄱ']);
/// assert_eq!(decompose('a').as_slice(), &['a']);
/// ```
pub fn decompose(c: char) -> Jamos {
    if let Some((cho, jung, jong)) = decompose_syllable(c) {
        return Jamos::syllable(
            COMPAT_CHOSEONG[cho as usize],
            COMPAT_JUNGSEONG[jung as usize],
            COMPAT_JONGSEONG[jong as usize],
        );
    }
    if let Some(compat) = conjoining_choseong_to_compat(c) {
        return Jamos::one(compat);
    }
    Jamos::one(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_syllable_without_jongseong() {
        assert_eq!(decompose('가').as_slice(), &['ㄱ', 'ㅏ']);
        assert_eq!(decompose('파').as_slice(), &['ㅍ', 'ㅏ']);
        assert_eq!(decompose('의').as_slice(), &['ㅇ', 'ㅢ']);
    }

    #[test]
    fn test_decompose_syllable_with_jongseong() {
        assert_eq!(decompose('간').as_slice(), &['ㄱ', 'ㅏ', 'ㄴ']);
        assert_eq!(decompose('홍').as_slice(), &['ㅎ', 'ㅗ', 'ㅇ']);
        // 겹받침은 하나의 호환용 자모로 유지
        assert_eq!(decompose('갆').as_slice(), &['ㄱ', 'ㅏ', 'ㄶ']);
        assert_eq!(decompose('힣').as_slice(), &['ㅎ', 'ㅣ', 'ㅎ']);
    }

    #[test]
    fn test_decompose_jamo_is_identity() {
        assert_eq!(decompose('ㄱ').as_slice(), &['ㄱ']);
        assert_eq!(decompose('ㅏ').as_slice(), &['ㅏ']);
        assert_eq!(decompose('ㄳ').as_slice(), &['ㄳ']);
    }

    #[test]
    fn test_decompose_conjoining_choseong() {
        assert_eq!(decompose('\u{1100}').as_slice(), &['ㄱ']);
        assert_eq!(decompose('\u{1112}').as_slice(), &['ㅎ']);
        // 중성/종성 영역은 그대로
        assert_eq!(decompose('\u{1161}').as_slice(), &['\u{1161}']);
    }

    #[test]
    fn test_decompose_other_is_identity() {
        assert_eq!(decompose('a').as_slice(), &['a']);
        assert_eq!(decompose('7').as_slice(), &['7']);
        assert_eq!(decompose('-').as_slice(), &['-']);
        assert_eq!(decompose('漢').as_slice(), &['漢']);
    }

    #[test]
    fn test_decompose_is_deterministic() {
        for c in ['가', '힣', 'ㄱ', 'z', ' '] {
            assert_eq!(decompose(c), decompose(c));
        }
    }

    #[test]
    fn test_prefix_levels() {
        let gak = decompose('각');
        assert!(gak.starts_with(&decompose('ㄱ')));
        assert!(gak.starts_with(&decompose('가')));
        assert!(gak.starts_with(&decompose('각')));
        assert!(!gak.starts_with(&decompose('간')));
        assert!(!gak.starts_with(&decompose('ㅏ')));
        assert!(!decompose('가').starts_with(&gak));
    }

    #[test]
    fn test_leading_and_display() {
        let kim = decompose('김');
        assert_eq!(kim.leading(), 'ㄱ');
        assert_eq!(kim.len(), 3);
        assert_eq!(kim.to_string(), "ㄱㅣㅁ");
        assert_eq!(format!("{:?}", decompose('가')), "['ㄱ', 'ㅏ']");
    }

    #[test]
    fn test_classify_char() {
        let ignorable = |c: char| c == '-' || c == ' ';
        assert_eq!(classify_char('가', ignorable), CharClass::HangulSyllable);
        assert_eq!(classify_char('ㄱ', ignorable), CharClass::HangulJamo);
        assert_eq!(classify_char('-', ignorable), CharClass::Ignorable);
        assert_eq!(classify_char('a', ignorable), CharClass::Other);
        assert_eq!(classify_char('\t', ignorable), CharClass::Other);
    }

    #[test]
    fn test_classify_ignorable_hangul_range() {
        // 아래아(ㆍ)를 구분 문자로 지정하면 자모보다 우선
        let ignorable = |c: char| c == 'ㆍ';
        assert_eq!(classify_char('ㆍ', ignorable), CharClass::Ignorable);
        assert_eq!(classify_char('ㆍ', |_| false), CharClass::HangulJamo);
        assert_eq!(classify_char('가', ignorable), CharClass::HangulSyllable);
    }
}
