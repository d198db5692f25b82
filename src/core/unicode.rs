//! 유니코드 한글 블록 상수 및 자모 테이블

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
pub const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 한글 자모 영역 초성 (ᄀ ~ ᄒ)
const CONJOINING_CHOSEONG_FIRST: u32 = 0x1100;
const CONJOINING_CHOSEONG_LAST: u32 = 0x1112;

/// 호환용 자모 초성 (인덱스 순서)
pub const COMPAT_CHOSEONG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 호환용 자모 중성 (인덱스 순서)
pub const COMPAT_JUNGSEONG: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ',
    'ㅣ',
];

/// 호환용 자모 종성 (인덱스 0 = 종성 없음)
pub const COMPAT_JONGSEONG: [Option<char>; 28] = [
    None,
    Some('ㄱ'), Some('ㄲ'), Some('ㄳ'), Some('ㄴ'), Some('ㄵ'), Some('ㄶ'), Some('ㄷ'),
    Some('ㄹ'), Some('ㄺ'), Some('ㄻ'), Some('ㄼ'), Some('ㄽ'), Some('ㄾ'), Some('ㄿ'),
    Some('ㅀ'), Some('ㅁ'), Some('ㅂ'), Some('ㅄ'), Some('ㅅ'), Some('ㅆ'), Some('ㅇ'),
    Some('ㅈ'), Some('ㅊ'), Some('ㅋ'), Some('ㅌ'), Some('ㅍ'), Some('ㅎ'),
];

/// 겹모음 조합 (앞 모음, 뒷 모음, 결과)
const COMPOUND_JUNGSEONG: [(char, char, char); 7] = [
    ('ㅗ', 'ㅏ', 'ㅘ'), ('ㅗ', 'ㅐ', 'ㅙ'), ('ㅗ', 'ㅣ', 'ㅚ'),
    ('ㅜ', 'ㅓ', 'ㅝ'), ('ㅜ', 'ㅔ', 'ㅞ'), ('ㅜ', 'ㅣ', 'ㅟ'),
    ('ㅡ', 'ㅣ', 'ㅢ'),
];

/// 겹받침 조합 (앞 자음, 뒷 자음, 결과)
const COMPOUND_JONGSEONG: [(char, char, char); 11] = [
    ('ㄱ', 'ㅅ', 'ㄳ'), ('ㄴ', 'ㅈ', 'ㄵ'), ('ㄴ', 'ㅎ', 'ㄶ'),
    ('ㄹ', 'ㄱ', 'ㄺ'), ('ㄹ', 'ㅁ', 'ㄻ'), ('ㄹ', 'ㅂ', 'ㄼ'),
    ('ㄹ', 'ㅅ', 'ㄽ'), ('ㄹ', 'ㅌ', 'ㄾ'), ('ㄹ', 'ㅍ', 'ㄿ'),
    ('ㄹ', 'ㅎ', 'ㅀ'), ('ㅂ', 'ㅅ', 'ㅄ'),
];

/// 완성형 한글(가-힣)인지 확인
pub fn is_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 호환용 자모 영역 (U+3131 ~ U+318E) 문자인지 확인
pub fn is_compat_jamo(c: char) -> bool {
    (0x3131..=0x318E).contains(&(c as u32))
}

/// 호환용 자모 초성(ㄱ ~ ㅎ 중 초성으로 쓰이는 19자)인지 확인
pub fn is_compat_choseong(c: char) -> bool {
    // 테이블이 코드포인트 순으로 정렬되어 있음
    COMPAT_CHOSEONG.binary_search(&c).is_ok()
}

/// 한글 자모 영역 초성(ᄀ ~ ᄒ)을 호환용 자모로 변환
pub fn conjoining_choseong_to_compat(c: char) -> Option<char> {
    let code = c as u32;
    if (CONJOINING_CHOSEONG_FIRST..=CONJOINING_CHOSEONG_LAST).contains(&code) {
        Some(COMPAT_CHOSEONG[(code - CONJOINING_CHOSEONG_FIRST) as usize])
    } else {
        None
    }
}

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 호환용 자모 초성 -> 초성 인덱스
pub fn choseong_index(c: char) -> Option<u32> {
    COMPAT_CHOSEONG.binary_search(&c).ok().map(|i| i as u32)
}

/// 호환용 자모 모음 -> 중성 인덱스
pub fn jungseong_index(c: char) -> Option<u32> {
    COMPAT_JUNGSEONG.iter().position(|&v| v == c).map(|i| i as u32)
}

/// 호환용 자모 자음 -> 종성 인덱스 (종성으로 쓸 수 없는 자음은 None)
pub fn jongseong_index(c: char) -> Option<u32> {
    COMPAT_JONGSEONG
        .iter()
        .position(|&j| j == Some(c))
        .map(|i| i as u32)
}

/// 두 모음을 겹모음으로 조합 (ㅗ + ㅏ = ㅘ)
pub fn combine_jungseong(first: char, second: char) -> Option<char> {
    COMPOUND_JUNGSEONG
        .iter()
        .find(|&&(a, b, _)| a == first && b == second)
        .map(|&(_, _, c)| c)
}

/// 두 자음을 겹받침으로 조합 (ㄱ + ㅅ = ㄳ)
pub fn combine_jongseong(first: char, second: char) -> Option<char> {
    COMPOUND_JONGSEONG
        .iter()
        .find(|&&(a, b, _)| a == first && b == second)
        .map(|&(_, _, c)| c)
}

/// 겹모음/겹받침을 두 자모로 분리 (ㄺ -> ㄹ, ㄱ)
pub fn split_compound(c: char) -> Option<(char, char)> {
    COMPOUND_JUNGSEONG
        .iter()
        .chain(COMPOUND_JONGSEONG.iter())
        .find(|&&(_, _, compound)| compound == c)
        .map(|&(a, b, _)| (a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_syllable() {
        assert_eq!(compose_syllable(0, 0, 0), Some('가'));
        assert_eq!(compose_syllable(0, 0, 1), Some('각'));
        assert_eq!(compose_syllable(18, 0, 4), Some('한'));
        assert_eq!(compose_syllable(18, 20, 27), Some('힣'));
        assert_eq!(compose_syllable(19, 0, 0), None);
        assert_eq!(compose_syllable(0, 21, 0), None);
        assert_eq!(compose_syllable(0, 0, 28), None);
    }

    #[test]
    fn test_decompose_syllable() {
        assert_eq!(decompose_syllable('가'), Some((0, 0, 0)));
        assert_eq!(decompose_syllable('한'), Some((18, 0, 4)));
        assert_eq!(decompose_syllable('힣'), Some((18, 20, 27)));

        assert_eq!(decompose_syllable('ㄱ'), None);
        assert_eq!(decompose_syllable('a'), None);
    }

    #[test]
    fn test_compat_choseong_table_is_sorted() {
        assert!(COMPAT_CHOSEONG.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_is_compat_choseong() {
        assert!(is_compat_choseong('ㄱ'));
        assert!(is_compat_choseong('ㅉ'));
        assert!(is_compat_choseong('ㅎ'));

        // 겹받침, 모음은 초성이 아님
        assert!(!is_compat_choseong('ㄳ'));
        assert!(!is_compat_choseong('ㅏ'));
        assert!(!is_compat_choseong('가'));
    }

    #[test]
    fn test_conjoining_choseong_to_compat() {
        assert_eq!(conjoining_choseong_to_compat('\u{1100}'), Some('ㄱ'));
        assert_eq!(conjoining_choseong_to_compat('\u{110B}'), Some('ㅇ'));
        assert_eq!(conjoining_choseong_to_compat('\u{1112}'), Some('ㅎ'));
        assert_eq!(conjoining_choseong_to_compat('\u{1113}'), None);
        assert_eq!(conjoining_choseong_to_compat('ㄱ'), None);
    }

    #[test]
    fn test_jamo_indices() {
        assert_eq!(choseong_index('ㅎ'), Some(18));
        assert_eq!(jungseong_index('ㅢ'), Some(19));
        assert_eq!(jongseong_index('ㄺ'), Some(9));

        // ㄸ, ㅃ, ㅉ 는 종성 불가
        assert_eq!(jongseong_index('ㄸ'), None);
        assert_eq!(jongseong_index('ㅃ'), None);
        assert_eq!(choseong_index('ㅏ'), None);
    }

    #[test]
    fn test_combine_and_split_compound() {
        assert_eq!(combine_jungseong('ㅗ', 'ㅏ'), Some('ㅘ'));
        assert_eq!(combine_jungseong('ㅡ', 'ㅣ'), Some('ㅢ'));
        assert_eq!(combine_jungseong('ㅏ', 'ㅗ'), None);

        assert_eq!(combine_jongseong('ㄹ', 'ㄱ'), Some('ㄺ'));
        assert_eq!(combine_jongseong('ㅂ', 'ㅅ'), Some('ㅄ'));
        assert_eq!(combine_jongseong('ㅅ', 'ㄱ'), None);

        assert_eq!(split_compound('ㅘ'), Some(('ㅗ', 'ㅏ')));
        assert_eq!(split_compound('ㅀ'), Some(('ㄹ', 'ㅎ')));
        assert_eq!(split_compound('ㄱ'), None);
        assert_eq!(split_compound('ㅏ'), None);
    }

    #[test]
    fn test_compound_jongseong_are_valid_finals() {
        for &(a, b, c) in COMPOUND_JONGSEONG.iter() {
            assert!(jongseong_index(a).is_some(), "{}", a);
            assert!(is_compat_choseong(b), "{}", b);
            assert!(jongseong_index(c).is_some(), "{}", c);
        }
        for &(_, _, c) in COMPOUND_JUNGSEONG.iter() {
            assert!(jungseong_index(c).is_some(), "{}", c);
        }
    }
}
