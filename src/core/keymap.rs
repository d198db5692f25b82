//! 두벌식 자판 배열: 영문 키 <-> 호환용 자모

use crate::core::decompose::decompose;
use crate::core::unicode::{is_compat_jamo, is_syllable, split_compound};

/// 자음 키와 자모 (같은 순서)
const CONSONANT_KEYS: &str = "rRseEfaqQtTdwWczxvg";
const CONSONANT_JAMO: &str = "ㄱㄲㄴㄷㄸㄹㅁㅂㅃㅅㅆㅇㅈㅉㅊㅋㅌㅍㅎ";

/// 모음 키와 자모 (같은 순서)
const VOWEL_KEYS: &str = "koiOjpuPhynbml";
const VOWEL_JAMO: &str = "ㅏㅐㅑㅒㅓㅔㅕㅖㅗㅛㅜㅠㅡㅣ";

/// 키 입력으로 얻은 자모
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyJamo {
    Consonant(char),
    Vowel(char),
}

fn lookup(keys: &str, jamo: &str, c: char) -> Option<char> {
    keys.chars().position(|k| k == c).and_then(|i| jamo.chars().nth(i))
}

/// 영문 키 -> 자모 (매핑 없는 문자는 None)
///
/// 대문자는 Q W E R T O P 만 쌍자음/ㅒ/ㅖ 로 매핑되고 나머지 대문자는 None.
pub fn map_key(c: char) -> Option<KeyJamo> {
    if let Some(j) = lookup(CONSONANT_KEYS, CONSONANT_JAMO, c) {
        Some(KeyJamo::Consonant(j))
    } else {
        lookup(VOWEL_KEYS, VOWEL_JAMO, c).map(KeyJamo::Vowel)
    }
}

/// 단일 자모 -> 영문 키
fn key_of(jamo: char) -> Option<char> {
    lookup(CONSONANT_JAMO, CONSONANT_KEYS, jamo).or_else(|| lookup(VOWEL_JAMO, VOWEL_KEYS, jamo))
}

/// 자모 하나를 입력할 때 누르는 키를 버퍼에 추가 (겹모음/겹받침은 두 키)
fn push_keys(jamo: char, out: &mut String) -> bool {
    if let Some(k) = key_of(jamo) {
        out.push(k);
        return true;
    }
    match split_compound(jamo).and_then(|(a, b)| Some((key_of(a)?, key_of(b)?))) {
        Some((a, b)) => {
            out.push(a);
            out.push(b);
            true
        }
        None => false,
    }
}

/// 한글 문자열을 두벌식 영문 키 입력으로 변환
/// 완성형 한글과 호환용 자모만 변환하고 나머지 문자는 그대로 유지
///
/// # Examples
/// ```
/// use hanmatch::core::keymap::korean_to_eng;
///
/// assert_eq!(korean_to_eng("안녕"), "dkssud");
/// assert_eq!(korean_to_eng("읽기 123"), "dlfrrl 123");
/// ```
pub fn korean_to_eng(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if is_syllable(c) {
            for &j in decompose(c).iter() {
                push_keys(j, &mut out);
            }
        } else if !(is_compat_jamo(c) && push_keys(c, &mut out)) {
            // 옛한글 자모 등 자판에 없는 자모는 그대로
            out.push(c);
        }
    }
    out
}
