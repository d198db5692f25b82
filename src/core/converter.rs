//! 영문 키 입력 -> 한글 변환 (두벌식 조합 상태 기계)

use crate::core::compose::compose;
use crate::core::keymap::{map_key, KeyJamo};
use crate::core::unicode::{combine_jongseong, combine_jungseong, is_compat_choseong, jongseong_index, split_compound};

/// 조합 상태 (모든 자모는 호환용 자모 문자)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Empty,
    /// 초성만 입력됨
    Leading(char),
    /// 모음 없이 겹자음만 입력됨 (ㄳ)
    Cluster(char),
    /// 초성 없이 모음만 입력됨
    Vowel(char),
    /// 초성+중성
    Open { cho: char, jung: char },
    /// 초성+중성+종성
    Closed { cho: char, jung: char, jong: char },
}

/// 두벌식 조합기
#[derive(Debug)]
pub struct Composer {
    state: State,
    output: String,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

impl Composer {
    pub fn new() -> Self {
        Self {
            state: State::Empty,
            output: String::new(),
        }
    }

    /// 자모 하나 입력
    pub fn feed(&mut self, jamo: KeyJamo) {
        match jamo {
            KeyJamo::Consonant(c) => self.feed_consonant(c),
            KeyJamo::Vowel(v) => self.feed_vowel(v),
        }
    }

    /// 자판에 없는 문자: 조합 중인 글자를 확정하고 그대로 출력
    pub fn feed_passthrough(&mut self, c: char) {
        self.flush();
        self.output.push(c);
    }

    /// 입력 종료, 결과 반환
    pub fn finish(mut self) -> String {
        self.flush();
        self.output
    }

    fn feed_consonant(&mut self, c: char) {
        self.state = match self.state {
            State::Empty => State::Leading(c),
            State::Leading(l) => match combine_jongseong(l, c) {
                Some(cluster) => State::Cluster(cluster),
                None => {
                    self.output.push(l);
                    State::Leading(c)
                }
            },
            State::Cluster(x) => {
                self.output.push(x);
                State::Leading(c)
            }
            State::Vowel(v) => {
                self.output.push(v);
                State::Leading(c)
            }
            // ㄸ ㅃ ㅉ 는 종성 불가
            State::Open { cho, jung } if jongseong_index(c).is_some() => State::Closed { cho, jung, jong: c },
            State::Closed { cho, jung, jong } => match combine_jongseong(jong, c) {
                Some(jong) => State::Closed { cho, jung, jong },
                None => {
                    self.flush();
                    State::Leading(c)
                }
            },
            State::Open { .. } => {
                self.flush();
                State::Leading(c)
            }
        };
    }

    fn feed_vowel(&mut self, v: char) {
        self.state = match self.state {
            State::Empty => State::Vowel(v),
            State::Leading(cho) => State::Open { cho, jung: v },
            State::Cluster(x) => match split_compound(x) {
                Some((first, cho)) => {
                    self.output.push(first);
                    State::Open { cho, jung: v }
                }
                None => {
                    self.output.push(x);
                    State::Vowel(v)
                }
            },
            State::Vowel(p) => match combine_jungseong(p, v) {
                Some(jung) => State::Vowel(jung),
                None => {
                    self.output.push(p);
                    self.output.push(v);
                    State::Empty
                }
            },
            State::Open { cho, jung } => match combine_jungseong(jung, v) {
                Some(jung) => State::Open { cho, jung },
                None => {
                    self.flush();
                    self.output.push(v);
                    State::Empty
                }
            },
            // 종성을 다음 글자 초성으로 넘김 (겹받침은 뒷 자음만)
            State::Closed { cho, jung, jong } => match split_compound(jong) {
                Some((rest, next)) => {
                    self.push_syllable(cho, jung, Some(rest));
                    State::Open { cho: next, jung: v }
                }
                None if is_compat_choseong(jong) => {
                    self.push_syllable(cho, jung, None);
                    State::Open { cho: jong, jung: v }
                }
                None => {
                    self.flush();
                    self.output.push(v);
                    State::Empty
                }
            },
        };
    }

    fn push_syllable(&mut self, cho: char, jung: char, jong: Option<char>) {
        match compose(cho, Some(jung), jong) {
            Some(s) => self.output.push(s),
            None => {
                // 조합 불가 자모는 낱자로
                self.output.push(cho);
                self.output.push(jung);
                self.output.extend(jong);
            }
        }
    }

    /// 조합 중인 글자를 출력 버퍼에 확정
    fn flush(&mut self) {
        match std::mem::replace(&mut self.state, State::Empty) {
            State::Empty => {}
            State::Leading(c) | State::Cluster(c) | State::Vowel(c) => self.output.push(c),
            State::Open { cho, jung } => self.push_syllable(cho, jung, None),
            State::Closed { cho, jung, jong } => self.push_syllable(cho, jung, Some(jong)),
        }
    }
}

/// 영문 키 입력 문자열을 한글로 변환
/// 자판에 없는 문자(숫자, 특수문자, 매핑 없는 대문자 등)는 그대로 유지
///
/// # Examples
/// ```
/// use hanmatch::eng_to_korean;
///
/// assert_eq!(eng_to_korean("dkssudgktpdy"), "안녕하세요");
/// assert_eq!(eng_to_korean("rkqt"), "값");
/// ```
pub fn eng_to_korean(input: &str) -> String {
    let mut composer = Composer::new();
    for c in input.chars() {
        match map_key(c) {
            Some(jamo) => composer.feed(jamo),
            None => composer.feed_passthrough(c),
        }
    }
    let output = composer.finish();
    log::trace!("영문 -> 한글: '{}' -> '{}'", input, output);
    output
}
