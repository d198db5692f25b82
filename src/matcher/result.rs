//! 검색 결과

use std::ops::Range;

/// 일치 구간 (대상 문자열의 문자 단위 오프셋)
///
/// `length`는 건너뛴 구분 문자까지 포함한 글자 수입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HangulMatch {
    pub start: usize,
    pub length: usize,
}

impl HangulMatch {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// 끝 오프셋 (미포함)
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// 문자 단위 범위
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// 원본 문자열에서 일치한 부분을 잘라냄
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        let mut indices = text.char_indices().map(|(i, _)| i).chain(std::iter::once(text.len()));
        let start = indices.nth(self.start).unwrap_or(text.len());
        let end = if self.length == 0 {
            start
        } else {
            indices.nth(self.length - 1).unwrap_or(text.len())
        };
        &text[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        let m = HangulMatch::new(2, 3);
        assert_eq!(m.end(), 5);
        assert_eq!(m.range(), 2..5);
    }

    #[test]
    fn test_slice() {
        let text = "가나-다라";
        assert_eq!(HangulMatch::new(1, 3).slice(text), "나-다");
        assert_eq!(HangulMatch::new(0, 5).slice(text), text);
        assert_eq!(HangulMatch::new(0, 0).slice(text), "");
        assert_eq!(HangulMatch::new(0, 0).slice(""), "");
    }
}
