//! 한글 음절 분해/조합, 두벌식 영문 키 변환

pub mod compose;
pub mod converter;
pub mod decompose;
pub mod keymap;
pub mod unicode;
