pub mod point;
pub mod vec2;

/// Letter for the `index`-th entity of a sequence starting at `base`.
pub(crate) fn letter(base: char, index: usize) -> char {
    char::from_u32(base as u32 + index as u32).unwrap_or('?')
}
