//! Bounded text windows around an offset, clamped to char boundaries

/// Largest char boundary `<= idx`
fn floor_boundary(text: &str, idx: usize) -> usize {
    let mut i = idx.min(text.len());
    while !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Smallest char boundary `>= idx`
fn ceil_boundary(text: &str, idx: usize) -> usize {
    let mut i = idx.min(text.len());
    while !text.is_char_boundary(i) {
        i += 1;
    }
    i
}

/// Up to `len` bytes starting at `start`
pub(crate) fn after(text: &str, start: usize, len: usize) -> &str {
    let start = floor_boundary(text, start);
    let end = floor_boundary(text, start.saturating_add(len));
    &text[start..end]
}

/// Up to `len` bytes ending at `end`
pub(crate) fn before(text: &str, end: usize, len: usize) -> &str {
    let end = floor_boundary(text, end);
    let start = ceil_boundary(text, end.saturating_sub(len));
    &text[start..end]
}

/// `before` bytes behind `at` through `after` bytes past it
pub(crate) fn around(text: &str, at: usize, before: usize, after: usize) -> &str {
    let at = floor_boundary(text, at);
    let start = ceil_boundary(text, at.saturating_sub(before));
    let end = floor_boundary(text, at.saturating_add(after));
    &text[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_clamp_to_text() {
        let text = "0123456789";
        assert_eq!(after(text, 7, 100), "789");
        assert_eq!(before(text, 3, 100), "012");
        assert_eq!(around(text, 5, 2, 2), "3456");
        assert_eq!(around(text, 1, 5, 50), "0123456789");
    }

    #[test]
    fn test_windows_never_split_multibyte_chars() {
        let text = "ääää";
        // each 'ä' is two bytes; odd lengths must not panic
        assert_eq!(after(text, 0, 3), "ä");
        assert_eq!(before(text, 8, 3), "ä");
        assert_eq!(around(text, 4, 3, 3), "ää");
    }
}
