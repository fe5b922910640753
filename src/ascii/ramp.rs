//! Brightness ramp used by the terminal renderer.

/// Characters ordered from sparsest to densest.
///
/// A cell's perceived brightness picks one of these; six levels are enough to
/// make shapes readable on a dark terminal without a palette.
pub const BRIGHTNESS_RAMP: &[char] = &[' ', '.', ':', 'a', '@', '#'];

/// The sparsest character, used for empty or fully transparent cells.
pub fn sparsest(ramp: &[char]) -> char {
    ramp.first().copied().unwrap_or(' ')
}

/// The densest character, used for fully bright opaque cells.
pub fn densest(ramp: &[char]) -> char {
    ramp.last().copied().unwrap_or(' ')
}
