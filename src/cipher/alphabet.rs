/// Letters of the cipher ring, in order
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Size of the ring
pub const ALPHABET_LEN: usize = ALPHABET.len();

/// Position of `c` in the alphabet, or `None` if it is not an uppercase Latin letter
pub fn position(c: char) -> Option<usize> {
    if c.is_ascii_uppercase() {
        Some((c as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Letter at `pos`, wrapping around the ring
pub fn letter(pos: usize) -> char {
    ALPHABET[pos % ALPHABET_LEN] as char
}

/// Rotate `pos` forward by `shift`
pub fn shift_forward(pos: usize, shift: usize) -> usize {
    (pos + shift) % ALPHABET_LEN
}

/// Rotate `pos` backward by `shift`
pub fn shift_backward(pos: usize, shift: usize) -> usize {
    (pos + ALPHABET_LEN - shift % ALPHABET_LEN) % ALPHABET_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position() {
        assert_eq!(position('A'), Some(0));
        assert_eq!(position('Z'), Some(25));
        assert_eq!(position('a'), None);
        assert_eq!(position(' '), None);
        assert_eq!(position('É'), None);
    }

    #[test]
    fn test_letter_wraps() {
        assert_eq!(letter(0), 'A');
        assert_eq!(letter(25), 'Z');
        assert_eq!(letter(26), 'A');
    }

    #[test]
    fn test_shifts_are_inverse() {
        for pos in 0..ALPHABET_LEN {
            for shift in 0..ALPHABET_LEN {
                assert_eq!(shift_backward(shift_forward(pos, shift), shift), pos);
            }
        }
    }

    #[test]
    fn test_shift_backward_wraps() {
        assert_eq!(shift_backward(0, 1), 25);
        assert_eq!(shift_backward(3, 3), 0);
    }
}
