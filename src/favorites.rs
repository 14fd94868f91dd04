/// 32-bit rolling hash (`h = h * 31 + unit`, wrapping) over UTF-16 code units.
///
/// Persisted favorites store the decimal form of this value, so it must stay
/// bit-exact. Different texts can collide; a collision is treated as the same
/// favorite.
pub fn text_hash(text: &str) -> i32 {
    text.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

pub fn favorite_key(text: &str) -> String {
    text_hash(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_hashes_to_zero() {
        assert_eq!(favorite_key(""), "0");
    }

    #[test]
    fn small_inputs_match_known_values() {
        assert_eq!(text_hash("a"), 97);
        assert_eq!(text_hash("ab"), 97 * 31 + 98);
        assert_eq!(text_hash("hello"), 99_162_322);
    }

    #[test]
    fn long_input_wraps_into_negative_range() {
        assert_eq!(text_hash("hello world"), 1_794_106_052);
        assert_eq!(text_hash("The quick brown fox"), -1_739_336_029);
    }

    #[test]
    fn astral_chars_hash_as_surrogate_pairs() {
        let pair: Vec<u16> = "😀".encode_utf16().collect();
        let expected = i32::from(pair[0]) * 31 + i32::from(pair[1]);
        assert_eq!(text_hash("😀"), expected);
    }
}
