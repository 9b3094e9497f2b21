// arg_utils.rs: size parsing shared by command-line flags and environment
// variables.

/// Parses an unsigned 32-bit integer from the start of `s`, optionally
/// followed by a size suffix.  Returns `None` if no leading digits are
/// present or the value overflows, or `Some((value, remainder))` where
/// `remainder` is the unconsumed tail of `s`.
///
/// Recognised suffixes (case-sensitive):
///   `K` / `KB` / `KiB`  → multiply by 1 024
///   `M` / `MB` / `MiB`  → multiply by 1 048 576
pub fn read_u32_from_str(s: &str) -> Option<(u32, &str)> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let mut result: u32 = s[..digits].parse().ok()?;
    let mut rest = &s[digits..];

    let shift = match rest.as_bytes().first() {
        Some(b'K') => 10,
        Some(b'M') => 20,
        _ => 0,
    };
    if shift != 0 {
        result = result.checked_mul(1 << shift)?;
        rest = &rest[1..];
        rest = rest.strip_prefix('i').unwrap_or(rest);
        rest = rest.strip_prefix('B').unwrap_or(rest);
    }

    Some((result, rest))
}

/// `clap` value parser for size arguments: the whole string must be a
/// number with an optional suffix.
pub fn parse_size(s: &str) -> Result<usize, String> {
    match read_u32_from_str(s) {
        Some((value, "")) => Ok(value as usize),
        Some((_, rest)) => Err(format!("unexpected trailing characters '{}'", rest)),
        None => Err(format!("'{}' is not a valid size", s)),
    }
}
