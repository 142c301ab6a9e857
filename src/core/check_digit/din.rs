/// Numeric value of a character in the DIN alphabet `0-9A-Z`.
///
/// Characters outside the alphabet count as 0.
fn value_of(c: char) -> u32 {
    match c.to_ascii_uppercase() {
        d @ '0'..='9' => d as u32 - '0' as u32,
        l @ 'A'..='Z' => l as u32 - 'A' as u32 + 10,
        _ => 0,
    }
}

/// Compute the DIN SPEC 91286 check digit of `code`.
///
/// `code` is country, party and instance concatenated without separators,
/// e.g. `"INTNM000071"`. Each value below 10 contributes `value * 2^k` and
/// advances `k` by one; two-digit values contribute their tens and units
/// digits at `2^k` and `2^(k+1)` and advance `k` by two. The digit is the
/// sum modulo 11, with 10 rendered as `'X'`.
///
/// The algorithm is total: unknown characters weigh 0.
pub fn din_check_digit(code: &str) -> char {
    // Both the sum and the current weight 2^k are kept modulo 11.
    let mut sum = 0u32;
    let mut weight = 1u32;

    for value in code.chars().map(value_of) {
        if value < 10 {
            sum = (sum + value * weight) % 11;
            weight = weight * 2 % 11;
        } else {
            let next = weight * 2 % 11;
            sum = (sum + (value / 10) * weight + (value % 10) * next) % 11;
            weight = next * 2 % 11;
        }
    }

    match sum {
        10 => 'X',
        d => char::from(b'0' + d as u8),
    }
}
