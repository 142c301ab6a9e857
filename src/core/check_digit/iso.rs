use tracing::trace;

use crate::core::error::CheckDigitError;

/// Number of characters the ISO 15118-1 check digit is computed over.
pub const ISO_CODE_LEN: usize = 14;

/// 2x2 integer matrix, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Matrix {
    m11: u32,
    m12: u32,
    m21: u32,
    m22: u32,
}

impl Matrix {
    const fn new(m11: u32, m12: u32, m21: u32, m22: u32) -> Self {
        Self { m11, m12, m21, m22 }
    }

    /// Split a cipher value into its matrix form.
    const fn decode(x: u32) -> Self {
        Self::new(x & 1, (x >> 1) & 1, (x >> 2) & 3, x >> 4)
    }

    const fn mul(self, o: Self) -> Self {
        Self::new(
            self.m11 * o.m11 + self.m12 * o.m21,
            self.m11 * o.m12 + self.m12 * o.m22,
            self.m21 * o.m11 + self.m22 * o.m21,
            self.m21 * o.m12 + self.m22 * o.m22,
        )
    }

    /// `seed^1 ..= seed^14`.
    const fn powers(seed: Self) -> [Self; ISO_CODE_LEN] {
        let mut out = [seed; ISO_CODE_LEN];
        let mut i = 1;
        while i < ISO_CODE_LEN {
            out[i] = out[i - 1].mul(seed);
            i += 1;
        }
        out
    }
}

/// Row vector.
#[derive(Debug, Clone, Copy, Default)]
struct Vector(u32, u32);

impl Vector {
    fn add(self, o: Self) -> Self {
        Self(self.0 + o.0, self.1 + o.1)
    }

    fn mul(self, m: Matrix) -> Self {
        Self(
            self.0 * m.m11 + self.1 * m.m21,
            self.0 * m.m12 + self.1 * m.m22,
        )
    }
}

static P1: [Matrix; ISO_CODE_LEN] = Matrix::powers(Matrix::new(0, 1, 1, 1));
static P2: [Matrix; ISO_CODE_LEN] = Matrix::powers(Matrix::new(0, 1, 1, 2));

/// `-P2^-15` over Z/3.
const NEG_P2_MINUS_15: Matrix = Matrix::new(0, 2, 2, 1);

/// Substitution cipher for `0-9A-Z`, in alphabet order.
const CIPHER: [(char, u32); 36] = [
    ('0', 0), ('1', 16), ('2', 32), ('3', 4), ('4', 20), ('5', 36),
    ('6', 8), ('7', 24), ('8', 40), ('9', 2), ('A', 18), ('B', 34),
    ('C', 6), ('D', 22), ('E', 38), ('F', 10), ('G', 26), ('H', 42),
    ('I', 1), ('J', 17), ('K', 33), ('L', 5), ('M', 21), ('N', 37),
    ('O', 9), ('P', 25), ('Q', 41), ('R', 3), ('S', 19), ('T', 35),
    ('U', 7), ('V', 23), ('W', 39), ('X', 11), ('Y', 27), ('Z', 43),
];

fn encode(c: char) -> Option<Matrix> {
    let index = match c {
        '0'..='9' => c as usize - '0' as usize,
        'A'..='Z' => c as usize - 'A' as usize + 10,
        _ => return None,
    };
    Some(Matrix::decode(CIPHER[index].1))
}

fn decode(m: Matrix) -> Option<char> {
    CIPHER
        .iter()
        .find(|&&(_, x)| Matrix::decode(x) == m)
        .map(|&(c, _)| c)
}

/// Compute the ISO 15118-1 / eMI3 check digit of `code`.
///
/// `code` must be exactly 14 uppercase ASCII letters or digits: country,
/// party and instance without separators (for eMI3 including the `C`
/// marker), e.g. `"NLTNMC00122045"`.
///
/// ```
/// use mobilityid::iso_check_digit;
///
/// assert_eq!(iso_check_digit("NN123ABCDEFGHI"), Ok('T'));
/// assert!(iso_check_digit("").is_err());
/// ```
pub fn iso_check_digit(code: &str) -> Result<char, CheckDigitError> {
    if code.len() != ISO_CODE_LEN {
        return Err(CheckDigitError::Length {
            expected: ISO_CODE_LEN,
            actual: code.len(),
        });
    }

    let mut t1 = Vector::default();
    let mut t2 = Vector::default();
    for (i, c) in code.chars().enumerate() {
        let m = encode(c).ok_or(CheckDigitError::InvalidCharacter(c))?;
        t1 = t1.add(Vector(m.m11, m.m12).mul(P1[i]));
        t2 = t2.add(Vector(m.m21, m.m22).mul(P2[i]));
    }

    let t2 = t2.mul(NEG_P2_MINUS_15);
    let check = Matrix::new(t1.0 & 1, t1.1 & 1, t2.0 % 3, t2.1 % 3);

    let digit = decode(check).ok_or(CheckDigitError::Undecodable)?;
    trace!(code, %digit, "computed ISO check digit");
    Ok(digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_check_digits() {
        let cases = [
            ("NN123ABCDEFGHI", 'T'),
            ("FRXYZ123456789", '2'),
            ("ITA1B2C3E4F5G6", '4'),
            ("ESZU8WOX834H1D", 'R'),
            ("PT73902837ABCZ", 'Z'),
            ("DE83DUIEN83QGZ", 'D'),
            ("DE83DUIEN83ZGQ", 'M'),
            ("DE8AA001234567", '0'),
            ("NLTNMC00122045", 'K'),
            ("NLTNM001234567", 'X'),
        ];
        for (code, expected) in cases {
            assert_eq!(iso_check_digit(code), Ok(expected), "code {code}");
        }
    }

    #[test]
    fn wrong_length() {
        assert_eq!(
            iso_check_digit(""),
            Err(CheckDigitError::Length {
                expected: 14,
                actual: 0
            })
        );
        assert!(matches!(
            iso_check_digit("DE8AA0012345678"),
            Err(CheckDigitError::Length { actual: 15, .. })
        ));
    }

    #[test]
    fn non_ascii_input_rejected() {
        // 14 characters, but more than 14 bytes
        assert!(iso_check_digit("Европарулит123").is_err());
        assert!(iso_check_digit("DE٨٣DUIEN٨٣QGZ").is_err());
    }

    #[test]
    fn lowercase_rejected() {
        assert_eq!(
            iso_check_digit("nn123ABCDEFGHI"),
            Err(CheckDigitError::InvalidCharacter('n'))
        );
    }

    #[test]
    fn symbols_rejected() {
        assert_eq!(
            iso_check_digit("NN123ABCD*FGHI"),
            Err(CheckDigitError::InvalidCharacter('*'))
        );
    }

    #[test]
    fn power_tables() {
        assert_eq!(P1[0], Matrix::new(0, 1, 1, 1));
        assert_eq!(P1[1], Matrix::new(1, 1, 1, 2));
        assert_eq!(P2[1], Matrix::new(1, 2, 2, 5));
    }

    #[test]
    fn every_cipher_entry_decodes_to_itself() {
        for (c, _) in CIPHER {
            let m = encode(c).unwrap();
            assert_eq!(decode(m), Some(c));
        }
    }
}
