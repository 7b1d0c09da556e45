use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DigitError {
    #[error("digit sequence is empty")]
    Empty,
    #[error("invalid digit {digit} at index {index}")]
    InvalidDigit { index: usize, digit: u8 },
}

fn validate(digits: &[u8]) -> Result<(), DigitError> {
    if digits.is_empty() {
        return Err(DigitError::Empty);
    }
    match digits.iter().position(|&d| d > 9) {
        Some(index) => Err(DigitError::InvalidDigit {
            index,
            digit: digits[index],
        }),
        None => Ok(()),
    }
}

/// Adds one to the decimal number whose digits are given most significant
/// first. Leading zeros are kept.
pub fn plus_one(digits: &[u8]) -> Result<Vec<u8>, DigitError> {
    let mut out = digits.to_vec();
    plus_one_in_place(&mut out)?;
    Ok(out)
}

/// In-place variant; only grows `digits` when every digit is 9.
pub fn plus_one_in_place(digits: &mut Vec<u8>) -> Result<(), DigitError> {
    validate(digits)?;

    for d in digits.iter_mut().rev() {
        if *d < 9 {
            *d += 1;
            return Ok(());
        }
        *d = 0;
    }

    digits.insert(0, 1);
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn to_digits(mut n: u128) -> Vec<u8> {
        let mut digits = Vec::new();
        loop {
            digits.push((n % 10) as u8);
            n /= 10;
            if n == 0 {
                break;
            }
        }
        digits.reverse();
        digits
    }

    #[test]
    fn known_cases() {
        let cases: [(&[u8], &[u8]); 7] = [
            (&[0], &[1]),
            (&[1, 2, 3], &[1, 2, 4]),
            (&[4, 3, 2, 1], &[4, 3, 2, 2]),
            (&[9], &[1, 0]),
            (&[9, 9, 9], &[1, 0, 0, 0]),
            (&[1, 9, 9], &[2, 0, 0]),
            (&[0, 9], &[1, 0]),
        ];

        for (input, expected) in cases {
            assert_eq!(plus_one(input).unwrap(), expected, "input={input:?}");
        }
    }

    #[test]
    fn leading_zeros_are_kept() {
        assert_eq!(plus_one(&[0, 0]).unwrap(), [0, 1]);
        assert_eq!(plus_one(&[0, 0, 9]).unwrap(), [0, 1, 0]);
    }

    #[test]
    fn invalid_input() {
        assert_eq!(plus_one(&[]), Err(DigitError::Empty));
        assert_eq!(
            plus_one(&[1, 10, 3]),
            Err(DigitError::InvalidDigit { index: 1, digit: 10 })
        );

        let mut digits = vec![9, 9, 12];
        assert!(plus_one_in_place(&mut digits).is_err());
        assert_eq!(digits, [9, 9, 12]);
    }

    #[test]
    fn in_place_grows_only_on_full_carry() {
        let mut digits = Vec::with_capacity(4);
        digits.extend_from_slice(&[9, 9, 9]);
        plus_one_in_place(&mut digits).unwrap();
        assert_eq!(digits, [1, 0, 0, 0]);

        let mut digits = vec![8, 9];
        plus_one_in_place(&mut digits).unwrap();
        assert_eq!(digits, [9, 0]);
    }

    #[test]
    fn random_cases_match_u128() {
        let mut rng = StdRng::seed_from_u64(0x0A1D_2026);
        for _ in 0..2_000 {
            let bits = rng.random_range(0..=100);
            let n = rng.random::<u128>() >> (128 - bits).min(127);
            assert_eq!(plus_one(&to_digits(n)).unwrap(), to_digits(n + 1), "n={n}");
        }
    }

    #[test]
    fn powers_of_ten_minus_one() {
        let mut n = 0_u128;
        for len in 1..=30 {
            n = n * 10 + 9;
            let got = plus_one(&vec![9; len]).unwrap();
            assert_eq!(got, to_digits(n + 1));
            assert_eq!(got.len(), len + 1);
        }
    }
}
