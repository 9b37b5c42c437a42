//! Decimal digit extraction and rounding
//!
//! Digits come from the shortest decimal string that round-trips to the
//! same `f64`, so `1.005` rounds to `1.01` at two places even though the
//! binary value sits slightly below the tie.

/// An unsigned decimal `0.d1d2d3... × 10^point`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimal {
    /// Significant digits without leading or trailing zeros; empty for zero
    digits: Vec<u8>,
    /// Position of the decimal point relative to the first digit
    point: i32,
}

impl Decimal {
    /// Digits of `|value|`; `value` must be finite
    pub fn from_f64(value: f64) -> Self {
        let text = format!("{:e}", value.abs());
        let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);

        let digits: Vec<u8> = mantissa
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();

        let mut decimal = Self {
            digits,
            point: exponent + 1,
        };
        decimal.trim();
        decimal
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Round half away from zero so at most `max_fraction` fraction digits remain
    pub fn round_to_fraction(&mut self, max_fraction: usize) {
        let keep = i64::from(self.point) + max_fraction as i64;
        if keep >= self.digits.len() as i64 {
            return;
        }
        if keep < 0 {
            self.digits.clear();
            self.point = 0;
            return;
        }

        let keep = keep as usize;
        let round_up = self.digits.get(keep).is_some_and(|digit| *digit >= 5);
        self.digits.truncate(keep);

        if round_up {
            let mut carry = true;
            for digit in self.digits.iter_mut().rev() {
                if *digit == 9 {
                    *digit = 0;
                } else {
                    *digit += 1;
                    carry = false;
                    break;
                }
            }
            if carry {
                self.digits.insert(0, 1);
                self.point += 1;
            }
        }
        self.trim();
    }

    /// Integer digits as ASCII, left-padded with zeros to `min_integer`
    pub fn integer_string(&self, min_integer: usize) -> String {
        let mut result = String::new();
        if self.point > 0 {
            let point = self.point as usize;
            for idx in 0..point {
                let digit = self.digits.get(idx).copied().unwrap_or(0);
                result.push(char::from(b'0' + digit));
            }
        }
        if result.len() < min_integer {
            let padding = "0".repeat(min_integer - result.len());
            result.insert_str(0, &padding);
        }
        result
    }

    /// Fraction digits as ASCII, right-padded with zeros to `min_fraction`
    pub fn fraction_string(&self, min_fraction: usize) -> String {
        let mut result = String::new();
        let len = self.digits.len() as i32;
        if self.point < len {
            for _ in self.point..0 {
                result.push('0');
            }
            let start = self.point.max(0) as usize;
            for digit in &self.digits[start..] {
                result.push(char::from(b'0' + digit));
            }
        }
        while result.len() < min_fraction {
            result.push('0');
        }
        result
    }

    fn trim(&mut self) {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        let leading = self.digits.iter().take_while(|digit| **digit == 0).count();
        if leading > 0 {
            self.digits.drain(..leading);
            self.point -= leading as i32;
        }
        if self.digits.is_empty() {
            self.point = 0;
        }
    }
}

/// Render a number the way ECMAScript's `Number#toString` does
///
/// # Examples
/// ```
/// use locale_number_guide::formatter::js_number_string;
///
/// assert_eq!(js_number_string(1234567.89), "1234567.89");
/// assert_eq!(js_number_string(1e21), "1e+21");
/// ```
pub fn js_number_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}Infinity");
    }

    let decimal = Decimal::from_f64(value);
    let digits: String = decimal
        .digits
        .iter()
        .map(|digit| char::from(b'0' + digit))
        .collect();
    let k = digits.len() as i32;
    let n = decimal.point;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (integer, fraction) = digits.split_at(n as usize);
        format!("{integer}.{fraction}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let exponent = n - 1;
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{exponent_sign}{}", exponent.abs())
        } else {
            format!("{first}.{rest}e{exponent_sign}{}", exponent.abs())
        }
    };
    format!("{sign}{body}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rounded(value: f64, max_fraction: usize) -> (String, String) {
        let mut decimal = Decimal::from_f64(value);
        decimal.round_to_fraction(max_fraction);
        (decimal.integer_string(1), decimal.fraction_string(0))
    }

    #[test]
    fn test_digit_extraction() {
        let decimal = Decimal::from_f64(1234567.89);
        assert_eq!(decimal.integer_string(1), "1234567");
        assert_eq!(decimal.fraction_string(0), "89");

        let small = Decimal::from_f64(0.0001);
        assert_eq!(small.integer_string(1), "0");
        assert_eq!(small.fraction_string(0), "0001");

        let zero = Decimal::from_f64(0.0);
        assert!(zero.is_zero());
        assert_eq!(zero.integer_string(1), "0");
        assert_eq!(zero.fraction_string(2), "00");
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(rounded(0.5, 0), ("1".to_string(), String::new()));
        assert_eq!(rounded(2.5, 0), ("3".to_string(), String::new()));
        assert_eq!(rounded(0.4, 0), ("0".to_string(), String::new()));
        assert_eq!(rounded(1.005, 2), ("1".to_string(), "01".to_string()));
        assert_eq!(rounded(3.14159265359, 3), ("3".to_string(), "142".to_string()));
    }

    #[test]
    fn test_round_carries_into_integer() {
        assert_eq!(rounded(9.9996, 3), ("10".to_string(), String::new()));
        assert_eq!(rounded(999.95, 1), ("1000".to_string(), String::new()));
        assert_eq!(rounded(0.0006, 3), ("0".to_string(), "001".to_string()));
    }

    #[test]
    fn test_round_below_precision() {
        assert_eq!(rounded(0.0001, 3), ("0".to_string(), String::new()));
        assert!({
            let mut decimal = Decimal::from_f64(0.00004);
            decimal.round_to_fraction(0);
            decimal.is_zero()
        });
    }

    #[test]
    fn test_js_number_string() {
        assert_eq!(js_number_string(1234567.89), "1234567.89");
        assert_eq!(js_number_string(0.0001), "0.0001");
        assert_eq!(js_number_string(-5432.1), "-5432.1");
        assert_eq!(js_number_string(1000000000.0), "1000000000");
        assert_eq!(js_number_string(42.0), "42");
        assert_eq!(js_number_string(3.14159265359), "3.14159265359");
        assert_eq!(js_number_string(0.000001), "0.000001");
    }

    #[test]
    fn test_js_number_string_exponential() {
        assert_eq!(js_number_string(1e21), "1e+21");
        assert_eq!(js_number_string(1.23e22), "1.23e+22");
        assert_eq!(js_number_string(1e-7), "1e-7");
        assert_eq!(js_number_string(-1.5e-7), "-1.5e-7");
    }

    #[test]
    fn test_js_number_string_special_values() {
        assert_eq!(js_number_string(f64::NAN), "NaN");
        assert_eq!(js_number_string(-0.0), "0");
        assert_eq!(js_number_string(f64::INFINITY), "Infinity");
        assert_eq!(js_number_string(f64::NEG_INFINITY), "-Infinity");
    }
}
