use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::fmt::Display;
use std::ops;
use std::str::FromStr;

use crate::error::FractionError;

/// Exact rational number, kept reduced with a positive denominator so that
/// derived equality and hashing compare values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    num: BigInt,
    den: BigInt,
}

impl Fraction {
    /// Panics when `den` is zero, like integer division does.
    pub fn new(num: BigInt, den: BigInt) -> Self {
        match Self::try_new(num, den) {
            Ok(fraction) => fraction,
            Err(error) => panic!("{error}"),
        }
    }

    pub fn try_new(num: BigInt, den: BigInt) -> Result<Self, FractionError> {
        if den.is_zero() {
            return Err(FractionError::ZeroDenominator);
        }

        let g = num.gcd(&den);
        let num = num / &g;
        let den = den / &g;

        if den.is_negative() {
            return Ok(Self {
                num: -num,
                den: -den,
            });
        }
        Ok(Self { num, den })
    }

    pub fn numerator(&self) -> &BigInt {
        &self.num
    }

    pub fn denominator(&self) -> &BigInt {
        &self.den
    }
}

impl FromStr for Fraction {
    type Err = FractionError;

    /// Parses `"a"` or `"a/b"`, surrounding whitespace allowed.
    fn from_str(s: &str) -> Result<Self, FractionError> {
        let (num, den) = s.split_once('/').unwrap_or((s, "1"));
        let parse = |part: &str| {
            BigInt::parse_bytes(part.trim().as_bytes(), 10)
                .ok_or_else(|| FractionError::InvalidNumber(s.to_string()))
        };

        Fraction::try_new(parse(num)?, parse(den)?)
    }
}

impl From<BigInt> for Fraction {
    fn from(num: BigInt) -> Self {
        Fraction {
            num,
            den: BigInt::one(),
        }
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        BigInt::from(value).into()
    }
}

impl From<i32> for Fraction {
    fn from(value: i32) -> Self {
        BigInt::from(value).into()
    }
}

impl ops::Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        if self.den == rhs.den {
            return Fraction::new(self.num + rhs.num, self.den);
        }

        Fraction::new(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl ops::Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        self + -rhs
    }
}

impl ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            num: -self.num,
            den: self.den,
        }
    }
}

impl ops::Div for Fraction {
    type Output = Fraction;

    /// Panics on division by zero.
    fn div(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.den, self.den * rhs.num)
    }
}

impl ops::Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl One for Fraction {
    fn one() -> Fraction {
        BigInt::one().into()
    }
}

impl Zero for Fraction {
    fn zero() -> Fraction {
        BigInt::zero().into()
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            return write!(f, "{}", self.num);
        }
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl std::iter::Sum<Fraction> for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::zero(), |acc, f| acc + f)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
