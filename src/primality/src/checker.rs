use {
    crate::{
        bound::ceil_sqrt,
        error::{InvalidArgument, Reason},
    },
    derive_more::{Display, From},
    std::{num::IntErrorKind, ops::RangeInclusive, str::FromStr},
};

/// The smallest candidate divisor, and the smallest prime.
pub const LOWER_BOUND: u64 = 2;

/// Trial-division primality test for a single number.
///
/// Divisors are tried from [`LOWER_BOUND`] up to [`upper_bound`](Self::upper_bound), which is
/// enough because every composite `n` has a factor no larger than `sqrt(n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From)]
#[display("{n}")]
pub struct PrimeChecker {
    n: u64,
}

impl PrimeChecker {
    pub fn new(n: u64) -> Self {
        Self { n }
    }

    pub fn number(&self) -> u64 {
        self.n
    }

    /// The smallest `u` with `u * u >= n`.
    pub fn upper_bound(&self) -> u64 {
        ceil_sqrt(self.n)
    }

    pub fn is_prime(&self) -> bool {
        self.n >= LOWER_BOUND && self.divisors().all(|d| self.n % d != 0)
    }

    // ceil(sqrt(n)) == n for n == 2, so the range is capped below n itself.
    fn divisors(&self) -> RangeInclusive<u64> {
        LOWER_BOUND..=self.upper_bound().min(self.n.saturating_sub(1))
    }
}

impl TryFrom<i64> for PrimeChecker {
    type Error = InvalidArgument;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        u64::try_from(n)
            .map(Self::new)
            .map_err(|_| InvalidArgument::new(n, Reason::Negative))
    }
}

impl FromStr for PrimeChecker {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        match digits.parse::<u64>() {
            Ok(n) => Ok(Self::new(n)),
            Err(e) => {
                let reason = match e.kind() {
                    IntErrorKind::Empty => Reason::Empty,
                    IntErrorKind::PosOverflow => Reason::TooLarge,
                    _ if is_negative_integer(digits) => Reason::Negative,
                    _ => Reason::NotAnInteger,
                };
                Err(InvalidArgument::new(digits, reason))
            }
        }
    }
}

fn is_negative_integer(s: &str) -> bool {
    s.strip_prefix('-')
        .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
}
