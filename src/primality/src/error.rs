use derive_more::{Display, Error};

/// Input that cannot be turned into a [`PrimeChecker`](crate::PrimeChecker).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("invalid argument {input:?}: {reason}")]
pub struct InvalidArgument {
    pub input: String,
    pub reason: Reason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Reason {
    #[display("no number given")]
    Empty,
    #[display("not an integer")]
    NotAnInteger,
    #[display("negative numbers cannot be checked")]
    Negative,
    #[display("larger than {}", u64::MAX)]
    TooLarge,
}

impl InvalidArgument {
    pub(crate) fn new(input: impl ToString, reason: Reason) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}
