pub mod bound;
mod checker;
mod error;

pub use {
    checker::{PrimeChecker, LOWER_BOUND},
    error::{InvalidArgument, Reason},
};
