#![deny(missing_debug_implementations)]

pub mod batch;
pub mod enumerate;
pub mod error;
pub mod outcome;

pub use crate::{
    enumerate::{Enumerable, Enumerator},
    error::{Caught, FilterError},
    outcome::Outcome,
};
