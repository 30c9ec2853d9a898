pub mod iter;

use std::{
    fmt::{self, Debug, Display},
    panic::{self, UnwindSafe},
};

use dupe::Dupe;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Caught, FilterError},
    outcome::iter::{FlatIter, IntoIter, Iter},
};

#[must_use]
#[derive(
    Clone, Copy, Dupe, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Outcome<T, E> {
    Ok(T),
    Err(E),
}

impl<T> Outcome<T, Caught> {
    /// Runs `action` eagerly, converting an unwinding panic into an `Err`.
    /// Aborting failures cannot be intercepted and never reach the container.
    pub fn capture(action: impl FnOnce() -> T + UnwindSafe) -> Self {
        match panic::catch_unwind(action) {
            Ok(value) => Self::Ok(value),
            Err(payload) => {
                let caught = Caught::new(payload);
                trace!("captured panic: {caught}");
                Self::Err(caught)
            }
        }
    }
}

impl<E> Outcome<(), E> {
    pub fn empty() -> Self {
        Self::Ok(())
    }
}

impl<T, E> Outcome<T, E> {
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    pub fn is_ok_and(self, condition: impl FnOnce(T) -> bool) -> bool {
        match self {
            Self::Ok(value) => condition(value),
            Self::Err(_) => false,
        }
    }

    pub fn is_err_and(self, condition: impl FnOnce(E) -> bool) -> bool {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => condition(error),
        }
    }

    pub fn if_ok(self, action: impl FnOnce(T)) {
        if let Self::Ok(value) = self {
            action(value);
        }
    }

    pub fn if_err(self, action: impl FnOnce(E)) {
        if let Self::Err(error) = self {
            action(error);
        }
    }

    /// Exhaustive consumption: exactly one of the two actions is invoked.
    pub fn visit(self, on_ok: impl FnOnce(T), on_err: impl FnOnce(E)) {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    pub fn unwrap(self) -> T
    where
        E: Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => {
                panic!("called `Outcome::unwrap()` on an `Err` value: {error:?}")
            }
        }
    }

    pub fn expect(self, message: &str) -> T
    where
        E: Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => panic!("{message}: {error:?}"),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    pub fn unwrap_or_else(self, fallback: impl FnOnce() -> T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => fallback(),
        }
    }

    pub fn or_else<F>(self, fallback: impl FnOnce() -> Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(_) => fallback(),
        }
    }

    pub fn map<U>(self, mapper: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Self::Ok(value) => Outcome::Ok(mapper(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    pub fn and_then<U>(self, mapper: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(value) => mapper(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    pub fn map_ok<U>(self, mapper: impl FnOnce(T) -> U) -> Option<U> {
        match self {
            Self::Ok(value) => Some(mapper(value)),
            Self::Err(_) => None,
        }
    }

    /// Maps the error out of the container, mirroring `map_ok` rather than
    /// `map`. `map_err_into` is the in-container counterpart.
    pub fn map_err<U>(self, mapper: impl FnOnce(E) -> U) -> Option<U> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(mapper(error)),
        }
    }

    pub fn map_err_into<F>(self, mapper: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(mapper(error)),
        }
    }

    pub fn map_or<U>(self, default: U, mapper: impl FnOnce(T) -> U) -> U {
        match self {
            Self::Ok(value) => mapper(value),
            Self::Err(_) => default,
        }
    }

    pub fn map_or_else<U>(self, on_err: impl FnOnce(E) -> U, on_ok: impl FnOnce(T) -> U) -> U {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    pub fn peek_ok(self, action: impl FnOnce(&T)) -> Self {
        if let Self::Ok(value) = &self {
            action(value);
        }
        self
    }

    pub fn peek_err(self, action: impl FnOnce(&E)) -> Self {
        if let Self::Err(error) = &self {
            action(error);
        }
        self
    }

    pub fn to_unit(self) -> Outcome<(), E> {
        self.map(|_| ())
    }

    /// The result's error type is always [`FilterError`], never `E`: a failed
    /// condition and a filtered `Err` both collapse to the sentinel kinds.
    pub fn filter(self, condition: impl FnOnce(&T) -> bool) -> Outcome<T, FilterError> {
        match self {
            Self::Ok(value) if condition(&value) => Outcome::Ok(value),
            Self::Ok(_) => Outcome::Err(FilterError::Unsatisfied),
            Self::Err(_) => Outcome::Err(FilterError::FilteredErr),
        }
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref().ok())
    }

    pub fn flat_iter<I>(self, mapper: impl FnOnce(T) -> I) -> FlatIter<I::IntoIter>
    where
        I: IntoIterator,
    {
        FlatIter::new(self.ok().map(|value| mapper(value).into_iter()))
    }

    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.ok())
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

impl<T: Display, E: Display> Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(f, "Ok({value})"),
            Self::Err(error) => write!(f, "Err({error})"),
        }
    }
}
