use log::trace;

use crate::outcome::Outcome;

/// Invokes `action` with all payloads iff every outcome is `Ok`; otherwise a
/// silent no-op. No combined failure is reported.
pub fn if_ok2<A, B, EA, EB>(
    first: Outcome<A, EA>,
    second: Outcome<B, EB>,
    action: impl FnOnce(A, B),
) {
    match (first, second) {
        (Outcome::Ok(a), Outcome::Ok(b)) => action(a, b),
        _ => trace!("skipping batched action: an input was `Err`"),
    }
}

pub fn if_ok3<A, B, C, EA, EB, EC>(
    first: Outcome<A, EA>,
    second: Outcome<B, EB>,
    third: Outcome<C, EC>,
    action: impl FnOnce(A, B, C),
) {
    match (first, second, third) {
        (Outcome::Ok(a), Outcome::Ok(b), Outcome::Ok(c)) => action(a, b, c),
        _ => trace!("skipping batched action: an input was `Err`"),
    }
}

pub fn if_ok4<A, B, C, D, EA, EB, EC, ED>(
    first: Outcome<A, EA>,
    second: Outcome<B, EB>,
    third: Outcome<C, EC>,
    fourth: Outcome<D, ED>,
    action: impl FnOnce(A, B, C, D),
) {
    match (first, second, third, fourth) {
        (Outcome::Ok(a), Outcome::Ok(b), Outcome::Ok(c), Outcome::Ok(d)) => action(a, b, c, d),
        _ => trace!("skipping batched action: an input was `Err`"),
    }
}
