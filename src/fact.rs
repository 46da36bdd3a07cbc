// Copyright 2026 The Factorial Developers
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

use std::fmt::Display;

use num_traits::PrimInt;
use tracing::debug;

use crate::error::FactorialError;

/**
 * Calculates `x!` in the integer type of `x`.
 *
 * The product is accumulated upwards, `1 * 2 * ... * x`, with every step
 * checked. Returns `InvalidArgument` for negative `x` and `Overflow` as soon
 * as a partial product leaves the range of `T`. `0!` and `1!` are both `1`.
 */
pub fn factorial<T: PrimInt + Display>(x: T) -> Result<T, FactorialError> {
    if x < T::zero() {
        debug!(input = %x, "negative factorial input");
        return Err(FactorialError::invalid_argument(x));
    }

    let mut acc = T::one();
    let mut i = T::one();
    while i < x {
        // `i` can't wrap here: the product overflows long before `i`
        // gets near the top of the type.
        i = i + T::one();
        acc = match acc.checked_mul(&i) {
            Some(p) => p,
            None => {
                debug!(input = %x, at = %i, "factorial overflowed");
                return Err(FactorialError::overflow(x, bits::<T>()));
            }
        };
    }

    debug!(input = %x, result = %acc, "computed factorial");
    Ok(acc)
}

/**
 * Calculates `x!` as `x * (x - 1)!`, bottoming out at `x <= 1`.
 *
 * Inputs above `max_input::<T>()` are rejected before any recursion
 * happens, so the call depth never exceeds that bound. Gives the same
 * result as `factorial` for every input.
 */
pub fn factorial_recursive<T: PrimInt + Display>(x: T) -> Result<T, FactorialError> {
    if x < T::zero() {
        debug!(input = %x, "negative factorial input");
        return Err(FactorialError::invalid_argument(x));
    }
    if x > max_input::<T>() {
        debug!(input = %x, "factorial input above overflow boundary");
        return Err(FactorialError::overflow(x, bits::<T>()));
    }

    let acc = descend(x);
    debug!(input = %x, result = %acc, "computed factorial");
    Ok(acc)
}

// Caller guarantees 0 <= x <= max_input::<T>().
fn descend<T: PrimInt>(x: T) -> T {
    if x <= T::one() {
        return T::one();
    }
    x * descend(x - T::one())
}

/// The largest `n` for which `n!` is representable in `T`.
pub fn max_input<T: PrimInt>() -> T {
    let mut n = T::one();
    let mut acc = T::one();
    loop {
        let next = n + T::one();
        match acc.checked_mul(&next) {
            Some(p) => {
                acc = p;
                n = next;
            }
            None => return n,
        }
    }
}

fn bits<T: PrimInt>() -> u32 {
    T::zero().count_zeros()
}
