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

/*!
 * Method-call form of the factorial functions for the primitive integers.
 *
 * ```
 * use factorial::Factorial;
 *
 * assert_eq!(20u64.factorial(), Ok(2432902008176640000));
 * assert_eq!(21u64.checked_factorial(), None);
 * ```
 */

use crate::error::FactorialError;
use crate::fact;

pub trait Factorial: Sized {
    /// `self!`, or the reason it can't be represented in `Self`.
    fn factorial(self) -> Result<Self, FactorialError>;

    fn checked_factorial(self) -> Option<Self> {
        self.factorial().ok()
    }
}

macro_rules! impl_factorial_for_prim (
    ($($t:ty),*) => (
        $(
            impl Factorial for $t {
                #[inline]
                fn factorial(self) -> Result<$t, FactorialError> {
                    fact::factorial(self)
                }
            }
        )*
    )
);

impl_factorial_for_prim!(i8, i16, i32, i64, i128, isize);
impl_factorial_for_prim!(u8, u16, u32, u64, u128, usize);
