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
 * Factorials over the primitive integer types, with overflow and domain
 * errors reported instead of wrapping.
 *
 * ```
 * use factorial::Factorial;
 *
 * assert_eq!(5i32.factorial(), Ok(120));
 * assert!(13i32.factorial().is_err());
 * ```
 */

pub mod error;
pub mod fact;
pub mod traits;

// Re-exports

pub use error::FactorialError;
pub use fact::{factorial, factorial_recursive, max_input};
pub use traits::Factorial;
