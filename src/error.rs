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

use thiserror::Error;

/// Reasons a factorial cannot be produced in the requested integer type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactorialError {
    #[error("factorial is undefined for negative input {input}")]
    InvalidArgument { input: String },

    #[error("{input}! overflows a {bits}-bit integer")]
    Overflow { input: String, bits: u32 },
}

impl FactorialError {
    pub(crate) fn invalid_argument<T: Display>(input: T) -> FactorialError {
        FactorialError::InvalidArgument { input: input.to_string() }
    }

    pub(crate) fn overflow<T: Display>(input: T, bits: u32) -> FactorialError {
        FactorialError::Overflow { input: input.to_string(), bits }
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, FactorialError::Overflow { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, FactorialError::InvalidArgument { .. })
    }
}
