// Copyright 2023 Datafuse Labs.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! `jsonvalid` checks whether a byte sequence is a syntactically well-formed
//! `JSON` document per the [RFC 8259] grammar, without building a value tree.
//!
//! The validator walks the grammar with a single cursor over an immutable
//! input buffer and reports either acceptance or the first structural or
//! lexical violation it finds, as one of a fixed set of rejection reasons.
//!
//! ## Contract
//!
//! - No parsed value is ever materialized. Acceptance is a side-effect-free
//!   judgment over cursor movement.
//! - The whole document is validated in one pass over a fully buffered byte
//!   sequence. There is no streaming or incremental input.
//! - The top-level value must be an object or an array. A bare scalar
//!   (string, number, `true`, `false`, `null`) is rejected.
//! - Validation is fail-fast. The first violation aborts the run and is
//!   returned as-is, there is no multi-error reporting.
//!
//! ## Example
//!
//! ```
//! use jsonvalid::validate;
//!
//! assert!(validate(br#"{"a": [1, 2, 3]}"#).is_ok());
//!
//! let err = validate(br#"{"a": 01}"#).unwrap_err();
//! assert_eq!(err.to_string(), "number cannot have leading zeros");
//! ```
//!
//! [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259

mod constants;
mod error;
mod validator;

pub use error::Error;
pub use error::ParseErrorCode;
pub use error::Result;
pub use validator::is_valid;
pub use validator::validate;
