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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// The reason a document was rejected.
///
/// Each code renders one fixed, user-facing message. Callers match these
/// strings verbatim, so they must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorCode {
    #[error("a json payload should be an object or array")]
    ExpectedObjectOrArray,
    #[error("invalid json: extra character after closing bracket")]
    UnexpectedTrailingCharacters,
    #[error("closing bracket for the array is missing")]
    MissingClosingBracket,
    #[error("invalid json: Expected ','")]
    ExpectedComma,
    #[error("invalid json: Expected ':'")]
    ExpectedColon,
    #[error("object key name is not a string")]
    KeyMustBeAString,
    #[error("object value is not in correct format")]
    InvalidObjectValue,
    #[error("array value is not correct")]
    InvalidArrayValue,
    #[error("invalid json: Illegal backslash escape sequence")]
    InvalidEscaped,
    #[error("invalid json: Illegal character tab character or new line character")]
    ControlCharacterWhileParsingString,
    #[error("number cannot have leading zeros")]
    NumberWithLeadingZero,
    #[error("not a valid number")]
    InvalidNumberValue,
}

/// The first violation found in a document.
///
/// Carries the byte offset where the cursor stopped. `Display` renders only
/// the fixed message of the code, the offset is available via [`position`].
///
/// [`position`]: Error::position
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{0}")]
    Syntax(ParseErrorCode, usize),
}

impl Error {
    pub fn code(&self) -> ParseErrorCode {
        match self {
            Error::Syntax(code, _) => *code,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            Error::Syntax(_, pos) => *pos,
        }
    }
}
