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

use super::constants::*;
use super::error::Error;
use super::error::ParseErrorCode;
use super::error::Result;

/// Checks that `buf` holds one syntactically well-formed `JSON` document.
///
/// The whole buffer is scanned in a single pass and no value tree is built.
/// The top-level value must be an object or an array. On rejection the
/// returned [`Error`] carries the first violation found and the byte offset
/// where the cursor stopped.
pub fn validate(buf: &[u8]) -> Result<()> {
    let mut validator = Validator::new(buf);
    validator.validate()
}

/// Reduces [`validate`] to a boolean.
///
/// The rejection reason is logged to stderr and then discarded. Callers that
/// need the reason must use [`validate`].
pub fn is_valid(buf: &[u8]) -> bool {
    match validate(buf) {
        Ok(()) => true,
        Err(err) => {
            eprintln!("Error: {err}");
            false
        }
    }
}

/// One validation session: an immutable input buffer plus a cursor.
///
/// Every grammar rule is a function of (buffer, cursor) returning
/// `Ok(true)` when it matched with the cursor advanced past the construct,
/// `Ok(false)` when the input at the cursor is not its construct, and `Err`
/// once its leading delimiter committed it and the inside is malformed.
/// A session validates exactly one document and is never shared.
struct Validator<'a> {
    buf: &'a [u8],
    idx: usize,
}

impl<'a> Validator<'a> {
    fn new(buf: &'a [u8]) -> Validator<'a> {
        Self { buf, idx: 0 }
    }

    fn validate(&mut self) -> Result<()> {
        self.skip_whitespace();
        if !self.check_next_either(b'{', b'[') {
            return Err(self.error(ParseErrorCode::ExpectedObjectOrArray));
        }
        self.parse_value()?;
        self.skip_whitespace();
        if self.idx < self.buf.len() {
            return Err(self.error(ParseErrorCode::UnexpectedTrailingCharacters));
        }
        Ok(())
    }

    // A JSON value is an object, an array, a number, a string or one of the
    // literal names false, null and true. The grammar is unambiguous on the
    // first byte, so the first rule that matches owns the construct and an
    // error inside it is terminal.
    fn parse_value(&mut self) -> Result<bool> {
        if self.parse_object()? {
            return Ok(true);
        }
        if self.parse_array()? {
            return Ok(true);
        }
        if self.parse_number()? {
            return Ok(true);
        }
        if self.parse_string()? {
            return Ok(true);
        }
        for literal in [TRUE_LITERAL, FALSE_LITERAL, NULL_LITERAL] {
            if self.parse_keyword(literal) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    // object = begin-object [ member *( value-separator member ) ] end-object
    // member = string name-separator value
    fn parse_object(&mut self) -> Result<bool> {
        if !self.check_next(b'{') {
            return Ok(false);
        }
        self.step();
        let mut first = true;
        self.skip_whitespace();

        while self.idx < self.buf.len() && !self.check_next(b'}') {
            if !first {
                self.skip_whitespace();
                if !self.check_next(b',') {
                    return Err(self.member_error(ParseErrorCode::ExpectedComma));
                }
                self.step();
                self.skip_whitespace();
            }
            if !self.parse_string()? {
                return Err(self.member_error(ParseErrorCode::KeyMustBeAString));
            }
            self.skip_whitespace();
            if !self.check_next(b':') {
                return Err(self.member_error(ParseErrorCode::ExpectedColon));
            }
            self.step();
            self.skip_whitespace();
            if !self.parse_value()? {
                return Err(self.member_error(ParseErrorCode::InvalidObjectValue));
            }
            self.skip_whitespace();
            first = false;
        }

        if self.idx == self.buf.len() {
            return Err(self.error(ParseErrorCode::MissingClosingBracket));
        }
        self.step();
        Ok(true)
    }

    // array = begin-array [ value *( value-separator value ) ] end-array
    fn parse_array(&mut self) -> Result<bool> {
        if !self.check_next(b'[') {
            return Ok(false);
        }
        self.step();
        let mut first = true;
        self.skip_whitespace();

        while self.idx < self.buf.len() && !self.check_next(b']') {
            if !first {
                if !self.check_next(b',') {
                    return Err(self.member_error(ParseErrorCode::ExpectedComma));
                }
                self.step();
                self.skip_whitespace();
            }
            if !self.parse_value()? {
                return Err(self.member_error(ParseErrorCode::InvalidArrayValue));
            }
            self.skip_whitespace();
            first = false;
        }

        if self.idx == self.buf.len() {
            return Err(self.error(ParseErrorCode::MissingClosingBracket));
        }
        self.step();
        Ok(true)
    }

    /// Validates a quoted string, its escape sequences and forbidden raw
    /// control bytes.
    ///
    /// On success the cursor sits one past the closing quote. Reaching
    /// end-of-input before the closing quote is a no-match with the cursor
    /// left at the end: a string never un-consumes once the opening quote
    /// matched, and the enclosing rule surfaces its own missing-bracket
    /// error for the truncated member.
    fn parse_string(&mut self) -> Result<bool> {
        if !self.check_next(b'"') {
            return Ok(false);
        }
        self.step();

        while self.idx < self.buf.len() {
            match self.buf[self.idx] {
                b'"' => {
                    self.step();
                    return Ok(true);
                }
                b'\\' => {
                    self.step();
                    self.parse_escaped()?;
                }
                HT | NL => {
                    return Err(self.error(ParseErrorCode::ControlCharacterWhileParsingString));
                }
                _ => self.step(),
            }
        }
        Ok(false)
    }

    // Escape sequences are \" \\ \/ \b \f \n \r \t and \u followed by
    // exactly four hex digits. The cursor sits one past the backslash on
    // entry and one past the sequence on success.
    fn parse_escaped(&mut self) -> Result<()> {
        match self.peek() {
            Some(b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't') => {
                self.step();
                Ok(())
            }
            Some(b'u') => {
                self.step();
                if self.idx + UNICODE_LEN > self.buf.len() {
                    return Err(self.error(ParseErrorCode::InvalidEscaped));
                }
                for _ in 0..UNICODE_LEN {
                    if !self.buf[self.idx].is_ascii_hexdigit() {
                        return Err(self.error(ParseErrorCode::InvalidEscaped));
                    }
                    self.step();
                }
                Ok(())
            }
            _ => Err(self.error(ParseErrorCode::InvalidEscaped)),
        }
    }

    /// Validates the number grammar, then re-checks the matched text as a
    /// floating-point value.
    ///
    /// The fraction and exponent digit runs are scanned leniently (zero or
    /// more digits); the float parse rejects the leftovers such as `0e` and
    /// `0e+` that the hand grammar under-constrains. A missing integer part
    /// restores the cursor and reports no match so the dispatcher can try
    /// the other alternatives.
    fn parse_number(&mut self) -> Result<bool> {
        let start_idx = self.idx;
        if self.check_next(b'-') {
            self.step();
        }
        if self.check_next(b'0') {
            self.step();
            if self.check_digit() {
                return Err(self.error(ParseErrorCode::NumberWithLeadingZero));
            }
        } else if self.check_digit() {
            self.step_digits();
        } else {
            self.idx = start_idx;
            return Ok(false);
        }

        if self.check_next(b'.') {
            self.step();
            self.step_digits();
        }
        if self.check_next_either(b'e', b'E') {
            self.step();
            if self.check_next_either(b'+', b'-') {
                self.step();
            }
            self.step_digits();
        }

        match fast_float2::parse::<f64, _>(&self.buf[start_idx..self.idx]) {
            Ok(_) => Ok(true),
            Err(_) => Err(self.error(ParseErrorCode::InvalidNumberValue)),
        }
    }

    // Matches a literal name. A literal that does not fully fit in the
    // remaining buffer is a no-match, never a read past the end.
    fn parse_keyword(&mut self, literal: &[u8]) -> bool {
        if self.buf[self.idx..].starts_with(literal) {
            self.step_by(literal.len());
            return true;
        }
        false
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.buf.get(self.idx).copied()
    }

    #[inline]
    fn check_next(&self, c: u8) -> bool {
        self.peek() == Some(c)
    }

    #[inline]
    fn check_next_either(&self, c1: u8, c2: u8) -> bool {
        matches!(self.peek(), Some(c) if c == c1 || c == c2)
    }

    #[inline]
    fn check_digit(&self) -> bool {
        matches!(self.peek(), Some(c) if c.is_ascii_digit())
    }

    #[inline]
    fn step_digits(&mut self) -> usize {
        let mut len = 0;
        while self.check_digit() {
            len += 1;
            self.step();
        }
        len
    }

    #[inline]
    fn step(&mut self) {
        self.idx += 1;
    }

    #[inline]
    fn step_by(&mut self, n: usize) {
        self.idx += n;
    }

    #[inline]
    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(SP | HT | NL | CR)) {
            self.step();
        }
    }

    fn error(&self, code: ParseErrorCode) -> Error {
        let pos = self.idx;
        Error::Syntax(code, pos)
    }

    // A member that failed with the cursor at end-of-input means the
    // closing bracket never arrived.
    fn member_error(&self, code: ParseErrorCode) -> Error {
        if self.idx == self.buf.len() {
            self.error(ParseErrorCode::MissingClosingBracket)
        } else {
            self.error(code)
        }
    }
}
