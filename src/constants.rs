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

// JSON text constants
pub(crate) const UNICODE_LEN: usize = 4;

// JSON whitespace characters constants
pub(crate) const SP: u8 = b'\x20'; // Space
pub(crate) const HT: u8 = b'\x09'; // \t Horizontal Tab
pub(crate) const NL: u8 = b'\x0A'; // \n Newline
pub(crate) const CR: u8 = b'\x0D'; // \r Carriage Return

// JSON literal names
pub(crate) const TRUE_LITERAL: &[u8] = b"true";
pub(crate) const FALSE_LITERAL: &[u8] = b"false";
pub(crate) const NULL_LITERAL: &[u8] = b"null";
