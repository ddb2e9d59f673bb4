// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Core value types shared by every payment method.

use std::fmt;

/// Country code attached to a payment request.
///
/// Codes are compared as exact, case-sensitive strings. No normalization is
/// applied, so `"us"` and `"US"` are different countries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Country(pub String);

impl Country {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Country {
    fn from(code: &str) -> Self {
        Self(code.to_owned())
    }
}

impl From<String> for Country {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Card number of a credit card payment.
///
/// `Display` only reveals the last four characters so the value can be
/// logged safely. `Debug` is masked the same way.
#[derive(Clone, PartialEq, Eq)]
pub struct CardNumber(pub String);

impl CardNumber {
    const VISIBLE_DIGITS: usize = 4;

    fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        let hidden = chars.len().saturating_sub(Self::VISIBLE_DIGITS);
        let mut masked = "*".repeat(hidden);
        masked.extend(&chars[hidden..]);
        masked
    }
}

impl From<&str> for CardNumber {
    fn from(number: &str) -> Self {
        Self(number.to_owned())
    }
}

impl From<String> for CardNumber {
    fn from(number: String) -> Self {
        Self(number)
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CardNumber").field(&self.masked()).finish()
    }
}
