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

//! Request validation.
//!
//! Pure checks that run before any gateway call. Both functions are total
//! over their inputs and never touch shared state.

use crate::error::ValidationError;
use crate::method::{MAX_AMOUNT, MIN_AMOUNT, PaymentMethod};
use rust_decimal::Decimal;

/// Accepts amounts in `MIN_AMOUNT..=MAX_AMOUNT`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidAmount`] for anything outside the range.
pub fn validate_amount(amount: Decimal) -> Result<(), ValidationError> {
    if (MIN_AMOUNT..=MAX_AMOUNT).contains(&amount) {
        Ok(())
    } else {
        Err(ValidationError::InvalidAmount)
    }
}

/// Accepts countries on the method's allow-list.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidCountry`] tagged with `method` when the
/// country is not listed.
pub fn validate_country(method: PaymentMethod, country: &str) -> Result<(), ValidationError> {
    if method.rules().allows_country(country) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCountry(method))
    }
}
