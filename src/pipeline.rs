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

//! The payment pipeline.
//!
//! A strict left-to-right chain:
//!
//! 1. validate the amount,
//! 2. validate the country against the method's allow-list,
//! 3. dispatch to the method's gateway.
//!
//! The first failing step ends the chain and its error becomes the result.
//! In particular the gateway is never called for a request that failed
//! validation.

use crate::error::PaymentError;
use crate::gateway::{Gateway, dispatch};
use crate::payment::Payment;
use crate::validator::{validate_amount, validate_country};
use tracing::{debug, debug_span, warn};

/// Validates and dispatches a single payment.
///
/// # Errors
///
/// - [`PaymentError::Validation`] - amount out of range or country not allowed.
/// - [`PaymentError::CreditCard`] - credit card gateway rejected the payment.
/// - [`PaymentError::PayPal`] - PayPal gateway rejected the payment.
pub fn handle_payment<G: Gateway + ?Sized>(
    payment: Payment,
    gateway: &mut G,
) -> Result<String, PaymentError> {
    let method = payment.method();
    let span = debug_span!("payment", %method, amount = %payment.amount());
    let _enter = span.enter();

    let result = validate_amount(payment.amount())
        .and_then(|()| validate_country(method, payment.country().as_str()))
        .map_err(PaymentError::from)
        .and_then(|()| {
            debug!(country = %payment.country(), "validated, dispatching");
            dispatch(&payment, gateway).map_err(PaymentError::from)
        });

    match &result {
        Ok(message) => debug!(%message, "payment accepted"),
        Err(error) if error.is_gateway_failure() => warn!(%error, "gateway call failed"),
        Err(error) => warn!(%error, "payment rejected"),
    }

    result
}
