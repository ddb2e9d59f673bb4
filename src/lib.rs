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

//! # Payment Dispatch
//!
//! This library validates payment requests and routes them to a
//! method-specific gateway. Two methods are supported, credit card and PayPal,
//! each with its own country allow-list.
//!
//! ## Core Components
//!
//! - [`Payment`]: Closed sum over the supported payment methods
//! - [`validate_amount`] / [`validate_country`]: Pure request checks
//! - [`dispatch`]: Exhaustive routing to the [`Gateway`] call for a method
//! - [`handle_payment`]: The short-circuiting validate-then-dispatch pipeline
//! - [`Engine`]: Runs payments against one gateway and tallies outcomes
//!
//! ## Example
//!
//! ```
//! use payment_dispatch::{FixedSequence, Payment, SimulatedGateway, handle_payment};
//! use rust_decimal_macros::dec;
//!
//! // Force the gateway draw above the success threshold.
//! let mut gateway = SimulatedGateway::new(FixedSequence::new([0.9]));
//!
//! let payment = Payment::paypal(dec!(100), "US", "test@mail");
//! let message = handle_payment(payment, &mut gateway).unwrap();
//! assert_eq!(message, "Payment of 100 was successful from test@mail");
//! ```
//!
//! ## Randomness
//!
//! The gateway simulation draws from an injected [`RandomSource`]. Use
//! [`RngSource`] for real runs and [`FixedSequence`] for deterministic tests.

mod base;
mod engine;
pub mod error;
mod gateway;
mod method;
mod payment;
mod pipeline;
mod random;
mod validator;

pub use base::{CardNumber, Country};
pub use engine::{Engine, Summary};
pub use error::{
    CreditCardError, ErrorKind, GatewayError, PayPalError, PaymentError, RecordError,
    ValidationError,
};
pub use gateway::{
    Gateway, SUCCESS_THRESHOLD, SimulatedGateway, dispatch, send_credit_card_payment,
    send_paypal_payment,
};
pub use method::{MAX_AMOUNT, MIN_AMOUNT, MethodRules, PaymentMethod};
pub use payment::{CreditCardPayment, PayPalPayment, Payment, PaymentRecord};
pub use pipeline::handle_payment;
pub use random::{FixedSequence, RandomSource, RngSource};
pub use validator::{validate_amount, validate_country};
