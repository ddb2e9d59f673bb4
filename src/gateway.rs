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

//! Gateway routing.
//!
//! Each payment method has its own gateway call. The calls here simulate an
//! external processor: a draw strictly above [`SUCCESS_THRESHOLD`] succeeds,
//! anything else fails.

use crate::error::{CreditCardError, GatewayError, PayPalError};
use crate::payment::{CreditCardPayment, PayPalPayment, Payment};
use crate::random::RandomSource;
use tracing::trace;

/// Draws above this value are successful gateway calls.
pub const SUCCESS_THRESHOLD: f64 = 0.5;

/// Method-specific gateway calls.
pub trait Gateway {
    fn send_credit_card(&mut self, payment: &CreditCardPayment) -> Result<String, CreditCardError>;

    fn send_paypal(&mut self, payment: &PayPalPayment) -> Result<String, PayPalError>;
}

/// Simulates a credit card processor call.
///
/// # Errors
///
/// Returns [`CreditCardError::PaymentFailed`] when the draw is `<= 0.5`.
pub fn send_credit_card_payment<S: RandomSource + ?Sized>(
    payment: &CreditCardPayment,
    source: &mut S,
) -> Result<String, CreditCardError> {
    let draw = source.next_f64();
    trace!(draw, card = %payment.card_number, "credit card gateway draw");
    if draw > SUCCESS_THRESHOLD {
        Ok(format!("Payment of {} was successful", payment.amount))
    } else {
        Err(CreditCardError::PaymentFailed)
    }
}

/// Simulates a PayPal processor call.
///
/// # Errors
///
/// Returns [`PayPalError::PaymentFailed`] when the draw is `<= 0.5`.
pub fn send_paypal_payment<S: RandomSource + ?Sized>(
    payment: &PayPalPayment,
    source: &mut S,
) -> Result<String, PayPalError> {
    let draw = source.next_f64();
    trace!(draw, email = %payment.email, "paypal gateway draw");
    if draw > SUCCESS_THRESHOLD {
        Ok(format!(
            "Payment of {} was successful from {}",
            payment.amount, payment.email
        ))
    } else {
        Err(PayPalError::PaymentFailed)
    }
}

/// In-process gateway backed by a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct SimulatedGateway<S> {
    source: S,
}

impl<S: RandomSource> SimulatedGateway<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: RandomSource> Gateway for SimulatedGateway<S> {
    fn send_credit_card(&mut self, payment: &CreditCardPayment) -> Result<String, CreditCardError> {
        send_credit_card_payment(payment, &mut self.source)
    }

    fn send_paypal(&mut self, payment: &PayPalPayment) -> Result<String, PayPalError> {
        send_paypal_payment(payment, &mut self.source)
    }
}

/// Routes a payment to the gateway call for its method.
///
/// The gateway result is returned unchanged, wrapped in [`GatewayError`].
/// Validation failures cannot come out of here.
pub fn dispatch<G: Gateway + ?Sized>(
    payment: &Payment,
    gateway: &mut G,
) -> Result<String, GatewayError> {
    match payment {
        Payment::CreditCard(payment) => Ok(gateway.send_credit_card(payment)?),
        Payment::PayPal(payment) => Ok(gateway.send_paypal(payment)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedSequence;
    use rust_decimal_macros::dec;

    fn paypal() -> PayPalPayment {
        PayPalPayment {
            amount: dec!(100),
            country: "US".into(),
            email: "test@mail".to_owned(),
        }
    }

    fn credit_card() -> CreditCardPayment {
        CreditCardPayment {
            amount: dec!(250.50),
            country: "CA".into(),
            card_number: "4111111111111111".into(),
        }
    }

    #[test]
    fn credit_card_success_message() {
        let mut source = FixedSequence::new([0.75]);
        assert_eq!(
            send_credit_card_payment(&credit_card(), &mut source),
            Ok("Payment of 250.50 was successful".to_owned())
        );
    }

    #[test]
    fn paypal_success_message_includes_email() {
        let mut source = FixedSequence::new([0.51]);
        assert_eq!(
            send_paypal_payment(&paypal(), &mut source),
            Ok("Payment of 100 was successful from test@mail".to_owned())
        );
    }

    #[test]
    fn threshold_draw_fails() {
        let mut source = FixedSequence::new([0.5]);
        assert_eq!(
            send_paypal_payment(&paypal(), &mut source),
            Err(PayPalError::PaymentFailed)
        );
        assert_eq!(
            send_credit_card_payment(&credit_card(), &mut source),
            Err(CreditCardError::PaymentFailed)
        );
    }

    #[test]
    fn each_call_takes_one_draw() {
        let mut gateway = SimulatedGateway::new(FixedSequence::new([0.9, 0.1]));
        assert!(gateway.send_paypal(&paypal()).is_ok());
        assert!(gateway.send_credit_card(&credit_card()).is_err());
        assert_eq!(gateway.source().taken(), 2);
    }

    #[test]
    fn dispatch_routes_by_method() {
        let mut gateway = SimulatedGateway::new(FixedSequence::new([0.1]));

        let result = dispatch(&Payment::PayPal(paypal()), &mut gateway);
        assert_eq!(result, Err(GatewayError::PayPal(PayPalError::PaymentFailed)));

        let result = dispatch(&Payment::CreditCard(credit_card()), &mut gateway);
        assert_eq!(
            result,
            Err(GatewayError::CreditCard(CreditCardError::PaymentFailed))
        );
    }
}
