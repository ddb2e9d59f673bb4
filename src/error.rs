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

//! Error types for payment validation and dispatch.

use crate::method::PaymentMethod;
use thiserror::Error;

/// Request rejected by the validator before any gateway call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Amount falls outside the accepted range
    #[error("Invalid amount")]
    InvalidAmount,

    /// Country is not on the method's allow-list
    #[error("Invalid {0} country")]
    InvalidCountry(PaymentMethod),
}

/// Credit card gateway failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CreditCardError {
    #[error("Payment failed")]
    PaymentFailed,
}

/// PayPal gateway failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayPalError {
    #[error("Payment failed")]
    PaymentFailed,
}

/// Failure reported by a gateway call, tagged by method.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error(transparent)]
    CreditCard(#[from] CreditCardError),

    #[error(transparent)]
    PayPal(#[from] PayPalError),
}

/// Tag identifying which stage produced a [`PaymentError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    CreditCard,
    PayPal,
}

/// Terminal error of the payment pipeline.
///
/// Exactly one stage fails per request; its error is carried unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    CreditCard(#[from] CreditCardError),

    #[error(transparent)]
    PayPal(#[from] PayPalError),
}

impl From<GatewayError> for PaymentError {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::CreditCard(e) => Self::CreditCard(e),
            GatewayError::PayPal(e) => Self::PayPal(e),
        }
    }
}

impl PaymentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::CreditCard(_) => ErrorKind::CreditCard,
            Self::PayPal(_) => ErrorKind::PayPal,
        }
    }

    /// Whether the failure came from a gateway rather than from validation.
    pub fn is_gateway_failure(&self) -> bool {
        !matches!(self, Self::Validation(_))
    }
}

/// Errors building a [`Payment`](crate::Payment) from a raw record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Method name is not one of the supported payment methods
    #[error("unknown payment method '{0}'")]
    UnknownMethod(String),

    /// A field required by the method is absent or empty
    #[error("missing {field} for {method} payment")]
    MissingField {
        method: PaymentMethod,
        field: &'static str,
    },

    /// A field that belongs to another payment method is present
    #[error("unexpected {field} for {method} payment")]
    UnexpectedField {
        method: PaymentMethod,
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        assert_eq!(ValidationError::InvalidAmount.to_string(), "Invalid amount");
        assert_eq!(
            ValidationError::InvalidCountry(PaymentMethod::PayPal).to_string(),
            "Invalid PayPal country"
        );
        assert_eq!(
            ValidationError::InvalidCountry(PaymentMethod::CreditCard).to_string(),
            "Invalid CreditCard country"
        );
        assert_eq!(CreditCardError::PaymentFailed.to_string(), "Payment failed");
        assert_eq!(PayPalError::PaymentFailed.to_string(), "Payment failed");
    }

    #[test]
    fn payment_error_is_transparent() {
        let error = PaymentError::from(ValidationError::InvalidAmount);
        assert_eq!(error.to_string(), "Invalid amount");
        assert_eq!(error.kind(), ErrorKind::Validation);
        assert!(!error.is_gateway_failure());

        let error = PaymentError::from(PayPalError::PaymentFailed);
        assert_eq!(error.to_string(), "Payment failed");
        assert_eq!(error.kind(), ErrorKind::PayPal);
        assert!(error.is_gateway_failure());
    }

    #[test]
    fn gateway_error_keeps_method() {
        let error = PaymentError::from(GatewayError::from(CreditCardError::PaymentFailed));
        assert_eq!(error, PaymentError::CreditCard(CreditCardError::PaymentFailed));
        assert_eq!(error.kind(), ErrorKind::CreditCard);
        assert!(error.is_gateway_failure());

        let error = PaymentError::from(GatewayError::PayPal(PayPalError::PaymentFailed));
        assert_eq!(error.kind(), ErrorKind::PayPal);
        assert_eq!(error.to_string(), "Payment failed");
    }

    #[test]
    fn record_error_messages() {
        assert_eq!(
            RecordError::UnknownMethod("cash".into()).to_string(),
            "unknown payment method 'cash'"
        );
        assert_eq!(
            RecordError::MissingField {
                method: PaymentMethod::PayPal,
                field: "email",
            }
            .to_string(),
            "missing email for PayPal payment"
        );
        assert_eq!(
            RecordError::UnexpectedField {
                method: PaymentMethod::PayPal,
                field: "card_number",
            }
            .to_string(),
            "unexpected card_number for PayPal payment"
        );
    }
}
