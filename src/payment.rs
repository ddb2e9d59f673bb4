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

//! Payment requests.
//!
//! A [`Payment`] is a closed sum over the supported methods. Each variant
//! carries exactly the fields its method needs, so a PayPal payment can never
//! hold a card number and vice versa.

use crate::base::{CardNumber, Country};
use crate::error::RecordError;
use crate::method::PaymentMethod;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditCardPayment {
    pub amount: Decimal,
    pub country: Country,
    pub card_number: CardNumber,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayPalPayment {
    pub amount: Decimal,
    pub country: Country,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payment {
    CreditCard(CreditCardPayment),
    PayPal(PayPalPayment),
}

impl Payment {
    pub fn credit_card(
        amount: Decimal,
        country: impl Into<Country>,
        card_number: impl Into<CardNumber>,
    ) -> Self {
        Self::CreditCard(CreditCardPayment {
            amount,
            country: country.into(),
            card_number: card_number.into(),
        })
    }

    pub fn paypal(amount: Decimal, country: impl Into<Country>, email: impl Into<String>) -> Self {
        Self::PayPal(PayPalPayment {
            amount,
            country: country.into(),
            email: email.into(),
        })
    }

    pub fn method(&self) -> PaymentMethod {
        match self {
            Self::CreditCard(_) => PaymentMethod::CreditCard,
            Self::PayPal(_) => PaymentMethod::PayPal,
        }
    }

    pub fn amount(&self) -> Decimal {
        match self {
            Self::CreditCard(payment) => payment.amount,
            Self::PayPal(payment) => payment.amount,
        }
    }

    pub fn country(&self) -> &Country {
        match self {
            Self::CreditCard(payment) => &payment.country,
            Self::PayPal(payment) => &payment.country,
        }
    }
}

/// Flat payment record as read from an external source.
///
/// Fields: `method, amount, country, card_number, email`
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentRecord {
    pub method: String,
    pub amount: Decimal,
    pub country: String,
    #[serde(default)]
    pub card_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Treats empty strings as absent.
fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

impl TryFrom<PaymentRecord> for Payment {
    type Error = RecordError;

    /// Builds a typed payment, rejecting records whose fields do not match
    /// their method.
    fn try_from(record: PaymentRecord) -> Result<Self, Self::Error> {
        let method = PaymentMethod::parse(&record.method)
            .ok_or_else(|| RecordError::UnknownMethod(record.method.clone()))?;
        let card_number = present(record.card_number);
        let email = present(record.email);

        match method {
            PaymentMethod::CreditCard => {
                if email.is_some() {
                    return Err(RecordError::UnexpectedField {
                        method,
                        field: "email",
                    });
                }
                let card_number = card_number.ok_or(RecordError::MissingField {
                    method,
                    field: "card_number",
                })?;
                Ok(Self::credit_card(
                    record.amount,
                    Country(record.country),
                    CardNumber(card_number),
                ))
            }
            PaymentMethod::PayPal => {
                if card_number.is_some() {
                    return Err(RecordError::UnexpectedField {
                        method,
                        field: "card_number",
                    });
                }
                let email = email.ok_or(RecordError::MissingField {
                    method,
                    field: "email",
                })?;
                Ok(Self::paypal(record.amount, Country(record.country), email))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(method: &str, card_number: Option<&str>, email: Option<&str>) -> PaymentRecord {
        PaymentRecord {
            method: method.to_owned(),
            amount: dec!(100),
            country: "US".to_owned(),
            card_number: card_number.map(str::to_owned),
            email: email.map(str::to_owned),
        }
    }

    #[test]
    fn accessors_follow_variant() {
        let payment = Payment::paypal(dec!(100), "US", "test@mail");
        assert_eq!(payment.method(), PaymentMethod::PayPal);
        assert_eq!(payment.amount(), dec!(100));
        assert_eq!(payment.country().as_str(), "US");

        let payment = Payment::credit_card(dec!(20), "CA", "1234");
        assert_eq!(payment.method(), PaymentMethod::CreditCard);
        assert_eq!(payment.country().as_str(), "CA");
    }

    #[test]
    fn debug_output_masks_card_number() {
        let payment = Payment::credit_card(dec!(20), "CA", "4111111111111234");
        let debug = format!("{payment:?}");
        assert!(debug.contains("************1234"));
        assert!(!debug.contains("4111111111111234"));
    }

    #[test]
    fn credit_card_record() {
        let payment = Payment::try_from(record("CreditCard", Some("1234"), None)).unwrap();
        assert_eq!(payment, Payment::credit_card(dec!(100), "US", "1234"));
    }

    #[test]
    fn paypal_record() {
        let payment = Payment::try_from(record("paypal", None, Some("test@mail"))).unwrap();
        assert_eq!(payment, Payment::paypal(dec!(100), "US", "test@mail"));
    }

    #[test]
    fn paypal_record_with_card_number_is_rejected() {
        let result = Payment::try_from(record("PayPal", Some("1234"), Some("test@mail")));
        assert_eq!(
            result,
            Err(RecordError::UnexpectedField {
                method: PaymentMethod::PayPal,
                field: "card_number",
            })
        );
    }

    #[test]
    fn credit_card_record_with_email_is_rejected() {
        let result = Payment::try_from(record("CreditCard", Some("1234"), Some("a@b")));
        assert_eq!(
            result,
            Err(RecordError::UnexpectedField {
                method: PaymentMethod::CreditCard,
                field: "email",
            })
        );
    }

    #[test]
    fn missing_fields_are_rejected() {
        assert_eq!(
            Payment::try_from(record("PayPal", None, None)),
            Err(RecordError::MissingField {
                method: PaymentMethod::PayPal,
                field: "email",
            })
        );
        assert_eq!(
            Payment::try_from(record("CreditCard", None, Some(""))),
            Err(RecordError::MissingField {
                method: PaymentMethod::CreditCard,
                field: "card_number",
            })
        );
    }

    #[test]
    fn unknown_method_is_rejected() {
        assert_eq!(
            Payment::try_from(record("cash", None, None)),
            Err(RecordError::UnknownMethod("cash".to_owned()))
        );
    }
}
