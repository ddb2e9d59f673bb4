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

//! Supported payment methods and their business rules.
//!
//! Every method owns a [`MethodRules`] entry. Lookups go through an
//! exhaustive `match`, so a new [`PaymentMethod`] variant does not compile
//! until its rules are declared.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;

/// Smallest accepted payment amount (inclusive).
pub const MIN_AMOUNT: Decimal = dec!(10);

/// Largest accepted payment amount (inclusive).
pub const MAX_AMOUNT: Decimal = dec!(1000);

/// Closed set of payment channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    CreditCard,
    PayPal,
}

/// Validation rules for a single payment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodRules {
    /// Countries the method may be used from, matched exactly.
    pub countries: &'static [&'static str],
}

static CREDIT_CARD_COUNTRIES: &[&str] = &["US", "UK", "CA"];
static PAYPAL_COUNTRIES: &[&str] = &["US", "UK"];

impl PaymentMethod {
    /// All supported methods, in declaration order.
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::CreditCard, PaymentMethod::PayPal];

    pub fn name(self) -> &'static str {
        match self {
            Self::CreditCard => "CreditCard",
            Self::PayPal => "PayPal",
        }
    }

    /// Returns the rule set registered for this method.
    pub fn rules(self) -> MethodRules {
        match self {
            Self::CreditCard => MethodRules {
                countries: CREDIT_CARD_COUNTRIES,
            },
            Self::PayPal => MethodRules {
                countries: PAYPAL_COUNTRIES,
            },
        }
    }

    /// Parses a method name as it appears in input records.
    ///
    /// Matching ignores ASCII case and accepts `credit_card` as an alias.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "creditcard" | "credit_card" => Some(Self::CreditCard),
            "paypal" => Some(Self::PayPal),
            _ => None,
        }
    }
}

impl MethodRules {
    pub fn allows_country(&self, country: &str) -> bool {
        self.countries.iter().any(|allowed| *allowed == country)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
