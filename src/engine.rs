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

//! Payment processing engine.
//!
//! The [`Engine`] owns a [`Gateway`] and runs every submitted payment through
//! [`handle_payment`]. It keeps a running [`Summary`] of outcomes so batch
//! callers can report totals.
//!
//! # Outcomes
//!
//! - **Accepted**: the gateway confirmed the payment.
//! - **Rejected**: validation failed; the gateway was never called.
//! - **Failed**: the gateway call itself failed.

use crate::error::PaymentError;
use crate::gateway::{Gateway, SimulatedGateway};
use crate::payment::Payment;
use crate::pipeline::handle_payment;
use crate::random::{RandomSource, RngSource};
use rand::rngs::StdRng;

/// Per-outcome counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub accepted: u64,
    pub rejected: u64,
    pub failed: u64,
}

impl Summary {
    pub fn total(&self) -> u64 {
        self.accepted + self.rejected + self.failed
    }

    fn record(&mut self, result: &Result<String, PaymentError>) {
        match result {
            Ok(_) => self.accepted += 1,
            Err(error) if error.is_gateway_failure() => self.failed += 1,
            Err(_) => self.rejected += 1,
        }
    }
}

/// Runs payments through the pipeline against a single gateway.
///
/// Requests are independent: the engine holds no per-request state beyond
/// the outcome counters.
pub struct Engine<G> {
    gateway: G,
    summary: Summary,
}

impl<G: Gateway> Engine<G> {
    pub fn new(gateway: G) -> Self {
        Engine {
            gateway,
            summary: Summary::default(),
        }
    }

    /// Validates and dispatches a payment.
    ///
    /// # Errors
    ///
    /// Whatever [`handle_payment`] returns; the outcome is counted either way.
    pub fn process(&mut self, payment: Payment) -> Result<String, PaymentError> {
        let result = handle_payment(payment, &mut self.gateway);
        self.summary.record(&result);
        result
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Counts a rejection produced outside the pipeline, such as a record
    /// that could not be turned into a payment.
    pub fn record_rejection(&mut self) {
        self.summary.rejected += 1;
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }
}

impl<S: RandomSource> Engine<SimulatedGateway<S>> {
    /// Engine over the simulated gateway drawing from `source`.
    pub fn simulated(source: S) -> Self {
        Self::new(SimulatedGateway::new(source))
    }
}

impl Default for Engine<SimulatedGateway<RngSource<StdRng>>> {
    fn default() -> Self {
        Self::simulated(RngSource::from_os_rng())
    }
}
