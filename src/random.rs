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

//! Random sources for the gateway simulation.
//!
//! The gateway never reaches for a global generator. Callers pass a
//! [`RandomSource`] in, which lets tests replay a fixed sequence of draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform generator over `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Generator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Deterministic generator for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
///
/// An empty list always yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct FixedSequence {
    draws: Vec<f64>,
    position: usize,
}

impl FixedSequence {
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self {
            draws: draws.into(),
            position: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn taken(&self) -> usize {
        self.position
    }
}

impl RandomSource for FixedSequence {
    fn next_f64(&mut self) -> f64 {
        if self.draws.is_empty() {
            self.position += 1;
            return 0.0;
        }
        let draw = self.draws[self.position % self.draws.len()];
        self.position += 1;
        draw
    }
}
