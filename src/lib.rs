// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Composable gate-widget core for a PLONK-style proving system.
//!
//! The shared prover/verifier pipeline in this crate knows nothing about the
//! algebra of any concrete gate. Every gate family is packaged as a widget
//! pair: a [`ProverWidget`](proof_system::widget::ProverWidget) contributes
//! additively to the quotient, linearization and opening polynomials, while
//! its paired [`VerifierWidget`](proof_system::widget::VerifierWidget) holds
//! the preprocessed selector commitments and contributes (point, scalar)
//! pairs to a single batched multiscalar multiplication.
//!
//! Widgets are bound together by a challenge-power accumulator that both
//! sides advance in the same fixed order. Each widget declares how many
//! challenge powers it consumes; the orchestrator assigns the powers
//! sequentially and cross-checks every widget against that schedule, so a
//! widget that consumes the wrong number of powers fails loudly instead of
//! silently desynchronizing every widget after it.
// Variables have always the same names in respect to wires.
#![allow(clippy::many_single_char_names)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod commitment_scheme;
pub mod error;
pub mod fft;
pub mod proof_system;
pub mod transcript;
mod util;

pub mod prelude;
