// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Proving system: the widget contracts, the circuit FFT state and the
//! orchestrators that compose a heterogeneous widget list into one proof or
//! one verification.

pub mod circuit_state;
pub mod proof;
pub mod prover;
pub mod verifier;
pub mod widget;

pub use proof::Proof;
pub use prover::Prover;
pub use verifier::Verifier;

/// Number of polynomials the orchestrator itself folds into the batched
/// opening before the widgets take over: the quotient, the linearization
/// polynomial and the four wires. Widget nu powers start right after.
pub(crate) const BASE_OPENINGS: usize = 6;
