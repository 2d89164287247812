// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Collection of functions needed to use the crate.
//!
//! Use `use plonk_widgets::prelude::*;` to import all of the types needed to
//! assemble a widget list and prove/verify with it.

pub use crate::commitment_scheme::kzg10::{
    CommitKey, Commitment, OpeningKey, PublicParameters,
};
pub use crate::error::Error;
pub use crate::proof_system::circuit_state::{CircuitFftState, Wire};
pub use crate::proof_system::widget::{
    ArithmeticVerifier, ArithmeticWidget, CapabilitySet, ChallengeAccumulator,
    Dependency, Feature, ProverWidget, RangeVerifier, RangeWidget,
    VerifierWidget,
};
pub use crate::proof_system::{Proof, Prover, Verifier};
pub use crate::transcript::Transcript;
pub use dusk_bls12_381::BlsScalar;
