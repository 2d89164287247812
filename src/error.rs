// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! A collection of all possible errors encountered in the widget framework.
//!
//! Two families live here. Usage faults (a widget invoked against circuit
//! state missing a declared dependency, a stale selector scratch, a widget
//! that advanced the challenge accumulator by the wrong amount) are
//! integration errors and fail loudly. Proof-invalidity outcomes surface as
//! [`Error::ProofVerificationError`]: a verifier routinely processes
//! untrusted proofs and must report "invalid" rather than abort.

use crate::proof_system::circuit_state::Wire;

/// Defines all possible errors that can be encountered in the widget
/// framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    // FFT errors
    /// This error occurs when the requested evaluation domain is larger than
    /// the two-adic subgroup of the scalar field supports.
    InvalidEvalDomainSize {
        /// Log size of the group
        log_size_of_group: u32,
        /// Two adacity of the scalar field
        adacity: u32,
    },

    // Prover/Verifier errors
    /// This error occurs when a proof verification fails.
    ProofVerificationError,
    /// This error occurs when the witness wires handed to the prover are
    /// longer than the evaluation domain the circuit was built for.
    /// The order: (wire_length, domain_size)
    InvalidCircuitSize(usize, usize),

    // Widget usage faults
    /// This error occurs when a widget requests the shifted evaluations of a
    /// wire that the circuit state was not asked to precompute.
    MissingShiftedWitness {
        /// The wire whose shifted evaluations were requested
        wire: Wire,
    },
    /// This error occurs when a widget returns a challenge base that does not
    /// match the power schedule derived from its declared arity. Every widget
    /// after it would be desynchronized, so the round is aborted.
    ChallengeScheduleViolation {
        /// Name of the offending widget
        widget: &'static str,
    },
    /// This error occurs when a widget is asked to compute contributions
    /// before `reset` was called for the active evaluation domain.
    WidgetNotReset {
        /// Name of the offending widget
        widget: &'static str,
    },
    /// This error occurs when a widget reads a transcript element that was
    /// never disclosed.
    TranscriptElementMissing {
        /// Label of the missing element
        label: &'static [u8],
    },

    // KZG10 errors
    /// This error occurs when the user tries to create PublicParameters
    /// and supplies the max degree as zero.
    DegreeIsZero,
    /// This error occurs when the user tries to trim PublicParameters
    /// to a degree that is larger than the maximum degree.
    TruncatedDegreeTooLarge,
    /// This error occurs when the user tries to trim PublicParameters
    /// down to a degree that is zero.
    TruncatedDegreeIsZero,
    /// This error occurs when the user tries to commit to a polynomial whose
    /// degree is larger than the supported degree for that proving key.
    PolynomialDegreeTooLarge,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEvalDomainSize {
                log_size_of_group,
                adacity,
            } => write!(
                f,
                "log-size of the evaluation domain group > TWO_ADACITY: {:?} > {:?}",
                log_size_of_group, adacity
            ),
            Self::ProofVerificationError => {
                write!(f, "proof verification failed")
            }
            Self::InvalidCircuitSize(wire_length, domain_size) => write!(
                f,
                "witness wires of length {} exceed the evaluation domain of size {}",
                wire_length, domain_size
            ),
            Self::MissingShiftedWitness { wire } => write!(
                f,
                "the circuit state does not carry shifted evaluations for the {:?} wire",
                wire
            ),
            Self::ChallengeScheduleViolation { widget } => write!(
                f,
                "widget '{}' advanced the challenge accumulator outside its declared arity",
                widget
            ),
            Self::WidgetNotReset { widget } => write!(
                f,
                "widget '{}' was not reset for the active evaluation domain",
                widget
            ),
            Self::TranscriptElementMissing { label } => write!(
                f,
                "transcript element '{}' was never disclosed",
                String::from_utf8_lossy(label)
            ),
            Self::DegreeIsZero => {
                write!(f, "cannot create PublicParameters with max degree 0")
            }
            Self::TruncatedDegreeTooLarge => {
                write!(f, "cannot trim more than the maximum degree")
            }
            Self::TruncatedDegreeIsZero => write!(
                f,
                "cannot trim PublicParameters to a maximum size of zero"
            ),
            Self::PolynomialDegreeTooLarge => write!(
                f,
                "proving key is not large enough to commit to said polynomial"
            ),
        }
    }
}

impl std::error::Error for Error {}
