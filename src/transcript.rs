// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Transcript is an utility that helps to perform the `Fiat-Shamir`
//! heuristics without a direct communication between `Prover` and
//! `Verifier`.
//!
//! This is an extension over the [Merlin Transcript](merlin::Transcript)
//! which, besides commitment/scalar appends and scalar challenges, keeps an
//! ordered log of every disclosed scalar. Verifier widgets read the prover's
//! disclosed evaluations back out of that log by label, so a widget never
//! needs a back-reference into the proof object itself.

use crate::commitment_scheme::kzg10::Commitment;
use crate::error::Error;
use dusk_bls12_381::BlsScalar;
use dusk_bytes::Serializable;

/// An append-only, order-sensitive challenge/response log.
///
/// Challenges are deterministic given the same sequence of calls. Appended
/// scalars and squeezed challenges are also recorded in an element log that
/// widgets can query with [`Transcript::get_element`].
#[derive(Clone)]
pub struct Transcript {
    inner: merlin::Transcript,
    elements: Vec<(&'static [u8], BlsScalar)>,
}

impl std::fmt::Debug for Transcript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transcript")
            .field("elements", &self.elements.len())
            .finish()
    }
}

impl Transcript {
    /// Initializes a new transcript with the given domain-separating label.
    pub fn new(label: &'static [u8]) -> Transcript {
        Transcript {
            inner: merlin::Transcript::new(label),
            elements: Vec::new(),
        }
    }

    /// Append a `commitment` with the given `label`.
    pub fn append_commitment(&mut self, label: &'static [u8], comm: &Commitment) {
        self.inner.append_message(label, &comm.0.to_bytes());
    }

    /// Append a `BlsScalar` with the given `label`.
    ///
    /// The scalar becomes a disclosed element readable through
    /// [`Transcript::get_element`].
    pub fn append_scalar(&mut self, label: &'static [u8], s: &BlsScalar) {
        self.inner.append_message(label, &s.to_bytes());
        self.elements.push((label, *s));
    }

    /// Compute a `label`ed challenge variable.
    ///
    /// The challenge is recorded in the element log so widgets can read it
    /// without re-squeezing.
    pub fn challenge_scalar(&mut self, label: &'static [u8]) -> BlsScalar {
        let mut buf = [0u8; 64];
        self.inner.challenge_bytes(label, &mut buf);

        let challenge = BlsScalar::from_bytes_wide(&buf);
        self.elements.push((label, challenge));
        challenge
    }

    /// Returns the most recently disclosed element with the given `label`.
    ///
    /// Reading a label that was never disclosed is a usage fault: it means
    /// prover and verifier disagree about which widget disclosed what.
    pub fn get_element(&self, label: &'static [u8]) -> Result<BlsScalar, Error> {
        self.elements
            .iter()
            .rev()
            .find(|(l, _)| *l == label)
            .map(|(_, s)| *s)
            .ok_or(Error::TranscriptElementMissing { label })
    }

    /// Append domain separator for the circuit size.
    pub fn circuit_domain_sep(&mut self, n: u64) {
        self.inner.append_message(b"dom-sep", b"circuit_size");
        self.inner.append_u64(b"n", n);
    }

    /// Number of elements disclosed so far; used by the orchestrator to mark
    /// the start of the widget-disclosed region.
    pub(crate) fn num_elements(&self) -> usize {
        self.elements.len()
    }

    /// The elements disclosed at or after position `mark`.
    pub(crate) fn elements_from(&self, mark: usize) -> &[(&'static [u8], BlsScalar)] {
        &self.elements[mark..]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn disclosed_elements_are_readable() {
        let mut transcript = Transcript::new(b"test");
        transcript.append_scalar(b"a_eval", &BlsScalar::from(42));
        let alpha = transcript.challenge_scalar(b"alpha");

        assert_eq!(
            transcript.get_element(b"a_eval"),
            Ok(BlsScalar::from(42))
        );
        assert_eq!(transcript.get_element(b"alpha"), Ok(alpha));
        assert_eq!(
            transcript.get_element(b"b_eval"),
            Err(Error::TranscriptElementMissing { label: b"b_eval" })
        );
    }

    #[test]
    fn later_disclosures_shadow_earlier_ones() {
        let mut transcript = Transcript::new(b"test");
        transcript.append_scalar(b"a_eval", &BlsScalar::from(1));
        transcript.append_scalar(b"a_eval", &BlsScalar::from(2));
        assert_eq!(transcript.get_element(b"a_eval"), Ok(BlsScalar::from(2)));
    }
}
