// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! A polynomial represented in evaluations form over a domain.

use crate::fft::domain::EvaluationDomain;
use crate::fft::polynomial::Polynomial;
use dusk_bls12_381::BlsScalar;
use std::ops::Index;

/// Stores a polynomial in evaluation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluations {
    /// The evaluations of a polynomial over the domain `D`
    pub(crate) evals: Vec<BlsScalar>,
    domain: EvaluationDomain,
}

impl Evaluations {
    /// Construct `Self` from evaluations and a domain.
    pub fn from_vec_and_domain(
        evals: Vec<BlsScalar>,
        domain: EvaluationDomain,
    ) -> Self {
        Self { evals, domain }
    }

    /// Interpolate a polynomial from a list of evaluations.
    pub fn interpolate(self) -> Polynomial {
        let Self { evals, domain } = self;
        Polynomial::from_coefficients_vec(domain.ifft(&evals))
    }
}

impl Index<usize> for Evaluations {
    type Output = BlsScalar;

    fn index(&self, index: usize) -> &BlsScalar {
        &self.evals[index]
    }
}
