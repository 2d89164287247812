// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! FFT module with the domain, polynomial and evaluation-form types the
//! proof system computes over.

pub(crate) mod domain;
pub(crate) mod evaluations;
pub(crate) mod polynomial;

pub use domain::{Elements, EvaluationDomain};
pub use evaluations::Evaluations;
pub use polynomial::Polynomial;
