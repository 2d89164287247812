// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Ideally we should cleanly abstract away the polynomial commitment scheme.
//! We note that PLONK makes use of the linearization technique and
//! the homomorphic property of the commitments, so (at least in the short
//! term) we will make this crate (and abstraction) attached to KZG10.

pub mod kzg10;
