// Copyright (c) The bimatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Support for petgraph.
//!
//! The code in here is generic over petgraph's traits, and could be
//! upstreamed into petgraph if desirable.

pub mod cycle;
pub mod scc;
