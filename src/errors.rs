// Copyright (c) The bimatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contains types that describe errors that `bimatch` methods can return.

use crate::graph::Side;
use std::error;
use std::fmt;

use Error::*;

/// Error type describing the sorts of errors `bimatch` can return.
///
/// All of these indicate a violated precondition on the caller's side;
/// nothing in this crate retries or recovers. The type is generic over the
/// vertex type so errors can carry the offending vertices by value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error<N> {
    /// A vertex registered on one side of the graph was reused on the other.
    SideConflict {
        /// The vertex in question.
        vertex: N,
        /// The side the vertex was first registered on.
        existing: Side,
        /// The side the conflicting operation asked for.
        requested: Side,
    },
    /// An edge scheduled for removal was not present in the graph.
    EdgeNotFound {
        /// The top endpoint of the missing edge.
        top: N,
        /// The bottom endpoint of the missing edge.
        bottom: N,
    },
}

impl<N: fmt::Debug> fmt::Display for Error<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SideConflict {
                vertex,
                existing,
                requested,
            } => write!(
                f,
                "vertex {:?} is registered as a {:?} vertex but was used as a {:?} vertex",
                vertex, existing, requested
            ),
            EdgeNotFound { top, bottom } => {
                write!(f, "no edge between {:?} and {:?}", top, bottom)
            }
        }
    }
}

impl<N: fmt::Debug> error::Error for Error<N> {}
