//! Error types for the Tsunagi core library.
//!
//! Defines the union-find and spanning-tree error enums exposed by the public
//! API, their stable machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::disjoint_set::NodeIndexing;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::DisjointSet`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// A node label fell outside the range the set was initialised with.
    #[error("node {node} is out of range for {node_count} {indexing} nodes")]
    OutOfRangeNode {
        /// The offending node label.
        node: usize,
        /// Number of nodes the set was created with.
        node_count: usize,
        /// Labelling convention the set enforces.
        indexing: NodeIndexing,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// A node label fell outside the range the set was initialised with.
        OutOfRangeNode => OutOfRangeNode { .. } => "DISJOINT_SET_OUT_OF_RANGE_NODE",
    }
}

/// Error type produced while computing a minimum spanning tree or forest.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// An edge referenced a node label outside the graph.
    #[error("edge {edge_index} is invalid: {source}")]
    OutOfRangeNode {
        /// Position of the offending edge in the input sequence.
        edge_index: usize,
        /// Underlying union-find error.
        #[source]
        source: DisjointSetError,
    },
    /// An edge carried a weight that cannot be totally ordered (NaN or infinite).
    #[error("edge {edge_index} ({u}, {v}) has a non-finite weight")]
    NonFiniteWeight {
        /// Position of the offending edge in the input sequence.
        edge_index: usize,
        /// First endpoint as supplied.
        u: usize,
        /// Second endpoint as supplied.
        v: usize,
    },
    /// Accepting an edge pushed the running total past what the weight type
    /// can represent.
    #[error("total weight overflowed when accepting edge {edge_index}")]
    WeightOverflow {
        /// Position of the accepted edge in the input sequence.
        edge_index: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// An edge referenced a node label outside the graph.
        OutOfRangeNode => OutOfRangeNode { .. } => "MST_OUT_OF_RANGE_NODE",
        /// An edge carried a weight that cannot be totally ordered.
        NonFiniteWeight => NonFiniteWeight { .. } => "MST_NON_FINITE_WEIGHT",
        /// The running total exceeded the weight type's range.
        WeightOverflow => WeightOverflow { .. } => "MST_WEIGHT_OVERFLOW",
    }
}

impl MstError {
    /// Retrieve the inner [`DisjointSetErrorCode`] when the error originated in
    /// the union-find layer.
    #[must_use]
    pub const fn disjoint_set_code(&self) -> Option<DisjointSetErrorCode> {
        match self {
            Self::OutOfRangeNode { source, .. } => Some(source.code()),
            Self::NonFiniteWeight { .. } | Self::WeightOverflow { .. } => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T, E = MstError> = core::result::Result<T, E>;
