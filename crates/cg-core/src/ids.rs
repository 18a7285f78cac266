//! Strongly typed node identifier.
//!
//! Node ids are handed out in creation order, starting at 0, and are never
//! reused.  They are `Copy + Ord + Hash` so they can be used as map keys and
//! sorted without ceremony.  The inner integer is `pub`; prefer `.index()`
//! when converting for `Vec` access.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Identity of a facility in the full node set.
    pub struct NodeId(u32);
}

impl NodeId {
    /// Id of the facility at position `n` of the full node set.
    ///
    /// Fails with [`CoreError::IdSpaceExhausted`] past `u32::MAX`.
    pub fn from_index(n: usize) -> CoreResult<NodeId> {
        NodeId::try_from(n).map_err(|_| CoreError::IdSpaceExhausted(n))
    }
}
