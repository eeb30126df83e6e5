//! Hash containers with a fixed seed.
//!
//! Every map in this crate is keyed by names or [`TypeId`]s produced inside the
//! process, so a fixed `foldhash` seed is enough and keeps iteration order
//! reproducible between runs.
//!
//! [`TypeId`]: core::any::TypeId

use core::any::TypeId;
use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};

/// A fixed hash seed.
const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x6A09E667F3BCC908);

/// Fixed hash state based upon a random but fixed seed.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use vmc_schema::hash::FixedHashState;
///
/// assert_eq!(FixedHashState.hash_one("name"), FixedHashState.hash_one("name"));
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FoldHasher<'static>;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

/// A [`hashbrown::HashMap`] using [`FixedHashState`].
pub type HashMap<K, V> = hashbrown::HashMap<K, V, FixedHashState>;

/// A [`hashbrown::HashSet`] using [`FixedHashState`].
pub type HashSet<T> = hashbrown::HashSet<T, FixedHashState>;

/// A map keyed by [`TypeId`].
pub type TypeIdMap<V> = HashMap<TypeId, V>;
