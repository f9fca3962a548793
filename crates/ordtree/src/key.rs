//! Key extraction strategies.
//!
//! The engine never looks at the shape of a stored value. It asks the
//! tree's [`KeyOf`] strategy for the key and orders by that alone, which
//! is all that separates a set from a map.

/// Projects the ordering key out of a stored value.
pub trait KeyOf<T> {
    type Key;

    fn key<'a>(&self, value: &'a T) -> &'a Self::Key;
}

/// The value is its own key (set-like use).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

impl<T> KeyOf<T> for Identity {
    type Key = T;

    #[inline]
    fn key<'a>(&self, value: &'a T) -> &'a T {
        value
    }
}

/// The first tuple component is the key (map-like use).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct First;

impl<K, V> KeyOf<(K, V)> for First {
    type Key = K;

    #[inline]
    fn key<'a>(&self, value: &'a (K, V)) -> &'a K {
        &value.0
    }
}
