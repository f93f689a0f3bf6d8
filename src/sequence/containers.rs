//! Adapters for the standard collections and `ArrayVec`.
//!
//! Every collection is a sequence both by value (yielding owned elements)
//! and by shared reference (yielding borrowed elements). Associative
//! containers yield their entries as key-value pairs. Their end lies `len()`
//! elements after the start.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

use arrayvec::ArrayVec;

use super::{End, Sequenceable};

macro_rules! impl_sequenceable_for_container {
    ($(impl[$($generics:tt)*] $container:ty => $item:ty, $cursor:ty;)+) => {
        $(
            impl<$($generics)*> Sequenceable for $container {
                type Item = $item;
                type Cursor = $cursor;
                type Materialized<U> = Vec<U>;

                #[inline]
                fn start_cursor(self) -> Self::Cursor {
                    self.into_iter()
                }

                #[inline]
                fn end_cursor(&self) -> End {
                    End::at(self.len())
                }
            }
        )+
    };
}

impl_sequenceable_for_container! {
    impl[T] Vec<T> => T, std::vec::IntoIter<T>;
    impl['s, T] &'s Vec<T> => &'s T, std::slice::Iter<'s, T>;
    impl[T] VecDeque<T> => T, std::collections::vec_deque::IntoIter<T>;
    impl['s, T] &'s VecDeque<T> => &'s T, std::collections::vec_deque::Iter<'s, T>;
    impl[T] LinkedList<T> => T, std::collections::linked_list::IntoIter<T>;
    impl['s, T] &'s LinkedList<T> => &'s T, std::collections::linked_list::Iter<'s, T>;
    impl[T] BTreeSet<T> => T, std::collections::btree_set::IntoIter<T>;
    impl['s, T] &'s BTreeSet<T> => &'s T, std::collections::btree_set::Iter<'s, T>;
    impl[T, S] HashSet<T, S> => T, std::collections::hash_set::IntoIter<T>;
    impl['s, T, S] &'s HashSet<T, S> => &'s T, std::collections::hash_set::Iter<'s, T>;
    impl[K, V] BTreeMap<K, V> => (K, V), std::collections::btree_map::IntoIter<K, V>;
    impl['s, K, V] &'s BTreeMap<K, V> => (&'s K, &'s V), std::collections::btree_map::Iter<'s, K, V>;
    impl[K, V, S] HashMap<K, V, S> => (K, V), std::collections::hash_map::IntoIter<K, V>;
    impl['s, K, V, S] &'s HashMap<K, V, S> => (&'s K, &'s V), std::collections::hash_map::Iter<'s, K, V>;
}

// `ArrayVec` keeps a fixed capacity even though its length is only known at
// runtime, so element-preserving transforms stay fixed-capacity.

impl<T, const N: usize> Sequenceable for ArrayVec<T, N> {
    type Item = T;
    type Cursor = arrayvec::IntoIter<T, N>;
    type Materialized<U> = ArrayVec<U, N>;

    #[inline]
    fn start_cursor(self) -> Self::Cursor {
        self.into_iter()
    }

    #[inline]
    fn end_cursor(&self) -> End {
        End::at(self.len())
    }
}

impl<'s, T, const N: usize> Sequenceable for &'s ArrayVec<T, N> {
    type Item = &'s T;
    type Cursor = std::slice::Iter<'s, T>;
    type Materialized<U> = ArrayVec<U, N>;

    #[inline]
    fn start_cursor(self) -> Self::Cursor {
        self.iter()
    }

    #[inline]
    fn end_cursor(&self) -> End {
        End::at(self.len())
    }
}
