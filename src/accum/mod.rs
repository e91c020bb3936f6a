//! Accumulators: the write-side duals of cursors.
//!
//! An [`Accumulator`] is a stateful sink that incorporates a stream of
//! elements into a running state. The same combinator vocabulary the
//! cursors apply to *reading* is available here applied to *writing*:
//! [`filtering`](Accumulator::filtering), [`mapping`](Accumulator::mapping),
//! [`extracting`](Accumulator::extracting),
//! [`normalizing`](Accumulator::normalizing).
//!
//! Finishing is a separate capability ([`Finish`]) so that a narrowed view
//! over `&mut base` can be handed out while the caller retains ownership of
//! the richer base accumulator and finishes it afterwards — one shared
//! mutable state, exposed through a narrower interface.

mod base;
pub mod pair;
mod views;

pub use base::{Collect, Counter, Fold};
pub use pair::{Curried, PairAccumulator, Uncurried, Unzip};
pub use views::{Extracting, ExtractingAll, Filtering, MapOutput, Mapping, Normalizing};

use std::hash::Hash;

/// A stateful sink for a stream of elements.
pub trait Accumulator {
    /// Element type accepted by the sink.
    type Item;

    /// Incorporate one element into the running state.
    ///
    /// A failing caller-supplied closure in a view propagates (panics)
    /// from here; the state keeps whatever was accumulated before the
    /// failing call.
    fn add(&mut self, item: Self::Item);

    /// Incorporate every element of `items`, in iteration order.
    fn add_all<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = Self::Item>,
    {
        for item in items {
            self.add(item);
        }
    }

    /// Borrow this accumulator as a narrowed delegate.
    ///
    /// The borrow itself is an [`Accumulator`], so views can be stacked on
    /// top of it while the caller keeps the base (and its
    /// [`Finish`] capability) for afterwards.
    fn by_ref(&mut self) -> &mut Self {
        self
    }

    /// Gate [`add`](Accumulator::add) behind `predicate`; rejected elements
    /// are dropped silently, with no state mutation.
    fn filtering<P>(self, predicate: P) -> Filtering<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filtering::new(self, predicate)
    }

    /// Transform incoming elements through `f` before forwarding.
    fn mapping<T, F>(self, f: F) -> Mapping<Self, F, T>
    where
        Self: Sized,
        F: FnMut(T) -> Self::Item,
    {
        Mapping::new(self, f)
    }

    /// Forward at most one element per input: inputs for which `extractor`
    /// returns `None` are dropped.
    fn extracting<T, F>(self, extractor: F) -> Extracting<Self, F, T>
    where
        Self: Sized,
        F: FnMut(T) -> Option<Self::Item>,
    {
        Extracting::new(self, extractor)
    }

    /// Forward zero or more elements per input.
    fn extracting_all<T, I, F>(self, extractor: F) -> ExtractingAll<Self, F, T, I>
    where
        Self: Sized,
        I: IntoIterator<Item = Self::Item>,
        F: FnMut(T) -> I,
    {
        ExtractingAll::new(self, extractor)
    }

    /// Drop duplicate elements; the first occurrence wins.
    ///
    /// A [`Filtering`]-shaped view over a stateful seen-set predicate.
    fn normalizing(self) -> Normalizing<Self, fn(&Self::Item) -> Self::Item, Self::Item>
    where
        Self: Sized,
        Self::Item: Clone + Eq + Hash,
    {
        Normalizing::new(self, views::cloned_key as fn(&Self::Item) -> Self::Item)
    }

    /// Drop elements whose derived key was already seen; the first
    /// occurrence of each key wins.
    fn normalizing_by<K, F>(self, key: F) -> Normalizing<Self, F, K>
    where
        Self: Sized,
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        Normalizing::new(self, key)
    }
}

/// The finishing side of accumulation: consume the accumulator and yield
/// its final state.
pub trait Finish {
    /// The accumulated result type.
    type Output;

    /// Consume the accumulator and return the accumulated state.
    fn finish(self) -> Self::Output;

    /// Transform only the final result, not the accumulated elements; the
    /// view still accepts `add`.
    fn map_output<T, F>(self, f: F) -> MapOutput<Self, F>
    where
        Self: Sized,
        F: FnOnce(Self::Output) -> T,
    {
        MapOutput::new(self, f)
    }
}

// The delegated view: a mutable borrow is itself an accumulator that
// forwards into the shared state.
impl<A: Accumulator + ?Sized> Accumulator for &mut A {
    type Item = A::Item;

    fn add(&mut self, item: Self::Item) {
        (**self).add(item);
    }
}

impl<A: Accumulator + ?Sized> Accumulator for Box<A> {
    type Item = A::Item;

    fn add(&mut self, item: Self::Item) {
        (**self).add(item);
    }
}
