use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

/// A search vertex: a cloneable value with total equality and a stable hash.
///
/// Blanket-implemented, so any `Clone + Eq + Hash + Debug` type qualifies.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Vertex for T {}

/// Minimal search interface: neighbor enumeration.
pub trait Pather {
    type Vertex: Vertex;

    /// Append neighbors of `v` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, v: &Self::Vertex, buf: &mut Vec<Self::Vertex>);

    /// Whether `v` is a known vertex of this space.
    ///
    /// Implicit spaces, where every well-formed value is a vertex, keep the
    /// default.
    fn contains(&self, v: &Self::Vertex) -> bool {
        let _ = v;
        true
    }
}

impl<P: Pather + ?Sized> Pather for &P {
    type Vertex = P::Vertex;

    #[inline]
    fn neighbors(&self, v: &Self::Vertex, buf: &mut Vec<Self::Vertex>) {
        (**self).neighbors(v, buf);
    }

    #[inline]
    fn contains(&self, v: &Self::Vertex) -> bool {
        (**self).contains(v)
    }
}

/// A [`Pather`] backed by a closure.
///
/// ```
/// use statespace_search::{FnPather, SearchConfig, bfs_path};
///
/// // Walk the integers 0..10 one step at a time.
/// let line = FnPather::new(|&n: &i32, buf: &mut Vec<i32>| {
///     buf.extend([n - 1, n + 1].into_iter().filter(|m| (0..10).contains(m)));
/// });
/// let path = bfs_path(&line, &2, &7, &SearchConfig::default()).unwrap();
/// assert_eq!(path.steps(), Some(5));
/// ```
pub struct FnPather<V, F> {
    f: F,
    _vertex: PhantomData<fn(&V)>,
}

impl<V, F> FnPather<V, F>
where
    V: Vertex,
    F: Fn(&V, &mut Vec<V>),
{
    /// Wrap `f`, which appends the neighbors of its first argument to its second.
    pub fn new(f: F) -> Self {
        Self {
            f,
            _vertex: PhantomData,
        }
    }
}

impl<V, F> Pather for FnPather<V, F>
where
    V: Vertex,
    F: Fn(&V, &mut Vec<V>),
{
    type Vertex = V;

    #[inline]
    fn neighbors(&self, v: &V, buf: &mut Vec<V>) {
        (self.f)(v, buf);
    }
}
