/// An ordered sequence of vertices from a search's start to its goal.
///
/// An empty path means the goal was not reached. A path holding a single
/// vertex is the trivial route from a vertex to itself and takes zero steps.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path<V> {
    vertices: Vec<V>,
}

impl<V> Path<V> {
    /// The "no path" result.
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    pub(crate) fn from_vec(vertices: Vec<V>) -> Self {
        Self { vertices }
    }

    /// All vertices, start first.
    #[inline]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Number of vertices, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether no path was found.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges traversed, or `None` for an empty path.
    #[inline]
    pub fn steps(&self) -> Option<usize> {
        self.vertices.len().checked_sub(1)
    }

    /// First vertex.
    #[inline]
    pub fn start(&self) -> Option<&V> {
        self.vertices.first()
    }

    /// Last vertex.
    #[inline]
    pub fn goal(&self) -> Option<&V> {
        self.vertices.last()
    }

    /// Iterate over the vertices, start first.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.vertices.iter()
    }

    /// Iterate over consecutive `(from, to)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> {
        self.vertices.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Whether every consecutive pair satisfies `adjacent`.
    ///
    /// Trivially true for empty and single-vertex paths.
    pub fn is_connected_by(&self, mut adjacent: impl FnMut(&V, &V) -> bool) -> bool {
        self.edges().all(|(a, b)| adjacent(a, b))
    }

    /// Consume the path, returning its vertices.
    pub fn into_vec(self) -> Vec<V> {
        self.vertices
    }
}

impl<V> Default for Path<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V> IntoIterator for Path<V> {
    type Item = V;
    type IntoIter = std::vec::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Path<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

impl<V> From<Path<V>> for Vec<V> {
    fn from(path: Path<V>) -> Self {
        path.vertices
    }
}
