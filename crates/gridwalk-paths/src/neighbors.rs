use gridwalk_core::{AdjacencySelector, Coord};

/// Cached neighbor computation helper.
///
/// Enumerates cardinal (4-way) or selector-driven neighbors of a
/// coordinate, filtered by a predicate.
pub struct Neighbors {
    buf: Vec<Coord>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(9),
        }
    }

    /// Return 4-directional (cardinal) neighbors of `p`, keeping only those
    /// for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Coord, keep: impl Fn(Coord) -> bool) -> &[Coord] {
        self.buf.clear();
        for n in p.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }

    /// Return the neighbors `selector` yields for `p`, keeping only those
    /// for which `keep` returns `true`.
    pub fn select(
        &mut self,
        selector: &AdjacencySelector,
        p: Coord,
        keep: impl Fn(Coord) -> bool,
    ) -> &[Coord] {
        self.buf.clear();
        self.buf
            .extend(selector.neighbors(p).into_iter().filter(|&n| keep(n)));
        &self.buf
    }
}
