use gridwalk_core::{Adjacency, AdjacencySelector, Coord, Grid};

/// Minimal search interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>);
}

/// Any `Fn(Coord) -> impl IntoIterator<Item = Coord>` is a pather.
impl<F, I> Pather for F
where
    F: Fn(Coord) -> I,
    I: IntoIterator<Item = Coord>,
{
    #[inline]
    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>) {
        buf.extend(self(p));
    }
}

/// A pather over a [`Grid`]: in-grid neighbours under an [`Adjacency`],
/// kept only when `allowed(from, to)` holds.
pub struct GridPather<'a, E, S> {
    grid: &'a Grid<E>,
    selector: AdjacencySelector,
    allowed: S,
}

impl<'a, E, S> GridPather<'a, E, S>
where
    S: Fn(Coord, Coord) -> bool,
{
    pub fn new(grid: &'a Grid<E>, direction: Adjacency, allowed: S) -> Self {
        Self {
            grid,
            selector: grid.selector(direction),
            allowed,
        }
    }

    /// The grid being searched.
    #[inline]
    pub fn grid(&self) -> &'a Grid<E> {
        self.grid
    }
}

impl<E, S> Pather for GridPather<'_, E, S>
where
    S: Fn(Coord, Coord) -> bool,
{
    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>) {
        buf.extend(
            self.selector
                .neighbors(p)
                .into_iter()
                .filter(|&n| (self.allowed)(p, n)),
        );
    }
}
