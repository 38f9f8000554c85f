use super::*;
use serde::Serialize;
use std::ops::AddAssign;
use std::ops::Index;
use std::ops::IndexMut;
use std::sync::Arc;

/// Dense storage addressed by (player), (player, infoset), or
/// (player, infoset, action).
///
/// One contiguous `Vec<T>` sliced through a shared [`Layout`]. Indexing
/// with a tuple panics outside the shape; `get` and friends return `None`.
///
/// # Merging
///
/// Vectors of identical shape combine with `+=`. Decomposition relies on
/// [`Partitioned::merge`], which additionally requires the two operands to
/// occupy disjoint coordinates, so the sum is a union of partial
/// assignments rather than arithmetic on comparable quantities.
#[derive(Debug, Clone, PartialEq)]
pub struct Partitioned<T> {
    layout: Arc<Layout>,
    data: Vec<T>,
}

impl<T> Partitioned<T>
where
    T: Copy + Default,
{
    /// All-default vector over `layout`.
    pub fn zeros(layout: Arc<Layout>) -> Self {
        Self {
            data: vec![T::default(); layout.size()],
            layout,
        }
    }
    pub fn fill(&mut self, value: T) {
        self.data.iter_mut().for_each(|x| *x = value);
    }
}

impl<T> Partitioned<T> {
    pub fn layout(&self) -> &Arc<Layout> {
        &self.layout
    }
    pub fn shape(&self) -> &Shape {
        self.layout.shape()
    }
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
    pub fn get(&self, player: usize, infoset: usize, action: usize) -> Option<&T> {
        self.layout
            .offset(player, infoset, action)
            .map(|i| &self.data[i])
    }
    pub fn get_mut(&mut self, player: usize, infoset: usize, action: usize) -> Option<&mut T> {
        self.layout
            .offset(player, infoset, action)
            .map(|i| &mut self.data[i])
    }
    /// One player's slots, infosets back to back.
    pub fn player(&self, player: usize) -> Option<&[T]> {
        self.layout.player(player).map(|r| &self.data[r])
    }
    /// One infoset's slots.
    pub fn infoset(&self, player: usize, infoset: usize) -> Option<&[T]> {
        self.layout.infoset(player, infoset).map(|r| &self.data[r])
    }
    pub fn infoset_mut(&mut self, player: usize, infoset: usize) -> Option<&mut [T]> {
        self.layout
            .infoset(player, infoset)
            .map(|r| &mut self.data[r])
    }
    /// Same shape, possibly through different layout allocations.
    pub fn conforms(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.layout, &other.layout) || self.layout == other.layout
    }
    /// Nested player → infoset → action copy of the slots.
    pub fn nested(&self) -> Vec<Vec<Vec<T>>>
    where
        T: Clone,
    {
        let shape = self.shape();
        (0..shape.players())
            .map(|p| {
                (0..shape.infosets(p))
                    .map(|i| self.infoset(p, i).map(<[T]>::to_vec).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

impl<T> Partitioned<T>
where
    T: Copy + Default + PartialEq,
{
    /// No coordinate is non-default in both vectors.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let zero = T::default();
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| *a == zero || *b == zero)
    }
}

impl<T> Partitioned<T>
where
    T: Copy + Default + PartialEq + AddAssign,
{
    /// Union of two partial assignments over the same shape.
    pub fn merge(&mut self, other: &Self) {
        debug_assert!(self.is_disjoint(other), "merged vectors overlap");
        *self += other;
    }
}

impl<T> AddAssign<&Partitioned<T>> for Partitioned<T>
where
    T: Copy + AddAssign,
{
    fn add_assign(&mut self, rhs: &Partitioned<T>) {
        assert!(self.conforms(rhs), "partitioned shapes differ");
        for (a, b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a += *b;
        }
    }
}

impl<T> Index<(usize, usize, usize)> for Partitioned<T> {
    type Output = T;
    fn index(&self, (player, infoset, action): (usize, usize, usize)) -> &T {
        self.get(player, infoset, action).unwrap_or_else(|| {
            panic!("index ({}, {}, {}) out of range", player, infoset, action)
        })
    }
}

impl<T> IndexMut<(usize, usize, usize)> for Partitioned<T> {
    fn index_mut(&mut self, (player, infoset, action): (usize, usize, usize)) -> &mut T {
        self.get_mut(player, infoset, action).unwrap_or_else(|| {
            panic!("index ({}, {}, {}) out of range", player, infoset, action)
        })
    }
}

impl<T> Index<(usize, usize)> for Partitioned<T> {
    type Output = [T];
    fn index(&self, (player, infoset): (usize, usize)) -> &[T] {
        self.infoset(player, infoset)
            .unwrap_or_else(|| panic!("infoset ({}, {}) out of range", player, infoset))
    }
}

impl<T> Index<usize> for Partitioned<T> {
    type Output = [T];
    fn index(&self, player: usize) -> &[T] {
        self.player(player)
            .unwrap_or_else(|| panic!("player {} out of range", player))
    }
}

impl<T> Serialize for Partitioned<T>
where
    T: Serialize + Clone,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.nested())
    }
}
