//! Penrose rhombus tiling via de Bruijn's pentagrid
//!
//! Five families of parallel lines are laid in the plane at multiples of 72°,
//! each family offset by its component of a [`ShiftVector`]. Every crossing of
//! two lines from different families is dual to one rhombus of the tiling:
//! the crossing point is lifted to an integer index per family, and the four
//! corners come from bumping the two crossing families' indices by 0 or 1.
//!
//! The generator is a pure function of the shift vector and the line count,
//! so the same [`PenroseTiling`] can be walked any number of times and yields
//! the same rhombi in the same order.

use rand::Rng;
use std::f64::consts::PI;

use crate::{Complex, GeometryError, Vec2};

/// Number of grid families (pentagrid)
pub const GRID_COUNT: usize = 5;

/// Number of unordered direction pairs, C(5, 2)
pub const PAIR_COUNT: usize = GRID_COUNT * (GRID_COUNT - 1) / 2;

/// The five unit grid directions `exp(2πik/5)`
pub fn grid_directions() -> [Complex; GRID_COUNT] {
    let mut grids = [Complex::ZERO; GRID_COUNT];
    for (k, g) in grids.iter_mut().enumerate() {
        *g = Complex::from_angle(2.0 * PI * k as f64 / GRID_COUNT as f64);
    }
    grids
}

/// All unordered direction pairs `(r, s)` with `r < s`, in lexicographic order
pub fn direction_pairs() -> impl Iterator<Item = (usize, usize)> + Clone {
    (0..GRID_COUNT).flat_map(|r| (r + 1..GRID_COUNT).map(move |s| (r, s)))
}

/// Number of rhombi produced for a line count: `10 * (2n + 1)^2`
///
/// Negative line counts produce no tiles. `None` if the count does not fit
/// in a `usize`.
pub fn tile_count(line_count: i64) -> Option<usize> {
    if line_count < 0 {
        return Some(0);
    }
    let side = usize::try_from(line_count)
        .ok()?
        .checked_mul(2)?
        .checked_add(1)?;
    side.checked_mul(side)?.checked_mul(PAIR_COUNT)
}

/// Per-family offsets of the five grids
///
/// Any shift whose components avoid the degenerate case of three lines
/// meeting in a point gives a valid tiling; a random shift does so with
/// probability one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShiftVector([f64; GRID_COUNT]);

impl ShiftVector {
    pub fn new(shift: [f64; GRID_COUNT]) -> Self {
        Self(shift)
    }

    /// Sample each component uniformly from `[0, 1)`
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut shift = [0.0; GRID_COUNT];
        for s in shift.iter_mut() {
            *s = rng.gen::<f64>();
        }
        Self(shift)
    }

    #[inline]
    pub fn as_array(&self) -> &[f64; GRID_COUNT] {
        &self.0
    }
}

impl std::ops::Index<usize> for ShiftVector {
    type Output = f64;
    #[inline]
    fn index(&self, k: usize) -> &f64 {
        &self.0[k]
    }
}

/// The two rhombus shapes of a P3 tiling
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RhombusKind {
    Thin,
    Fat,
}

impl RhombusKind {
    /// Classify the rhombus dual to a crossing of families `r` and `s`
    ///
    /// Thin iff `(s - r)^2 mod 5 == 1`.
    pub fn classify(r: usize, s: usize) -> Self {
        let d = s as i64 - r as i64;
        if (d * d) % GRID_COUNT as i64 == 1 {
            RhombusKind::Thin
        } else {
            RhombusKind::Fat
        }
    }
}

/// One tile of the tiling
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rhombus {
    /// Corners in order, the last one joins back to the first
    pub vertices: [Vec2; 4],
    pub kind: RhombusKind,
    /// The crossing grid families `(r, s)`
    pub directions: (usize, usize),
    /// The crossing line offsets `(kr, ks)`
    pub offsets: (i64, i64),
}

impl Rhombus {
    /// The four sides as `(start, end)` pairs, closing back to the first corner
    pub fn edges(&self) -> [(Vec2, Vec2); 4] {
        let v = &self.vertices;
        [(v[0], v[1]), (v[1], v[2]), (v[2], v[3]), (v[3], v[0])]
    }

    /// Shoelace area, positive for counter-clockwise corners
    pub fn signed_area(&self) -> f64 {
        self.edges()
            .iter()
            .map(|(a, b)| a.perp_dot(*b))
            .sum::<f64>()
            * 0.5
    }

    /// True if the two diagonals cross strictly inside both of them
    ///
    /// For four points this holds exactly when the outline is a convex,
    /// non-degenerate quadrilateral, which rules out self-intersection.
    pub fn is_simple(&self) -> bool {
        let [a, b, c, d] = self.vertices;
        let side = |p: Vec2, q: Vec2, r: Vec2| (q - p).perp_dot(r - p);
        let (d1, d2) = (side(a, c, b), side(a, c, d));
        let (d3, d4) = (side(b, d, a), side(b, d, c));
        d1 * d2 < -1e-12 && d3 * d4 < -1e-12
    }
}

/// A Penrose tiling generator with a fixed shift
#[derive(Clone, Copy, Debug)]
pub struct PenroseTiling {
    shift: ShiftVector,
    grids: [Complex; GRID_COUNT],
}

impl PenroseTiling {
    /// Create a generator for the tiling selected by `shift`
    pub fn new(shift: ShiftVector) -> Self {
        Self {
            shift,
            grids: grid_directions(),
        }
    }

    #[inline]
    pub fn shift(&self) -> &ShiftVector {
        &self.shift
    }

    /// The rhombus dual to line `kr` of family `r` crossing line `ks` of family `s`
    pub fn rhombus(&self, r: usize, s: usize, kr: i64, ks: i64) -> Result<Rhombus, GeometryError> {
        if r >= GRID_COUNT || s >= GRID_COUNT || r == s {
            return Err(GeometryError::DirectionOutOfRange { r, s });
        }
        Ok(self.rhombus_unchecked(r, s, kr, ks))
    }

    fn rhombus_unchecked(&self, r: usize, s: usize, kr: i64, ks: i64) -> Rhombus {
        let g = &self.grids;
        let shift = &self.shift;

        // Crossing of the two grid lines
        let between = g[(s + GRID_COUNT - r) % GRID_COUNT].im;
        let point = (g[r] * (ks as f64 - shift[s]) - g[s] * (kr as f64 - shift[r])) * Complex::I
            / between;

        // Which strip of each family the crossing falls into
        let mut index = [0i64; GRID_COUNT];
        for (k, idx) in index.iter_mut().enumerate() {
            *idx = ((point / g[k]).re + shift[k]).ceil() as i64;
        }

        let corners = [(kr, ks), (kr + 1, ks), (kr + 1, ks + 1), (kr, ks + 1)];
        let mut vertices = [Vec2::ZERO; 4];
        for (vertex, (ir, is)) in vertices.iter_mut().zip(corners) {
            index[r] = ir;
            index[s] = is;
            *vertex = self.lattice_point(&index);
        }

        Rhombus {
            vertices,
            kind: RhombusKind::classify(r, s),
            directions: (r, s),
            offsets: (kr, ks),
        }
    }

    /// Project an index vector onto the plane: `sum(index[k] * grid[k])`
    fn lattice_point(&self, index: &[i64; GRID_COUNT]) -> Vec2 {
        let mut z = Complex::ZERO;
        for (k, g) in self.grids.iter().enumerate() {
            z += *g * index[k] as f64;
        }
        z.to_point()
    }

    /// Lazily enumerate every rhombus with offsets in `[-line_count, line_count]`
    ///
    /// Pairs come in lexicographic order, and within a pair offsets are
    /// ordered by `kr` then `ks`. The iterator yields exactly
    /// [`tile_count(line_count)`](tile_count) items.
    pub fn tiles(&self, line_count: i64) -> Result<impl Iterator<Item = Rhombus>, GeometryError> {
        if line_count < 0 {
            return Err(GeometryError::NegativeLineCount(line_count));
        }

        let tiling = *self;
        Ok(direction_pairs().flat_map(move |(r, s)| {
            (-line_count..=line_count)
                .flat_map(move |kr| (-line_count..=line_count).map(move |ks| (kr, ks)))
                .map(move |(kr, ks)| tiling.rhombus_unchecked(r, s, kr, ks))
        }))
    }
}
