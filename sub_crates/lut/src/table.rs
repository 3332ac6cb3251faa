/// A 3D lookup table of RGB triples.
///
/// Entries are stored with the first axis varying fastest, which is the
/// order the cube format expects: the index of `(r, g, b)` is
/// `b * res_g * res_r + g * res_r + r`.
#[derive(Debug, Clone, PartialEq)]
pub struct Lut3D {
    pub ranges: [(f64, f64); 3],
    pub resolution: [usize; 3],
    pub table: Vec<[f64; 3]>,
}

impl Default for Lut3D {
    fn default() -> Lut3D {
        Lut3D {
            ranges: [(0.0, 1.0); 3],
            resolution: [0; 3],
            table: Vec::new(),
        }
    }
}

impl Lut3D {
    /// Builds a cubic table over the unit domain by evaluating `f` at every
    /// grid point.
    ///
    /// `f` receives the normalized coordinate of each axis.  The outer loop
    /// walks the third axis and the inner loop the first, so the table
    /// comes out in storage order.
    ///
    /// Panics if `res < 2`.
    pub fn from_fn<F>(res: usize, mut f: F) -> Lut3D
    where
        F: FnMut(f64, f64, f64) -> [f64; 3],
    {
        assert!(res >= 2, "a 3D LUT needs at least two points per axis");

        let step = (res - 1) as f64;
        let mut table = Vec::with_capacity(res * res * res);
        for bi in 0..res {
            let b = bi as f64 / step;
            for gi in 0..res {
                let g = gi as f64 / step;
                for ri in 0..res {
                    let r = ri as f64 / step;
                    table.push(f(r, g, b));
                }
            }
        }

        Lut3D {
            ranges: [(0.0, 1.0); 3],
            resolution: [res; 3],
            table,
        }
    }

    pub fn sample_count(&self) -> usize {
        self.resolution[0] * self.resolution[1] * self.resolution[2]
    }

    pub fn is_cubic(&self) -> bool {
        self.resolution[0] == self.resolution[1] && self.resolution[1] == self.resolution[2]
    }

    #[inline]
    pub fn index(&self, r: usize, g: usize, b: usize) -> usize {
        debug_assert!(r < self.resolution[0] && g < self.resolution[1] && b < self.resolution[2]);
        (b * self.resolution[1] * self.resolution[0]) + (g * self.resolution[0]) + r
    }

    /// Fetches the entry at grid point `(r, g, b)`.
    #[inline]
    pub fn get(&self, r: usize, g: usize, b: usize) -> [f64; 3] {
        self.table[self.index(r, g, b)]
    }

    /// Inverse of `index()`: the grid point `(r, g, b)` of a table index.
    pub fn coordinates(&self, i: usize) -> (usize, usize, usize) {
        let plane = self.resolution[0] * self.resolution[1];
        (i % self.resolution[0], (i / self.resolution[0]) % self.resolution[1], i / plane)
    }
}
