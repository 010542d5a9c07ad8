//! Error diffusion kernel definitions.
//!
//! Each kernel specifies how the quantization error of one pixel is
//! distributed to neighbors that have not been visited yet in raster order.

/// An error diffusion kernel.
///
/// Each entry is an offset `(dx, dy)` and a weight. A neighbor receives
/// `error * weight / divisor`, so the total propagated fraction is
/// `sum(weights) / divisor`.
///
/// The `max_dy` field indicates how many rows ahead the kernel reaches,
/// which determines the error buffer depth: `max_dy + 1` rows.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries, `dy >= 0`.
    pub entries: &'static [(i32, i32, u8)],

    /// Each neighbor receives `error * weight / divisor`.
    pub divisor: u8,

    /// Maximum dy value in entries.
    pub max_dy: usize,
}

impl Kernel {
    /// Fraction of the quantization error this kernel propagates.
    pub fn propagation(&self) -> f32 {
        let total: u32 = self.entries.iter().map(|&(_, _, w)| w as u32).sum();
        total as f32 / self.divisor as f32
    }
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
    max_dy: 1,
};

/// Atkinson dithering kernel.
///
/// Distributes error to 6 neighbors with 75% total propagation (6/8).
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
pub const ATKINSON: Kernel = Kernel {
    entries: &[
        (1, 0, 1),  // right
        (2, 0, 1),  // two right
        (-1, 1, 1), // bottom-left
        (0, 1, 1),  // bottom
        (1, 1, 1),  // bottom-right
        (0, 2, 1),  // two below
    ],
    divisor: 8,
    max_dy: 2,
};
