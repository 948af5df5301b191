//! Error diffusion kernel definitions.

/// An error diffusion kernel.
///
/// Each entry is an offset `(dx, dy)` to a neighbor that has not been
/// visited yet, and the numerator of the error share it receives. The
/// neighbor receives `error * weight / divisor`.
///
/// The `max_dy` field is how many rows ahead the kernel reaches, which sets
/// the error buffer depth: `max_dy + 1` rows.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries. `dy` is never negative.
    pub entries: &'static [(i32, i32, u8)],

    /// Denominator shared by all weights.
    pub divisor: u8,

    /// Maximum dy value in entries.
    pub max_dy: usize,
}

impl Kernel {
    /// Sum of all weights.
    pub fn weight_sum(&self) -> u32 {
        self.entries.iter().map(|&(_, _, w)| u32::from(w)).sum()
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
