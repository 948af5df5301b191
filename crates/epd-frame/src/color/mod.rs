//! Color types
//!
//! The whole pipeline works on 8-bit sRGB triples: palette entries are
//! specified that way by panel vendors, and nearest-color matching is plain
//! squared Euclidean distance over the three channels.
//!
//! # Example
//!
//! ```
//! use epd_frame::Rgb;
//!
//! let red: Rgb = "#C85032".parse().unwrap();
//! assert_eq!(red, Rgb::new(200, 80, 50));
//! assert_eq!(red.distance_squared(Rgb::new(200, 80, 52)), 4);
//! ```

mod rgb;

pub use rgb::Rgb;
