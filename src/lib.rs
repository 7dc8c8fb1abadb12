//! Frame-by-frame STFT magnitude spectrograms for Rust.
//!
//! Spectromat slices a one-dimensional real-valued signal into overlapping
//! frames, windows each frame, computes the one-sided real FFT, and
//! normalizes to a decibel magnitude scale. The result is a 2-D matrix plus
//! matching frequency and time axis arrays, ready to hand to a pseudocolor
//! plotting consumer.
//!
//! # Quick Start
//!
//! ```rust
//! use spectromat::spectrum::spectrogram_named;
//!
//! // 440 Hz-ish tone, ~0.25 s at 8 kHz
//! let x: Vec<f32> = (0..2048).map(|i| (0.345 * i as f32).sin()).collect();
//!
//! let spec = spectrogram_named(&x, 8000, 256, "hann", 0).unwrap();
//! assert_eq!(spec.matrix.nrows(), 129); // 256/2 + 1 frequency bins
//! assert_eq!(spec.freqs.len(), 129);
//! assert_eq!(spec.times.len(), spec.matrix.ncols());
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`frame`] | Slice a signal into an overlapping-frame matrix |
//! | [`window`] | Window catalog (`rect`, `hann`, `hamming`, `blackman`, `bartlett`) |
//! | [`fft`] | Real-to-complex FFT plans |
//! | [`spectrum`] | Windowing, zero-padding, magnitude FFT, dB scaling, axes |
//! | [`utils`] | Numerical helpers (`linspace`) |
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`], an alias for
//! `std::result::Result<T, Error>`. Every precondition violation is an
//! [`Error::InvalidInput`]; numerical extremes such as `-inf` dB bins from
//! silent frames are valid output, not errors.
//!
//! # Safety
//!
//! This crate uses `#![forbid(unsafe_code)]` — no unsafe Rust anywhere.
//!
//! # Feature Flags
//!
//! | Flag | Description |
//! |------|-------------|
//! | `parallel` | Process spectrogram columns on a rayon thread pool |
//! | `display` | PPM-based spectrogram visualization |

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, Result};

pub mod fft;
pub mod frame;
pub mod spectrum;
pub mod utils;
pub mod window;

#[cfg(feature = "display")]
pub mod display;
