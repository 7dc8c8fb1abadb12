//! Spectrogram visualization helpers.
//!
//! This module plays the consumer role for [`crate::spectrum::Spectrogram`]:
//! it renders the dB matrix as a pseudocolor image. Enable with the
//! `display` feature in Cargo.toml:
//!
//! ```toml
//! [dependencies]
//! spectromat = { version = "0.1", features = ["display"] }
//! ```

use ndarray::Array2;
use std::str::FromStr;

/// Color map types for spectrograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMap {
    /// Viridis colormap (perceptually uniform, colorblind-friendly)
    Viridis,
    /// Magma colormap (perceptually uniform, dark background)
    Magma,
    /// Grayscale colormap
    Grayscale,
}

impl ColorMap {
    /// Convert a normalized value (0.0 to 1.0) to RGB color.
    pub fn to_rgb(&self, value: f32) -> (u8, u8, u8) {
        let v = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
        match self {
            ColorMap::Viridis => viridis(v),
            ColorMap::Magma => magma(v),
            ColorMap::Grayscale => {
                let g = (v * 255.0) as u8;
                (g, g, g)
            }
        }
    }
}

impl FromStr for ColorMap {
    type Err = ();

    /// Parse colormap from string name.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_lowercase().as_str() {
            "viridis" => Ok(ColorMap::Viridis),
            "magma" => Ok(ColorMap::Magma),
            "grayscale" | "gray" | "grey" => Ok(ColorMap::Grayscale),
            _ => Err(()),
        }
    }
}

/// Viridis colormap implementation.
fn viridis(t: f32) -> (u8, u8, u8) {
    // Simplified viridis approximation
    let r = (0.267004 + t * (0.003991 + t * (1.096452 + t * (-2.146305 + t * 1.167419))))
        .clamp(0.0, 1.0);
    let g = (0.004874 + t * (1.015861 + t * (-0.107203 + t * (-0.449175 + t * 0.539506))))
        .clamp(0.0, 1.0);
    let b = (0.329415 + t * (1.421511 + t * (-2.482568 + t * (1.871714 + t * (-0.140092)))))
        .clamp(0.0, 1.0);
    ((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

/// Magma colormap implementation.
fn magma(t: f32) -> (u8, u8, u8) {
    let r = (0.001462 + t * (0.169823 + t * (2.240361 + t * (-1.106994)))).clamp(0.0, 1.0);
    let g = (0.000466 + t * (0.100897 + t * (0.699060 + t * (0.203185)))).clamp(0.0, 1.0);
    let b = (0.013866 + t * (0.563622 + t * (-0.543021 + t * (0.966020)))).clamp(0.0, 1.0);
    ((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

/// Convert a dB spectrogram matrix to RGB image data.
///
/// Scaling bounds default to the finite min/max of the data, so the `-inf`
/// cells a dB spectrogram legitimately contains clamp to the bottom of the
/// color scale instead of poisoning the range.
///
/// # Arguments
/// * `data` - 2D array (frequency x time) in dB or linear scale
/// * `cmap` - Colormap to use
/// * `vmin` - Minimum value for scaling (if None, uses finite data min)
/// * `vmax` - Maximum value for scaling (if None, uses finite data max)
///
/// # Returns
/// RGB image data as (width, height, pixels) where pixels is Vec<u8> in RGB format
///
/// # Example
/// ```
/// use spectromat::display::{spectrogram_to_rgb, ColorMap};
/// use ndarray::Array2;
///
/// let spec = Array2::<f32>::zeros((128, 100));
/// let (width, height, pixels) = spectrogram_to_rgb(&spec, ColorMap::Viridis, None, None);
/// assert_eq!(width, 100);
/// assert_eq!(height, 128);
/// assert_eq!(pixels.len(), 100 * 128 * 3);
/// ```
pub fn spectrogram_to_rgb(
    data: &Array2<f32>,
    cmap: ColorMap,
    vmin: Option<f32>,
    vmax: Option<f32>,
) -> (usize, usize, Vec<u8>) {
    let (n_freq, n_time) = data.dim();

    if n_freq == 0 || n_time == 0 {
        return (0, 0, Vec::new());
    }

    let finite = || data.iter().copied().filter(|v| v.is_finite());
    let data_min = vmin.unwrap_or_else(|| finite().fold(f32::INFINITY, f32::min));
    let data_max = vmax.unwrap_or_else(|| finite().fold(f32::NEG_INFINITY, f32::max));
    let range = (data_max - data_min).max(1e-10);

    // Frequency axis is flipped for display, low freq at bottom.
    let mut pixels = Vec::with_capacity(n_freq * n_time * 3);

    for f in (0..n_freq).rev() {
        for t in 0..n_time {
            let val = data[(f, t)];
            let normalized = ((val - data_min) / range).clamp(0.0, 1.0);
            let (r, g, b) = cmap.to_rgb(normalized);
            pixels.push(r);
            pixels.push(g);
            pixels.push(b);
        }
    }

    (n_time, n_freq, pixels)
}

/// Save RGB pixel data as a PPM image file.
///
/// PPM is a simple uncompressed format that can be opened by most image viewers.
///
/// # Arguments
/// * `path` - Output file path (should end in .ppm)
/// * `width` - Image width
/// * `height` - Image height
/// * `pixels` - RGB pixel data (width * height * 3 bytes)
pub fn save_ppm(path: &str, width: usize, height: usize, pixels: &[u8]) -> std::io::Result<()> {
    use std::io::Write;

    let mut file = std::fs::File::create(path)?;
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", width, height)?;
    writeln!(file, "255")?;
    file.write_all(pixels)?;
    Ok(())
}

/// Save a spectrogram matrix as a PPM image.
///
/// # Arguments
/// * `data` - 2D array (frequency x time)
/// * `path` - Output file path
/// * `cmap` - Colormap to use
/// * `vmin` - Minimum value for scaling
/// * `vmax` - Maximum value for scaling
///
/// # Example
/// ```ignore
/// use spectromat::display::{save_spectrogram, ColorMap};
/// use ndarray::Array2;
///
/// let spec = Array2::<f32>::zeros((128, 100));
/// save_spectrogram(&spec, "spectrogram.ppm", ColorMap::Viridis, None, None).unwrap();
/// ```
pub fn save_spectrogram(
    data: &Array2<f32>,
    path: &str,
    cmap: ColorMap,
    vmin: Option<f32>,
    vmax: Option<f32>,
) -> std::io::Result<()> {
    let (width, height, pixels) = spectrogram_to_rgb(data, cmap, vmin, vmax);
    save_ppm(path, width, height, &pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colormap_viridis() {
        let (r, _g, _b) = ColorMap::Viridis.to_rgb(0.0);
        assert!(r < 100); // Dark at low values

        let (r, g, _b) = ColorMap::Viridis.to_rgb(1.0);
        assert!(g > 200 || r > 200); // Bright at high values
    }

    #[test]
    fn test_colormap_grayscale() {
        let (r, g, b) = ColorMap::Grayscale.to_rgb(0.0);
        assert_eq!((r, g, b), (0, 0, 0));

        let (r, g, b) = ColorMap::Grayscale.to_rgb(1.0);
        assert_eq!((r, g, b), (255, 255, 255));
    }

    #[test]
    fn test_colormap_from_str() {
        assert_eq!("viridis".parse(), Ok(ColorMap::Viridis));
        assert_eq!("MAGMA".parse(), Ok(ColorMap::Magma));
        assert_eq!("gray".parse(), Ok(ColorMap::Grayscale));
        assert_eq!("unknown".parse::<ColorMap>(), Err(()));
    }

    #[test]
    fn test_spectrogram_to_rgb_shape() {
        let data = Array2::from_shape_fn((64, 100), |(f, t)| (f as f32 + t as f32) / 164.0);

        let (width, height, pixels) = spectrogram_to_rgb(&data, ColorMap::Viridis, None, None);

        assert_eq!(width, 100);
        assert_eq!(height, 64);
        assert_eq!(pixels.len(), 100 * 64 * 3);
    }

    #[test]
    fn test_spectrogram_to_rgb_empty() {
        let data = Array2::<f32>::zeros((0, 0));
        let (width, height, pixels) = spectrogram_to_rgb(&data, ColorMap::Viridis, None, None);
        assert_eq!(width, 0);
        assert_eq!(height, 0);
        assert!(pixels.is_empty());
    }

    #[test]
    fn test_neg_infinity_cells_clamp_to_floor() {
        let mut data = Array2::<f32>::zeros((4, 4));
        data[(1, 1)] = f32::NEG_INFINITY;
        data[(2, 2)] = 10.0;

        let (_w, _h, pixels) = spectrogram_to_rgb(&data, ColorMap::Grayscale, None, None);
        // -inf maps to black, the finite max to white; row 1 is the third
        // row from the top after the frequency flip.
        let idx = ((4 - 1 - 1) * 4 + 1) * 3;
        assert_eq!(pixels[idx], 0);
    }
}
