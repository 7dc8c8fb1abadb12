use crate::fft::RfftPlan;
use crate::frame;
use crate::window::Window;
use ndarray::{Array2, ArrayView1};

/// Configuration for [`spectrogram`].
#[derive(Debug, Clone)]
pub struct SpectrogramConfig {
    /// Analysis frame length in samples.
    pub frame_length: usize,
    /// Window applied to each frame before the FFT.
    pub window: Window,
    /// Number of zeros appended to each frame before the FFT.
    pub pad_len: usize,
}

impl Default for SpectrogramConfig {
    fn default() -> Self {
        Self {
            frame_length: 1024,
            window: Window::Hann,
            pad_len: 0,
        }
    }
}

/// STFT magnitude spectrogram in decibels, with its axis arrays.
///
/// `matrix` has one row per non-negative frequency bin and one column per
/// frame. `freqs` and `times` are the matching axis values for a
/// pseudocolor-mesh consumer (x = `times`, y = `freqs`, z = `matrix`).
#[derive(Debug, Clone)]
pub struct Spectrogram {
    /// dB-scaled magnitudes, shape `(n_bins, n_frames)`.
    pub matrix: Array2<f32>,
    /// Frequency axis, linear from 0 to `fs / 2` (integer division), one
    /// value per matrix row.
    pub freqs: Vec<f32>,
    /// Time axis, one value per matrix column. The span is the matrix
    /// element count divided by the sample rate.
    pub times: Vec<f32>,
}

/// Window, transform, and scale a single padded frame.
#[inline]
fn compute_column(
    frame: ArrayView1<'_, f32>,
    window: &[f32],
    fft: &RfftPlan,
    padded_len: usize,
    n_bins: usize,
) -> Vec<f32> {
    // Only the first frame_length entries are windowed; the padding region
    // stays zero.
    let mut buffer = vec![0.0f32; padded_len];
    for (i, &w) in window.iter().enumerate() {
        buffer[i] = frame[i] * w;
    }

    let bins = fft.process(&buffer);
    let scale = n_bins as f32;
    // Bin-count normalization, then amplitude dB. No floor: a true-zero
    // magnitude maps to -inf.
    bins.iter()
        .map(|c| 20.0 * (c.norm() / scale).log10())
        .collect()
}

/// Compute an STFT magnitude spectrogram in decibels.
///
/// The signal is sliced into frames by [`frame::frame_signal`]. The
/// rectangular window produces non-overlapping frames
/// (`hop_length = frame_length`); every other window uses 50% overlap
/// (`hop_length = frame_length / 2`). Each frame is windowed over its first
/// `frame_length` samples, zero-padded by `pad_len`, transformed with a
/// one-sided real FFT, normalized by the bin count, and converted to dB as
/// `20 * log10`.
///
/// # Arguments
/// * `x` - Input signal
/// * `fs` - Sample rate in Hz
/// * `config` - Frame length, window, and padding
///
/// # Returns
/// A [`Spectrogram`] with `(frame_length + pad_len) / 2 + 1` rows and one
/// column per frame.
///
/// # Errors
/// Returns `InvalidInput` if the signal is shorter than `frame_length` or
/// the derived hop length is zero. Zero-magnitude bins are not errors; they
/// yield `-inf` dB values in the output.
///
/// # Example
/// ```
/// use spectromat::spectrum::{spectrogram, SpectrogramConfig};
/// use spectromat::window::Window;
///
/// let x: Vec<f32> = (0..2048).map(|i| (0.05 * i as f32).sin()).collect();
/// let config = SpectrogramConfig {
///     frame_length: 256,
///     window: Window::Hann,
///     pad_len: 0,
/// };
/// let spec = spectrogram(&x, 8000, &config).unwrap();
/// assert_eq!(spec.matrix.nrows(), 129); // 256/2 + 1
/// assert_eq!(spec.matrix.ncols(), 15); // hop = 128
/// ```
pub fn spectrogram(x: &[f32], fs: u32, config: &SpectrogramConfig) -> crate::Result<Spectrogram> {
    let frame_length = config.frame_length;
    let hop_length = match config.window {
        Window::Rect => frame_length,
        _ => frame_length / 2,
    };

    let frames = frame::frame_signal(x, frame_length, hop_length)?;
    let n_frames = frames.ncols();
    let padded_len = frame_length + config.pad_len;
    let n_bins = padded_len / 2 + 1;

    let window = config.window.samples(frame_length);
    let fft = RfftPlan::new(padded_len);

    let columns: Vec<Vec<f32>> = {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            (0..n_frames)
                .into_par_iter()
                .map(|j| compute_column(frames.column(j), &window, &fft, padded_len, n_bins))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            (0..n_frames)
                .map(|j| compute_column(frames.column(j), &window, &fft, padded_len, n_bins))
                .collect()
        }
    };

    let mut matrix = Array2::<f32>::zeros((n_bins, n_frames));
    for (j, column) in columns.iter().enumerate() {
        for (i, &val) in column.iter().enumerate() {
            matrix[(i, j)] = val;
        }
    }

    let freqs = crate::utils::linspace(0.0, (fs / 2) as f32, n_bins);
    let times = crate::utils::linspace(0.0, (n_bins * n_frames) as f32 / fs as f32, n_frames);

    Ok(Spectrogram {
        matrix,
        freqs,
        times,
    })
}

/// Compute a spectrogram selecting the window by name.
///
/// The name is matched case-insensitively against the window catalog; see
/// [`Window::parse`] for the accepted names.
///
/// # Errors
/// Returns `InvalidInput` for unknown window names, plus everything
/// [`spectrogram`] can return.
///
/// # Example
/// ```
/// use spectromat::spectrum::spectrogram_named;
///
/// let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
/// let spec = spectrogram_named(&x, 8, 4, "rect", 0).unwrap();
/// assert_eq!(spec.matrix.dim(), (3, 2)); // 4/2+1 bins, 2 frames
/// ```
pub fn spectrogram_named(
    x: &[f32],
    fs: u32,
    frame_length: usize,
    win: &str,
    pad_len: usize,
) -> crate::Result<Spectrogram> {
    let window = Window::parse(win)?;
    let config = SpectrogramConfig {
        frame_length,
        window,
        pad_len,
    };
    spectrogram(x, fs, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_input_dc_bin() {
        // Rect window, all-ones input: DC magnitude before normalization is
        // frame_length, so the dB value is 20*log10(frame_length / n_bins).
        let x = vec![1.0f32; 8];
        let spec = spectrogram_named(&x, 8, 8, "rect", 0).unwrap();
        assert_eq!(spec.matrix.dim(), (5, 1));
        assert_relative_eq!(spec.matrix[(0, 0)], 20.0 * (8.0f32 / 5.0).log10(), epsilon = 1e-4);
        // Non-DC bins cancel to (numerically) nothing.
        for i in 1..5 {
            assert!(spec.matrix[(i, 0)] < -100.0);
        }
    }

    #[test]
    fn test_zero_input_is_neg_infinity() {
        let x = vec![0.0f32; 64];
        let spec = spectrogram_named(&x, 1000, 16, "hann", 0).unwrap();
        assert!(spec.matrix.iter().all(|&v| v == f32::NEG_INFINITY));
    }

    #[test]
    fn test_padding_grows_bin_count_only() {
        let x = vec![1.0f32; 64];
        let unpadded = spectrogram_named(&x, 1000, 16, "hamming", 0).unwrap();
        let padded = spectrogram_named(&x, 1000, 16, "hamming", 16).unwrap();
        assert_eq!(unpadded.matrix.nrows(), 9); // 16/2 + 1
        assert_eq!(padded.matrix.nrows(), 17); // 32/2 + 1
        assert_eq!(unpadded.matrix.ncols(), padded.matrix.ncols());
    }

    #[test]
    fn test_axis_formulas() {
        let x = vec![0.5f32; 100];
        let spec = spectrogram_named(&x, 101, 10, "rect", 0).unwrap();
        let (n_bins, n_frames) = spec.matrix.dim();
        assert_eq!(spec.freqs.len(), n_bins);
        assert_eq!(spec.times.len(), n_frames);
        assert_eq!(spec.freqs[0], 0.0);
        // fs/2 uses integer division, so odd rates floor.
        assert_eq!(*spec.freqs.last().unwrap(), 50.0);
        assert_eq!(spec.times[0], 0.0);
        // Time span is element count over sample rate.
        assert_relative_eq!(
            *spec.times.last().unwrap(),
            (n_bins * n_frames) as f32 / 101.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_default_config() {
        let config = SpectrogramConfig::default();
        assert_eq!(config.frame_length, 1024);
        assert_eq!(config.window, Window::Hann);
        assert_eq!(config.pad_len, 0);
    }
}
