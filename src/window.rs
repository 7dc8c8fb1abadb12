/// Compute a rectangular (boxcar) window.
///
/// All values are 1.0; applying it leaves the frame unchanged.
///
/// # Arguments
/// * `n` - Window length
///
/// # Returns
/// Rectangular window of length `n`
pub fn rect(n: usize) -> Vec<f32> {
    vec![1.0; n]
}

/// Compute a periodic Hann (raised cosine) window.
///
/// The Hann window is one of the most commonly used windows in spectral
/// analysis. It has good frequency resolution and moderate spectral leakage.
///
/// # Arguments
/// * `n` - Window length
///
/// # Returns
/// Hann window of length `n`
pub fn hann(n: usize) -> Vec<f32> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![1.0];
    }
    let m = n as f32;
    (0..n)
        .map(|i| 0.5 - 0.5 * (2.0 * std::f32::consts::PI * i as f32 / m).cos())
        .collect()
}

/// Compute a Hamming window.
///
/// The Hamming window is similar to the Hann window but with slightly
/// different coefficients that reduce the first side lobe level.
///
/// # Arguments
/// * `n` - Window length
///
/// # Returns
/// Hamming window of length `n`
pub fn hamming(n: usize) -> Vec<f32> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![1.0];
    }
    let m = n as f32;
    (0..n)
        .map(|i| 0.54 - 0.46 * (2.0 * std::f32::consts::PI * i as f32 / m).cos())
        .collect()
}

/// Compute a Blackman window.
///
/// The Blackman window provides better side lobe suppression than Hann
/// or Hamming windows, at the cost of wider main lobe.
///
/// # Arguments
/// * `n` - Window length
///
/// # Returns
/// Blackman window of length `n`
pub fn blackman(n: usize) -> Vec<f32> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![1.0];
    }
    let m = n as f32;
    (0..n)
        .map(|i| {
            let a = 2.0 * std::f32::consts::PI * i as f32 / m;
            0.42 - 0.5 * a.cos() + 0.08 * (2.0 * a).cos()
        })
        .collect()
}

/// Compute a Bartlett (triangular) window.
///
/// The Bartlett window tapers linearly from zero at the edges to a peak
/// in the center.
///
/// # Arguments
/// * `n` - Window length
///
/// # Returns
/// Bartlett window of length `n`
pub fn bartlett(n: usize) -> Vec<f32> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![1.0];
    }
    let m = n as f32;
    (0..n)
        .map(|i| 1.0 - ((i as f32 - m / 2.0).abs() / (m / 2.0)))
        .collect()
}

/// Closed catalog of supported window functions.
///
/// Each variant maps to a pure generator function; selection happens at
/// validation time via [`Window::parse`], so a constructed `Window` can
/// no longer fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    Rect,
    Hann,
    Hamming,
    Blackman,
    Bartlett,
}

impl Window {
    /// Parse a window from its name.
    ///
    /// Matching is case-insensitive and accepts the common aliases
    /// ("boxcar" for Rect, "hanning" for Hann, "triangle" for Bartlett).
    ///
    /// # Errors
    /// Returns `InvalidInput` for unknown names.
    ///
    /// # Example
    /// ```
    /// use spectromat::window::Window;
    ///
    /// assert_eq!(Window::parse("Hann").unwrap(), Window::Hann);
    /// assert_eq!(Window::parse("boxcar").unwrap(), Window::Rect);
    /// assert!(Window::parse("not_a_window").is_err());
    /// ```
    pub fn parse(name: &str) -> crate::Result<Self> {
        match name.to_lowercase().as_str() {
            "rect" | "boxcar" => Ok(Window::Rect),
            "hann" | "hanning" => Ok(Window::Hann),
            "hamming" => Ok(Window::Hamming),
            "blackman" => Ok(Window::Blackman),
            "bartlett" | "triangle" => Ok(Window::Bartlett),
            _ => Err(crate::Error::InvalidInput {
                name: "window",
                value: format!("\"{name}\""),
                reason: "unknown window name".to_string(),
            }),
        }
    }

    /// Generate the window values at length `n`.
    pub fn samples(self, n: usize) -> Vec<f32> {
        match self {
            Window::Rect => rect(n),
            Window::Hann => hann(n),
            Window::Hamming => hamming(n),
            Window::Blackman => blackman(n),
            Window::Bartlett => bartlett(n),
        }
    }
}

/// Get a window of the specified type and length.
///
/// Free-function form of [`Window::samples`].
pub fn get_window(window: Window, n: usize) -> Vec<f32> {
    window.samples(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_window_lengths() {
        assert_eq!(rect(8).len(), 8);
        assert_eq!(hann(8).len(), 8);
        assert_eq!(hamming(8).len(), 8);
        assert_eq!(blackman(8).len(), 8);
        assert_eq!(bartlett(8).len(), 8);
        assert_eq!(hann(0).len(), 0);
    }

    #[test]
    fn test_rect_is_all_ones() {
        assert!(rect(16).iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_hann_shape() {
        let w = hann(512);
        // Periodic form: starts at zero, peaks near the center.
        assert!(w[0] < 1e-6);
        assert!(w[256] > 0.99);
        assert!(w.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_hamming_endpoints() {
        let w = hamming(64);
        assert_relative_eq!(w[0], 0.08, epsilon = 1e-6);
        assert!(w[32] > 0.99);
    }

    #[test]
    fn test_parse_known_names() {
        assert_eq!(Window::parse("rect").unwrap(), Window::Rect);
        assert_eq!(Window::parse("BOXCAR").unwrap(), Window::Rect);
        assert_eq!(Window::parse("hann").unwrap(), Window::Hann);
        assert_eq!(Window::parse("Hanning").unwrap(), Window::Hann);
        assert_eq!(Window::parse("hamming").unwrap(), Window::Hamming);
        assert_eq!(Window::parse("blackman").unwrap(), Window::Blackman);
        assert_eq!(Window::parse("bartlett").unwrap(), Window::Bartlett);
        assert_eq!(Window::parse("triangle").unwrap(), Window::Bartlett);
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = Window::parse("not_a_window").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("unknown window name"), "got: {msg}");
    }

    #[test]
    fn test_samples_dispatch() {
        assert_eq!(Window::Hann.samples(128), hann(128));
        assert_eq!(Window::Rect.samples(128), rect(128));
        assert_eq!(get_window(Window::Blackman, 64), blackman(64));
    }
}
