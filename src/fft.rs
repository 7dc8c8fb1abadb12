use num_complex::Complex32;
use realfft::{RealFftPlanner, RealToComplex};
use std::sync::Arc;

/// Real-to-complex FFT plan for a fixed transform length.
///
/// Wraps a `realfft` forward plan so it can be built once and reused for
/// every frame of a spectrogram. The plan is `Send + Sync`, so columns may
/// be transformed from worker threads.
///
/// # Example
/// ```
/// use spectromat::fft::RfftPlan;
///
/// let plan = RfftPlan::new(512);
/// let frame = vec![1.0f32; 512];
/// let bins = plan.process(&frame);
/// assert_eq!(bins.len(), 257); // 512/2 + 1
/// ```
pub struct RfftPlan {
    r2c: Arc<dyn RealToComplex<f32>>,
    len: usize,
}

impl RfftPlan {
    /// Create a plan for real input of length `len`.
    pub fn new(len: usize) -> Self {
        let mut planner = RealFftPlanner::<f32>::new();
        let r2c = planner.plan_fft_forward(len);
        Self { r2c, len }
    }

    /// Transform length this plan was built for.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the plan covers a zero-length transform.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of one-sided output bins: `len / 2 + 1`.
    pub fn output_len(&self) -> usize {
        self.len / 2 + 1
    }

    /// Compute the one-sided FFT of `input`.
    ///
    /// `input.len()` must equal the plan length. The input is copied into a
    /// scratch buffer; the caller's data is not modified.
    pub fn process(&self, input: &[f32]) -> Vec<Complex32> {
        let mut in_buf = input.to_vec();
        let mut out_buf = self.r2c.make_output_vec();
        let _ = self.r2c.process(&mut in_buf, &mut out_buf);
        out_buf
    }
}

/// Compute the real-to-complex FFT (rfft) of a real-valued input.
///
/// Returns only the non-redundant half of the spectrum (due to symmetry
/// for real inputs), of length `input.len() / 2 + 1`.
///
/// # Example
/// ```
/// use spectromat::fft::rfft;
///
/// let signal = vec![1.0f32; 1024];
/// let spectrum = rfft(&signal);
/// assert_eq!(spectrum.len(), 513); // 1024/2 + 1
/// ```
pub fn rfft(input: &[f32]) -> Vec<Complex32> {
    if input.is_empty() {
        return Vec::new();
    }
    RfftPlan::new(input.len()).process(input)
}
