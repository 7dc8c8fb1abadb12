use ndarray::{Array2, ArrayView1};

/// Compute the number of full frames that fit in a signal.
///
/// Frames overlap whenever `hop_length < frame_length`; samples beyond the
/// last full frame are not counted.
///
/// # Arguments
/// * `len` - Length of the input signal
/// * `frame_length` - Length of each frame
/// * `hop_length` - Number of samples to advance between frames
///
/// # Returns
/// `1 + (len - frame_length) / hop_length` (integer floor division)
///
/// # Example
/// ```
/// use spectromat::frame::num_frames;
///
/// assert_eq!(num_frames(1024, 256, 128).unwrap(), 7);
/// assert_eq!(num_frames(10, 4, 4).unwrap(), 2); // samples 8..10 dropped
/// ```
pub fn num_frames(len: usize, frame_length: usize, hop_length: usize) -> crate::Result<usize> {
    if frame_length == 0 {
        return Err(crate::Error::InvalidInput {
            name: "frame_length",
            value: "0".to_string(),
            reason: "must be > 0".to_string(),
        });
    }
    if hop_length == 0 {
        return Err(crate::Error::InvalidInput {
            name: "hop_length",
            value: "0".to_string(),
            reason: "frames cannot advance".to_string(),
        });
    }
    if len < frame_length {
        return Err(crate::Error::InvalidInput {
            name: "x",
            value: format!("length {len}"),
            reason: format!("buffer is too short for frame_length={frame_length}"),
        });
    }
    Ok(1 + (len - frame_length) / hop_length)
}

/// Slice a signal into a matrix of overlapping frames.
///
/// Column `j` of the result holds samples
/// `x[j * hop_length .. j * hop_length + frame_length]` exactly. Trailing
/// samples beyond the last full frame are dropped silently; this is
/// intentional truncation, not an error.
///
/// # Arguments
/// * `x` - Input signal
/// * `frame_length` - Length of each frame
/// * `hop_length` - Number of samples to advance between frames
///
/// # Returns
/// Frame matrix of shape `(frame_length, num_frames)`
///
/// # Errors
/// Returns `InvalidInput` if `x` is shorter than `frame_length`, or if
/// `frame_length` or `hop_length` is zero.
///
/// # Example
/// ```
/// use spectromat::frame::frame_signal;
///
/// let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
/// let frames = frame_signal(&x, 4, 4).unwrap();
/// assert_eq!(frames.dim(), (4, 2));
/// assert_eq!(frames.column(1).to_vec(), vec![5.0, 6.0, 7.0, 8.0]);
/// ```
pub fn frame_signal(x: &[f32], frame_length: usize, hop_length: usize) -> crate::Result<Array2<f32>> {
    let n_frames = num_frames(x.len(), frame_length, hop_length)?;

    let mut frames = Array2::<f32>::zeros((frame_length, n_frames));
    for j in 0..n_frames {
        let start = j * hop_length;
        let slice = &x[start..start + frame_length];
        frames.column_mut(j).assign(&ArrayView1::from(slice));
    }

    Ok(frames)
}
