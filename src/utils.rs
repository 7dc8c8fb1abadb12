/// Generate `num` evenly spaced values from `start` to `stop` inclusive.
///
/// Matches numpy's `linspace` endpoint behavior: the first element is
/// exactly `start` and the last is exactly `stop`.
///
/// # Arguments
/// * `start` - First value
/// * `stop` - Last value (included)
/// * `num` - Number of values to generate
///
/// # Example
/// ```
/// use spectromat::utils::linspace;
///
/// let v = linspace(0.0, 4000.0, 5);
/// assert_eq!(v, vec![0.0, 1000.0, 2000.0, 3000.0, 4000.0]);
/// ```
pub fn linspace(start: f32, stop: f32, num: usize) -> Vec<f32> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (num - 1) as f32;
            (0..num)
                .map(|i| start + (stop - start) * (i as f32 / last))
                .collect()
        }
    }
}
