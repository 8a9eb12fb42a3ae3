use crate::error::LabelError;

/// Uniform bin edges for `nbins` equal-width bins over `[low, high]`.
///
/// Infallible core used by the variable catalog, where every
/// `(nbins, low, high)` tuple is a curated literal.
pub(crate) fn uniform_edges(nbins: usize, low: f64, high: f64) -> Vec<f64> {
    let width = (high - low) / nbins as f64;
    (0..=nbins).map(|i| low + i as f64 * width).collect()
}

/// Bin edges for a 1D histogram: `nbins + 1` values running from
/// `bin_low` to `bin_high` in equal steps.
///
/// Zero bins or an empty/inverted range fail fast rather than producing a
/// malformed edge sequence.
pub fn hist1d(nbins: usize, bin_low: f64, bin_high: f64) -> Result<Vec<f64>, LabelError> {
    if nbins == 0 {
        return Err(LabelError::InvalidBinCount);
    }
    if bin_high <= bin_low {
        return Err(LabelError::InvalidBinRange {
            low: bin_low,
            high: bin_high,
        });
    }
    Ok(uniform_edges(nbins, bin_low, bin_high))
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_hist1d_edges() {
        let edges = hist1d(10, 0.0, 0.6).unwrap();

        assert_eq!(edges.len(), 11);
        assert_approx_eq!(f64, edges[0], 0.0);
        assert_approx_eq!(f64, edges[10], 0.6);
        for pair in edges.windows(2) {
            assert_approx_eq!(f64, pair[1] - pair[0], 0.06, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_hist1d_negative_low_edge() {
        let edges = hist1d(20, -3.0, 3.0).unwrap();

        assert_eq!(edges.len(), 21);
        assert_approx_eq!(f64, edges[0], -3.0);
        assert_approx_eq!(f64, edges[10], 0.0, epsilon = 1e-12);
        assert_approx_eq!(f64, edges[20], 3.0);
    }

    #[test]
    fn test_hist1d_zero_bins() {
        assert_eq!(hist1d(0, 0.0, 1.0), Err(LabelError::InvalidBinCount));
    }

    #[test]
    fn test_hist1d_bad_range() {
        assert_eq!(
            hist1d(10, 1.0, 1.0),
            Err(LabelError::InvalidBinRange {
                low: 1.0,
                high: 1.0
            })
        );
        assert_eq!(
            hist1d(10, 2.0, -2.0),
            Err(LabelError::InvalidBinRange {
                low: 2.0,
                high: -2.0
            })
        );
    }
}
