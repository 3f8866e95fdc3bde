use num::Float;

/// Similar to numpy.interp for a single point: linear interpolation between the
/// samples `(xp, fp)`, clamped to the first/last degree outside of them.
///
/// `xp` must be non-decreasing and as long as `fp`. On a vertical step (repeated
/// input value) the rightmost sample wins, like numpy does.
pub(crate) fn interp<F: Float>(x: F, xp: &[F], fp: &[F]) -> F {
    debug_assert_eq!(xp.len(), fp.len());

    let (Some(&x_first), Some(&x_last)) = (xp.first(), xp.last()) else {
        return F::nan();
    };

    if x.is_nan() {
        return x;
    }

    // Base cases
    if x < x_first {
        return fp[0];
    }
    if x >= x_last {
        return fp[fp.len() - 1];
    }

    // xp[i] <= x < xp[i + 1], so the denominator below can't be zero
    let i = xp.partition_point(|&p| p <= x) - 1;
    let (x1, y1) = (xp[i], fp[i]);
    let (x2, y2) = (xp[i + 1], fp[i + 1]);

    y1 + (x - x1) * (y2 - y1) / (x2 - x1)
}

#[test]
fn test_interp() {
    let xs = [1., 2., 3.];
    let ys = [3., 2., 0.];
    let out: Vec<f64> = [0., 1., 1.5, 2.72, 3.24].iter().map(|&x| interp(x, &xs, &ys)).collect();

    assert_eq!(out, vec![3., 3., 2.5, 0.5599999999999996, 0.]);

    let xs = [0., 1., 2., 3., 4.5];
    let ys = [0., 2., 5., 3., 2.];
    let out: Vec<f64> = [2.5, -1., 7.5].iter().map(|&x| interp(x, &xs, &ys)).collect();

    assert_eq!(out, vec![4., 0., 2.]);
}

#[test]
fn test_interp_vertical_step() {
    let xs = [0., 1., 1., 2.];
    let ys = [0., 0., 1., 1.];

    assert_eq!(interp(1., &xs, &ys), 1.);
    assert_eq!(interp(0.5, &xs, &ys), 0.);
    assert_eq!(interp(1.5, &xs, &ys), 1.);

    // Degenerate single-input function, e.g. a singleton's samples
    assert_eq!(interp(5., &[5., 5.], &[0., 1.]), 1.);
    assert_eq!(interp(4., &[5., 5.], &[0., 1.]), 0.);
}

#[test]
fn test_interp_nan() {
    assert!(interp(f64::NAN, &[0., 1.], &[0., 1.]).is_nan());
    assert!(interp(0.5, &[], &[]).is_nan());
}
