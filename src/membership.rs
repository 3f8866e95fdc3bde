//! Membership functions: the mapping from a crisp input to a degree of truth
//! for one label of a linguistic variable.

use crate::error::{FuzzyError, Result};
use crate::math::interp;

/// A piecewise-linear membership function given directly by its samples.
///
/// Between two consecutive samples the degree is linearly interpolated, outside
/// of the sampled domain it is clamped to the first/last degree. The input
/// values are expected to be non-decreasing; this is not checked here.
#[derive(Clone, Debug, PartialEq)]
pub struct FreeShapeMF {
    in_values: Vec<f64>,
    mf_values: Vec<f64>,
}

impl FreeShapeMF {
    pub fn new(in_values: Vec<f64>, mf_values: Vec<f64>) -> Result<Self> {
        if in_values.len() != mf_values.len() {
            return Err(FuzzyError::LengthMismatch {
                in_len: in_values.len(),
                mf_len: mf_values.len(),
            });
        }

        if in_values.is_empty() {
            return Err(FuzzyError::EmptyMembership);
        }

        Ok(Self { in_values, mf_values })
    }

    pub fn fuzzify(&self, x: f64) -> f64 {
        interp(x, &self.in_values, &self.mf_values)
    }

    pub fn in_values(&self) -> &[f64] {
        &self.in_values
    }

    pub fn mf_values(&self) -> &[f64] {
        &self.mf_values
    }

    /// Same input samples, every degree passed through `f`.
    pub(crate) fn map_degrees(&self, f: impl FnMut(f64) -> f64) -> FreeShapeMF {
        FreeShapeMF {
            in_values: self.in_values.clone(),
            mf_values: self.mf_values.iter().copied().map(f).collect(),
        }
    }
}

/// Linear piece-wise membership function built from `(x, y)` points, in the
/// given order.
#[derive(Clone, Debug, PartialEq)]
pub struct LinPWMF(FreeShapeMF);

impl LinPWMF {
    pub fn new(points: impl IntoIterator<Item = (f64, f64)>) -> Result<Self> {
        let (in_values, mf_values) = points.into_iter().unzip();

        FreeShapeMF::new(in_values, mf_values).map(Self)
    }

    pub fn fuzzify(&self, x: f64) -> f64 {
        self.0.fuzzify(x)
    }

    pub fn in_values(&self) -> &[f64] {
        self.0.in_values()
    }

    pub fn mf_values(&self) -> &[f64] {
        self.0.mf_values()
    }
}

impl From<LinPWMF> for FreeShapeMF {
    fn from(mf: LinPWMF) -> Self {
        mf.0
    }
}

/// A crisp value: full membership at exactly one point, none anywhere else.
///
/// Sampled as `[x, x] -> [0, 1]`, but `fuzzify` does not interpolate. Membership
/// is decided by exact float equality, there is no tolerance.
#[derive(Clone, Debug, PartialEq)]
pub struct SingletonMF(FreeShapeMF);

impl SingletonMF {
    pub fn new(x: f64) -> Self {
        SingletonMF(FreeShapeMF {
            in_values: vec![x, x],
            mf_values: vec![0., 1.],
        })
    }

    pub fn point(&self) -> f64 {
        self.0.in_values[0]
    }

    #[allow(clippy::float_cmp)]
    pub fn fuzzify(&self, x: f64) -> f64 {
        if x == self.point() {
            1.
        } else {
            0.
        }
    }

    pub fn in_values(&self) -> &[f64] {
        self.0.in_values()
    }

    pub fn mf_values(&self) -> &[f64] {
        self.0.mf_values()
    }
}

/// Any of the membership function shapes a linguistic variable can hold.
#[derive(Clone, Debug, PartialEq)]
pub enum MembershipFunction {
    FreeShape(FreeShapeMF),
    LinPW(LinPWMF),
    Singleton(SingletonMF),
}

impl MembershipFunction {
    pub fn fuzzify(&self, x: f64) -> f64 {
        match self {
            Self::FreeShape(mf) => mf.fuzzify(x),
            Self::LinPW(mf) => mf.fuzzify(x),
            Self::Singleton(mf) => mf.fuzzify(x),
        }
    }

    pub fn in_values(&self) -> &[f64] {
        self.samples().in_values()
    }

    pub fn mf_values(&self) -> &[f64] {
        self.samples().mf_values()
    }

    /// `(input, degree)` pairs in sample order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let samples = self.samples();

        samples.in_values.iter().copied().zip(samples.mf_values.iter().copied())
    }

    pub(crate) fn samples(&self) -> &FreeShapeMF {
        match self {
            Self::FreeShape(mf) => mf,
            Self::LinPW(LinPWMF(mf)) | Self::Singleton(SingletonMF(mf)) => mf,
        }
    }
}

impl From<FreeShapeMF> for MembershipFunction {
    fn from(mf: FreeShapeMF) -> Self {
        Self::FreeShape(mf)
    }
}

impl From<LinPWMF> for MembershipFunction {
    fn from(mf: LinPWMF) -> Self {
        Self::LinPW(mf)
    }
}

impl From<SingletonMF> for MembershipFunction {
    fn from(mf: SingletonMF) -> Self {
        Self::Singleton(mf)
    }
}

#[test]
fn test_triangle_interpolation() {
    let mf = LinPWMF::new([(0., 0.), (1., 1.), (2., 0.)]).unwrap();

    assert_eq!(mf.fuzzify(0.5), 0.5);
    assert_eq!(mf.fuzzify(1.5), 0.5);
    assert_eq!(mf.fuzzify(1.), 1.);
    assert_eq!(mf.fuzzify(-1.), 0.);
    assert_eq!(mf.fuzzify(3.), 0.);
    assert_eq!(mf.in_values(), &[0., 1., 2.]);
    assert_eq!(mf.mf_values(), &[0., 1., 0.]);
}

#[test]
fn test_clamped_shoulders() {
    let mf = FreeShapeMF::new(vec![10., 20.], vec![1., 0.]).unwrap();

    assert_eq!(mf.fuzzify(-100.), 1.);
    assert_eq!(mf.fuzzify(15.), 0.5);
    assert_eq!(mf.fuzzify(100.), 0.);
}

#[test]
fn test_free_shape_rejects_bad_samples() {
    assert!(matches!(
        FreeShapeMF::new(vec![0., 1., 2.], vec![0., 1.]),
        Err(FuzzyError::LengthMismatch { in_len: 3, mf_len: 2 })
    ));
    assert!(matches!(FreeShapeMF::new(Vec::new(), Vec::new()), Err(FuzzyError::EmptyMembership)));
    assert!(matches!(LinPWMF::new(std::iter::empty()), Err(FuzzyError::EmptyMembership)));
}

#[test]
fn test_singleton_exactness() {
    let mf = SingletonMF::new(5.);

    assert_eq!(mf.fuzzify(5.), 1.);
    assert_eq!(mf.fuzzify(5.0001), 0.);
    assert_eq!(mf.fuzzify(4.9999), 0.);
    assert_eq!(mf.in_values(), &[5., 5.]);
    assert_eq!(mf.mf_values(), &[0., 1.]);
}

#[test]
fn test_enum_dispatch() {
    let singleton = MembershipFunction::from(SingletonMF::new(2.));
    let ramp = MembershipFunction::from(LinPWMF::new([(0., 0.), (4., 1.)]).unwrap());

    // Above the point the interpolated samples would clamp to 1, the singleton doesn't
    assert_eq!(singleton.fuzzify(3.), 0.);
    assert_eq!(singleton.fuzzify(2.), 1.);
    assert_eq!(ramp.fuzzify(3.), 0.75);
    assert_eq!(ramp.points().collect::<Vec<_>>(), vec![(0., 0.), (4., 1.)]);
}
