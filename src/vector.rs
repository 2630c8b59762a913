use core::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};
use itertools::Itertools;
use nalgebra::{DVector, Vector2, Vector3};
use num_traits::Zero;

use crate::error::{GeometryError, Result};

mod rotation;

static PADDING: f64 = 0.0;

/// Immutable tuple of `f64` components, implicitly extended with zeros.
///
/// Reading past the stored components yields `0.0`, and vectors of different
/// lengths combine over the longer of the two. [`Vector::dimension`] counts only
/// the stored components.
///
/// ```
/// use nd_geometry::Vector;
///
/// let a = Vector::from([3.0, 4.0]);
/// let b = Vector::from([1.0, 0.0, 2.0]);
///
/// assert_eq!(a[2], 0.0);
/// assert_eq!(a.dimension(), 2);
/// assert_eq!(&a + &b, Vector::from([4.0, 4.0, 2.0]));
/// ```
#[derive(Clone)]
pub struct Vector {
    components: DVector<f64>,
}

impl Vector {
    pub fn new(components: Vec<f64>) -> Self {
        Self {
            components: DVector::from_vec(components),
        }
    }

    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    pub fn as_slice(&self) -> &[f64] {
        self.components.as_slice()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.components.iter().copied()
    }

    /// Component at `index`, or `0.0` past the stored length.
    pub fn get(&self, index: usize) -> f64 {
        self.components.get(index).copied().unwrap_or(PADDING)
    }

    /// Signed access; negative indices are rejected instead of wrapping.
    pub fn component(&self, index: isize) -> Result<f64> {
        usize::try_from(index)
            .map(|index| self.get(index))
            .map_err(|_| GeometryError::InvalidIndex(index))
    }

    pub fn dot(&self, other: &Vector) -> f64 {
        // padded components contribute nothing to the sum
        self.iter().zip(other.iter()).map(|(a, b)| a * b).sum()
    }

    /// Componentwise product.
    pub fn scale(&self, other: &Vector) -> Vector {
        self.zip_padded(other, |a, b| a * b)
    }

    pub fn magnitude(&self) -> f64 {
        self.components.norm()
    }

    pub fn square_magnitude(&self) -> f64 {
        self.components.norm_squared()
    }

    /// Unit vector in the same direction. A zero vector yields NaN components.
    pub fn normalized(&self) -> Vector {
        self / self.magnitude()
    }

    /// Component of `self` parallel to `onto`. NaN when `onto` is zero.
    pub fn projection(&self, onto: &Vector) -> Vector {
        onto * (self.dot(onto) / onto.dot(onto))
    }

    /// Component of `self` orthogonal to `onto`. NaN when `onto` is zero.
    pub fn rejection(&self, onto: &Vector) -> Vector {
        self - &self.projection(onto)
    }

    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.get(0), self.get(1), self.get(2))
    }

    pub(crate) fn on_axes(&self, x: usize, y: usize) -> Vector2<f64> {
        Vector2::new(self.get(x), self.get(y))
    }

    fn zip_padded(&self, other: &Vector, f: impl Fn(f64, f64) -> f64) -> Vector {
        self.iter()
            .zip_longest(other.iter())
            .map(|pair| {
                let (a, b) = pair.or(PADDING, PADDING);
                f(a, b)
            })
            .collect()
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::zero()
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        self.components.get(index).unwrap_or(&PADDING)
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<f64>> for Vector {
    fn from(value: Vec<f64>) -> Self {
        Self::new(value)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(value: [f64; N]) -> Self {
        Self::new(value.to_vec())
    }
}

impl From<DVector<f64>> for Vector {
    fn from(components: DVector<f64>) -> Self {
        Self { components }
    }
}

impl From<Vector2<f64>> for Vector {
    fn from(value: Vector2<f64>) -> Self {
        Self::new(value.as_slice().to_vec())
    }
}

impl From<Vector3<f64>> for Vector {
    fn from(value: Vector3<f64>) -> Self {
        Self::new(value.as_slice().to_vec())
    }
}

impl Zero for Vector {
    fn zero() -> Self {
        Self {
            components: DVector::zeros(0),
        }
    }

    fn is_zero(&self) -> bool {
        self.iter().all(|c| c == 0.0)
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.iter().zip_longest(other.iter()).all(|pair| {
            let (a, b) = pair.or(PADDING, PADDING);
            a == b
        })
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.iter().zip_longest(other.iter()).all(|pair| {
            let (a, b) = pair.or(PADDING, PADDING);
            a.abs_diff_eq(&b, epsilon)
        })
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.iter().zip_longest(other.iter()).all(|pair| {
            let (a, b) = pair.or(PADDING, PADDING);
            a.relative_eq(&b, epsilon, max_relative)
        })
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.iter().format(", "))
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.iter().format_with(" ", |c, f| f(&format_args!("{c:.4}")))
        )
    }
}

impl Add<&Vector> for &Vector {
    type Output = Vector;

    fn add(self, rhs: &Vector) -> Vector {
        self.zip_padded(rhs, |a, b| a + b)
    }
}

impl Sub<&Vector> for &Vector {
    type Output = Vector;

    fn sub(self, rhs: &Vector) -> Vector {
        self.zip_padded(rhs, |a, b| a - b)
    }
}

macro_rules! forward_owned_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<Vector> for Vector {
            type Output = Vector;

            fn $method(self, rhs: Vector) -> Vector {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&Vector> for Vector {
            type Output = Vector;

            fn $method(self, rhs: &Vector) -> Vector {
                (&self).$method(rhs)
            }
        }

        impl $imp<Vector> for &Vector {
            type Output = Vector;

            fn $method(self, rhs: Vector) -> Vector {
                self.$method(&rhs)
            }
        }
    };
}

forward_owned_binop!(Add, add);
forward_owned_binop!(Sub, sub);

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Vector::from(&self.components * rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Vector::from(self.components * rhs)
    }
}

impl Div<f64> for &Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        Vector::from(&self.components / rhs)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        Vector::from(self.components / rhs)
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::from(-&self.components)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::from(-self.components)
    }
}
