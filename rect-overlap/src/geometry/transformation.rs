use std::ops::{Add, Div, Mul, Sub};

use anyhow::{Result, ensure};
use ordered_float::NotNan;

use crate::geometry::primitives::Point;

//See https://pages.mtu.edu/~shene/COURSES/cs3621/NOTES/geometry/geo-tran.html

/// Proper rigid transformation in matrix form.
/// Builder methods compose left to right: `a.rotate(r)?.translate(t)?` first rotates, then translates.
#[derive(Clone, Debug, PartialEq)]
pub struct Transformation {
    matrix: [[NotNan<f64>; 3]; 3],
}

impl Transformation {
    pub const fn empty() -> Self {
        Self {
            matrix: EMPTY_MATRIX,
        }
    }

    /// Rotation around the origin, `angle` in radians
    pub fn from_rotation(angle: f64) -> Result<Self> {
        Ok(Self {
            matrix: rot_m(angle)?,
        })
    }

    pub fn from_translation((tx, ty): (f64, f64)) -> Result<Self> {
        Ok(Self {
            matrix: transl_m((tx, ty))?,
        })
    }

    pub fn rotate(mut self, angle: f64) -> Result<Self> {
        self.matrix = finite_matrix(dot_prod(&rot_m(angle)?, &self.matrix))?;
        Ok(self)
    }

    pub fn translate(mut self, (tx, ty): (f64, f64)) -> Result<Self> {
        self.matrix = finite_matrix(dot_prod(&transl_m((tx, ty))?, &self.matrix))?;
        Ok(self)
    }

    /// Rotation by `angle` (in radians) around `pivot` instead of the origin
    pub fn rotate_about(self, pivot: Point, angle: f64) -> Result<Self> {
        let Point(px, py) = pivot;
        self.translate((-px, -py))?
            .rotate(angle)?
            .translate((px, py))
    }

    /// Applies `other` after `self`
    pub fn transform(mut self, other: &Self) -> Self {
        self.matrix = dot_prod(&other.matrix, &self.matrix);
        self
    }

    pub fn inverse(mut self) -> Self {
        self.matrix = inverse(&self.matrix);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.matrix == EMPTY_MATRIX
    }

    pub fn matrix(&self) -> &[[NotNan<f64>; 3]; 3] {
        &self.matrix
    }

    /// Rotational component of the transformation, in radians
    pub fn rotation(&self) -> f64 {
        let m = self.matrix();
        m[1][0].atan2(m[0][0].into_inner())
    }

    pub(crate) fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let m = self.matrix();
        let (lx, ly) = self.apply_linear(x, y);
        (lx + m[0][2].into_inner(), ly + m[1][2].into_inner())
    }

    pub(crate) fn apply_linear(&self, x: f64, y: f64) -> (f64, f64) {
        let m = self.matrix();
        let t_x = m[0][0].into_inner() * x + m[0][1].into_inner() * y;
        let t_y = m[1][0].into_inner() * x + m[1][1].into_inner() * y;
        (t_x, t_y)
    }
}

const _0: NotNan<f64> = unsafe { NotNan::new_unchecked(0.0) };
const _1: NotNan<f64> = unsafe { NotNan::new_unchecked(1.0) };

const EMPTY_MATRIX: [[NotNan<f64>; 3]; 3] = [[_1, _0, _0], [_0, _1, _0], [_0, _0, _1]];

/// Infinite entries would turn into NaN in the next matrix product.
fn finite(value: f64, name: &str) -> Result<NotNan<f64>> {
    ensure!(value.is_finite(), "{name} is not finite: {value}");
    Ok(NotNan::new(value)?)
}

fn finite_matrix(m: [[NotNan<f64>; 3]; 3]) -> Result<[[NotNan<f64>; 3]; 3]> {
    ensure!(
        m.iter().flatten().all(|v| v.is_finite()),
        "transformation overflowed: {m:?}"
    );
    Ok(m)
}

fn rot_m(angle: f64) -> Result<[[NotNan<f64>; 3]; 3]> {
    let (sin, cos) = angle.sin_cos();
    let cos = finite(cos, "cos")?;
    let sin = finite(sin, "sin")?;

    Ok([[cos, -sin, _0], [sin, cos, _0], [_0, _0, _1]])
}

fn transl_m((tx, ty): (f64, f64)) -> Result<[[NotNan<f64>; 3]; 3]> {
    let h = finite(tx, "tx")?;
    let k = finite(ty, "ty")?;

    Ok([[_1, _0, h], [_0, _1, k], [_0, _0, _1]])
}

#[inline(always)]
fn dot_prod<T>(l: &[[T; 3]; 3], r: &[[T; 3]; 3]) -> [[T; 3]; 3]
where
    T: Add<Output = T> + Mul<Output = T> + Copy,
{
    let cell = |i: usize, j: usize| l[i][0] * r[0][j] + l[i][1] * r[1][j] + l[i][2] * r[2][j];
    [
        [cell(0, 0), cell(0, 1), cell(0, 2)],
        [cell(1, 0), cell(1, 1), cell(1, 2)],
        [cell(2, 0), cell(2, 1), cell(2, 2)],
    ]
}

#[inline(always)]
fn inverse<T>(m: &[[T; 3]; 3]) -> [[T; 3]; 3]
where
    T: Add<Output = T> + Mul<Output = T> + Sub<Output = T> + Div<Output = T> + Copy,
{
    let det =
        m[0][0] * m[1][1] * m[2][2] + m[0][1] * m[1][2] * m[2][0] + m[0][2] * m[1][0] * m[2][1]
            - m[0][2] * m[1][1] * m[2][0]
            - m[0][1] * m[1][0] * m[2][2]
            - m[0][0] * m[1][2] * m[2][1];

    [
        [
            (m[1][1] * m[2][2] - m[1][2] * m[2][1]) / det,
            (m[0][2] * m[2][1] - m[0][1] * m[2][2]) / det,
            (m[0][1] * m[1][2] - m[0][2] * m[1][1]) / det,
        ],
        [
            (m[1][2] * m[2][0] - m[1][0] * m[2][2]) / det,
            (m[0][0] * m[2][2] - m[0][2] * m[2][0]) / det,
            (m[0][2] * m[1][0] - m[0][0] * m[1][2]) / det,
        ],
        [
            (m[1][0] * m[2][1] - m[1][1] * m[2][0]) / det,
            (m[0][1] * m[2][0] - m[0][0] * m[2][1]) / det,
            (m[0][0] * m[1][1] - m[0][1] * m[1][0]) / det,
        ],
    ]
}
