// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Approximate and exact elementwise comparison.
//!
//! Values are flattened to [`Element`]s with a shape, so integers compare
//! against floats and nested vectors compare elementwise. Two integers are
//! compared exactly, without a round trip through `f64`. Shapes broadcast: a
//! dimension of size 1 (or a missing leading dimension) stretches to match
//! the other side, so a scalar compares against every element of an array.

use std::fmt::Debug;

use super::CheckFailure;

/// Check `a` and `b` are close under the default [`Tolerance`].
pub fn check_is_near<A, B>(a: &A, b: &B) -> Result<(), CheckFailure>
where
    A: ArrayLike + Debug + ?Sized,
    B: ArrayLike + Debug + ?Sized,
{
    Near::new().check(a, b)
}

/// Check every element of `a` equals the corresponding element of `b`.
///
/// Integer pairs must match exactly, even beyond 2^53; a float on either
/// side compares as `f64`.
pub fn check_equals<A, B>(a: &A, b: &B) -> Result<(), CheckFailure>
where
    A: ArrayLike + Debug + ?Sized,
    B: ArrayLike + Debug + ?Sized,
{
    Near::exact().check(a, b)
}

/// Closeness rule: `|a - b| <= atol + rtol * |b|`.
///
/// The rule is asymmetric; `b` is the reference value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub rtol: f64,
    pub atol: f64,
    /// Treat two NaNs as close.
    pub equal_nan: bool,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            rtol: 1e-5,
            atol: 1e-8,
            equal_nan: false,
        }
    }
}

impl Tolerance {
    /// Zero tolerance: only equal values are close.
    pub const EXACT: Tolerance = Tolerance {
        rtol: 0.0,
        atol: 0.0,
        equal_nan: false,
    };

    pub fn is_close(&self, a: f64, b: f64) -> bool {
        if a.is_nan() || b.is_nan() {
            return self.equal_nan && a.is_nan() && b.is_nan();
        }
        if a.is_infinite() || b.is_infinite() {
            return a == b;
        }
        (a - b).abs() <= self.atol + self.rtol * b.abs()
    }

    /// Like [`Tolerance::is_close`], with the difference of two integers
    /// taken exactly.
    pub fn elements_close(&self, a: Element, b: Element) -> bool {
        match (a, b) {
            (Element::Int(x), Element::Int(y)) => {
                x == y || x.abs_diff(y) as f64 <= self.atol + self.rtol * (y as f64).abs()
            }
            _ => self.is_close(a.to_f64(), b.to_f64()),
        }
    }

    fn is_exact(&self) -> bool {
        self.rtol == 0.0 && self.atol == 0.0
    }
}

/// One flattened value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Element {
    /// Integers and booleans, kept exact.
    Int(i128),
    Float(f64),
}

impl Element {
    pub fn to_f64(self) -> f64 {
        match self {
            Element::Int(v) => v as f64,
            Element::Float(v) => v,
        }
    }
}

/// A closeness check with its tolerance and failure message.
#[derive(Debug, Clone, Default)]
pub struct Near {
    tol: Tolerance,
    message: Option<String>,
}

impl Near {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero tolerance.
    pub fn exact() -> Self {
        Self::new().tolerance(Tolerance::EXACT)
    }

    pub fn tolerance(mut self, tol: Tolerance) -> Self {
        self.tol = tol;
        self
    }

    pub fn rtol(mut self, rtol: f64) -> Self {
        self.tol.rtol = rtol;
        self
    }

    pub fn atol(mut self, atol: f64) -> Self {
        self.tol.atol = atol;
        self
    }

    pub fn equal_nan(mut self, equal_nan: bool) -> Self {
        self.tol.equal_nan = equal_nan;
        self
    }

    /// Message to fail with instead of the default.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Compare `a` against `b` elementwise.
    pub fn check<A, B>(&self, a: &A, b: &B) -> Result<(), CheckFailure>
    where
        A: ArrayLike + Debug + ?Sized,
        B: ArrayLike + Debug + ?Sized,
    {
        let left = Flat::of(a)?;
        let right = Flat::of(b)?;
        let Some(shape) = broadcast_shape(&left.shape, &right.shape) else {
            return Err(CheckFailure::new(format!(
                "operands could not be broadcast together with shapes {:?} {:?}",
                left.shape, right.shape
            )));
        };

        let len: usize = shape.iter().product();
        let all_close = (0..len).all(|i| {
            let x = left.values[source_offset(i, &shape, &left.shape)];
            let y = right.values[source_offset(i, &shape, &right.shape)];
            self.tol.elements_close(x, y)
        });
        if all_close {
            return Ok(());
        }

        let message = match &self.message {
            Some(message) => message.clone(),
            None if self.tol.is_exact() => format!("Expected {a:?} to equal {b:?}."),
            None => format!("Expected {a:?} to be close to {b:?}."),
        };
        Err(CheckFailure::new(message))
    }
}

/// Numeric scalars and (nested) sequences of them.
pub trait ArrayLike {
    /// Dimensions, outermost first. Scalars have none. `None` when rows
    /// at some level differ in shape.
    fn shape(&self) -> Option<Vec<usize>>;

    /// Append all elements in row-major order.
    fn flatten_into(&self, out: &mut Vec<Element>);
}

macro_rules! scalar_array_like {
    ($variant:ident as $repr:ty: $($t:ty),* $(,)?) => {
        $(
            impl ArrayLike for $t {
                fn shape(&self) -> Option<Vec<usize>> {
                    Some(Vec::new())
                }

                fn flatten_into(&self, out: &mut Vec<Element>) {
                    out.push(Element::$variant(<$repr>::from(*self)));
                }
            }
        )*
    };
}

scalar_array_like!(Int as i128: bool, i8, i16, i32, i64, u8, u16, u32, u64);
scalar_array_like!(Float as f64: f32, f64);

impl ArrayLike for isize {
    fn shape(&self) -> Option<Vec<usize>> {
        Some(Vec::new())
    }

    fn flatten_into(&self, out: &mut Vec<Element>) {
        out.push(Element::Int(*self as i128));
    }
}

impl ArrayLike for usize {
    fn shape(&self) -> Option<Vec<usize>> {
        Some(Vec::new())
    }

    fn flatten_into(&self, out: &mut Vec<Element>) {
        out.push(Element::Int(*self as i128));
    }
}

impl<T: ArrayLike> ArrayLike for [T] {
    fn shape(&self) -> Option<Vec<usize>> {
        let mut rows = self.iter();
        let inner = match rows.next() {
            Some(first) => first.shape()?,
            None => Vec::new(),
        };
        for row in rows {
            if row.shape()? != inner {
                return None;
            }
        }

        let mut shape = vec![self.len()];
        shape.extend(inner);
        Some(shape)
    }

    fn flatten_into(&self, out: &mut Vec<Element>) {
        for item in self {
            item.flatten_into(out);
        }
    }
}

impl<T: ArrayLike, const N: usize> ArrayLike for [T; N] {
    fn shape(&self) -> Option<Vec<usize>> {
        self.as_slice().shape()
    }

    fn flatten_into(&self, out: &mut Vec<Element>) {
        self.as_slice().flatten_into(out);
    }
}

impl<T: ArrayLike> ArrayLike for Vec<T> {
    fn shape(&self) -> Option<Vec<usize>> {
        self.as_slice().shape()
    }

    fn flatten_into(&self, out: &mut Vec<Element>) {
        self.as_slice().flatten_into(out);
    }
}

impl<T: ArrayLike + ?Sized> ArrayLike for &T {
    fn shape(&self) -> Option<Vec<usize>> {
        (**self).shape()
    }

    fn flatten_into(&self, out: &mut Vec<Element>) {
        (**self).flatten_into(out);
    }
}

struct Flat {
    shape: Vec<usize>,
    values: Vec<Element>,
}

impl Flat {
    fn of<T: ArrayLike + Debug + ?Sized>(value: &T) -> Result<Self, CheckFailure> {
        let Some(shape) = value.shape() else {
            return Err(CheckFailure::new(format!(
                "{value:?} is ragged: rows must all have the same shape"
            )));
        };
        let mut values = Vec::new();
        value.flatten_into(&mut values);
        Ok(Self { shape, values })
    }
}

/// Combined shape of two operands, aligned from the last dimension.
fn broadcast_shape(a: &[usize], b: &[usize]) -> Option<Vec<usize>> {
    let ndim = a.len().max(b.len());
    (0..ndim)
        .map(|axis| match (dim(a, axis, ndim), dim(b, axis, ndim)) {
            (x, y) if x == y => Some(x),
            (1, y) => Some(y),
            (x, 1) => Some(x),
            _ => None,
        })
        .collect()
}

/// Size of `shape` along `axis` once left-padded with 1s to `ndim` dims.
fn dim(shape: &[usize], axis: usize, ndim: usize) -> usize {
    let pad = ndim - shape.len();
    if axis < pad { 1 } else { shape[axis - pad] }
}

/// Offset into an operand of `shape` for flat index `index` of `out_shape`.
fn source_offset(index: usize, out_shape: &[usize], shape: &[usize]) -> usize {
    let ndim = out_shape.len();
    let mut rem = index;
    let mut offset = 0;
    let mut stride = 1;
    for axis in (0..ndim).rev() {
        let coord = rem % out_shape[axis];
        rem /= out_shape[axis];
        let size = dim(shape, axis, ndim);
        if size != 1 {
            offset += coord * stride;
        }
        stride *= size;
    }
    offset
}

#[cfg(test)]
#[path = "near_tests.rs"]
mod tests;
