//! Undefined-aware numeric value for series positions.
//!
//! Every indicator cell is either `Defined(x)` with a finite `x`, or
//! `Undefined` (warmup positions, 0/0 ratios, division by a zero sum).
//! Arithmetic between values propagates `Undefined`, and any operation whose
//! result is not finite collapses to `Undefined` instead of leaking NaN/Inf.

use std::ops::{Add, Div, Mul, Neg, Sub};

/// A single series position.
///
/// Serializes as a JSON number, or `null` when undefined.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Value {
    /// A finite number.
    Defined(f64),
    /// No value at this position.
    #[default]
    Undefined,
}

impl Value {
    /// Wraps a raw float; NaN and infinities become [`Value::Undefined`].
    #[must_use]
    pub fn new(raw: f64) -> Self {
        if raw.is_finite() {
            Value::Defined(raw)
        } else {
            Value::Undefined
        }
    }

    /// Returns true for [`Value::Defined`].
    #[must_use]
    pub fn is_defined(self) -> bool {
        matches!(self, Value::Defined(_))
    }

    /// Returns true for [`Value::Undefined`].
    #[must_use]
    pub fn is_undefined(self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns the inner number, if any.
    #[must_use]
    pub fn get(self) -> Option<f64> {
        match self {
            Value::Defined(v) => Some(v),
            Value::Undefined => None,
        }
    }

    /// Returns the inner number or NaN (for interop with plain float code).
    #[must_use]
    pub fn to_f64(self) -> f64 {
        self.get().unwrap_or(f64::NAN)
    }

    /// Applies `f` to a defined value; the result is re-checked for finiteness.
    #[must_use]
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Value::Defined(v) => Value::new(f(v)),
            Value::Undefined => Value::Undefined,
        }
    }
}

impl From<f64> for Value {
    fn from(raw: f64) -> Self {
        Value::new(raw)
    }
}

impl From<Option<f64>> for Value {
    fn from(raw: Option<f64>) -> Self {
        raw.map_or(Value::Undefined, Value::new)
    }
}

impl From<Value> for Option<f64> {
    fn from(value: Value) -> Self {
        value.get()
    }
}

macro_rules! impl_value_op {
    ($op_trait:ident, $method:ident, $op:tt) => {
        impl $op_trait for Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                match (self, rhs) {
                    (Value::Defined(a), Value::Defined(b)) => Value::new(a $op b),
                    _ => Value::Undefined,
                }
            }
        }

        impl $op_trait<f64> for Value {
            type Output = Value;

            fn $method(self, rhs: f64) -> Value {
                self $op Value::new(rhs)
            }
        }
    };
}

impl_value_op!(Add, add, +);
impl_value_op!(Sub, sub, -);
impl_value_op!(Mul, mul, *);
impl_value_op!(Div, div, /);

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        self.map(|v| -v)
    }
}

/// Collects the defined entries of a slice, dropping undefined ones.
#[must_use]
pub fn defined_values(values: &[Value]) -> Vec<f64> {
    values.iter().filter_map(|v| v.get()).collect()
}
