//! Tagged literal parsing and Java type inference for implicit declarations

use serde_json::Value;
use std::fmt;

/// Integral literals whose magnitude exceeds this are declared `long` instead of `int`.
pub const INT_WIDTH_THRESHOLD: u64 = 127;

/// Java scalar types a callback can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Int,
    Long,
    Double,
    String,
    Boolean,
}

impl ScalarType {
    pub const ALL: [ScalarType; 5] = [
        ScalarType::Int,
        ScalarType::Long,
        ScalarType::Double,
        ScalarType::String,
        ScalarType::Boolean,
    ];

    pub fn java_name(self) -> &'static str {
        match self {
            ScalarType::Int => "int",
            ScalarType::Long => "long",
            ScalarType::Double => "double",
            ScalarType::String => "String",
            ScalarType::Boolean => "boolean",
        }
    }

    pub fn from_java_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.java_name() == name)
    }
}

/// A declared Java type: a scalar or a one-dimensional array of one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JavaType {
    Scalar(ScalarType),
    Array(ScalarType),
}

impl JavaType {
    pub fn element(self) -> ScalarType {
        match self {
            JavaType::Scalar(t) | JavaType::Array(t) => t,
        }
    }
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JavaType::Scalar(t) => f.write_str(t.java_name()),
            JavaType::Array(t) => write!(f, "{}[]", t.java_name()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralKind {
    String,
    Boolean,
    /// An integral number; `magnitude` is its absolute value
    Integer { magnitude: u64, fits_i32: bool },
    Float,
    Array(Vec<Literal>),
}

/// A literal recognised on the right-hand side of a declaration
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub kind: LiteralKind,
    /// Source text of the literal, as it should appear in Java
    pub raw: String,
}

impl Literal {
    /// Parse `text` as a literal value.
    ///
    /// Returns `None` for anything that is not a string, number, boolean or
    /// array of those (identifiers, calls, `null`, objects, nested arrays).
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let value: Value = serde_json::from_str(text).ok()?;
        let mut literal = Self::from_value(&value)?;
        if !matches!(literal.kind, LiteralKind::Array(_)) {
            literal.raw = text.to_string();
        }
        Some(literal)
    }

    fn from_value(value: &Value) -> Option<Self> {
        let kind = match value {
            Value::String(_) => LiteralKind::String,
            Value::Bool(_) => LiteralKind::Boolean,
            Value::Number(n) => {
                if let Some(v) = n.as_i64() {
                    LiteralKind::Integer {
                        magnitude: v.unsigned_abs(),
                        fits_i32: i32::try_from(v).is_ok(),
                    }
                } else if let Some(v) = n.as_u64() {
                    LiteralKind::Integer {
                        magnitude: v,
                        fits_i32: false,
                    }
                } else {
                    LiteralKind::Float
                }
            }
            Value::Array(items) => {
                let elements = items
                    .iter()
                    .map(|item| match item {
                        Value::Array(_) => None,
                        other => Self::from_value(other),
                    })
                    .collect::<Option<Vec<_>>>()?;
                LiteralKind::Array(elements)
            }
            Value::Null | Value::Object(_) => return None,
        };

        Some(Self {
            kind,
            raw: value.to_string(),
        })
    }

    /// The Java type a declaration initialised with this literal receives.
    ///
    /// Arrays must be non-empty and homogeneous: all strings, all booleans or
    /// all numbers. Numeric arrays widen to the widest element type.
    pub fn infer_type(&self) -> Option<JavaType> {
        match &self.kind {
            LiteralKind::Array(elements) => {
                let first = elements.first()?.scalar_type()?;
                let element = elements.iter().skip(1).try_fold(first, |acc, e| {
                    widen(acc, e.scalar_type()?)
                })?;
                Some(JavaType::Array(element))
            }
            _ => self.scalar_type().map(JavaType::Scalar),
        }
    }

    fn scalar_type(&self) -> Option<ScalarType> {
        match &self.kind {
            LiteralKind::String => Some(ScalarType::String),
            LiteralKind::Boolean => Some(ScalarType::Boolean),
            LiteralKind::Integer { magnitude, .. } if *magnitude > INT_WIDTH_THRESHOLD => {
                Some(ScalarType::Long)
            }
            LiteralKind::Integer { .. } => Some(ScalarType::Int),
            LiteralKind::Float => Some(ScalarType::Double),
            LiteralKind::Array(_) => None,
        }
    }

    /// Render the value expression for a declaration of type `ty`.
    ///
    /// Arrays become `new T[]{a, b}`; integers outside the `int` range carry
    /// the `L` suffix Java requires for `long` literals.
    pub fn to_java(&self, ty: JavaType) -> String {
        match &self.kind {
            LiteralKind::Array(elements) => {
                let values = elements
                    .iter()
                    .map(|e| e.to_java(JavaType::Scalar(ty.element())))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("new {}[]{{{}}}", ty.element().java_name(), values)
            }
            LiteralKind::Integer { fits_i32: false, .. } => format!("{}L", self.raw),
            _ => self.raw.clone(),
        }
    }
}

fn widen(a: ScalarType, b: ScalarType) -> Option<ScalarType> {
    use ScalarType::*;
    match (a, b) {
        (x, y) if x == y => Some(x),
        (Double, Int | Long) | (Int | Long, Double) => Some(Double),
        (Long, Int) | (Int, Long) => Some(Long),
        _ => None,
    }
}
