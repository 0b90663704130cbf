//! Scalar values accepted as path segments, parameter values and tag args.

use std::fmt;

/// A positional path argument or named parameter value.
///
/// Every scalar has a plain string form (via `Display`) used when joining
/// paths and encoding queries, and a literal form ([`Scalar::repr`]) used
/// inside placeholder tags.
///
/// Booleans are written `true`/`false` in both forms. Floats follow the
/// shortest round-trip notation: positional with a trailing `.0` when whole,
/// scientific (`1e+16`, `1.5e-07`) outside `1e-4 <= |x| < 1e16`.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    /// Literal form of the value, as written into tag keyword args.
    ///
    /// Strings are quoted with `'` unless they contain a `'` and no `"`,
    /// in which case `"` is used. Backslashes and the chosen quote are escaped,
    /// as are control characters (`\n`, `\t`, `\r`, otherwise `\xNN`), so a
    /// marker always stays on one line. Numbers and booleans are rendered bare.
    pub fn repr(&self) -> String {
        match self {
            Self::Str(s) => quote(s),
            other => other.to_string(),
        }
    }

    /// Borrow the string payload, if this is a string scalar.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Parse a command-line token: integers become `Int`, everything else `Str`.
    pub fn from_token(token: &str) -> Self {
        let digits = token.strip_prefix('-').unwrap_or(token);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = token.parse::<i64>() {
                return Self::Int(n);
            }
        }
        Self::Str(token.to_string())
    }
}

fn quote(s: &str) -> String {
    let q = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(q);
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c == '\\' || c == q => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(q);
    out
}

/// Shortest round-trip float text, switching to scientific notation for
/// decimal exponents outside `-4..16`.
fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let sci = format!("{x:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or_default();

    if (-4..16).contains(&exp) {
        // Whole floats keep a trailing `.0` so they never read as integers
        if x.fract() == 0.0 {
            format!("{x:.1}")
        } else {
            format!("{x}")
        }
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => f.write_str(&format_float(*x)),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Self::Str(String::new())
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&String> for Scalar {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<f32> for Scalar {
    fn from(x: f32) -> Self {
        Self::Float(f64::from(x))
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(n: $t) -> Self {
                    Self::Int(i64::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);
