//! Catalog of test equations with known roots.
//!
//! Every preset is a `static` built from plain `fn` pointers, so the same
//! [`TestFunction`] can be handed to any number of solver runs.

use std::f64::consts::SQRT_2;
use std::fmt;
use std::str::FromStr;

use crate::error::MathError;

/// Identifies a preset in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestFunctionKind {
    /// `x² - 2`, root `√2`.
    Sqrt2,
    /// `x³ - x - 2`.
    Cubic,
    /// `x - cos(x)`.
    Transcendental,
}

impl TestFunctionKind {
    /// All presets.
    pub const ALL: [TestFunctionKind; 3] = [Self::Sqrt2, Self::Cubic, Self::Transcendental];

    /// Key used to select the preset by name.
    pub fn key(self) -> &'static str {
        match self {
            Self::Sqrt2 => "sqrt2",
            Self::Cubic => "cubic",
            Self::Transcendental => "transcendental",
        }
    }
}

impl fmt::Display for TestFunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TestFunctionKind {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MathError::invalid_input(format!("unknown test function: {s}")))
    }
}

/// A test equation `f(x) = 0` with its derivative and a fixed-point form.
#[derive(Debug, Clone, Copy)]
pub struct TestFunction {
    /// Catalog key.
    pub kind: TestFunctionKind,
    /// Human-readable formula.
    pub name: &'static str,
    /// The function.
    pub f: fn(f64) -> f64,
    /// Its derivative.
    pub df: Option<fn(f64) -> f64>,
    /// An iteration function `φ` with `φ(x*) = x*` at the root.
    pub phi: Option<fn(f64) -> f64>,
    /// Human-readable formula of `φ`.
    pub phi_name: &'static str,
    /// A bracket `(low, high)` containing the root.
    pub interval: (f64, f64),
    /// The root, when known.
    pub exact_root: Option<f64>,
}

fn square_minus_two(x: f64) -> f64 {
    x * x - 2.0
}

fn square_minus_two_prime(x: f64) -> f64 {
    2.0 * x
}

fn heron(x: f64) -> f64 {
    0.5 * (x + 2.0 / x)
}

fn cubic(x: f64) -> f64 {
    x * x * x - x - 2.0
}

fn cubic_prime(x: f64) -> f64 {
    3.0 * x * x - 1.0
}

fn cubic_phi(x: f64) -> f64 {
    (x + 2.0).cbrt()
}

fn x_minus_cos(x: f64) -> f64 {
    x - x.cos()
}

fn x_minus_cos_prime(x: f64) -> f64 {
    1.0 + x.sin()
}

static SQRT2: TestFunction = TestFunction {
    kind: TestFunctionKind::Sqrt2,
    name: "x² - 2",
    f: square_minus_two,
    df: Some(square_minus_two_prime),
    phi: Some(heron),
    phi_name: "0.5 * (x + 2/x)",
    interval: (0.0, 2.0),
    exact_root: Some(SQRT_2),
};

static CUBIC: TestFunction = TestFunction {
    kind: TestFunctionKind::Cubic,
    name: "x³ - x - 2",
    f: cubic,
    df: Some(cubic_prime),
    phi: Some(cubic_phi),
    phi_name: "cbrt(x + 2)",
    interval: (1.0, 2.0),
    exact_root: Some(1.521_379_706_804_567_6),
};

static TRANSCENDENTAL: TestFunction = TestFunction {
    kind: TestFunctionKind::Transcendental,
    name: "x - cos(x)",
    f: x_minus_cos,
    df: Some(x_minus_cos_prime),
    phi: Some(f64::cos),
    phi_name: "cos(x)",
    interval: (0.0, 1.0),
    exact_root: Some(0.739_085_133_215_160_7),
};

impl TestFunction {
    /// Returns the preset for `kind`.
    pub fn get(kind: TestFunctionKind) -> &'static TestFunction {
        match kind {
            TestFunctionKind::Sqrt2 => &SQRT2,
            TestFunctionKind::Cubic => &CUBIC,
            TestFunctionKind::Transcendental => &TRANSCENDENTAL,
        }
    }

    /// Looks a preset up by its catalog key.
    pub fn by_name(name: &str) -> Result<&'static TestFunction, MathError> {
        name.parse().map(Self::get)
    }
}

impl fmt::Display for TestFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TestFunction: {}", self.name)
    }
}
