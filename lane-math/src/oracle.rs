//! Reference checks for vector backends
//!
//! The scalar lane computed by [`compute`](crate::compute) is the reference result. An
//! alternative implementation, a hardware backend lane or one of the
//! [`portable`](crate::compute::portable) paths, is compared against it with the distance
//! in units in the last place (ULPs). Exact operations must match bit-for-bit, the
//! transcendental ones may differ by a few ULPs, see [`UnaryOp::default_tolerance`]

use std::fmt::Display;

use snafu::{ensure, Snafu};
use tabled::builder::Builder as TableBuilder;

use crate::compute;
use crate::types::{ElementType, FloatElement};
use crate::vector::Vector;

#[allow(missing_docs)]
#[derive(Debug, Snafu)]
pub enum OracleError {
    #[snafu(display(
        "`{op}({input:e})` of `{element_type:?}` is `{actual:e}`, reference is `{expected:e}`: {ulps} ulps apart, tolerance is {tolerance}"
    ))]
    Mismatch {
        op: UnaryOp,
        element_type: ElementType,
        input: f64,
        expected: f64,
        actual: f64,
        ulps: u64,
        tolerance: u64,
    },
    #[snafu(display(
        "Can not check `{op}` lanes: {inputs} inputs but {actuals} actual results"
    ))]
    LengthMismatch {
        op: UnaryOp,
        inputs: usize,
        actuals: usize,
    },
}

type Result<T> = std::result::Result<T, OracleError>;

/// Distance between `a` and `b` in units in the last place
///
/// `0.0` and `-0.0` are equal, two NaNs are equal whatever their payloads are. A NaN
/// compared with a non-NaN has distance `u64::MAX`
pub fn ulp_distance<T: FloatElement>(a: T, b: T) -> u64 {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => 0,
        (false, false) => {
            (i128::from(a.ordered_bits()) - i128::from(b.ordered_bits())).unsigned_abs() as u64
        }
        _ => u64::MAX,
    }
}

/// Unary operation with a reference result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// [`compute::sqrt`]
    Sqrt,
    /// [`compute::rsqrt`]
    Rsqrt,
    /// [`compute::abs`]
    Abs,
    /// [`compute::sin`]
    Sin,
    /// [`compute::cos`]
    Cos,
    /// [`compute::asin`]
    Asin,
    /// [`compute::atan`]
    Atan,
    /// [`compute::log`]
    Log,
    /// [`compute::log10`]
    Log10,
    /// [`compute::log2`]
    Log2,
    /// [`compute::exp`]
    Exp,
    /// [`compute::floor`]
    Floor,
    /// [`compute::ceil`]
    Ceil,
    /// [`compute::round`]
    Round,
    /// [`compute::reciprocal`]
    Reciprocal,
}

impl UnaryOp {
    /// All of the unary operations
    pub const ALL: [UnaryOp; 15] = [
        UnaryOp::Sqrt,
        UnaryOp::Rsqrt,
        UnaryOp::Abs,
        UnaryOp::Sin,
        UnaryOp::Cos,
        UnaryOp::Asin,
        UnaryOp::Atan,
        UnaryOp::Log,
        UnaryOp::Log10,
        UnaryOp::Log2,
        UnaryOp::Exp,
        UnaryOp::Floor,
        UnaryOp::Ceil,
        UnaryOp::Round,
        UnaryOp::Reciprocal,
    ];

    /// Name of the operation in [`compute`]
    pub const fn ident(&self) -> &'static str {
        match self {
            UnaryOp::Sqrt => "sqrt",
            UnaryOp::Rsqrt => "rsqrt",
            UnaryOp::Abs => "abs",
            UnaryOp::Sin => "sin",
            UnaryOp::Cos => "cos",
            UnaryOp::Asin => "asin",
            UnaryOp::Atan => "atan",
            UnaryOp::Log => "log",
            UnaryOp::Log10 => "log10",
            UnaryOp::Log2 => "log2",
            UnaryOp::Exp => "exp",
            UnaryOp::Floor => "floor",
            UnaryOp::Ceil => "ceil",
            UnaryOp::Round => "round",
            UnaryOp::Reciprocal => "reciprocal",
        }
    }

    /// Evaluate the reference result of `x`
    pub fn evaluate<T: FloatElement>(&self, x: Vector<T>) -> Vector<T> {
        match self {
            UnaryOp::Sqrt => compute::sqrt(x),
            UnaryOp::Rsqrt => compute::rsqrt(x),
            UnaryOp::Abs => compute::abs(x),
            UnaryOp::Sin => compute::sin(x),
            UnaryOp::Cos => compute::cos(x),
            UnaryOp::Asin => compute::asin(x),
            UnaryOp::Atan => compute::atan(x),
            UnaryOp::Log => compute::log(x),
            UnaryOp::Log10 => compute::log10(x),
            UnaryOp::Log2 => compute::log2(x),
            UnaryOp::Exp => compute::exp(x),
            UnaryOp::Floor => compute::floor(x),
            UnaryOp::Ceil => compute::ceil(x),
            UnaryOp::Round => compute::round(x),
            UnaryOp::Reciprocal => compute::reciprocal(x),
        }
    }

    /// ULPs an alternative implementation may differ from the reference. Correctly
    /// rounded operations have no tolerance
    pub const fn default_tolerance(&self) -> u64 {
        match self {
            UnaryOp::Sqrt
            | UnaryOp::Abs
            | UnaryOp::Floor
            | UnaryOp::Ceil
            | UnaryOp::Round
            | UnaryOp::Reciprocal => 0,
            UnaryOp::Rsqrt => 1,
            UnaryOp::Sin
            | UnaryOp::Cos
            | UnaryOp::Asin
            | UnaryOp::Atan
            | UnaryOp::Log
            | UnaryOp::Log10
            | UnaryOp::Log2
            | UnaryOp::Exp => 4,
        }
    }
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.ident())
    }
}

/// Compare results of alternative implementations with the reference
#[derive(Debug, Clone, Copy, Default)]
pub struct Oracle {
    tolerance: Option<u64>,
}

impl Oracle {
    /// Create an oracle that uses the default tolerance of each operation
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an oracle that uses the given tolerance for all of the operations
    pub fn with_tolerance(ulps: u64) -> Self {
        Self {
            tolerance: Some(ulps),
        }
    }

    /// Tolerance applied to `op`
    pub fn tolerance(&self, op: UnaryOp) -> u64 {
        self.tolerance.unwrap_or_else(|| op.default_tolerance())
    }

    /// Check `actual` is the result of `op(input)`, returns the ULPs between them
    pub fn check<T: FloatElement>(
        &self,
        op: UnaryOp,
        input: Vector<T>,
        actual: Vector<T>,
    ) -> Result<u64> {
        let expected = op.evaluate(input).data();
        let actual = actual.data();
        let ulps = ulp_distance(expected, actual);
        let tolerance = self.tolerance(op);
        ensure!(
            ulps <= tolerance,
            MismatchSnafu {
                op,
                element_type: T::ELEMENT_TYPE,
                input: input.data(),
                expected,
                actual,
                ulps,
                tolerance,
            }
        );
        Ok(ulps)
    }

    /// Check each of the `actuals` is the result of `op` applied to the corresponding
    /// lane of `inputs`. The distances are recorded into the `report`, mismatched lanes are
    /// logged and counted instead of failing the check
    ///
    /// # Errors
    ///
    /// Returns error if `inputs` and `actuals` have different length
    pub fn check_lanes<T: FloatElement>(
        &self,
        op: UnaryOp,
        inputs: &[T],
        actuals: &[T],
        report: &mut Report,
    ) -> Result<()> {
        ensure!(
            inputs.len() == actuals.len(),
            LengthMismatchSnafu {
                op,
                inputs: inputs.len(),
                actuals: actuals.len(),
            }
        );

        let tolerance = self.tolerance(op);
        for (&input, &actual) in inputs.iter().zip(actuals) {
            let expected = op.evaluate(Vector::new(input)).data();
            let ulps = ulp_distance(expected, actual);
            let mismatch = ulps > tolerance;
            if mismatch {
                tracing::warn!(
                    %op,
                    element_type = ?T::ELEMENT_TYPE,
                    ?input,
                    ?expected,
                    ?actual,
                    ulps,
                    tolerance,
                    "Lane differs from the reference"
                );
            }
            report.record(op.ident(), T::ELEMENT_TYPE, ulps, mismatch);
        }

        tracing::debug!(
            %op,
            element_type = ?T::ELEMENT_TYPE,
            lanes = inputs.len(),
            "Checked lanes"
        );

        Ok(())
    }
}

/// Statistic of a checked operation on an element type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    /// Name of the checked operation
    pub name: &'static str,
    /// Element type of the checked lanes
    pub element_type: ElementType,
    /// Number of checked lanes
    pub samples: usize,
    /// Number of lanes exceed the tolerance
    pub mismatches: usize,
    /// Largest distance observed, `u64::MAX` if a NaN is compared with a non-NaN
    pub max_ulps: u64,
}

/// Accumulated statistics of the checks
#[derive(Debug, Clone, Default)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a checked lane of operation `name`
    pub fn record(
        &mut self,
        name: &'static str,
        element_type: ElementType,
        ulps: u64,
        mismatch: bool,
    ) {
        let index = match self
            .entries
            .iter()
            .position(|entry| entry.name == name && entry.element_type == element_type)
        {
            Some(index) => index,
            None => {
                self.entries.push(ReportEntry {
                    name,
                    element_type,
                    samples: 0,
                    mismatches: 0,
                    max_ulps: 0,
                });
                self.entries.len() - 1
            }
        };

        let entry = &mut self.entries[index];
        entry.samples += 1;
        entry.mismatches += usize::from(mismatch);
        entry.max_ulps = entry.max_ulps.max(ulps);
    }

    /// Merge the statistics of another report into self
    pub fn merge(&mut self, other: Report) {
        for other_entry in other.entries {
            match self.entries.iter_mut().find(|entry| {
                entry.name == other_entry.name && entry.element_type == other_entry.element_type
            }) {
                Some(entry) => {
                    entry.samples += other_entry.samples;
                    entry.mismatches += other_entry.mismatches;
                    entry.max_ulps = entry.max_ulps.max(other_entry.max_ulps);
                }
                None => self.entries.push(other_entry),
            }
        }
    }

    /// Entries in the order they are first recorded
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Number of mismatched lanes across all of the entries
    pub fn total_mismatches(&self) -> usize {
        self.entries.iter().map(|entry| entry.mismatches).sum()
    }

    /// Returns true if no lane is mismatched
    pub fn is_clean(&self) -> bool {
        self.total_mismatches() == 0
    }

    /// Format the report with given table builder
    pub fn fmt_table(&self, table_builder: &mut TableBuilder) {
        table_builder.push_record(["Operation", "Element", "Samples", "Mismatches", "Max ULPs"]);
        self.entries.iter().for_each(|entry| {
            let max_ulps = if entry.max_ulps == u64::MAX {
                "NaN".to_string()
            } else {
                entry.max_ulps.to_string()
            };
            table_builder.push_record([
                entry.name.to_string(),
                format!("{:?}", entry.element_type),
                entry.samples.to_string(),
                entry.mismatches.to_string(),
                max_ulps,
            ]);
        });
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut table_builder = TableBuilder::default();
        self.fmt_table(&mut table_builder);
        write!(
            f,
            "{}",
            table_builder
                .build()
                .with(tabled::settings::style::Style::modern())
        )
    }
}
