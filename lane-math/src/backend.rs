//! Description of the implementations selected at build time
//!
//! The selection is invisible to the callers of [`compute`](crate::compute), all of the
//! paths produce the same results. This module only reports which one is compiled in, such
//! that a validation run can log what it is validating

use std::fmt::Display;

use tabled::builder::Builder as TableBuilder;

/// Implementation of `isnan`/`isfinite`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassifyPath {
    /// Test the bit pattern, selected on `msvc` or with feature `bit_classify`
    Bits,
    /// Predicates of the standard library
    Std,
}

/// Implementation of `sincos`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinCosPath {
    /// Combined primitive that shares the range reduction
    Combined,
    /// Two independent calls
    Split,
}

/// Implementation of `log2`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Log2Path {
    /// Native base-2 logarithm
    Native,
    /// `ln(x) / ln(2)`
    NaturalLog,
}

/// Implementation of `frexp`/`ldexp`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExponentPath {
    /// Routines of the C library
    Libm,
    /// Read/build the IEEE bit pattern
    Bits,
}

/// Implementations selected at build time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackendInfo {
    /// Implementation of `isnan`/`isfinite`
    pub classify: ClassifyPath,
    /// Implementation of `sincos`
    pub sincos: SinCosPath,
    /// Implementation of `log2`
    pub log2: Log2Path,
    /// Implementation of `frexp`/`ldexp`
    pub exponent: ExponentPath,
}

impl BackendInfo {
    /// Get the implementations compiled into this build
    pub const fn current() -> Self {
        Self {
            classify: if cfg!(any(target_env = "msvc", feature = "bit_classify")) {
                ClassifyPath::Bits
            } else {
                ClassifyPath::Std
            },
            sincos: if cfg!(feature = "libm") {
                SinCosPath::Combined
            } else {
                SinCosPath::Split
            },
            log2: if cfg!(feature = "native_log2") {
                Log2Path::Native
            } else {
                Log2Path::NaturalLog
            },
            exponent: if cfg!(feature = "libm") {
                ExponentPath::Libm
            } else {
                ExponentPath::Bits
            },
        }
    }

    /// Emit the selections as a debug event
    pub fn trace(&self) {
        tracing::debug!(
            classify = ?self.classify,
            sincos = ?self.sincos,
            log2 = ?self.log2,
            exponent = ?self.exponent,
            "Scalar backend selected at build time"
        );
    }

    /// Format the selections with given table builder
    pub fn fmt_table(&self, table_builder: &mut TableBuilder) {
        table_builder.push_record(["Operation", "Implementation"]);
        table_builder.push_record(["isnan/isfinite".to_string(), format!("{:?}", self.classify)]);
        table_builder.push_record(["sincos".to_string(), format!("{:?}", self.sincos)]);
        table_builder.push_record(["log2".to_string(), format!("{:?}", self.log2)]);
        table_builder.push_record(["frexp/ldexp".to_string(), format!("{:?}", self.exponent)]);
    }
}

impl Display for BackendInfo {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(all(
        feature = "libm",
        feature = "native_log2",
        not(feature = "bit_classify"),
        not(target_env = "msvc")
    ))]
    #[test]
    fn test_display_default_backend() {
        let expect = expect_test::expect![[r#"
            ┌────────────────┬────────────────┐
            │ Operation      │ Implementation │
            ├────────────────┼────────────────┤
            │ isnan/isfinite │ Std            │
            ├────────────────┼────────────────┤
            │ sincos         │ Combined       │
            ├────────────────┼────────────────┤
            │ log2           │ Native         │
            ├────────────────┼────────────────┤
            │ frexp/ldexp    │ Libm           │
            └────────────────┴────────────────┘"#]];
        expect.assert_eq(&BackendInfo::current().to_string());
    }

    #[test]
    fn test_current_follows_features() {
        let info = BackendInfo::current();
        assert_eq!(info.sincos == SinCosPath::Combined, cfg!(feature = "libm"));
        assert_eq!(info.exponent == ExponentPath::Libm, cfg!(feature = "libm"));
        assert_eq!(info.log2 == Log2Path::Native, cfg!(feature = "native_log2"));
        assert_eq!(
            info.classify == ClassifyPath::Bits,
            cfg!(any(target_env = "msvc", feature = "bit_classify"))
        );
        // Tracing without subscriber is a no-op
        info.trace();
    }
}
