//! Domain identifier types with validation
//!
//! Newtype wrappers for the host platform's numeric identifiers. Each type
//! keeps course, activity-module, and attempt ids from being mixed up and
//! rejects non-positive values at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! numeric_id {
    ($(#[$doc:meta])* $name:ident, $label:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(i64);

        impl $name {
            /// Creates a new identifier from a raw value
            ///
            /// # Returns
            ///
            /// Returns `Ok` if the value is positive, `Err` otherwise
            pub fn new(id: i64) -> Result<Self, String> {
                if id < 1 {
                    return Err(format!("{} must be positive, got {}", $label, id));
                }
                Ok(Self(id))
            }

            /// Returns the raw numeric value
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let id: i64 = s
                    .parse()
                    .map_err(|_| format!("{} must be a number, got '{}'", $label, s))?;
                Self::new(id)
            }
        }
    };
}

numeric_id!(
    /// Course identifier newtype wrapper
    ///
    /// Identifies the course an activity belongs to. Used as the first
    /// partition level of the export directory tree.
    CourseId,
    "course id"
);

numeric_id!(
    /// Activity-module identifier newtype wrapper
    ///
    /// Identifies a concrete activity instance (e.g. one quiz) inside a
    /// course. Used as the second partition level of the export directory
    /// tree.
    ModuleId,
    "module id"
);

numeric_id!(
    /// Quiz attempt identifier newtype wrapper
    AttemptId,
    "attempt id"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_id_valid() {
        let id = CourseId::new(7).unwrap();
        assert_eq!(id.as_i64(), 7);
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn test_course_id_rejects_non_positive() {
        assert!(CourseId::new(0).is_err());
        assert!(CourseId::new(-3).is_err());
    }

    #[test]
    fn test_module_id_from_str() {
        let id: ModuleId = "42".parse().unwrap();
        assert_eq!(id.as_i64(), 42);

        assert!("abc".parse::<ModuleId>().is_err());
        assert!("0".parse::<ModuleId>().is_err());
    }

    #[test]
    fn test_ids_are_distinct_types() {
        // Compile-time property; just exercise construction side by side.
        let course = CourseId::new(1).unwrap();
        let module = ModuleId::new(1).unwrap();
        assert_eq!(course.as_i64(), module.as_i64());
    }

    #[test]
    fn test_attempt_id_serde_roundtrip() {
        let id = AttemptId::new(99).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "99");
        let back: AttemptId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
