//! Quiz attempt handle
//!
//! The host platform owns attempts; folio only needs to know which course
//! and which activity module an attempt belongs to in order to place its
//! exports. This module reifies that handle as an explicit value object
//! instead of a host-global lookup.

use crate::domain::ids::{AttemptId, CourseId, ModuleId};
use serde::{Deserialize, Serialize};

/// A single learner's submission instance for a quiz activity
///
/// # Examples
///
/// ```
/// use folio::domain::{Attempt, AttemptId, CourseId, ModuleId};
///
/// # fn example() -> Result<(), String> {
/// let attempt = Attempt::new(
///     AttemptId::new(311)?,
///     CourseId::new(7)?,
///     ModuleId::new(42)?,
/// );
/// assert_eq!(attempt.course_id().as_i64(), 7);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    id: AttemptId,
    course_id: CourseId,
    module_id: ModuleId,
}

impl Attempt {
    /// Creates a new attempt handle
    pub fn new(id: AttemptId, course_id: CourseId, module_id: ModuleId) -> Self {
        Self {
            id,
            course_id,
            module_id,
        }
    }

    /// The attempt's own identifier
    pub fn id(&self) -> AttemptId {
        self.id
    }

    /// The owning course
    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    /// The owning activity-module instance
    pub fn module_id(&self) -> ModuleId {
        self.module_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt() -> Attempt {
        Attempt::new(
            AttemptId::new(311).unwrap(),
            CourseId::new(7).unwrap(),
            ModuleId::new(42).unwrap(),
        )
    }

    #[test]
    fn test_accessors() {
        let a = attempt();
        assert_eq!(a.id().as_i64(), 311);
        assert_eq!(a.course_id().as_i64(), 7);
        assert_eq!(a.module_id().as_i64(), 42);
    }
}
