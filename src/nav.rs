//! Back-navigation routing.
//!
//! Where "back" leads from the viewer depends on who is looking at the
//! material. The mapping is a table keyed by `(role, owns_record)`
//! rather than branching duplicated per screen.

use crate::store::Role;

/// Screens the viewer can return to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackTarget {
    /// The teacher's own material list.
    TaughtMaterials,
    /// The shared catalog, for a teacher viewing a colleague's material.
    Catalog,
    /// The student dashboard.
    StudentHome,
}

const BACK_ROUTES: &[(Role, bool, BackTarget)] = &[
    (Role::Teacher, true, BackTarget::TaughtMaterials),
    (Role::Teacher, false, BackTarget::Catalog),
    (Role::Student, true, BackTarget::StudentHome),
    (Role::Student, false, BackTarget::StudentHome),
];

pub fn back_target(role: Role, owns_record: bool) -> BackTarget {
    BACK_ROUTES
        .iter()
        .find(|(r, owns, _)| *r == role && *owns == owns_record)
        .map(|(_, _, target)| *target)
        // The table enumerates every (role, owner) combination.
        .unwrap_or(BackTarget::Catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owning_teacher_returns_to_their_materials() {
        assert_eq!(
            back_target(Role::Teacher, true),
            BackTarget::TaughtMaterials
        );
    }

    #[test]
    fn visiting_teacher_returns_to_the_catalog() {
        assert_eq!(back_target(Role::Teacher, false), BackTarget::Catalog);
    }

    #[test]
    fn students_always_return_home() {
        assert_eq!(back_target(Role::Student, true), BackTarget::StudentHome);
        assert_eq!(back_target(Role::Student, false), BackTarget::StudentHome);
    }

    #[test]
    fn table_covers_every_combination() {
        for role in [Role::Teacher, Role::Student] {
            for owns in [true, false] {
                BACK_ROUTES
                    .iter()
                    .find(|(r, o, _)| *r == role && *o == owns)
                    .expect("missing route");
            }
        }
    }
}
