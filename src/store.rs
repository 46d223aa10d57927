//! Record model for course materials.
//!
//! Records normally come from the platform database; the viewer only
//! needs the persisted PDF path, the owner and the content kind, so the
//! types here are deliberately slim.

use std::path::Path;

/// The three kinds of content a PDF can be attached to. Each kind has
/// its own upload folder under the working directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Courses,
    Exercises,
    PracticalWorks,
}

impl DocumentKind {
    /// Upload folder holding this kind's PDFs, named `{epochMillis}_{originalFilename}`.
    pub fn folder(&self) -> &'static Path {
        Path::new(match self {
            DocumentKind::Courses => "courses",
            DocumentKind::Exercises => "exercises",
            DocumentKind::PracticalWorks => "practical_works",
        })
    }

    /// Noun used in user-facing messages ("No PDF available for this exercise.").
    pub fn noun(&self) -> &'static str {
        match self {
            DocumentKind::Courses => "course",
            DocumentKind::Exercises => "exercise",
            DocumentKind::PracticalWorks => "practical work",
        }
    }
}

/// Persisted reference to one piece of content, as handed to the viewer.
/// An empty `pdf_path` means no document was attached.
#[derive(Debug, Clone)]
pub struct MaterialRecord {
    pub title: String,
    pub pdf_path: String,
    pub owner_id: i64,
    pub kind: DocumentKind,
}

impl MaterialRecord {
    pub fn new(
        title: impl Into<String>,
        pdf_path: impl Into<String>,
        owner_id: i64,
        kind: DocumentKind,
    ) -> Self {
        Self {
            title: title.into(),
            pdf_path: pdf_path.into(),
            owner_id,
            kind,
        }
    }
}

/// User role on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Teacher,
    Student,
}

/// The signed-in user, passed explicitly to whoever needs it.
#[derive(Debug, Clone, Copy)]
pub struct UserContext {
    pub user_id: i64,
    pub role: Role,
}

impl UserContext {
    pub fn owns(&self, record: &MaterialRecord) -> bool {
        self.user_id == record.owner_id
    }
}

/// Stand-in catalog while the persistence layer lives elsewhere.
pub fn demo_catalog() -> Vec<MaterialRecord> {
    vec![
        MaterialRecord::new(
            "Intro to Databases",
            "courses/1700000000000_intro_databases.pdf",
            1,
            DocumentKind::Courses,
        ),
        MaterialRecord::new(
            "SQL Joins Worksheet",
            "exercises/1700000001000_sql_joins.pdf",
            1,
            DocumentKind::Exercises,
        ),
        MaterialRecord::new(
            "Lab 3: Indexing",
            "practical_works/1700000002000_lab3_indexing.pdf",
            2,
            DocumentKind::PracticalWorks,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_distinct_folders() {
        assert_eq!(DocumentKind::Courses.folder(), Path::new("courses"));
        assert_eq!(DocumentKind::Exercises.folder(), Path::new("exercises"));
        assert_eq!(
            DocumentKind::PracticalWorks.folder(),
            Path::new("practical_works")
        );
    }

    #[test]
    fn ownership_compares_user_and_owner_ids() {
        let record = MaterialRecord::new("Quiz", "exercises/x.pdf", 7, DocumentKind::Exercises);
        let owner = UserContext {
            user_id: 7,
            role: Role::Teacher,
        };
        let other = UserContext {
            user_id: 8,
            role: Role::Teacher,
        };
        assert!(owner.owns(&record));
        assert!(!other.owns(&record));
    }
}
