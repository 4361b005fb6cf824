use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Department id that matches every course.
pub const ALL_DEPARTMENTS: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    /// Full display name of the owning department, compared against
    /// `Department::name` by exact equality.
    pub department: String,
    #[serde(rename = "whatsappLink", alias = "whatsapp_link")]
    pub whatsapp_link: String,
}

impl Course {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
        whatsapp_link: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department: department.into(),
            whatsapp_link: whatsapp_link.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
}

impl Department {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        self.id == ALL_DEPARTMENTS
    }
}

/// The department bar shown when no config file replaces it.
pub fn default_departments() -> Vec<Department> {
    vec![
        Department::new(ALL_DEPARTMENTS, "All Departments"),
        Department::new("business", "Business School"),
        Department::new("engineering", "School of Engineering"),
        Department::new("it", "Information Technology (IT)"),
        Department::new("cs", "Computer Science"),
    ]
}

/// Immutable, ordered course store. Cloning shares the underlying slice.
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Arc<[Course]>,
}

impl Catalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            courses: courses.into(),
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Exact id match first, then the first case-insensitive match.
    pub fn find(&self, id: &str) -> Option<&Course> {
        self.courses
            .iter()
            .find(|c| c.id == id)
            .or_else(|| self.courses.iter().find(|c| c.id.eq_ignore_ascii_case(id)))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<Course>> for Catalog {
    fn from(courses: Vec<Course>) -> Self {
        Self::new(courses)
    }
}
