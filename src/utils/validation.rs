use crate::domain::model::{Course, Department, ALL_DEPARTMENTS};
use crate::utils::error::{DirectoryError, Result};
use std::collections::HashSet;
use std::fmt;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(DirectoryError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DirectoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Department ids must be unique and non-empty, names non-empty, and the
/// `all` wildcard must be offered.
pub fn validate_departments(departments: &[Department]) -> Result<()> {
    let mut seen = HashSet::new();
    for department in departments {
        validate_non_empty_string("departments.id", &department.id)?;
        validate_non_empty_string("departments.name", &department.name)?;
        if !seen.insert(department.id.as_str()) {
            return Err(DirectoryError::InvalidConfigValueError {
                field: "departments.id".to_string(),
                value: department.id.clone(),
                reason: "Department id is defined more than once".to_string(),
            });
        }
    }

    if !seen.contains(ALL_DEPARTMENTS) {
        return Err(DirectoryError::config(format!(
            "departments must include the '{}' entry",
            ALL_DEPARTMENTS
        )));
    }

    Ok(())
}

/// A data-consistency finding in a loaded catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    DuplicateId { id: String },
    EmptyField { id: String, field: &'static str },
    /// Reachable only under the `all` selection.
    UnknownDepartment { id: String, department: String },
    InvalidLink { id: String, reason: String },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId { id } => write!(f, "{}: duplicate course id", id),
            Self::EmptyField { id, field } => write!(f, "{}: empty {}", id, field),
            Self::UnknownDepartment { id, department } => write!(
                f,
                "{}: department '{}' matches no configured department",
                id, department
            ),
            Self::InvalidLink { id, reason } => write!(f, "{}: {}", id, reason),
        }
    }
}

/// Reports catalog entries that break the data-model invariants. Filtering
/// never calls this; it is an opt-in check for catalog maintainers.
pub fn lint_catalog(courses: &[Course], departments: &[Department]) -> Vec<CatalogIssue> {
    let names: HashSet<&str> = departments
        .iter()
        .filter(|d| !d.is_wildcard())
        .map(|d| d.name.as_str())
        .collect();
    let mut seen_ids = HashSet::new();
    let mut issues = Vec::new();

    for course in courses {
        if !seen_ids.insert(course.id.as_str()) {
            issues.push(CatalogIssue::DuplicateId {
                id: course.id.clone(),
            });
        }

        for (field, value) in [("id", &course.id), ("name", &course.name)] {
            if value.trim().is_empty() {
                issues.push(CatalogIssue::EmptyField {
                    id: course.id.clone(),
                    field,
                });
            }
        }

        if !names.contains(course.department.as_str()) {
            issues.push(CatalogIssue::UnknownDepartment {
                id: course.id.clone(),
                department: course.department.clone(),
            });
        }

        if let Err(DirectoryError::InvalidConfigValueError { reason, .. }) =
            validate_url("whatsappLink", &course.whatsapp_link)
        {
            issues.push(CatalogIssue::InvalidLink {
                id: course.id.clone(),
                reason,
            });
        }
    }

    if !issues.is_empty() {
        tracing::warn!("Catalog lint found {} issue(s)", issues.len());
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::default_departments;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("whatsappLink", "https://chat.whatsapp.com/abc").is_ok());
        assert!(validate_url("whatsappLink", "http://example.com").is_ok());
        assert!(validate_url("whatsappLink", "").is_err());
        assert!(validate_url("whatsappLink", "invalid-url").is_err());
        assert!(validate_url("whatsappLink", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_departments() {
        assert!(validate_departments(&default_departments()).is_ok());

        let without_all = vec![Department::new("cs", "Computer Science")];
        assert!(validate_departments(&without_all).is_err());

        let blank_name = vec![Department::new("all", "All"), Department::new("cs", "  ")];
        assert!(validate_departments(&blank_name).is_err());
    }

    #[test]
    fn test_lint_clean_catalog() {
        let courses = vec![Course::new(
            "CS101",
            "Intro to Programming",
            "Computer Science",
            "https://chat.whatsapp.com/cs101",
        )];
        assert!(lint_catalog(&courses, &default_departments()).is_empty());
    }

    #[test]
    fn test_lint_reports_each_problem() {
        let courses = vec![
            Course::new("CS101", "Intro", "Computer Science", "https://chat.whatsapp.com/a"),
            Course::new("CS101", "Intro again", "Computer Science", "https://chat.whatsapp.com/b"),
            Course::new("LAW1", "Torts", "Law School", "https://chat.whatsapp.com/c"),
            Course::new("IT1", "", "Information Technology (IT)", "not a link"),
        ];
        let issues = lint_catalog(&courses, &default_departments());

        assert_eq!(
            issues[0],
            CatalogIssue::DuplicateId {
                id: "CS101".to_string()
            }
        );
        assert!(issues.contains(&CatalogIssue::UnknownDepartment {
            id: "LAW1".to_string(),
            department: "Law School".to_string(),
        }));
        assert!(issues.contains(&CatalogIssue::EmptyField {
            id: "IT1".to_string(),
            field: "name",
        }));
        assert!(issues
            .iter()
            .any(|i| matches!(i, CatalogIssue::InvalidLink { id, .. } if id == "IT1")));
        assert_eq!(issues.len(), 4);
    }

    #[test]
    fn test_wildcard_name_is_not_a_department() {
        let courses = vec![Course::new("X1", "Misc", "All Departments", "https://example.com")];
        let issues = lint_catalog(&courses, &default_departments());
        assert!(matches!(issues[0], CatalogIssue::UnknownDepartment { .. }));
    }
}
