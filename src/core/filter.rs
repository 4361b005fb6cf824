use crate::domain::model::{Course, Department, ALL_DEPARTMENTS};

/// True when the query is a case-insensitive substring of the course name or id.
pub fn matches_search(course: &Course, query: &str) -> bool {
    let query = query.to_lowercase();
    course.name.to_lowercase().contains(&query) || course.id.to_lowercase().contains(&query)
}

/// Resolves a department id to the name courses carry. `None` for unknown ids.
pub fn department_name<'a>(departments: &'a [Department], department_id: &str) -> Option<&'a str> {
    departments
        .iter()
        .find(|d| d.id == department_id)
        .map(|d| d.name.as_str())
}

/// `selected` is the result of `department_name`; an absent name never matches.
pub fn matches_department(course: &Course, department_id: &str, selected: Option<&str>) -> bool {
    department_id == ALL_DEPARTMENTS || selected == Some(course.department.as_str())
}

/// Computes the visible courses for a filter state, preserving catalog order.
///
/// An unknown `department_id` yields an empty result rather than an error.
pub fn compute_visible<'a>(
    catalog: &'a [Course],
    query: &str,
    department_id: &str,
    departments: &[Department],
) -> Vec<&'a Course> {
    let selected = department_name(departments, department_id);
    if selected.is_none() && department_id != ALL_DEPARTMENTS {
        tracing::debug!("No department configured with id '{}'", department_id);
    }

    let visible: Vec<&Course> = catalog
        .iter()
        .filter(|course| {
            matches_search(course, query) && matches_department(course, department_id, selected)
        })
        .collect();

    tracing::trace!(
        query,
        department_id,
        total = catalog.len(),
        visible = visible.len(),
        "Filtered catalog"
    );
    visible
}
