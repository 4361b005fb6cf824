use crate::core::filter::compute_visible;
use crate::core::CatalogSource;
use crate::domain::model::{Catalog, Course, Department, ALL_DEPARTMENTS};
use crate::utils::error::{DirectoryError, Result};

/// Current user intent: the search text and the selected department id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub department_id: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            department_id: ALL_DEPARTMENTS.to_string(),
        }
    }
}

impl FilterState {
    pub fn new(query: impl Into<String>, department_id: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            department_id: department_id.into(),
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    /// Raw text from the search box, untrimmed.
    SetQuery(String),
    SelectDepartment(String),
    /// Empties the search box and keeps the department.
    ClearQuery,
    /// Back to the empty query and `all`.
    Reset,
}

/// Holds the loaded catalog and the filter state, and keeps the visible
/// set in step with every state change.
pub struct Browser {
    catalog: Catalog,
    departments: Vec<Department>,
    state: FilterState,
    visible: Vec<Course>,
}

impl Browser {
    pub fn new(catalog: Catalog, departments: Vec<Department>) -> Self {
        Self::with_state(catalog, departments, FilterState::default())
    }

    pub fn with_state(catalog: Catalog, departments: Vec<Department>, state: FilterState) -> Self {
        let mut browser = Self {
            catalog,
            departments,
            state,
            visible: Vec::new(),
        };
        browser.recompute();
        browser
    }

    pub async fn load<S: CatalogSource + ?Sized>(
        source: &S,
        departments: Vec<Department>,
    ) -> Result<Self> {
        let catalog = source.load().await?;
        tracing::info!(
            "Loaded {} courses across {} departments",
            catalog.len(),
            departments.iter().filter(|d| !d.is_wildcard()).count()
        );
        Ok(Self::new(catalog, departments))
    }

    pub fn apply(&mut self, event: FilterEvent) {
        tracing::debug!("Applying {:?}", event);
        match event {
            FilterEvent::SetQuery(query) => self.state.query = query,
            FilterEvent::SelectDepartment(id) => self.state.department_id = id,
            FilterEvent::ClearQuery => self.state.query.clear(),
            FilterEvent::Reset => self.state = FilterState::default(),
        }
        self.recompute();
    }

    fn recompute(&mut self) {
        self.visible = compute_visible(
            self.catalog.courses(),
            &self.state.query,
            &self.state.department_id,
            &self.departments,
        )
        .into_iter()
        .cloned()
        .collect();
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn visible(&self) -> &[Course] {
        &self.visible
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn is_department_selected(&self, department: &Department) -> bool {
        self.state.department_id == department.id
    }

    /// Outbound link for a course in the catalog, visible or not.
    pub fn join_link(&self, course_id: &str) -> Result<&str> {
        self.catalog
            .find(course_id)
            .map(|c| c.whatsapp_link.as_str())
            .ok_or_else(|| DirectoryError::UnknownCourseError {
                id: course_id.to_string(),
            })
    }
}
