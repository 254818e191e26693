//! Explicit view state for the data table: filters, sort, and pagination.
//!
//! The state lives outside any rendering layer so the projection functions
//! stay pure and unit-testable. Mutating operations encode the table's
//! interaction rules (sort toggling, page reset on filter change).

/// Records shown per table page.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// One optional constraint per filterable column. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FilterState {
    pub search: Option<String>,
    pub equipe: Option<String>,
    pub microarea: Option<String>,
    pub status_boas_praticas: Option<String>,
    pub status_vacinas: Option<String>,
    pub quadrimestre: Option<String>,
    pub prioridade: Option<String>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.equipe.is_none()
            && self.microarea.is_none()
            && self.status_boas_praticas.is_none()
            && self.status_vacinas.is_none()
            && self.quadrimestre.is_none()
            && self.prioridade.is_none()
    }

    /// Active constraints as (display label, value), in a fixed order.
    pub fn active(&self) -> Vec<(&'static str, &str)> {
        let mut active = Vec::new();
        if let Some(value) = self.search.as_deref() {
            active.push(("Busca", value));
        }
        if let Some(value) = self.equipe.as_deref() {
            active.push(("Equipe", value));
        }
        if let Some(value) = self.microarea.as_deref() {
            active.push(("Microárea", value));
        }
        if let Some(value) = self.status_boas_praticas.as_deref() {
            active.push(("Boas Práticas", value));
        }
        if let Some(value) = self.status_vacinas.as_deref() {
            active.push(("Status Vacinas", value));
        }
        if let Some(value) = self.quadrimestre.as_deref() {
            active.push(("Quadrimestre", value));
        }
        if let Some(value) = self.prioridade.as_deref() {
            active.push(("Prioridade", value));
        }
        active
    }
}

/// Names one filter axis for state updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAxis {
    Search,
    Equipe,
    Microarea,
    StatusBoasPraticas,
    StatusVacinas,
    Quadrimestre,
    Prioridade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SortKey {
    pub column: String,
    pub direction: SortDirection,
}

/// Current sort selection. `key: None` leaves the filtered order untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SortState {
    pub key: Option<SortKey>,
}

impl SortState {
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            key: Some(SortKey {
                column: column.into(),
                direction: SortDirection::Ascending,
            }),
        }
    }

    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            key: Some(SortKey {
                column: column.into(),
                direction: SortDirection::Descending,
            }),
        }
    }

    pub fn is_unsorted(&self) -> bool {
        self.key.is_none()
    }

    /// Cycles the selection for a column: unsorted → ascending →
    /// descending → unsorted. Toggling a different column always starts a
    /// fresh ascending sort on it.
    pub fn toggle(&mut self, column: &str) {
        self.key = match self.key.take() {
            Some(key) if key.column == column => match key.direction {
                SortDirection::Ascending => Some(SortKey {
                    column: key.column,
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(SortKey {
                column: column.to_string(),
                direction: SortDirection::Ascending,
            }),
        };
    }
}

/// 1-based page request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// The complete table view state handed to the projection pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ViewState {
    pub filter: FilterState,
    pub sort: SortState,
    pub page: PageRequest,
}

impl ViewState {
    /// Sets one filter axis and snaps back to the first page.
    pub fn set_filter(&mut self, axis: FilterAxis, value: Option<String>) {
        let value = value.filter(|v| !v.trim().is_empty());
        match axis {
            FilterAxis::Search => self.filter.search = value,
            FilterAxis::Equipe => self.filter.equipe = value,
            FilterAxis::Microarea => self.filter.microarea = value,
            FilterAxis::StatusBoasPraticas => self.filter.status_boas_praticas = value,
            FilterAxis::StatusVacinas => self.filter.status_vacinas = value,
            FilterAxis::Quadrimestre => self.filter.quadrimestre = value,
            FilterAxis::Prioridade => self.filter.prioridade = value,
        }
        self.page.page = 1;
    }

    /// Clears every filter axis and snaps back to the first page.
    pub fn reset_filters(&mut self) {
        self.filter = FilterState::default();
        self.page.page = 1;
    }

    /// Applies the sort toggle cycle for a column and snaps back to the
    /// first page.
    pub fn toggle_sort(&mut self, column: &str) {
        self.sort.toggle(column);
        self.page.page = 1;
    }
}
