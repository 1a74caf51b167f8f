use crate::{Category, CategoryId, Course, StoreKind};

/// Snapshot of everything a presentation layer binds to.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreViewModel {
    pub kind: StoreKind,
    pub courses: Vec<Course>,
    pub filtered_courses: Vec<Course>,
    pub categories: Vec<Category>,
    /// Always equal to `categories`; the filter only narrows courses.
    pub filtered_categories: Vec<Category>,
    pub loading: bool,
    pub loaded: bool,
    pub filter_id: Option<CategoryId>,
}
