use std::borrow::Cow;

use crate::filter::{filtered, toggle_filter};
use crate::view_model::StoreViewModel;
use crate::{Catalog, Category, CategoryId, Course};

/// Identifies the store lifetime a fetch was issued in. Bumped by every reset.
pub type Generation = u64;

/// Which projection of the catalog a store keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreKind {
    /// Courses and their categories.
    #[default]
    Launches,
    /// Only the derived categories; courses are discarded after the fetch.
    CategoriesOnly,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreState {
    kind: StoreKind,
    courses: Vec<Course>,
    categories: Vec<Category>,
    loading: bool,
    loaded: bool,
    filter_id: Option<CategoryId>,
    generation: Generation,
    dirty: bool,
}

impl StoreState {
    pub fn new(kind: StoreKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn launches() -> Self {
        Self::new(StoreKind::Launches)
    }

    pub fn categories_only() -> Self {
        Self::new(StoreKind::CategoriesOnly)
    }

    pub fn kind(&self) -> StoreKind {
        self.kind
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn filtered_courses(&self) -> Cow<'_, [Course]> {
        filtered(&self.courses, self.filter_id)
    }

    pub fn filtered_categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn loaded(&self) -> bool {
        self.loaded
    }

    pub fn filter_id(&self) -> Option<CategoryId> {
        self.filter_id
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn view(&self) -> StoreViewModel {
        StoreViewModel {
            kind: self.kind,
            courses: self.courses.clone(),
            filtered_courses: self.filtered_courses().into_owned(),
            categories: self.categories.clone(),
            filtered_categories: self.filtered_categories().to_vec(),
            loading: self.loading,
            loaded: self.loaded,
            filter_id: self.filter_id,
        }
    }

    /// Returns whether anything observable changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn can_init(&self) -> bool {
        !self.loaded && !self.loading
    }

    pub(crate) fn begin_fetch(&mut self) -> Generation {
        self.loading = true;
        self.dirty = true;
        self.generation
    }

    pub(crate) fn is_current(&self, generation: Generation) -> bool {
        self.generation == generation
    }

    pub(crate) fn apply_catalog(&mut self, catalog: Catalog) {
        match self.kind {
            StoreKind::Launches => self.courses = catalog.courses,
            StoreKind::CategoriesOnly => {}
        }
        self.categories = catalog.categories;
        self.loaded = true;
        self.loading = false;
        self.dirty = true;
    }

    pub(crate) fn apply_failure(&mut self) {
        self.loading = false;
        self.dirty = true;
    }

    pub(crate) fn toggle_filter(&mut self, id: Option<CategoryId>) {
        let next = toggle_filter(self.filter_id, id);
        if next != self.filter_id {
            self.filter_id = next;
            self.dirty = true;
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = Self {
            kind: self.kind,
            generation: self.generation.wrapping_add(1),
            dirty: true,
            ..Self::default()
        };
    }
}
