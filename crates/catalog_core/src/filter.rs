use std::borrow::Cow;

use crate::{CategoryId, Course};

/// Selecting the active id again clears the filter; any other value replaces it.
pub fn toggle_filter(current: Option<CategoryId>, id: Option<CategoryId>) -> Option<CategoryId> {
    if current == id {
        None
    } else {
        id
    }
}

/// Courses matching `filter_id`. Without a filter the input is returned borrowed.
pub fn filtered(courses: &[Course], filter_id: Option<CategoryId>) -> Cow<'_, [Course]> {
    match filter_id {
        None => Cow::Borrowed(courses),
        Some(id) => Cow::Owned(
            courses
                .iter()
                .filter(|course| course.has_category(id))
                .cloned()
                .collect(),
        ),
    }
}
