use std::collections::HashMap;

use crate::{Category, CategoryId, Course};

/// Collapse the categories of all courses into a list unique by id.
///
/// Output order is the order in which each id was first seen; when an id
/// repeats, the name of the last occurrence wins.
pub fn dedupe(courses: &[Course]) -> Vec<Category> {
    let mut positions: HashMap<CategoryId, usize> = HashMap::new();
    let mut unique: Vec<Category> = Vec::new();

    for category in courses.iter().flat_map(|course| course.categories.iter()) {
        match positions.get(&category.id) {
            Some(&index) => unique[index].name.clone_from(&category.name),
            None => {
                positions.insert(category.id, unique.len());
                unique.push(category.clone());
            }
        }
    }

    unique
}
