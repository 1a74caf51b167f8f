use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::dedupe::dedupe;

pub type CategoryId = i64;

/// A category tag shared across courses. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(default)]
    pub name: String,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A course ("launch") record. Only `categories` is interpreted; every other
/// field is kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Course {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub categories: Vec<Category>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Course {
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            categories,
            extra: Map::new(),
        }
    }

    pub fn has_category(&self, id: CategoryId) -> bool {
        self.categories.iter().any(|category| category.id == id)
    }
}

/// Response envelope of the course listing endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CoursePage {
    pub results: Vec<Course>,
}

/// Courses together with the unique categories derived from them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    pub courses: Vec<Course>,
    pub categories: Vec<Category>,
}

impl Catalog {
    pub fn from_courses(courses: Vec<Course>) -> Self {
        let categories = dedupe(&courses);
        Self {
            courses,
            categories,
        }
    }
}

impl From<CoursePage> for Catalog {
    fn from(page: CoursePage) -> Self {
        Self::from_courses(page.results)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Category>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_null_categories_decode_to_empty() {
        let page: CoursePage = serde_json::from_str(
            r#"{"results":[{"title":"a"},{"title":"b","categories":null}]}"#,
        )
        .unwrap();
        assert_eq!(page.results.len(), 2);
        assert!(page.results.iter().all(|course| course.categories.is_empty()));
    }

    #[test]
    fn unknown_fields_are_kept_opaque() {
        let course: Course = serde_json::from_str(
            r#"{"id":17,"title":"Rust","categories":[{"id":1,"name":"Dev"}]}"#,
        )
        .unwrap();
        assert_eq!(course.categories, vec![Category::new(1, "Dev")]);
        assert_eq!(course.extra.get("id"), Some(&Value::from(17)));
        assert_eq!(course.extra.get("title"), Some(&Value::from("Rust")));

        let round = serde_json::to_value(&course).unwrap();
        assert_eq!(round["title"], "Rust");
        assert_eq!(round["categories"][0]["name"], "Dev");
    }

    #[test]
    fn page_without_results_is_rejected() {
        assert!(serde_json::from_str::<CoursePage>(r#"{"count":0}"#).is_err());
        assert!(serde_json::from_str::<CoursePage>(r#"{"results":null}"#).is_err());
    }
}
