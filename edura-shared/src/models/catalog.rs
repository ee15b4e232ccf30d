//! Catalog entities served by the resource endpoints.
//!
//! Each entity keeps the fields the views render and stores the rest of the
//! document in a flattened `extra` map.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::EntityId;

/// A catalog entity reachable under `/{PATH}` and `/{PATH}/{id}`.
pub trait Resource: Clone + PartialEq + DeserializeOwned + 'static {
    /// Collection path relative to the API base, without slashes.
    const PATH: &'static str;
    /// Human name of one entity, used in fallback error messages.
    const SINGULAR: &'static str;
    /// Human name of the collection, used in fallback error messages.
    const PLURAL: &'static str;

    /// Backend identifier of this entity.
    fn id(&self) -> &EntityId;
}

/// A course in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Backend identifier.
    pub id: EntityId,
    /// Course title.
    pub title: String,
    /// Long description.
    #[serde(default)]
    pub description: Option<String>,
    /// Price in the shop currency.
    #[serde(default)]
    pub price: Option<f64>,
    /// Display name of the instructor.
    #[serde(default)]
    pub instructor: Option<String>,
    /// Catalog category.
    #[serde(default)]
    pub category: Option<String>,
    /// Average review score.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Fields the client does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An instructor profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    /// Backend identifier.
    pub id: EntityId,
    /// Full name.
    pub name: String,
    /// Job title, e.g. "Senior Lecturer".
    #[serde(default)]
    pub title: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Biography.
    #[serde(default)]
    pub bio: Option<String>,
    /// Fields the client does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A scheduled event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Backend identifier.
    pub id: EntityId,
    /// Event title.
    pub title: String,
    /// Date as sent by the backend; displayed verbatim.
    #[serde(default)]
    pub date: Option<String>,
    /// Venue.
    #[serde(default)]
    pub location: Option<String>,
    /// Long description.
    #[serde(default)]
    pub description: Option<String>,
    /// Fields the client does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A blog article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Backend identifier.
    pub id: EntityId,
    /// Headline.
    pub title: String,
    /// Short teaser shown in lists.
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Article body.
    #[serde(default)]
    pub content: Option<String>,
    /// Author display name.
    #[serde(default)]
    pub author: Option<String>,
    /// Fields the client does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A shop product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend identifier.
    pub id: EntityId,
    /// Product name.
    pub title: String,
    /// Unit price.
    #[serde(default)]
    pub price: Option<f64>,
    /// ISO currency code; the shop assumes USD when absent.
    #[serde(default)]
    pub currency: Option<String>,
    /// Product image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Fields the client does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of `POST /courses/{id}/enroll`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EnrollmentResponse {
    /// Confirmation text, when the backend sends one.
    #[serde(default)]
    pub message: Option<String>,
    /// Fields the client does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

macro_rules! impl_resource {
    ($entity:ty, $path:literal, $singular:literal, $plural:literal) => {
        impl Resource for $entity {
            const PATH: &'static str = $path;
            const SINGULAR: &'static str = $singular;
            const PLURAL: &'static str = $plural;

            fn id(&self) -> &EntityId {
                &self.id
            }
        }
    };
}

impl_resource!(Course, "courses", "course", "courses");
impl_resource!(Instructor, "instructors", "instructor", "instructors");
impl_resource!(Event, "events", "event", "events");
impl_resource!(BlogPost, "blog", "blog post", "blog posts");
impl_resource!(Product, "products", "product", "products");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_list_deserialization() {
        let json = r#"[
            {"id": 1, "title": "Rust for Beginners", "price": 49.5, "category": "programming", "lessons": 12},
            {"id": "c-2", "title": "Music Theory"}
        ]"#;

        let courses: Vec<Course> = serde_json::from_str(json).unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].id.as_str(), "1");
        assert_eq!(courses[0].price, Some(49.5));
        assert_eq!(courses[0].extra.get("lessons"), Some(&Value::from(12)));
        assert_eq!(courses[1].description, None);
    }

    #[test]
    fn test_entity_requires_title() {
        assert!(serde_json::from_str::<Event>(r#"{"id": 3}"#).is_err());
        assert!(serde_json::from_str::<Instructor>(r#"{"id": 3, "title": "Dr"}"#).is_err());
    }

    #[test]
    fn test_resource_paths() {
        assert_eq!(Course::PATH, "courses");
        assert_eq!(Instructor::PATH, "instructors");
        assert_eq!(Event::PATH, "events");
        assert_eq!(BlogPost::PATH, "blog");
        assert_eq!(Product::PATH, "products");
        assert_eq!(BlogPost::PLURAL, "blog posts");
    }

    #[test]
    fn test_resource_id() {
        let product = Product {
            id: EntityId::new("sku-9"),
            title: "Notebook".to_string(),
            ..Default::default()
        };
        assert_eq!(product.id().as_str(), "sku-9");
    }
}
