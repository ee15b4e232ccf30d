//! How each catalog entity is presented in cards and detail pages.

use crate::components::enroll_button::EnrollButton;
use crate::routes::MainRoute;
use shared::models::{BlogPost, Course, Event, Instructor, Product, Resource};
use yew::{Html, html};

/// Presentation of a catalog entity.
pub trait Listing: Resource {
    /// Collection page of this entity.
    fn list_route() -> MainRoute;

    /// Heading of the collection page.
    fn page_title() -> &'static str;

    /// Detail page of this entity, if it has one.
    fn detail_route(&self) -> Option<MainRoute>;

    fn heading(&self) -> &str;

    /// Short text shown on cards.
    fn summary(&self) -> Option<&str>;

    /// Long text shown on the detail page.
    fn body(&self) -> Option<&str> {
        self.summary()
    }

    /// Small labelled facts such as author or venue.
    fn facts(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn image(&self) -> Option<&str> {
        None
    }

    /// Amount and currency code.
    fn price(&self) -> Option<(f64, Option<&str>)> {
        None
    }

    /// Buttons at the bottom of the detail page.
    fn actions(&self) -> Html {
        html! {}
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|text| !text.trim().is_empty())
}

impl Listing for Course {
    fn list_route() -> MainRoute {
        MainRoute::Courses
    }

    fn page_title() -> &'static str {
        "Courses"
    }

    fn detail_route(&self) -> Option<MainRoute> {
        Some(MainRoute::Course {
            id: self.id.to_string(),
        })
    }

    fn heading(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> Option<&str> {
        non_empty(self.description.as_ref())
    }

    fn facts(&self) -> Vec<(&'static str, String)> {
        let mut facts = Vec::new();
        if let Some(instructor) = non_empty(self.instructor.as_ref()) {
            facts.push(("Instructor", instructor.to_string()));
        }
        if let Some(category) = non_empty(self.category.as_ref()) {
            facts.push(("Category", category.to_string()));
        }
        if let Some(rating) = self.rating {
            facts.push(("Rating", format!("{rating:.1} / 5")));
        }
        facts
    }

    fn price(&self) -> Option<(f64, Option<&str>)> {
        self.price.map(|amount| (amount, None))
    }

    fn actions(&self) -> Html {
        html! { <EnrollButton course={self.clone()} /> }
    }
}

impl Listing for Instructor {
    fn list_route() -> MainRoute {
        MainRoute::Instructors
    }

    fn page_title() -> &'static str {
        "Instructors"
    }

    fn detail_route(&self) -> Option<MainRoute> {
        Some(MainRoute::Instructor {
            id: self.id.to_string(),
        })
    }

    fn heading(&self) -> &str {
        &self.name
    }

    fn summary(&self) -> Option<&str> {
        non_empty(self.title.as_ref())
    }

    fn body(&self) -> Option<&str> {
        non_empty(self.bio.as_ref())
    }

    fn image(&self) -> Option<&str> {
        non_empty(self.avatar.as_ref())
    }
}

impl Listing for Event {
    fn list_route() -> MainRoute {
        MainRoute::Events
    }

    fn page_title() -> &'static str {
        "Events"
    }

    fn detail_route(&self) -> Option<MainRoute> {
        Some(MainRoute::Event {
            id: self.id.to_string(),
        })
    }

    fn heading(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> Option<&str> {
        non_empty(self.description.as_ref())
    }

    fn facts(&self) -> Vec<(&'static str, String)> {
        [("Date", &self.date), ("Location", &self.location)]
            .into_iter()
            .filter_map(|(label, value)| non_empty(value.as_ref()).map(|v| (label, v.to_string())))
            .collect()
    }
}

impl Listing for BlogPost {
    fn list_route() -> MainRoute {
        MainRoute::Blog
    }

    fn page_title() -> &'static str {
        "Blog"
    }

    fn detail_route(&self) -> Option<MainRoute> {
        Some(MainRoute::BlogPost {
            id: self.id.to_string(),
        })
    }

    fn heading(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> Option<&str> {
        non_empty(self.excerpt.as_ref())
    }

    fn body(&self) -> Option<&str> {
        non_empty(self.content.as_ref()).or_else(|| self.summary())
    }

    fn facts(&self) -> Vec<(&'static str, String)> {
        non_empty(self.author.as_ref())
            .map(|author| vec![("Author", author.to_string())])
            .unwrap_or_default()
    }
}

impl Listing for Product {
    fn list_route() -> MainRoute {
        MainRoute::Shop
    }

    fn page_title() -> &'static str {
        "Shop"
    }

    fn detail_route(&self) -> Option<MainRoute> {
        None
    }

    fn heading(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> Option<&str> {
        None
    }

    fn image(&self) -> Option<&str> {
        non_empty(self.image.as_ref())
    }

    fn price(&self) -> Option<(f64, Option<&str>)> {
        self.price
            .map(|amount| (amount, non_empty(self.currency.as_ref())))
    }
}
