//! Tests for the routing system
//!
//! Validates the route table, the protected-route guard and the choice of
//! where a successful login lands.

#[cfg(test)]
mod tests {
    use crate::models::session::{self, Readiness, SessionState};
    use crate::routes::{GuardDecision, LoginRedirect, MainRoute, guard, post_login_target};
    use crate::storage::MemoryStorage;
    use crate::test_support::{FakeAuthApi, profile};
    use crate::validation::LoginForm;
    use futures::executor::block_on;
    use yew_router::Routable;
    use yewdux::{Context, Dispatch};

    /// Tests that paths resolve to the expected routes
    #[test]
    fn test_route_recognition() {
        assert_eq!(MainRoute::recognize("/courses"), Some(MainRoute::Courses));
        assert_eq!(
            MainRoute::recognize("/courses/42"),
            Some(MainRoute::Course { id: "42".to_string() })
        );
        assert_eq!(
            MainRoute::recognize("/blog/hello-world"),
            Some(MainRoute::BlogPost {
                id: "hello-world".to_string()
            })
        );
        assert_eq!(MainRoute::recognize("/cart"), Some(MainRoute::Cart));
        assert_eq!(MainRoute::recognize("/no/such/page"), Some(MainRoute::NotFound));
    }

    /// Tests route paths
    #[test]
    fn test_route_paths() {
        assert_eq!(MainRoute::Home.to_path(), "/");
        assert_eq!(MainRoute::Shop.to_path(), "/shop");
        assert_eq!(
            MainRoute::Event { id: "7".to_string() }.to_path(),
            "/events/7"
        );
    }

    #[test]
    fn test_only_cart_checkout_and_profile_are_protected() {
        let protected: Vec<MainRoute> = [
            MainRoute::Home,
            MainRoute::Courses,
            MainRoute::Shop,
            MainRoute::Login,
            MainRoute::Cart,
            MainRoute::Checkout,
            MainRoute::Profile,
            MainRoute::NotFound,
        ]
        .into_iter()
        .filter(MainRoute::is_protected)
        .collect();

        assert_eq!(
            protected,
            vec![MainRoute::Cart, MainRoute::Checkout, MainRoute::Profile]
        );
    }

    #[test]
    fn test_nav_routes() {
        let labels: Vec<_> = MainRoute::nav_routes()
            .iter()
            .filter_map(MainRoute::nav_label)
            .collect();
        assert_eq!(
            labels,
            vec!["Home", "Courses", "Instructors", "Events", "Blog", "Shop", "Contact", "About"]
        );
    }

    #[test]
    fn test_detail_routes_belong_to_their_list() {
        let detail = MainRoute::Instructor { id: "1".to_string() };
        assert_eq!(detail.section(), MainRoute::Instructors);
        assert_eq!(MainRoute::Cart.section(), MainRoute::Cart);
    }

    #[test]
    fn test_guard_public_routes_always_render() {
        for readiness in [Readiness::Unknown, Readiness::Out, Readiness::In(profile())] {
            assert_eq!(guard(&MainRoute::Courses, &readiness), GuardDecision::Render);
        }
    }

    #[test]
    fn test_guard_protected_routes() {
        assert_eq!(guard(&MainRoute::Profile, &Readiness::Unknown), GuardDecision::Wait);
        assert_eq!(
            guard(&MainRoute::Profile, &Readiness::Out),
            GuardDecision::RedirectToLogin(LoginRedirect {
                from: Some("/profile".to_string())
            })
        );
        assert_eq!(
            guard(&MainRoute::Profile, &Readiness::In(profile())),
            GuardDecision::Render
        );
    }

    #[test]
    fn test_post_login_target() {
        assert_eq!(post_login_target(None), MainRoute::Home);
        assert_eq!(post_login_target(Some("/checkout")), MainRoute::Checkout);
        assert_eq!(
            post_login_target(Some("/courses/3?tab=reviews")),
            MainRoute::Course { id: "3".to_string() }
        );
        assert_eq!(post_login_target(Some("https://evil.example/cart")), MainRoute::Home);
        assert_eq!(post_login_target(Some("//evil.example/cart")), MainRoute::Home);
        assert_eq!(post_login_target(Some("/login")), MainRoute::Home);
        assert_eq!(post_login_target(Some("/register")), MainRoute::Home);
        assert_eq!(post_login_target(Some("/missing/page")), MainRoute::Home);
        assert_eq!(post_login_target(Some("")), MainRoute::Home);
    }

    /// A guarded visit followed by a successful login lands on the requested page
    #[test]
    fn test_guarded_visit_returns_after_login() {
        let dispatch: Dispatch<SessionState> = Dispatch::new(&Context::new());
        let storage = MemoryStorage::default();
        session::rehydrate(&dispatch, &storage);

        let GuardDecision::RedirectToLogin(redirect) =
            guard(&MainRoute::Cart, &dispatch.get().readiness)
        else {
            panic!("expected a redirect to login");
        };

        let form = LoginForm {
            email: "ada@example.com".to_string(),
            password: "engine1".to_string(),
            remember_me: false,
        };
        block_on(session::login(&dispatch, &FakeAuthApi::succeeding(), &storage, &form)).unwrap();

        let target = post_login_target(redirect.from.as_deref());
        assert_eq!(target, MainRoute::Cart);
        assert_eq!(guard(&target, &dispatch.get().readiness), GuardDecision::Render);
    }
}
