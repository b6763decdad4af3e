// ── View router ──
//
// Single-token route dispatch. The route is the sole navigable state:
// `navigate()` moves, `resolve()` derives the full view-state for the
// front end to render. Resolution is a pure function of the current
// token, so repeated resolves with unchanged state are identical.

/// Identifier of the default view when no route is set.
pub const DEFAULT_ROUTE: &str = "dashboard";

/// Known view identifiers, in registration order. A route token outside
/// this set resolves to no active view -- a degraded state, not an error.
const VIEWS: &[&str] = &["dashboard", "subjects", "subject-detail", "test-maker"];

/// The subset of views that appear as navigation items. Detail views are
/// reachable only through their parent (so navigating to one highlights
/// nothing, matching the degraded-state rule).
const NAV_ITEMS: &[(&str, &str)] = &[
    ("dashboard", "Dashboard"),
    ("subjects", "Subjects"),
    ("test-maker", "Test Maker"),
];

/// One entry in the navigation rail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub route: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Everything the front end needs to show for the current route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteView {
    /// The active view's identifier, or `None` when the token matches
    /// no known view.
    pub active_view: Option<&'static str>,
    pub nav: Vec<NavItem>,
    /// Page title label: the route token with its first letter
    /// uppercased.
    pub page_title: String,
}

/// Route state machine. Holds the current token plus one level of
/// history for back navigation -- no deeper stack exists.
#[derive(Debug, Clone, Default)]
pub struct Router {
    current: String,
    previous: Option<String>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current route token (empty until the first dispatch).
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Set the route and remember the old one for `back()`.
    /// Reading the route immediately afterwards always yields `route`.
    pub fn navigate(&mut self, route: impl Into<String>) {
        let route = route.into();
        if route == self.current {
            return;
        }
        let old = std::mem::replace(&mut self.current, route);
        if !old.is_empty() {
            self.previous = Some(old);
        }
    }

    /// Return to the previously visited route, if any. This re-dispatches
    /// the old token; it does not replay the data fetches that ran there.
    pub fn back(&mut self) -> bool {
        match self.previous.take() {
            Some(prev) => {
                self.current = prev;
                true
            }
            None => false,
        }
    }

    /// Resolve the current token into a [`RouteView`].
    ///
    /// An empty token defaults to [`DEFAULT_ROUTE`]. Idempotent: calling
    /// this repeatedly with unchanged state produces an equal value.
    pub fn resolve(&self) -> RouteView {
        let route = if self.current.is_empty() {
            DEFAULT_ROUTE
        } else {
            self.current.as_str()
        };

        let active_view = VIEWS.iter().copied().find(|v| *v == route);

        let nav = NAV_ITEMS
            .iter()
            .map(|&(item_route, label)| NavItem {
                route: item_route,
                label,
                active: item_route == route,
            })
            .collect();

        RouteView {
            active_view,
            nav,
            page_title: capitalize(route),
        }
    }
}

/// Uppercase the first character of a route token.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_route_defaults_to_dashboard() {
        let router = Router::new();
        let view = router.resolve();
        assert_eq!(view.active_view, Some("dashboard"));
        assert_eq!(view.page_title, "Dashboard");
        assert!(view.nav.iter().any(|n| n.route == "dashboard" && n.active));
    }

    #[test]
    fn navigate_then_read_yields_the_token() {
        let mut router = Router::new();
        router.navigate("x");
        assert_eq!(router.current(), "x");
    }

    #[test]
    fn unknown_route_activates_no_view() {
        let mut router = Router::new();
        router.navigate("nonsense");

        let view = router.resolve();
        assert_eq!(view.active_view, None);
        assert!(view.nav.iter().all(|n| !n.active));
        assert_eq!(view.page_title, "Nonsense");
    }

    #[test]
    fn resolve_is_idempotent() {
        let mut router = Router::new();
        router.navigate("subjects");
        assert_eq!(router.resolve(), router.resolve());
    }

    #[test]
    fn detail_view_is_active_but_unhighlighted() {
        let mut router = Router::new();
        router.navigate("subject-detail");

        let view = router.resolve();
        assert_eq!(view.active_view, Some("subject-detail"));
        assert!(view.nav.iter().all(|n| !n.active));
        assert_eq!(view.page_title, "Subject-detail");
    }

    #[test]
    fn back_restores_one_level_only() {
        let mut router = Router::new();
        router.navigate("dashboard");
        router.navigate("subjects");
        router.navigate("test-maker");

        assert!(router.back());
        assert_eq!(router.current(), "subjects");
        // History is one level deep; a second back has nothing left.
        assert!(!router.back());
        assert_eq!(router.current(), "subjects");
    }

    #[test]
    fn renavigating_to_the_same_route_keeps_history() {
        let mut router = Router::new();
        router.navigate("subjects");
        router.navigate("subjects");
        assert!(!router.back());
    }
}
