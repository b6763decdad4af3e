//! Screen components, one per routable view.
//!
//! Each screen's identifier is the route token the router resolves to;
//! the app shows whichever screen matches `RouteView::active_view` (an
//! unknown token matches none, and nothing renders in the content area).

pub mod dashboard;
pub mod subject_detail;
pub mod subjects;
pub mod test_maker;

use crate::component::Component;

/// Construct all screens, keyed by view identifier.
pub fn create_screens() -> Vec<(&'static str, Box<dyn Component>)> {
    let screens: Vec<Box<dyn Component>> = vec![
        Box::new(dashboard::DashboardScreen::new()),
        Box::new(subjects::SubjectsScreen::new()),
        Box::new(subject_detail::SubjectDetailScreen::new()),
        Box::new(test_maker::TestMakerScreen::new()),
    ];

    screens.into_iter().map(|screen| (screen.id(), screen)).collect()
}
