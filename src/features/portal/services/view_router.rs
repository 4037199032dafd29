use uuid::Uuid;

use crate::features::portal::models::{NavigationAction, View};

/// Current view plus the report selected for tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRouter {
    view: View,
    tracked_report: Option<Uuid>,
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRouter {
    pub fn new() -> Self {
        Self {
            view: View::Landing,
            tracked_report: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn tracked_report(&self) -> Option<Uuid> {
        self.tracked_report
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    /// Select a report without changing the view
    pub fn set_tracked_report(&mut self, id: Uuid) {
        self.tracked_report = Some(id);
    }

    /// Apply a navigation request; the selection survives navigation
    pub fn navigate(&mut self, action: NavigationAction) -> View {
        self.view = action.target();
        self.view
    }

    /// Select `id` and show the tracking page
    pub fn track(&mut self, id: Uuid) {
        self.set_tracked_report(id);
        self.set_view(View::Track);
    }
}
