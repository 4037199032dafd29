mod view;

pub use view::{NavigationAction, PortalSnapshot, Screen, SubmissionNotice, View};
