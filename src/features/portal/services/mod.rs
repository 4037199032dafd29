mod portal_service;
mod view_router;

pub use portal_service::PortalService;
pub use view_router::ViewRouter;
