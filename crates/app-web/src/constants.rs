// DOM ids, class hooks and endpoints the frontend binds to.

// Element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const SCROLL_CONTAINER_ID: &str = "scroll-container";
pub const VIDEO_ID: &str = "hero-video";
pub const TITLE_ID: &str = "main-title";
pub const MARKER_ID: &str = "scroll-marker";
pub const PANEL_ID: &str = "hero-panel";
pub const CAROUSEL_SURFACE_ID: &str = "carousel";
pub const CHECKOUT_BUTTON_ID: &str = "checkout-button";

// Class hooks (original markup)
pub const NAV_BUTTON_CLASS: &str = "button";
pub const HOVER_CIRCLE_SELECTOR: &str = ".buttonHoverCircle";

// Scene registry handles
pub const HERO_CUBE_NODE: &str = "hero-cube";

// External collaborators
pub const CHECKOUT_ENDPOINT: &str = "/api/checkout-session";
