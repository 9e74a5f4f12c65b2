pub(crate) mod avatar;
pub(crate) mod bottom_nav;
pub(crate) mod create_panel;
pub(crate) mod feed_panel;
pub(crate) mod friends_panel;
pub(crate) mod header;
pub(crate) mod icon;
pub(crate) mod notifications_panel;
pub(crate) mod profile_panel;
