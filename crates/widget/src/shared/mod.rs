pub mod asset_loader;
pub mod dom;
pub mod host_config;
pub mod icons;
pub mod modal_frame;
pub mod mount;
