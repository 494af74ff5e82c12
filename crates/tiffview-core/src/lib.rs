pub mod bitmap;
pub mod config;
pub mod consts;
pub mod drag;
pub mod dropped;
pub mod error;
pub mod io;
pub mod metadata;
pub mod normalize;
pub mod stats;
pub mod viewport;
