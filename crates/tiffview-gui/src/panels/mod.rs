pub mod controls;
pub mod metadata;
pub mod viewport;
