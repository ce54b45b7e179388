// Application layer modules
pub mod application;

// Infrastructure layer modules
pub mod infrastructure;
