mod project;

pub use project::{Project, ProjectEdit};
