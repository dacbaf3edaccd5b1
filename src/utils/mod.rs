pub mod feedback;
pub mod reveal;
