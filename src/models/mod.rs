mod idea;

pub use idea::Idea;
