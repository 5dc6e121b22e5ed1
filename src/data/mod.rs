pub mod derive;
pub mod source;
pub mod stats;

// Re-export the dataset type for convenience
pub use source::TripData;
