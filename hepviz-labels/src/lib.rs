pub mod bins;
pub mod error;
pub mod samples;
pub mod variables;

pub use bins::hist1d;
pub use error::LabelError;
pub use samples::sample_labels;
pub use variables::variable_labels;
