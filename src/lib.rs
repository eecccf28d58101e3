mod app;
pub mod dataset;
mod error;
pub mod figure;
pub mod lin_reg;
pub mod log;
pub mod options;
pub mod summary;

pub use app::ScatterApp;
pub use dataset::{DataPoint, Dataset};
pub use error::{Error, Result};
