pub mod error;
pub mod output;

pub use error::{AppResult, TransformError};
pub use output::{OutputStyle, print_error, print_success, print_warning};
