use crate::domain::AppError;
use std::path::Path;

pub trait GitPort {
    /// Describe the checkout by its nearest tag.
    ///
    /// Returns the query's text as printed: the description on success, the
    /// `fatal:` diagnostic when git cannot answer. `Err` is reserved for
    /// failures to run the query at all.
    fn describe_tags(&self, checkout: &Path) -> Result<String, AppError>;

    /// Abbreviated commit id of the checkout's HEAD.
    fn short_commit(&self, checkout: &Path) -> Result<String, AppError>;
}
