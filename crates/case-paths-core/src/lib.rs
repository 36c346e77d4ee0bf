mod any_case_path;
mod case_pathable;

pub use any_case_path::AnyCasePath;
pub use case_pathable::CasePathable;
