/// An enum whose cases are reachable through generated case paths.
///
/// Implemented by `#[case_pathable]` (or by `#[derive(CasePathable)]` when the
/// conformance is spelled out on the enum). `AllCasePaths` is the generated
/// container with one accessor method per case.
pub trait CasePathable: Sized {
    /// The generated container of case paths.
    type AllCasePaths;

    /// Returns the container of case paths for this enum.
    fn all_case_paths() -> Self::AllCasePaths;
}
