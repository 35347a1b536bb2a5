/// Heading and hint a use-case page shows above its form
pub trait UseCaseMetadata {
    fn display_name() -> &'static str;

    /// One-line instruction under the heading
    fn description() -> &'static str;
}
