use super::{ChangeQuerySpec, OverpassError, OverpassResponse};

/// boundary to the change-detection service. the pipeline depends on this
/// trait rather than on a concrete client so that tests can substitute
/// canned responses.
pub trait ChangeSource {
    /// issues the rendered query exactly once and returns the parsed
    /// document. network, status and decode failures all surface as
    /// [`OverpassError`]; the caller decides whether a failed region is
    /// fatal (it is not — see the pipeline's skip semantics).
    fn fetch_changes(&self, spec: &ChangeQuerySpec) -> Result<OverpassResponse, OverpassError>;
}
