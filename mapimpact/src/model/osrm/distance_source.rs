use super::OsrmError;
use geo::Point;

/// boundary to the routing service used for distance measurement.
pub trait DistanceSource: Sync {
    /// driving distance in meters between two points, measured with a
    /// single request. every failure mode (timeout, bad status, empty
    /// route list) is an [`OsrmError`]; the pipeline downgrades these to
    /// the zero-distance sentinel rather than propagating them.
    fn driving_distance_meters(
        &self,
        start: &Point<f64>,
        end: &Point<f64>,
    ) -> Result<f64, OsrmError>;
}
