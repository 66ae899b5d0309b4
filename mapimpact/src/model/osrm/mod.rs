mod distance_source;
mod osrm_client;
mod osrm_error;
mod osrm_response;

pub use distance_source::DistanceSource;
pub use osrm_client::{OsrmClient, DEFAULT_OSRM_URL};
pub use osrm_error::OsrmError;
pub use osrm_response::{OsrmResponse, OsrmRoute};
