mod change_query;
mod change_source;
mod overpass_client;
mod overpass_error;
mod overpass_response;
mod segment;

pub use change_query::ChangeQuerySpec;
pub use change_source::ChangeSource;
pub use overpass_client::{OverpassClient, DEFAULT_OVERPASS_URL};
pub use overpass_error::OverpassError;
pub use overpass_response::{OverpassElement, OverpassGeomPoint, OverpassResponse};
pub use segment::{extract_segments, Segment};
