pub mod impact;
mod mapimpact_cli_error;
pub mod osrm;
pub mod overpass;

pub use mapimpact_cli_error::MapImpactCliError;
