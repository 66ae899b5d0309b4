use clap::{Parser, Subcommand};
use mapimpact::{
    app::{
        pipeline::pipeline_ops,
        report::report_ops,
    },
    config::RunConfiguration,
    model::{
        osrm::OsrmClient,
        overpass::OverpassClient,
        MapImpactCliError,
    },
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct MapImpactAppArguments {
    #[command(subcommand)]
    app: App,
}

#[derive(Subcommand)]
pub enum App {
    Analyze {
        #[arg(long, help = "path to .toml or .json file with analysis parameters")]
        configuration_file: Option<String>,
        #[arg(long, help = "output path for the region summary CSV")]
        output_file: Option<String>,
        #[arg(long, help = "optional output path for the segment coordinate CSV")]
        points_file: Option<String>,
    },
}

pub fn run(app: &App) -> Result<(), MapImpactCliError> {
    env_logger::init();
    match app {
        App::Analyze {
            configuration_file,
            output_file,
            points_file,
        } => {
            let mut conf = match configuration_file {
                None => Ok(RunConfiguration::default()),
                Some(f) => {
                    log::info!("reading analysis configuration from {f}");
                    RunConfiguration::try_from(f)
                }
            }?;
            conf.clamp_end_date();
            conf.validate()?;

            let overpass = OverpassClient::new(&conf.overpass_url)?;
            let osrm = OsrmClient::new(&conf.osrm_url).map_err(|e| {
                MapImpactCliError::ConfigurationError(format!("osrm client: {e}"))
            })?;

            let output = pipeline_ops::run_analysis(&conf, &overpass, &osrm)?;

            let summary_path = match output_file {
                Some(f) => PathBuf::from(f),
                None => PathBuf::from(format!(
                    "map_update_eta_impact_{}_{}.csv",
                    conf.start_date, conf.end_date
                )),
            };
            report_ops::write_summary_csv(&summary_path, &output.summaries)?;
            log::info!(
                "wrote {} region summaries to {}",
                output.summaries.len(),
                summary_path.display()
            );
            if let Some(f) = points_file {
                report_ops::write_points_csv(&PathBuf::from(f), &output.points)?;
                log::info!("wrote {} segment coordinates to {f}", output.points.len());
            }
            report_ops::log_headline_metrics(&output);
            eprintln!("finished.");
            Ok(())
        }
    }
}

fn main() {
    let args = MapImpactAppArguments::parse();
    match run(&args.app) {
        Ok(_) => {}
        Err(e) => {
            println!("{e}");
            panic!("{}", e.to_string())
        }
    }
}
