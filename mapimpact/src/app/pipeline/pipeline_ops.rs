use super::{PipelineError, PipelineOutput};
use crate::config::RunConfiguration;
use crate::model::impact::{impact_ops, ImpactResult, RegionAccumulator};
use crate::model::osrm::DistanceSource;
use crate::model::overpass::{extract_segments, ChangeQuerySpec, ChangeSource, Segment};
use geo::Point;
use kdam::{Bar, BarBuilder, BarExt};
use rayon::prelude::*;
use std::sync::{Arc, Mutex};

/// one segment after measurement and classification
struct MeasuredSegment {
    segment: Segment,
    impact: ImpactResult,
    distance_m: f64,
    start: Point<f64>,
}

/// runs the change-impact analysis across all configured regions.
///
/// per region: render the change query, fetch, extract segments, measure
/// and classify each, and fold into a summary. a fetch failure or an empty
/// change set skips the region; a region whose distance measurements all
/// fail still appears, with zeroed distances. summaries come back ordered
/// by net impact score descending, ties keeping region selection order.
/// if no region survives, the run terminates with
/// [`PipelineError::NoResults`].
pub fn run_analysis<C, D>(
    config: &RunConfiguration,
    changes: &C,
    distances: &D,
) -> Result<PipelineOutput, PipelineError>
where
    C: ChangeSource,
    D: DistanceSource,
{
    if config.regions.is_empty() {
        return Err(PipelineError::InvalidInput(String::from(
            "no regions selected",
        )));
    }
    if config.highway_filters.is_empty() {
        return Err(PipelineError::InvalidInput(String::from(
            "no highway filters selected",
        )));
    }

    let mut summaries = vec![];
    let mut points = vec![];

    for region in config.regions.iter() {
        let spec = ChangeQuerySpec::new(region, config.start_date, &config.highway_filters);
        let response = match changes.fetch_changes(&spec) {
            Ok(r) => r,
            Err(e) => {
                log::warn!("skipping region '{region}': {e}");
                continue;
            }
        };

        // only ways with two or more geometry points can be measured; the
        // rest of the pipeline never sees the others
        let measurable: Vec<(Segment, Point<f64>, Point<f64>)> = extract_segments(&response)
            .filter_map(|segment| {
                segment
                    .endpoints()
                    .map(|(start, end)| (segment, start, end))
            })
            .collect();
        if measurable.is_empty() {
            log::info!("region '{region}' returned no measurable changed ways");
            continue;
        }
        log::info!(
            "region '{region}': measuring {} changed ways",
            measurable.len()
        );

        let measured = if config.parallelize {
            measure_parallel(distances, region, measurable)?
        } else {
            measure_sequential(distances, region, measurable)?
        };

        // reducers are all commutative sums and counts, so the parallel
        // fold merges private accumulators without locks
        let accumulator = if config.parallelize {
            measured
                .par_iter()
                .fold(RegionAccumulator::new, |mut acc, m| {
                    acc.add(&m.segment, &m.impact, m.distance_m);
                    acc
                })
                .reduce(RegionAccumulator::new, RegionAccumulator::merge)
        } else {
            measured
                .iter()
                .fold(RegionAccumulator::new(), |mut acc, m| {
                    acc.add(&m.segment, &m.impact, m.distance_m);
                    acc
                })
        };
        summaries.push(accumulator.build(region));
        points.extend(measured.iter().map(|m| m.start));
    }

    if summaries.is_empty() {
        return Err(PipelineError::NoResults);
    }
    // stable sort keeps insertion (selection) order among equal scores
    summaries.sort_by(|a, b| b.eta_net_impact_score.total_cmp(&a.eta_net_impact_score));
    Ok(PipelineOutput { summaries, points })
}

fn measure_one<D: DistanceSource>(
    distances: &D,
    region: &str,
    segment: Segment,
    start: Point<f64>,
    end: Point<f64>,
) -> MeasuredSegment {
    // measurement failures downgrade to the zero-distance sentinel so a
    // single unroutable segment cannot abort its region
    let distance_m = match distances.driving_distance_meters(&start, &end) {
        Ok(d) => d,
        Err(e) => {
            log::debug!("distance measurement failed in '{region}', recording zero: {e}");
            0.0
        }
    };
    let impact = impact_ops::eta_proxy_change(&segment.tags, distance_m);
    MeasuredSegment {
        segment,
        impact,
        distance_m,
        start,
    }
}

fn measure_sequential<D: DistanceSource>(
    distances: &D,
    region: &str,
    measurable: Vec<(Segment, Point<f64>, Point<f64>)>,
) -> Result<Vec<MeasuredSegment>, PipelineError> {
    let mut bar = region_bar(region, measurable.len())?;
    let mut measured = Vec::with_capacity(measurable.len());
    for (segment, start, end) in measurable {
        measured.push(measure_one(distances, region, segment, start, end));
        let _ = bar.update(1);
    }
    Ok(measured)
}

fn measure_parallel<D: DistanceSource>(
    distances: &D,
    region: &str,
    measurable: Vec<(Segment, Point<f64>, Point<f64>)>,
) -> Result<Vec<MeasuredSegment>, PipelineError> {
    let bar: Arc<Mutex<Bar>> = Arc::new(Mutex::new(region_bar(region, measurable.len())?));
    let measured = measurable
        .into_par_iter()
        .map(|(segment, start, end)| {
            let m = measure_one(distances, region, segment, start, end);
            if let Ok(mut bar) = bar.lock() {
                let _ = bar.update(1);
            }
            m
        })
        .collect();
    Ok(measured)
}

fn region_bar(region: &str, total: usize) -> Result<Bar, PipelineError> {
    BarBuilder::default()
        .desc(format!("measuring {region}"))
        .total(total)
        .build()
        .map_err(PipelineError::ProgressBarError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::osrm::OsrmError;
    use crate::model::overpass::{
        OverpassElement, OverpassError, OverpassGeomPoint, OverpassResponse,
    };
    use chrono::NaiveDate;
    use std::collections::HashMap;

    /// canned change-detection service keyed by region name; regions
    /// missing from the map act as fetch failures
    struct FixtureChanges {
        by_region: HashMap<String, OverpassResponse>,
    }

    impl ChangeSource for FixtureChanges {
        fn fetch_changes(
            &self,
            spec: &ChangeQuerySpec,
        ) -> Result<OverpassResponse, OverpassError> {
            self.by_region
                .get(spec.region())
                .cloned()
                .ok_or(OverpassError::ClientError(String::from("boom")))
        }
    }

    /// canned routing service returning one fixed distance, or failing
    struct FixtureDistances {
        distance_m: Option<f64>,
    }

    impl DistanceSource for FixtureDistances {
        fn driving_distance_meters(
            &self,
            _start: &Point<f64>,
            _end: &Point<f64>,
        ) -> Result<f64, OsrmError> {
            self.distance_m.ok_or(OsrmError::NoRoutes)
        }
    }

    fn way(tag_keys: &[&str], n_points: usize) -> OverpassElement {
        OverpassElement {
            element_type: String::from("way"),
            tags: tag_keys
                .iter()
                .map(|k| (k.to_string(), String::from("yes")))
                .collect(),
            geometry: Some(
                (0..n_points)
                    .map(|i| OverpassGeomPoint {
                        lat: 39.0 + i as f64 * 0.01,
                        lon: 32.0 + i as f64 * 0.01,
                    })
                    .collect(),
            ),
        }
    }

    fn config(regions: &[&str]) -> RunConfiguration {
        RunConfiguration {
            regions: regions.iter().map(|r| r.to_string()).collect(),
            start_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            ..Default::default()
        }
    }

    fn fixtures(entries: Vec<(&str, Vec<OverpassElement>)>) -> FixtureChanges {
        FixtureChanges {
            by_region: entries
                .into_iter()
                .map(|(region, elements)| (region.to_string(), OverpassResponse { elements }))
                .collect(),
        }
    }

    #[test]
    fn test_failed_region_absent_from_output() {
        // region X fails to fetch, region Y succeeds; only Y appears
        let changes = fixtures(vec![("Y", vec![way(&["maxspeed"], 2)])]);
        let distances = FixtureDistances {
            distance_m: Some(1000.0),
        };
        let output = run_analysis(&config(&["X", "Y"]), &changes, &distances).unwrap();
        assert_eq!(output.summaries.len(), 1);
        assert_eq!(output.summaries[0].region, "Y");
    }

    #[test]
    fn test_global_empty_result() {
        let changes = fixtures(vec![("Y", vec![])]);
        let distances = FixtureDistances {
            distance_m: Some(1000.0),
        };
        let result = run_analysis(&config(&["X", "Y"]), &changes, &distances);
        assert!(matches!(result, Err(PipelineError::NoResults)));
    }

    #[test]
    fn test_all_measurements_failed_region_is_retained() {
        // fetch succeeds but every routing call fails: the region still
        // appears, with zeroed distances
        let changes = fixtures(vec![("Y", vec![way(&["oneway"], 2), way(&[], 3)])]);
        let distances = FixtureDistances { distance_m: None };
        let output = run_analysis(&config(&["Y"]), &changes, &distances).unwrap();
        let summary = &output.summaries[0];
        assert_eq!(summary.changed_ways, 2);
        assert_eq!(summary.total_km, 0.0);
        assert_eq!(summary.mean_delta_km, 0.0);
        assert_eq!(summary.eta_negative_ratio, 50.0);
    }

    #[test]
    fn test_unmeasurable_ways_are_excluded() {
        // one-point ways never reach measurement or the summary counts
        let changes = fixtures(vec![("Y", vec![way(&["maxspeed"], 1), way(&["oneway"], 2)])]);
        let distances = FixtureDistances {
            distance_m: Some(2000.0),
        };
        let output = run_analysis(&config(&["Y"]), &changes, &distances).unwrap();
        let summary = &output.summaries[0];
        assert_eq!(summary.changed_ways, 1);
        assert_eq!(summary.oneway_changes, 1);
        assert_eq!(summary.maxspeed_changes, 0);
        assert_eq!(output.points.len(), 1);
    }

    #[test]
    fn test_output_sorted_by_net_impact_score() {
        let changes = fixtures(vec![
            ("Neg", vec![way(&["oneway"], 2)]),
            ("Pos", vec![way(&["maxspeed"], 2)]),
            ("Zero", vec![way(&[], 2)]),
        ]);
        let distances = FixtureDistances {
            distance_m: Some(1000.0),
        };
        let output = run_analysis(&config(&["Neg", "Pos", "Zero"]), &changes, &distances).unwrap();
        let order: Vec<&str> = output.summaries.iter().map(|s| s.region.as_str()).collect();
        assert_eq!(order, vec!["Pos", "Zero", "Neg"]);
    }

    #[test]
    fn test_ties_keep_selection_order() {
        let changes = fixtures(vec![
            ("B", vec![way(&[], 2)]),
            ("A", vec![way(&[], 2)]),
        ]);
        let distances = FixtureDistances {
            distance_m: Some(1000.0),
        };
        let output = run_analysis(&config(&["B", "A"]), &changes, &distances).unwrap();
        let order: Vec<&str> = output.summaries.iter().map(|s| s.region.as_str()).collect();
        assert_eq!(order, vec!["B", "A"]);
    }

    #[test]
    fn test_runs_are_idempotent() {
        let changes = fixtures(vec![
            ("Y", vec![way(&["maxspeed"], 2), way(&["oneway", "access"], 4)]),
            ("Z", vec![way(&[], 2)]),
        ]);
        let distances = FixtureDistances {
            distance_m: Some(1750.0),
        };
        let cfg = config(&["Y", "Z"]);
        let first = run_analysis(&cfg, &changes, &distances).unwrap();
        let second = run_analysis(&cfg, &changes, &distances).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let changes = fixtures(vec![(
            "Y",
            vec![
                way(&["maxspeed"], 2),
                way(&["oneway"], 3),
                way(&["access"], 2),
                way(&[], 5),
            ],
        )]);
        let distances = FixtureDistances {
            distance_m: Some(4000.0),
        };
        let mut sequential_cfg = config(&["Y"]);
        sequential_cfg.parallelize = false;
        let mut parallel_cfg = config(&["Y"]);
        parallel_cfg.parallelize = true;
        let sequential = run_analysis(&sequential_cfg, &changes, &distances).unwrap();
        let parallel = run_analysis(&parallel_cfg, &changes, &distances).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_empty_region_selection_is_invalid() {
        let changes = fixtures(vec![]);
        let distances = FixtureDistances { distance_m: None };
        let result = run_analysis(&config(&[]), &changes, &distances);
        assert!(matches!(result, Err(PipelineError::InvalidInput(_))));
    }
}
