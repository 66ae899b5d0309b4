use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// a time-windowed, tag-filtered change query against the Overpass API
/// for a single named region. see
/// <https://wiki.openstreetmap.org/wiki/Overpass_API/Language_Guide>
///
/// rendering via [`Display`] produces the full QL program: the region is
/// resolved to an area by name, and four way clauses are unioned, one
/// unfiltered plus one each requiring the `oneway`, `maxspeed` and `access`
/// tags, all restricted to ways edited after the window start. region names
/// are interpolated without validation; an unknown name resolves no area
/// and simply matches nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeQuerySpec {
    /// administrative area name used to scope the query
    region: String,
    /// only ways with a modification timestamp after this date match
    newer_than: NaiveDate,
    /// highway class values joined into a regex alternation
    highway_filters: Vec<String>,
}

impl ChangeQuerySpec {
    pub fn new(region: &str, newer_than: NaiveDate, highway_filters: &[String]) -> ChangeQuerySpec {
        ChangeQuerySpec {
            region: region.to_string(),
            newer_than,
            highway_filters: highway_filters.to_vec(),
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// window start rendered in the timestamp format Overpass expects
    /// for `newer` filters, pinned to midnight UTC.
    fn newer_than_timestamp(&self) -> String {
        format!("{}T00:00:00Z", self.newer_than.format("%Y-%m-%d"))
    }
}

impl Display for ChangeQuerySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hw = self.highway_filters.iter().join("|");
        let newer = self.newer_than_timestamp();
        writeln!(f, "[out:json][timeout:180];")?;
        writeln!(f, "area[\"name\"=\"{}\"]->.a;", self.region)?;
        writeln!(f, "(")?;
        writeln!(f, "  way[\"highway\"~\"{hw}\"](newer:\"{newer}\")(area.a);")?;
        for tag in ["oneway", "maxspeed", "access"] {
            writeln!(
                f,
                "  way[\"highway\"~\"{hw}\"][\"{tag}\"](newer:\"{newer}\")(area.a);"
            )?;
        }
        writeln!(f, ");")?;
        write!(f, "out geom;")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_query_rendering() {
        let spec = ChangeQuerySpec::new(
            "Ankara",
            date(2025, 7, 1),
            &[String::from("motorway"), String::from("trunk")],
        );
        let expected = [
            "[out:json][timeout:180];",
            "area[\"name\"=\"Ankara\"]->.a;",
            "(",
            "  way[\"highway\"~\"motorway|trunk\"](newer:\"2025-07-01T00:00:00Z\")(area.a);",
            "  way[\"highway\"~\"motorway|trunk\"][\"oneway\"](newer:\"2025-07-01T00:00:00Z\")(area.a);",
            "  way[\"highway\"~\"motorway|trunk\"][\"maxspeed\"](newer:\"2025-07-01T00:00:00Z\")(area.a);",
            "  way[\"highway\"~\"motorway|trunk\"][\"access\"](newer:\"2025-07-01T00:00:00Z\")(area.a);",
            ");",
            "out geom;",
        ]
        .join("\n");
        assert_eq!(spec.to_string(), expected);
    }

    #[test]
    fn test_single_filter_has_no_alternation_bar() {
        let spec = ChangeQuerySpec::new("İzmir", date(2025, 1, 15), &[String::from("primary")]);
        let rendered = spec.to_string();
        assert!(rendered.contains("way[\"highway\"~\"primary\"](newer:"));
        assert!(!rendered.contains("primary|"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let spec = ChangeQuerySpec::new(
            "Bursa",
            date(2025, 3, 2),
            &[String::from("secondary"), String::from("tertiary")],
        );
        assert_eq!(spec.to_string(), spec.to_string());
    }
}
