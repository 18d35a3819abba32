//! `GeoJSON` export of dashboard rows.

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use outbreak_map_report_models::FilteredRow;

/// Converts rows into a point `FeatureCollection`. Each feature carries the
/// row's table fields and radius as properties.
#[must_use]
pub fn to_feature_collection(rows: &[FilteredRow]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: rows.iter().map(to_feature).collect(),
        foreign_members: None,
    }
}

fn to_feature(row: &FilteredRow) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("date".to_string(), row.date.clone().into());
    properties.insert(
        "districts".to_string(),
        serde_json::Value::from(row.districts.clone()),
    );
    properties.insert(
        "relevant_outcome_count".to_string(),
        row.relevant_outcome_count.into(),
    );
    properties.insert(
        "caseload_phrases".to_string(),
        row.caseload_phrases.clone().into(),
    );
    properties.insert(
        "matched_disease".to_string(),
        serde_json::Value::from(row.matched_disease.clone()),
    );
    properties.insert("radius".to_string(), row.radius.into());

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(row.coordinates.to_vec()))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_one_point_per_row_in_lon_lat_order() {
        let row = FilteredRow {
            date: "01/06/2024".to_string(),
            latitude: 20.0,
            longitude: 10.0,
            districts: vec!["X".to_string()],
            relevant_outcome_count: 50.0,
            caseload_phrases: "50 cases".to_string(),
            matched_disease: vec!["dengue".to_string()],
            coordinates: [10.0, 20.0],
            radius: 1000.0,
        };
        let collection = to_feature_collection(&[row]);
        assert_eq!(collection.features.len(), 1);

        let json = serde_json::to_value(&collection).unwrap();
        assert_eq!(json["type"], "FeatureCollection");
        let feature = &json["features"][0];
        assert_eq!(feature["geometry"]["type"], "Point");
        assert_eq!(feature["geometry"]["coordinates"], serde_json::json!([10.0, 20.0]));
        assert_eq!(feature["properties"]["caseload_phrases"], "50 cases");
        assert_eq!(feature["properties"]["radius"], 1000.0);
    }

    #[test]
    fn empty_rows_give_empty_collection() {
        assert!(to_feature_collection(&[]).features.is_empty());
    }
}
