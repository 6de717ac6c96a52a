use spatio_polygon::{Point, Polygon, PolygonError};

#[test]
fn test_polygon_marshal() {
    let polygon = Polygon::from_coords(&[(1.2, 3.4), (5.6, 7.8)]);
    let expected = r#"{"type":"Polygon","coordinates":[[1.2,3.4],[5.6,7.8]]}"#;
    assert_eq!(polygon.to_geojson().unwrap(), expected);
    assert_eq!(serde_json::to_string(&polygon).unwrap(), expected);
}

#[test]
fn test_polygon_unmarshal() {
    let polygon: Polygon =
        serde_json::from_str(r#"{"type":"Polygon","coordinates":[[1.2,3.4],[5.6,7.8]]}"#)
            .expect("Failed to decode polygon");
    assert_eq!(polygon.points(), &[Point::new(1.2, 3.4), Point::new(5.6, 7.8)]);
}

#[test]
fn test_polygon_embedded_in_document() {
    #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
    struct Zone {
        name: String,
        area: Polygon,
    }

    let zone = Zone {
        name: "depot".to_string(),
        area: Polygon::from_coords(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 0.0)]),
    };
    let json = serde_json::to_string(&zone).unwrap();
    assert_eq!(
        json,
        r#"{"name":"depot","area":{"type":"Polygon","coordinates":[[0.0,0.0],[2.0,0.0],[2.0,2.0],[0.0,0.0]]}}"#
    );

    let decoded: Zone = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, zone);
    assert!(decoded.area.contains(&Point::new(1.5, 0.5)));
}

#[test]
fn test_geojson_and_wkt_agree() {
    let polygon: Polygon = "POLYGON((-1 10, 10 1, 1 -10, -10 -1, -1 10))".parse().unwrap();
    let json = polygon.to_geojson().unwrap();
    let decoded = Polygon::from_geojson(&json).unwrap();
    assert_eq!(decoded.to_string(), "POLYGON((-1 10, 10 1, 1 -10, -10 -1, -1 10))");
}

#[test]
fn test_structural_errors() {
    let err = Polygon::from_geojson(r#"{"type":"LineString","coordinates":[[1,2]]}"#).unwrap_err();
    assert!(matches!(err, PolygonError::Json(_)));
    assert!(err.to_string().starts_with("Invalid GeoJSON polygon"));
}
