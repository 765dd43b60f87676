//! GeoJSON exchange format.
//!
//! Input may be a `FeatureCollection` (its first feature is used), a `Feature`, or a bare
//! geometry object. A `MultiPolygon` is reduced to the polygon with the largest outer ring.

use anyhow::{Result, bail, ensure};
use geo::{Area, Coord, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};
use serde_json::{Value, json};
use spatial_id_core::TileError;

/// Parses a GeoJSON document into a single geometry.
///
/// # Errors
///
/// Returns [`TileError::InvalidFormat`] for invalid JSON, unsupported object types, or
/// malformed coordinates.
pub fn parse_geojson(json: &str) -> Result<Geometry<f64>> {
	let value: Value = match serde_json::from_str(json) {
		Ok(value) => value,
		Err(e) => bail!(TileError::InvalidFormat(format!("invalid GeoJSON: {e}"))),
	};
	geometry_from_value(&value)
}

/// Converts an already parsed GeoJSON value, see [`parse_geojson`].
pub fn geometry_from_value(value: &Value) -> Result<Geometry<f64>> {
	match object_type(value)? {
		"FeatureCollection" => {
			let Some(first) = value["features"].get(0) else {
				bail!(invalid("FeatureCollection has no features"));
			};
			geometry_from_value(first)
		}
		"Feature" => match value.get("geometry") {
			Some(geometry) if !geometry.is_null() => parse_geometry(geometry),
			_ => bail!(invalid("Feature has no geometry")),
		},
		_ => parse_geometry(value),
	}
}

/// Renders a polygon as a GeoJSON `Polygon` object.
pub fn polygon_to_geojson(polygon: &Polygon<f64>) -> Value {
	let ring = |line: &LineString<f64>| line.coords().map(|c| json!([c.x, c.y])).collect::<Vec<_>>();
	let mut rings = vec![ring(polygon.exterior())];
	rings.extend(polygon.interiors().iter().map(ring));
	json!({ "type": "Polygon", "coordinates": rings })
}

fn invalid(message: &str) -> TileError {
	TileError::InvalidFormat(message.to_string())
}

fn object_type(value: &Value) -> Result<&str> {
	let object_type = value.get("type").and_then(Value::as_str);
	Ok(object_type.ok_or_else(|| invalid("GeoJSON object must have a string 'type'"))?)
}

fn parse_geometry(value: &Value) -> Result<Geometry<f64>> {
	let geometry_type = object_type(value)?;
	let Some(coordinates) = value.get("coordinates") else {
		bail!(invalid(&format!("{geometry_type} must have coordinates")));
	};

	let geometry = match geometry_type {
		"Point" => Geometry::Point(Point::from(parse_position(coordinates)?)),
		"LineString" => Geometry::LineString(parse_line(coordinates)?),
		"Polygon" => Geometry::Polygon(parse_polygon(coordinates)?),
		"MultiPoint" => Geometry::MultiPoint(MultiPoint::new(
			list(coordinates)?
				.iter()
				.map(|p| parse_position(p).map(Point::from))
				.collect::<Result<_>>()?,
		)),
		"MultiLineString" => Geometry::MultiLineString(MultiLineString::new(
			list(coordinates)?.iter().map(parse_line).collect::<Result<_>>()?,
		)),
		"MultiPolygon" => {
			let polygons: Vec<Polygon<f64>> = list(coordinates)?.iter().map(parse_polygon).collect::<Result<_>>()?;
			Geometry::Polygon(largest_polygon(MultiPolygon::new(polygons))?)
		}
		_ => bail!(invalid(&format!("unsupported geometry type '{geometry_type}'"))),
	};
	Ok(geometry)
}

/// The polygon whose outer ring encloses the largest area.
fn largest_polygon(multi: MultiPolygon<f64>) -> Result<Polygon<f64>> {
	let outer_area = |p: &Polygon<f64>| Polygon::new(p.exterior().clone(), vec![]).unsigned_area();
	let largest = multi.into_iter().max_by(|a, b| outer_area(a).total_cmp(&outer_area(b)));
	Ok(largest.ok_or_else(|| invalid("MultiPolygon has no polygons"))?)
}

fn list(value: &Value) -> Result<&Vec<Value>> {
	Ok(value
		.as_array()
		.ok_or_else(|| invalid(&format!("expected an array, got {value}")))?)
}

fn parse_position(value: &Value) -> Result<Coord<f64>> {
	let position = list(value)?;
	ensure!(
		position.len() >= 2,
		invalid(&format!("a position needs at least 2 numbers, got {value}"))
	);
	let number = |v: &Value| v.as_f64().ok_or_else(|| invalid(&format!("expected a number, got {v}")));
	Ok(Coord {
		x: number(&position[0])?,
		y: number(&position[1])?,
	})
}

fn parse_line(value: &Value) -> Result<LineString<f64>> {
	Ok(LineString::new(
		list(value)?.iter().map(parse_position).collect::<Result<_>>()?,
	))
}

fn parse_polygon(value: &Value) -> Result<Polygon<f64>> {
	let mut rings = list(value)?.iter().map(parse_line);
	let Some(exterior) = rings.next() else {
		bail!(invalid("a polygon needs an outer ring"));
	};
	Ok(Polygon::new(exterior?, rings.collect::<Result<_>>()?))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use spatial_id_core::ErrorKind;

	const SQUARE: &str = r#"{"type":"Polygon","coordinates":[[[0,0],[2,0],[2,2],[0,2],[0,0]]]}"#;

	fn square() -> Polygon<f64> {
		Polygon::new(LineString::from(vec![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0)]), vec![])
	}

	#[test]
	fn bare_geometry() {
		assert_eq!(parse_geojson(SQUARE).unwrap(), Geometry::Polygon(square()));
	}

	#[test]
	fn feature_and_collection_unwrap_to_the_first_geometry() {
		let feature = format!(r#"{{"type":"Feature","properties":{{"name":"a"}},"geometry":{SQUARE}}}"#);
		assert_eq!(parse_geojson(&feature).unwrap(), Geometry::Polygon(square()));

		let collection = format!(
			r#"{{"type":"FeatureCollection","features":[{feature},{{"type":"Feature","geometry":{{"type":"Point","coordinates":[5,5]}}}}]}}"#
		);
		assert_eq!(parse_geojson(&collection).unwrap(), Geometry::Polygon(square()));
	}

	#[test]
	fn multi_polygon_keeps_the_largest_outer_ring() {
		let json = r#"{"type":"MultiPolygon","coordinates":[
			[[[10,10],[11,10],[11,11],[10,11],[10,10]]],
			[[[0,0],[2,0],[2,2],[0,2],[0,0]]],
			[[[20,20],[20.5,20],[20.5,20.5],[20,20]]]
		]}"#;
		assert_eq!(parse_geojson(json).unwrap(), Geometry::Polygon(square()));
	}

	#[test]
	fn other_geometry_types() {
		let point = parse_geojson(r#"{"type":"Point","coordinates":[139.7,35.6,12.0]}"#).unwrap();
		assert_eq!(point, Geometry::Point(Point::new(139.7, 35.6)));

		let line = parse_geojson(r#"{"type":"LineString","coordinates":[[0,0],[1,1]]}"#).unwrap();
		assert_eq!(line, Geometry::LineString(LineString::from(vec![(0.0, 0.0), (1.0, 1.0)])));

		let points = parse_geojson(r#"{"type":"MultiPoint","coordinates":[[0,0],[1,1]]}"#).unwrap();
		assert_eq!(
			points,
			Geometry::MultiPoint(MultiPoint::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]))
		);

		let lines = parse_geojson(r#"{"type":"MultiLineString","coordinates":[[[0,0],[1,1]],[[2,2],[3,3]]]}"#).unwrap();
		let Geometry::MultiLineString(lines) = lines else {
			panic!("expected a MultiLineString");
		};
		assert_eq!(lines.0.len(), 2);
	}

	#[rstest]
	#[case("not json")]
	#[case(r#"{"coordinates":[0,0]}"#)]
	#[case(r#"{"type":"Point"}"#)]
	#[case(r#"{"type":"Point","coordinates":[0]}"#)]
	#[case(r#"{"type":"Point","coordinates":["a","b"]}"#)]
	#[case(r#"{"type":"Polygon","coordinates":[]}"#)]
	#[case(r#"{"type":"MultiPolygon","coordinates":[]}"#)]
	#[case(r#"{"type":"GeometryCollection","geometries":[]}"#)]
	#[case(r#"{"type":"Feature","geometry":null}"#)]
	#[case(r#"{"type":"FeatureCollection","features":[]}"#)]
	fn rejects_malformed_input(#[case] json: &str) {
		let err = parse_geojson(json).unwrap_err();
		assert_eq!(TileError::kind_of(&err), Some(ErrorKind::InvalidFormat), "{json}");
	}

	#[test]
	fn polygon_output() {
		assert_eq!(
			polygon_to_geojson(&square()),
			json!({"type": "Polygon", "coordinates": [[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0], [0.0, 0.0]]]})
		);
	}

	#[test]
	fn polygon_output_parses_back() {
		let json = polygon_to_geojson(&square()).to_string();
		assert_eq!(parse_geojson(&json).unwrap(), Geometry::Polygon(square()));
	}
}
