use geo::{LineString, Polygon};
use spatial_id_core::{GeoBBox, TileAddress};

/// Closed rectangular ring around a bounding box, counter-clockwise from the south-west corner.
pub fn bbox_polygon(bbox: &GeoBBox) -> Polygon<f64> {
	Polygon::new(
		LineString::from(vec![
			(bbox.x_min, bbox.y_min),
			(bbox.x_max, bbox.y_min),
			(bbox.x_max, bbox.y_max),
			(bbox.x_min, bbox.y_max),
			(bbox.x_min, bbox.y_min),
		]),
		vec![],
	)
}

/// Horizontal footprint of a tile. The floor is ignored.
pub fn tile_polygon(address: &TileAddress) -> Polygon<f64> {
	bbox_polygon(&address.to_geo_bbox())
}
