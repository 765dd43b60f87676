use crate::tile_polygon;
use anyhow::{Result, bail};
use geo::{BoundingRect, Geometry, Intersects, Polygon};
use spatial_id_core::{
	GeoBBox, TileAddress, TileError,
	slippy::{DEFAULT_BBOX_MAX_ZOOM, bbox_to_tile},
};

/// Decides whether a tile footprint and a geometry overlap.
pub trait PolygonIntersector {
	fn intersects(&self, tile: &Polygon<f64>, geometry: &Geometry<f64>) -> bool;
}

/// [`PolygonIntersector`] backed by the `geo` crate. Touching boundaries count as intersecting.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeoIntersector;

impl PolygonIntersector for GeoIntersector {
	fn intersects(&self, tile: &Polygon<f64>, geometry: &Geometry<f64>) -> bool {
		geometry.intersects(tile)
	}
}

/// `true` if the tile's horizontal footprint intersects `geometry`.
pub fn intersects(address: &TileAddress, geometry: &Geometry<f64>) -> bool {
	intersects_with(address, geometry, &GeoIntersector)
}

pub fn intersects_with(address: &TileAddress, geometry: &Geometry<f64>, intersector: &impl PolygonIntersector) -> bool {
	intersector.intersects(&tile_polygon(address), geometry)
}

/// 2-D bounding box of a geometry.
///
/// # Errors
///
/// [`TileError::InvalidArgument`] if the geometry is empty or lies outside the degree range.
pub fn geometry_bbox(geometry: &Geometry<f64>) -> Result<GeoBBox> {
	let Some(rect) = geometry.bounding_rect() else {
		bail!(TileError::InvalidArgument("geometry is empty".to_string()));
	};
	GeoBBox::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y)
}

/// Tiles around the geometry that intersect it.
///
/// The smallest tile covering the geometry's bounding box is used as representative, on the
/// floor of `address`. The representative and its 26 neighbours are tested, in the order of
/// [`TileAddress::neighbors_26`] with the representative first.
pub fn intersecting_neighbors(address: &TileAddress, geometry: &Geometry<f64>) -> Result<Vec<TileAddress>> {
	intersecting_neighbors_with(address, geometry, &GeoIntersector, DEFAULT_BBOX_MAX_ZOOM)
}

pub fn intersecting_neighbors_with(
	address: &TileAddress,
	geometry: &Geometry<f64>,
	intersector: &impl PolygonIntersector,
	max_zoom: u8,
) -> Result<Vec<TileAddress>> {
	let bbox = geometry_bbox(geometry)?;
	let slippy = bbox_to_tile(&bbox, max_zoom)?;
	let representative = TileAddress::new(slippy.z, address.f, slippy.x, slippy.y)?;

	let mut candidates = vec![representative];
	candidates.extend(representative.neighbors_26());
	Ok(candidates
		.into_iter()
		.filter(|candidate| intersects_with(candidate, geometry, intersector))
		.collect())
}
