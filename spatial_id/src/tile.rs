use crate::TilePayload;
use anyhow::{Result, ensure};
use spatial_id_core::{
	GeoBBox, GeoPoint, TileAddress, TileError, decode_tilehash,
	slippy::{DEFAULT_BBOX_MAX_ZOOM, point_to_tile},
};
use spatial_id_geometry::{GeoIntersector, Geometry, Polygon, intersecting_neighbors_with, intersects, tile_polygon};
use std::{
	fmt::{self, Debug, Display},
	str::FromStr,
};

/// Zoom level used when a tile is created from a point without an explicit zoom.
pub const DEFAULT_ZOOM: u8 = 25;

/// One spatial tile together with its derived attributes.
///
/// All attributes are computed once in [`Tile::from_address`]; every navigation method
/// returns a new tile.
#[derive(Clone, PartialEq)]
pub struct Tile {
	address: TileAddress,
	tilehash: String,
	path: String,
	center: GeoPoint,
	bbox: GeoBBox,
}

impl Tile {
	/// Builds a tile and derives all of its attributes.
	///
	/// # Errors
	///
	/// [`TileError::InvalidArgument`] for a malformed address, [`TileError::OutOfRange`] if
	/// the floor cannot be written as a tilehash at this zoom level.
	pub fn from_address(address: TileAddress) -> Result<Tile> {
		ensure!(
			address.is_valid(),
			TileError::InvalidArgument(format!("{address:?} is not a valid tile address"))
		);
		Ok(Tile {
			tilehash: address.to_tilehash()?,
			path: address.to_path(),
			center: address.to_center_geo_point(),
			bbox: address.to_geo_bbox(),
			address,
		})
	}

	pub fn from_geo_point(point: &GeoPoint, zoom: u8) -> Result<Tile> {
		Tile::from_address(TileAddress::from_geo_point(point, zoom)?)
	}

	/// Tile containing `point` at [`DEFAULT_ZOOM`].
	pub fn from_center(point: &GeoPoint) -> Result<Tile> {
		Tile::from_geo_point(point, DEFAULT_ZOOM)
	}

	/// Tile containing the horizontal position on an explicitly given floor.
	pub fn from_point(lng: f64, lat: f64, f: i64, zoom: u8) -> Result<Tile> {
		GeoPoint::new(lng, lat, 0.0).check()?;
		let slippy = point_to_tile(lng, lat, zoom)?;
		Tile::from_address(TileAddress::new(zoom, f, slippy.x, slippy.y)?)
	}

	/// Parses a path string (`/z/f/x/y`, `z/f/x/y` or `z/x/y`) or a tilehash.
	///
	/// Input containing a `/` is always read as a path.
	pub fn parse(input: &str) -> Result<Tile> {
		let address = if input.contains('/') {
			TileAddress::parse_path(input)?
		} else {
			decode_tilehash(input.trim())?
		};
		Tile::from_address(address)
	}

	pub fn address(&self) -> &TileAddress {
		&self.address
	}

	pub fn zoom(&self) -> u8 {
		self.address.z
	}

	pub fn tilehash(&self) -> &str {
		&self.tilehash
	}

	/// Identifier of the tile; the tilehash.
	pub fn id(&self) -> &str {
		&self.tilehash
	}

	pub fn path(&self) -> &str {
		&self.path
	}

	pub fn center(&self) -> GeoPoint {
		self.center
	}

	/// Altitude of the tile center in meters.
	pub fn alt(&self) -> f64 {
		self.center.alt
	}

	pub fn bbox(&self) -> &GeoBBox {
		&self.bbox
	}

	pub fn to_payload(&self) -> TilePayload {
		TilePayload::from(self)
	}

	pub fn move_by(&self, df: i64, dx: i64, dy: i64) -> Result<Tile> {
		Tile::from_address(self.address.move_by(df, dx, dy)?)
	}

	pub fn up(&self, by: i64) -> Result<Tile> {
		self.move_by(by, 0, 0)
	}

	pub fn down(&self, by: i64) -> Result<Tile> {
		self.move_by(negate(by)?, 0, 0)
	}

	/// Moves towards the north pole, i.e. to smaller `y`.
	pub fn north(&self, by: i64) -> Result<Tile> {
		self.move_by(0, 0, negate(by)?)
	}

	pub fn south(&self, by: i64) -> Result<Tile> {
		self.move_by(0, 0, by)
	}

	/// Moves east; columns wrap around the antimeridian.
	pub fn east(&self, by: i64) -> Result<Tile> {
		self.move_by(0, by, 0)
	}

	pub fn west(&self, by: i64) -> Result<Tile> {
		self.move_by(0, negate(by)?, 0)
	}

	pub fn parent(&self) -> Result<Tile> {
		Tile::from_address(self.address.parent()?)
	}

	/// Ancestor at the absolute zoom level `zoom`.
	pub fn parent_at(&self, zoom: u8) -> Result<Tile> {
		Tile::from_address(self.address.at_zoom(zoom)?)
	}

	pub fn children(&self) -> Result<Vec<Tile>> {
		self.address.children()?.into_iter().map(Tile::from_address).collect()
	}

	/// The 26-neighbourhood. Neighbours that cannot exist are left out.
	pub fn surroundings(&self) -> Vec<Tile> {
		to_tiles(self.address.neighbors_26(), &self.address)
	}

	pub fn to_polygon(&self) -> Polygon<f64> {
		tile_polygon(&self.address)
	}

	pub fn intersects(&self, geometry: &Geometry<f64>) -> bool {
		intersects(&self.address, geometry)
	}

	/// Tiles on this tile's floor, and the floors above and below, around `geometry` that
	/// intersect it.
	pub fn intersecting_neighbors(&self, geometry: &Geometry<f64>) -> Result<Vec<Tile>> {
		self.intersecting_neighbors_with_max_zoom(geometry, DEFAULT_BBOX_MAX_ZOOM)
	}

	pub fn intersecting_neighbors_with_max_zoom(&self, geometry: &Geometry<f64>, max_zoom: u8) -> Result<Vec<Tile>> {
		let found = intersecting_neighbors_with(&self.address, geometry, &GeoIntersector, max_zoom)?;
		Ok(found.into_iter().filter_map(|a| Tile::from_address(a).ok()).collect())
	}
}

fn negate(by: i64) -> Result<i64> {
	by.checked_neg()
		.ok_or_else(|| TileError::OutOfRange(format!("cannot move by {by} in the opposite direction")).into())
}

fn to_tiles(addresses: Vec<TileAddress>, exclude: &TileAddress) -> Vec<Tile> {
	addresses
		.into_iter()
		.filter(|address| address != exclude)
		.filter_map(|address| Tile::from_address(address).ok())
		.collect()
}

impl FromStr for Tile {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		Tile::parse(s)
	}
}

impl TryFrom<TileAddress> for Tile {
	type Error = anyhow::Error;

	fn try_from(address: TileAddress) -> Result<Self> {
		Tile::from_address(address)
	}
}

impl Display for Tile {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.path)
	}
}

impl Debug for Tile {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Tile({}, {:?})", self.path, self.tilehash)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;
	use rstest::rstest;
	use spatial_id_core::ErrorKind;
	use spatial_id_geometry::parse_geojson;

	fn tile(path: &str) -> Tile {
		Tile::parse(path).unwrap()
	}

	fn kind(result: Result<Tile>) -> Option<ErrorKind> {
		TileError::kind_of(&result.unwrap_err())
	}

	fn tokyo() -> Tile {
		Tile::from_geo_point(&GeoPoint::new(139.767125, 35.681236, 10.0), 18).unwrap()
	}

	#[test]
	fn derived_attributes() {
		let t = tokyo();
		assert_eq!(t.address(), &TileAddress::new(18, 0, 232847, 103226).unwrap());
		assert_eq!(t.zoom(), 18);
		assert_eq!(t.path(), "/18/0/232847/103226");
		assert_eq!(t.tilehash(), "244113223421334242");
		assert_eq!(t.id(), t.tilehash());
		assert_relative_eq!(t.center().lng, 139.7673797607422, epsilon = 1e-9);
		assert_relative_eq!(t.center().lat, 35.68128286002356, epsilon = 1e-9);
		assert_eq!(t.alt(), 64.0);
		assert!(t.bbox().contains(&t.center()));
		assert_eq!(t.to_string(), "/18/0/232847/103226");
		assert_eq!(format!("{t:?}"), "Tile(/18/0/232847/103226, \"244113223421334242\")");
	}

	#[test]
	fn default_zoom() {
		let t = Tile::from_center(&GeoPoint::new(139.767125, 35.681236, 10.0)).unwrap();
		assert_eq!(t.path(), "/25/10/29804456/13212997");
		assert_eq!(t.tilehash(), "2441132234213342423216353");
	}

	#[rstest]
	#[case("/18/0/232847/103226")]
	#[case("18/0/232847/103226")]
	#[case("18/232847/103226")]
	#[case(" /18/0/232847/103226 ")]
	#[case("244113223421334242")]
	fn parse_path_or_tilehash(#[case] input: &str) {
		assert_eq!(tile(input), tokyo());
		assert_eq!(input.parse::<Tile>().unwrap(), tokyo());
	}

	#[test]
	fn parse_root() {
		let root = tile("");
		assert_eq!(root.address(), &TileAddress::ROOT);
		assert_eq!(root.path(), "/0/0/0/0");
		assert_eq!(root.tilehash(), "");
	}

	#[rstest]
	#[case("/18/0", ErrorKind::InvalidFormat)]
	#[case("/a/b/c/d", ErrorKind::InvalidFormat)]
	#[case("/2/0/4/0", ErrorKind::InvalidArgument)]
	#[case("/2/4/0/0", ErrorKind::OutOfRange)]
	#[case("129", ErrorKind::InvalidFormat)]
	#[case("-", ErrorKind::InvalidFormat)]
	fn parse_errors(#[case] input: &str, #[case] expected: ErrorKind) {
		assert_eq!(kind(Tile::parse(input)), Some(expected));
	}

	#[test]
	fn from_point_uses_the_given_floor() {
		let t = Tile::from_point(139.767125, 35.681236, 3, 18).unwrap();
		assert_eq!(t.path(), "/18/3/232847/103226");
		assert_eq!(kind(Tile::from_point(190.0, 0.0, 0, 4)), Some(ErrorKind::InvalidArgument));
		assert_eq!(kind(Tile::from_point(0.0, 0.0, 0, 32)), Some(ErrorKind::InvalidArgument));
	}

	#[test]
	fn from_address_rejects_bad_addresses() {
		let bad = TileAddress { z: 1, f: 0, x: 2, y: 0 };
		assert_eq!(kind(Tile::from_address(bad)), Some(ErrorKind::InvalidArgument));
		let high = TileAddress { z: 1, f: 2, x: 0, y: 0 };
		assert_eq!(kind(Tile::try_from(high)), Some(ErrorKind::OutOfRange));
	}

	#[rstest]
	#[case("/3/0/4/4", "/3/1/4/4", "/3/-1/4/4", "/3/0/4/3", "/3/0/4/5", "/3/0/5/4", "/3/0/3/4")]
	#[case("/3/2/7/1", "/3/3/7/1", "/3/1/7/1", "/3/2/7/0", "/3/2/7/2", "/3/2/0/1", "/3/2/6/1")]
	#[case("/3/2/0/1", "/3/3/0/1", "/3/1/0/1", "/3/2/0/0", "/3/2/0/2", "/3/2/1/1", "/3/2/7/1")]
	fn directions(
		#[case] start: &str,
		#[case] up: &str,
		#[case] down: &str,
		#[case] north: &str,
		#[case] south: &str,
		#[case] east: &str,
		#[case] west: &str,
	) {
		let t = tile(start);
		assert_eq!(t.up(1).unwrap().path(), up);
		assert_eq!(t.down(1).unwrap().path(), down);
		assert_eq!(t.north(1).unwrap().path(), north);
		assert_eq!(t.south(1).unwrap().path(), south);
		assert_eq!(t.east(1).unwrap().path(), east);
		assert_eq!(t.west(1).unwrap().path(), west);
	}

	#[test]
	fn navigation_is_immutable() {
		let t = tile("/3/0/4/4");
		let moved = t.east(2).unwrap().south(1).unwrap().up(3).unwrap();
		assert_eq!(moved.path(), "/3/3/6/5");
		assert_eq!(moved.tilehash(), moved.address().to_tilehash().unwrap());
		assert_eq!(t.path(), "/3/0/4/4");
		assert_eq!(t.east(-2).unwrap(), t.west(2).unwrap());
	}

	#[test]
	fn moves_that_leave_the_grid() {
		let t = tile("/3/0/4/0");
		assert_eq!(kind(t.north(1)), Some(ErrorKind::OutOfRange));
		assert_eq!(kind(t.up(8)), Some(ErrorKind::OutOfRange));
		assert_eq!(kind(t.down(i64::MIN)), Some(ErrorKind::OutOfRange));
		assert_eq!(t.east(9).unwrap().path(), "/3/0/5/0");
	}

	#[test]
	fn hierarchy() {
		let t = tokyo();
		assert_eq!(t.parent().unwrap().path(), "/17/0/116423/51613");
		assert_eq!(t.parent_at(18).unwrap(), t);
		assert_eq!(t.parent_at(2).unwrap().tilehash(), "24");
		assert_eq!(kind(t.parent_at(19)), Some(ErrorKind::OutOfRange));

		let children = t.children().unwrap();
		assert_eq!(children.len(), 8);
		for (index, child) in children.iter().enumerate() {
			assert_eq!(child.parent().unwrap(), t);
			assert_eq!(child.tilehash(), format!("{}{}", t.tilehash(), index + 1));
		}
	}

	#[test]
	fn negative_floor_hierarchy() {
		let t = tile("-276");
		assert_eq!(t.path(), "/3/-3/5/2");
		assert_eq!(t.parent().unwrap().path(), "/2/-2/2/1");
		assert_eq!(kind(tile("/1/-1/0/0").parent()), Some(ErrorKind::OutOfRange));
		for child in t.children().unwrap() {
			assert!(child.address().f < 0);
			assert_eq!(child.tilehash().len(), 5);
			assert!(child.tilehash().starts_with('-'));
		}
	}

	#[rstest]
	#[case("/4/0/5/5", 26)]
	#[case("/4/0/5/0", 17)]
	#[case("/4/15/5/5", 17)]
	#[case("/1/0/0/0", 11)]
	#[case("/0/0/0/0", 0)]
	fn surroundings(#[case] path: &str, #[case] count: usize) {
		let t = tile(path);
		let around = t.surroundings();
		assert_eq!(around.len(), count);
		assert!(around.iter().all(|n| n != &t));
		assert!(around.iter().all(|n| n.zoom() == t.zoom()));
	}

	#[test]
	fn polygon_and_intersection() {
		let t = tokyo();
		let ring: Vec<(f64, f64)> = t.to_polygon().exterior().coords().map(|c| (c.x, c.y)).collect();
		assert_eq!(ring.len(), 5);
		assert_eq!(ring[0], (t.bbox().x_min, t.bbox().y_min));

		let station = parse_geojson(r#"{"type":"Point","coordinates":[139.767125,35.681236]}"#).unwrap();
		let elsewhere = parse_geojson(r#"{"type":"Point","coordinates":[0,0]}"#).unwrap();
		assert!(t.intersects(&station));
		assert!(t.up(4).unwrap().intersects(&station));
		assert!(!t.intersects(&elsewhere));
	}

	#[test]
	fn intersecting_neighbors() {
		let inner = parse_geojson(
			r#"{"type":"Feature","geometry":{"type":"Polygon","coordinates":[[[139.7668,35.6808],[139.768,35.6808],[139.768,35.6818],[139.7668,35.6818],[139.7668,35.6808]]]}}"#,
		)
		.unwrap();
		let found: Vec<String> = tokyo()
			.intersecting_neighbors(&inner)
			.unwrap()
			.iter()
			.map(|t| t.path().to_string())
			.collect();
		assert_eq!(found, vec!["/18/0/232847/103226", "/18/1/232847/103226", "/18/-1/232847/103226"]);

		let capped = tokyo().intersecting_neighbors_with_max_zoom(&inner, 2).unwrap();
		assert_eq!(capped.len(), 3);
		assert!(capped.iter().all(|t| t.zoom() == 2));
	}
}
