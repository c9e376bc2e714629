//! Movement domain: ground and ceiling contact probe.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Horizontal placement of the three ground rays, as fractions of the half-width
pub const GROUND_RAY_SPREAD: [f32; 3] = [-0.8, 0.0, 0.8];

/// Outcome of one probe pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactProbe {
    pub ground_hit: bool,
    pub ceiling_hit: bool,
}

/// Bounds of the character collider in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeGeometry {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl ProbeGeometry {
    fn is_degenerate(&self) -> bool {
        !self.center.is_finite()
            || !self.half_extents.is_finite()
            || self.half_extents.x < 0.0
            || self.half_extents.y <= 0.0
    }

    pub fn ground_ray_origins(&self) -> [Vec2; 3] {
        GROUND_RAY_SPREAD.map(|f| self.center + Vec2::X * (f * self.half_extents.x))
    }
}

/// Spatial queries the probe needs. Implementations treat any failure as "no hit".
pub trait ContactQuery {
    fn ray_hit(&self, origin: Vec2, direction: Dir2, max_distance: f32) -> bool;

    /// Sweep the character's own shape from `center` along `direction`
    fn sweep_hit(&self, center: Vec2, direction: Dir2, distance: f32) -> bool;
}

fn usable_distance(distance: f32) -> bool {
    distance.is_finite() && distance > 0.0
}

/// Classify ground and ceiling contact relative to the current gravity direction.
pub fn probe_contacts(
    query: &impl ContactQuery,
    geometry: ProbeGeometry,
    gravity_reversed: bool,
    grounder_distance: f32,
) -> ContactProbe {
    if geometry.is_degenerate() {
        return ContactProbe::default();
    }

    let down = if gravity_reversed { Dir2::Y } else { Dir2::NEG_Y };
    let up = -down;

    let ray_length = geometry.half_extents.y + grounder_distance;
    let ground_hit = usable_distance(ray_length)
        && geometry
            .ground_ray_origins()
            .into_iter()
            .any(|origin| query.ray_hit(origin, down, ray_length));

    let ceiling_hit = usable_distance(grounder_distance)
        && query.sweep_hit(geometry.center, up, grounder_distance);

    ContactProbe {
        ground_hit,
        ceiling_hit,
    }
}

/// Half extents of the supported collider shapes, `None` for anything else
pub fn collider_half_extents(collider: &Collider) -> Option<Vec2> {
    let shape = collider.shape_scaled();

    if let Some(cuboid) = shape.as_cuboid() {
        return Some(Vec2::new(cuboid.half_extents.x, cuboid.half_extents.y));
    }
    if let Some(capsule) = shape.as_capsule() {
        let radius = capsule.radius;
        return Some(Vec2::new(radius, capsule.half_height() + radius));
    }
    if let Some(ball) = shape.as_ball() {
        return Some(Vec2::splat(ball.radius));
    }
    None
}

/// [`ContactQuery`] backed by avian's spatial query pipeline
pub(crate) struct AvianContactQuery<'a, 'w, 's> {
    pub spatial_query: &'a SpatialQuery<'w, 's>,
    pub collider: &'a Collider,
    pub filter: &'a SpatialQueryFilter,
}

impl ContactQuery for AvianContactQuery<'_, '_, '_> {
    fn ray_hit(&self, origin: Vec2, direction: Dir2, max_distance: f32) -> bool {
        self.spatial_query
            .cast_ray(origin, direction, max_distance, true, self.filter)
            .is_some()
    }

    fn sweep_hit(&self, center: Vec2, direction: Dir2, distance: f32) -> bool {
        // Shapes already overlapping at the start are not ceiling contacts
        let config = ShapeCastConfig {
            ignore_origin_penetration: true,
            ..ShapeCastConfig::from_max_distance(distance)
        };

        self.spatial_query
            .cast_shape(self.collider, center, 0.0, direction, &config, self.filter)
            .is_some()
    }
}
