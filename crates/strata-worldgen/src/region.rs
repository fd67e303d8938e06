//! Axis-aligned integer boxes describing the span a facet or chunk covers.
//!
//! Bounds are inclusive-min, exclusive-max. Facet regions are chunk regions
//! expanded by a per-facet [`Border`] so neighboring chunks can read
//! boundary-adjacent samples without recomputation.

use glam::{IVec2, IVec3};

/// Extra padding a facet carries beyond its target region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Border {
    /// Horizontal padding on all four sides, in blocks.
    pub sides: i32,
    /// Vertical padding above the region.
    pub top: i32,
    /// Vertical padding below the region.
    pub bottom: i32,
}

impl Border {
    /// A border with equal horizontal padding and no vertical padding.
    pub fn sides(sides: i32) -> Self {
        Self {
            sides,
            top: 0,
            bottom: 0,
        }
    }
}

/// A 2D column span over world `(x, z)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region2 {
    min: IVec2,
    max: IVec2,
}

impl Region2 {
    /// Creates a region from inclusive min and exclusive max corners.
    ///
    /// # Panics
    ///
    /// Panics if any max component is not strictly greater than min.
    pub fn new(min: IVec2, max: IVec2) -> Self {
        assert!(
            max.x > min.x && max.y > min.y,
            "degenerate region: min {min:?}, max {max:?}"
        );
        Self { min, max }
    }

    /// Inclusive minimum corner.
    pub fn min(&self) -> IVec2 {
        self.min
    }

    /// Exclusive maximum corner.
    pub fn max(&self) -> IVec2 {
        self.max
    }

    /// Extent along world X.
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    /// Extent along world Z.
    pub fn depth(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Whether the world column `(x, z)` lies inside.
    pub fn contains(&self, x: i32, z: i32) -> bool {
        x >= self.min.x && x < self.max.x && z >= self.min.y && z < self.max.y
    }

    /// The region expanded horizontally by `sides` blocks.
    pub fn pad(&self, sides: i32) -> Self {
        Self::new(
            self.min - IVec2::splat(sides),
            self.max + IVec2::splat(sides),
        )
    }

    /// Iterates every world column in the region, x-major.
    pub fn columns(&self) -> impl Iterator<Item = IVec2> + '_ {
        (self.min.x..self.max.x)
            .flat_map(move |x| (self.min.y..self.max.y).map(move |z| IVec2::new(x, z)))
    }
}

/// A 3D block span over world `(x, y, z)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region3 {
    min: IVec3,
    max: IVec3,
}

impl Region3 {
    /// Creates a region from inclusive min and exclusive max corners.
    ///
    /// # Panics
    ///
    /// Panics if any max component is not strictly greater than min.
    pub fn new(min: IVec3, max: IVec3) -> Self {
        assert!(
            max.x > min.x && max.y > min.y && max.z > min.z,
            "degenerate region: min {min:?}, max {max:?}"
        );
        Self { min, max }
    }

    /// The fixed-size region a chunk covers, from its origin and extents.
    pub fn for_chunk(world_x: i32, world_z: i32, size_x: i32, size_y: i32, size_z: i32) -> Self {
        Self::new(
            IVec3::new(world_x, 0, world_z),
            IVec3::new(world_x + size_x, size_y, world_z + size_z),
        )
    }

    /// Inclusive minimum corner.
    pub fn min(&self) -> IVec3 {
        self.min
    }

    /// Exclusive maximum corner.
    pub fn max(&self) -> IVec3 {
        self.max
    }

    /// Whether the world position lies inside.
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= self.min.x
            && x < self.max.x
            && y >= self.min.y
            && y < self.max.y
            && z >= self.min.z
            && z < self.max.z
    }

    /// The region expanded by a facet border.
    pub fn pad(&self, border: Border) -> Self {
        Self::new(
            IVec3::new(
                self.min.x - border.sides,
                self.min.y - border.bottom,
                self.min.z - border.sides,
            ),
            IVec3::new(
                self.max.x + border.sides,
                self.max.y + border.top,
                self.max.z + border.sides,
            ),
        )
    }

    /// The 2D column footprint of this region.
    pub fn footprint(&self) -> Region2 {
        Region2::new(
            IVec2::new(self.min.x, self.min.z),
            IVec2::new(self.max.x, self.max.z),
        )
    }
}
