/// Identifier of a placed brick, assigned at placement time.
/// Ids start at 1 and grow monotonically; 0 is never issued.
pub type BrickId = u32;

/// Index into the loaded [`crate::Palette`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ColorId(pub u16);

/// Content of one occupied grid cell.
///
/// Invariant: `solid == true` implies `brick` is `Some` and names a brick
/// registered with the edit layer. Decorative floor tiles are non-solid and
/// carry no owner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub color: ColorId,
    pub solid: bool,
    pub brick: Option<BrickId>,
}

impl Cell {
    #[inline]
    pub fn brick(color: ColorId, id: BrickId) -> Self {
        Self {
            color,
            solid: true,
            brick: Some(id),
        }
    }

    /// Decorative terrain tile: visible, never collidable, never removable.
    #[inline]
    pub fn tile(color: ColorId) -> Self {
        Self {
            color,
            solid: false,
            brick: None,
        }
    }
}

/// Rectangular w×l footprint of a brick, one cell tall.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Footprint {
    pub w: i32,
    pub l: i32,
}

impl Footprint {
    #[inline]
    pub const fn new(w: i32, l: i32) -> Self {
        Self { w, l }
    }

    /// Effective (w, l) after the optional 90° rotation.
    #[inline]
    pub fn oriented(self, rotated: bool) -> (i32, i32) {
        if rotated { (self.l, self.w) } else { (self.w, self.l) }
    }

    #[inline]
    pub fn cell_count(self) -> i32 {
        self.w * self.l
    }
}
