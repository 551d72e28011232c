use super::scalar::Fixed;
use super::vector::{FixedVec2, FixedVec3, FixedVec4};

impl FixedVec4 {
    pub const fn from_xy_zw(xy: FixedVec2, zw: FixedVec2) -> Self {
        Self::new(xy.x, xy.y, zw.x, zw.y)
    }

    pub const fn from_xyz_w(xyz: FixedVec3, w: Fixed) -> Self {
        Self::new(xyz.x, xyz.y, xyz.z, w)
    }

    pub const fn xyz(self) -> FixedVec3 {
        FixedVec3::new(self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let a = FixedVec4::from_xy_zw(FixedVec2::from_ints(1, 2), FixedVec2::from_ints(3, 4));
        let b = FixedVec4::from_xyz_w(FixedVec3::from_ints(1, 2, 3), Fixed::FOUR);
        assert_eq!(a, b);
        assert_eq!(a.xyz(), FixedVec3::from_ints(1, 2, 3));
        assert_eq!(a.to_array()[3], Fixed::FOUR);
    }
}
