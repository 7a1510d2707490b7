use brickyard_bricks::types::{Cell, ColorId, Footprint};
use brickyard_bricks::{Palette, ShapeCatalog};
use proptest::prelude::*;

const PALETTE_TOML: &str = r##"
[[colors]]
key = "yellow"
label = "Yellow"
rgb = "#ffd400"

[[colors]]
key = "blue"
rgb = "#1565c0"

[[colors]]
key = "trans"
label = "Translucent"
rgb = "#a0d8ff"
opacity = 0.5
"##;

const SHAPES_TOML: &str = r##"
[[shapes]]
key = "2x2"
w = 2
l = 2

[[shapes]]
key = "2x4"
w = 2
l = 4
"##;

#[test]
fn palette_parses_in_file_order() {
    let p = Palette::from_toml_str(PALETTE_TOML).expect("palette");
    assert_eq!(p.len(), 3);
    assert_eq!(p.id_by_key("yellow"), Some(ColorId(0)));
    assert_eq!(p.id_by_key("trans"), Some(ColorId(2)));
    assert_eq!(p.id_by_key("magenta"), None);

    let yellow = p.get(ColorId(0)).unwrap();
    assert_eq!(yellow.rgba, [0xff, 0xd4, 0x00, 0xff]);
    assert_eq!(yellow.label, "Yellow");
    assert!(!yellow.is_translucent());

    // Missing label falls back to the key
    assert_eq!(p.get(ColorId(1)).unwrap().label, "blue");

    let trans = p.get(ColorId(2)).unwrap();
    assert_eq!(trans.rgba[3], 128);
    assert!(trans.is_translucent());
}

#[test]
fn palette_rejects_bad_hex_and_duplicates() {
    assert!(Palette::from_toml_str("[[colors]]\nkey = \"x\"\nrgb = \"ffd400\"\n").is_err());
    assert!(Palette::from_toml_str("[[colors]]\nkey = \"x\"\nrgb = \"#ffd4\"\n").is_err());

    let dup = r##"
[[colors]]
key = "x"
rgb = "#111111"

[[colors]]
key = "x"
rgb = "#222222"
"##;
    assert!(Palette::from_toml_str(dup).is_err());
}

#[test]
fn shapes_parse_and_lookup() {
    let c = ShapeCatalog::from_toml_str(SHAPES_TOML).expect("shapes");
    assert_eq!(c.len(), 2);
    assert_eq!(c.footprint("2x4"), Some(Footprint::new(2, 4)));
    assert_eq!(c.footprint("4x6"), None);
}

#[test]
fn shapes_reject_degenerate_footprints() {
    assert!(ShapeCatalog::from_toml_str("[[shapes]]\nkey = \"0x2\"\nw = 0\nl = 2\n").is_err());
}

#[test]
fn footprint_oriented_swaps_axes() {
    let fp = Footprint::new(2, 4);
    assert_eq!(fp.oriented(false), (2, 4));
    assert_eq!(fp.oriented(true), (4, 2));
    assert_eq!(fp.cell_count(), 8);
}

#[test]
fn cell_constructors_respect_ownership_invariant() {
    let b = Cell::brick(ColorId(3), 7);
    assert!(b.solid);
    assert_eq!(b.brick, Some(7));

    let t = Cell::tile(ColorId(1));
    assert!(!t.solid);
    assert_eq!(t.brick, None);
}

proptest! {
    // Rotating twice is the identity on the effective footprint
    #[test]
    fn footprint_double_rotation_identity(w in 1i32..16, l in 1i32..16) {
        let fp = Footprint::new(w, l);
        let (rw, rl) = fp.oriented(true);
        prop_assert_eq!(Footprint::new(rw, rl).oriented(true), fp.oriented(false));
    }

    // A rotated w×l covers the same number of cells as an unrotated l×w
    #[test]
    fn footprint_rotation_preserves_area(w in 1i32..16, l in 1i32..16) {
        let a = Footprint::new(w, l);
        let b = Footprint::new(l, w);
        let (aw, al) = a.oriented(true);
        let (bw, bl) = b.oriented(false);
        prop_assert_eq!((aw, al), (bw, bl));
    }
}
