use serde::Deserialize;

#[derive(Deserialize)]
pub struct PaletteConfig {
    pub colors: Vec<ColorDef>,
}

/// One palette entry as authored in `palette.toml`. Order in the file is
/// hotbar order, so entries live in an array of tables rather than a map.
#[derive(Deserialize)]
pub struct ColorDef {
    pub key: String,
    pub label: Option<String>,
    /// `#rrggbb` hex; alpha comes from `opacity`.
    pub rgb: String,
    pub opacity: Option<f32>,
}

#[derive(Deserialize)]
pub struct ShapesConfig {
    pub shapes: Vec<ShapeDef>,
}

#[derive(Deserialize)]
pub struct ShapeDef {
    pub key: String,
    pub w: i32,
    pub l: i32,
}
