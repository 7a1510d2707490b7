use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use super::config::PaletteConfig;
use super::types::ColorId;

#[derive(Clone, Debug)]
pub struct Color {
    pub id: ColorId,
    pub key: String,
    pub label: String,
    /// Straight (non-premultiplied) RGBA, alpha from the opacity field.
    pub rgba: [u8; 4],
}

impl Color {
    #[inline]
    pub fn is_translucent(&self) -> bool {
        self.rgba[3] < u8::MAX
    }
}

/// Ordered color catalog; index order is hotbar order.
#[derive(Default, Clone, Debug)]
pub struct Palette {
    pub colors: Vec<Color>,
    pub by_key: HashMap<String, ColorId>,
}

impl Palette {
    pub fn new() -> Self {
        Self {
            colors: Vec::new(),
            by_key: HashMap::new(),
        }
    }

    pub fn get(&self, id: ColorId) -> Option<&Color> {
        self.colors.get(id.0 as usize)
    }

    pub fn id_by_key(&self, key: &str) -> Option<ColorId> {
        self.by_key.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: PaletteConfig = toml::from_str(toml_str)?;
        let mut palette = Palette::new();
        for def in cfg.colors.into_iter() {
            if palette.by_key.contains_key(&def.key) {
                return Err(format!("duplicate palette key {:?}", def.key).into());
            }
            let [r, g, b] = parse_hex_rgb(&def.rgb)
                .ok_or_else(|| format!("bad hex color {:?} for {:?}", def.rgb, def.key))?;
            let a = (def.opacity.unwrap_or(1.0).clamp(0.0, 1.0) * 255.0).round() as u8;
            let id = ColorId(palette.colors.len() as u16);
            palette.by_key.insert(def.key.clone(), id);
            palette.colors.push(Color {
                id,
                label: def.label.unwrap_or_else(|| def.key.clone()),
                key: def.key,
                rgba: [r, g, b, a],
            });
        }
        Ok(palette)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

fn parse_hex_rgb(s: &str) -> Option<[u8; 3]> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b])
}
