use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use super::config::ShapesConfig;
use super::types::Footprint;

#[derive(Clone, Debug)]
pub struct BrickShape {
    pub key: String,
    pub footprint: Footprint,
}

/// Ordered brick shape catalog; index order is sidebar order.
#[derive(Default, Clone, Debug)]
pub struct ShapeCatalog {
    pub shapes: Vec<BrickShape>,
    pub by_key: HashMap<String, usize>,
}

impl ShapeCatalog {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            by_key: HashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&BrickShape> {
        self.by_key.get(key).map(|&i| &self.shapes[i])
    }

    pub fn footprint(&self, key: &str) -> Option<Footprint> {
        self.get(key).map(|s| s.footprint)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: ShapesConfig = toml::from_str(toml_str)?;
        let mut catalog = ShapeCatalog::new();
        for def in cfg.shapes.into_iter() {
            if def.w < 1 || def.l < 1 {
                return Err(format!("shape {:?} has a degenerate footprint", def.key).into());
            }
            if catalog.by_key.contains_key(&def.key) {
                return Err(format!("duplicate shape key {:?}", def.key).into());
            }
            catalog.by_key.insert(def.key.clone(), catalog.shapes.len());
            catalog.shapes.push(BrickShape {
                key: def.key,
                footprint: Footprint::new(def.w, def.l),
            });
        }
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}
