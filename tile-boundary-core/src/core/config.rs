//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use regex::Regex;
use serde::Deserialize;
use std;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, String>;
    /// Generate configuration template
    fn gen_config() -> String;
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct ApplicationCfg {
    #[serde(default)]
    pub grid: GridCfg,
    #[serde(default)]
    pub overlay: OverlayCfg,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct GridCfg {
    /// Tile size preset (xyz: 256 pixels, vector: 512 pixels)
    pub tile_type: Option<String>,
    /// Custom tile size in pixels, overrides the preset
    pub tile_size: Option<u32>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct OverlayCfg {
    /// Fixed zoom level. Estimated from the display scale when missing.
    pub zoom: Option<u8>,
    /// Screen DPI used when the viewport doesn't provide one
    #[serde(default = "default_dpi")]
    pub dpi: f64,
    /// Upper limit for estimated zoom levels
    #[serde(default = "default_maxzoom")]
    pub maxzoom: u8,
    /// Maximal number of tile boundaries per viewport
    #[serde(default = "default_max_tiles")]
    pub max_tiles: usize,
}

impl Default for OverlayCfg {
    fn default() -> OverlayCfg {
        OverlayCfg {
            zoom: None,
            dpi: default_dpi(),
            maxzoom: default_maxzoom(),
            max_tiles: default_max_tiles(),
        }
    }
}

/// Logical screen DPI
pub fn default_dpi() -> f64 {
    96.0
}

pub fn default_maxzoom() -> u8 {
    22
}

pub fn default_max_tiles() -> usize {
    10000
}

/// Load and parse the config file into an config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, String> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err("Could not find config file!".to_string());
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(format!("Error while reading config: [{}]", err));
    };

    parse_config(config_toml, path)
}

/// Parse the configuration into an config struct.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    // Check for ${var} expressions
    let re = Regex::new(r"\$\{([[:alnum:]_]+)\}").map_err(|e| e.to_string())?;
    if re.is_match(&config_toml) {
        return Err(
            "Replace environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string(),
        );
    }

    // Parse template
    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_toml)
        .map_err(|e| format!("Template error: {}", e))?;
    let mut context = Context::new();
    let env: HashMap<String, String> = env::vars().collect();
    context.insert("env", &env);
    let toml = tera.render(path, &context).map_err(|e| {
        let cause = e.source().map_or_else(|| e.to_string(), |src| src.to_string());
        format!("Template error: {}", cause)
    })?;

    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}
