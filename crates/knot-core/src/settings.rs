//! Tuning values consumed by the scene driver.
//!
//! `Settings` is owned by [`crate::SceneDriver`] and only changes through the
//! bounded setters below. `StartupConfig` carries the initial values read from
//! the page URL before the driver exists.

use crate::color::Rgb;
use crate::constants::{HIGHLIGHT_HEX_DEFAULT, ORBIT_SPEED_DEFAULT, ORBIT_SPEED_MAX};
use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    orbit_speed: f32,
    highlight_enabled: bool,
    highlight_color: Rgb,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            orbit_speed: ORBIT_SPEED_DEFAULT,
            highlight_enabled: true,
            highlight_color: Rgb::from_hex(HIGHLIGHT_HEX_DEFAULT),
        }
    }
}

impl Settings {
    pub fn orbit_speed(&self) -> f32 {
        self.orbit_speed
    }

    pub fn highlight_enabled(&self) -> bool {
        self.highlight_enabled
    }

    pub fn highlight_color(&self) -> Rgb {
        self.highlight_color
    }

    /// Clamped to `[0, ORBIT_SPEED_MAX]` radians per frame. Non-finite input is ignored.
    pub fn set_orbit_speed(&mut self, speed: f32) {
        if speed.is_finite() {
            self.orbit_speed = speed.clamp(0.0, ORBIT_SPEED_MAX);
        }
    }

    pub fn set_highlight_enabled(&mut self, enabled: bool) {
        self.highlight_enabled = enabled;
    }

    /// Channels are clamped to \[0, 1\].
    pub fn set_highlight_color(&mut self, color: Rgb) {
        self.highlight_color = Rgb::new(
            color.r.clamp(0.0, 1.0),
            color.g.clamp(0.0, 1.0),
            color.b.clamp(0.0, 1.0),
        );
    }
}

/// Options recognised in the page query string, e.g. `?debug&orbit=0.02&color=%2300ff00`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StartupConfig {
    pub debug: bool,
    pub settings: Settings,
}

impl StartupConfig {
    /// Parse a query string. Values that fail to parse are skipped and returned
    /// alongside the config so the caller can log them.
    pub fn from_query(query: &str) -> (Self, Vec<ConfigError>) {
        let mut cfg = Self::default();
        let mut rejected = Vec::new();
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = match pair.split_once('=') {
                Some((k, v)) => (decode_component(k), decode_component(v)),
                None => (decode_component(pair), String::new()),
            };
            if let Err(e) = cfg.apply(&key, &value) {
                rejected.push(e);
            }
        }
        (cfg, rejected)
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "debug" => {
                self.debug = value.is_empty() || parse_switch(key, value)?;
            }
            "orbit" => {
                let speed = value
                    .parse::<f32>()
                    .ok()
                    .filter(|s| s.is_finite())
                    .ok_or_else(|| ConfigError::Number {
                        key: key.to_string(),
                        value: value.to_string(),
                    })?;
                self.settings.set_orbit_speed(speed);
            }
            "highlight" => {
                let on = parse_switch(key, value)?;
                self.settings.set_highlight_enabled(on);
            }
            "color" => {
                let color = Rgb::parse(value).map_err(|source| ConfigError::Color {
                    key: key.to_string(),
                    source,
                })?;
                self.settings.set_highlight_color(color);
            }
            other => log::debug!("[config] ignoring unknown key {:?}", other),
        }
        Ok(())
    }
}

fn parse_switch(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "on" | "true" | "yes" => Ok(true),
        "0" | "off" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::Switch {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// `application/x-www-form-urlencoded` decoding: `+` is a space and `%XX` a
/// byte in either case. Malformed escapes are kept literally.
fn decode_component(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' => {
                let escaped = bytes
                    .get(i + 1..i + 3)
                    .and_then(|hex| std::str::from_utf8(hex).ok())
                    .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok());
                match escaped {
                    Some(b) => {
                        out.push(b);
                        i += 2;
                    }
                    None => out.push(b'%'),
                }
            }
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
