/// Scene file parser.
///
/// A scene file is a stream of tags, each followed by an optional `=` and
/// a fixed number of values:
///
/// ```text
/// ANAME = AXLE1
/// AAXIS = 2
/// APOSITION = -7.0 0.0 0.0
/// GNAME = GEAR1
/// GAXLE = AXLE1
/// ```
///
/// `ANAME`, `GNAME` and `BELTNAME` open a new record; every other tag
/// fills a field of the most recently opened record of its kind.

use std::path::Path;
use glam::Vec3;
use crate::error::{Error, Result};
use crate::scene::{AxleDesc, Axis, BeltDesc, Direction, GearDesc, GearKind, SceneDesc};
use crate::{gt_err, gt_info, gt_warn};
use super::config::{LoaderConfig, NumericPolicy};
use super::tokens::{Token, Tokens};

/// Parser for GearTrain scene files.
#[derive(Debug, Clone, Default)]
pub struct SceneLoader {
    config: LoaderConfig,
}

impl SceneLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Read and parse a scene file.
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, `Parse` if it is malformed.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<SceneDesc> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            gt_err!("geartrain::Loader", Error::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        })?;
        let desc = self.load_str(&source)?;
        gt_info!("geartrain::Loader", "Loaded {}: {} axles, {} gears, {} belts",
            path.display(), desc.axles.len(), desc.gears.len(), desc.belts.len());
        Ok(desc)
    }

    /// Parse a scene description from text.
    ///
    /// # Errors
    ///
    /// `Parse` for an unknown tag, a field tag before its record, a
    /// truncated record, or an invalid value.
    pub fn load_str(&self, source: &str) -> Result<SceneDesc> {
        self.parse(source).map_err(|e| gt_err!("geartrain::Loader", e))
    }

    fn parse(&self, source: &str) -> Result<SceneDesc> {
        let mut desc = SceneDesc::default();
        let mut tokens = Tokens::new(source);

        while let Some(tag) = tokens.next_token() {
            tokens.skip_separator();
            match tag.text {
                "BACKGROUND" => desc.background = self.triplet(&mut tokens, tag)?,

                "ANAME" => desc.axles.push(AxleDesc {
                    name: text(&mut tokens, tag)?.to_string(),
                    ..Default::default()
                }),
                "ARADIUS" => current(&mut desc.axles, tag, "ANAME")?.radius = self.real(&mut tokens, tag)?,
                "ALENGTH" => current(&mut desc.axles, tag, "ANAME")?.length = self.real(&mut tokens, tag)?,
                "AANGULARVELOCITY" => {
                    current(&mut desc.axles, tag, "ANAME")?.angular_velocity = self.real(&mut tokens, tag)?
                }
                "AAXIS" => {
                    let axle = current(&mut desc.axles, tag, "ANAME")?;
                    let index = self.integer(&mut tokens, tag)?;
                    axle.axis = Axis::from_index(index)
                        .ok_or_else(|| invalid(tag, format!("axis must be 0, 1 or 2 (got {})", index)))?;
                }
                "AMOTORED" => {
                    current(&mut desc.axles, tag, "ANAME")?.motor = self.integer(&mut tokens, tag)? != 0
                }
                "ADIRECTION" => {
                    let axle = current(&mut desc.axles, tag, "ANAME")?;
                    let sign = self.integer(&mut tokens, tag)?;
                    axle.direction = Direction::from_sign(sign)
                        .ok_or_else(|| invalid(tag, format!("direction must be -1, 0 or 1 (got {})", sign)))?;
                }
                "ACOLOR" => current(&mut desc.axles, tag, "ANAME")?.color = self.triplet(&mut tokens, tag)?,
                "APOSITION" => current(&mut desc.axles, tag, "ANAME")?.position = self.triplet(&mut tokens, tag)?,

                "GNAME" => desc.gears.push(GearDesc {
                    name: text(&mut tokens, tag)?.to_string(),
                    ..Default::default()
                }),
                "GTYPE" => {
                    let gear = current(&mut desc.gears, tag, "GNAME")?;
                    let name = text(&mut tokens, tag)?;
                    gear.kind = GearKind::from_name(name)
                        .ok_or_else(|| invalid(tag, format!("gear type must be NORMAL or BEVEL (got {})", name)))?;
                }
                "GAXLE" => current(&mut desc.gears, tag, "GNAME")?.axle = text(&mut tokens, tag)?.to_string(),
                "GFACE" => current(&mut desc.gears, tag, "GNAME")?.front_face = self.integer(&mut tokens, tag)? != 0,
                "GTEETH" => current(&mut desc.gears, tag, "GNAME")?.teeth = self.integer(&mut tokens, tag)?,
                "GPOSITION" => {
                    current(&mut desc.gears, tag, "GNAME")?.offset = self.integer(&mut tokens, tag)? as f32
                }
                "GRADIUS" => current(&mut desc.gears, tag, "GNAME")?.radius = self.real(&mut tokens, tag)?,
                "GWIDTH" => current(&mut desc.gears, tag, "GNAME")?.width = self.real(&mut tokens, tag)?,
                "GTOOTHDEPTH" => current(&mut desc.gears, tag, "GNAME")?.tooth_depth = self.real(&mut tokens, tag)?,
                "GCOLOR" => current(&mut desc.gears, tag, "GNAME")?.color = self.triplet(&mut tokens, tag)?,

                "BELTNAME" => desc.belts.push(BeltDesc {
                    name: text(&mut tokens, tag)?.to_string(),
                    ..Default::default()
                }),
                "GEAR1NAME" => current(&mut desc.belts, tag, "BELTNAME")?.gear1 = text(&mut tokens, tag)?.to_string(),
                "GEAR2NAME" => current(&mut desc.belts, tag, "BELTNAME")?.gear2 = text(&mut tokens, tag)?.to_string(),

                other => {
                    return Err(Error::Parse {
                        line: tag.line,
                        message: format!("unknown tag '{}'", other),
                    });
                }
            }
        }

        Ok(desc)
    }

    fn real(&self, tokens: &mut Tokens<'_>, tag: Token<'_>) -> Result<f32> {
        let value = text(tokens, tag)?;
        match value.parse::<f32>() {
            Ok(number) => Ok(number),
            Err(_) => self.malformed(tag, value),
        }
    }

    fn integer(&self, tokens: &mut Tokens<'_>, tag: Token<'_>) -> Result<i64> {
        let value = text(tokens, tag)?;
        match value.parse::<i64>() {
            Ok(number) => Ok(number),
            Err(_) => self.malformed(tag, value),
        }
    }

    fn triplet(&self, tokens: &mut Tokens<'_>, tag: Token<'_>) -> Result<Vec3> {
        Ok(Vec3::new(
            self.real(tokens, tag)?,
            self.real(tokens, tag)?,
            self.real(tokens, tag)?,
        ))
    }

    fn malformed<T: Default>(&self, tag: Token<'_>, value: &str) -> Result<T> {
        match self.config.numeric_policy {
            NumericPolicy::Strict => Err(invalid(tag, format!("malformed number '{}'", value))),
            NumericPolicy::Lenient => {
                gt_warn!("geartrain::Loader", "Line {}: malformed number '{}' for {}, using 0",
                    tag.line, value, tag.text);
                Ok(T::default())
            }
        }
    }
}

/// Next value token for `tag`.
fn text<'a>(tokens: &mut Tokens<'a>, tag: Token<'_>) -> Result<&'a str> {
    tokens.next_token().map(|token| token.text).ok_or_else(|| Error::Parse {
        line: tag.line,
        message: format!("unexpected end of input after {}", tag.text),
    })
}

/// The record a field tag applies to: the last one opened by `opener`.
fn current<'r, T>(records: &'r mut [T], tag: Token<'_>, opener: &str) -> Result<&'r mut T> {
    records.last_mut().ok_or_else(|| Error::Parse {
        line: tag.line,
        message: format!("{} before any {}", tag.text, opener),
    })
}

fn invalid(tag: Token<'_>, message: String) -> Error {
    Error::Parse {
        line: tag.line,
        message: format!("{}: {}", tag.text, message),
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
