// file: params.rs
// desc: the four values a maze request is made of

use std::fmt;

use crate::request_url::ApiVersion;

pub const DEFAULT_WIDTH: u32 = 42;
pub const DEFAULT_HEIGHT: u32 = 55;
pub const DEFAULT_SCALE: u32 = 25;

/// Dimension range the path-style server accepts for x and y.
pub const SERVER_MIN_DIMENSION: u32 = 3;
pub const SERVER_MAX_DIMENSION: u32 = 256;

/// The query-style server clamps x and y down to this.
pub const SERVER_CLAMP_DIMENSION: u32 = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Width,
    Height,
    Scale,
    Seed,
}

impl Field {
    /// Name used in messages.
    pub fn name(self) -> &'static str {
        match self {
            Field::Width => "x",
            Field::Height => "y",
            Field::Scale => "scale",
            Field::Seed => "seed",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    #[error("{field} value invalid: {value:?} could not be parsed as an integer")]
    InvalidNumber { field: Field, value: String },
    #[error("{0} must be a positive number")]
    NotPositive(Field),
}

/// Server-side limits a request would trip. Advisory only: the URL is still
/// derived and fetched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoundsIssue {
    #[error("{field} value {value} is out of bounds, must be between {min} and {max}")]
    Dimension {
        field: Field,
        value: u32,
        min: u32,
        max: u32,
    },
    #[error("{field} value {value} is above {max}, the server will draw it at {max}")]
    Clamped { field: Field, value: u32, max: u32 },
    #[error("seed {0} does not fit the signed 64-bit range of the path-style API")]
    SeedRejected(u64),
    #[error("seed {0} is above the signed 64-bit range, the server will pick another seed")]
    SeedReplaced(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MazeRequestParams {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub seed: u64,
}

impl Default for MazeRequestParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scale: DEFAULT_SCALE,
            seed: 0,
        }
    }
}

impl MazeRequestParams {
    pub fn value(&self, field: Field) -> u64 {
        match field {
            Field::Width => self.width.into(),
            Field::Height => self.height.into(),
            Field::Scale => self.scale.into(),
            Field::Seed => self.seed,
        }
    }

    /// Commits raw user input to one field. On error nothing changes.
    pub fn set(&mut self, field: Field, raw: &str) -> Result<(), ParamError> {
        let raw = raw.trim();
        match field {
            Field::Width => self.width = parse_positive(field, raw)?,
            Field::Height => self.height = parse_positive(field, raw)?,
            Field::Scale => self.scale = parse_positive(field, raw)?,
            Field::Seed => self.seed = parse_number(field, raw)?,
        }
        Ok(())
    }

    /// First server-side limit this request runs into, if any.
    pub fn server_bounds_issue(&self, version: ApiVersion) -> Option<BoundsIssue> {
        let dims = [(Field::Width, self.width), (Field::Height, self.height)];
        let seed_fits = i64::try_from(self.seed).is_ok();
        match version {
            ApiVersion::PathStyle => dims
                .into_iter()
                .find(|(_, value)| !(SERVER_MIN_DIMENSION..=SERVER_MAX_DIMENSION).contains(value))
                .map(|(field, value)| BoundsIssue::Dimension {
                    field,
                    value,
                    min: SERVER_MIN_DIMENSION,
                    max: SERVER_MAX_DIMENSION,
                })
                .or((!seed_fits).then_some(BoundsIssue::SeedRejected(self.seed))),
            ApiVersion::QueryStyle => dims
                .into_iter()
                .find(|&(_, value)| value > SERVER_CLAMP_DIMENSION)
                .map(|(field, value)| BoundsIssue::Clamped {
                    field,
                    value,
                    max: SERVER_CLAMP_DIMENSION,
                })
                .or((!seed_fits).then_some(BoundsIssue::SeedReplaced(self.seed))),
        }
    }
}

pub(crate) fn parse_number<T: std::str::FromStr>(field: Field, raw: &str) -> Result<T, ParamError> {
    raw.parse().map_err(|_| ParamError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

pub(crate) fn parse_positive(field: Field, raw: &str) -> Result<u32, ParamError> {
    match parse_number(field, raw)? {
        0 => Err(ParamError::NotPositive(field)),
        value => Ok(value),
    }
}
