// file: request_url.rs
// desc: derive (and decode) maze image request URLs for both API revisions

use std::fmt;
use std::str::FromStr;

use url::form_urlencoded;

use crate::params::{DEFAULT_SCALE, Field, MazeRequestParams, ParamError, parse_number, parse_positive};

pub const DEFAULT_API_BASE: &str = "/api/maze";

/// Wire revision of the maze endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApiVersion {
    /// `{base}/{W}x{H}/{SEED}?s={S}`, seeds below 2^63.
    #[default]
    PathStyle,
    /// `{base}?x={W}&y={H}&s={S}&seed={SEED}&`, seeds below 2^64.
    QueryStyle,
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ApiVersion::PathStyle => "path",
            ApiVersion::QueryStyle => "query",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown API version {0:?}, expected one of a, path, b, query")]
pub struct ParseApiVersionError(pub String);

impl FromStr for ApiVersion {
    type Err = ParseApiVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "path" | "path-style" => Ok(ApiVersion::PathStyle),
            "b" | "query" | "query-style" => Ok(ApiVersion::QueryStyle),
            _ => Err(ParseApiVersionError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestUrlError {
    #[error("request path {0:?} is not a maze request")]
    UnknownPath(String),
    #[error("query parameter {0} is missing")]
    MissingField(&'static str),
    #[error("seed {0} is out of range for the path-style API")]
    SeedOutOfRange(u64),
    #[error(transparent)]
    Param(#[from] ParamError),
}

pub fn build_url(params: &MazeRequestParams, version: ApiVersion) -> String {
    build_url_with_base(params, version, DEFAULT_API_BASE)
}

/// Fields are numeric so nothing here needs percent-encoding. Any future
/// non-numeric field must be encoded before it is interpolated.
pub fn build_url_with_base(params: &MazeRequestParams, version: ApiVersion, base: &str) -> String {
    let MazeRequestParams {
        width,
        height,
        scale,
        seed,
    } = *params;
    match version {
        ApiVersion::PathStyle => format!("{base}/{width}x{height}/{seed}?s={scale}"),
        // The dangling '&' is part of the wire format.
        ApiVersion::QueryStyle => format!("{base}?x={width}&y={height}&s={scale}&seed={seed}&"),
    }
}

pub fn parse_url(url: &str) -> Result<(MazeRequestParams, ApiVersion), RequestUrlError> {
    parse_url_with_base(url, DEFAULT_API_BASE)
}

/// Decodes a request URL the way the maze server reads it.
pub fn parse_url_with_base(
    url: &str,
    base: &str,
) -> Result<(MazeRequestParams, ApiVersion), RequestUrlError> {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    let unknown = || RequestUrlError::UnknownPath(path.to_string());

    let rest = path.strip_prefix(base).ok_or_else(unknown)?;
    if rest.is_empty() {
        return Ok((parse_query_style(query)?, ApiVersion::QueryStyle));
    }

    let segments = rest.strip_prefix('/').ok_or_else(unknown)?;
    let (dims, seed) = segments.split_once('/').ok_or_else(unknown)?;
    let (width, height) = dims.split_once('x').ok_or_else(unknown)?;
    if ![width, height, seed].iter().all(|s| is_digits(s)) {
        return Err(unknown());
    }

    // Repeated `s` keys: the last one wins.
    let scale = form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| key == "s")
        .last()
        .map(|(_, value)| parse_positive(Field::Scale, &value))
        .transpose()?
        .unwrap_or(DEFAULT_SCALE);

    let params = MazeRequestParams {
        width: parse_positive(Field::Width, width)?,
        height: parse_positive(Field::Height, height)?,
        scale,
        seed: parse_number(Field::Seed, seed)?,
    };
    if i64::try_from(params.seed).is_err() {
        return Err(RequestUrlError::SeedOutOfRange(params.seed));
    }
    Ok((params, ApiVersion::PathStyle))
}

fn parse_query_style(query: &str) -> Result<MazeRequestParams, RequestUrlError> {
    let mut found: [Option<String>; 4] = Default::default();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let slot = match key.as_ref() {
            "x" => 0,
            "y" => 1,
            "s" => 2,
            "seed" => 3,
            _ => continue,
        };
        // Repeated keys: the first one wins.
        found[slot].get_or_insert_with(|| value.into_owned());
    }

    let [width, height, scale, seed] = found;
    let require = |value: Option<String>, key| value.ok_or(RequestUrlError::MissingField(key));

    Ok(MazeRequestParams {
        width: parse_positive(Field::Width, &require(width, "x")?)?,
        height: parse_positive(Field::Height, &require(height, "y")?)?,
        scale: parse_positive(Field::Scale, &require(scale, "s")?)?,
        seed: parse_number(Field::Seed, &require(seed, "seed")?)?,
    })
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(width: u32, height: u32, scale: u32, seed: u64) -> MazeRequestParams {
        MazeRequestParams {
            width,
            height,
            scale,
            seed,
        }
    }

    #[test]
    fn path_style_format() {
        assert_eq!(
            build_url(&params(42, 55, 25, 7), ApiVersion::PathStyle),
            "/api/maze/42x55/7?s=25"
        );
        assert_eq!(
            build_url(&params(3, 1000, 1, 9_223_372_036_854_774_784), ApiVersion::PathStyle),
            "/api/maze/3x1000/9223372036854774784?s=1"
        );
    }

    #[test]
    fn query_style_keeps_trailing_ampersand() {
        assert_eq!(
            build_url(&params(42, 55, 25, 7), ApiVersion::QueryStyle),
            "/api/maze?x=42&y=55&s=25&seed=7&"
        );
        assert_eq!(
            build_url(&params(1, 2, 3, u64::MAX), ApiVersion::QueryStyle),
            "/api/maze?x=1&y=2&s=3&seed=18446744073709551615&"
        );
    }

    #[test]
    fn custom_base() {
        let p = params(10, 12, 5, 0);
        assert_eq!(
            build_url_with_base(&p, ApiVersion::PathStyle, "https://mazes.test/api/maze"),
            "https://mazes.test/api/maze/10x12/0?s=5"
        );
        assert_eq!(
            parse_url_with_base("/v2/maze?x=10&y=12&s=5&seed=0&", "/v2/maze"),
            Ok((p, ApiVersion::QueryStyle))
        );
    }

    #[test]
    fn path_style_scale_defaults_and_last_wins() {
        assert_eq!(
            parse_url("/api/maze/20x30/99"),
            Ok((params(20, 30, 25, 99), ApiVersion::PathStyle))
        );
        assert_eq!(
            parse_url("/api/maze/20x30/99?s=4&s=9"),
            Ok((params(20, 30, 9, 99), ApiVersion::PathStyle))
        );
    }

    #[test]
    fn query_style_first_wins() {
        assert_eq!(
            parse_url("/api/maze?seed=1&x=8&y=9&s=2&x=100"),
            Ok((params(8, 9, 2, 1), ApiVersion::QueryStyle))
        );
    }

    #[test]
    fn rejects_malformed_paths() {
        for url in [
            "/api/mazes/1x2/3",
            "/api/maze/",
            "/api/maze/1x2",
            "/api/maze/1y2/3",
            "/api/maze/ax2/3",
            "/api/maze/1x2/3/4",
            "/api/maze/1x2/-3",
            "/webui/",
        ] {
            assert!(
                matches!(parse_url(url), Err(RequestUrlError::UnknownPath(_))),
                "{url} should not decode"
            );
        }
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            parse_url("/api/maze/0x2/3"),
            Err(RequestUrlError::Param(ParamError::NotPositive(Field::Width)))
        );
        assert_eq!(
            parse_url("/api/maze/4x2/3?s=big"),
            Err(RequestUrlError::Param(ParamError::InvalidNumber {
                field: Field::Scale,
                value: "big".into()
            }))
        );
        assert_eq!(
            parse_url("/api/maze/4x2/9223372036854775808"),
            Err(RequestUrlError::SeedOutOfRange(1 << 63))
        );
        assert_eq!(
            parse_url("/api/maze?x=4&y=2&s=1&"),
            Err(RequestUrlError::MissingField("seed"))
        );
    }

    #[test]
    fn api_version_names() {
        assert_eq!("A".parse::<ApiVersion>(), Ok(ApiVersion::PathStyle));
        assert_eq!(" query ".parse::<ApiVersion>(), Ok(ApiVersion::QueryStyle));
        assert_eq!("path-style".parse::<ApiVersion>(), Ok(ApiVersion::PathStyle));
        assert!("c".parse::<ApiVersion>().is_err());
        assert_eq!(ApiVersion::QueryStyle.to_string(), "query");
        assert_eq!(ApiVersion::default(), ApiVersion::PathStyle);
    }
}
