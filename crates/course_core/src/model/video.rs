//! Video catalog items and interest calculation.
//!
//! Interest calculation is dispatched through the `Video` trait, one
//! implementation per `VideoKind`. Adding a kind means adding a variant and an
//! implementation; existing implementations stay untouched.

use log::debug;
use serde::{Deserialize, Serialize};

/// Closed set of video kinds known to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoKind {
    Movie,
    TvShow,
}

/// Behavior shared by every video kind.
pub trait Video {
    fn kind(&self) -> VideoKind;

    /// Runs the kind-specific interest calculation and returns its summary.
    fn calculate_interest(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Movie;

#[derive(Debug, Clone, Copy, Default)]
pub struct TvShow;

impl Video for Movie {
    fn kind(&self) -> VideoKind {
        VideoKind::Movie
    }

    fn calculate_interest(&self) -> String {
        debug!("event=video_interest module=video kind=movie");
        "Calculating interest for Movie...".to_string()
    }
}

impl Video for TvShow {
    fn kind(&self) -> VideoKind {
        VideoKind::TvShow
    }

    fn calculate_interest(&self) -> String {
        debug!("event=video_interest module=video kind=tv_show");
        "Calculating interest for TV Show...".to_string()
    }
}

/// Returns the implementation registered for `kind`.
pub fn video_for(kind: VideoKind) -> Box<dyn Video> {
    match kind {
        VideoKind::Movie => Box::new(Movie),
        VideoKind::TvShow => Box::new(TvShow),
    }
}

/// Maps legacy string tags (`"Movie"`, `"TVShow"`) to a kind.
///
/// Unknown tags return `None` so callers must handle them explicitly.
pub fn parse_video_kind(tag: &str) -> Option<VideoKind> {
    match tag {
        "Movie" => Some(VideoKind::Movie),
        "TVShow" => Some(VideoKind::TvShow),
        _ => None,
    }
}
