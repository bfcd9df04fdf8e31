use chrono::NaiveDate;
use serde::Deserialize;

/// Fallback display color when the server omits one.
const DEFAULT_COLOR: &str = "#180202";

/// A catalog movie, adapted from a raw server record.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub director: String,
    pub writers: Vec<String>,
    pub actors: Vec<String>,
    pub genres: Vec<String>,
    pub rating: f64,
    /// Run time in minutes.
    pub run_time: u32,
    pub release_date: NaiveDate,
    pub poster: String,
    pub background: String,
    pub small_picture: String,
    pub video_preview: String,
    pub video_full: String,
    /// Display color derived from the record's background color.
    pub color: String,
}

/// A movie record as the server sends it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMovie {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub director: String,
    #[serde(default)]
    pub writers: Vec<String>,
    #[serde(default)]
    pub starring: Vec<String>,
    /// Flat genre list, comma separated.
    pub genre: String,
    pub rating: f64,
    pub run_time: u32,
    /// ISO-8601 release date, day precision or finer.
    pub released: String,
    pub poster_image: String,
    pub background_image: String,
    pub preview_image: String,
    pub preview_video_link: String,
    pub video_link: String,
    #[serde(default)]
    pub background_color: String,
}

/// Adapt one raw record into the internal model.
///
/// Total for well-formed input; an unparseable date degrades to the
/// epoch instead of failing the whole catalog load.
pub fn create_movie(raw: RawMovie) -> Movie {
    let release_date = parse_day(&raw.released);
    let color = if raw.background_color.is_empty() {
        DEFAULT_COLOR.to_string()
    } else {
        raw.background_color
    };

    Movie {
        id: raw.id,
        title: raw.name,
        description: raw.description,
        director: raw.director,
        writers: raw.writers,
        actors: raw.starring,
        genres: split_genres(&raw.genre),
        rating: raw.rating,
        run_time: raw.run_time,
        release_date,
        poster: raw.poster_image,
        background: raw.background_image,
        small_picture: raw.preview_image,
        video_preview: raw.preview_video_link,
        video_full: raw.video_link,
        color,
    }
}

/// Adapt a full catalog payload.
pub fn create_movies(raw: Vec<RawMovie>) -> Vec<Movie> {
    raw.into_iter().map(create_movie).collect()
}

/// Truncate an ISO-8601 timestamp to day precision and parse it.
fn parse_day(value: &str) -> NaiveDate {
    let day = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap_or_default()
}

fn split_genres(genre: &str) -> Vec<String> {
    genre
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
