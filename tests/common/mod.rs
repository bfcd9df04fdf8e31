//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::Mutex;

use wtw::api::ApiClient;
use wtw::config::ApiConfig;
use wtw::data::ReviewForm;
use wtw::model::Movie;
use wtw::navigation::{AppRoute, Navigator};

use self::mock_api::MockApi;

/// Build an API client pointed at the mock server.
pub fn api_for(mock: &MockApi) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: mock.base_url(),
        timeout_seconds: 5,
    })
}

/// A minimal adapted movie for reducer and selector tests.
pub fn make_movie(id: u64, genre: &str) -> Movie {
    Movie {
        id,
        title: format!("Movie {id}"),
        description: "A test movie.".to_string(),
        director: "Director".to_string(),
        writers: vec!["Writer".to_string()],
        actors: vec!["Actor".to_string()],
        genres: vec![genre.to_string()],
        rating: 7.5,
        run_time: 99,
        release_date: NaiveDate::from_ymd_opt(2014, 3, 28).unwrap(),
        poster: "img/poster.jpg".to_string(),
        background: "img/bg.jpg".to_string(),
        small_picture: "img/preview.jpg".to_string(),
        video_preview: "https://media/preview.mp4".to_string(),
        video_full: "https://media/full.mp4".to_string(),
        color: "#B9B27E".to_string(),
    }
}

/// A raw movie record in the server's wire shape.
pub fn raw_movie_json(id: u64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "description": "A test movie.",
        "director": "Director",
        "writers": ["Writer"],
        "starring": ["Actor One", "Actor Two"],
        "genre": "Comedy, Crime",
        "rating": 8.9,
        "run_time": 99,
        "released": "2014-03-28T00:00:00.000Z",
        "poster_image": "img/poster.jpg",
        "background_image": "img/bg.jpg",
        "preview_image": "img/preview.jpg",
        "preview_video_link": "https://media/preview.mp4",
        "video_link": "https://media/full.mp4",
        "background_color": "#B9B27E"
    })
}

/// A raw review record in the server's wire shape.
pub fn raw_review_json(author: &str, comment: &str) -> serde_json::Value {
    serde_json::json!({
        "user": { "name": author },
        "comment": comment,
        "rating": 8.9,
        "date": "2019-05-08T14:13:56.569Z"
    })
}

/// Navigator that records every pushed path.
#[derive(Default)]
pub struct RecordingNavigator {
    pushes: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn pushes(&self) -> Vec<String> {
        self.pushes.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, route: &AppRoute) {
        self.pushes.lock().push(route.path());
    }
}

/// Form handle that records every disabled-state change, in order.
#[derive(Default)]
pub struct RecordingForm {
    calls: Arc<Mutex<Vec<bool>>>,
}

impl RecordingForm {
    pub fn calls(&self) -> Vec<bool> {
        self.calls.lock().clone()
    }
}

impl ReviewForm for RecordingForm {
    fn set_disabled(&self, disabled: bool) {
        self.calls.lock().push(disabled);
    }
}
