//! Headless bootstrap: wires the store, API client, and navigator the
//! way the UI shell would, runs the startup operations, and logs a
//! catalog summary.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use wtw::api::ApiClient;
use wtw::config::Config;
use wtw::data::{load_movies, load_promo_movie};
use wtw::selectors::{get_genres, get_movies_for_catalog, get_promo_movie};
use wtw::store::Store;
use wtw::user::check_auth;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::load().context("loading configuration")?;
    tracing::info!(base_url = %config.api.base_url, "starting");

    let api = ApiClient::new(&config.api);
    let store = Store::new();

    match check_auth(&store, &api).await {
        Ok(()) => tracing::info!("session is authorized"),
        Err(error) => tracing::info!(error = %error, "session is not authorized"),
    }

    load_movies(&store, &api).await.context("loading catalog")?;
    load_promo_movie(&store, &api)
        .await
        .context("loading promo movie")?;

    store.select(|state| {
        let catalog = get_movies_for_catalog(state);
        let genres = get_genres(state);
        if let Some(promo) = get_promo_movie(state) {
            tracing::info!(title = %promo.title, "promo movie");
        }
        tracing::info!(
            visible = catalog.len(),
            genres = genres.len(),
            "catalog loaded"
        );
    });

    Ok(())
}
