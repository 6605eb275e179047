//! Recipe Deck - browse recipes from a remote feed
//!
//! Fetches the recipe list, prints it to stdout, and can warm the on-disk
//! image cache with every listed recipe's thumbnail.

mod cache;
mod cli;
mod data;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cache::{DiskStore, HttpFetcher, ImageCacheManager};
use cli::{filter_recipes, Cli};
use data::{Recipe, RecipeClient};

/// Builds the image cache manager, honoring a CLI cache directory override
///
/// Returns `None` when no directory was given and the platform offers no
/// cache location; prefetching is skipped in that case.
fn build_cache_manager(cache_dir: Option<PathBuf>) -> Option<ImageCacheManager> {
    match cache_dir {
        Some(dir) => Some(ImageCacheManager::with_parts(
            DiskStore::with_dir(dir),
            Box::new(HttpFetcher::new()),
        )),
        None => ImageCacheManager::new(),
    }
}

/// Loads every recipe thumbnail concurrently through the cache
///
/// # Returns
/// The number of thumbnails that loaded and the number attempted. Recipes
/// without a thumbnail URL are not attempted.
async fn prefetch_thumbnails(manager: &ImageCacheManager, recipes: &[Recipe]) -> (usize, usize) {
    let mut image_futures = Vec::new();
    for recipe in recipes {
        if let Some(url) = &recipe.photo_url_small {
            image_futures.push(manager.load_image(url));
        }
    }

    let total = image_futures.len();
    let results = futures::future::join_all(image_futures).await;
    let loaded = results.iter().filter(|image| image.is_some()).count();
    (loaded, total)
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so the listing output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = RecipeClient::new();
    let list = match client.fetch_recipes().await {
        Ok(list) => list,
        Err(err) => {
            eprintln!("{}", err.user_message());
            std::process::exit(1);
        }
    };

    let recipes = filter_recipes(list.recipes, cli.cuisine.as_deref());
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }

    for recipe in &recipes {
        println!("{} ({})", recipe.name, recipe.cuisine);
    }
    println!(
        "\n{} recipes as of {}",
        recipes.len(),
        list.fetched_at.format("%Y-%m-%d %H:%M UTC")
    );

    if cli.prefetch_images {
        match build_cache_manager(cli.cache_dir) {
            Some(manager) => {
                let (loaded, total) = prefetch_thumbnails(&manager, &recipes).await;
                println!("Cached {} of {} thumbnails", loaded, total);
            }
            None => {
                eprintln!("No cache directory available; skipping image prefetch");
            }
        }
    }
}
