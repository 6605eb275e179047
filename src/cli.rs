//! Command-line interface parsing for Recipe Deck
//!
//! This module handles parsing of CLI arguments using clap, including the
//! cuisine filter and the image prefetch options.

use clap::Parser;
use std::path::PathBuf;

use crate::data::Recipe;

/// Recipe Deck - browse recipes and prefetch their images
#[derive(Parser, Debug)]
#[command(name = "recipedeck")]
#[command(about = "Browse recipes from the remote feed and cache their images")]
#[command(version)]
pub struct Cli {
    /// Only list recipes from this cuisine (case-insensitive)
    ///
    /// Examples:
    ///   recipedeck --cuisine british
    ///   recipedeck --cuisine Malaysian --prefetch-images
    #[arg(long, value_name = "CUISINE")]
    pub cuisine: Option<String>,

    /// Download and cache the thumbnail of every listed recipe
    #[arg(long)]
    pub prefetch_images: bool,

    /// Store cached images under this directory instead of the platform
    /// cache path
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,
}

/// Filters recipes by cuisine, case-insensitively
///
/// With no filter, the list is returned unchanged.
pub fn filter_recipes(recipes: Vec<Recipe>, cuisine: Option<&str>) -> Vec<Recipe> {
    match cuisine {
        None => recipes,
        Some(wanted) => recipes
            .into_iter()
            .filter(|recipe| recipe.cuisine.eq_ignore_ascii_case(wanted))
            .collect(),
    }
}
