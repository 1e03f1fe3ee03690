use std::path::PathBuf;

use thiserror::Error;

use crate::item::ItemKind;

/// A problem with the recipe table.
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("failed to parse recipe table: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("recipe {recipe} references unknown item {item}")]
    UnknownItem { recipe: String, item: String },
    #[error("recipe {recipe} uses a zero count for {item}")]
    ZeroCount { recipe: String, item: String },
    #[error("recipe {recipe} has {count} ingredients, expected 1 to 3")]
    IngredientCount { recipe: String, count: usize },
    #[error("more than one recipe produces {0}")]
    DuplicateOutput(ItemKind),
}

/// A problem with the input script.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("expected 3 initial items, found {found}")]
    MissingInitialItems { found: usize },
    #[error("initial item {name} has invalid count {token:?}")]
    InvalidCount { name: String, token: String },
}

/// A problem with the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Any error that stops a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("failed to read input {path:?}: {source}")]
    Input {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write report {path:?}: {source}")]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error(transparent)]
    Recipe(#[from] RecipeError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
