//! `cadenzactl`: browse a catalog fixture through the permission-gated facade.

mod fixture;
mod render;

use std::{io, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use cadenza_core::{CatalogConfig, ConfigSource, MediaLibrary, SortBy};
use cadenza_model::{
    ComparisonMode, GroupingMode, ItemField, PersistentId, PredicateInfo,
    SortOrder,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::fixture::CatalogFixture;
use crate::render::Format;

#[derive(Parser, Debug)]
#[command(
    name = "cadenzactl",
    version,
    about = "Query a media catalog fixture through the Cadenza facade"
)]
struct Cli {
    /// TOML catalog fixture to serve queries from
    #[arg(long, value_name = "FILE")]
    catalog: PathBuf,
    /// Facade configuration (TOML or JSON); falls back to CADENZA_CONFIG_*
    /// and cadenza.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Print results as JSON
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the current authorization status without prompting
    Status,
    /// Request catalog access
    Authorize,
    /// List every song
    Songs(SortArgs),
    /// List songs whose property matches a value
    Find(MatchArgs),
    /// List every album
    Albums(SortArgs),
    /// List collections whose items match a value
    AlbumsMatching {
        #[command(flatten)]
        matching: MatchArgs,
        /// How matching items are grouped
        #[arg(long, value_enum, default_value_t = GroupingArg::Album)]
        grouping: GroupingArg,
    },
}

#[derive(Args, Debug)]
struct SortArgs {
    /// Property to sort by; store order when omitted
    #[arg(long, value_enum)]
    sort: Option<FieldArg>,
    #[arg(long)]
    descending: bool,
}

impl SortArgs {
    fn order(&self) -> SortOrder {
        if self.descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}

#[derive(Args, Debug)]
struct MatchArgs {
    /// Property to match on
    #[arg(long, value_enum)]
    by: ByArg,
    /// Value to look for; ids are numeric
    #[arg(long)]
    value: String,
    /// Substring match instead of equality
    #[arg(long)]
    contains: bool,
}

impl MatchArgs {
    fn predicate(&self) -> Result<PredicateInfo> {
        self.by.predicate(&self.value)
    }

    fn comparison(&self) -> ComparisonMode {
        if self.contains {
            ComparisonMode::Contains
        } else {
            ComparisonMode::EqualTo
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FieldArg {
    Title,
    Album,
    Artist,
    AlbumArtist,
    Genre,
    Composer,
    PlayCount,
    Duration,
    DateAdded,
}

impl From<FieldArg> for ItemField {
    fn from(val: FieldArg) -> Self {
        match val {
            FieldArg::Title => ItemField::Title,
            FieldArg::Album => ItemField::AlbumTitle,
            FieldArg::Artist => ItemField::Artist,
            FieldArg::AlbumArtist => ItemField::AlbumArtist,
            FieldArg::Genre => ItemField::Genre,
            FieldArg::Composer => ItemField::Composer,
            FieldArg::PlayCount => ItemField::PlayCount,
            FieldArg::Duration => ItemField::Duration,
            FieldArg::DateAdded => ItemField::DateAdded,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ByArg {
    Id,
    Title,
    Album,
    AlbumId,
    Artist,
    ArtistId,
    AlbumArtist,
    AlbumArtistId,
    Genre,
    GenreId,
    Composer,
    ComposerId,
}

impl ByArg {
    fn predicate(self, value: &str) -> Result<PredicateInfo> {
        let id = || -> Result<PersistentId> {
            value
                .trim()
                .parse::<u64>()
                .map(PersistentId::new)
                .with_context(|| {
                    format!("expected a numeric id, got '{value}'")
                })
        };
        let text = || value.to_string();

        Ok(match self {
            ByArg::Id => PredicateInfo::ById(id()?),
            ByArg::Title => PredicateInfo::ByTitle(text()),
            ByArg::Album => PredicateInfo::ByAlbumTitle(text()),
            ByArg::AlbumId => PredicateInfo::ByAlbumId(id()?),
            ByArg::Artist => PredicateInfo::ByArtist(text()),
            ByArg::ArtistId => PredicateInfo::ByArtistId(id()?),
            ByArg::AlbumArtist => PredicateInfo::ByAlbumArtist(text()),
            ByArg::AlbumArtistId => PredicateInfo::ByAlbumArtistId(id()?),
            ByArg::Genre => PredicateInfo::ByGenre(text()),
            ByArg::GenreId => PredicateInfo::ByGenreId(id()?),
            ByArg::Composer => PredicateInfo::ByComposer(text()),
            ByArg::ComposerId => PredicateInfo::ByComposerId(id()?),
        })
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum GroupingArg {
    Title,
    Album,
    Artist,
    AlbumArtist,
    Composer,
    Genre,
    PodcastTitle,
}

impl From<GroupingArg> for GroupingMode {
    fn from(val: GroupingArg) -> Self {
        match val {
            GroupingArg::Title => GroupingMode::Title,
            GroupingArg::Album => GroupingMode::Album,
            GroupingArg::Artist => GroupingMode::Artist,
            GroupingArg::AlbumArtist => GroupingMode::AlbumArtist,
            GroupingArg::Composer => GroupingMode::Composer,
            GroupingArg::Genre => GroupingMode::Genre,
            GroupingArg::PodcastTitle => GroupingMode::PodcastTitle,
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<CatalogConfig> {
    let (config, source) = match path {
        Some(path) => (
            CatalogConfig::load_from_file(path)?,
            ConfigSource::File(path.clone()),
        ),
        None => CatalogConfig::load_from_env()?,
    };
    debug!(?source, ?config, "catalog configuration loaded");
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,cadenza=info,cadenzactl=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let fixture = CatalogFixture::load(&cli.catalog)?;
    info!(
        items = fixture.items.len(),
        status = %fixture.status,
        "catalog fixture loaded"
    );

    let library = MediaLibrary::builder(Arc::new(fixture.into_store()))
        .config(config)
        .build();
    let format = Format::from_flag(cli.json);
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Status => {
            render::status(&mut out, format, library.authorization_status())?
        }
        Command::Authorize => {
            let status = library.request_authorization().await?;
            render::status(&mut out, format, status)?;
        }
        Command::Songs(sort) => {
            let key = sort.sort.map(|field| SortBy::field(field.into()));
            let songs = library.songs(key, sort.order()).await?;
            render::items(&mut out, format, &songs)?;
        }
        Command::Find(matching) => {
            let songs = library
                .songs_matching_with(
                    &matching.predicate()?,
                    matching.comparison(),
                )
                .await?;
            render::items(&mut out, format, &songs)?;
        }
        Command::Albums(sort) => {
            let key =
                sort.sort.map(|field| SortBy::representative(field.into()));
            let albums = library.albums(key, sort.order()).await?;
            render::collections(&mut out, format, &albums)?;
        }
        Command::AlbumsMatching { matching, grouping } => {
            let albums = library
                .albums_matching(
                    &matching.predicate()?,
                    matching.comparison(),
                    grouping.into(),
                )
                .await?;
            render::collections(&mut out, format, &albums)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn id_predicates_require_numbers() {
        assert_eq!(
            ByArg::AlbumId.predicate(" 12 ").unwrap(),
            PredicateInfo::ByAlbumId(PersistentId::new(12))
        );
        assert!(ByArg::GenreId.predicate("jazz").is_err());
        assert_eq!(
            ByArg::Artist.predicate("Björk").unwrap(),
            PredicateInfo::ByArtist("Björk".into())
        );
    }
}
