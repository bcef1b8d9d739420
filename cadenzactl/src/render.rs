use std::io::{self, Write};

use cadenza_model::{AuthorizationStatus, MediaItem, MediaItemCollection};
use serde::Serialize;

/// Output format selected by `--json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    pub fn from_flag(json: bool) -> Self {
        if json { Format::Json } else { Format::Text }
    }
}

#[derive(Serialize)]
struct StatusLine {
    status: AuthorizationStatus,
}

pub fn status(
    out: &mut impl Write,
    format: Format,
    status: AuthorizationStatus,
) -> anyhow::Result<()> {
    match format {
        Format::Text => writeln!(out, "authorization: {status}")?,
        Format::Json => json_line(out, &StatusLine { status })?,
    }
    Ok(())
}

pub fn items(
    out: &mut impl Write,
    format: Format,
    items: &[MediaItem],
) -> anyhow::Result<()> {
    match format {
        Format::Json => json_line(out, &items)?,
        Format::Text => {
            for item in items {
                writeln!(out, "{}", item_line(item))?;
            }
            writeln!(out, "{} item(s)", items.len())?;
        }
    }
    Ok(())
}

pub fn collections(
    out: &mut impl Write,
    format: Format,
    collections: &[MediaItemCollection],
) -> anyhow::Result<()> {
    match format {
        Format::Json => json_line(out, &collections)?,
        Format::Text => {
            for collection in collections {
                let heading = collection
                    .representative_item()
                    .map(collection_heading)
                    .unwrap_or_else(|| "(empty)".to_string());
                writeln!(out, "{heading} [{} item(s)]", collection.count())?;
                for item in collection.items() {
                    writeln!(out, "  {}", item_line(item))?;
                }
            }
            writeln!(out, "{} collection(s)", collections.len())?;
        }
    }
    Ok(())
}

fn item_line(item: &MediaItem) -> String {
    let title = item.title.as_deref().unwrap_or("(untitled)");
    let artist = item.artist.as_deref().unwrap_or("unknown artist");
    let album = item.album_title.as_deref().unwrap_or("-");
    format!(
        "{:>6}  {title} | {artist} | {album} | plays {}",
        item.persistent_id, item.play_count
    )
}

fn collection_heading(item: &MediaItem) -> String {
    match (&item.album_title, &item.album_artist, &item.artist) {
        (Some(album), Some(by), _) | (Some(album), None, Some(by)) => {
            format!("{album} ({by})")
        }
        (Some(album), None, None) => album.clone(),
        (None, _, Some(artist)) => artist.clone(),
        (None, _, None) => item
            .title
            .clone()
            .unwrap_or_else(|| item.persistent_id.to_string()),
    }
}

fn json_line<T: Serialize + ?Sized>(
    out: &mut impl Write,
    value: &T,
) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
