// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Data access layer.
//!
//! This module handles all interactions with the SQLite database, including
//! schema creation, loading the track list and the single-row writes made by
//! the entry editor. It uses cached statements for every query.
//!
//! # Tables
//!
//! * `genres` - Stores unique genre names.
//! * `tracks` - Individual audio entries, optionally linked to a genre.

mod model;

use std::{fs, path::Path};

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};

use crate::model::{Genre, Track, TrackFields};

/// Opens a connection to the SQLite database and configures it.
///
/// This function performs the following setup:
/// * **Directory**: Creates the parent directory of the database file.
/// * **WAL Mode**: Enables Write-Ahead Logging.
/// * **Constraints**: Enforces foreign key integrity.
/// * **Schema**: Executes [`create_schema`] to ensure all tables exist.
///
/// # Arguments
///
/// * `path` - The file system path to the SQLite database file.
///
/// # Errors
///
/// Returns an error if:
/// * The database file cannot be opened.
/// * The initial PRAGMA configurations fail.
/// * The schema initialization fails.
pub(crate) fn init_db(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let conn = Connection::open(path)
        .with_context(|| format!("Failed to open database {}", path.display()))?;

    let journal_mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |r| r.get(0))?;
    if journal_mode != "wal" {
        anyhow::bail!(
            "Failed to switch to WAL mode. Current mode: {}",
            journal_mode
        );
    }

    configure(&conn)?;

    Ok(conn)
}

/// Opens a private in-memory database with the full schema.
#[cfg(test)]
pub(crate) fn init_memory_db() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    configure(&conn)?;
    Ok(conn)
}

fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
    ",
    )?;

    conn.set_prepared_statement_cache_capacity(32);

    create_schema(conn)
}

/// Create the database schema.
///
/// Both tables are created only if they do not already exist, so this is
/// safe to run on every start. The work is wrapped in a single transaction.
///
/// # Errors
///
/// Returns an error if the transaction fails, if there are permission issues
/// with the database file, or if the SQL syntax is invalid.
fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "BEGIN;

        CREATE TABLE IF NOT EXISTS genres (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS tracks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            genre_id INTEGER,
            duration INTEGER NOT NULL CHECK (duration BETWEEN 1 AND 1200),
            image_path TEXT,
            audio_path TEXT NOT NULL,
            FOREIGN KEY (genre_id) REFERENCES genres (id)
        );

        CREATE INDEX IF NOT EXISTS idx_tracks_genre_id ON tracks (genre_id);

        COMMIT;",
    )
    .context("Failed to create schema")
}

/// Fetches every track joined with its genre name, in insertion order.
///
/// Tracks without a genre are included, with no genre name.
///
/// # Errors
///
/// Returns an error if the SQL query fails or if there is a type mismatch
/// when mapping the database rows to the [`Track`] struct.
pub(crate) fn fetch_tracks(conn: &Connection) -> Result<Vec<Track>> {
    let sql = "
        SELECT tr.id, tr.title, tr.author, g.name, tr.duration, tr.image_path, tr.audio_path
        FROM tracks tr
        LEFT JOIN genres g ON g.id = tr.genre_id
        ORDER BY tr.id
    ";

    let mut stmt = conn.prepare_cached(sql)?;
    let results = stmt
        .query_map([], Track::from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(results)
}

/// Fetches all genres, sorted alphabetically by name.
pub(crate) fn fetch_genres(conn: &Connection) -> Result<Vec<Genre>> {
    let mut stmt = conn.prepare_cached("SELECT id, name FROM genres ORDER BY name")?;
    let rows = stmt.query_map([], |row| {
        Ok(Genre {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row?);
    }

    Ok(results)
}

/// Inserts a new genre and returns its id.
///
/// # Errors
///
/// Returns an error if a genre with the same name already exists.
pub(crate) fn insert_genre(conn: &Connection, name: &str) -> Result<i64> {
    let mut stmt = conn.prepare_cached("INSERT INTO genres (name) VALUES (?)")?;
    stmt.execute([name])
        .with_context(|| format!("Failed to add genre \"{}\"", name))?;

    Ok(conn.last_insert_rowid())
}

fn genre_id(conn: &Connection, name: Option<&str>) -> Result<Option<i64>> {
    let Some(name) = name else {
        return Ok(None);
    };

    let mut stmt = conn.prepare_cached("SELECT id FROM genres WHERE name = ?")?;
    let id = stmt
        .query_row([name], |row| row.get(0))
        .optional()?
        .with_context(|| format!("Unknown genre \"{}\"", name))?;

    Ok(Some(id))
}

/// Inserts a track and returns its id.
pub(crate) fn insert_track(conn: &Connection, fields: &TrackFields) -> Result<i64> {
    let genre_id = genre_id(conn, fields.genre.as_deref())?;

    let sql = "
        INSERT INTO tracks (title, author, genre_id, duration, image_path, audio_path)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

    let mut stmt = conn.prepare_cached(sql)?;
    stmt.execute(params![
        fields.title,
        fields.author,
        genre_id,
        fields.duration,
        fields.image_path,
        fields.audio_path
    ])
    .context("Failed to insert track")?;

    Ok(conn.last_insert_rowid())
}

/// Overwrites every attribute of an existing track.
///
/// # Errors
///
/// Returns an error if the statement fails or no track has the given id.
pub(crate) fn update_track(conn: &Connection, track_id: i64, fields: &TrackFields) -> Result<()> {
    let genre_id = genre_id(conn, fields.genre.as_deref())?;

    let sql = "
        UPDATE tracks
        SET title = ?1, author = ?2, genre_id = ?3, duration = ?4, image_path = ?5, audio_path = ?6
        WHERE id = ?7";

    let mut stmt = conn.prepare_cached(sql)?;
    let updated = stmt
        .execute(params![
            fields.title,
            fields.author,
            genre_id,
            fields.duration,
            fields.image_path,
            fields.audio_path,
            track_id
        ])
        .context("Failed to update track")?;

    if updated == 0 {
        anyhow::bail!("Track {} no longer exists", track_id);
    }

    Ok(())
}

/// Deletes a track, returning `true` if a row was removed.
pub(crate) fn delete_track(conn: &Connection, track_id: i64) -> Result<bool> {
    let mut stmt = conn.prepare_cached("DELETE FROM tracks WHERE id = ?")?;
    let deleted = stmt.execute([track_id])?;

    Ok(deleted > 0)
}
