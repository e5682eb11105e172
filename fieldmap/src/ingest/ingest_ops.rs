use super::{FieldRow, IngestError, PlayerRow};
use chrono::NaiveDate;
use fieldmap_core::model::{
    field::{self, FieldRecord},
    player::PlayerRecord,
};
use kdam::tqdm;
use rayon::prelude::*;
use serde::{de::DeserializeOwned, Serialize};
use std::{io::Read, path::Path};

/// reads a cleaned player roster CSV into typed player records, in file order.
///
/// # Arguments
///
/// * `filepath` - CSV file with a header row
/// * `today` - reference date for deriving ages from birth dates
pub fn read_players(filepath: &Path, today: NaiveDate) -> Result<Vec<PlayerRecord>, IngestError> {
    let reader = open_reader(filepath)?;
    read_players_from(reader, &filepath.to_string_lossy(), today)
}

/// reads cleaned player rows from any CSV source. `source_name` labels errors.
pub fn read_players_from<R: Read>(
    reader: csv::Reader<R>,
    source_name: &str,
    today: NaiveDate,
) -> Result<Vec<PlayerRecord>, IngestError> {
    let rows: Vec<PlayerRow> = deserialize_rows(reader, source_name, "deserialize players")?;
    let players = rows
        .into_par_iter()
        .enumerate()
        .map(|(idx, row)| row.into_record(idx, today))
        .collect::<Vec<_>>();
    log::info!("read {} players from {source_name}", players.len());
    Ok(players)
}

/// reads a cleaned field inventory CSV into typed field records, in file order.
/// every field must have a name, and names must be unique.
pub fn read_fields(filepath: &Path) -> Result<Vec<FieldRecord>, IngestError> {
    let reader = open_reader(filepath)?;
    read_fields_from(reader, &filepath.to_string_lossy())
}

pub fn read_fields_from<R: Read>(
    reader: csv::Reader<R>,
    source_name: &str,
) -> Result<Vec<FieldRecord>, IngestError> {
    let rows: Vec<FieldRow> = deserialize_rows(reader, source_name, "deserialize fields")?;
    let fields = rows
        .into_par_iter()
        .enumerate()
        .map(|(idx, row)| row.into_record(idx))
        .collect::<Result<Vec<_>, String>>()
        .map_err(|msg| IngestError::InvalidRow {
            filepath: String::from(source_name),
            msg,
        })?;
    field::validate_unique_field_names(&fields).map_err(|source| {
        IngestError::InvalidFieldCollection {
            filepath: String::from(source_name),
            source,
        }
    })?;
    log::info!("read {} fields from {source_name}", fields.len());
    Ok(fields)
}

/// writes player records as a roster CSV readable by [`read_players`]
pub fn write_players(filepath: &Path, players: &[PlayerRecord]) -> Result<(), IngestError> {
    write_rows(filepath, players.iter().map(PlayerRow::from))
}

/// writes field records as an inventory CSV readable by [`read_fields`]
pub fn write_fields(filepath: &Path, fields: &[FieldRecord]) -> Result<(), IngestError> {
    write_rows(filepath, fields.iter().map(FieldRow::from))
}

fn open_reader(filepath: &Path) -> Result<csv::Reader<std::fs::File>, IngestError> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_path(filepath)
        .map_err(|source| IngestError::OpenError {
            filepath: filepath.to_string_lossy().to_string(),
            source,
        })
}

fn deserialize_rows<R: Read, T: DeserializeOwned>(
    mut reader: csv::Reader<R>,
    source_name: &str,
    desc: &str,
) -> Result<Vec<T>, IngestError> {
    let iter = tqdm!(
        reader.deserialize::<T>().enumerate(),
        desc = format!("{desc} from {source_name}")
    );
    let rows = iter
        .map(|(row, result)| {
            result.map_err(|source| IngestError::RowError {
                filepath: String::from(source_name),
                row,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    eprintln!();
    Ok(rows)
}

fn write_rows<T: Serialize>(
    filepath: &Path,
    rows: impl Iterator<Item = T>,
) -> Result<(), IngestError> {
    let filepath_str = filepath.to_string_lossy().to_string();
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_path(filepath)
        .map_err(|e| IngestError::CsvWriteError(filepath_str.clone(), e))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| IngestError::CsvWriteError(filepath_str.clone(), e))?;
    }
    writer
        .flush()
        .map_err(|e| IngestError::FlushError(filepath_str, e))
}
