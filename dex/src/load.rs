//! CSV dataset loading
//!
//! Expects a header row with `Name`, `Type1` and `Type2` columns (matched
//! case-insensitively, in any order; other columns are ignored). `Type2` may
//! be empty or the column may be absent entirely.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use typedex_chart::Type;

use crate::DataLoadError;
use crate::entity::Entity;
use crate::index::EntityIndex;

const NAME_COLUMN: &str = "Name";
const TYPE1_COLUMN: &str = "Type1";
const TYPE2_COLUMN: &str = "Type2";

struct Columns {
    name: usize,
    type1: usize,
    type2: Option<usize>,
}

impl Columns {
    fn locate(headers: &csv::StringRecord) -> Result<Self, DataLoadError> {
        let find = |column: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(column));
        Ok(Self {
            name: find(NAME_COLUMN).ok_or(DataLoadError::MissingColumn(NAME_COLUMN))?,
            type1: find(TYPE1_COLUMN).ok_or(DataLoadError::MissingColumn(TYPE1_COLUMN))?,
            type2: find(TYPE2_COLUMN),
        })
    }
}

impl EntityIndex {
    /// Load a dataset from a CSV file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DataLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Loading entity dataset");
        Self::from_reader(file)
    }

    /// Load a dataset from CSV text.
    ///
    /// Any malformed row fails the whole load; rows are numbered from 1 for
    /// the first data row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataLoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers().map_err(DataLoadError::Header)?;
        let columns = Columns::locate(headers)?;

        let mut entities = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let row = i + 1;
            let record = result.map_err(|source| DataLoadError::Csv { row, source })?;
            entities.push(parse_row(&record, &columns, row)?);
        }

        Ok(Self::from_entities(entities))
    }
}

fn parse_row(
    record: &csv::StringRecord,
    columns: &Columns,
    row: usize,
) -> Result<Entity, DataLoadError> {
    let field = |index: usize| record.get(index).unwrap_or("");

    let name = field(columns.name);
    if name.is_empty() {
        return Err(DataLoadError::MissingField {
            row,
            field: NAME_COLUMN,
        });
    }

    let parse_type = |raw: &str| {
        raw.parse::<Type>()
            .map_err(|source| DataLoadError::UnknownType {
                row,
                name: name.to_string(),
                source,
            })
    };

    let type1 = match field(columns.type1) {
        "" => {
            return Err(DataLoadError::MissingField {
                row,
                field: TYPE1_COLUMN,
            });
        }
        raw => parse_type(raw)?,
    };

    let type2 = match columns.type2.map(field) {
        None | Some("") => None,
        Some(raw) => Some(parse_type(raw)?),
    };

    Ok(Entity::new(name, type1, type2))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::fixtures::SAMPLE_CSV;

    #[test]
    fn test_load_sample() {
        let index = EntityIndex::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(index.len(), 11);

        let first = index.iter().next().unwrap();
        assert_eq!(first.name, "Bulbasaur");
        assert_eq!(first.type1, Type::Grass);
        assert_eq!(first.type2, Some(Type::Poison));

        let pikachu = index.find_by_name("Pikachu").unwrap();
        assert_eq!(pikachu.type2, None);
    }

    #[test]
    fn test_column_order_and_extra_columns() {
        let csv = "id,type2,NAME,Type1,generation\n\
                   6,Flying,Charizard,Fire,1\n\
                   25,,Pikachu,Electric,1\n";
        let index = EntityIndex::from_reader(csv.as_bytes()).unwrap();
        let charizard = index.find_by_name("charizard").unwrap();
        assert_eq!(charizard.type1, Type::Fire);
        assert_eq!(charizard.type2, Some(Type::Flying));
        assert_eq!(index.find_by_name("pikachu").unwrap().type2, None);
    }

    #[test]
    fn test_missing_type2_column() {
        let csv = "Name,Type1\nSnorlax,Normal\n";
        let index = EntityIndex::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(index.find_by_name("Snorlax").unwrap().type2, None);
    }

    #[test]
    fn test_short_row_treated_as_missing_type2() {
        let csv = "Name,Type1,Type2\nSnorlax,Normal\n";
        let index = EntityIndex::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(index.find_by_name("Snorlax").unwrap().type2, None);
    }

    #[test]
    fn test_whitespace_trimmed() {
        let csv = "Name , Type1 , Type2\n  Gengar , ghost , POISON \n";
        let index = EntityIndex::from_reader(csv.as_bytes()).unwrap();
        let gengar = index.find_by_name("Gengar").unwrap();
        assert_eq!(gengar.type1, Type::Ghost);
        assert_eq!(gengar.type2, Some(Type::Poison));
    }

    #[test]
    fn test_missing_column() {
        let csv = "Name,Type2\nSnorlax,\n";
        let err = EntityIndex::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn("Type1")));
    }

    #[test]
    fn test_unknown_type_names_row() {
        let csv = "Name,Type1,Type2\nPikachu,Electric,\nMissingno,Bird,Normal\n";
        match EntityIndex::from_reader(csv.as_bytes()).unwrap_err() {
            DataLoadError::UnknownType { row, name, source } => {
                assert_eq!(row, 2);
                assert_eq!(name, "Missingno");
                assert_eq!(source.0, "Bird");
            }
            other => panic!("expected unknown type error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_second_type() {
        let csv = "Name,Type1,Type2\nTerapagos,Normal,Stellar\n";
        let err = EntityIndex::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataLoadError::UnknownType { row: 1, .. }));
        assert!(err.to_string().contains("Terapagos"));
    }

    #[test]
    fn test_empty_name_or_type1() {
        let csv = "Name,Type1,Type2\n,Fire,\n";
        assert!(matches!(
            EntityIndex::from_reader(csv.as_bytes()).unwrap_err(),
            DataLoadError::MissingField { row: 1, field: "Name" }
        ));

        let csv = "Name,Type1,Type2\nCharmander,Fire,\nVulpix,,\n";
        assert!(matches!(
            EntityIndex::from_reader(csv.as_bytes()).unwrap_err(),
            DataLoadError::MissingField { row: 2, field: "Type1" }
        ));
    }

    #[test]
    fn test_malformed_header() {
        let csv: &[u8] = b"Name,Type\xff1\nPikachu,Electric\n";
        let err = EntityIndex::from_reader(csv).unwrap_err();
        assert!(matches!(err, DataLoadError::Header(_)));
        assert!(err.to_string().starts_with("Malformed CSV header:"));
    }

    #[test]
    fn test_malformed_row_numbered_from_one() {
        let csv: &[u8] = b"Name,Type1,Type2\nPikachu,Electric,\nM\xffw,Psychic,\n";
        match EntityIndex::from_reader(csv).unwrap_err() {
            DataLoadError::Csv { row, .. } => assert_eq!(row, 2),
            other => panic!("expected csv error, got {:?}", other),
        }
    }

    #[test]
    fn test_headers_only() {
        let index = EntityIndex::from_reader("Name,Type1,Type2\n".as_bytes()).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();

        let index = EntityIndex::from_path(file.path()).unwrap();
        assert_eq!(index.len(), 11);
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        match EntityIndex::from_path(&path).unwrap_err() {
            DataLoadError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected io error, got {:?}", other),
        }
    }
}
