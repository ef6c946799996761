//! Startup configuration for the typedex CLI

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use typedex_chart::TypeChart;
use typedex_dex::{EntityIndex, InfoService};

/// Dataset file looked up when neither `--data` nor `TYPEDEX_DATA` is given
pub const DEFAULT_DATASET: &str = "pokemon_data_pokeapi.csv";

#[derive(Parser, Debug)]
#[command(
    name = "typedex",
    version,
    about = "Look up type weaknesses, strengths and counters"
)]
pub struct Config {
    /// CSV dataset with Name, Type1 and Type2 columns
    #[arg(long, env = "TYPEDEX_DATA", default_value = DEFAULT_DATASET)]
    pub data: PathBuf,

    /// JSON type chart to use instead of the built-in one
    #[arg(long, env = "TYPEDEX_CHART")]
    pub chart: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Names to look up; reads one name per line from stdin when omitted
    pub names: Vec<String>,
}

impl Config {
    /// Load the configured chart, or the built-in one
    pub fn load_chart(&self) -> Result<TypeChart> {
        let Some(path) = &self.chart else {
            return Ok(TypeChart::standard());
        };

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read type chart from {}", path.display()))?;

        TypeChart::from_json_str(&contents)
            .with_context(|| format!("Invalid type chart in {}", path.display()))
    }

    /// Load chart and dataset into a ready-to-query service
    pub fn load_service(&self) -> Result<InfoService> {
        let chart = self.load_chart()?;
        let index = EntityIndex::from_path(&self.data)
            .with_context(|| format!("Failed to load dataset from {}", self.data.display()))?;

        tracing::info!(
            entities = index.len(),
            dataset = %self.data.display(),
            custom_chart = self.chart.is_some(),
            "Loaded dataset"
        );

        Ok(InfoService::new(chart, index))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;
    use typedex_chart::Type;

    use super::*;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn config(data: PathBuf, chart: Option<PathBuf>) -> Config {
        Config {
            data,
            chart,
            json: false,
            names: Vec::new(),
        }
    }

    #[test]
    fn test_parse_defaults() {
        let config = Config::try_parse_from(["typedex", "Pikachu", "Mew"]).unwrap();
        assert_eq!(config.names, vec!["Pikachu", "Mew"]);
        assert!(!config.json);
        // TYPEDEX_DATA may be set in the environment running the tests
        if std::env::var_os("TYPEDEX_DATA").is_none() {
            assert_eq!(config.data, PathBuf::from(DEFAULT_DATASET));
        }
    }

    #[test]
    fn test_parse_flags() {
        let config = Config::try_parse_from([
            "typedex",
            "--data",
            "dex.csv",
            "--chart",
            "chart.json",
            "--json",
        ])
        .unwrap();
        assert_eq!(config.data, PathBuf::from("dex.csv"));
        assert_eq!(config.chart, Some(PathBuf::from("chart.json")));
        assert!(config.json);
        assert!(config.names.is_empty());
    }

    #[test]
    fn test_load_service() {
        let data = write_temp("Name,Type1,Type2\nCharizard,Fire,Flying\nSquirtle,Water,\n");
        let service = config(data.path().to_path_buf(), None)
            .load_service()
            .unwrap();
        assert_eq!(service.index().len(), 2);
        assert_eq!(service.chart(), &TypeChart::standard());
    }

    #[test]
    fn test_load_custom_chart() {
        let mut chart = serde_json::to_value(TypeChart::standard()).unwrap();
        chart["Normal"]["weak"] = serde_json::json!(["Fighting", "Fairy"]);
        let chart_file = write_temp(&chart.to_string());
        let data = write_temp("Name,Type1,Type2\nSnorlax,Normal,\n");

        let config = config(
            data.path().to_path_buf(),
            Some(chart_file.path().to_path_buf()),
        );
        let service = config.load_service().unwrap();
        assert!(
            service
                .chart()
                .relation_of(Type::Normal)
                .weak
                .contains(Type::Fairy)
        );
    }

    #[test]
    fn test_load_invalid_chart() {
        let chart_file = write_temp(r#"{ "Normal": { "weak": ["Sound"] } }"#);
        let config = config(
            PathBuf::from(DEFAULT_DATASET),
            Some(chart_file.path().to_path_buf()),
        );
        let err = config.load_chart().unwrap_err();
        assert!(format!("{:#}", err).contains("Sound"));
    }

    #[test]
    fn test_load_missing_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path().join("missing.csv"), None);
        let err = config.load_service().unwrap_err();
        assert!(err.to_string().contains("missing.csv"));
    }

    #[test]
    fn test_load_bad_dataset_names_row() {
        let data = write_temp("Name,Type1,Type2\nPikachu,Electric,\nMissingno,Bird,\n");
        let err = config(data.path().to_path_buf(), None)
            .load_service()
            .unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Row 2"));
        assert!(message.contains("Bird"));
    }
}
