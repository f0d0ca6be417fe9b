//! Pattern 5: Adapter
//! Example: CSV and JSON files with incompatible surfaces behind one convert()
//!
//! Run with: cargo run --bin p05_adapter

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("invalid CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to render converted output: {0}")]
    Render(String),
}

// ============================================================================
// Two adaptees with incompatible surfaces
// ============================================================================

pub struct CsvFile {
    pub filename: String,
    pub data: String,
}

impl CsvFile {
    pub fn new(filename: &str, data: &str) -> Self {
        let file = CsvFile {
            filename: filename.to_string(),
            data: data.to_string(),
        };
        println!("{} received.", file.filename);
        file
    }

    pub fn read_csv(&self) -> Result<Vec<Vec<String>>, ConvertError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(self.data.as_bytes());
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(|field| field.to_string()).collect());
        }
        Ok(rows)
    }

    pub fn write_json(&self, rows: &[Vec<String>]) -> Result<String, ConvertError> {
        Ok(serde_json::to_string_pretty(rows)?)
    }
}

pub struct JsonFile {
    pub filename: String,
    pub data: String,
}

impl JsonFile {
    pub fn new(filename: &str, data: &str) -> Self {
        let file = JsonFile {
            filename: filename.to_string(),
            data: data.to_string(),
        };
        println!("{} received.", file.filename);
        file
    }

    pub fn read_json(&self) -> Result<Value, ConvertError> {
        Ok(serde_json::from_str(&self.data)?)
    }

    pub fn write_csv(&self, value: &Value) -> Result<String, ConvertError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in value.as_array().into_iter().flatten() {
            let fields: Vec<String> = row
                .as_array()
                .into_iter()
                .flatten()
                .map(|cell| match cell {
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                })
                .collect();
            writer.write_record(&fields)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|err| ConvertError::Render(err.to_string()))?;
        String::from_utf8(bytes).map_err(|err| ConvertError::Render(err.to_string()))
    }
}

// ============================================================================
// Adapters presenting the one surface the client knows
// ============================================================================

pub trait Convert {
    fn convert(&self) -> Result<String, ConvertError>;
}

pub struct CsvToJson {
    convertee: CsvFile,
}

impl CsvToJson {
    pub fn new(convertee: CsvFile) -> Self {
        CsvToJson { convertee }
    }
}

impl Convert for CsvToJson {
    fn convert(&self) -> Result<String, ConvertError> {
        let rows = self.convertee.read_csv()?;
        let converted = self.convertee.write_json(&rows)?;
        println!("Conversion complete!");
        Ok(converted)
    }
}

pub struct JsonToCsv {
    convertee: JsonFile,
}

impl JsonToCsv {
    pub fn new(convertee: JsonFile) -> Self {
        JsonToCsv { convertee }
    }
}

impl Convert for JsonToCsv {
    fn convert(&self) -> Result<String, ConvertError> {
        let value = self.convertee.read_json()?;
        let converted = self.convertee.write_csv(&value)?;
        println!("Conversion complete!");
        Ok(converted)
    }
}

fn main() -> Result<(), ConvertError> {
    let csv_file = CsvFile::new("data.csv", "Chetak,2\nContessa,4\n");
    let json_file = JsonFile::new("data.json", r#"[["Chetak", "2"], ["Contessa", "4"]]"#);

    let converters: Vec<Box<dyn Convert>> = vec![
        Box::new(CsvToJson::new(csv_file)),
        Box::new(JsonToCsv::new(json_file)),
    ];
    for converter in &converters {
        let converted = converter.convert()?;
        println!("{}", converted);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_to_json() {
        let adapter = CsvToJson::new(CsvFile::new("data.csv", "a,1\nb,2\n"));
        let converted = adapter.convert().unwrap();
        let decoded: Vec<Vec<String>> = serde_json::from_str(&converted).unwrap();
        assert_eq!(
            decoded,
            vec![
                vec!["a".to_string(), "1".to_string()],
                vec!["b".to_string(), "2".to_string()],
            ]
        );
    }

    #[test]
    fn test_json_to_csv() {
        let adapter = JsonToCsv::new(JsonFile::new("data.json", r#"[["a", "1"], ["b", "2"]]"#));
        let converted = adapter.convert().unwrap();
        assert_eq!(converted, "a,1\nb,2\n");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let adapter = JsonToCsv::new(JsonFile::new("data.json", "not json"));
        assert!(adapter.convert().is_err());
    }

    #[test]
    fn test_adapters_share_one_surface() {
        let converters: Vec<Box<dyn Convert>> = vec![
            Box::new(CsvToJson::new(CsvFile::new("data.csv", "x,9\n"))),
            Box::new(JsonToCsv::new(JsonFile::new("data.json", r#"[["x", "9"]]"#))),
        ];
        for converter in &converters {
            assert!(converter.convert().is_ok());
        }
    }
}
