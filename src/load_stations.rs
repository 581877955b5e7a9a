use crate::{Error, Generator, Station};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub stations: Vec<Station>,

    // Entries skipped because they did not match the station schema.
    pub quarantined: usize,
}

impl Generator {
    pub fn load_stations(&self) -> Result<Dataset, Error> {
        let path = &self.config.data;
        let text = self.read(path)?;

        let document: Value = match serde_json::from_str(&text) {
            Ok(document) => document,
            Err(err) => {
                return Err(Error::ParseError(format!(
                    "Could not parse \"{}\" ({}).",
                    path.display(),
                    err
                )))
            }
        };

        // An absent or null `stations` field is an empty list.
        let entries = match document {
            Value::Object(mut fields) => match fields.remove("stations") {
                None | Some(Value::Null) => vec![],
                Some(Value::Array(entries)) => entries,
                Some(_) => {
                    return Err(Error::ParseError(format!(
                        "Field \"stations\" in \"{}\" is not an array.",
                        path.display()
                    )))
                }
            },
            _ => {
                return Err(Error::ParseError(format!(
                    "Could not parse \"{}\" (expected a JSON object).",
                    path.display()
                )))
            }
        };

        let mut dataset = Dataset {
            stations: vec![],
            quarantined: 0,
        };

        for (index, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<Station>(entry) {
                Ok(station) => dataset.stations.push(station),
                Err(err) => {
                    if self.config.strict {
                        return Err(Error::ParseError(format!(
                            "Invalid station #{} in \"{}\" ({}).",
                            index,
                            path.display(),
                            err
                        )));
                    }

                    tracing::warn!(index, error = %err, "Skipping invalid station");
                    dataset.quarantined += 1;
                }
            }
        }

        Ok(dataset)
    }
}
