use super::{race_list_ops, value_ops};
use chrono::NaiveDate;
use fieldmap_core::model::player::PlayerRecord;
use serde::{Deserialize, Serialize};

/// a row of a cleaned player roster export.
///
/// CSV rows as exported by the roster cleaning step:
/// Program,Age,Gender,Grade,Race List,School,Zip Code,birth_date,Latitude,Longitude
///
/// other columns (address, guardian contact, etc) are ignored.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PlayerRow {
    #[serde(rename = "Program", default)]
    pub program: Option<String>,
    #[serde(rename = "Age", default)]
    pub age: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Grade", default)]
    pub grade: Option<String>,
    #[serde(rename = "Race List", default)]
    pub race_list: Option<String>,
    #[serde(rename = "School", default)]
    pub school: Option<String>,
    #[serde(rename = "Zip Code", default)]
    pub zip_code: Option<String>,
    #[serde(rename = "birth_date", alias = "Birth Date", default)]
    pub birth_date: Option<String>,
    #[serde(
        rename = "Latitude",
        alias = "latitude",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub latitude: Option<f64>,
    #[serde(
        rename = "Longitude",
        alias = "longitude",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub longitude: Option<f64>,
}

impl PlayerRow {
    /// builds a typed player record. values that cannot be interpreted are
    /// logged and left missing rather than failing the row.
    ///
    /// # Arguments
    ///
    /// * `row` - row index, for log messages
    /// * `today` - reference date used to derive an age from the birth date
    ///   when the age column is empty
    pub fn into_record(self, row: usize, today: NaiveDate) -> PlayerRecord {
        let birth_date = self.birth_date.as_deref().and_then(|s| {
            let parsed = value_ops::parse_date(s);
            if parsed.is_none() && !s.trim().is_empty() {
                log::warn!("player row {row} has unreadable birth date '{s}'");
            }
            parsed
        });
        let age = match self.age.as_deref().map(str::trim) {
            Some(a) if !a.is_empty() => {
                let parsed = value_ops::parse_integer(a);
                if parsed.is_none() {
                    log::warn!("player row {row} has non-integer age '{a}'");
                }
                parsed
            }
            _ => birth_date.map(|d| value_ops::age_on(d, today)),
        };
        let (latitude, longitude) =
            value_ops::validate_coordinates(self.latitude, self.longitude).unwrap_or_else(|e| {
                log::warn!("player row {row} location dropped: {e}");
                (None, None)
            });
        PlayerRecord {
            program: self.program,
            age,
            birth_date,
            gender: self.gender,
            grade: self.grade,
            race_list: self
                .race_list
                .as_deref()
                .map(race_list_ops::parse_race_list)
                .unwrap_or_default(),
            school: self.school,
            zip_code: self.zip_code,
            latitude,
            longitude,
        }
    }
}

impl From<&PlayerRecord> for PlayerRow {
    fn from(value: &PlayerRecord) -> Self {
        PlayerRow {
            program: value.program.clone(),
            age: value.age.map(|a| a.to_string()),
            gender: value.gender.clone(),
            grade: value.grade.clone(),
            race_list: Some(race_list_ops::format_race_list(&value.race_list)),
            school: value.school.clone(),
            zip_code: value.zip_code.clone(),
            birth_date: value.birth_date.map(|d| d.format("%Y-%m-%d").to_string()),
            latitude: value.latitude,
            longitude: value.longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
    }

    #[test]
    fn test_into_record() {
        let row = PlayerRow {
            program: Some(String::from("Travel")),
            age: Some(String::from("9.0")),
            race_list: Some(String::from("['black', 'white']")),
            latitude: Some(38.93),
            longitude: Some(-77.05),
            ..Default::default()
        };
        let record = row.into_record(0, today());
        assert_eq!(record.age, Some(9));
        assert_eq!(record.race_list.len(), 2);
        assert!(record.location().is_some());
    }

    #[test]
    fn test_age_derived_from_birth_date_when_missing() {
        let row = PlayerRow {
            birth_date: Some(String::from("2015-08-20")),
            ..Default::default()
        };
        let record = row.into_record(0, today());
        assert_eq!(record.age, Some(9));
        assert_eq!(record.birth_year(), Some(2015));
    }

    #[test]
    fn test_unparseable_age_is_missing() {
        let row = PlayerRow {
            age: Some(String::from("nine")),
            birth_date: Some(String::from("2015-08-20")),
            ..Default::default()
        };
        assert_eq!(row.into_record(0, today()).age, None);
    }

    #[test]
    fn test_out_of_range_location_dropped() {
        let row = PlayerRow {
            latitude: Some(95.0),
            longitude: Some(-77.05),
            ..Default::default()
        };
        let record = row.into_record(0, today());
        assert_eq!(record.latitude, None);
        assert_eq!(record.longitude, None);
    }

    #[test]
    fn test_export_row() {
        let row = PlayerRow {
            program: Some(String::from("Travel")),
            age: Some(String::from("10")),
            race_list: Some(String::from("white, black")),
            birth_date: Some(String::from("2014-05-01")),
            ..Default::default()
        };
        let record = row.into_record(0, today());
        let exported = PlayerRow::from(&record);
        assert_eq!(exported.race_list.as_deref(), Some("['black', 'white']"));
        assert_eq!(exported.birth_date.as_deref(), Some("2014-05-01"));
        assert_eq!(exported.age.as_deref(), Some("10"));
    }
}
