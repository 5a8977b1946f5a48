use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::SurveyResponse;

/// Load survey answers from a JSON file.
///
/// Missing fields take the collector's defaults; unknown choice values are
/// kept as `Unrecognized` rather than rejected.
pub fn load_survey<P: AsRef<Path>>(path: P) -> Result<SurveyResponse> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let survey: SurveyResponse = serde_json::from_str(&content)?;

    tracing::info!(path = %path.display(), "loaded survey answers");
    Ok(survey)
}

/// Save survey answers to a JSON file.
pub fn save_survey<P: AsRef<Path>>(path: P, survey: &SurveyResponse) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(survey)?;
    fs::write(path, json)?;

    tracing::info!(path = %path.display(), "saved survey answers");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CommuteMode, ConsumptionAnswers, Diet, Frequency, HeatingSource};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_and_save_roundtrip() {
        let json = r#"{
            "transportation": {"commuteDistanceMiles": 12.5, "commuteMode": "car-alone", "vehicleMpg": 32},
            "homeEnergy": {"heatingSource": "heat-pump", "householdSize": 3},
            "food": {"diet": "vegetarian"}
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let survey = load_survey(file.path()).unwrap();
        assert_eq!(survey.transportation.commute_mode, CommuteMode::CarAlone);
        assert_eq!(survey.transportation.vehicle_mpg, 32.0);
        assert_eq!(survey.home_energy.heating_source, HeatingSource::HeatPump);
        assert_eq!(survey.food.diet, Diet::Vegetarian);

        let out_file = NamedTempFile::new().unwrap();
        save_survey(out_file.path(), &survey).unwrap();

        let reloaded = load_survey(out_file.path()).unwrap();
        assert_eq!(reloaded, survey);
    }

    #[test]
    fn test_unknown_choice_is_kept_as_unrecognized() {
        let json = r#"{"transportation": {"commuteMode": "hoverboard"}}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let survey = load_survey(file.path()).unwrap();
        assert_eq!(survey.transportation.commute_mode, CommuteMode::Unrecognized);
    }

    #[test]
    fn test_null_answers_load_as_missing() {
        let json = r#"{
            "food": {"diet": null, "localFood": "often"},
            "homeEnergy": {"thermostatF": null, "householdSize": null},
            "consumption": null
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let survey = load_survey(file.path()).unwrap();
        assert_eq!(survey.food.diet, Diet::Unrecognized);
        assert_eq!(survey.food.local_food, Frequency::Often);
        assert_eq!(survey.home_energy.thermostat_f, 68);
        assert_eq!(survey.home_energy.household_size, 1);
        assert_eq!(survey.consumption, ConsumptionAnswers::default());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        assert!(load_survey(file.path()).is_err());
    }
}
