use serde::{Deserialize, Deserializer, Serialize};

use crate::estimator::constants::{
    DEFAULT_HOUSEHOLD_SIZE, DEFAULT_THERMOSTAT_F, DEFAULT_VEHICLE_MPG,
};
use crate::models::choice::{
    CommuteMode, Diet, FoodWaste, Frequency, GreenEnergy, HeatingSource, HomeSize,
    LightingEfficiency, PaperUsage, PurchaseFrequency, RecyclingFrequency, WaterUsage,
};

/// Treat an explicit `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default_mpg<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(DEFAULT_VEHICLE_MPG))
}

fn null_as_default_household<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(DEFAULT_HOUSEHOLD_SIZE))
}

fn null_as_default_thermostat<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or(DEFAULT_THERMOSTAT_F))
}

/// A complete set of survey answers for one footprint calculation.
///
/// Absent fields in stored answers take the same fallbacks the form
/// collector uses: zero for counts and distances, 25 mpg, 68°F, a household
/// of one, and `Unrecognized` for every choice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurveyResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub transportation: TransportationAnswers,
    #[serde(deserialize_with = "null_as_default")]
    pub home_energy: HomeEnergyAnswers,
    #[serde(deserialize_with = "null_as_default")]
    pub food: FoodAnswers,
    #[serde(deserialize_with = "null_as_default")]
    pub consumption: ConsumptionAnswers,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransportationAnswers {
    /// One-way commute distance in miles.
    #[serde(deserialize_with = "null_as_default")]
    pub commute_distance_miles: f64,
    pub commute_mode: CommuteMode,
    #[serde(deserialize_with = "null_as_default_mpg")]
    pub vehicle_mpg: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub short_flights_per_year: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub long_flights_per_year: u32,
}

impl Default for TransportationAnswers {
    fn default() -> Self {
        Self {
            commute_distance_miles: 0.0,
            commute_mode: CommuteMode::default(),
            vehicle_mpg: DEFAULT_VEHICLE_MPG,
            short_flights_per_year: 0,
            long_flights_per_year: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomeEnergyAnswers {
    pub home_size: HomeSize,
    #[serde(deserialize_with = "null_as_default_household")]
    pub household_size: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub has_solar_panels: bool,
    pub green_energy: GreenEnergy,
    pub heating_source: HeatingSource,
    #[serde(deserialize_with = "null_as_default_thermostat")]
    pub thermostat_f: i32,
    pub lighting_efficiency: LightingEfficiency,
}

impl Default for HomeEnergyAnswers {
    fn default() -> Self {
        Self {
            home_size: HomeSize::default(),
            household_size: DEFAULT_HOUSEHOLD_SIZE,
            has_solar_panels: false,
            green_energy: GreenEnergy::default(),
            heating_source: HeatingSource::default(),
            thermostat_f: DEFAULT_THERMOSTAT_F,
            lighting_efficiency: LightingEfficiency::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FoodAnswers {
    pub diet: Diet,
    pub local_food: Frequency,
    pub food_waste: FoodWaste,
    pub organic_food: Frequency,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsumptionAnswers {
    pub recycling: RecyclingFrequency,
    #[serde(deserialize_with = "null_as_default")]
    pub composts: bool,
    pub single_use_plastic: Frequency,
    pub new_clothes: PurchaseFrequency,
    pub second_hand: Frequency,
    pub electronics: PurchaseFrequency,
    #[serde(deserialize_with = "null_as_default")]
    pub streaming_hours_per_day: f64,
    pub water_usage: WaterUsage,
    pub paper_usage: PaperUsage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_collector_defaults() {
        let survey: SurveyResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(survey.transportation.vehicle_mpg, 25.0);
        assert_eq!(survey.home_energy.household_size, 1);
        assert_eq!(survey.home_energy.thermostat_f, 68);
        assert_eq!(survey.food.diet, Diet::Unrecognized);
        assert_eq!(survey.consumption.streaming_hours_per_day, 0.0);
    }

    #[test]
    fn test_null_fields_take_collector_defaults() {
        let json = r#"{
            "transportation": {"commuteDistanceMiles": null, "vehicleMpg": null, "commuteMode": null},
            "homeEnergy": {"householdSize": null, "thermostatF": null, "hasSolarPanels": null},
            "food": null,
            "consumption": {"composts": null, "streamingHoursPerDay": null, "waterUsage": null}
        }"#;
        let survey: SurveyResponse = serde_json::from_str(json).unwrap();

        assert_eq!(survey, SurveyResponse::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let json = r#"{
            "transportation": {"commuteMode": "bike", "shortFlightsPerYear": 2},
            "homeEnergy": {"homeSize": "large", "hasSolarPanels": true}
        }"#;
        let survey: SurveyResponse = serde_json::from_str(json).unwrap();

        assert_eq!(survey.transportation.commute_mode, CommuteMode::Bike);
        assert_eq!(survey.transportation.short_flights_per_year, 2);
        assert_eq!(survey.transportation.vehicle_mpg, 25.0);
        assert_eq!(survey.home_energy.home_size, HomeSize::Large);
        assert!(survey.home_energy.has_solar_panels);
        assert_eq!(survey.home_energy.thermostat_f, 68);
    }
}
