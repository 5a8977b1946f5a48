use std::fmt::Display;
use std::str::FromStr;

use dialoguer::{Confirm, Input, Select};

use crate::error::{FootprintError, Result};
use crate::models::{
    CommuteMode, ConsumptionAnswers, Diet, FoodAnswers, FoodWaste, Frequency, GreenEnergy,
    HeatingSource, HomeEnergyAnswers, HomeSize, LightingEfficiency, PaperUsage,
    PurchaseFrequency, RecyclingFrequency, SurveyResponse, TransportationAnswers, WaterUsage,
};
use crate::signup::SignupForm;

/// Prompt for a number, accepting the default on empty input.
fn prompt_number<T>(prompt: &str, default: T) -> Result<T>
where
    T: FromStr + Display,
{
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| FootprintError::InvalidInput(format!("Invalid number: {}", input.trim())))
}

/// Prompt for a non-negative number.
fn prompt_non_negative(prompt: &str, default: f64) -> Result<f64> {
    let value: f64 = prompt_number(prompt, default)?;
    if value < 0.0 {
        return Err(FootprintError::InvalidInput(format!(
            "{} must be >= 0",
            prompt
        )));
    }
    Ok(value)
}

/// Let the user pick one of a choice's known answers.
fn select_choice<T: Copy + Display>(prompt: &str, options: &[T], default: usize) -> Result<T> {
    let labels: Vec<String> = options.iter().map(|o| o.to_string()).collect();

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default.min(options.len().saturating_sub(1)))
        .interact()?;

    options
        .get(selection)
        .copied()
        .ok_or_else(|| FootprintError::InvalidInput("Selection out of range".to_string()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

pub fn prompt_transportation() -> Result<TransportationAnswers> {
    println!("--- Transportation ---");
    let commute_distance_miles =
        prompt_non_negative("One-way commute distance (miles)", 0.0)?;
    let commute_mode = select_choice("How do you usually commute?", CommuteMode::ALL, 0)?;

    let vehicle_mpg = if matches!(commute_mode, CommuteMode::CarAlone | CommuteMode::CarCarpool) {
        prompt_number("Vehicle fuel efficiency (mpg)", 25.0)?
    } else {
        25.0
    };

    let short_flights_per_year = prompt_number("Short flights per year (under 3 hours)", 0)?;
    let long_flights_per_year = prompt_number("Long flights per year (3+ hours)", 0)?;

    Ok(TransportationAnswers {
        commute_distance_miles,
        commute_mode,
        vehicle_mpg,
        short_flights_per_year,
        long_flights_per_year,
    })
}

pub fn prompt_home_energy() -> Result<HomeEnergyAnswers> {
    println!("--- Home Energy ---");
    let home_size = select_choice("Home size", HomeSize::ALL, 1)?;
    let household_size: u32 = prompt_number("People in your household", 1)?;
    let has_solar_panels = prompt_yes_no("Do you have solar panels?", false)?;
    let green_energy = select_choice("Green energy plan?", GreenEnergy::ALL, 2)?;
    let heating_source = select_choice("Primary heating source", HeatingSource::ALL, 0)?;
    let thermostat_f = prompt_number("Winter thermostat setting (°F)", 68)?;
    let lighting_efficiency =
        select_choice("How many of your bulbs are LED?", LightingEfficiency::ALL, 2)?;

    Ok(HomeEnergyAnswers {
        home_size,
        household_size: household_size.max(1),
        has_solar_panels,
        green_energy,
        heating_source,
        thermostat_f,
        lighting_efficiency,
    })
}

pub fn prompt_food() -> Result<FoodAnswers> {
    println!("--- Food ---");
    Ok(FoodAnswers {
        diet: select_choice("Diet", Diet::ALL, 4)?,
        local_food: select_choice("How often do you buy local food?", Frequency::ALL, 2)?,
        food_waste: select_choice("How much food do you waste?", FoodWaste::ALL, 1)?,
        organic_food: select_choice("How often do you buy organic?", Frequency::ALL, 2)?,
    })
}

pub fn prompt_consumption() -> Result<ConsumptionAnswers> {
    println!("--- Consumption ---");
    Ok(ConsumptionAnswers {
        recycling: select_choice("How often do you recycle?", RecyclingFrequency::ALL, 2)?,
        composts: prompt_yes_no("Do you compost?", false)?,
        single_use_plastic: select_choice(
            "How often do you use single-use plastics?",
            Frequency::ALL,
            2,
        )?,
        new_clothes: select_choice(
            "How often do you buy new clothes?",
            PurchaseFrequency::ALL,
            1,
        )?,
        second_hand: select_choice("How often do you buy secondhand?", Frequency::ALL, 2)?,
        electronics: select_choice(
            "How often do you buy new electronics?",
            PurchaseFrequency::ALL,
            1,
        )?,
        streaming_hours_per_day: prompt_non_negative("Streaming/gaming hours per day", 0.0)?,
        water_usage: select_choice("Water usage", WaterUsage::ALL, 1)?,
        paper_usage: select_choice("Paper usage", PaperUsage::ALL, 1)?,
    })
}

/// Walk the user through all four survey sections.
pub fn collect_survey() -> Result<SurveyResponse> {
    let transportation = prompt_transportation()?;
    println!();
    let home_energy = prompt_home_energy()?;
    println!();
    let food = prompt_food()?;
    println!();
    let consumption = prompt_consumption()?;

    Ok(SurveyResponse {
        transportation,
        home_energy,
        food,
        consumption,
    })
}

fn prompt_text(prompt: &str, preset: Option<String>) -> Result<String> {
    match preset {
        Some(value) => Ok(value),
        None => Ok(Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?),
    }
}

/// Fill in any signup fields not given on the command line.
pub fn collect_signup(
    full_name: Option<String>,
    email: Option<String>,
    access_code: Option<String>,
) -> Result<SignupForm> {
    Ok(SignupForm {
        full_name: prompt_text("Full name", full_name)?,
        email: prompt_text("Email", email)?,
        access_code: prompt_text("Access code", access_code)?,
    })
}
