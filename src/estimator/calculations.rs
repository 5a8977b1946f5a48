use crate::estimator::constants::*;
use crate::models::{
    ConsumptionAnswers, EmissionsBreakdown, FoodAnswers, HomeEnergyAnswers, SurveyResponse,
    TransportationAnswers,
};

/// Clamp a quantity the collector would have defaulted to zero.
fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Vehicle mpg, falling back to the baseline for missing or nonsensical input.
fn effective_mpg(mpg: f64) -> f64 {
    if mpg.is_finite() && mpg > 0.0 {
        mpg
    } else {
        DEFAULT_VEHICLE_MPG
    }
}

/// Thermostat setting, treating an unanswered 0 as the typical 68°F.
fn effective_thermostat(thermostat_f: i32) -> i32 {
    if thermostat_f == 0 {
        DEFAULT_THERMOSTAT_F
    } else {
        thermostat_f
    }
}

/// Commute emission factor in kg CO2e per mile, adjusted for fuel efficiency.
pub fn commute_factor_per_mile(answers: &TransportationAnswers) -> f64 {
    let base = commute_factor(answers.commute_mode);
    if is_fuel_scaled(answers.commute_mode) {
        base / (effective_mpg(answers.vehicle_mpg) / DEFAULT_VEHICLE_MPG)
    } else {
        base
    }
}

/// Annual transportation emissions: commuting plus flights.
pub fn calculate_transportation(answers: &TransportationAnswers) -> f64 {
    let annual_miles =
        non_negative(answers.commute_distance_miles) * COMMUTE_LEGS_PER_DAY * WORKDAYS_PER_YEAR;
    let commute = annual_miles * commute_factor_per_mile(answers) / KG_PER_TON;

    let flights = answers.short_flights_per_year as f64 * SHORT_FLIGHT_TONS
        + answers.long_flights_per_year as f64 * LONG_FLIGHT_TONS;

    commute + flights
}

/// Annual home energy emissions.
///
/// The size base is shared across the household by `sqrt(household_size)`,
/// then solar, green tariff, heating, thermostat and lighting multipliers are
/// applied in that order.
pub fn calculate_home_energy(answers: &HomeEnergyAnswers) -> f64 {
    let household = answers.household_size.max(1) as f64;
    let mut emissions = home_size_base(answers.home_size) / household.sqrt();

    if answers.has_solar_panels {
        emissions *= SOLAR_PANEL_MULT;
    }
    emissions *= green_energy_mult(answers.green_energy);
    emissions *= heating_mult(answers.heating_source);

    let thermostat_f = effective_thermostat(answers.thermostat_f);
    if thermostat_f > THERMOSTAT_WARM_F {
        emissions *= THERMOSTAT_WARM_MULT;
    } else if thermostat_f < THERMOSTAT_COOL_F {
        emissions *= THERMOSTAT_COOL_MULT;
    }

    emissions * lighting_mult(answers.lighting_efficiency)
}

/// Annual food emissions: diet base scaled by sourcing, waste and organic habits.
pub fn calculate_food(answers: &FoodAnswers) -> f64 {
    let emissions = diet_base(answers.diet)
        * local_food_mult(answers.local_food)
        * food_waste_mult(answers.food_waste)
        * organic_food_mult(answers.organic_food);

    emissions.max(0.0)
}

/// Annual consumption emissions (additive model, clamped at zero).
///
/// The second-hand multiplier only scales the recycling, composting, plastics
/// and clothing subtotal; electronics, streaming, water and paper are added
/// after it. This asymmetry is kept for compatibility with existing scores.
pub fn calculate_consumption(answers: &ConsumptionAnswers) -> f64 {
    let mut emissions = recycling_base(answers.recycling);

    if answers.composts {
        emissions -= COMPOSTING_CREDIT;
    }
    emissions += single_use_plastic_tons(answers.single_use_plastic);
    emissions += new_clothes_tons(answers.new_clothes);

    emissions *= second_hand_mult(answers.second_hand);

    emissions += electronics_tons(answers.electronics);
    emissions += streaming_tons(answers.streaming_hours_per_day);
    emissions += water_usage_tons(answers.water_usage);
    emissions += paper_usage_tons(answers.paper_usage);

    emissions.max(0.0)
}

/// Annual data-center emissions for a daily streaming habit.
pub fn streaming_tons(hours_per_day: f64) -> f64 {
    (non_negative(hours_per_day) * DAYS_PER_YEAR * STREAMING_KG_PER_HOUR) / KG_PER_TON
}

/// Compute the full emissions breakdown for a survey response.
pub fn compute(survey: &SurveyResponse) -> EmissionsBreakdown {
    let transportation = calculate_transportation(&survey.transportation);
    let home_energy = calculate_home_energy(&survey.home_energy);
    let food = calculate_food(&survey.food);
    let consumption = calculate_consumption(&survey.consumption);

    let breakdown = EmissionsBreakdown::new(transportation, home_energy, food, consumption);

    tracing::debug!(
        transportation,
        home_energy,
        food,
        consumption,
        total = breakdown.total,
        "computed emissions breakdown"
    );

    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CommuteMode, Diet, FoodWaste, Frequency, GreenEnergy, HeatingSource, HomeSize,
        LightingEfficiency, PaperUsage, PurchaseFrequency, RecyclingFrequency, WaterUsage,
    };

    fn baseline_home() -> HomeEnergyAnswers {
        HomeEnergyAnswers {
            home_size: HomeSize::Medium,
            household_size: 1,
            has_solar_panels: false,
            green_energy: GreenEnergy::No,
            heating_source: HeatingSource::Electric,
            thermostat_f: 68,
            lighting_efficiency: LightingEfficiency::Some,
        }
    }

    fn low_impact_consumption() -> ConsumptionAnswers {
        ConsumptionAnswers {
            recycling: RecyclingFrequency::Always,
            composts: true,
            single_use_plastic: Frequency::Never,
            new_clothes: PurchaseFrequency::Rarely,
            second_hand: Frequency::Always,
            electronics: PurchaseFrequency::Rarely,
            streaming_hours_per_day: 0.0,
            water_usage: WaterUsage::Low,
            paper_usage: PaperUsage::Minimal,
        }
    }

    #[test]
    fn test_car_alone_commute() {
        // 10 miles each way: 5000 miles/yr * 0.411 kg = 2.055 t
        let answers = TransportationAnswers {
            commute_distance_miles: 10.0,
            commute_mode: CommuteMode::CarAlone,
            ..Default::default()
        };
        assert!((calculate_transportation(&answers) - 2.055).abs() < 1e-9);
    }

    #[test]
    fn test_mpg_scales_car_modes_only() {
        let efficient_car = TransportationAnswers {
            commute_distance_miles: 10.0,
            commute_mode: CommuteMode::CarCarpool,
            vehicle_mpg: 50.0,
            ..Default::default()
        };
        // Twice the baseline mpg halves the carpool factor.
        assert!((commute_factor_per_mile(&efficient_car) - 0.1025).abs() < 1e-12);

        let transit = TransportationAnswers {
            commute_mode: CommuteMode::PublicTransit,
            vehicle_mpg: 50.0,
            ..efficient_car.clone()
        };
        assert!((commute_factor_per_mile(&transit) - 0.14).abs() < 1e-12);
    }

    #[test]
    fn test_zero_mpg_uses_baseline() {
        let answers = TransportationAnswers {
            commute_distance_miles: 1.0,
            commute_mode: CommuteMode::CarAlone,
            vehicle_mpg: 0.0,
            ..Default::default()
        };
        assert!((commute_factor_per_mile(&answers) - 0.411).abs() < 1e-12);
    }

    #[test]
    fn test_flights_are_flat_per_trip() {
        let answers = TransportationAnswers {
            short_flights_per_year: 4,
            long_flights_per_year: 2,
            ..Default::default()
        };
        assert!((calculate_transportation(&answers) - 2.6).abs() < 1e-9);
    }

    #[test]
    fn test_home_energy_baseline() {
        assert_eq!(calculate_home_energy(&baseline_home()), 7.0);
    }

    #[test]
    fn test_solar_and_green_stack() {
        let home = HomeEnergyAnswers {
            has_solar_panels: true,
            green_energy: GreenEnergy::Partial,
            ..baseline_home()
        };
        assert!((calculate_home_energy(&home) - 7.0 * 0.5 * 0.65).abs() < 1e-9);
    }

    #[test]
    fn test_thermostat_bands() {
        let warm = HomeEnergyAnswers {
            thermostat_f: 71,
            ..baseline_home()
        };
        let cool = HomeEnergyAnswers {
            thermostat_f: 64,
            ..baseline_home()
        };
        let edge_high = HomeEnergyAnswers {
            thermostat_f: 70,
            ..baseline_home()
        };
        let edge_low = HomeEnergyAnswers {
            thermostat_f: 65,
            ..baseline_home()
        };

        assert!((calculate_home_energy(&warm) - 7.7).abs() < 1e-9);
        assert!((calculate_home_energy(&cool) - 6.3).abs() < 1e-9);
        assert_eq!(calculate_home_energy(&edge_high), 7.0);
        assert_eq!(calculate_home_energy(&edge_low), 7.0);
    }

    #[test]
    fn test_household_of_four_halves_base() {
        let home = HomeEnergyAnswers {
            household_size: 4,
            ..baseline_home()
        };
        assert!((calculate_home_energy(&home) - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_household_treated_as_one() {
        let home = HomeEnergyAnswers {
            household_size: 0,
            ..baseline_home()
        };
        assert_eq!(calculate_home_energy(&home), 7.0);
    }

    #[test]
    fn test_zero_thermostat_treated_as_default() {
        let home = HomeEnergyAnswers {
            thermostat_f: 0,
            ..baseline_home()
        };
        assert_eq!(calculate_home_energy(&home), 7.0);

        // A real cold setting still gets the cool-band discount.
        let cold = HomeEnergyAnswers {
            thermostat_f: 1,
            ..baseline_home()
        };
        assert!((calculate_home_energy(&cold) - 6.3).abs() < 1e-9);
    }

    #[test]
    fn test_food_multipliers_chain() {
        let food = FoodAnswers {
            diet: Diet::HighMeat,
            local_food: Frequency::Never,
            food_waste: FoodWaste::Lot,
            organic_food: Frequency::Always,
        };
        let expected = 4.2 * 1.05 * 1.3 * 0.95;
        assert!((calculate_food(&food) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_unrecognized_diet_uses_regular_meat() {
        let food = FoodAnswers::default();
        assert!((calculate_food(&food) - 3.3).abs() < 1e-12);
    }

    #[test]
    fn test_second_hand_only_scales_early_subtotal() {
        let never = ConsumptionAnswers {
            second_hand: Frequency::Never,
            ..low_impact_consumption()
        };
        let always = low_impact_consumption();

        // Halving applies to the 0.7 subtotal only: difference is 0.35.
        let diff = calculate_consumption(&never) - calculate_consumption(&always);
        assert!((diff - 0.35).abs() < 1e-9);
    }

    #[test]
    fn test_streaming_tons() {
        // 4 h/day * 365 * 0.055 kg = 80.3 kg
        assert!((streaming_tons(4.0) - 0.0803).abs() < 1e-12);
        assert_eq!(streaming_tons(-2.0), 0.0);
        assert_eq!(streaming_tons(f64::NAN), 0.0);
    }

    #[test]
    fn test_compute_total_matches_parts() {
        let survey = SurveyResponse {
            home_energy: baseline_home(),
            consumption: low_impact_consumption(),
            ..Default::default()
        };
        let b = compute(&survey);
        assert_eq!(b.total, b.transportation + b.home_energy + b.food + b.consumption);
    }
}
