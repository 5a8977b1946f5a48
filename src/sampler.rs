use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::estimator::compute;
use crate::models::{
    Category, CommuteMode, ConsumptionAnswers, Diet, EmissionsBreakdown, FoodAnswers, FoodWaste,
    Frequency, GreenEnergy, HeatingSource, HomeEnergyAnswers, HomeSize, LightingEfficiency,
    PaperUsage, PurchaseFrequency, RecyclingFrequency, SurveyResponse, TransportationAnswers,
    WaterUsage,
};

/// Ranges used when drawing random numeric answers.
#[derive(Debug, Clone)]
pub struct SampleRanges {
    pub commute_distance_miles: (f64, f64),
    pub vehicle_mpg: (f64, f64),
    pub short_flights: (u32, u32),
    pub long_flights: (u32, u32),
    pub household_size: (u32, u32),
    pub thermostat_f: (i32, i32),
    pub streaming_hours: (f64, f64),
}

impl Default for SampleRanges {
    fn default() -> Self {
        Self {
            commute_distance_miles: (0.0, 40.0),
            vehicle_mpg: (15.0, 55.0),
            short_flights: (0, 6),
            long_flights: (0, 4),
            household_size: (1, 6),
            thermostat_f: (60, 75),
            streaming_hours: (0.0, 8.0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub count: usize,
    pub seed: u64,
    pub ranges: SampleRanges,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            count: 100,
            seed: 123,
            ranges: SampleRanges::default(),
        }
    }
}

/// Aggregate statistics over a batch of sampled results.
#[derive(Debug, Clone)]
pub struct SampleSummary {
    pub count: usize,
    pub min_total: f64,
    pub mean_total: f64,
    pub max_total: f64,
    /// How often each category was the largest contributor.
    pub largest_counts: HashMap<Category, usize>,
}

fn pick<T: Copy + Default>(rng: &mut impl Rng, options: &[T]) -> T {
    options.choose(rng).copied().unwrap_or_default()
}

/// Draw one survey with every choice taken from its known answers.
pub fn random_survey(rng: &mut impl Rng, ranges: &SampleRanges) -> SurveyResponse {
    SurveyResponse {
        transportation: TransportationAnswers {
            commute_distance_miles: rng
                .gen_range(ranges.commute_distance_miles.0..=ranges.commute_distance_miles.1),
            commute_mode: pick(rng, CommuteMode::ALL),
            vehicle_mpg: rng.gen_range(ranges.vehicle_mpg.0..=ranges.vehicle_mpg.1),
            short_flights_per_year: rng.gen_range(ranges.short_flights.0..=ranges.short_flights.1),
            long_flights_per_year: rng.gen_range(ranges.long_flights.0..=ranges.long_flights.1),
        },
        home_energy: HomeEnergyAnswers {
            home_size: pick(rng, HomeSize::ALL),
            household_size: rng.gen_range(ranges.household_size.0..=ranges.household_size.1),
            has_solar_panels: rng.gen_bool(0.2),
            green_energy: pick(rng, GreenEnergy::ALL),
            heating_source: pick(rng, HeatingSource::ALL),
            thermostat_f: rng.gen_range(ranges.thermostat_f.0..=ranges.thermostat_f.1),
            lighting_efficiency: pick(rng, LightingEfficiency::ALL),
        },
        food: FoodAnswers {
            diet: pick(rng, Diet::ALL),
            local_food: pick(rng, Frequency::ALL),
            food_waste: pick(rng, FoodWaste::ALL),
            organic_food: pick(rng, Frequency::ALL),
        },
        consumption: ConsumptionAnswers {
            recycling: pick(rng, RecyclingFrequency::ALL),
            composts: rng.gen_bool(0.3),
            single_use_plastic: pick(rng, Frequency::ALL),
            new_clothes: pick(rng, PurchaseFrequency::ALL),
            second_hand: pick(rng, Frequency::ALL),
            electronics: pick(rng, PurchaseFrequency::ALL),
            streaming_hours_per_day: rng
                .gen_range(ranges.streaming_hours.0..=ranges.streaming_hours.1),
            water_usage: pick(rng, WaterUsage::ALL),
            paper_usage: pick(rng, PaperUsage::ALL),
        },
    }
}

/// Score `config.count` random surveys. Same seed, same results.
pub fn run_sampler(config: &SampleConfig) -> Vec<(String, EmissionsBreakdown)> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let results: Vec<(String, EmissionsBreakdown)> = (0..config.count)
        .map(|i| {
            let survey = random_survey(&mut rng, &config.ranges);
            (format!("sample-{}", i + 1), compute(&survey))
        })
        .collect();

    tracing::info!(count = results.len(), seed = config.seed, "sampled surveys");
    results
}

/// Summarize sampled results. `None` for an empty batch.
pub fn summarize(results: &[(String, EmissionsBreakdown)]) -> Option<SampleSummary> {
    if results.is_empty() {
        return None;
    }

    let totals = results.iter().map(|(_, b)| b.total);
    let min_total = totals.clone().fold(f64::MAX, f64::min);
    let max_total = totals.clone().fold(f64::MIN, f64::max);
    let mean_total = totals.sum::<f64>() / results.len() as f64;

    let mut largest_counts = HashMap::new();
    for (_, breakdown) in results {
        *largest_counts.entry(breakdown.largest_category()).or_insert(0) += 1;
    }

    Some(SampleSummary {
        count: results.len(),
        min_total,
        mean_total,
        max_total,
        largest_counts,
    })
}
