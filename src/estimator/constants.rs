use crate::models::{
    CommuteMode, Diet, FoodWaste, Frequency, GreenEnergy, HeatingSource, HomeSize,
    LightingEfficiency, PaperUsage, PurchaseFrequency, RecyclingFrequency, WaterUsage,
};

// ─────────────────────────────────────────────────────────────────────────────
// Collector fallbacks
// ─────────────────────────────────────────────────────────────────────────────

/// Vehicle efficiency assumed when none is given, and the baseline car factors
/// are quoted against.
pub const DEFAULT_VEHICLE_MPG: f64 = 25.0;

/// Thermostat setting assumed when none is given (°F).
pub const DEFAULT_THERMOSTAT_F: i32 = 68;

pub const DEFAULT_HOUSEHOLD_SIZE: u32 = 1;

// ─────────────────────────────────────────────────────────────────────────────
// Transportation
// ─────────────────────────────────────────────────────────────────────────────

pub const WORKDAYS_PER_YEAR: f64 = 250.0;

/// Commute legs per workday (there and back).
pub const COMMUTE_LEGS_PER_DAY: f64 = 2.0;

pub const KG_PER_TON: f64 = 1000.0;

/// Flat per-trip averages in tons CO2e.
pub const SHORT_FLIGHT_TONS: f64 = 0.25;
pub const LONG_FLIGHT_TONS: f64 = 0.8;

/// Emissions per mile (kg CO2e) for a commute mode at the baseline mpg.
///
/// Only the car modes are later scaled by fuel efficiency.
pub fn commute_factor(mode: CommuteMode) -> f64 {
    match mode {
        CommuteMode::CarAlone => 0.411,
        CommuteMode::CarCarpool => 0.205,
        CommuteMode::ElectricCar => 0.15,
        CommuteMode::PublicTransit => 0.14,
        CommuteMode::Bike | CommuteMode::Walk | CommuteMode::Remote => 0.0,
        CommuteMode::Unrecognized => 0.0,
    }
}

/// Whether the commute factor depends on vehicle mpg.
pub fn is_fuel_scaled(mode: CommuteMode) -> bool {
    matches!(mode, CommuteMode::CarAlone | CommuteMode::CarCarpool)
}

// ─────────────────────────────────────────────────────────────────────────────
// Home energy
// ─────────────────────────────────────────────────────────────────────────────

pub const SOLAR_PANEL_MULT: f64 = 0.5;

/// Above this setting heating runs hotter than typical.
pub const THERMOSTAT_WARM_F: i32 = 70;
pub const THERMOSTAT_WARM_MULT: f64 = 1.1;

/// Below this setting heating runs cooler than typical.
pub const THERMOSTAT_COOL_F: i32 = 65;
pub const THERMOSTAT_COOL_MULT: f64 = 0.9;

/// Base annual home emissions (tons) for a single occupant.
pub fn home_size_base(size: HomeSize) -> f64 {
    match size {
        HomeSize::Small => 4.5,
        HomeSize::Medium => 7.0,
        HomeSize::Large => 10.0,
        HomeSize::Unrecognized => 7.0,
    }
}

pub fn green_energy_mult(level: GreenEnergy) -> f64 {
    match level {
        GreenEnergy::Yes => 0.3,
        GreenEnergy::Partial => 0.65,
        GreenEnergy::No | GreenEnergy::Unrecognized => 1.0,
    }
}

pub fn heating_mult(source: HeatingSource) -> f64 {
    match source {
        HeatingSource::NaturalGas => 1.2,
        HeatingSource::Electric => 1.0,
        HeatingSource::Oil => 1.4,
        HeatingSource::HeatPump => 0.7,
        HeatingSource::Other => 0.8,
        HeatingSource::Unrecognized => 1.0,
    }
}

pub fn lighting_mult(lighting: LightingEfficiency) -> f64 {
    match lighting {
        LightingEfficiency::All => 0.9,
        LightingEfficiency::Most => 0.95,
        LightingEfficiency::Some => 1.0,
        LightingEfficiency::None => 1.1,
        LightingEfficiency::Unrecognized => 1.0,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Food
// ─────────────────────────────────────────────────────────────────────────────

/// Base annual food emissions (tons) by diet.
pub fn diet_base(diet: Diet) -> f64 {
    match diet {
        Diet::Vegan => 1.5,
        Diet::Vegetarian => 1.7,
        Diet::Pescatarian => 2.0,
        Diet::LowMeat => 2.5,
        Diet::RegularMeat => 3.3,
        Diet::HighMeat => 4.2,
        Diet::Unrecognized => 3.3,
    }
}

pub fn local_food_mult(freq: Frequency) -> f64 {
    match freq {
        Frequency::Always => 0.85,
        Frequency::Often => 0.90,
        Frequency::Sometimes => 0.95,
        Frequency::Rarely => 1.0,
        Frequency::Never => 1.05,
        Frequency::Unrecognized => 1.0,
    }
}

pub fn food_waste_mult(waste: FoodWaste) -> f64 {
    match waste {
        FoodWaste::None => 0.9,
        FoodWaste::Little => 1.0,
        FoodWaste::Moderate => 1.15,
        FoodWaste::Lot => 1.3,
        FoodWaste::Unrecognized => 1.0,
    }
}

pub fn organic_food_mult(freq: Frequency) -> f64 {
    match freq {
        Frequency::Always => 0.95,
        Frequency::Often => 0.97,
        Frequency::Sometimes | Frequency::Rarely | Frequency::Never => 1.0,
        Frequency::Unrecognized => 1.0,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Consumption (additive terms in tons unless noted)
// ─────────────────────────────────────────────────────────────────────────────

pub const COMPOSTING_CREDIT: f64 = 0.1;

pub const DAYS_PER_YEAR: f64 = 365.0;

/// Data-center emissions per streaming hour (kg CO2e).
pub const STREAMING_KG_PER_HOUR: f64 = 0.055;

pub fn recycling_base(freq: RecyclingFrequency) -> f64 {
    match freq {
        RecyclingFrequency::Always => 0.3,
        RecyclingFrequency::Usually => 0.4,
        RecyclingFrequency::Sometimes => 0.6,
        RecyclingFrequency::Rarely => 0.8,
        RecyclingFrequency::Never => 1.0,
        RecyclingFrequency::Unrecognized => 0.6,
    }
}

pub fn single_use_plastic_tons(freq: Frequency) -> f64 {
    match freq {
        Frequency::Never => 0.2,
        Frequency::Rarely => 0.4,
        Frequency::Sometimes => 0.6,
        Frequency::Often => 0.8,
        Frequency::Always => 1.0,
        Frequency::Unrecognized => 0.6,
    }
}

pub fn new_clothes_tons(freq: PurchaseFrequency) -> f64 {
    match freq {
        PurchaseFrequency::Rarely => 0.3,
        PurchaseFrequency::Occasionally => 0.6,
        PurchaseFrequency::Often => 1.2,
        PurchaseFrequency::Unrecognized => 0.6,
    }
}

/// Multiplier on the recycling, composting, plastics and clothing subtotal.
pub fn second_hand_mult(freq: Frequency) -> f64 {
    match freq {
        Frequency::Always => 0.5,
        Frequency::Often => 0.7,
        Frequency::Sometimes => 0.85,
        Frequency::Rarely => 0.95,
        Frequency::Never => 1.0,
        Frequency::Unrecognized => 1.0,
    }
}

pub fn electronics_tons(freq: PurchaseFrequency) -> f64 {
    match freq {
        PurchaseFrequency::Rarely => 0.3,
        PurchaseFrequency::Occasionally => 0.6,
        PurchaseFrequency::Often => 1.0,
        PurchaseFrequency::Unrecognized => 0.6,
    }
}

pub fn water_usage_tons(usage: WaterUsage) -> f64 {
    match usage {
        WaterUsage::Low => 0.1,
        WaterUsage::Moderate => 0.2,
        WaterUsage::High => 0.35,
        WaterUsage::Unrecognized => 0.2,
    }
}

pub fn paper_usage_tons(usage: PaperUsage) -> f64 {
    match usage {
        PaperUsage::Minimal => 0.1,
        PaperUsage::Moderate => 0.25,
        PaperUsage::High => 0.5,
        PaperUsage::Unrecognized => 0.25,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tip thresholds (tons, strictly greater than)
// ─────────────────────────────────────────────────────────────────────────────

pub const TRANSPORT_ALTERNATIVES_THRESHOLD: f64 = 3.0;
pub const TRANSPORT_EFFICIENCY_THRESHOLD: f64 = 2.0;
pub const HOME_RENEWABLE_THRESHOLD: f64 = 5.0;
pub const HOME_THERMOSTAT_THRESHOLD: f64 = 4.0;
pub const FOOD_PLANT_BASED_THRESHOLD: f64 = 3.0;
pub const FOOD_LOCAL_THRESHOLD: f64 = 2.5;
pub const CONSUMPTION_REDUCE_THRESHOLD: f64 = 2.5;
pub const CONSUMPTION_SECONDHAND_THRESHOLD: f64 = 2.0;
pub const TOTAL_OFFSET_THRESHOLD: f64 = 10.0;
