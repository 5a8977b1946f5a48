pub mod calculations;
pub mod constants;
pub mod tips;

pub use calculations::{
    calculate_consumption, calculate_food, calculate_home_energy, calculate_transportation,
    commute_factor_per_mile, compute, streaming_tons,
};
pub use tips::{generate_tips, CLOSING_TIP};
