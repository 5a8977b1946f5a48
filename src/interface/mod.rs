pub mod prompts;
pub mod render;

pub use prompts::{
    collect_signup, collect_survey, prompt_consumption, prompt_food, prompt_home_energy,
    prompt_transportation, prompt_yes_no,
};
pub use render::{display_results, display_sample_summary, display_tips, format_tons};
