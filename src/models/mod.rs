mod breakdown;
mod choice;
mod survey;
mod tip;

pub use breakdown::{Category, EmissionsBreakdown};
pub use choice::{
    CommuteMode, Diet, FoodWaste, Frequency, GreenEnergy, HeatingSource, HomeSize,
    LightingEfficiency, PaperUsage, PurchaseFrequency, RecyclingFrequency, WaterUsage,
};
pub use survey::{
    ConsumptionAnswers, FoodAnswers, HomeEnergyAnswers, SurveyResponse, TransportationAnswers,
};
pub use tip::AdvisoryTip;
