use crate::estimator::constants::*;
use crate::models::{AdvisoryTip, Category, EmissionsBreakdown};

/// The value a tip rule is tested against.
#[derive(Debug, Clone, Copy)]
enum Trigger {
    Category(Category),
    Total,
}

/// A tip that fires when its trigger value is strictly above the threshold.
struct TipRule {
    trigger: Trigger,
    threshold: f64,
    tip: AdvisoryTip,
}

/// Conditional tips in display priority order.
const TIP_RULES: [TipRule; 9] = [
    TipRule {
        trigger: Trigger::Category(Category::Transportation),
        threshold: TRANSPORT_ALTERNATIVES_THRESHOLD,
        tip: AdvisoryTip {
            icon: "🚴",
            title: "Consider Alternative Transportation",
            body: "Try biking, walking, or public transit for your commute. Carpooling can also reduce your emissions significantly.",
        },
    },
    TipRule {
        trigger: Trigger::Category(Category::Transportation),
        threshold: TRANSPORT_EFFICIENCY_THRESHOLD,
        tip: AdvisoryTip {
            icon: "🚗",
            title: "Drive More Efficiently",
            body: "Maintain proper tire pressure, avoid rapid acceleration, and consider a more fuel-efficient or electric vehicle.",
        },
    },
    TipRule {
        trigger: Trigger::Category(Category::HomeEnergy),
        threshold: HOME_RENEWABLE_THRESHOLD,
        tip: AdvisoryTip {
            icon: "☀️",
            title: "Switch to Renewable Energy",
            body: "Consider installing solar panels or switching to a green energy plan from your utility provider.",
        },
    },
    TipRule {
        trigger: Trigger::Category(Category::HomeEnergy),
        threshold: HOME_THERMOSTAT_THRESHOLD,
        tip: AdvisoryTip {
            icon: "🌡️",
            title: "Optimize Your Thermostat",
            body: "Lower your thermostat by 2-3 degrees in winter and raise it in summer. A programmable thermostat can help save energy.",
        },
    },
    TipRule {
        trigger: Trigger::Category(Category::Food),
        threshold: FOOD_PLANT_BASED_THRESHOLD,
        tip: AdvisoryTip {
            icon: "🥗",
            title: "Eat More Plant-Based Meals",
            body: "Reducing meat consumption, especially beef, can significantly lower your carbon footprint. Try Meatless Mondays!",
        },
    },
    TipRule {
        trigger: Trigger::Category(Category::Food),
        threshold: FOOD_LOCAL_THRESHOLD,
        tip: AdvisoryTip {
            icon: "🌾",
            title: "Buy Local and Seasonal",
            body: "Shop at farmers markets and choose local, seasonal produce to reduce transportation emissions.",
        },
    },
    TipRule {
        trigger: Trigger::Category(Category::Consumption),
        threshold: CONSUMPTION_REDUCE_THRESHOLD,
        tip: AdvisoryTip {
            icon: "♻️",
            title: "Reduce, Reuse, Recycle",
            body: "Focus on reducing consumption first, reusing items when possible, and recycling properly. Avoid single-use plastics.",
        },
    },
    TipRule {
        trigger: Trigger::Category(Category::Consumption),
        threshold: CONSUMPTION_SECONDHAND_THRESHOLD,
        tip: AdvisoryTip {
            icon: "👕",
            title: "Shop Secondhand",
            body: "Buy thrifted clothing and items when possible. The fashion industry has a significant carbon footprint.",
        },
    },
    TipRule {
        trigger: Trigger::Total,
        threshold: TOTAL_OFFSET_THRESHOLD,
        tip: AdvisoryTip {
            icon: "🌳",
            title: "Support Carbon Offset Programs",
            body: "Consider supporting reforestation or renewable energy projects to offset your remaining emissions.",
        },
    },
];

/// Appended to every tip list.
pub const CLOSING_TIP: AdvisoryTip = AdvisoryTip {
    icon: "📚",
    title: "Stay Informed",
    body: "Keep learning about climate action and share your knowledge with others. Join CAT events to make a bigger impact!",
};

/// Generate advisory tips for a result, in fixed priority order.
///
/// Rules are independent, so one category can trigger both of its tips. The
/// closing tip is always last.
pub fn generate_tips(total: f64, breakdown: &EmissionsBreakdown) -> Vec<AdvisoryTip> {
    let mut tips: Vec<AdvisoryTip> = TIP_RULES
        .iter()
        .filter(|rule| {
            let value = match rule.trigger {
                Trigger::Category(category) => breakdown.get(category),
                Trigger::Total => total,
            };
            value > rule.threshold
        })
        .map(|rule| rule.tip)
        .collect();

    tips.push(CLOSING_TIP);
    tips
}
