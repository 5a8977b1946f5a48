use serde::Serialize;

/// One of the four emission categories in a breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Transportation,
    HomeEnergy,
    Food,
    Consumption,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Transportation,
        Category::HomeEnergy,
        Category::Food,
        Category::Consumption,
    ];

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Transportation => "Transportation",
            Category::HomeEnergy => "Home Energy",
            Category::Food => "Food",
            Category::Consumption => "Consumption",
        }
    }
}

/// Annual emissions in metric tons CO2e, split by category.
///
/// `total` is always the sum of the four categories, added in field order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionsBreakdown {
    pub transportation: f64,
    pub home_energy: f64,
    pub food: f64,
    pub consumption: f64,
    pub total: f64,
}

impl EmissionsBreakdown {
    pub fn new(transportation: f64, home_energy: f64, food: f64, consumption: f64) -> Self {
        Self {
            transportation,
            home_energy,
            food,
            consumption,
            total: transportation + home_energy + food + consumption,
        }
    }

    /// Value for a single category.
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Transportation => self.transportation,
            Category::HomeEnergy => self.home_energy,
            Category::Food => self.food,
            Category::Consumption => self.consumption,
        }
    }

    /// Category values in display order.
    pub fn categories(&self) -> [(Category, f64); 4] {
        Category::ALL.map(|c| (c, self.get(c)))
    }

    /// The category with the highest emissions. Ties go to the earlier category.
    pub fn largest_category(&self) -> Category {
        self.categories()
            .into_iter()
            .fold((Category::Transportation, f64::MIN), |best, (c, v)| {
                if v > best.1 { (c, v) } else { best }
            })
            .0
    }

    /// Relative bar widths in percent: `category / max × 100`.
    ///
    /// All zeros when every category is zero.
    pub fn bar_widths(&self) -> [(Category, f64); 4] {
        let max = self
            .categories()
            .into_iter()
            .map(|(_, v)| v)
            .fold(0.0, f64::max);

        self.categories().map(|(c, v)| {
            let width = if max > 0.0 { v / max * 100.0 } else { 0.0 };
            (c, width)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum() {
        let b = EmissionsBreakdown::new(1.25, 3.5, 2.0, 0.85);
        assert_eq!(b.total, 1.25 + 3.5 + 2.0 + 0.85);
    }

    #[test]
    fn test_bar_widths_relative_to_max() {
        let b = EmissionsBreakdown::new(2.0, 4.0, 1.0, 0.0);
        let widths = b.bar_widths();
        assert!((widths[0].1 - 50.0).abs() < 1e-9);
        assert!((widths[1].1 - 100.0).abs() < 1e-9);
        assert!((widths[2].1 - 25.0).abs() < 1e-9);
        assert_eq!(widths[3].1, 0.0);
    }

    #[test]
    fn test_bar_widths_all_zero() {
        let b = EmissionsBreakdown::new(0.0, 0.0, 0.0, 0.0);
        assert!(b.bar_widths().iter().all(|(_, w)| *w == 0.0));
    }

    #[test]
    fn test_largest_category() {
        let b = EmissionsBreakdown::new(1.0, 7.0, 3.3, 2.0);
        assert_eq!(b.largest_category(), Category::HomeEnergy);

        let tie = EmissionsBreakdown::new(2.0, 2.0, 1.0, 1.0);
        assert_eq!(tie.largest_category(), Category::Transportation);
    }
}
