use strum::{EnumIter, IntoStaticStr};

/// Every input the rating calculation validates, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum Field {
    #[strum(serialize = "Perfect count")]
    PerfectCount,
    #[strum(serialize = "Great count")]
    GreatCount,
    #[strum(serialize = "Good count")]
    GoodCount,
    #[strum(serialize = "Bad count")]
    BadCount,
    #[strum(serialize = "Miss count")]
    MissCount,
    #[strum(serialize = "Max combo")]
    MaxCombo,
    #[strum(serialize = "Chart level")]
    ChartLevel,
}

impl Field {
    pub fn display_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_field_display_names() {
        assert_eq!(Field::PerfectCount.to_string(), "Perfect count");
        assert_eq!(Field::MaxCombo.to_string(), "Max combo");
        assert_eq!(Field::ChartLevel.to_string(), "Chart level");
    }

    #[test]
    fn test_field_validation_order() {
        let order: Vec<Field> = Field::iter().collect();
        assert_eq!(order.first(), Some(&Field::PerfectCount));
        assert_eq!(order[5], Field::MaxCombo);
        assert_eq!(order.last(), Some(&Field::ChartLevel));
    }
}
