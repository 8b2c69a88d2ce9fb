use crate::utils::error::MenuError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Menu course. Declaration order is menu order and drives `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Course {
    #[default]
    Starters,
    Mains,
    Desserts,
}

impl Course {
    pub const ALL: [Course; 3] = [Course::Starters, Course::Mains, Course::Desserts];

    pub fn label(&self) -> &'static str {
        match self {
            Course::Starters => "Starters",
            Course::Mains => "Mains",
            Course::Desserts => "Desserts",
        }
    }

    /// Exact, case-sensitive label lookup.
    pub fn from_label(label: &str) -> Option<Course> {
        Course::ALL.into_iter().find(|course| course.label() == label)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Course {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Course::ALL
            .into_iter()
            .find(|course| course.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MenuError::UnknownCourse {
                label: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishEntry {
    pub dish_name: String,
    pub description: String,
    pub course: Course,
    pub price: f64,
}

/// Course selection on the filter screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseFilter {
    #[default]
    All,
    Only(Course),
}

impl CourseFilter {
    /// Exact label lookup: only `"All"` or a course label as written.
    pub fn from_label(label: &str) -> Option<CourseFilter> {
        if label == "All" {
            return Some(CourseFilter::All);
        }
        Course::from_label(label).map(CourseFilter::Only)
    }

    pub fn matches(&self, dish: &DishEntry) -> bool {
        match self {
            CourseFilter::All => true,
            CourseFilter::Only(course) => dish.course == *course,
        }
    }
}

impl fmt::Display for CourseFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseFilter::All => f.write_str("All"),
            CourseFilter::Only(course) => course.fmt(f),
        }
    }
}

impl FromStr for CourseFilter {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CourseFilter::All);
        }
        s.parse().map(CourseFilter::Only)
    }
}

/// Average price per course; only courses with at least one dish are present.
pub type CourseAverages = BTreeMap<Course, f64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_labels_round_trip() {
        for course in Course::ALL {
            assert_eq!(course.label().parse::<Course>().unwrap(), course);
        }
        assert_eq!(" mains ".parse::<Course>().unwrap(), Course::Mains);
        assert!(matches!(
            "Drinks".parse::<Course>(),
            Err(MenuError::UnknownCourse { .. })
        ));
    }

    #[test]
    fn test_course_filter_parse() {
        assert_eq!("All".parse::<CourseFilter>().unwrap(), CourseFilter::All);
        assert_eq!(
            "desserts".parse::<CourseFilter>().unwrap(),
            CourseFilter::Only(Course::Desserts)
        );
        assert!("Soups".parse::<CourseFilter>().is_err());
        assert_eq!(CourseFilter::Only(Course::Mains).to_string(), "Mains");
    }

    #[test]
    fn test_exact_label_lookup() {
        assert_eq!(Course::from_label("Mains"), Some(Course::Mains));
        assert_eq!(Course::from_label("mains"), None);
        assert_eq!(CourseFilter::from_label("All"), Some(CourseFilter::All));
        assert_eq!(CourseFilter::from_label("ALL"), None);
        assert_eq!(CourseFilter::from_label(" Starters "), None);
    }

    #[test]
    fn test_dish_serializes_camel_case() {
        let dish = DishEntry {
            dish_name: "Soup".to_string(),
            description: "veg".to_string(),
            course: Course::Starters,
            price: 5.0,
        };
        let json = serde_json::to_value(&dish).unwrap();
        assert_eq!(json["dishName"], "Soup");
        assert_eq!(json["course"], "Starters");
        assert_eq!(json["price"], 5.0);
    }
}
