//! Tutor course catalog.
//!
//! Read-only catalog data for the tutor screen: the four language courses
//! and the CEFR level ladder. Progress figures are display placeholders.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// CEFR levels selectable in the tutor screen.
pub const LEVELS: &[&str] = &["A1", "A2", "B1", "B2", "C1"];

/// A course offered by the tutor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub lessons: u32,
    /// Completion percentage, 0–100.
    pub progress: u8,
}

static CATALOG: Lazy<Vec<Course>> = Lazy::new(|| {
    vec![
        Course {
            id: "libras".to_string(),
            title: "LIBRAS".to_string(),
            subtitle: "Brazilian Sign Language".to_string(),
            description: "Master Brazilian Sign Language with AI-powered gesture recognition"
                .to_string(),
            lessons: 24,
            progress: 35,
        },
        Course {
            id: "english".to_string(),
            title: "ENGLISH".to_string(),
            subtitle: "International Standard".to_string(),
            description: "Learn English with conversational AI and real-time feedback".to_string(),
            lessons: 48,
            progress: 60,
        },
        Course {
            id: "spanish".to_string(),
            title: "SPANISH".to_string(),
            subtitle: "Latin American".to_string(),
            description: "Immersive Spanish learning with native speaker simulation".to_string(),
            lessons: 36,
            progress: 15,
        },
        Course {
            id: "portuguese".to_string(),
            title: "PORTUGUESE".to_string(),
            subtitle: "Brazilian Variant".to_string(),
            description: "Perfect your Portuguese with advanced grammar and pronunciation"
                .to_string(),
            lessons: 32,
            progress: 80,
        },
    ]
});

/// All courses, in display order.
pub fn catalog() -> &'static [Course] {
    &CATALOG
}

/// Looks up a course by its id.
pub fn find_course(id: &str) -> Option<&'static Course> {
    CATALOG.iter().find(|course| course.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_contents() {
        let courses = catalog();
        assert_eq!(courses.len(), 4);

        let ids: Vec<&str> = courses.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["libras", "english", "spanish", "portuguese"]);

        for course in courses {
            assert!(course.progress <= 100);
            assert!(course.lessons > 0);
        }
    }

    #[test]
    fn test_find_course() {
        assert_eq!(find_course("english").unwrap().lessons, 48);
        assert!(find_course("klingon").is_none());
    }

    #[test]
    fn test_level_ladder() {
        assert_eq!(LEVELS, &["A1", "A2", "B1", "B2", "C1"]);
    }
}
