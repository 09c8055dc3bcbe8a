//! Curriculum catalog: static career path definitions and the
//! day-resolution function.
//!
//! The catalog is read-only. It owns all human-readable text and
//! resolves `(path_id, day)` into a [`crate::task::DayTask`],
//! synthesizing a fallback when no explicit entry is registered.

mod curriculum;
mod paths;

pub use curriculum::resolve;

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathCategory {
    #[serde(rename = "Development")]
    Development,
    #[serde(rename = "Data & AI")]
    Data,
    #[serde(rename = "Infrastructure")]
    Infrastructure,
    #[serde(rename = "Design & Product")]
    Design,
    #[serde(rename = "Specialized")]
    Specialized,
}

impl PathCategory {
    pub fn label(&self) -> &'static str {
        match self {
            PathCategory::Development => "Development",
            PathCategory::Data => "Data & AI",
            PathCategory::Infrastructure => "Infrastructure",
            PathCategory::Design => "Design & Product",
            PathCategory::Specialized => "Specialized",
        }
    }
}

/// One contiguous stretch of a path, inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    pub start_day: u32,
    pub end_day: u32,
    pub description: String,
}

/// A fixed curriculum a user commits to. Immutable, loaded once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerPath {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: PathCategory,
    pub icon: String,
    pub total_days: u32,
    pub phases: Vec<Phase>,
}

impl CareerPath {
    /// Phase containing `day`, if any. Phases are contiguous and cover
    /// 1..=total_days, so this only returns None for out-of-range input.
    pub fn phase_for_day(&self, day: u32) -> Option<&Phase> {
        self.phases
            .iter()
            .find(|p| day >= p.start_day && day <= p.end_day)
    }
}

/// The full static catalog.
pub fn career_paths() -> &'static [CareerPath] {
    static PATHS: OnceLock<Vec<CareerPath>> = OnceLock::new();
    PATHS.get_or_init(paths::build_career_paths)
}

pub fn find_path(id: &str) -> Option<&'static CareerPath> {
    career_paths().iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_fifteen_paths_of_two_hundred_days() {
        let paths = career_paths();
        assert_eq!(paths.len(), 15);
        for path in paths {
            assert_eq!(path.total_days, 200, "{}", path.id);
        }
    }

    #[test]
    fn phases_are_contiguous_and_cover_every_day() {
        for path in career_paths() {
            let mut expected_start = 1;
            for phase in &path.phases {
                assert_eq!(
                    phase.start_day, expected_start,
                    "{}: phase {:?} leaves a gap",
                    path.id, phase.name
                );
                assert!(phase.end_day >= phase.start_day);
                expected_start = phase.end_day + 1;
            }
            assert_eq!(expected_start, path.total_days + 1, "{}", path.id);
        }
    }

    #[test]
    fn path_ids_are_unique() {
        let paths = career_paths();
        for (i, a) in paths.iter().enumerate() {
            for b in &paths[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn phase_for_day_picks_the_containing_range() {
        let mern = find_path("p1").unwrap();
        assert_eq!(mern.phase_for_day(1).unwrap().name, "The Web Skeleton");
        assert_eq!(mern.phase_for_day(40).unwrap().name, "The Web Skeleton");
        assert_eq!(mern.phase_for_day(41).unwrap().name, "JS & React Mastery");
        assert_eq!(
            mern.phase_for_day(200).unwrap().name,
            "Placement Readiness"
        );
        assert!(mern.phase_for_day(0).is_none());
        assert!(mern.phase_for_day(201).is_none());
    }
}
