use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::CatalogTree;
use crate::catalog::Level;

const BUILTIN_DATA: &str = include_str!("../data/library.yaml");
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported data format for {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: String },
    #[error(transparent)]
    Integrity(#[from] DataIntegrityError),
}

/// A malformed dataset is a loading fault, caught before the UI starts.
/// The selection core itself assumes keys are unique and never re-checks.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataIntegrityError {
    #[error("duplicate key '{key}' under {scope}")]
    DuplicateKey { scope: String, key: String },
    #[error("empty label under {scope}")]
    EmptyLabel { scope: String },
    #[error("course code '{code}' under {scope} does not match the catalog pattern")]
    InvalidCourseCode { scope: String, code: String },
    #[error("course '{code}' under {scope} has zero credits")]
    ZeroCreditCourse { scope: String, code: String },
    #[error("announcement '{title}' has unparseable date '{date}'")]
    InvalidDate { title: String, date: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryStatistics {
    pub total_books: u32,
    pub total_journals: u32,
    pub total_ebooks: u32,
    pub daily_visitors: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub title: String,
    pub content: String,
    /// ISO `YYYY-MM-DD`; checked at load time.
    pub date: String,
}

impl Announcement {
    pub fn posted_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub day: String,
    pub time: String,
}

/// The whole portal dataset: home-page content plus the syllabus catalog.
/// Loaded once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryData {
    pub statistics: LibraryStatistics,
    pub announcements: Vec<Announcement>,
    pub hours: Vec<OpeningHours>,
    pub syllabi: CatalogTree,
}

impl LibraryData {
    /// The dataset shipped with the binary.
    pub fn builtin() -> Result<Self, DataError> {
        Self::from_yaml_str(BUILTIN_DATA, "<builtin>")
    }

    pub fn from_yaml_str(text: &str, origin: &str) -> Result<Self, DataError> {
        let data: Self = serde_yaml::from_str(text).map_err(|source| DataError::Yaml {
            path: origin.to_string(),
            source,
        })?;
        data.validate()?;
        Ok(data)
    }

    pub fn from_json_str(text: &str, origin: &str) -> Result<Self, DataError> {
        let data: Self = serde_json::from_str(text).map_err(|source| DataError::Json {
            path: origin.to_string(),
            source,
        })?;
        data.validate()?;
        Ok(data)
    }

    /// Load a dataset file, dispatching on the file extension.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let path_display = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path_display.clone(),
            source,
        })?;
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .unwrap_or("");
        let data = match extension {
            "yaml" | "yml" => Self::from_yaml_str(&text, &path_display)?,
            "json" => Self::from_json_str(&text, &path_display)?,
            _ => return Err(DataError::UnsupportedFormat { path: path_display }),
        };
        tracing::info!(path = %path_display, "library dataset loaded");
        Ok(data)
    }

    /// Fail fast on duplicate keys, empty labels, malformed course codes
    /// and unparseable announcement dates.
    pub fn validate(&self) -> Result<(), DataIntegrityError> {
        for level in [Level::Undergraduate, Level::Postgraduate] {
            validate_departments(level, self.syllabi.departments_for(level))?;
        }
        for announcement in &self.announcements {
            if announcement.title.trim().is_empty() {
                return Err(DataIntegrityError::EmptyLabel {
                    scope: "announcements".to_string(),
                });
            }
            if announcement.posted_on().is_none() {
                return Err(DataIntegrityError::InvalidDate {
                    title: announcement.title.clone(),
                    date: announcement.date.clone(),
                });
            }
        }
        Ok(())
    }
}

fn course_code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("^[A-Z]{2,4}[0-9]{2,4}$").expect("literal pattern"))
}

fn check_unique<'a>(
    scope: &str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<(), DataIntegrityError> {
    let mut seen: Vec<&str> = Vec::new();
    for key in keys {
        if key.trim().is_empty() {
            return Err(DataIntegrityError::EmptyLabel {
                scope: scope.to_string(),
            });
        }
        if seen.contains(&key) {
            return Err(DataIntegrityError::DuplicateKey {
                scope: scope.to_string(),
                key: key.to_string(),
            });
        }
        seen.push(key);
    }
    Ok(())
}

fn validate_departments(
    level: Level,
    departments: &[crate::catalog::Department],
) -> Result<(), DataIntegrityError> {
    check_unique(
        level.as_str(),
        departments.iter().map(|department| department.name.as_str()),
    )?;
    for department in departments {
        let department_scope = format!("{}/{}", level.as_str(), department.name);
        check_unique(
            &department_scope,
            department.years.iter().map(|year| year.year.as_str()),
        )?;
        for year in &department.years {
            let year_scope = format!("{department_scope}/{}", year.year);
            check_unique(
                &year_scope,
                year.semesters.iter().map(|semester| semester.name.as_str()),
            )?;
            for semester in &year.semesters {
                let semester_scope = format!("{year_scope}/{}", semester.name);
                check_unique(
                    &semester_scope,
                    semester.courses.iter().map(|course| course.code.as_str()),
                )?;
                for course in &semester.courses {
                    if course.name.trim().is_empty() {
                        return Err(DataIntegrityError::EmptyLabel {
                            scope: semester_scope.clone(),
                        });
                    }
                    if !course_code_pattern().is_match(&course.code) {
                        return Err(DataIntegrityError::InvalidCourseCode {
                            scope: semester_scope.clone(),
                            code: course.code.clone(),
                        });
                    }
                    if course.credits == 0 {
                        return Err(DataIntegrityError::ZeroCreditCourse {
                            scope: semester_scope.clone(),
                            code: course.code.clone(),
                        });
                    }
                }
            }
        }
    }
    Ok(())
}
