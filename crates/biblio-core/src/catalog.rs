use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Undergraduate,
    Postgraduate,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Self::Undergraduate => "Undergraduate",
            Self::Postgraduate => "Postgraduate",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Undergraduate => "undergraduate",
            Self::Postgraduate => "postgraduate",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Undergraduate => Self::Postgraduate,
            Self::Postgraduate => Self::Undergraduate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub code: String,
    pub name: String,
    pub credits: u8,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    pub name: String,
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Year {
    pub year: String,
    pub semesters: Vec<Semester>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
    pub description: String,
    pub years: Vec<Year>,
}

/// The static syllabus hierarchy. Loaded once, read-only for the session.
///
/// Lookups are by exact string match against the level-scoped unique keys.
/// An unknown key yields an empty slice, never an error: absence is a valid
/// "nothing to show" case for the projections downstream.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogTree {
    #[serde(default)]
    pub undergraduate: Vec<Department>,
    #[serde(default)]
    pub postgraduate: Vec<Department>,
}

impl CatalogTree {
    pub fn departments_for(&self, level: Level) -> &[Department] {
        match level {
            Level::Undergraduate => &self.undergraduate,
            Level::Postgraduate => &self.postgraduate,
        }
    }

    pub fn department(&self, level: Level, name: &str) -> Option<&Department> {
        self.departments_for(level)
            .iter()
            .find(|department| department.name == name)
    }

    pub fn years_for(&self, level: Level, department: &str) -> &[Year] {
        self.department(level, department)
            .map(|department| department.years.as_slice())
            .unwrap_or(&[])
    }

    pub fn semesters_for(&self, level: Level, department: &str, year: &str) -> &[Semester] {
        self.years_for(level, department)
            .iter()
            .find(|entry| entry.year == year)
            .map(|entry| entry.semesters.as_slice())
            .unwrap_or(&[])
    }

    pub fn courses_for(
        &self,
        level: Level,
        department: &str,
        year: &str,
        semester: &str,
    ) -> &[Course] {
        self.semesters_for(level, department, year)
            .iter()
            .find(|entry| entry.name == semester)
            .map(|entry| entry.courses.as_slice())
            .unwrap_or(&[])
    }

    pub fn course(
        &self,
        level: Level,
        department: &str,
        year: &str,
        semester: &str,
        code: &str,
    ) -> Option<&Course> {
        self.courses_for(level, department, year, semester)
            .iter()
            .find(|course| course.code == code)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn tree() -> CatalogTree {
        CatalogTree {
            undergraduate: vec![Department {
                name: "Computer Science".to_string(),
                description: "Software and systems".to_string(),
                years: vec![Year {
                    year: "2nd Year".to_string(),
                    semesters: vec![Semester {
                        name: "Semester 3".to_string(),
                        courses: vec![Course {
                            code: "CS301".to_string(),
                            name: "Data Structures".to_string(),
                            credits: 4,
                            kind: "Core".to_string(),
                        }],
                    }],
                }],
            }],
            postgraduate: Vec::new(),
        }
    }

    #[test]
    fn unknown_keys_yield_empty_slices() {
        let tree = tree();
        assert!(tree.years_for(Level::Undergraduate, "History").is_empty());
        assert!(tree
            .semesters_for(Level::Undergraduate, "Computer Science", "4th Year")
            .is_empty());
        assert!(tree
            .courses_for(Level::Undergraduate, "Computer Science", "2nd Year", "Semester 1")
            .is_empty());
        assert!(tree.departments_for(Level::Postgraduate).is_empty());
    }

    #[test]
    fn lookups_resolve_by_exact_key() {
        let tree = tree();
        let courses =
            tree.courses_for(Level::Undergraduate, "Computer Science", "2nd Year", "Semester 3");
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].code, "CS301");

        let course = tree
            .course(Level::Undergraduate, "Computer Science", "2nd Year", "Semester 3", "CS301")
            .expect("course present");
        assert_eq!(course.name, "Data Structures");
        assert_eq!(course.credits, 4);
    }

    #[test]
    fn level_toggle_round_trips() {
        assert_eq!(Level::Undergraduate.next(), Level::Postgraduate);
        assert_eq!(Level::Postgraduate.next(), Level::Undergraduate);
    }
}
