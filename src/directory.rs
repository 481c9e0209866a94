use std::path::Path;

use anyhow::Context;
use uuid::Uuid;

use crate::models::{PlacementStatus, StudentRecord};

/// Read or parse failure never surfaces: the bundled fallback set is
/// substituted and the cause goes to stderr.
pub async fn load_directory(path: &Path) -> Vec<StudentRecord> {
    match read_directory(path).await {
        Ok(students) => students,
        Err(err) => {
            eprintln!("warning: {err:#}; using the bundled directory");
            fallback_directory()
        }
    }
}

async fn read_directory(path: &Path) -> anyhow::Result<Vec<StudentRecord>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read directory snapshot {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse directory snapshot {}", path.display()))
}

pub async fn write_directory(path: &Path, students: &[StudentRecord]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    let raw = serde_json::to_string_pretty(students)?;
    tokio::fs::write(path, raw)
        .await
        .with_context(|| format!("failed to write directory snapshot {}", path.display()))
}

pub fn fallback_directory() -> Vec<StudentRecord> {
    let record = |id: &str,
                  name: &str,
                  department: &str,
                  year: &str,
                  tech_stack: &str,
                  jri_score: f64,
                  placement_status: PlacementStatus,
                  company: Option<&str>| StudentRecord {
        id: id.to_string(),
        name: name.to_string(),
        department: department.to_string(),
        year: year.to_string(),
        tech_stack: tech_stack.to_string(),
        jri_score,
        placement_status,
        company: company.map(str::to_string),
    };

    vec![
        record(
            "1",
            "Alice Johnson",
            "CSE",
            "4th Year",
            "React/Node.js",
            96.0,
            PlacementStatus::Placed,
            Some("Google"),
        ),
        record(
            "2",
            "Bob Smith",
            "IT",
            "4th Year",
            "Python/Django",
            94.0,
            PlacementStatus::Placed,
            Some("Microsoft"),
        ),
        record(
            "3",
            "Carol Davis",
            "Mechanical",
            "3rd Year",
            "Java/Spring",
            92.0,
            PlacementStatus::InProcess,
            None,
        ),
        record(
            "4",
            "David Wilson",
            "Civil",
            "4th Year",
            "C++/Qt",
            90.0,
            PlacementStatus::Placed,
            Some("Tesla"),
        ),
        record(
            "5",
            "Eva Brown",
            "CSE",
            "3rd Year",
            "React/Node.js",
            88.0,
            PlacementStatus::InProcess,
            None,
        ),
    ]
}

// Upsert by id so the snapshot keeps one record per id; rows without
// an id get a generated one. Returns the number of new records.
pub async fn import_csv(csv_path: &Path, directory_path: &Path) -> anyhow::Result<usize> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        id: Option<String>,
        name: String,
        department: String,
        year: String,
        tech_stack: String,
        jri_score: f64,
        placement_status: PlacementStatus,
        company: Option<String>,
    }

    let mut students = read_directory(directory_path).await.unwrap_or_default();
    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open {}", csv_path.display()))?;
    let mut inserted = 0usize;

    for result in reader.deserialize::<CsvRow>() {
        let row = result.context("malformed CSV row")?;
        let record = StudentRecord {
            id: row.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: row.name,
            department: row.department,
            year: row.year,
            tech_stack: row.tech_stack,
            jri_score: row.jri_score,
            placement_status: row.placement_status,
            company: row.company.filter(|c| !c.is_empty()),
        };

        match students.iter_mut().find(|s| s.id == record.id) {
            Some(existing) => *existing = record,
            None => {
                students.push(record);
                inserted += 1;
            }
        }
    }

    write_directory(directory_path, &students).await?;
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("{}-{}", Uuid::new_v4(), name))
    }

    #[tokio::test]
    async fn missing_snapshot_falls_back() {
        let students = load_directory(Path::new("/nonexistent/students.json")).await;
        assert_eq!(students, fallback_directory());
    }

    #[tokio::test]
    async fn malformed_snapshot_falls_back() {
        let path = scratch_path("students.json");
        std::fs::write(&path, "{ not json").unwrap();
        let students = load_directory(&path).await;
        assert_eq!(students, fallback_directory());
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn snapshot_round_trips() {
        let path = scratch_path("students.json");
        write_directory(&path, &fallback_directory()).await.unwrap();
        let students = load_directory(&path).await;
        assert_eq!(students, fallback_directory());
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn sparse_records_deserialize_with_defaults() {
        let path = scratch_path("students.json");
        std::fs::write(&path, r#"[{"id": "9", "name": "Frank Green"}]"#).unwrap();
        let students = load_directory(&path).await;
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].department, "");
        assert_eq!(students[0].jri_score, 0.0);
        assert_eq!(students[0].placement_status, PlacementStatus::NotStarted);
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn csv_import_upserts_by_id() {
        let directory_path = scratch_path("students.json");
        write_directory(&directory_path, &fallback_directory())
            .await
            .unwrap();

        let csv_path = scratch_path("import.csv");
        std::fs::write(
            &csv_path,
            "id,name,department,year,tech_stack,jri_score,placement_status,company\n\
             1,Alice Johnson,CSE,4th Year,React/Node.js,97,Placed,Google\n\
             ,Grace Hall,IT,2nd Year,Go/Gin,81,Not Started,\n",
        )
        .unwrap();

        let inserted = import_csv(&csv_path, &directory_path).await.unwrap();
        assert_eq!(inserted, 1);

        let students = load_directory(&directory_path).await;
        assert_eq!(students.len(), 6);
        let alice = students.iter().find(|s| s.id == "1").unwrap();
        assert_eq!(alice.jri_score, 97.0);
        let grace = students.iter().find(|s| s.name == "Grace Hall").unwrap();
        assert!(!grace.id.is_empty());
        assert_eq!(grace.company, None);

        let _ = std::fs::remove_file(&directory_path);
        let _ = std::fs::remove_file(&csv_path);
    }
}
