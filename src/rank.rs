use crate::models::{Leaderboard, RankedStudent, StudentRecord, Tier};

pub const TOP_SPOTS: usize = 3;

/// Sort by JRI score descending and split into the podium and the
/// ranked remainder. The sort must stay stable: equal scores keep
/// their input order, so positions do not jitter across re-renders of
/// the same snapshot.
pub fn rank_students(students: &[StudentRecord]) -> Leaderboard {
    let mut sorted = students.to_vec();
    sorted.sort_by(|a, b| {
        b.jri_score
            .partial_cmp(&a.jri_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let rest = sorted.split_off(sorted.len().min(TOP_SPOTS));
    Leaderboard {
        top: sorted,
        rest: rest
            .into_iter()
            .enumerate()
            .map(|(offset, student)| RankedStudent {
                rank: TOP_SPOTS + offset + 1,
                student,
            })
            .collect(),
    }
}

/// Display badge class for a score. 70.0 lands on Mid here while
/// `report::metric_tier` puts it on Low; the two classifiers disagree
/// at that boundary and must keep doing so until product says otherwise.
pub fn badge_tier(score: f64) -> Tier {
    if score > 85.0 {
        Tier::High
    } else if score >= 70.0 {
        Tier::Mid
    } else {
        Tier::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::fallback_directory;

    fn student(id: &str, score: f64) -> StudentRecord {
        StudentRecord {
            id: id.to_string(),
            name: format!("Student {id}"),
            department: "CSE".to_string(),
            year: "4th Year".to_string(),
            tech_stack: "React/Node.js".to_string(),
            jri_score: score,
            placement_status: Default::default(),
            company: None,
        }
    }

    #[test]
    fn partitions_into_podium_and_ranked_rest() {
        let board = rank_students(&fallback_directory());
        let podium: Vec<&str> = board.top.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(podium, vec!["1", "2", "3"]);
        let rest: Vec<(usize, &str)> = board
            .rest
            .iter()
            .map(|r| (r.rank, r.student.id.as_str()))
            .collect();
        assert_eq!(rest, vec![(4, "4"), (5, "5")]);
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let students = vec![
            student("a", 90.0),
            student("b", 88.0),
            student("c", 88.0),
            student("d", 88.0),
        ];
        let board = rank_students(&students);
        let order: Vec<&str> = board
            .top
            .iter()
            .map(|s| s.id.as_str())
            .chain(board.rest.iter().map(|r| r.student.id.as_str()))
            .collect();
        assert_eq!(order, vec!["a", "b", "c", "d"]);

        let reversed = vec![
            student("a", 90.0),
            student("d", 88.0),
            student("c", 88.0),
            student("b", 88.0),
        ];
        let board = rank_students(&reversed);
        let order: Vec<&str> = board
            .top
            .iter()
            .map(|s| s.id.as_str())
            .chain(board.rest.iter().map(|r| r.student.id.as_str()))
            .collect();
        assert_eq!(order, vec!["a", "d", "c", "b"]);
    }

    #[test]
    fn short_directories_fill_the_podium_only() {
        let students = vec![student("a", 80.0), student("b", 95.0)];
        let board = rank_students(&students);
        assert_eq!(board.top.len(), 2);
        assert_eq!(board.top[0].id, "b");
        assert!(board.rest.is_empty());
    }

    #[test]
    fn ranks_are_positional_in_the_filtered_view() {
        let students: Vec<StudentRecord> = (0..6)
            .map(|i| student(&i.to_string(), 100.0 - i as f64))
            .collect();
        let board = rank_students(&students[2..]);
        assert_eq!(board.rest[0].rank, 4);
        assert_eq!(board.rest[0].student.id, "5");
    }

    #[test]
    fn badge_boundaries_are_inclusive_at_seventy() {
        assert_eq!(badge_tier(86.0), Tier::High);
        assert_eq!(badge_tier(85.0), Tier::Mid);
        assert_eq!(badge_tier(70.0), Tier::Mid);
        assert_eq!(badge_tier(69.9), Tier::Low);
    }
}
