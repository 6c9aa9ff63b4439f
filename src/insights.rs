// Mocked productivity insights
// Deterministic aggregate counts dressed with randomized filler; the split
// is intentional and none of the filler reflects real history

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::commands::common::now;
use crate::models::{Priority, Task};

const DAY_MILLIS: i64 = 86_400_000;

/// Request body accepted by the insights endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightsRequest {
    pub todos: Vec<Task>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedTask {
    pub title: String,
    pub priority: Priority,
    pub dueDate: i64,
    pub folderId: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusHour {
    pub hour: u8,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Productivity {
    pub score: u32,
    pub completed: usize,
    pub total: usize,
    pub weeklyTrend: Vec<u32>,
    pub focusHours: Vec<FocusHour>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightsReport {
    pub suggestedTasks: Vec<SuggestedTask>,
    pub productivity: Productivity,
    pub insights: Vec<Insight>,
}

/// Build the full mocked report for the given task list
pub fn computeInsights(tasks: &[Task]) -> InsightsReport {
    let completed = tasks.iter().filter(|t| t.completed).count();
    let incomplete = tasks.len() - completed;
    let highPriority = tasks
        .iter()
        .filter(|t| !t.completed && t.priority == Priority::High)
        .count();

    // Suggestions target the first task's folder, falling back to Work
    let suggestionFolder = tasks
        .first()
        .map(|t| t.folderId.clone())
        .unwrap_or_else(|| "work".to_string());
    let currentTime = now();

    let suggestedTasks = vec![
        SuggestedTask {
            title: "Review weekly progress".to_string(),
            priority: Priority::Medium,
            dueDate: currentTime + 2 * DAY_MILLIS,
            folderId: suggestionFolder.clone(),
        },
        SuggestedTask {
            title: "Schedule team meeting".to_string(),
            priority: Priority::High,
            dueDate: currentTime + DAY_MILLIS,
            folderId: suggestionFolder.clone(),
        },
        SuggestedTask {
            title: "Prepare monthly report".to_string(),
            priority: Priority::High,
            dueDate: currentTime + 3 * DAY_MILLIS,
            folderId: suggestionFolder,
        },
    ];

    let total = tasks.len();
    let score = if total > 0 {
        ((completed as f64 / total as f64) * 100.0).round() as u32
    } else {
        0
    };

    let mut rng = rand::thread_rng();

    // Last 7 days of completion rates - pure filler
    let weeklyTrend: Vec<u32> = (0..7).map(|_| rng.gen_range(0..100)).collect();

    // Hours the user supposedly completes most tasks in - also filler
    let mut focusHours: Vec<FocusHour> = [(9, 5), (10, 8), (11, 6), (14, 7), (15, 9), (16, 4)]
        .into_iter()
        .map(|(hour, base)| FocusHour {
            hour,
            count: rng.gen_range(0..10) + base,
        })
        .collect();
    focusHours.sort_by(|a, b| b.count.cmp(&a.count));

    let mut insights = vec![
        Insight {
            title: "Peak productivity detected".to_string(),
            description: "You complete most tasks between 10 AM and 11 AM. Consider scheduling important work during this time.".to_string(),
            kind: InsightKind::Positive,
        },
        Insight {
            title: "Potential task overload".to_string(),
            description: format!(
                "You have {} incomplete tasks. Consider breaking them down into smaller, more manageable tasks.",
                incomplete
            ),
            kind: InsightKind::Neutral,
        },
    ];

    if incomplete > 0 {
        insights.push(Insight {
            title: "Consistent completion pattern".to_string(),
            description: "You've been completing tasks regularly. Keep up the good work!".to_string(),
            kind: InsightKind::Positive,
        });
    }

    if highPriority > 3 {
        insights.push(Insight {
            title: "High priority backlog".to_string(),
            description: "You have several high priority tasks pending. Consider focusing on these first.".to_string(),
            kind: InsightKind::Negative,
        });
    }

    if weeklyTrend[weeklyTrend.len() - 1] > weeklyTrend[0] {
        insights.push(Insight {
            title: "Improving completion rate".to_string(),
            description: "Your task completion rate is trending upward. Great progress!".to_string(),
            kind: InsightKind::Positive,
        });
    }

    InsightsReport {
        suggestedTasks,
        productivity: Productivity {
            score,
            completed,
            total,
            weeklyTrend,
            focusHours,
        },
        insights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(title: &str, completed: bool, priority: Priority) -> Task {
        let mut t = Task::new(
            uuid::Uuid::new_v4().to_string(),
            title.to_string(),
            "work".to_string(),
        );
        t.completed = completed;
        t.priority = priority;
        t
    }

    #[test]
    fn test_empty_list_yields_zero_score() {
        let report = computeInsights(&[]);

        assert_eq!(report.productivity.score, 0);
        assert_eq!(report.productivity.completed, 0);
        assert_eq!(report.productivity.total, 0);
        assert_eq!(report.suggestedTasks.len(), 3);
    }

    #[test]
    fn test_score_is_rounded_completion_percentage() {
        let mut tasks = Vec::new();
        for i in 0..10 {
            tasks.push(task(&format!("t{}", i), i < 7, Priority::Medium));
        }

        let report = computeInsights(&tasks);
        assert_eq!(report.productivity.score, 70);
        assert_eq!(report.productivity.completed, 7);
        assert_eq!(report.productivity.total, 10);
    }

    #[test]
    fn test_filler_has_expected_shape() {
        let report = computeInsights(&[task("a", false, Priority::Medium)]);

        assert_eq!(report.productivity.weeklyTrend.len(), 7);
        assert!(report.productivity.weeklyTrend.iter().all(|v| *v < 100));

        assert_eq!(report.productivity.focusHours.len(), 6);
        let counts: Vec<u32> = report.productivity.focusHours.iter().map(|f| f.count).collect();
        let mut sorted = counts.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(counts, sorted);
    }

    #[test]
    fn test_high_priority_backlog_insight_triggers_above_threshold() {
        let mut tasks: Vec<Task> = (0..4)
            .map(|i| task(&format!("urgent {}", i), false, Priority::High))
            .collect();

        let report = computeInsights(&tasks);
        assert!(report.insights.iter().any(|i| i.title == "High priority backlog"));

        // Completed high-priority tasks do not count toward the backlog
        for t in tasks.iter_mut() {
            t.completed = true;
        }
        let report = computeInsights(&tasks);
        assert!(!report.insights.iter().any(|i| i.title == "High priority backlog"));
    }

    #[test]
    fn test_suggestions_follow_first_task_folder() {
        let mut t = task("a", false, Priority::Medium);
        t.folderId = "personal".to_string();

        let report = computeInsights(&[t]);
        assert!(report.suggestedTasks.iter().all(|s| s.folderId == "personal"));

        let report = computeInsights(&[]);
        assert!(report.suggestedTasks.iter().all(|s| s.folderId == "work"));
    }

    #[test]
    fn test_report_serializes_with_type_tag() {
        let report = computeInsights(&[]);
        let json = serde_json::to_value(&report).unwrap();

        let first = &json["insights"][0];
        assert_eq!(first["type"], "positive");
        assert!(json["productivity"]["weeklyTrend"].is_array());
    }
}
