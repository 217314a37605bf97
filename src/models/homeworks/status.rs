//! 作业分配状态引擎
//!
//! 服务端落库的状态是权威值，本模块只根据当前时间对 Pending 状态做展示层细化
//! （截止后显示 Overdue），绝不改写 Submitted/Late/Graded。
//! 学生列表、学生详情、教师详情共用这一份映射。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::StudyHubError;

// 作业分配的权威生命周期状态，由后端在提交/评分时写入
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub enum AssignmentStatus {
    Pending,   // 已分配未提交
    Submitted, // 截止前提交
    Late,      // 截止后提交
    Graded,    // 教师已评分
}

impl AssignmentStatus {
    pub const PENDING: &'static str = "pending";
    pub const SUBMITTED: &'static str = "submitted";
    pub const LATE: &'static str = "late";
    pub const GRADED: &'static str = "graded";

    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Pending => Self::PENDING,
            AssignmentStatus::Submitted => Self::SUBMITTED,
            AssignmentStatus::Late => Self::LATE,
            AssignmentStatus::Graded => Self::GRADED,
        }
    }
}

impl<'de> Deserialize<'de> for AssignmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AssignmentStatus {
    type Err = StudyHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::PENDING => Ok(AssignmentStatus::Pending),
            Self::SUBMITTED => Ok(AssignmentStatus::Submitted),
            Self::LATE => Ok(AssignmentStatus::Late),
            Self::GRADED => Ok(AssignmentStatus::Graded),
            _ => Err(StudyHubError::assignment_state(format!(
                "unknown assignment status: '{s}'. expected one of: pending, submitted, late, graded"
            ))),
        }
    }
}

// 展示颜色分类
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub enum StatusCategory {
    Success,
    Info,
    Danger,
    Warning,
}

/// 状态引擎的输出：渲染层需要的全部展示信息
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/homework.ts")]
pub struct StatusPresentation {
    pub label: String,
    pub category: StatusCategory,
    pub is_overdue: bool,
    pub can_submit: bool,
}

/// 推导分配的展示状态
///
/// `now` 由调用方注入，引擎本身不读时钟，纯函数。
/// `grade` 只在 Graded 时拼进标签；未评分的 Graded 记录显示裸标签。
pub fn describe(
    status: &AssignmentStatus,
    due_date: DateTime<Utc>,
    grade: Option<&str>,
    now: DateTime<Utc>,
) -> StatusPresentation {
    let is_overdue = now > due_date;

    let (label, category) = match status {
        AssignmentStatus::Submitted => ("Submitted".to_string(), StatusCategory::Success),
        AssignmentStatus::Graded => {
            let label = match grade {
                Some(g) if !g.is_empty() => format!("Graded: {g}"),
                _ => "Graded".to_string(),
            };
            (label, StatusCategory::Info)
        }
        AssignmentStatus::Late => ("Late submission".to_string(), StatusCategory::Danger),
        AssignmentStatus::Pending => {
            if is_overdue {
                ("Overdue".to_string(), StatusCategory::Danger)
            } else {
                ("Not submitted".to_string(), StatusCategory::Warning)
            }
        }
    };

    StatusPresentation {
        label,
        category,
        is_overdue,
        // 只有未截止的 Pending 可以提交；已提交/已迟交/已评分一律不可重交
        can_submit: *status == AssignmentStatus::Pending && !is_overdue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn due() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap()
    }

    fn day_before() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 9, 0, 0, 0).unwrap()
    }

    fn day_after() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 11, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_pending_before_deadline() {
        let p = describe(&AssignmentStatus::Pending, due(), None, day_before());
        assert_eq!(p.label, "Not submitted");
        assert_eq!(p.category, StatusCategory::Warning);
        assert!(!p.is_overdue);
        assert!(p.can_submit);
    }

    #[test]
    fn test_pending_after_deadline() {
        let p = describe(&AssignmentStatus::Pending, due(), None, day_after());
        assert_eq!(p.label, "Overdue");
        assert_eq!(p.category, StatusCategory::Danger);
        assert!(p.is_overdue);
        assert!(!p.can_submit);
    }

    #[test]
    fn test_pending_exactly_at_deadline_can_still_submit() {
        // now == due_date 不算逾期
        let p = describe(&AssignmentStatus::Pending, due(), None, due());
        assert!(!p.is_overdue);
        assert!(p.can_submit);
    }

    #[test]
    fn test_submitted_regardless_of_clock() {
        for now in [day_before(), day_after()] {
            let p = describe(&AssignmentStatus::Submitted, due(), None, now);
            assert_eq!(p.label, "Submitted");
            assert_eq!(p.category, StatusCategory::Success);
            assert!(!p.can_submit);
        }
    }

    #[test]
    fn test_graded_with_grade_includes_grade() {
        let p = describe(&AssignmentStatus::Graded, due(), Some("A"), day_after());
        assert!(p.label.contains('A'));
        assert_eq!(p.category, StatusCategory::Info);
        assert!(!p.can_submit);
    }

    #[test]
    fn test_graded_without_grade_shows_bare_label() {
        let p = describe(&AssignmentStatus::Graded, due(), None, day_after());
        assert_eq!(p.label, "Graded");
        let p = describe(&AssignmentStatus::Graded, due(), Some(""), day_after());
        assert_eq!(p.label, "Graded");
    }

    #[test]
    fn test_late_is_danger_and_locked() {
        let p = describe(&AssignmentStatus::Late, due(), None, day_before());
        assert_eq!(p.label, "Late submission");
        assert_eq!(p.category, StatusCategory::Danger);
        assert!(!p.can_submit);
    }

    #[test]
    fn test_describe_is_pure() {
        let a = describe(&AssignmentStatus::Pending, due(), None, day_after());
        let b = describe(&AssignmentStatus::Pending, due(), None, day_after());
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_status_string_fails() {
        let err = "unknown".parse::<AssignmentStatus>().unwrap_err();
        assert_eq!(err.code(), "E012");
        assert!(err.message().contains("unknown"));
    }

    #[test]
    fn test_status_round_trip() {
        for s in ["pending", "submitted", "late", "graded"] {
            assert_eq!(s.parse::<AssignmentStatus>().unwrap().as_str(), s);
        }
    }
}
