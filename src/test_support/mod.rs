#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod fixtures {
    use crate::api::{AttendanceRecord, Task, TaskStatus};
    use chrono::{NaiveDate, NaiveDateTime};

    pub fn pending_task(id: &str, title: &str) -> Task {
        Task {
            id: id.into(),
            title: title.into(),
            description: None,
            status: TaskStatus::Pending,
        }
    }

    pub fn completed_task(id: &str, title: &str) -> Task {
        Task {
            status: TaskStatus::Completed,
            ..pending_task(id, title)
        }
    }

    pub fn described_task(id: &str, title: &str, description: &str) -> Task {
        Task {
            description: Some(description.into()),
            ..pending_task(id, title)
        }
    }

    pub fn closed_attendance(id: &str) -> AttendanceRecord {
        AttendanceRecord {
            id: id.into(),
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            check_in_time: parse_ts("2025-03-01T09:00:00"),
            check_out_time: parse_ts("2025-03-01T17:30:00"),
            working_hours: Some(8.5),
        }
    }

    pub fn open_attendance(id: &str) -> AttendanceRecord {
        AttendanceRecord {
            id: id.into(),
            date: NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
            check_in_time: parse_ts("2025-03-02T09:15:00"),
            check_out_time: None,
            working_hours: None,
        }
    }

    fn parse_ts(s: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").ok()
    }
}
