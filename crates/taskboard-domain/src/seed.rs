//! Built-in demo data: the "Website Redesign" board and its team.
//!
//! Seed task ids are fixed (`Uuid::from_u128(n)`) so they can be referenced
//! from scripts and tests across runs.

use chrono::NaiveDate;
use taskboard_core::TaskboardResult;
use uuid::Uuid;

use crate::board::Board;
use crate::task::{Assignee, Task, TaskId, TaskPriority, TaskStatus};
use crate::team::Member;

pub const PROJECT_NAME: &str = "Website Redesign";

pub fn task_id(n: u128) -> TaskId {
    Uuid::from_u128(n)
}

fn avatar(img: u8) -> String {
    format!("https://i.pravatar.cc/150?img={}", img)
}

const MOBILE_APP: &str = "Mobile App";
const DATABASE_MIGRATION: &str = "Database Migration";
const API_DEVELOPMENT: &str = "API Development";
const MARKETING_CAMPAIGN: &str = "Marketing Campaign";

/// Email is derived from the name: `Jane Smith` becomes `jane.smith@example.com`.
fn member(
    id: &str,
    name: &str,
    role: &str,
    img: u8,
    joined: (i32, u32, u32),
    projects: &[&str],
) -> Member {
    let local_part = name.to_lowercase().split_whitespace().collect::<Vec<_>>().join(".");
    Member {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", local_part),
        role: role.to_string(),
        avatar: Some(avatar(img)),
        projects: projects.iter().map(|project| project.to_string()).collect(),
        date_joined: NaiveDate::from_ymd_opt(joined.0, joined.1, joined.2),
    }
}

pub fn team_members() -> Vec<Member> {
    vec![
        member("1", "Jane Smith", "Designer", 1, (2023, 1, 15), &[PROJECT_NAME, MOBILE_APP]),
        member(
            "2",
            "John Doe",
            "Developer",
            2,
            (2023, 2, 20),
            &[PROJECT_NAME, DATABASE_MIGRATION, API_DEVELOPMENT],
        ),
        member(
            "3",
            "Alice Johnson",
            "Project Manager",
            3,
            (2022, 11, 5),
            &[PROJECT_NAME, MOBILE_APP, MARKETING_CAMPAIGN],
        ),
        member("4", "Bob Wilson", "QA Engineer", 4, (2023, 3, 10), &[PROJECT_NAME, MOBILE_APP]),
        member(
            "5",
            "Emma Davis",
            "Developer",
            5,
            (2023, 1, 25),
            &[DATABASE_MIGRATION, API_DEVELOPMENT],
        ),
        member(
            "6",
            "Michael Brown",
            "Designer",
            8,
            (2023, 4, 15),
            &[MOBILE_APP, MARKETING_CAMPAIGN],
        ),
    ]
}

fn assignee(id: &str, name: &str, img: u8) -> Assignee {
    Assignee::new(id, name).with_avatar(avatar(img))
}

fn seed_task(
    n: u128,
    title: &str,
    description: &str,
    assignee: Assignee,
    due: (i32, u32, u32),
    priority: TaskPriority,
    status: TaskStatus,
) -> Task {
    let mut task = Task::with_id(task_id(n), title, status)
        .with_description(description)
        .with_assignee(assignee)
        .with_priority(priority);
    task.due_date = NaiveDate::from_ymd_opt(due.0, due.1, due.2);
    task
}

/// Seven tasks in column order: three To Do, two In Progress, two Done.
pub fn website_redesign_tasks() -> Vec<Task> {
    let jane = assignee("1", "Jane Smith", 1);
    let john = assignee("2", "John Doe", 2);
    let alice = assignee("3", "Alice Johnson", 3);
    let bob = assignee("4", "Bob Wilson", 4);

    vec![
        seed_task(
            1,
            "Design homepage wireframe",
            "Create initial wireframes for the new homepage layout",
            jane.clone(),
            (2023, 11, 10),
            TaskPriority::High,
            TaskStatus::ToDo,
        ),
        seed_task(
            2,
            "Create style guide",
            "Define colors, typography, and component styles",
            jane,
            (2023, 11, 15),
            TaskPriority::Medium,
            TaskStatus::ToDo,
        ),
        seed_task(
            5,
            "Browser testing",
            "Test website in multiple browsers for compatibility",
            bob,
            (2023, 12, 5),
            TaskPriority::Medium,
            TaskStatus::ToDo,
        ),
        seed_task(
            3,
            "Implement user authentication",
            "Set up login, registration, and password reset functionality",
            john.clone(),
            (2023, 11, 20),
            TaskPriority::High,
            TaskStatus::InProgress,
        ),
        seed_task(
            4,
            "Develop responsive navbar",
            "Create a mobile-friendly navigation menu",
            john.clone(),
            (2023, 11, 18),
            TaskPriority::Medium,
            TaskStatus::InProgress,
        ),
        seed_task(
            6,
            "Project setup",
            "Initialize repository and set up development environment",
            john,
            (2023, 10, 25),
            TaskPriority::High,
            TaskStatus::Done,
        ),
        seed_task(
            7,
            "Requirements gathering",
            "Collect and document project requirements",
            alice,
            (2023, 10, 30),
            TaskPriority::High,
            TaskStatus::Done,
        ),
    ]
}

pub fn website_redesign_board() -> TaskboardResult<Board> {
    Board::initialize(website_redesign_tasks())
}
