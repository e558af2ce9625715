use chrono::NaiveDate;
use std::path::Path;
use taskboard_core::{TaskboardError, TaskboardResult};
use taskboard_domain::seed;
use taskboard_domain::{
    load_task_file, Board, DragController, DragEffect, DragEvent, Member, SessionManager,
};

/// Everything one invocation works against. Nothing outlives the process.
pub struct CliContext {
    pub board: Board,
    pub session: SessionManager,
    pub team: Vec<Member>,
    pub today: NaiveDate,
    controller: DragController,
}

impl CliContext {
    /// Builds the board from `tasks_file`, or from the seed board when none is given.
    pub fn load(tasks_file: Option<&Path>, today: NaiveDate) -> TaskboardResult<Self> {
        let board = match tasks_file {
            Some(path) => {
                tracing::info!("Loading tasks from {}", path.display());
                Board::initialize(load_task_file(path)?)?
            }
            None => seed::website_redesign_board()?,
        };

        Ok(Self {
            board,
            session: SessionManager::with_mock_accounts(),
            team: seed::team_members(),
            today,
            controller: DragController::new(),
        })
    }

    pub fn login(&mut self, email: &str, password: &str) -> TaskboardResult<()> {
        self.session.login(email, password)?;
        Ok(())
    }

    pub fn require_admin(&self, action: &str) -> TaskboardResult<()> {
        self.session.require_admin(action)
    }

    pub fn find_member(&self, id: &str) -> TaskboardResult<&Member> {
        self.team
            .iter()
            .find(|member| member.id == id)
            .ok_or_else(|| TaskboardError::NotFound(format!("team member {}", id)))
    }

    pub fn dispatch(&mut self, event: DragEvent) -> TaskboardResult<DragEffect> {
        self.controller.dispatch(&mut self.board, event)
    }
}
