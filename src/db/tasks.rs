//! SQLite-backed store for task records.
//!
//! The store owns the `tasks` table: all writes go through the
//! operations here, every operation runs as one short-lived transaction
//! on the store's own connection, and a failed call leaves the table
//! untouched. Callers get value snapshots, never handles into storage.

use super::db::Db;
use crate::libs::error::TaskError;
use crate::libs::projection::TaskStats;
use crate::libs::task::{validate_description, validate_title, Task, TaskPatch, TaskStatus};
use anyhow::Result;
use chrono::Local;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::PathBuf;

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    status TEXT NOT NULL DEFAULT 'incomplete',
    created_at TIMESTAMP NOT NULL,
    updated_at TIMESTAMP NOT NULL
)";
const INSERT_TASK: &str = "INSERT INTO tasks (title, description, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_TASK_BY_ID: &str = "SELECT id, title, description, status, created_at, updated_at FROM tasks WHERE id = ?1";
const SELECT_ALL_TASKS: &str = "SELECT id, title, description, status, created_at, updated_at FROM tasks ORDER BY id";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?2, description = ?3, status = ?4, updated_at = ?5 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const COUNT_TASKS: &str = "SELECT COUNT(*) FROM tasks";
const COUNT_COMPLETE: &str = "SELECT COUNT(*) FROM tasks WHERE status = 'complete'";

pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    /// Opens the store at the configured database location.
    pub fn new() -> Result<Tasks> {
        Self::from_db(Db::new()?)
    }

    /// Opens the store at an explicit database file.
    pub fn open(db_file_path: PathBuf) -> Result<Tasks> {
        Self::from_db(Db::open(db_file_path)?)
    }

    fn from_db(db: Db) -> Result<Tasks> {
        db.conn.execute(SCHEMA_TASKS, [])?;
        Ok(Tasks { conn: db.conn })
    }

    /// Validates and persists a new task, returning the stored record.
    /// The title is trimmed; creation assigns the next id, sets the
    /// status to incomplete and stamps both timestamps with the same
    /// instant.
    pub fn create(&mut self, title: &str, description: Option<&str>) -> Result<Task, TaskError> {
        let title = validate_title(title)?;
        let description = validate_description(description.unwrap_or(""))?;
        let now = Local::now().naive_local();

        let tx = self.conn.transaction()?;
        tx.execute(INSERT_TASK, params![title, description, TaskStatus::Incomplete, now, now])?;
        let id = tx.last_insert_rowid();
        let task = tx.query_row(SELECT_TASK_BY_ID, params![id], map_task)?;
        tx.commit()?;

        Ok(task)
    }

    /// Returns the stored record for `id`.
    pub fn get(&mut self, id: i64) -> Result<Task, TaskError> {
        self.conn
            .query_row(SELECT_TASK_BY_ID, params![id], map_task)
            .optional()?
            .ok_or(TaskError::NotFound(id))
    }

    /// Every stored task, in stable id order. Presentation ordering is
    /// the projection layer's job, not this one's.
    pub fn fetch(&mut self) -> Result<Vec<Task>, TaskError> {
        let mut stmt = self.conn.prepare(SELECT_ALL_TASKS)?;
        let task_iter = stmt.query_map([], map_task)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }

        Ok(tasks)
    }

    /// Applies a partial update. The record must exist before the new
    /// field values are checked, and a validation failure rolls the
    /// whole operation back. An empty patch returns the current record
    /// unchanged.
    pub fn update(&mut self, id: i64, patch: &TaskPatch) -> Result<Task, TaskError> {
        let tx = self.conn.transaction()?;
        let mut task = tx
            .query_row(SELECT_TASK_BY_ID, params![id], map_task)
            .optional()?
            .ok_or(TaskError::NotFound(id))?;

        if patch.is_empty() {
            return Ok(task);
        }

        if let Some(title) = &patch.title {
            task.title = validate_title(title)?;
        }
        if let Some(description) = &patch.description {
            task.description = validate_description(description)?;
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        task.updated_at = Local::now().naive_local();

        tx.execute(UPDATE_TASK, params![task.id, task.title, task.description, task.status, task.updated_at])?;
        tx.commit()?;

        Ok(task)
    }

    /// Removes the record. Repeated deletions of the same id report
    /// `NotFound` rather than failing differently.
    pub fn delete(&mut self, id: i64) -> Result<(), TaskError> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        if affected == 0 {
            return Err(TaskError::NotFound(id));
        }
        Ok(())
    }

    /// Store-wide counts. `incomplete` is derived from the other two, so
    /// the three figures always add up.
    pub fn count_by_status(&mut self) -> Result<TaskStats, TaskError> {
        let total: i64 = self.conn.query_row(COUNT_TASKS, [], |row| row.get(0))?;
        let complete: i64 = self.conn.query_row(COUNT_COMPLETE, [], |row| row.get(0))?;

        Ok(TaskStats {
            total,
            complete,
            incomplete: total - complete,
        })
    }
}


fn map_task(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        status: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}
