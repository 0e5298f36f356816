use super::file::ProjectSnapshot;
use super::{PersistenceResult, ProjectStore};
use crate::project::Project;
use rusqlite::{Connection, OptionalExtension, params};
use std::sync::Mutex;

/// Single-project store: one metadata row, one state row, both JSON payloads.
pub struct SqliteProjectStore {
    connection: Mutex<Connection>,
}

impl SqliteProjectStore {
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> PersistenceResult<Self> {
        let connection = Connection::open(path)?;
        Self::initialize_schema(&connection)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn initialize_schema(connection: &Connection) -> PersistenceResult<()> {
        let ddl = r#"
            CREATE TABLE IF NOT EXISTS project (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                project_json TEXT NOT NULL
            );
        "#;
        connection.execute_batch(ddl)?;
        Ok(())
    }
}

impl ProjectStore for SqliteProjectStore {
    fn save_project(&self, project: &Project) -> PersistenceResult<()> {
        super::validate_project(project)?;
        let json = serde_json::to_string(&ProjectSnapshot::from_project(project))?;
        let mut conn = self.connection.lock().expect("sqlite mutex poisoned");
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM project", [])?;
        tx.execute(
            "INSERT INTO project (id, project_json) VALUES (1, ?1)",
            params![json],
        )?;
        tx.commit()?;
        Ok(())
    }

    fn load_project(&self) -> PersistenceResult<Option<Project>> {
        let conn = self.connection.lock().expect("sqlite mutex poisoned");
        let mut stmt = conn.prepare("SELECT project_json FROM project WHERE id = 1")?;
        let json_opt: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;

        let Some(json) = json_opt else {
            return Ok(None);
        };

        let snapshot: ProjectSnapshot = serde_json::from_str(&json)?;
        Ok(Some(snapshot.into_project()?))
    }
}
