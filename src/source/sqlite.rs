//! SQLite record source over the local personnel database file.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, Row, params};
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    ApprovalState, EmployeeRecord, EmployeeStatus, LeaveInterval, SickLeaveRecord,
};

use super::RecordSource;

const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    employee_number TEXT UNIQUE,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    birth_date TEXT,
    hire_date TEXT,
    department TEXT,
    status TEXT NOT NULL DEFAULT 'active',
    vacation_days_per_year INTEGER
);

CREATE TABLE IF NOT EXISTS vacation (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    employee_id INTEGER NOT NULL REFERENCES employees (id),
    start_date TEXT NOT NULL,
    end_date TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'requested'
);

CREATE TABLE IF NOT EXISTS sick_leave (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    employee_id INTEGER NOT NULL REFERENCES employees (id),
    start_date TEXT NOT NULL,
    end_date TEXT NOT NULL,
    medical_certificate INTEGER NOT NULL DEFAULT 0
);
";

const EMPLOYEE_COLUMNS: &str = "id, employee_number, first_name, last_name, birth_date, \
     hire_date, department, status, vacation_days_per_year";

const LEAVE_SELECT: &str = "SELECT v.id, v.employee_id, e.first_name, e.last_name, \
     v.start_date, v.end_date, v.status \
     FROM vacation v JOIN employees e ON v.employee_id = e.id";

/// A record source reading from a SQLite database file.
///
/// Tables are created on open if they do not exist yet. Status codes and
/// dates are read as stored and interpreted in Rust, so active employees and
/// upcoming leave follow the same rules as for any other source.
///
/// # Example
///
/// ```
/// use staff_calendar::source::{RecordSource, SqliteSource};
///
/// let source = SqliteSource::open_memory().unwrap();
/// assert!(source.list_employees().unwrap().is_empty());
/// ```
pub struct SqliteSource {
    conn: Mutex<Connection>,
}

impl SqliteSource {
    /// Opens (or creates) the database file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(EngineError::source_unavailable)?;
        }
        let conn = Connection::open(path)?;
        info!(path = %path.display(), "Opened personnel database");
        Self::init(conn)
    }

    /// Opens a private in-memory database.
    pub fn open_memory() -> EngineResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> EngineResult<Self> {
        conn.execute_batch(CREATE_TABLES)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> EngineResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| EngineError::source_unavailable("database lock poisoned"))
    }

    /// Inserts an employee and returns the stored record with its new id.
    pub fn insert_employee(&self, employee: &EmployeeRecord) -> EngineResult<EmployeeRecord> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO employees (employee_number, first_name, last_name, birth_date, \
             hire_date, department, status, vacation_days_per_year) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                employee.employee_number,
                employee.first_name,
                employee.last_name,
                employee.birth_date,
                employee.hire_date,
                employee.department,
                employee.status.as_str(),
                employee.vacation_days_per_year,
            ],
        )?;
        let id = conn.last_insert_rowid();
        debug!(employee_id = id, "Inserted employee");
        Ok(EmployeeRecord {
            id,
            ..employee.clone()
        })
    }

    /// Inserts a vacation interval for an existing employee and returns its id.
    pub fn insert_leave(
        &self,
        employee_id: i64,
        start_date: &str,
        end_date: &str,
        status: ApprovalState,
    ) -> EngineResult<i64> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO vacation (employee_id, start_date, end_date, status) \
             VALUES (?1, ?2, ?3, ?4)",
            params![employee_id, start_date, end_date, status.as_str()],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Inserts a sick-leave record and returns its id.
    pub fn insert_sick_leave(
        &self,
        employee_id: i64,
        start_date: &str,
        end_date: &str,
        medical_certificate: bool,
    ) -> EngineResult<i64> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO sick_leave (employee_id, start_date, end_date, medical_certificate) \
             VALUES (?1, ?2, ?3, ?4)",
            params![employee_id, start_date, end_date, medical_certificate],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Sets an employee's status.
    pub fn set_employee_status(&self, id: i64, status: EmployeeStatus) -> EngineResult<()> {
        let conn = self.lock()?;
        let changed = conn.execute(
            "UPDATE employees SET status = ?1 WHERE id = ?2",
            params![status.as_str(), id],
        )?;
        if changed == 0 {
            return Err(EngineError::EmployeeNotFound { id });
        }
        info!(employee_id = id, status = status.as_str(), "Changed employee status");
        Ok(())
    }
}

fn employee_from_row(row: &Row<'_>) -> rusqlite::Result<EmployeeRecord> {
    Ok(EmployeeRecord {
        id: row.get(0)?,
        employee_number: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        birth_date: row.get(4)?,
        hire_date: row.get(5)?,
        department: row.get(6)?,
        status: EmployeeStatus::from_code(&row.get::<_, String>(7)?),
        vacation_days_per_year: row.get(8)?,
    })
}

fn leave_from_row(row: &Row<'_>) -> rusqlite::Result<LeaveInterval> {
    Ok(LeaveInterval {
        id: row.get(0)?,
        employee_id: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        start_date: row.get(4)?,
        end_date: row.get(5)?,
        status: ApprovalState::from_code(&row.get::<_, String>(6)?),
    })
}

impl RecordSource for SqliteSource {
    fn list_employees(&self) -> EngineResult<Vec<EmployeeRecord>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM employees ORDER BY last_name, first_name",
            EMPLOYEE_COLUMNS
        ))?;
        let employees = stmt
            .query_map([], employee_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(employees)
    }

    fn find_employee(&self, id: i64) -> EngineResult<Option<EmployeeRecord>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM employees WHERE id = ?1",
            EMPLOYEE_COLUMNS
        ))?;
        let mut rows = stmt.query([id])?;
        match rows.next()? {
            Some(row) => Ok(Some(employee_from_row(row)?)),
            None => Ok(None),
        }
    }

    fn list_leave(&self) -> EngineResult<Vec<LeaveInterval>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("{} ORDER BY v.start_date", LEAVE_SELECT))?;
        let leave = stmt
            .query_map([], leave_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(leave)
    }

    fn list_sick_leave(&self) -> EngineResult<Vec<SickLeaveRecord>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, employee_id, start_date, end_date, medical_certificate \
             FROM sick_leave ORDER BY start_date",
        )?;
        let records = stmt
            .query_map([], |row| {
                Ok(SickLeaveRecord {
                    id: row.get(0)?,
                    employee_id: row.get(1)?,
                    start_date: row.get(2)?,
                    end_date: row.get(3)?,
                    medical_certificate: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }
}
