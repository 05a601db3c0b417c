//! SQL schema for the Frontdesk SQLite store.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS employees (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    phone       TEXT NOT NULL,   -- lookup key for check-in; not unique
    email       TEXT NOT NULL,
    created_at  TEXT NOT NULL    -- RFC 3339 UTC
);

-- Append-only. employee_id carries no foreign key so that rows outlive a
-- deleted employee and fall back to the employee_name snapshot.
CREATE TABLE IF NOT EXISTS employee_checkins (
    id             TEXT PRIMARY KEY,
    employee_id    TEXT NOT NULL,
    employee_name  TEXT,
    checkin_date   TEXT NOT NULL,   -- YYYY-MM-DD
    checkin_time   TEXT NOT NULL    -- HH:MM:SS
);

-- Append-only.
CREATE TABLE IF NOT EXISTS visitors (
    id             TEXT PRIMARY KEY,
    name           TEXT NOT NULL,
    phone          TEXT NOT NULL,
    whom_to_meet   TEXT NOT NULL DEFAULT '',
    purpose        TEXT NOT NULL DEFAULT '',
    checkin_date   TEXT NOT NULL,
    checkin_time   TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS employees_phone_idx  ON employees(phone);
CREATE INDEX IF NOT EXISTS checkins_order_idx   ON employee_checkins(checkin_date, checkin_time);

PRAGMA user_version = 1;
";
