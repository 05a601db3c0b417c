//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::{NaiveDate, NaiveTime};
use frontdesk_core::{
  record::{NewCheckin, NewEmployee, NewVisitor},
  store::RecordStore,
};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn new_employee(name: &str, phone: &str) -> NewEmployee {
  NewEmployee {
    name:  name.into(),
    phone: phone.into(),
    email: format!("{}@example.com", name.to_lowercase()),
  }
}

fn date(d: u32) -> NaiveDate { NaiveDate::from_ymd_opt(2026, 10, d).unwrap() }

fn time(h: u32, m: u32) -> NaiveTime { NaiveTime::from_hms_opt(h, m, 0).unwrap() }

fn checkin_for(employee_id: Uuid, name: &str, d: u32, h: u32) -> NewCheckin {
  NewCheckin {
    employee_id,
    employee_name: Some(name.into()),
    checkin_date: date(d),
    checkin_time: time(h, 30),
  }
}

// ─── Employees ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_list_employees() {
  let s = store().await;
  let asha = s.insert_employee(new_employee("Asha", "9876543210")).await.unwrap();
  s.insert_employee(new_employee("Ravi", "9123456780")).await.unwrap();

  let all = s.list_employees().await.unwrap();
  assert_eq!(all.len(), 2);
  assert!(all.iter().any(|e| e == &asha));
}

#[tokio::test]
async fn find_by_phone_is_exact() {
  let s = store().await;
  s.insert_employee(new_employee("Asha", "9876543210")).await.unwrap();
  s.insert_employee(new_employee("Ravi", "9123456780")).await.unwrap();

  let found = s.find_employees_by_phone("9876543210").await.unwrap();
  assert_eq!(found.len(), 1);
  assert_eq!(found[0].name, "Asha");

  assert!(s.find_employees_by_phone("987654321").await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_phones_are_accepted_and_all_returned() {
  let s = store().await;
  s.insert_employee(new_employee("Asha", "9876543210")).await.unwrap();
  s.insert_employee(new_employee("Anil", "9876543210")).await.unwrap();

  let found = s.find_employees_by_phone("9876543210").await.unwrap();
  assert_eq!(found.len(), 2);
}

#[tokio::test]
async fn delete_reports_whether_a_row_went() {
  let s = store().await;
  let asha = s.insert_employee(new_employee("Asha", "9876543210")).await.unwrap();
  let ravi = s.insert_employee(new_employee("Ravi", "9123456780")).await.unwrap();

  assert!(s.delete_employee(asha.id).await.unwrap());
  assert!(!s.delete_employee(asha.id).await.unwrap());
  assert!(!s.delete_employee(Uuid::new_v4()).await.unwrap());

  let left = s.list_employees().await.unwrap();
  assert_eq!(left, vec![ravi]);
}

// ─── Visitors ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn visitor_round_trips_through_columns() {
  let s = store().await;
  let v = s
    .insert_visitor(NewVisitor {
      name:         "Meera".into(),
      phone:        "1234500000".into(),
      whom_to_meet: "Asha".into(),
      purpose:      "Delivery".into(),
      checkin_date: date(14),
      checkin_time: time(10, 5),
    })
    .await
    .unwrap();

  let all = s.list_visitors().await.unwrap();
  assert_eq!(all, vec![v]);
}

// ─── Check-ins ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn checkins_are_newest_first_with_join() {
  let s = store().await;
  let asha = s.insert_employee(new_employee("Asha", "9876543210")).await.unwrap();

  s.insert_checkin(checkin_for(asha.id, "Asha", 13, 9)).await.unwrap();
  s.insert_checkin(checkin_for(asha.id, "Asha", 14, 8)).await.unwrap();
  s.insert_checkin(checkin_for(asha.id, "Asha", 14, 17)).await.unwrap();

  let rows = s.list_checkins().await.unwrap();
  let order: Vec<(NaiveDate, NaiveTime)> = rows
    .iter()
    .map(|r| (r.checkin.checkin_date, r.checkin.checkin_time))
    .collect();
  assert_eq!(order, vec![
    (date(14), time(17, 30)),
    (date(14), time(8, 30)),
    (date(13), time(9, 30)),
  ]);
  assert!(rows.iter().all(|r| r.display_phone() == "9876543210"));
}

#[tokio::test]
async fn checkin_outlives_deleted_employee() {
  let s = store().await;
  let ravi = s.insert_employee(new_employee("Ravi", "9123456780")).await.unwrap();
  s.insert_checkin(checkin_for(ravi.id, "Ravi", 14, 9)).await.unwrap();
  s.delete_employee(ravi.id).await.unwrap();

  let rows = s.list_checkins().await.unwrap();
  assert_eq!(rows.len(), 1);
  assert!(rows[0].employee.is_none());
  assert_eq!(rows[0].display_name(), "Ravi");
  assert_eq!(rows[0].display_phone(), "N/A");
}

#[tokio::test]
async fn checkin_without_snapshot_or_employee_is_unknown() {
  let s = store().await;
  s.insert_checkin(NewCheckin {
    employee_id:   Uuid::new_v4(),
    employee_name: None,
    checkin_date:  date(14),
    checkin_time:  time(9, 0),
  })
  .await
  .unwrap();

  let rows = s.list_checkins().await.unwrap();
  assert_eq!(rows[0].display_name(), "Unknown");
}

#[tokio::test]
async fn reopening_a_file_keeps_rows() {
  let dir = std::env::temp_dir().join(format!("frontdesk-{}", Uuid::new_v4()));
  std::fs::create_dir_all(&dir).unwrap();
  let path = dir.join("frontdesk.db");

  {
    let s = SqliteStore::open(&path).await.unwrap();
    s.insert_employee(new_employee("Asha", "9876543210")).await.unwrap();
  }
  let s = SqliteStore::open(&path).await.unwrap();
  assert_eq!(s.list_employees().await.unwrap().len(), 1);

  drop(s);
  std::fs::remove_dir_all(&dir).ok();
}
