//! Repository tests against an in-memory SQLite store.

use sea_orm::prelude::{DateTimeWithTimeZone, Decimal};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbBackend};

use super::repository::Repository;
use super::schema::table_statement;
use super::{create_tables, get_table_counts, get_version};
use crate::entities::prelude::*;
use crate::entities::sea_orm_active_enums::Gender;
use crate::models::*;

/// Fresh store with every table created. One connection, so the in-memory
/// database lives as long as the pool.
pub(crate) async fn memory_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.unwrap();
    create_tables(&db).await.unwrap();
    db
}

fn ts(value: &str) -> DateTimeWithTimeZone {
    DateTimeWithTimeZone::parse_from_rfc3339(value).unwrap()
}

async fn add_country(db: &DatabaseConnection, name: &str) -> i32 {
    let all = Repository::<Countries>::new(db.clone())
        .create(CreateCountryDto { name: name.to_string() })
        .await
        .data
        .unwrap();
    all.iter().find(|c| c.name == name).unwrap().id
}

async fn add_employee(db: &DatabaseConnection, first_name: &str, superior_id: Option<i32>) -> i32 {
    let all = Repository::<Employees>::new(db.clone())
        .create(CreateEmployeeDto {
            first_name: Some(first_name.to_string()),
            superior_id,
            ..Default::default()
        })
        .await
        .data
        .unwrap();
    all.iter()
        .find(|e| e.first_name.as_deref() == Some(first_name))
        .unwrap()
        .id
}

#[tokio::test]
async fn test_get_all_on_empty_table() {
    let db = memory_db().await;

    let response = Repository::<Cities>::new(db.clone()).get_all().await;
    assert!(response.success);
    assert_eq!(response.data, Some(vec![]));

    let response = Repository::<Salaries>::new(db).get_all().await;
    assert!(response.success);
    assert_eq!(response.data, Some(vec![]));
}

#[tokio::test]
async fn test_get_by_id_absent_is_not_a_failure() {
    let db = memory_db().await;
    let response = Repository::<Employees>::new(db).get_by_id(42).await;

    assert!(response.success);
    assert!(response.data.is_none());
    assert!(response.message.is_empty());
}

#[tokio::test]
async fn test_create_adds_exactly_one_row() {
    let db = memory_db().await;
    let repo = Repository::<Countries>::new(db.clone());

    add_country(&db, "Norway").await;
    let response = repo.create(CreateCountryDto { name: "Chile".to_string() }).await;

    assert!(response.success);
    let all = response.data.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().any(|c| c.name == "Chile"));
    assert_eq!(get_table_counts(&db).await.unwrap().countries, 2);
}

#[tokio::test]
async fn test_create_then_get_by_id() {
    let db = memory_db().await;
    let id = add_employee(&db, "Ada", None).await;

    let response = Repository::<Employees>::new(db).get_by_id(id).await;
    let ada = response.data.unwrap();
    assert_eq!(ada.id, id);
    assert_eq!(ada.first_name.as_deref(), Some("Ada"));
    assert_eq!(ada.gender, Gender::Unknown);
}

#[tokio::test]
async fn test_update_absent_leaves_store_unchanged() {
    let db = memory_db().await;
    add_country(&db, "Norway").await;
    let repo = Repository::<Countries>::new(db);

    let response = repo
        .update(UpdateCountryDto {
            id: 999,
            name: "Atlantis".to_string(),
        })
        .await;

    assert!(response.success);
    assert!(response.data.is_none());
    let names: Vec<_> = repo.get_all().await.data.unwrap().into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Norway".to_string()]);
}

#[tokio::test]
async fn test_update_overwrites_every_mutable_field() {
    let db = memory_db().await;
    let norway = add_country(&db, "Norway").await;
    let repo = Repository::<Cities>::new(db);

    let created = repo
        .create(CreateCityDto {
            name: "Oslo".to_string(),
            country_id: Some(norway),
        })
        .await
        .data
        .unwrap();
    let id = created[0].id;

    let response = repo
        .update(UpdateCityDto {
            id,
            name: "Bergen".to_string(),
            country_id: None,
        })
        .await;

    let expected = GetCityDto {
        id,
        name: "Bergen".to_string(),
        country_id: None,
    };
    assert_eq!(response.data, Some(expected.clone()));
    assert_eq!(repo.get_by_id(id).await.data, Some(expected));
}

#[tokio::test]
async fn test_delete_removes_only_that_row() {
    let db = memory_db().await;
    let norway = add_country(&db, "Norway").await;
    let chile = add_country(&db, "Chile").await;

    let response = Repository::<Countries>::new(db).delete(norway).await;

    assert!(response.success);
    let remaining = response.data.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, chile);
}

#[tokio::test]
async fn test_delete_absent_is_a_caught_failure() {
    let db = memory_db().await;
    let response = Repository::<Cities>::new(db).delete(999).await;

    assert!(!response.success);
    assert!(response.data.is_none());
    assert_eq!(response.message, "Not found: City 999");
}

#[tokio::test]
async fn test_delete_referenced_row_is_refused() {
    let db = memory_db().await;
    let norway = add_country(&db, "Norway").await;
    Repository::<Cities>::new(db.clone())
        .create(CreateCityDto {
            name: "Oslo".to_string(),
            country_id: Some(norway),
        })
        .await;

    let repo = Repository::<Countries>::new(db.clone());
    let response = repo.delete(norway).await;

    assert!(!response.success);
    assert!(response.data.is_none());
    assert!(repo.get_by_id(norway).await.data.is_some());
    assert_eq!(get_table_counts(&db).await.unwrap().cities, 1);
}

#[tokio::test]
async fn test_create_with_dangling_reference_fails() {
    let db = memory_db().await;
    let repo = Repository::<Addresses>::new(db.clone());

    let response = repo
        .create(CreateAddressDto {
            street1: Some("1 Main St".to_string()),
            city_id: Some(404),
            ..Default::default()
        })
        .await;

    assert!(!response.success);
    assert!(response.data.is_none());
    assert!(!response.message.is_empty());
    assert_eq!(get_table_counts(&db).await.unwrap().addresses, 0);
}

#[tokio::test]
async fn test_one_to_one_reference_is_unique() {
    let db = memory_db().await;
    let norway = add_country(&db, "Norway").await;
    let repo = Repository::<Cities>::new(db);

    let first = repo
        .create(CreateCityDto {
            name: "Oslo".to_string(),
            country_id: Some(norway),
        })
        .await;
    let second = repo
        .create(CreateCityDto {
            name: "Bergen".to_string(),
            country_id: Some(norway),
        })
        .await;

    assert!(first.success);
    assert!(!second.success);
    assert_eq!(repo.get_all().await.data.map(|all| all.len()), Some(1));
}

#[tokio::test]
async fn test_subordinates_follow_superior_reference() {
    let db = memory_db().await;
    let boss = add_employee(&db, "Grace", None).await;
    let first = add_employee(&db, "Ada", Some(boss)).await;
    let second = add_employee(&db, "Alan", Some(boss)).await;
    add_employee(&db, "Edsger", Some(first)).await;

    let repo = Repository::<Employees>::new(db);

    let ids: Vec<_> = repo
        .subordinates(boss)
        .await
        .data
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![first, second]);

    assert_eq!(repo.subordinates(second).await.data, Some(vec![]));

    let missing = repo.subordinates(999).await;
    assert!(missing.success);
    assert!(missing.data.is_none());
}

#[tokio::test]
async fn test_employee_with_subordinates_cannot_be_deleted() {
    let db = memory_db().await;
    let boss = add_employee(&db, "Grace", None).await;
    add_employee(&db, "Ada", Some(boss)).await;

    let response = Repository::<Employees>::new(db).delete(boss).await;
    assert!(!response.success);
}

#[tokio::test]
async fn test_salaries_may_overlap() {
    let db = memory_db().await;
    let ada = add_employee(&db, "Ada", None).await;
    let repo = Repository::<Salaries>::new(db.clone());

    for (amount, from) in [(Decimal::new(5000, 0), "2024-06-01T00:00:00+00:00"), (Decimal::new(42005, 1), "2024-01-01T00:00:00+00:00")] {
        let response = repo
            .create(CreateSalaryDto {
                amount,
                from: ts(from),
                to: None,
                employee_id: Some(ada),
            })
            .await;
        assert!(response.success, "{}", response.message);
    }

    let salaries = Repository::<Employees>::new(db).salaries(ada).await.data.unwrap();
    assert_eq!(salaries.len(), 2);
    assert_eq!(salaries[0].amount, Decimal::new(42005, 1));
    assert_eq!(salaries[0].from, ts("2024-01-01T00:00:00+00:00"));
    assert!(salaries.iter().all(|s| s.to.is_none()));
}

#[tokio::test]
async fn test_job_categories_of_employee() {
    let db = memory_db().await;
    let ada = add_employee(&db, "Ada", None).await;
    let alan = add_employee(&db, "Alan", None).await;
    let repo = Repository::<JobCategories>::new(db.clone());

    for (name, employee_id) in [("Engineer", ada), ("Analyst", alan), ("Mentor", ada)] {
        repo.create(CreateJobCategoryDto {
            name: name.to_string(),
            employee_id: Some(employee_id),
        })
        .await;
    }

    let employees = Repository::<Employees>::new(db);
    let names: Vec<_> = employees
        .job_categories(ada)
        .await
        .data
        .unwrap()
        .into_iter()
        .map(|j| j.name)
        .collect();
    assert_eq!(names, vec!["Engineer".to_string(), "Mentor".to_string()]);
    assert!(employees.job_categories(999).await.data.is_none());
}

#[tokio::test]
async fn test_create_tables_is_idempotent() {
    let db = memory_db().await;
    add_country(&db, "Norway").await;

    create_tables(&db).await.unwrap();
    assert_eq!(get_table_counts(&db).await.unwrap().countries, 1);
}

#[tokio::test]
async fn test_create_tables_on_fresh_sqlite_store() {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1);
    let db = Database::connect(opt).await.unwrap();
    create_tables(&db).await.unwrap();

    let counts = get_table_counts(&db).await.unwrap();
    assert_eq!(counts.salaries, 0);
    assert_eq!(counts.job_categories, 0);
}

#[test]
fn test_salary_amount_keeps_declared_precision_on_postgres() {
    let sql = DbBackend::Postgres.build(&table_statement(DbBackend::Postgres, Salaries)).sql;
    assert!(sql.contains("decimal(18, 4)"), "{sql}");
}

#[test]
fn test_salary_table_on_sqlite_keeps_foreign_key() {
    let sql = DbBackend::Sqlite.build(&table_statement(DbBackend::Sqlite, Salaries)).sql;
    assert!(sql.contains("IF NOT EXISTS"), "{sql}");
    assert!(sql.contains("REFERENCES \"employees\""), "{sql}");
    assert!(!sql.contains("18, 4"), "{sql}");
}

#[tokio::test]
async fn test_salary_with_dangling_employee_is_refused() {
    let db = memory_db().await;
    let response = Repository::<Salaries>::new(db.clone())
        .create(CreateSalaryDto {
            amount: Decimal::new(1000, 0),
            from: ts("2024-01-01T00:00:00+00:00"),
            to: None,
            employee_id: Some(404),
        })
        .await;

    assert!(!response.success);
    assert_eq!(get_table_counts(&db).await.unwrap().salaries, 0);
}

#[tokio::test]
async fn test_version_reports_backend() {
    let db = memory_db().await;
    let version = get_version(&db).await.unwrap();
    assert!(version.starts_with("SQLite"), "{version}");
}
