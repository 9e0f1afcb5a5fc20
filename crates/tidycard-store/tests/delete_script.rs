use chrono::NaiveDate;
use rusqlite::Connection;
use tempfile::TempDir;
use tidycard_core::ContactRecord;
use tidycard_store::DeleteScript;

fn seeded_connection() -> Connection {
    let conn = Connection::open_in_memory().expect("open in memory");
    conn.execute_batch(
        "CREATE TABLE \"Contactos\" (id INTEGER PRIMARY KEY, \"phoneNumber\" TEXT);
         CREATE TABLE \"IA_CRM_Clientes\" (id INTEGER PRIMARY KEY, \"phoneNumber\" TEXT);
         INSERT INTO \"Contactos\" (\"phoneNumber\") VALUES
           ('+573001112233'), ('+573004445566'), ('+573007778899'), ('+57300''1');
         INSERT INTO \"IA_CRM_Clientes\" (\"phoneNumber\") VALUES
           ('+573001112233'), ('+573007778899');",
    )
    .expect("seed");
    conn
}

fn count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM \"{table}\""), [], |row| {
        row.get(0)
    })
    .expect("count")
}

fn script() -> DeleteScript {
    DeleteScript::new(
        "numeros_a_eliminar",
        "phoneNumber",
        &["Contactos".to_string(), "IA_CRM_Clientes".to_string()],
        2,
    )
    .expect("script")
}

fn generated_at() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 7, 1)
        .and_then(|date| date.and_hms_opt(8, 0, 0))
        .expect("timestamp")
}

#[test]
fn script_deletes_removed_numbers_from_every_table() {
    let conn = seeded_connection();
    let removed = vec![
        ContactRecord::new(Some("Ana"), "+573001112233", None),
        ContactRecord::new(Some("Caro"), "+573007778899", None),
        ContactRecord::new(None, "+57300'1", None),
    ];

    conn.execute_batch(&script().render(&removed, generated_at()))
        .expect("run script");

    assert_eq!(count(&conn, "Contactos"), 1);
    assert_eq!(count(&conn, "IA_CRM_Clientes"), 0);
    let survivor: String = conn
        .query_row("SELECT \"phoneNumber\" FROM \"Contactos\"", [], |row| {
            row.get(0)
        })
        .expect("survivor");
    assert_eq!(survivor, "+573004445566");
}

#[test]
fn empty_script_leaves_tables_untouched() {
    let conn = seeded_connection();
    conn.execute_batch(&script().render(&[], generated_at()))
        .expect("run script");
    assert_eq!(count(&conn, "Contactos"), 4);
    assert_eq!(count(&conn, "IA_CRM_Clientes"), 2);
}

#[test]
fn script_is_written_to_disk() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("sql").join("limpiar.sql");
    let removed = vec![ContactRecord::new(Some("Beto"), "+573004445566", None)];

    script()
        .write(&path, &removed, generated_at())
        .expect("write script");

    let conn = seeded_connection();
    let sql = std::fs::read_to_string(&path).expect("read script");
    conn.execute_batch(&sql).expect("run script");
    assert_eq!(count(&conn, "Contactos"), 3);
}
