use sqlx::PgPool;

/// Every entity table uses a `bigint` primary key.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_pks_are_bigint(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name::TEXT, data_type::TEXT
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert_eq!(rows.len(), 6, "expected six entity tables, got {rows:?}");
    for (table, data_type) in &rows {
        assert_eq!(data_type, "bigint", "{table}.id should be bigint");
    }
}

/// Every table carries `updated_at` and a trigger that maintains it.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_tables_maintain_updated_at(pool: PgPool) {
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT table_name::TEXT
         FROM information_schema.tables
         WHERE table_schema = 'public'
           AND table_type = 'BASE TABLE'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    for (table,) in &tables {
        let (triggers,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM information_schema.triggers
             WHERE event_object_table::TEXT = $1::TEXT
               AND trigger_name::TEXT = 'trg_' || $1::TEXT || '_updated_at'",
        )
        .bind(table)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(triggers, 1, "{table} is missing its updated_at trigger");
    }
}

/// Orders start `UNPAID` / `PROCESSING`.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_order_status_defaults(pool: PgPool) {
    let (payment, order): (String, String) = sqlx::query_as(
        "INSERT INTO store_orders (order_number, menu_item_ids, item_quantities, total_price, total_items)
         VALUES (12345678, '{}', '{}', 0, 0)
         RETURNING payment_status::TEXT, order_status::TEXT",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(payment, "UNPAID");
    assert_eq!(order, "PROCESSING");
}
